//! Default marine-blue palette.

use super::{token_set, Palette};

pub(super) fn palette() -> Palette {
    Palette {
        name: "tidemark".into(),
        base: token_set(BASE),
        light: token_set(LIGHT),
        dark: token_set(DARK),
    }
}

const BASE: &[(&str, &str)] = &[
    ("--tm-radius", "0.5rem"),
    ("--tm-font-sans", "\"Inter\", ui-sans-serif, system-ui, sans-serif"),
    ("--tm-font-mono", "\"JetBrains Mono\", ui-monospace, monospace"),
];

const LIGHT: &[(&str, &str)] = &[
    ("--tm-background", "0 0% 100%"),
    ("--tm-foreground", "222 47% 11%"),
    ("--tm-card", "0 0% 100%"),
    ("--tm-card-foreground", "222 47% 11%"),
    ("--tm-popover", "0 0% 100%"),
    ("--tm-popover-foreground", "222 47% 11%"),
    ("--tm-primary", "221 83% 53%"),
    ("--tm-primary-foreground", "210 40% 98%"),
    ("--tm-secondary", "210 40% 96%"),
    ("--tm-secondary-foreground", "222 47% 11%"),
    ("--tm-muted", "210 40% 96%"),
    ("--tm-muted-foreground", "215 16% 47%"),
    ("--tm-accent", "210 40% 96%"),
    ("--tm-accent-foreground", "222 47% 11%"),
    ("--tm-destructive", "0 84% 60%"),
    ("--tm-destructive-foreground", "210 40% 98%"),
    ("--tm-success", "142 76% 36%"),
    ("--tm-success-foreground", "210 40% 98%"),
    ("--tm-warning", "38 92% 50%"),
    ("--tm-warning-foreground", "222 47% 11%"),
    ("--tm-info", "199 89% 48%"),
    ("--tm-info-foreground", "210 40% 98%"),
    ("--tm-border", "214 32% 91%"),
    ("--tm-input", "214 32% 91%"),
    ("--tm-ring", "221 83% 53%"),
    ("--tm-selection-bg", "213 97% 87%"),
    ("--tm-selection-foreground", "222 47% 11%"),
    ("--tm-overlay", "222 47% 11%"),
    ("--tm-shadow-color", "222 47% 11%"),
    ("--tm-chart-1", "221 83% 53%"),
    ("--tm-chart-2", "172 66% 50%"),
    ("--tm-chart-3", "262 83% 58%"),
    ("--tm-chart-4", "43 96% 56%"),
    ("--tm-chart-5", "0 84% 60%"),
];

const DARK: &[(&str, &str)] = &[
    ("--tm-background", "222 47% 7%"),
    ("--tm-foreground", "210 40% 98%"),
    ("--tm-card", "222 47% 9%"),
    ("--tm-card-foreground", "210 40% 98%"),
    ("--tm-popover", "222 47% 9%"),
    ("--tm-popover-foreground", "210 40% 98%"),
    ("--tm-primary", "217 91% 60%"),
    ("--tm-primary-foreground", "222 47% 11%"),
    ("--tm-secondary", "217 33% 17%"),
    ("--tm-secondary-foreground", "210 40% 98%"),
    ("--tm-muted", "217 33% 17%"),
    ("--tm-muted-foreground", "215 20% 65%"),
    ("--tm-accent", "217 33% 17%"),
    ("--tm-accent-foreground", "210 40% 98%"),
    ("--tm-destructive", "0 63% 31%"),
    ("--tm-destructive-foreground", "210 40% 98%"),
    ("--tm-success", "142 71% 45%"),
    ("--tm-success-foreground", "222 47% 11%"),
    ("--tm-warning", "48 96% 53%"),
    ("--tm-warning-foreground", "26 83% 14%"),
    ("--tm-info", "198 93% 60%"),
    ("--tm-info-foreground", "222 47% 11%"),
    ("--tm-border", "217 33% 17%"),
    ("--tm-input", "217 33% 17%"),
    ("--tm-ring", "217 91% 60%"),
    ("--tm-selection-bg", "224 64% 33%"),
    ("--tm-selection-foreground", "210 40% 98%"),
    ("--tm-overlay", "222 47% 4%"),
    ("--tm-shadow-color", "222 47% 4%"),
    ("--tm-chart-1", "217 91% 60%"),
    ("--tm-chart-2", "172 66% 50%"),
    ("--tm-chart-3", "262 83% 66%"),
    ("--tm-chart-4", "43 96% 64%"),
    ("--tm-chart-5", "0 91% 71%"),
];
