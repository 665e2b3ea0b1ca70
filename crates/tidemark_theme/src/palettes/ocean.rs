//! Teal and cyan palette.

use super::{token_set, Palette};

pub(super) fn palette() -> Palette {
    Palette {
        name: "ocean".into(),
        base: token_set(BASE),
        light: token_set(LIGHT),
        dark: token_set(DARK),
    }
}

const BASE: &[(&str, &str)] = &[
    ("--tm-radius", "0.75rem"),
    ("--tm-font-sans", "\"Inter\", ui-sans-serif, system-ui, sans-serif"),
    ("--tm-font-mono", "\"JetBrains Mono\", ui-monospace, monospace"),
];

const LIGHT: &[(&str, &str)] = &[
    ("--tm-background", "198 100% 99%"),
    ("--tm-foreground", "200 50% 10%"),
    ("--tm-card", "0 0% 100%"),
    ("--tm-card-foreground", "200 50% 10%"),
    ("--tm-popover", "0 0% 100%"),
    ("--tm-popover-foreground", "200 50% 10%"),
    ("--tm-primary", "199 89% 38%"),
    ("--tm-primary-foreground", "204 100% 97%"),
    ("--tm-secondary", "186 77% 94%"),
    ("--tm-secondary-foreground", "200 50% 10%"),
    ("--tm-muted", "190 45% 94%"),
    ("--tm-muted-foreground", "200 18% 42%"),
    ("--tm-accent", "187 92% 90%"),
    ("--tm-accent-foreground", "200 50% 10%"),
    ("--tm-destructive", "0 84% 60%"),
    ("--tm-destructive-foreground", "204 100% 97%"),
    ("--tm-success", "160 84% 30%"),
    ("--tm-success-foreground", "204 100% 97%"),
    ("--tm-warning", "38 92% 50%"),
    ("--tm-warning-foreground", "200 50% 10%"),
    ("--tm-info", "199 89% 48%"),
    ("--tm-info-foreground", "204 100% 97%"),
    ("--tm-border", "193 33% 88%"),
    ("--tm-input", "193 33% 88%"),
    ("--tm-ring", "199 89% 38%"),
    ("--tm-selection-bg", "187 92% 85%"),
    ("--tm-selection-foreground", "200 50% 10%"),
    ("--tm-overlay", "200 50% 10%"),
    ("--tm-shadow-color", "200 60% 15%"),
    ("--tm-chart-1", "199 89% 48%"),
    ("--tm-chart-2", "173 80% 40%"),
    ("--tm-chart-3", "221 83% 53%"),
    ("--tm-chart-4", "160 84% 39%"),
    ("--tm-chart-5", "262 83% 58%"),
];

const DARK: &[(&str, &str)] = &[
    ("--tm-background", "204 70% 6%"),
    ("--tm-foreground", "186 100% 94%"),
    ("--tm-card", "204 64% 9%"),
    ("--tm-card-foreground", "186 100% 94%"),
    ("--tm-popover", "204 64% 9%"),
    ("--tm-popover-foreground", "186 100% 94%"),
    ("--tm-primary", "198 93% 60%"),
    ("--tm-primary-foreground", "204 80% 10%"),
    ("--tm-secondary", "200 50% 16%"),
    ("--tm-secondary-foreground", "186 100% 94%"),
    ("--tm-muted", "200 50% 14%"),
    ("--tm-muted-foreground", "194 25% 66%"),
    ("--tm-accent", "200 50% 18%"),
    ("--tm-accent-foreground", "186 100% 94%"),
    ("--tm-destructive", "0 63% 31%"),
    ("--tm-destructive-foreground", "186 100% 94%"),
    ("--tm-success", "158 64% 52%"),
    ("--tm-success-foreground", "204 80% 10%"),
    ("--tm-warning", "48 96% 53%"),
    ("--tm-warning-foreground", "26 83% 14%"),
    ("--tm-info", "187 92% 69%"),
    ("--tm-info-foreground", "204 80% 10%"),
    ("--tm-border", "200 50% 16%"),
    ("--tm-input", "200 50% 16%"),
    ("--tm-ring", "198 93% 60%"),
    ("--tm-selection-bg", "200 70% 28%"),
    ("--tm-selection-foreground", "186 100% 94%"),
    ("--tm-overlay", "204 70% 3%"),
    ("--tm-shadow-color", "204 70% 3%"),
    ("--tm-chart-1", "198 93% 60%"),
    ("--tm-chart-2", "173 80% 50%"),
    ("--tm-chart-3", "217 91% 66%"),
    ("--tm-chart-4", "158 64% 52%"),
    ("--tm-chart-5", "262 83% 66%"),
];
