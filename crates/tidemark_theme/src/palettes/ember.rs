//! Warm orange palette.

use super::{token_set, Palette};

pub(super) fn palette() -> Palette {
    Palette {
        name: "ember".into(),
        base: token_set(BASE),
        light: token_set(LIGHT),
        dark: token_set(DARK),
    }
}

const BASE: &[(&str, &str)] = &[
    ("--tm-radius", "0.375rem"),
    ("--tm-font-sans", "\"Public Sans\", ui-sans-serif, system-ui, sans-serif"),
    ("--tm-font-mono", "\"Fira Code\", ui-monospace, monospace"),
];

const LIGHT: &[(&str, &str)] = &[
    ("--tm-background", "30 50% 99%"),
    ("--tm-foreground", "20 40% 12%"),
    ("--tm-card", "0 0% 100%"),
    ("--tm-card-foreground", "20 40% 12%"),
    ("--tm-popover", "0 0% 100%"),
    ("--tm-popover-foreground", "20 40% 12%"),
    ("--tm-primary", "21 90% 48%"),
    ("--tm-primary-foreground", "33 100% 96%"),
    ("--tm-secondary", "30 54% 93%"),
    ("--tm-secondary-foreground", "20 40% 12%"),
    ("--tm-muted", "30 40% 94%"),
    ("--tm-muted-foreground", "22 15% 43%"),
    ("--tm-accent", "27 87% 90%"),
    ("--tm-accent-foreground", "20 40% 12%"),
    ("--tm-destructive", "0 72% 51%"),
    ("--tm-destructive-foreground", "33 100% 96%"),
    ("--tm-success", "142 76% 36%"),
    ("--tm-success-foreground", "33 100% 96%"),
    ("--tm-warning", "32 95% 44%"),
    ("--tm-warning-foreground", "20 40% 12%"),
    ("--tm-info", "199 89% 48%"),
    ("--tm-info-foreground", "33 100% 96%"),
    ("--tm-border", "28 34% 88%"),
    ("--tm-input", "28 34% 88%"),
    ("--tm-ring", "21 90% 48%"),
    ("--tm-selection-bg", "31 97% 83%"),
    ("--tm-selection-foreground", "20 40% 12%"),
    ("--tm-overlay", "20 40% 12%"),
    ("--tm-shadow-color", "20 45% 16%"),
    ("--tm-chart-1", "21 90% 48%"),
    ("--tm-chart-2", "0 72% 51%"),
    ("--tm-chart-3", "43 96% 56%"),
    ("--tm-chart-4", "142 76% 36%"),
    ("--tm-chart-5", "262 83% 58%"),
];

const DARK: &[(&str, &str)] = &[
    ("--tm-background", "20 35% 7%"),
    ("--tm-foreground", "33 100% 96%"),
    ("--tm-card", "20 35% 9%"),
    ("--tm-card-foreground", "33 100% 96%"),
    ("--tm-popover", "20 35% 9%"),
    ("--tm-popover-foreground", "33 100% 96%"),
    ("--tm-primary", "27 96% 61%"),
    ("--tm-primary-foreground", "20 40% 12%"),
    ("--tm-secondary", "22 30% 17%"),
    ("--tm-secondary-foreground", "33 100% 96%"),
    ("--tm-muted", "22 30% 15%"),
    ("--tm-muted-foreground", "27 18% 66%"),
    ("--tm-accent", "22 30% 19%"),
    ("--tm-accent-foreground", "33 100% 96%"),
    ("--tm-destructive", "0 63% 31%"),
    ("--tm-destructive-foreground", "33 100% 96%"),
    ("--tm-success", "142 71% 45%"),
    ("--tm-success-foreground", "20 40% 12%"),
    ("--tm-warning", "43 96% 56%"),
    ("--tm-warning-foreground", "26 83% 14%"),
    ("--tm-info", "198 93% 60%"),
    ("--tm-info-foreground", "20 40% 12%"),
    ("--tm-border", "22 30% 17%"),
    ("--tm-input", "22 30% 17%"),
    ("--tm-ring", "27 96% 61%"),
    ("--tm-selection-bg", "21 77% 26%"),
    ("--tm-selection-foreground", "33 100% 96%"),
    ("--tm-overlay", "20 35% 3%"),
    ("--tm-shadow-color", "20 35% 3%"),
    ("--tm-chart-1", "27 96% 61%"),
    ("--tm-chart-2", "0 91% 71%"),
    ("--tm-chart-3", "43 96% 64%"),
    ("--tm-chart-4", "142 71% 45%"),
    ("--tm-chart-5", "262 83% 66%"),
];
