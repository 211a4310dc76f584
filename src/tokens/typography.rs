//! Font family, size, weight, letter-spacing and line-height classifiers

use super::ladder::{first_integer, magnitude, Ladder};

pub const FONT_PRIMARY: &str = "--ddd-font-primary";
pub const FONT_SECONDARY: &str = "--ddd-font-secondary";
pub const FONT_NAVIGATION: &str = "--ddd-font-navigation";

/// Family fragments checked in order; more specific names come first because
/// `roboto slab` and `roboto condensed` both contain `roboto`.
const FONT_FAMILIES: &[(&str, &str)] = &[
    ("roboto condensed", FONT_NAVIGATION),
    ("roboto slab", FONT_SECONDARY),
    ("roboto", FONT_PRIMARY),
    ("franklin gothic medium", FONT_PRIMARY),
    ("tahoma", FONT_PRIMARY),
    ("sans-serif", FONT_PRIMARY),
    ("serif", FONT_SECONDARY),
];

/// Type scale in pixels
pub const FONT_SIZE: Ladder = Ladder::new(
    &[
        (16.0, "--ddd-font-size-4xs"),
        (18.0, "--ddd-font-size-3xs"),
        (20.0, "--ddd-font-size-xxs"),
        (22.0, "--ddd-font-size-xs"),
        (24.0, "--ddd-font-size-s"),
        (28.0, "--ddd-font-size-ms"),
        (32.0, "--ddd-font-size-m"),
        (36.0, "--ddd-font-size-ml"),
        (42.0, "--ddd-font-size-l"),
        (52.0, "--ddd-font-size-xl"),
        (60.0, "--ddd-font-size-xxl"),
        (68.0, "--ddd-font-size-3xl"),
        (76.0, "--ddd-font-size-4xl"),
        (120.0, "--ddd-font-size-type1-s"),
        (170.0, "--ddd-font-size-type1-m"),
    ],
    "--ddd-font-size-type1-l",
);

// The bold step keeps the font-size prefix that existing reports have always shown.
pub const FONT_WEIGHT: Ladder = Ladder::new(
    &[
        (300.0, "--ddd-font-weight-light"),
        (400.0, "--ddd-font-weight-regular"),
        (500.0, "--ddd-font-weight-medium"),
        (700.0, "--ddd-font-size-bold"),
    ],
    "--ddd-font-weight-black",
);

const FONT_WEIGHT_KEYWORDS: &[(&str, &str)] = &[
    ("lighter", "--ddd-font-weight-light"),
    ("normal", "--ddd-font-weight-regular"),
    ("bold", "--ddd-font-weight-bold"),
    ("bolder", "--ddd-font-weight-black"),
];

/// Pixel letter-spacing; `-sm` tokens are 0.5% of the named size, `-lg` tokens 1.5%
pub const LETTER_SPACING: Ladder = Ladder::new(
    &[
        (0.08, "--ddd-ls-16-sm"),
        (0.09, "--ddd-ls-18-sm"),
        (0.1, "--ddd-ls-20-sm"),
        (0.11, "--ddd-ls-22-sm"),
        (0.12, "--ddd-ls-24-sm"),
        (0.14, "--ddd-ls-28-sm"),
        (0.16, "--ddd-ls-32-sm"),
        (0.18, "--ddd-ls-36-sm"),
        (0.2, "--ddd-ls-40-sm"),
        (0.24, "--ddd-ls-48-sm"),
        (0.27, "--ddd-ls-18-lg"),
        (0.28, "--ddd-ls-56-sm"),
        (0.3, "--ddd-ls-20-lg"),
        (0.32, "--ddd-ls-64-sm"),
        (0.33, "--ddd-ls-22-lg"),
        (0.36, "--ddd-ls-72-sm"),
        (0.42, "--ddd-ls-28-lg"),
        (0.48, "--ddd-ls-32-lg"),
        (0.54, "--ddd-ls-36-lg"),
        (0.6, "--ddd-ls-40-lg"),
        (0.72, "--ddd-ls-48-lg"),
        (0.84, "--ddd-ls-56-lg"),
        (0.96, "--ddd-ls-64-lg"),
    ],
    "--ddd-ls-72-lg",
);

/// Percentage line heights
pub const LINE_HEIGHT: Ladder = Ladder::new(
    &[(120.0, "--ddd-lh-120"), (140.0, "--ddd-lh-140")],
    "--ddd-lh-150",
);

/// Font family never goes without a suggestion; unknown stacks map to the primary font
pub fn font_family(value: &str) -> Option<&'static str> {
    let value = value.to_lowercase();
    let token = FONT_FAMILIES
        .iter()
        .find(|(fragment, _)| value.contains(fragment))
        .map(|(_, token)| *token)
        .unwrap_or(FONT_PRIMARY);
    Some(token)
}

pub fn font_size(value: &str) -> Option<&'static str> {
    magnitude(value, "px").map(|px| FONT_SIZE.bucket(px))
}

pub fn font_weight(value: &str) -> Option<&'static str> {
    if let Some(weight) = first_integer(value) {
        return Some(FONT_WEIGHT.bucket(weight));
    }

    let keyword = value.trim().to_lowercase();
    FONT_WEIGHT_KEYWORDS
        .iter()
        .find(|(name, _)| *name == keyword)
        .map(|(_, token)| *token)
}

pub fn letter_spacing(value: &str) -> Option<&'static str> {
    magnitude(value, "px").map(|px| LETTER_SPACING.bucket(px))
}

pub fn line_height(value: &str) -> Option<&'static str> {
    magnitude(value, "%").map(|pct| LINE_HEIGHT.bucket(pct))
}
