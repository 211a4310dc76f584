//! Spacing, radius, border and shadow classifiers

use super::ladder::{magnitude, Ladder};

/// `--ddd-spacing-N` is `4 * N` pixels
pub const SPACING: Ladder = Ladder::new(
    &[
        (0.0, "--ddd-spacing-0"),
        (4.0, "--ddd-spacing-1"),
        (8.0, "--ddd-spacing-2"),
        (12.0, "--ddd-spacing-3"),
        (16.0, "--ddd-spacing-4"),
        (20.0, "--ddd-spacing-5"),
        (24.0, "--ddd-spacing-6"),
        (28.0, "--ddd-spacing-7"),
        (32.0, "--ddd-spacing-8"),
        (36.0, "--ddd-spacing-9"),
        (40.0, "--ddd-spacing-10"),
        (44.0, "--ddd-spacing-11"),
        (48.0, "--ddd-spacing-12"),
        (52.0, "--ddd-spacing-13"),
        (56.0, "--ddd-spacing-14"),
        (60.0, "--ddd-spacing-15"),
        (64.0, "--ddd-spacing-16"),
        (68.0, "--ddd-spacing-17"),
        (72.0, "--ddd-spacing-18"),
        (76.0, "--ddd-spacing-19"),
        (80.0, "--ddd-spacing-20"),
        (84.0, "--ddd-spacing-21"),
        (88.0, "--ddd-spacing-22"),
        (92.0, "--ddd-spacing-23"),
        (96.0, "--ddd-spacing-24"),
        (100.0, "--ddd-spacing-25"),
        (104.0, "--ddd-spacing-26"),
        (108.0, "--ddd-spacing-27"),
        (112.0, "--ddd-spacing-28"),
        (116.0, "--ddd-spacing-29"),
    ],
    "--ddd-spacing-30",
);

pub const RADIUS: Ladder = Ladder::new(
    &[
        (0.0, "--ddd-radius-0"),
        (4.0, "--ddd-radius-xs"),
        (8.0, "--ddd-radius-sm"),
        (12.0, "--ddd-radius-md"),
        (16.0, "--ddd-radius-lg"),
        (20.0, "--ddd-radius-xl"),
    ],
    "--ddd-radius-rounded",
);

pub const RADIUS_CIRCLE: &str = "--ddd-radius-circle";

/// Widths of `border-width` and friends
pub const BORDER_SIZE: Ladder = Ladder::new(
    &[
        (1.0, "--ddd-border-size-xs"),
        (2.0, "--ddd-border-size-sm"),
        (3.0, "--ddd-border-size-md"),
    ],
    "--ddd-border-size-lg",
);

/// Same thresholds as [`BORDER_SIZE`], but the tokens carry style and width
pub const BORDER: Ladder = Ladder::new(
    &[
        (1.0, "--ddd-border-xs"),
        (2.0, "--ddd-border-sm"),
        (3.0, "--ddd-border-md"),
    ],
    "--ddd-border-lg",
);

const SHADOW_SMALL: &[&str] = &[" 1px", " 2px", " 3px", " 4px"];
const SHADOW_MEDIUM: &[&str] = &[" 5px", " 6px", " 7px", " 8px"];
const SHADOW_LARGE: &[&str] = &[" 9px", " 10px", " 11px", " 12px"];
const SHADOW_XL: &[&str] = &[" 13px", " 14px", " 15px", " 16px"];

pub const BOX_SHADOW_TOKENS: [&str; 5] = [
    "--ddd-boxShadow-0",
    "--ddd-boxShadow-sm",
    "--ddd-boxShadow-md",
    "--ddd-boxShadow-lg",
    "--ddd-boxShadow-xl",
];

fn is_bare_zero(value: &str) -> bool {
    value.trim() == "0"
}

pub fn spacing(value: &str) -> Option<&'static str> {
    if is_bare_zero(value) {
        return Some(SPACING.bucket(0.0));
    }
    magnitude(value, "px").map(|px| SPACING.bucket(px))
}

pub fn radius(value: &str) -> Option<&'static str> {
    if is_bare_zero(value) {
        return Some(RADIUS.bucket(0.0));
    }
    if value.contains('%') {
        return match magnitude(value, "%") {
            Some(pct) if pct == 100.0 => Some(RADIUS_CIRCLE),
            _ => None,
        };
    }
    magnitude(value, "px").map(|px| RADIUS.bucket(px))
}

pub fn border(value: &str) -> Option<&'static str> {
    magnitude(value, "px").map(|px| BORDER.bucket(px))
}

pub fn border_thickness(value: &str) -> Option<&'static str> {
    magnitude(value, "px").map(|px| BORDER_SIZE.bucket(px))
}

/// Classify a shadow by the offset/blur sizes it mentions.
///
/// Smaller sets take priority: a shadow mentioning both ` 2px` and ` 10px`
/// reports the small token. A shadow that mentions ` 0px` and none of the
/// four sets maps to the zero token, even when it also has larger sizes such
/// as ` 20px`. Any other pixel value falls through to xl.
pub fn box_shadow(value: &str) -> Option<&'static str> {
    if !value.contains("px") {
        return None;
    }

    let padded = format!(" {}", value.trim());
    let mentions = |set: &[&str]| set.iter().any(|size| padded.contains(size));

    let small = mentions(SHADOW_SMALL);
    let medium = mentions(SHADOW_MEDIUM);
    let large = mentions(SHADOW_LARGE);
    let xl = mentions(SHADOW_XL);

    let [zero_token, small_token, medium_token, large_token, xl_token] = BOX_SHADOW_TOKENS;

    if padded.contains(" 0px") && !(small || medium || large || xl) {
        Some(zero_token)
    } else if small {
        Some(small_token)
    } else if medium {
        Some(medium_token)
    } else if large {
        Some(large_token)
    } else {
        Some(xl_token)
    }
}
