//! Human-readable line-item names.
//!
//! ```text
//! Printed {name} ({volume:.1}cm³, {MATERIAL})
//! ```
//!
//! Fulfillment reads volume and material back out of the name, so the
//! parenthesized suffix is never truncated; only `{name}` gives way to the
//! length limit.

use config::constants::{DEFAULT_ARTIFACT_STEM, MAX_DISPLAY_NAME_CHARS};

use super::text::sanitize_text;
use crate::material::MaterialProfile;

const PREFIX: &str = "Printed ";
const VOLUME_UNIT: &str = "cm³";

/// Builds the display name for a printed item.
///
/// A name that sanitizes to nothing is shown as `UNTITLED`.
///
/// # Examples
/// ```
/// use quote_engine::boundary::display_name;
/// use quote_engine::MaterialProfile;
///
/// assert_eq!(
///     display_name("bracket.stl", 12.345, MaterialProfile::Petg),
///     "Printed bracket.stl (12.3cm³, PETG)"
/// );
/// ```
pub fn display_name(name: &str, volume_cm3: f64, material: MaterialProfile) -> String {
    let suffix = format!(" ({volume_cm3:.1}{VOLUME_UNIT}, {})", material.key());
    let budget = MAX_DISPLAY_NAME_CHARS
        .saturating_sub(PREFIX.chars().count())
        .saturating_sub(suffix.chars().count());
    let mut name = sanitize_text(name, budget);
    if name.is_empty() {
        name = sanitize_text(DEFAULT_ARTIFACT_STEM, budget);
    }
    format!("{PREFIX}{name}{suffix}")
}

/// Volume and material recovered from a display name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayNameParts {
    /// `None` when the name carries no readable volume.
    pub volume_cm3: Option<f64>,
    /// PLA when the name carries no recognized material.
    pub material: MaterialProfile,
}

/// Reads volume and material back from a display name.
///
/// Names that do not follow the display format yield no volume and the
/// fallback material.
pub fn parse_display_name(display_name: &str) -> DisplayNameParts {
    let unknown = DisplayNameParts {
        volume_cm3: None,
        material: MaterialProfile::FALLBACK,
    };

    let Some(inner) = display_name
        .strip_suffix(')')
        .and_then(|rest| rest.rsplit_once(" ("))
        .map(|(_, inner)| inner)
    else {
        return unknown;
    };
    let Some((volume, material)) = inner.split_once(", ") else {
        return unknown;
    };

    DisplayNameParts {
        volume_cm3: volume
            .strip_suffix(VOLUME_UNIT)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite()),
        material: MaterialProfile::from_key(material).unwrap_or(MaterialProfile::FALLBACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_volume_and_material() {
        let name = display_name("gear (v2).stl", 3.04, MaterialProfile::Resin);
        assert_eq!(name, "Printed gear (v2).stl (3.0cm³, RESIN)");
        let parts = parse_display_name(&name);
        assert_eq!(parts.volume_cm3, Some(3.0));
        assert_eq!(parts.material, MaterialProfile::Resin);
    }

    #[test]
    fn long_names_keep_suffix() {
        let name = display_name(&"n".repeat(400), 1.0, MaterialProfile::Pla);
        assert!(name.chars().count() <= MAX_DISPLAY_NAME_CHARS);
        assert!(name.ends_with(" (1.0cm³, PLA)"));
        assert_eq!(parse_display_name(&name).volume_cm3, Some(1.0));
    }

    #[test]
    fn blank_names_become_untitled() {
        for name in ["", "   ", "\u{0}\t\n"] {
            let display = display_name(name, 1.0, MaterialProfile::Pla);
            assert_eq!(display, "Printed UNTITLED (1.0cm³, PLA)");
            assert!(!display.contains("  "));
        }
    }

    #[test]
    fn foreign_names_fall_back() {
        for name in ["Gift card", "Printed thing (lots, ABS)", "x (cm³, )"] {
            let parts = parse_display_name(name);
            assert_eq!(parts.volume_cm3, None);
            assert_eq!(parts.material, MaterialProfile::Pla);
        }
    }
}
