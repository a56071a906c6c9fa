//! Outfit suggestion logic
//!
//! The threshold map is deliberately simple and total: any finite temperature
//! lands in exactly one band.

use serde::{Deserialize, Serialize};

/// Suggestion for temperatures above 25°C.
pub const WARM_OUTFIT: &str = "T-shirt and shorts!";
/// Suggestion for temperatures above 15°C up to and including 25°C.
pub const LIGHT_OUTFIT: &str = "Light jacket and jeans!";
/// Suggestion for temperatures of 15°C and below.
pub const COLD_OUTFIT: &str = "Warm coat and boots!";

/// Map a temperature to a canned outfit suggestion.
///
/// Boundaries are strict: exactly 25.0 suggests the light layer, exactly 15.0
/// the cold-weather outfit.
pub fn simple_suggestion(temp_c: f64) -> &'static str {
    if temp_c > 25.0 {
        WARM_OUTFIT
    } else if temp_c > 15.0 {
        LIGHT_OUTFIT
    } else {
        COLD_OUTFIT
    }
}

/// Outcome of an AI outfit request.
///
/// The advisor never fails its caller: a provider error is carried as a
/// `Warning` the presentation layer can render inline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum OutfitAdvice {
    /// Generated suggestion text, already trimmed
    Suggestion(String),
    /// Diagnostic shown in place of a suggestion
    Warning(String),
}

impl OutfitAdvice {
    pub fn is_warning(&self) -> bool {
        matches!(self, OutfitAdvice::Warning(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warm_band_above_25() {
        assert_eq!(simple_suggestion(25.1), WARM_OUTFIT);
        assert_eq!(simple_suggestion(38.0), WARM_OUTFIT);
    }

    #[test]
    fn light_band_between_15_and_25() {
        assert_eq!(simple_suggestion(20.0), LIGHT_OUTFIT);
        assert_eq!(simple_suggestion(15.1), LIGHT_OUTFIT);
    }

    #[test]
    fn cold_band_at_and_below_15() {
        assert_eq!(simple_suggestion(10.0), COLD_OUTFIT);
        assert_eq!(simple_suggestion(-12.5), COLD_OUTFIT);
    }

    #[test]
    fn boundaries_fall_into_the_lower_band() {
        assert_eq!(simple_suggestion(25.0), LIGHT_OUTFIT);
        assert_eq!(simple_suggestion(15.0), COLD_OUTFIT);
    }

    #[test]
    fn advice_serializes_tagged() {
        let advice = OutfitAdvice::Suggestion("A sweater".to_string());
        let json = serde_json::to_value(&advice).unwrap();
        assert_eq!(json["kind"], "suggestion");
        assert_eq!(json["text"], "A sweater");

        let warning = OutfitAdvice::Warning("AI error: timeout".to_string());
        assert!(warning.is_warning());
    }
}
