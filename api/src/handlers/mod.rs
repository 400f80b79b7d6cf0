//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod dasha;
pub mod horoscope;
pub mod matching;

pub use dasha::get_dasha;
pub use horoscope::get_horoscope;
pub use matching::get_match;

use crate::error::DomainError;

/// Take a query parameter that must be present and non-blank
fn required_param(value: Option<String>, hint: &str) -> Result<String, DomainError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| DomainError::MissingRequiredField(hint.to_string()))
}

/// Take an optional query parameter, treating blank as absent
fn optional_param(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_param_rejects_missing_and_blank() {
        assert!(required_param(None, "date").is_err());
        assert!(matches!(
            required_param(Some("  ".into()), "date"),
            Err(DomainError::MissingRequiredField(_))
        ));
        assert_eq!(
            required_param(Some("1998-05-15".into()), "date").unwrap(),
            "1998-05-15"
        );
    }

    #[test]
    fn optional_param_drops_blank() {
        assert_eq!(optional_param(Some(String::new())), None);
        assert_eq!(optional_param(Some("14:30".into())), Some("14:30".into()));
    }
}
