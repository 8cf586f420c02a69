//! Capture-side validation. Runs before a profile is written to its slot.
//!
//! Empty fields are always rejected. In strict mode, values outside the offered
//! options are rejected too; the resolver stays total either way.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::profile::{Interest, Profile, Qualification};

#[derive(Debug, Deserialize)]
pub struct CaptureRequest {
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub interest: String,
}

pub fn validate_capture(req: &CaptureRequest, strict: bool) -> Result<Profile, AppError> {
    let qualification = req.qualification.trim();
    let interest = req.interest.trim();

    if qualification.is_empty() || interest.is_empty() {
        return Err(AppError::Validation(
            "Please complete the form: both qualification and interest area are required."
                .to_string(),
        ));
    }

    if strict {
        if Qualification::from_value(qualification).is_none() {
            return Err(AppError::Validation(format!(
                "Unknown qualification '{qualification}'. Expected one of: {}",
                allowed(Qualification::ALL.iter().map(Qualification::as_str))
            )));
        }
        if Interest::from_value(interest).is_none() {
            return Err(AppError::Validation(format!(
                "Unknown interest '{interest}'. Expected one of: {}",
                allowed(Interest::ALL.iter().map(Interest::as_str))
            )));
        }
    }

    Ok(Profile::new(qualification, interest))
}

fn allowed<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(qualification: &str, interest: &str) -> CaptureRequest {
        CaptureRequest {
            qualification: qualification.to_string(),
            interest: interest.to_string(),
        }
    }

    #[test]
    fn test_trims_and_accepts_known_values() {
        let profile = validate_capture(&req("  Diploma ", "Finance\n"), true).unwrap();
        assert_eq!(profile, Profile::new("Diploma", "Finance"));
    }

    #[test]
    fn test_empty_fields_rejected_in_both_modes() {
        for strict in [true, false] {
            assert!(matches!(
                validate_capture(&req("", "Finance"), strict),
                Err(AppError::Validation(_))
            ));
            assert!(matches!(
                validate_capture(&req("ITI", "   "), strict),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_strict_mode_rejects_unknown_values() {
        let err = validate_capture(&req("XYZ", "Healthcare"), true).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("10th, 12th, ITI")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(validate_capture(&req("Graduate", "Astrology"), true).is_err());
    }

    #[test]
    fn test_lenient_mode_passes_unknown_values_through() {
        let profile = validate_capture(&req("XYZ", "Astrology"), false).unwrap();
        assert_eq!(profile, Profile::new("XYZ", "Astrology"));
    }
}
