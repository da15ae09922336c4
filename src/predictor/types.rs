use crate::{Error, Result};
use std::fmt;

/// Two-class probability vector returned by the inference endpoint.
///
/// The endpoint replies with an unlabeled JSON array where index 0 is the
/// benign score and index 1 the malignant score. That positional convention
/// is converted to named fields here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    pub benign: f64,
    pub malignant: f64,
}

impl ClassScores {
    /// Parses a raw endpoint response body into labeled scores.
    ///
    /// The body must be a JSON array of at least two numbers; trailing
    /// elements are ignored.
    pub fn from_response_body(body: &str) -> Result<Self> {
        let scores: Vec<f64> = serde_json::from_str(body).map_err(|e| {
            Error::malformed_response(format!("expected a JSON array of numbers: {}", e))
        })?;

        if scores.len() < 2 {
            return Err(Error::malformed_response(format!(
                "expected at least two scores, got {}",
                scores.len()
            )));
        }

        Ok(Self {
            benign: scores[0],
            malignant: scores[1],
        })
    }

    /// Maps the score pair to a verdict.
    ///
    /// Only a strictly greater benign score clears the image; a tie counts
    /// as detected.
    pub fn verdict(&self) -> Verdict {
        if self.benign > self.malignant {
            Verdict::NotDetected
        } else {
            Verdict::Detected
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NotDetected,
    Detected,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::NotDetected => "Cancer not detected",
            Verdict::Detected => "Cancer detected",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_two_scores() {
        let scores = ClassScores::from_response_body("[0.9, 0.1]").unwrap();
        assert_eq!(scores.benign, 0.9);
        assert_eq!(scores.malignant, 0.1);
    }

    #[test]
    fn test_parse_ignores_trailing_scores() {
        let scores = ClassScores::from_response_body("[0.2, 0.7, 0.1]").unwrap();
        assert_eq!(scores.benign, 0.2);
        assert_eq!(scores.malignant, 0.7);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let result = ClassScores::from_response_body("not json at all");
        assert!(matches!(result, Err(crate::Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_rejects_non_array_json() {
        let result = ClassScores::from_response_body(r#"{"benign": 0.9}"#);
        assert!(matches!(result, Err(crate::Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_rejects_single_score() {
        let result = ClassScores::from_response_body("[0.9]");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("at least two scores"));
    }

    #[test]
    fn test_verdict_benign_wins() {
        let scores = ClassScores {
            benign: 0.9,
            malignant: 0.1,
        };
        assert_eq!(scores.verdict(), Verdict::NotDetected);
    }

    #[test]
    fn test_verdict_malignant_wins() {
        let scores = ClassScores {
            benign: 0.1,
            malignant: 0.9,
        };
        assert_eq!(scores.verdict(), Verdict::Detected);
    }

    #[test]
    fn test_verdict_tie_is_detected() {
        let scores = ClassScores {
            benign: 0.5,
            malignant: 0.5,
        };
        assert_eq!(scores.verdict(), Verdict::Detected);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::NotDetected.to_string(), "Cancer not detected");
        assert_eq!(Verdict::Detected.to_string(), "Cancer detected");
    }
}
