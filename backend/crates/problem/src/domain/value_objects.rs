//! Domain Value Objects

use crate::error::{ProblemError, ProblemResult};

/// The client-editable part of a problem.
///
/// `problem` and `educational` hold markdown and are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemFields {
    title: String,
    problem: String,
    educational: String,
}

impl ProblemFields {
    /// Validate that every field has non-whitespace content
    pub fn new(title: String, problem: String, educational: String) -> ProblemResult<Self> {
        for (name, value) in [
            ("title", &title),
            ("problem", &problem),
            ("educational", &educational),
        ] {
            if value.trim().is_empty() {
                return Err(ProblemError::Validation(format!("{} must not be empty", name)));
            }
        }

        Ok(Self {
            title,
            problem,
            educational,
        })
    }

    /// Restore from the database without validation
    pub fn from_db(title: String, problem: String, educational: String) -> Self {
        Self {
            title,
            problem,
            educational,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    pub fn educational(&self) -> &str {
        &self.educational
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields() {
        let fields = ProblemFields::new(
            "Two Sum".to_string(),
            "Given an array...".to_string(),
            "## Hash maps\nUse a map.".to_string(),
        )
        .unwrap();
        assert_eq!(fields.title(), "Two Sum");
        assert_eq!(fields.educational(), "## Hash maps\nUse a map.");
    }

    #[test]
    fn test_empty_field_names_the_field() {
        let err = ProblemFields::new("T".to_string(), "".to_string(), "E".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "problem must not be empty");

        let err =
            ProblemFields::new("T".to_string(), "P".to_string(), " \n ".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "educational must not be empty");
    }

    #[test]
    fn test_content_not_trimmed() {
        let fields =
            ProblemFields::new("  T  ".to_string(), "P".to_string(), "E".to_string()).unwrap();
        assert_eq!(fields.title(), "  T  ");
    }
}
