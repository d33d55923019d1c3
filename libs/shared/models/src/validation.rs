use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A single field-level problem found while validating a request payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Collects field issues across a whole payload so callers get every problem
/// at once instead of failing on the first one.
#[derive(Debug, Default)]
pub struct Validator {
    issues: Vec<FieldIssue>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn require(&mut self, condition: bool, field: &str, message: &str) {
        if !condition {
            self.push(field, message);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.issues))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_issue_before_failing() {
        let mut v = Validator::new();
        v.require(false, "name", "Name is required");
        v.require(true, "phone", "Phone is required");
        v.push("price", "Price must be non-negative");

        match v.finish() {
            Err(AppError::Validation(issues)) => {
                assert_eq!(issues.len(), 2);
                assert_eq!(issues[0].field, "name");
                assert_eq!(issues[1].field, "price");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn empty_validator_passes() {
        assert!(Validator::new().finish().is_ok());
    }
}
