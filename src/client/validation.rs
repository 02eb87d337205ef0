//! Caller input validation, run before any network activity.

use crate::{Error, ErrorContext, Result};

/// Reject missing or blank expressions and return the trimmed text.
pub(crate) fn validate_expression(expression: Option<&str>) -> Result<&str> {
    let trimmed = expression.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(Error::invalid_input_with_context(
            "Expression cannot be None or empty",
            ErrorContext::new()
                .with_field_path("expression")
                .with_source("expression_validator"),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_rejects_missing_and_blank() {
        for input in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = validate_expression(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
            assert!(err.to_string().contains("Expression cannot be None or empty"));
        }
    }

    #[test]
    fn test_trims() {
        assert_eq!(validate_expression(Some("  x^2 + 1  ")).unwrap(), "x^2 + 1");
        assert_eq!(validate_expression(Some("\tx + 1\n")).unwrap(), "x + 1");
        assert_eq!(validate_expression(Some("2x^2 + 3x + 1")).unwrap(), "2x^2 + 3x + 1");
    }
}
