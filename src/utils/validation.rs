use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(EtlError::ConfigValidationError {
            field: field_name.to_string(),
            message: "List cannot be empty".to_string(),
        });
    }
    for value in values {
        validate_non_empty_string(field_name, value)?;
    }
    Ok(())
}

/// Checks a header row against the columns a conversion cannot run without.
/// Every missing column is reported, in the order they were required.
pub fn validate_required_columns(headers: &[String], required: &[String]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EtlError::SchemaError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "cases.csv").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_steps", 5, 1).is_ok());
        assert!(validate_positive_number("max_steps", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("required_columns", &strings(&["Title"])).is_ok());
        assert!(validate_non_empty_list("required_columns", &[]).is_err());
        assert!(validate_non_empty_list("required_columns", &strings(&[" "])).is_err());
    }

    #[test]
    fn test_required_columns_present() {
        let headers = strings(&["Title", "Key", "Suite", "Priority"]);
        let required = strings(&["Title", "Key", "Suite"]);
        assert!(validate_required_columns(&headers, &required).is_ok());
    }

    #[test]
    fn test_required_columns_reports_every_missing_one() {
        let headers = strings(&["Title", "Description"]);
        let required = strings(&["Title", "Key", "Suite"]);

        match validate_required_columns(&headers, &required) {
            Err(EtlError::SchemaError { missing }) => {
                assert_eq!(missing, strings(&["Key", "Suite"]));
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_required_columns_are_case_sensitive() {
        let headers = strings(&["title", "Key", "Suite"]);
        let required = strings(&["Title", "Key", "Suite"]);
        assert!(validate_required_columns(&headers, &required).is_err());
    }
}
