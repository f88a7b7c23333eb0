use crate::utils::error::{JobError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(JobError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(JobError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(JobError::ConfigError {
            message: format!(
                "{}: unsupported value '{}'. Allowed values: {}",
                field_name,
                value,
                allowed.join(", ")
            ),
        });
    }
    Ok(())
}

/// Entity names become file names, so they must stay a single path component.
pub fn validate_entity_name(field_name: &str, value: &str) -> Result<()> {
    let name = value.trim();
    if name.is_empty()
        || name != value
        || name.contains(['/', '\\', '\0'])
        || name.contains("..")
    {
        return Err(JobError::ConfigError {
            message: format!(
                "{}: '{}' is not a valid entity name (use a plain name such as \"Job\")",
                field_name, value
            ),
        });
    }
    Ok(())
}

/// 檢查使用者輸入，回傳去除前後空白後的內容
pub fn validate_non_empty_string<'a>(field_name: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(JobError::validation(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(trimmed)
}

/// Checks a caller-supplied position against the current length.
pub fn validate_position(position: i64, len: usize) -> Result<usize> {
    usize::try_from(position)
        .ok()
        .filter(|index| *index < len)
        .ok_or(JobError::IndexError { position, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.data_dir", "./data").is_ok());
        assert!(validate_path("storage.data_dir", "").is_err());
        assert!(validate_path("storage.data_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert_eq!(validate_non_empty_string("company_name", "  Acme ").unwrap(), "Acme");
        assert!(matches!(
            validate_non_empty_string("company_name", "   "),
            Err(JobError::ValidationError { .. })
        ));
        assert!(validate_non_empty_string("company_name", "").is_err());
    }

    #[test]
    fn test_validate_position() {
        assert_eq!(validate_position(0, 2).unwrap(), 0);
        assert_eq!(validate_position(1, 2).unwrap(), 1);
        assert!(matches!(
            validate_position(2, 2),
            Err(JobError::IndexError { position: 2, len: 2 })
        ));
        assert!(validate_position(-1, 2).is_err());
        assert!(validate_position(0, 0).is_err());
    }

    #[test]
    fn test_validate_entity_name() {
        assert!(validate_entity_name("storage.entity", "Job").is_ok());
        assert!(validate_entity_name("storage.entity", "PotentialJob").is_ok());
        for bad in ["", "  ", " Job", "../x", "a/b", "a\\b", "..", "Job..old"] {
            assert!(
                validate_entity_name("storage.entity", bad).is_err(),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "xml", &["compact", "json"]).is_err());
    }
}
