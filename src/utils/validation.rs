use crate::utils::error::{Result, SizerError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_nonempty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_nonempty() {
        assert!(validate_nonempty("item", r#"{"a": {"S": "x"}}"#).is_ok());
        assert!(validate_nonempty("item", "").is_err());
        assert!(validate_nonempty("item", "   ").is_err());
    }
}
