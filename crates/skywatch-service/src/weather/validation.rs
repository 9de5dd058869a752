//! City input validation.

use skywatch_core::error::AppError;

/// Minimum accepted city length after trimming.
const MIN_CITY_LEN: usize = 2;

/// Validate free-text city input and return it trimmed.
///
/// Accepts letters (any script), whitespace, `-`, `'` and `,`.
pub fn validate_city(input: &str) -> Result<String, AppError> {
    let value = input.trim();
    if value.chars().count() < MIN_CITY_LEN {
        return Err(AppError::validation("Please enter a valid city name."));
    }
    if !value
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '-' | '\'' | ','))
    {
        return Err(AppError::validation("City name contains invalid characters."));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_names() {
        assert_eq!(validate_city("  London ").unwrap(), "London");
        assert!(validate_city("São Paulo").is_ok());
        assert!(validate_city("Paris,FR").is_ok());
        assert!(validate_city("Saint-Étienne").is_ok());
        assert!(validate_city("L'Aquila").is_ok());
    }

    #[test]
    fn rejects_short_input() {
        let err = validate_city(" a ").unwrap_err();
        assert_eq!(err.message, "Please enter a valid city name.");
    }

    #[test]
    fn rejects_digits_and_symbols() {
        let err = validate_city("London1").unwrap_err();
        assert_eq!(err.message, "City name contains invalid characters.");
        assert!(validate_city("São Paulo!").is_err());
    }
}
