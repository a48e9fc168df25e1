use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake stored as a String back into a u64.
///
/// Discord IDs are persisted as strings (SQLite has no unsigned 64-bit column
/// type); a parse failure here means corrupt data and maps to a 500.
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId { value, source }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_snowflake() {
        assert_eq!(
            parse_u64_from_string("123456789012345678".to_string()).unwrap(),
            123456789012345678
        );
    }

    #[test]
    fn rejects_non_numeric_value() {
        assert!(parse_u64_from_string("not-a-number".to_string()).is_err());
    }
}
