use std::str::FromStr;

use crate::{
    model::UnknownVariant,
    server::error::{internal::InternalError, AppError},
};

/// Parses an enumeration stored as a string column
///
/// # Arguments
/// - `kind` - Name of the enumeration used in the error message
/// - `value` - The stored string to parse
///
/// # Returns
/// - `Ok(T)` - Successfully parsed variant
/// - `Err(AppError::InternalErr(ParseStoredEnum))` - No variant matches the stored value
pub fn parse_stored_enum<T>(kind: &'static str, value: &str) -> Result<T, AppError>
where
    T: FromStr<Err = UnknownVariant>,
{
    let parsed = value.parse::<T>().map_err(|_| InternalError::ParseStoredEnum {
        kind,
        value: value.to_string(),
    })?;

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sport::SportType;

    #[test]
    fn parses_stored_values_case_insensitively() {
        let sport: SportType = parse_stored_enum("SportType", "athletics").unwrap();
        assert_eq!(sport, SportType::Athletics);
    }

    #[test]
    fn unknown_stored_value_is_internal_error() {
        let result: Result<SportType, _> = parse_stored_enum("SportType", "CURLING");
        assert!(matches!(result, Err(AppError::InternalErr(_))));
    }
}
