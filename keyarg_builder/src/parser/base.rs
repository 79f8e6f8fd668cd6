use thiserror::Error;

/// An error in the configuration of a [`Command`](crate::Command).
///
/// Raised immediately by `Command::add`, leaving the command unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The long key is already registered.
    #[error("Config error: cannot duplicate the key '{0}'.")]
    DuplicateKey(String),
    /// The short key is already registered.
    #[error("Config error: cannot duplicate the short key '{0}'.")]
    DuplicateShortKey(char),
    /// The long key is empty, starts with a dash, or contains whitespace.
    #[error("Config error: invalid key '{0}'.")]
    InvalidKey(String),
    /// The short key is whitespace or a dash.
    #[error("Config error: invalid short key '{0}'.")]
    InvalidShortKey(char),
}

/// An error encountered while binding the command line tokens.
///
/// These are accumulated during parsing rather than aborting it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The value token does not convert to the option's type.
    #[error("Parse error: '{token}' cannot convert to {type_name} for option '{key}'.")]
    ConversionFailure {
        /// The long key of the option.
        key: String,
        /// The offending value token.
        token: String,
        /// The declared type of the option.
        type_name: &'static str,
    },
    /// The value converts, but the option's validator rejects it.
    #[error("Parse error: '{token}' is not a valid value for option '{key}'.")]
    ValidationFailure {
        /// The long key of the option.
        key: String,
        /// The offending value token.
        token: String,
    },
    /// The option key is the final token, so no value follows it.
    #[error("Parse error: option '{key}' is missing its value.")]
    MissingValue {
        /// The long key of the option.
        key: String,
    },
    /// An essential option never appeared.
    #[error("Parse error: missing required option '{key}'.")]
    MissingRequiredOption {
        /// The long key of the option.
        key: String,
    },
}

impl ParseError {
    /// The long key of the option this error concerns.
    pub fn key(&self) -> &str {
        match self {
            ParseError::ConversionFailure { key, .. }
            | ParseError::ValidationFailure { key, .. }
            | ParseError::MissingValue { key }
            | ParseError::MissingRequiredOption { key } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[rstest]
    #[case(ParseError::ConversionFailure { key: "port".to_string(), token: "abc".to_string(), type_name: "u16" })]
    #[case(ParseError::ValidationFailure { key: "port".to_string(), token: "-5".to_string() })]
    #[case(ParseError::MissingValue { key: "port".to_string() })]
    #[case(ParseError::MissingRequiredOption { key: "port".to_string() })]
    fn parse_error_names_key(#[case] error: ParseError) {
        assert_eq!(error.key(), "port");
        assert_contains!(error.to_string(), "'port'");
    }

    #[test]
    fn conversion_failure_message() {
        let error = ParseError::ConversionFailure {
            key: "port".to_string(),
            token: "abc".to_string(),
            type_name: "u16",
        };
        assert_eq!(
            error.to_string(),
            "Parse error: 'abc' cannot convert to u16 for option 'port'."
        );
    }

    #[test]
    fn config_error_message() {
        assert_eq!(
            ConfigError::DuplicateShortKey('p').to_string(),
            "Config error: cannot duplicate the short key 'p'."
        );
    }
}
