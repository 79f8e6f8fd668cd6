use std::any::Any;
use std::str::FromStr;
use thiserror::Error;

/// A predicate over the typed value of an option.
pub type Validator<T> = Box<dyn Fn(&T) -> bool>;

/// Behaviour to capture an implicit generic type T from an input `&str`.
///
/// We use this at the middle/top of the registry so that options of different types may all live in a single collection.
pub(crate) trait AnonymousCapturable {
    /// Restore the default value, forgetting anything captured.
    fn reset(&mut self);

    /// Capture a value anonymously for this option.
    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture>;

    /// The short name of the type `T` behind this capture.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InvalidCapture {
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        token: String,
        type_name: &'static str,
    },
    #[error("'{token}' is rejected by the validator.")]
    Rejected { token: String },
}

/// Behaviour to capture an explicit generic type T.
///
/// We use this at the bottom of the object graph so the compiler can maintain each option's type.
pub(crate) struct TypedCapture<T> {
    pub(crate) value: Option<T>,
    default: Option<T>,
    validator: Option<Validator<T>>,
}

impl<T> TypedCapture<T> {
    pub(crate) fn new(default: Option<T>, validator: Option<Validator<T>>) -> Self
    where
        T: Clone,
    {
        Self {
            value: default.clone(),
            default,
            validator,
        }
    }
}

impl<T> AnonymousCapturable for TypedCapture<T>
where
    T: FromStr + Clone + 'static,
{
    fn reset(&mut self) {
        self.value = self.default.clone();
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        let value = T::from_str(token).map_err(|_| InvalidCapture::InvalidConversion {
            token: token.to_string(),
            type_name: short_type_name::<T>(),
        })?;

        if let Some(validator) = &self.validator {
            if !validator(&value) {
                return Err(InvalidCapture::Rejected {
                    token: token.to_string(),
                });
            }
        }

        self.value.replace(value);
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        short_type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The type name of `T` without its module path (ex: `String` rather than `alloc::string::String`).
/// Generic types keep their full name, since their parameters carry paths of their own.
pub(crate) fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();

    if full.contains('<') {
        full
    } else {
        full.rsplit("::").next().unwrap_or(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn type_names() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<u16>(), "u16");
        assert_eq!(short_type_name::<f64>(), "f64");
        assert_eq!(short_type_name::<std::net::IpAddr>(), "IpAddr");
    }

    #[test]
    fn capture_string_is_identity() {
        let mut capture: TypedCapture<String> = TypedCapture::new(None, None);
        assert_eq!(capture.value, None);

        capture.capture(" spaced  text ").unwrap();

        assert_eq!(capture.value, Some(" spaced  text ".to_string()));
        assert_eq!(capture.type_name(), "String");
    }

    #[rstest]
    #[case("8080", Some(8080))]
    #[case("0", Some(0))]
    #[case("65535", Some(65535))]
    #[case("65536", None)]
    #[case("-1", None)]
    #[case("", None)]
    #[case("80x", None)]
    #[case(" 80", None)]
    fn capture_integer(#[case] token: &str, #[case] expected: Option<u16>) {
        let mut capture: TypedCapture<u16> = TypedCapture::new(Some(1), None);
        let result = capture.capture(token);

        match expected {
            Some(value) => {
                assert_eq!(result, Ok(()));
                assert_eq!(capture.value, Some(value));
            }
            None => {
                assert_eq!(
                    result,
                    Err(InvalidCapture::InvalidConversion {
                        token: token.to_string(),
                        type_name: "u16",
                    })
                );
                // The prior value is untouched.
                assert_eq!(capture.value, Some(1));
            }
        }
    }

    #[test]
    fn capture_rejected() {
        let mut capture: TypedCapture<i32> =
            TypedCapture::new(Some(80), Some(Box::new(|x: &i32| *x > 0)));

        assert_matches!(
            capture.capture("-5"),
            Err(InvalidCapture::Rejected { token }) if token == "-5"
        );
        assert_eq!(capture.value, Some(80));

        capture.capture("5").unwrap();
        assert_eq!(capture.value, Some(5));
    }

    #[test]
    fn reset_restores_default() {
        let mut with_default: TypedCapture<i32> = TypedCapture::new(Some(3), None);
        with_default.capture("7").unwrap();
        with_default.reset();
        assert_eq!(with_default.value, Some(3));

        let mut without_default: TypedCapture<i32> = TypedCapture::new(None, None);
        without_default.capture("7").unwrap();
        assert_eq!(without_default.value, Some(7));
        without_default.reset();
        assert_eq!(without_default.value, None);
    }

    #[test]
    fn downcast() {
        let capture: Box<dyn AnonymousCapturable> = Box::new(TypedCapture::<u8>::new(Some(2), None));
        assert!(capture.as_any().downcast_ref::<TypedCapture<u8>>().is_some());
        assert!(capture.as_any().downcast_ref::<TypedCapture<u16>>().is_none());
    }
}
