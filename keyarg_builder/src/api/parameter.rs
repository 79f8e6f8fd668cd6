use std::str::FromStr;

use crate::api::{AnonymousCapturable, TypedCapture, Validator};
use crate::constant::WHITESPACE;
use crate::matcher::OptionConfig;
use crate::model::Necessity;

/// A typed option to register on a [`Command`](crate::Command).
///
/// Every option is introduced on the Cli by `--key VALUE`, or `-s VALUE` when it has a short key.
///
/// ### Example
/// ```
/// # use keyarg_builder as keyarg;
/// use keyarg::{Command, Parameter};
///
/// let mut command = Command::new();
/// command
///     .add(
///         Parameter::<u16>::essential("port")
///             .short('p')
///             .help("The port to listen on.")
///             .validate(|port| *port > 0),
///     )
///     .unwrap();
/// command
///     .add(Parameter::optional("protocol").default("http".to_string()))
///     .unwrap();
///
/// command.parse_tokens(&["-p", "8080"]);
///
/// assert!(command.valid());
/// assert_eq!(command.get::<u16>("port").unwrap(), &8080);
/// assert_eq!(command.get::<String>("protocol").unwrap(), "http");
/// ```
pub struct Parameter<T> {
    key: String,
    short: Option<char>,
    help: Option<String>,
    necessity: Necessity,
    default: Option<T>,
    validator: Option<Validator<T>>,
}

impl<T> std::fmt::Debug for Parameter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let short = match &self.short {
            Some(s) => format!(" -{s}"),
            None => "".to_string(),
        };
        let help = if let Some(h) = &self.help {
            format!(", {h}")
        } else {
            "".to_string()
        };

        write!(
            f,
            "{necessity}[{t}, --{key}{short}{help}]",
            necessity = self.necessity,
            t = std::any::type_name::<T>(),
            key = self.key,
        )
    }
}

impl<T> Parameter<T>
where
    T: FromStr + Clone + 'static,
{
    fn new(key: impl Into<String>, necessity: Necessity) -> Self {
        Self {
            key: key.into(),
            short: None,
            help: None,
            necessity,
            default: None,
            validator: None,
        }
    }

    /// Create an option which must be supplied on the Cli.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{Command, Parameter};
    ///
    /// let mut command = Command::new();
    /// command.add(Parameter::<u32>::essential("count")).unwrap();
    ///
    /// command.parse_tokens(&[]);
    /// assert!(!command.valid());
    /// ```
    pub fn essential(key: impl Into<String>) -> Self {
        Self::new(key, Necessity::Essential)
    }

    /// Create an option which may be left off the Cli.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{Command, Parameter};
    ///
    /// let mut command = Command::new();
    /// command.add(Parameter::optional("count").default(1u32)).unwrap();
    ///
    /// command.parse_tokens(&[]);
    /// assert!(command.valid());
    /// assert_eq!(command.get::<u32>("count").unwrap(), &1);
    /// ```
    pub fn optional(key: impl Into<String>) -> Self {
        Self::new(key, Necessity::Optional)
    }

    /// Set the single character alias, used as `-c VALUE`.
    /// If repeated, only the final short key will apply.
    ///
    /// A blank (whitespace) short key means the option has no alias.
    pub fn short(mut self, short: char) -> Self {
        if WHITESPACE.contains(&short) {
            self.short = None;
        } else {
            self.short.replace(short);
        }

        self
    }

    /// Document the help message for this option.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Set the value held by the option when it does not appear on the Cli.
    /// If repeated, only the final default will apply.
    pub fn default(mut self, value: T) -> Self {
        self.default.replace(value);
        self
    }

    /// Reject values for which `predicate` returns `false`.
    /// If repeated, only the final validator will apply.
    ///
    /// The default value is not subject to the validator.
    pub fn validate(mut self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.validator.replace(Box::new(predicate));
        self
    }

    pub(crate) fn consume(self) -> (OptionConfig, Box<dyn AnonymousCapturable>) {
        let Parameter {
            key,
            short,
            help,
            necessity,
            default,
            validator,
        } = self;
        let config = OptionConfig::new(key, short, help, necessity);
        (config, Box::new(TypedCapture::new(default, validator)))
    }
}
