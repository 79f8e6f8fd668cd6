use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::api::{short_type_name, Parameter, TypedCapture};
use crate::matcher::{bind, Binding, Registry};
use crate::parser::{
    split_line, ConfigError, ConsoleInterface, OptionParameter, ParseError, Printer,
    UserInterface,
};

/// An error reading back from a [`Command`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// No option is registered under the key.
    #[error("No such key found: '{0}'.")]
    UnknownKey(String),
    /// The option is registered with a different type.
    #[error("Option '{key}' is of type {actual}, not {expected}.")]
    TypeMismatch {
        /// The long key of the option.
        key: String,
        /// The type requested.
        expected: &'static str,
        /// The type the option was registered with.
        actual: &'static str,
    },
    /// The option has neither a default nor a parsed value.
    #[error("Option '{0}' has no value.")]
    Unset(String),
    /// There are no bare words.
    #[error("There is no head in this command.")]
    NoHead,
}

/// The command line: a registry of typed options, along with the outcome of the latest parse.
///
/// ### Example
/// ```
/// # use keyarg_builder as keyarg;
/// use keyarg::{Command, Parameter};
///
/// let mut command = Command::new();
/// command
///     .add(Parameter::<String>::essential("domain").short('d'))
///     .unwrap()
///     .add(Parameter::<u16>::optional("port").short('p').default(80))
///     .unwrap();
///
/// command.parse_line(r#"fetch -d example.com "index page""#);
///
/// assert!(command.valid());
/// assert_eq!(command.get::<String>("domain").unwrap(), "example.com");
/// assert_eq!(command.get::<u16>("port").unwrap(), &80);
/// assert_eq!(command.bare_words(), &["fetch", "index page"]);
/// ```
#[derive(Debug, Default)]
pub struct Command {
    registry: Registry,
    binding: Binding,
}

impl Command {
    /// Create a command with no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option.
    ///
    /// Fails if the key or short key is malformed, or already registered.
    /// In that case the command is unchanged.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{Command, ConfigError, Parameter};
    ///
    /// let mut command = Command::new();
    /// command.add(Parameter::<u32>::optional("count").short('c')).unwrap();
    ///
    /// assert_eq!(
    ///     command.add(Parameter::<u32>::optional("count")).unwrap_err(),
    ///     ConfigError::DuplicateKey("count".to_string()),
    /// );
    /// assert_eq!(
    ///     command.add(Parameter::<u32>::optional("cost").short('c')).unwrap_err(),
    ///     ConfigError::DuplicateShortKey('c'),
    /// );
    /// assert!(!command.exists("cost"));
    /// ```
    pub fn add<T>(&mut self, parameter: Parameter<T>) -> Result<&mut Self, ConfigError>
    where
        T: FromStr + Clone + 'static,
    {
        let (config, capture) = parameter.consume();
        self.registry.insert(config, capture)?;
        Ok(self)
    }

    /// Whether an option is registered under `key`.
    pub fn exists(&self, key: &str) -> bool {
        self.registry.find_long(key).is_some()
    }

    /// Whether the option under `key` appeared on the latest parsed command line.
    pub fn supplied(&self, key: &str) -> bool {
        self.registry
            .get(key)
            .map(|entry| entry.supplied)
            .unwrap_or(false)
    }

    /// Get the current value of the option under `key`.
    ///
    /// This is the parsed value if one was bound, otherwise the default.
    /// The type `T` must be precisely the type the option was registered with.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{AccessError, Command, Parameter};
    ///
    /// let mut command = Command::new();
    /// command.add(Parameter::optional("count").default(1u32)).unwrap();
    ///
    /// assert_eq!(command.get::<u32>("count"), Ok(&1));
    /// assert_eq!(
    ///     command.get::<i64>("count"),
    ///     Err(AccessError::TypeMismatch {
    ///         key: "count".to_string(),
    ///         expected: "i64",
    ///         actual: "u32",
    ///     }),
    /// );
    /// assert_eq!(
    ///     command.get::<u32>("total"),
    ///     Err(AccessError::UnknownKey("total".to_string())),
    /// );
    /// ```
    pub fn get<T: 'static>(&self, key: &str) -> Result<&T, AccessError> {
        let entry = self
            .registry
            .get(key)
            .ok_or_else(|| AccessError::UnknownKey(key.to_string()))?;
        let typed = entry
            .capture
            .as_any()
            .downcast_ref::<TypedCapture<T>>()
            .ok_or_else(|| AccessError::TypeMismatch {
                key: key.to_string(),
                expected: short_type_name::<T>(),
                actual: entry.capture.type_name(),
            })?;
        typed
            .value
            .as_ref()
            .ok_or_else(|| AccessError::Unset(key.to_string()))
    }

    /// The first bare word of the latest parsed command line.
    pub fn head(&self) -> Result<&str, AccessError> {
        self.binding
            .bare_words
            .first()
            .map(String::as_str)
            .ok_or(AccessError::NoHead)
    }

    /// The tokens of the latest parsed command line which are not bound to any option, in order.
    pub fn bare_words(&self) -> &[String] {
        &self.binding.bare_words
    }

    /// The errors of the latest parsed command line, in order.
    pub fn errors(&self) -> &[ParseError] {
        &self.binding.errors
    }

    /// Whether the latest parsed command line is free of errors.
    pub fn valid(&self) -> bool {
        self.binding.errors.is_empty()
    }

    /// Describe the errors of the latest parsed command line, one per line.
    /// Empty when the command line is valid.
    pub fn what(&self) -> String {
        self.binding
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Render the usage message.
    ///
    /// The first line lists the essential options.
    /// Each option then follows on its own line, in registration order.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{Command, Parameter};
    ///
    /// let mut command = Command::new();
    /// command
    ///     .add(Parameter::<u16>::essential("port").short('p').help("The port."))
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     command.usage(),
    ///     "usage: --port=<u16>\noptions:\n --port  -p  u16  The port.",
    /// );
    /// ```
    pub fn usage(&self) -> String {
        self.printer(None).render()
    }

    /// Print the usage message to stdout, wrapped to the terminal width.
    pub fn print_usage(&self) {
        self.print_usage_with(&ConsoleInterface::default());
    }

    /// Parse pre-split tokens.
    /// Every token is considered, so leave out the program name.
    ///
    /// Any previous parse is forgotten: options return to their defaults, and the bare words and errors start empty.
    pub fn parse_tokens(&mut self, tokens: &[&str]) {
        self.binding = bind(&mut self.registry, tokens);
    }

    /// Parse owned tokens, such as those from [`env::args`].
    /// Every token is considered, so leave out the program name.
    pub fn parse_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = args.into_iter().collect();
        self.binding = bind(&mut self.registry, &tokens);
    }

    /// Parse a raw command line, splitting it into tokens on whitespace.
    /// Double quotes group whitespace into a single token, and are themselves dropped.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{Command, Parameter};
    ///
    /// let mut command = Command::new();
    /// command.add(Parameter::<String>::essential("name")).unwrap();
    ///
    /// command.parse_line("--name \"Jane Doe\"");
    ///
    /// assert_eq!(command.get::<String>("name").unwrap(), "Jane Doe");
    /// ```
    pub fn parse_line(&mut self, line: &str) {
        let tokens = split_line(line);
        self.binding = bind(&mut self.registry, &tokens);
    }

    /// Parse the Cli [`env::args`], skipping the program name.
    ///
    /// If the command line is invalid, prints the errors and usage, then exits with error code `1` (via [`std::process::exit`]).
    /// Use [`Command::parse_args`] to handle invalid command lines yourself.
    pub fn parse(&mut self) {
        let tokens: Vec<String> = env::args().skip(1).collect();

        if let Err(code) = self.parse_with_interface(&tokens, &ConsoleInterface::default()) {
            std::process::exit(code);
        }
    }

    fn parse_with_interface(
        &mut self,
        tokens: &[String],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<(), i32> {
        self.binding = bind(&mut self.registry, tokens);

        if self.valid() {
            Ok(())
        } else {
            for error in &self.binding.errors {
                user_interface.print_error(error);
            }

            self.print_usage_with(user_interface);
            Err(1)
        }
    }

    fn print_usage_with(&self, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(self.printer(user_interface.width()).render());
    }

    fn printer(&self, width: Option<usize>) -> Printer {
        Printer::new(
            self.registry
                .entries()
                .iter()
                .map(OptionParameter::from)
                .collect(),
            width,
        )
    }
}
