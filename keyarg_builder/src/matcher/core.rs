use crate::api::InvalidCapture;
use crate::constant::*;
use crate::matcher::Registry;
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The outcome of binding a sequence of tokens.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Binding {
    pub(crate) bare_words: Vec<String>,
    pub(crate) errors: Vec<ParseError>,
}

/// Binds tokens, one at a time, to the options of a registry.
///
/// Each key token (`--key` or `-k`) takes the very next token as its value, whatever that token looks like.
/// Everything else is a bare word.
pub(crate) struct TokenBinder<'r> {
    registry: &'r mut Registry,
    // The option whose key was just fed, and so is awaiting its value.
    pending: Option<usize>,
    binding: Binding,
}

impl<'r> TokenBinder<'r> {
    /// Start binding against `registry`, first returning all of its options to their defaults.
    pub(crate) fn new(registry: &'r mut Registry) -> Self {
        registry.reset();
        Self {
            registry,
            pending: None,
            binding: Binding::default(),
        }
    }

    pub(crate) fn feed(&mut self, token: &str) {
        match self.pending.take() {
            Some(index) => self.capture(index, token),
            None => match self.match_key(token) {
                Some(index) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{token}' matches option #{index}.");
                    }

                    self.registry.entry_mut(index).supplied = true;
                    self.pending.replace(index);
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{token}' is a bare word.");
                    }

                    self.binding.bare_words.push(token.to_string());
                }
            },
        }
    }

    pub(crate) fn close(self) -> Binding {
        let TokenBinder {
            registry,
            pending,
            mut binding,
        } = self;

        if let Some(index) = pending {
            binding.errors.push(ParseError::MissingValue {
                key: registry.entries()[index].config.key().to_string(),
            });
        }

        for entry in registry.essentials() {
            if !entry.supplied {
                binding.errors.push(ParseError::MissingRequiredOption {
                    key: entry.config.key().to_string(),
                });
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Closed binding with {} bare word(s) and {} error(s).",
                binding.bare_words.len(),
                binding.errors.len()
            );
        }

        binding
    }

    fn capture(&mut self, index: usize, token: &str) {
        let entry = self.registry.entry_mut(index);

        if let Err(error) = entry.capture.capture(token) {
            let key = entry.config.key().to_string();

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Option '{key}' cannot capture '{token}': {error}");
            }

            self.binding.errors.push(match error {
                InvalidCapture::InvalidConversion { token, type_name } => {
                    ParseError::ConversionFailure {
                        key,
                        token,
                        type_name,
                    }
                }
                InvalidCapture::Rejected { token } => ParseError::ValidationFailure { key, token },
            });
        }
    }

    fn match_key(&self, token: &str) -> Option<usize> {
        if let Some(key) = token.strip_prefix(LONG_PREFIX) {
            if !key.is_empty() {
                return self.registry.find_long(key);
            }
        }

        let mut chars = token.strip_prefix(SHORT_PREFIX)?.chars();

        match (chars.next(), chars.next()) {
            (Some(short), None) => self.registry.find_short(short),
            _ => None,
        }
    }
}

/// Bind all of `tokens` against `registry`.
pub(crate) fn bind<S: AsRef<str>>(registry: &mut Registry, tokens: &[S]) -> Binding {
    let mut binder = TokenBinder::new(registry);

    for token in tokens {
        binder.feed(token.as_ref());
    }

    binder.close()
}
