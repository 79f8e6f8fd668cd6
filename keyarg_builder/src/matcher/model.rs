use std::collections::HashMap;

use crate::api::AnonymousCapturable;
use crate::constant::*;
use crate::model::Necessity;
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionConfig {
    key: String,
    short: Option<char>,
    help: Option<String>,
    necessity: Necessity,
}

impl OptionConfig {
    pub(crate) fn new(
        key: impl Into<String>,
        short: Option<char>,
        help: Option<String>,
        necessity: Necessity,
    ) -> Self {
        Self {
            key: key.into(),
            short,
            help,
            necessity,
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn short(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(crate) fn necessity(&self) -> Necessity {
        self.necessity
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.key.is_empty()
            || self.key.starts_with(SHORT_PREFIX)
            || self.key.contains(WHITESPACE)
        {
            return Err(ConfigError::InvalidKey(self.key.clone()));
        }

        match self.short {
            Some(s) if s == SHORT_PREFIX || WHITESPACE.contains(&s) => {
                Err(ConfigError::InvalidShortKey(s))
            }
            _ => Ok(()),
        }
    }
}

/// A registered option: its configuration, its typed value slot, and whether the last parse matched it.
pub(crate) struct Entry {
    pub(crate) config: OptionConfig,
    pub(crate) capture: Box<dyn AnonymousCapturable>,
    pub(crate) supplied: bool,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("config", &self.config)
            .field("type_name", &self.capture.type_name())
            .field("supplied", &self.supplied)
            .finish()
    }
}

/// The options of a command, in registration order.
///
/// The long and short key maps are indices into `entries`; the entries themselves are owned only here.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    entries: Vec<Entry>,
    long_keys: HashMap<String, usize>,
    short_keys: HashMap<char, usize>,
}

impl Registry {
    /// Register an option.
    /// On error, the registry is left as it was.
    pub(crate) fn insert(
        &mut self,
        config: OptionConfig,
        capture: Box<dyn AnonymousCapturable>,
    ) -> Result<(), ConfigError> {
        config.validate()?;

        if self.long_keys.contains_key(config.key()) {
            return Err(ConfigError::DuplicateKey(config.key().to_string()));
        }

        if let Some(s) = config.short() {
            if self.short_keys.contains_key(&s) {
                return Err(ConfigError::DuplicateShortKey(s));
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Registering {necessity} option '{key}' of type {t}.",
                necessity = config.necessity(),
                key = config.key(),
                t = capture.type_name(),
            );
        }

        let index = self.entries.len();
        self.long_keys.insert(config.key().to_string(), index);

        if let Some(s) = config.short() {
            self.short_keys.insert(s, index);
        }

        self.entries.push(Entry {
            config,
            capture,
            supplied: false,
        });
        Ok(())
    }

    pub(crate) fn find_long(&self, key: &str) -> Option<usize> {
        self.long_keys.get(key).copied()
    }

    pub(crate) fn find_short(&self, short: char) -> Option<usize> {
        self.short_keys.get(&short).copied()
    }

    pub(crate) fn get(&self, key: &str) -> Option<&Entry> {
        self.find_long(key).map(|index| &self.entries[index])
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> &mut Entry {
        &mut self.entries[index]
    }

    pub(crate) fn essentials(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.config.necessity() == Necessity::Essential)
    }

    /// Return every option to its default, un-supplied, state.
    pub(crate) fn reset(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.capture.reset();
            entry.supplied = false;
        }
    }
}
