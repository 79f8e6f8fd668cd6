pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: char = '-';
pub(crate) const QUOTE: char = '"';
pub(crate) const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];
