/// Whether an option must be supplied on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Necessity {
    /// The option must appear, otherwise parsing records a `MissingRequiredOption`.
    Essential,
    /// The option may be left out, in which case it keeps its default.
    Optional,
}

impl std::fmt::Display for Necessity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
