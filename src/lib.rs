//! `keyarg` is a small key/value command line parser for Rust.
//!
//! Options are registered up front, each with a type `T`, then the command line is bound against them.
//! `keyarg` prioritizes the following:
//! * *Type safe option values*:
//! Each option keeps the type it was registered with, and reading it back as any other type is an error.
//! * *Accumulated, not fatal, parse errors*:
//! Conversion failures, rejected values, missing values and missing required options are collected during the parse.
//! The program decides what to do with them afterwards.
//! * *Bare words pass through*:
//! Anything not bound to an option is kept, in order, for the program to interpret.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/url.rs")]
//! ```
//!
//! With a few command lines:
//! ```console
//! $ url -d example.com -p 8080
//! http://example.com:8080
//!
//! $ url -d example.com -p 0
//! Parse error: '0' is not a valid value for option 'port'.
//! usage: --port=<u16>
//! options:
//!  --protocol  -s  String  The transfer protocol.
//!  --domain    -d  String  The domain to connect to.
//!  --port      -p  u16     The port to connect to.
//! ```
//!
//! # Options
//! Configure `keyarg` by starting with a [`Command`] and `add`ing each [`Parameter`].
//! There are two kinds of parameters: [`Parameter::essential`] and [`Parameter::optional`].
//! An essential parameter must appear on the command line, otherwise the parse records a [`ParseError::MissingRequiredOption`].
//!
//! All type `T` parsing in `keyarg` is controlled by [`std::str::FromStr`].
//! `keyarg` will parse any option type `T`, as long as it implements `std::str::FromStr` and `Clone`.
//! For `String`, the value is precisely the token.
//!
//! On the command line, an option is specified by its key followed by its value: `--key VALUE`, or `-k VALUE` via its short key.
//! The value is always the very next token, even when it looks like a key itself (ex: `--offset -5`).
//! There is no `--key=VALUE` form, and short keys cannot be combined.
//!
//! # Parsing
//! A command line may be parsed from:
//! * Pre-split tokens, via [`Command::parse_tokens`] or [`Command::parse_args`].
//! * A raw string, via [`Command::parse_line`].
//! Tokens are separated by whitespace, except within double quotes.
//! * The process arguments, via [`Command::parse`].
//! This exits the program when the command line is invalid.
//!
//! Each parse starts over: values return to their defaults, and the bare words and errors of the previous parse are dropped.
//!
//! # Features
//! * `tracing_debug`: emit [`tracing`](https://docs.rs/tracing) debug events while registering options and binding tokens.
#![deny(missing_docs)]

pub use keyarg_builder::*;
