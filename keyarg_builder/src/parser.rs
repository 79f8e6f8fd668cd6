mod base;
mod interface;
mod printer;
mod tokenizer;

pub use base::*;
pub(crate) use interface::*;
pub(crate) use printer::*;
pub(crate) use tokenizer::*;
