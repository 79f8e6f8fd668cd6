mod capture;
mod core;
mod parameter;

pub(crate) use self::capture::*;
pub use self::capture::Validator;
pub use self::core::*;
pub use self::parameter::*;
