use terminal_size::{terminal_size, Width};

use crate::parser::base::ParseError;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: &ParseError);
    /// The width available for rendering, if known.
    fn width(&self) -> Option<usize>;
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &ParseError) {
        eprintln!("{error}");
    }

    fn width(&self) -> Option<usize> {
        if let Some((Width(width), _)) = terminal_size() {
            Some(width as usize)
        } else {
            None
        }
    }
}
