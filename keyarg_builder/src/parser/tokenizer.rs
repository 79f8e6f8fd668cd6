use crate::constant::*;

/// Split a raw command line into tokens.
///
/// Whitespace separates tokens outside of quotes.
/// A `"` toggles quoting and is dropped from the output, so `a"b c"` yields `a` then `b c`.
/// Empty tokens are never produced.
/// An unterminated quote extends to the end of the line.
pub(crate) fn split_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::default();
    let mut current = String::default();
    let mut quoted = false;

    for c in line.chars() {
        if c == QUOTE {
            flush(&mut tokens, &mut current);
            quoted = !quoted;
        } else if !quoted && WHITESPACE.contains(&c) {
            flush(&mut tokens, &mut current);
        } else {
            current.push(c);
        }
    }

    flush(&mut tokens, &mut current);
    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
