use crate::constant::*;
use crate::matcher::Entry;
use crate::model::Necessity;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionParameter {
    key: String,
    short: Option<char>,
    type_name: &'static str,
    help: Option<String>,
    necessity: Necessity,
}

impl OptionParameter {
    #[cfg(test)]
    fn basic(
        key: &str,
        short: Option<char>,
        type_name: &'static str,
        help: Option<&str>,
        necessity: Necessity,
    ) -> Self {
        Self {
            key: key.to_string(),
            short,
            type_name,
            help: help.map(str::to_string),
            necessity,
        }
    }
}

impl From<&Entry> for OptionParameter {
    fn from(value: &Entry) -> Self {
        Self {
            key: value.config.key().to_string(),
            short: value.config.short(),
            type_name: value.capture.type_name(),
            help: value.config.help().map(str::to_string),
            necessity: value.config.necessity(),
        }
    }
}

/// Renders the usage of a command.
///
/// Without a width the output is a fixed layout, so the same options always render the same text.
/// With a width, long help messages wrap (and hyphenate) within it.
pub(crate) struct Printer {
    options: Vec<OptionParameter>,
    width: Option<usize>,
}

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_HELP_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 2;
const MAIN_INDENT: usize = 1;
// Ex: "-p"
const SHORT_WIDTH: usize = 2;

impl Printer {
    pub(crate) fn new(options: Vec<OptionParameter>, width: Option<usize>) -> Self {
        Self { options, width }
    }

    pub(crate) fn render(&self) -> String {
        let mut summary = "usage:".to_string();

        for option in &self.options {
            if option.necessity == Necessity::Essential {
                summary.push_str(&format!(
                    " {prefix}{key}=<{t}>",
                    prefix = LONG_PREFIX,
                    key = option.key,
                    t = option.type_name
                ));
            }
        }

        let key_width = self
            .options
            .iter()
            .map(|o| LONG_PREFIX.len() + o.key.chars().count())
            .max()
            .unwrap_or_default();
        let type_width = self
            .options
            .iter()
            .map(|o| o.type_name.chars().count())
            .max()
            .unwrap_or_default();
        // Ex: " --key  -k  Type  "
        let help_offset = MAIN_INDENT
            + key_width
            + PADDING_WIDTH
            + SHORT_WIDTH
            + PADDING_WIDTH
            + type_width
            + PADDING_WIDTH;
        let help_width = self
            .width
            .map(|width| std::cmp::max(width.saturating_sub(help_offset), MINIMUM_HELP_WIDTH));

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Rendering usage with help offset {help_offset} and help width {help_width:?}.");
        }

        let mut lines = vec![summary, "options:".to_string()];
        let indent = MAIN_INDENT;
        let short_width = SHORT_WIDTH;
        let padding = " ".repeat(PADDING_WIDTH);

        for option in &self.options {
            let long = format!("{}{}", LONG_PREFIX, option.key);
            let short = match option.short {
                Some(s) => format!("{}{s}", SHORT_PREFIX),
                None => "".to_string(),
            };
            let left = format!(
                "{:indent$}{long:key_width$}{padding}{short:short_width$}{padding}{t:type_width$}{padding}",
                "",
                t = option.type_name,
            );
            let help = option.help.clone().unwrap_or_default();
            let parts = match help_width {
                Some(help_width) => chunk(&help, help_width),
                None => vec![help],
            };

            match parts.split_first() {
                Some((first, rest)) => {
                    lines.push(format!("{left}{first}").trim_end().to_string());

                    for part in rest {
                        lines.push(format!("{:help_offset$}{part}", ""));
                    }
                }
                None => lines.push(left.trim_end().to_string()),
            }
        }

        lines.join("\n")
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    // width must be at least 2, so that we can hyphenate
    debug_assert!(width >= 2);
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn options() -> Vec<OptionParameter> {
        vec![
            OptionParameter::basic(
                "port",
                Some('p'),
                "u16",
                Some("The port to listen on."),
                Necessity::Essential,
            ),
            OptionParameter::basic(
                "protocol",
                None,
                "String",
                Some("The transfer protocol."),
                Necessity::Optional,
            ),
            OptionParameter::basic("domain", Some('d'), "String", None, Necessity::Essential),
        ]
    }

    #[test]
    fn render_empty() {
        let printer = Printer::new(Vec::default(), None);
        assert_eq!(printer.render(), "usage:\noptions:");
    }

    #[test]
    fn render() {
        let printer = Printer::new(options(), None);
        assert_eq!(
            printer.render(),
            r#"usage: --port=<u16> --domain=<String>
options:
 --port      -p  u16     The port to listen on.
 --protocol      String  The transfer protocol.
 --domain    -d  String"#
        );
    }

    #[test]
    fn render_wide() {
        let printer = Printer::new(options(), Some(200));
        assert_eq!(printer.render(), Printer::new(options(), None).render());
    }

    #[test]
    fn render_wrapped() {
        let printer = Printer::new(options(), Some(40));
        assert_eq!(
            printer.render(),
            r#"usage: --port=<u16> --domain=<String>
options:
 --port      -p  u16     The port to
                         listen on.
 --protocol      String  The transfer
                         protocol.
 --domain    -d  String"#
        );

        for line in printer.render().lines().skip(2) {
            assert!(line.chars().count() <= 40, "{line}");
        }
    }

    #[test]
    fn render_narrow_keeps_minimum() {
        let printer = Printer::new(options(), Some(5));
        let help_lines: Vec<String> = printer
            .render()
            .lines()
            .skip(2)
            .map(|line| line.chars().skip(25).collect())
            .collect();

        assert_eq!(
            help_lines,
            vec![
                "The port to",
                "listen on.",
                "The transfer",
                "protocol.",
                "",
            ]
        );
    }

    #[test]
    fn render_narrow_overflows_by_minimum() {
        let options = vec![OptionParameter::basic(
            "protocol",
            None,
            "String",
            Some("aaaaaaaaaaaaaaaa bbbbbbbbbbbbbbbb"),
            Necessity::Optional,
        )];
        let printer = Printer::new(options, Some(30));
        let lines: Vec<String> = printer.render().lines().skip(2).map(str::to_string).collect();

        // The help column never shrinks below its minimum, even past the width.
        assert_eq!(
            lines,
            vec![
                format!(" --protocol      String  {}", "aaaaaaaaaaaaaaaa"),
                format!("{:25}{}", "", "bbbbbbbbbbbbbbbb"),
            ]
        );

        for line in &lines {
            assert!(line.chars().count() > 30);
            assert!(line.chars().count() <= 25 + MINIMUM_HELP_WIDTH);
        }
    }

    #[rstest]
    #[case("", 5, vec![])]
    #[case("abc", 5, vec!["abc"])]
    #[case("abc  def", 7, vec!["abc def"])]
    #[case("abc def", 6, vec!["abc", "def"])]
    #[case("abcdef", 4, vec!["abc-", "def"])]
    #[case("abcdefg", 4, vec!["abc-", "defg"])]
    #[case("abcdefghi", 4, vec!["abc-", "def-", "ghi"])]
    #[case("ab abcdefg", 4, vec!["ab", "abc-", "defg"])]
    #[case("ünïcödé", 4, vec!["ünï-", "cödé"])]
    fn chunks(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }
}
