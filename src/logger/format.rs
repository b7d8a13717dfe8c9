//! Log formatting with ANSI colors and text wrapping
//!
//! Log lines go to stderr so `--json` output on stdout stays machine-readable.

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stderr, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 9;
const LOG_TYPE_WIDTH: usize = 8;
const BRACKET_SPACE_WIDTH: usize = 3;
const TOTAL_PREFIX_WIDTH: usize = TAG_WIDTH + LOG_TYPE_WIDTH + BRACKET_SPACE_WIDTH * 2;

/// Maximum line length before wrapping
const MAX_LINE_LENGTH: usize = 145;

pub fn format_and_log(tag: &LogTag, level: LogLevel, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();
    let prefix = format!("{} ", time);

    let base_line = format!(
        "{}[{}] [{}] ",
        prefix.dimmed(),
        format_tag(tag),
        format_level(level)
    );

    let prefix_width = prefix.len() + TOTAL_PREFIX_WIDTH;
    let available_space = if MAX_LINE_LENGTH > prefix_width {
        MAX_LINE_LENGTH - prefix_width
    } else {
        50
    };

    let chunks = wrap_text(message, available_space);
    let mut lines = chunks.iter();

    if let Some(first) = lines.next() {
        print_safe(&format!("{}{}", base_line, colorize_message(level, first)));
    }

    let continuation = " ".repeat(prefix_width);
    for chunk in lines {
        print_safe(&format!("{}{}", continuation, colorize_message(level, chunk)));
    }
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Config => label.bright_white().bold(),
        LogTag::Rpc => label.bright_cyan().bold(),
        LogTag::Security => label.bright_red().bold(),
        LogTag::Pool => label.bright_blue().bold(),
        LogTag::Decoder => label.bright_magenta().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let label = format!("{:<width$}", level.as_str(), width = LOG_TYPE_WIDTH);
    match level {
        LogLevel::Error => label.bright_red().bold(),
        LogLevel::Warning => label.bright_yellow().bold(),
        LogLevel::Info => label.bright_green().bold(),
        LogLevel::Debug | LogLevel::Verbose => label.white().dimmed(),
    }
}

fn colorize_message(level: LogLevel, message: &str) -> ColoredString {
    match level {
        LogLevel::Error => message.red(),
        LogLevel::Warning => message.yellow(),
        LogLevel::Info => message.normal(),
        LogLevel::Debug | LogLevel::Verbose => message.dimmed(),
    }
}

/// Write a line, exiting quietly if the reader went away
fn print_safe(message: &str) {
    let mut err = stderr();
    if let Err(e) = writeln!(err, "{}", message) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
    let _ = err.flush();
}

/// Wrap text at word boundaries, respecting existing newlines.
/// Words longer than `max_width` are split on character boundaries.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for line in text.split('\n') {
        if line.chars().count() <= max_width {
            result.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();

            if word_len > max_width {
                if !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                }
                let chars: Vec<char> = word.chars().collect();
                for piece in chars.chunks(max_width) {
                    result.push(piece.iter().collect());
                }
            } else if current.is_empty() {
                current = word.to_string();
            } else if current_len + word_len + 1 <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                result.push(std::mem::replace(&mut current, word.to_string()));
            }
        }

        if !current.is_empty() {
            result.push(current);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_unchanged() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_on_word_boundaries() {
        assert_eq!(wrap_text("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_keeps_newlines() {
        assert_eq!(wrap_text("one\ntwo", 20), vec!["one", "two"]);
    }

    #[test]
    fn test_breaks_long_words() {
        let key = "DMjMHJwbd3ubES1L16rGSX5VaGBif9nLefDP5UWEpump";
        let chunks = wrap_text(key, 20);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.concat(), key);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }
}
