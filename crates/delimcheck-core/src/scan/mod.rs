//! Line-by-line delimiter balance scanner.
//!
//! The scanner walks each line character by character, tracking whether it
//! is inside a line comment or a string literal, and keeps a stack of open
//! delimiters. It stops at the first unmatched or mismatched closer and
//! reports unclosed openers when the input ends.
//!
//! The lexical tracking is deliberately a heuristic, not a full lexer.
//! Known limitations, kept for compatibility with existing reports:
//!
//! - String state persists across line boundaries, so an unterminated
//!   string literal swallows the following lines.
//! - Escape detection only looks at the single preceding character. A
//!   doubled backslash before a quote (`\\"`) is read as an escaped quote
//!   and the string stays open.
//! - The comment marker is recognized even inside string literals, so a
//!   `//` in a string ends processing of that line.

mod delim;
mod result;

pub use result::{ScanResult, SourceLocation};

use crate::Config;

/// One currently-unclosed opening delimiter.
#[derive(Debug, Clone, Copy)]
struct OpenDelimiter {
    symbol: char,
    closer: char,
    location: SourceLocation,
}

/// Lexical context carried across characters during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Normal,
    LineComment,
    String { quote: char },
}

/// The scanner state for a single pass over the input.
struct Scanner {
    comment_marker: Vec<char>,
    stack: Vec<OpenDelimiter>,
    context: Context,
}

impl Scanner {
    fn new(config: &Config) -> Self {
        Self {
            comment_marker: config.comment_marker.chars().collect(),
            stack: Vec::new(),
            context: Context::Normal,
        }
    }

    /// Scan one line, returning a result if the scan terminates early.
    fn scan_line(&mut self, line: &str, line_number: usize) -> Option<ScanResult> {
        // Line comments never extend past the newline. String state is
        // intentionally left alone; see the module docs.
        if self.context == Context::LineComment {
            self.context = Context::Normal;
        }

        let chars: Vec<char> = line.chars().collect();

        for (idx, &ch) in chars.iter().enumerate() {
            if self.context == Context::LineComment {
                break;
            }

            // The marker check runs before the string check, so a marker
            // inside a string literal still ends the line.
            if !self.comment_marker.is_empty() && chars[idx..].starts_with(&self.comment_marker) {
                self.context = Context::LineComment;
                continue;
            }

            if delim::is_quote(ch) {
                match self.context {
                    Context::Normal => self.context = Context::String { quote: ch },
                    Context::String { quote } if quote == ch => {
                        // Only a single preceding backslash counts as an
                        // escape; an escaped backslash followed by a quote
                        // is still read as an escaped quote.
                        if idx == 0 || chars[idx - 1] != '\\' {
                            self.context = Context::Normal;
                        }
                    }
                    _ => {}
                }
                continue;
            }

            if matches!(self.context, Context::String { .. }) {
                continue;
            }

            let location = SourceLocation {
                line: line_number,
                column: idx + 1,
            };

            if let Some(closer) = delim::closing_for(ch) {
                self.stack.push(OpenDelimiter {
                    symbol: ch,
                    closer,
                    location,
                });
            } else if delim::is_closer(ch) {
                let Some(opened) = self.stack.pop() else {
                    return Some(ScanResult::UnmatchedCloser {
                        symbol: ch,
                        location,
                    });
                };
                if opened.closer != ch {
                    return Some(ScanResult::MismatchedCloser {
                        symbol: ch,
                        location,
                        expected: opened.closer,
                        opened: opened.location,
                    });
                }
            }
        }

        None
    }

    /// Report unclosed openers once all lines are consumed.
    fn finish(self) -> ScanResult {
        self.stack
            .last()
            .map_or(ScanResult::Balanced, |innermost| {
                ScanResult::UnclosedOpeners {
                    symbol: innermost.symbol,
                    location: innermost.location,
                    count: self.stack.len(),
                }
            })
    }
}

/// Scan an ordered sequence of lines for delimiter balance.
///
/// Lines are expected to have their trailing newline already stripped.
/// Line and column numbers in the result are 1-based.
#[must_use]
pub fn scan_lines<'a, I>(lines: I, config: &Config) -> ScanResult
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = Scanner::new(config);

    for (index, line) in lines.into_iter().enumerate() {
        if let Some(result) = scanner.scan_line(line, index + 1) {
            return result;
        }
    }

    scanner.finish()
}

/// Scan a whole source text for delimiter balance.
///
/// Splits the text on line boundaries and strips trailing whitespace from
/// each line before scanning.
#[must_use]
pub fn scan_source(source: &str, config: &Config) -> ScanResult {
    scan_lines(source.lines().map(str::trim_end), config)
}
