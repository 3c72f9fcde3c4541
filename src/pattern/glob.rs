//! Gitwildmatch glob compilation and matching.
//!
//! Patterns are compiled once into a token list and matched against
//! slash-separated relative paths:
//! - `*` matches zero or more characters within one segment
//! - `?` matches exactly one character other than `/`
//! - `[abc]`, `[a-z]`, `[!abc]`, `[^abc]` match one character other than `/`
//! - `**/` at the start or after a `/` matches zero or more whole directories
//! - `/**` at the end matches everything inside a directory
//! - `\x` matches `x` literally
//!
//! A `**` that is not a whole segment behaves like `*`.

use std::cell::Cell;

/// Upper bound on recursive match calls. Adversarial patterns such as
/// `*a*a*a*a*b` would otherwise backtrack exponentially; past the budget
/// the match is treated as a failure.
const MAX_MATCH_CALLS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    /// `?`
    AnyChar,
    /// `*` inside a segment
    Star,
    /// `**/`: zero or more leading directories
    AnyDirs,
    /// trailing `**` after a slash: anything, across segments
    AnyTail,
    Class(CharClass),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CharClass {
    negated: bool,
    ranges: Vec<(char, char)>,
}

impl CharClass {
    fn matches(&self, c: char) -> bool {
        let hit = self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
        hit != self.negated
    }
}

/// A compiled gitwildmatch pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glob {
    tokens: Vec<Token>,
}

impl Glob {
    /// Compile a pattern body (no `!` prefix, no trailing `/`).
    pub fn new(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::with_capacity(chars.len());
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '\\' => {
                    // A lone trailing backslash matches nothing useful; keep it literal.
                    match chars.get(i + 1) {
                        Some(&next) => {
                            tokens.push(Token::Literal(next));
                            i += 2;
                        }
                        None => {
                            tokens.push(Token::Literal('\\'));
                            i += 1;
                        }
                    }
                }
                '?' => {
                    tokens.push(Token::AnyChar);
                    i += 1;
                }
                '*' => {
                    let start = i;
                    while i < chars.len() && chars[i] == '*' {
                        i += 1;
                    }
                    let run = i - start;
                    let at_segment_start = start == 0 || chars[start - 1] == '/';
                    let at_segment_end = i == chars.len() || chars[i] == '/';

                    if run >= 2 && at_segment_start && at_segment_end {
                        if i == chars.len() {
                            tokens.push(Token::AnyTail);
                        } else {
                            // swallow the slash: `**/` is one token
                            tokens.push(Token::AnyDirs);
                            i += 1;
                        }
                    } else {
                        tokens.push(Token::Star);
                    }
                }
                '[' => match parse_class(&chars, i) {
                    Some((class, next)) => {
                        tokens.push(Token::Class(class));
                        i = next;
                    }
                    None => {
                        tokens.push(Token::Literal('['));
                        i += 1;
                    }
                },
                c => {
                    tokens.push(Token::Literal(c));
                    i += 1;
                }
            }
        }

        Self { tokens }
    }

    /// Match the whole of `input` against this glob.
    pub fn is_match(&self, input: &str) -> bool {
        let input: Vec<char> = input.chars().collect();
        let calls = Cell::new(0usize);
        match_bounded(&self.tokens, 0, &input, 0, &calls)
    }
}

/// Parse a bracket expression starting at `chars[start] == '['`.
///
/// Returns the class and the index just past the closing `]`, or `None`
/// when the bracket is never closed.
fn parse_class(chars: &[char], start: usize) -> Option<(CharClass, usize)> {
    let mut i = start + 1;
    let mut negated = false;
    if matches!(chars.get(i), Some('!') | Some('^')) {
        negated = true;
        i += 1;
    }

    let mut ranges = Vec::new();
    let mut first = true;
    loop {
        let c = *chars.get(i)?;
        if c == ']' && !first {
            return Some((CharClass { negated, ranges }, i + 1));
        }
        first = false;

        let lo = if c == '\\' {
            i += 1;
            *chars.get(i)?
        } else {
            c
        };
        i += 1;

        // `a-z`, but a `-` right before `]` is literal
        if chars.get(i) == Some(&'-') && chars.get(i + 1).is_some_and(|&n| n != ']') {
            let mut hi = chars[i + 1];
            i += 2;
            if hi == '\\' {
                hi = *chars.get(i)?;
                i += 1;
            }
            ranges.push((lo, hi));
        } else {
            ranges.push((lo, lo));
        }
    }
}

fn match_bounded(
    tokens: &[Token],
    ti: usize,
    input: &[char],
    ii: usize,
    calls: &Cell<usize>,
) -> bool {
    let count = calls.get() + 1;
    calls.set(count);
    if count > MAX_MATCH_CALLS {
        return false;
    }

    let Some(token) = tokens.get(ti) else {
        return ii == input.len();
    };

    match token {
        Token::Literal(c) => {
            input.get(ii) == Some(c) && match_bounded(tokens, ti + 1, input, ii + 1, calls)
        }
        Token::AnyChar => input
            .get(ii)
            .is_some_and(|&c| c != '/' && match_bounded(tokens, ti + 1, input, ii + 1, calls)),
        Token::Class(class) => input.get(ii).is_some_and(|&c| {
            c != '/' && class.matches(c) && match_bounded(tokens, ti + 1, input, ii + 1, calls)
        }),
        Token::Star => {
            // Try 0, 1, 2, ... characters, stopping at the segment boundary
            let mut end = ii;
            loop {
                if match_bounded(tokens, ti + 1, input, end, calls) {
                    return true;
                }
                if end >= input.len() || input[end] == '/' {
                    return false;
                }
                end += 1;
            }
        }
        Token::AnyDirs => {
            // Zero directories, or resume right after any later slash
            if match_bounded(tokens, ti + 1, input, ii, calls) {
                return true;
            }
            (ii..input.len())
                .filter(|&pos| input[pos] == '/')
                .any(|pos| match_bounded(tokens, ti + 1, input, pos + 1, calls))
        }
        Token::AnyTail => true,
    }
}
