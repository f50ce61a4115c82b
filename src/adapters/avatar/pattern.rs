//! Shell-style file name patterns, as used by `<unique_id>*` avatar lookups.
//!
//! Syntax: `*` matches any run of non-`/` characters, `?` matches one
//! non-`/` character, `[...]` is a character class (`^` negates, `a-z` is a
//! range) and `\` escapes the next character. Inside a class, `-`, `]` and `\`
//! must be escaped except where they delimit. The whole pattern is validated
//! up front; a malformed pattern never matches anything.

use regex::Regex;
use std::iter::Peekable;
use std::str::CharIndices;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Unterminated class, dangling escape or empty range. Carries the byte
    /// offset of the offending `[` or `\`.
    #[error("syntax error in pattern at byte {0}")]
    Malformed(usize),

    #[error("pattern could not be compiled: {0}")]
    Compile(String),
}

/// Compiled file name pattern.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
    /// False when some class admits no character, e.g. `[z-a]`.
    satisfiable: bool,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let mut translator = Translator {
            chars: pattern.char_indices().peekable(),
            out: String::with_capacity(pattern.len() * 2 + 2),
            satisfiable: true,
        };
        translator.run()?;
        let regex = Regex::new(&translator.out).map_err(|e| PatternError::Compile(e.to_string()))?;
        Ok(Self {
            regex,
            satisfiable: translator.satisfiable,
        })
    }

    /// True if `name` matches the whole pattern.
    pub fn is_match(&self, name: &str) -> bool {
        self.satisfiable && self.regex.is_match(name)
    }
}

/// Rewrites a name pattern into an anchored regex.
struct Translator<'a> {
    chars: Peekable<CharIndices<'a>>,
    out: String,
    satisfiable: bool,
}

impl Translator<'_> {
    fn run(&mut self) -> Result<(), PatternError> {
        self.out.push('^');
        while let Some((pos, c)) = self.chars.next() {
            match c {
                '*' => self.out.push_str("[^/]*"),
                '?' => self.out.push_str("[^/]"),
                '\\' => {
                    let (_, lit) = self.chars.next().ok_or(PatternError::Malformed(pos))?;
                    self.push_literal(lit);
                }
                '[' => self.class(pos)?,
                _ => self.push_literal(c),
            }
        }
        self.out.push('$');
        Ok(())
    }

    fn push_literal(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
    }

    /// Translates a class whose `[` sits at byte `open`.
    fn class(&mut self, open: usize) -> Result<(), PatternError> {
        let negated = self.chars.next_if(|&(_, c)| c == '^').is_some();
        let mut ranges = Vec::new();
        loop {
            if !ranges.is_empty() && self.chars.next_if(|&(_, c)| c == ']').is_some() {
                break;
            }
            let lo = self.class_char(open)?;
            let hi = if self.chars.next_if(|&(_, c)| c == '-').is_some() {
                self.class_char(open)?
            } else {
                lo
            };
            ranges.push((lo, hi));
        }

        // Reversed ranges are legal but admit nothing.
        ranges.retain(|&(lo, hi)| lo <= hi);
        if ranges.is_empty() {
            if negated {
                self.out.push_str(r"[\s\S]");
            } else {
                self.satisfiable = false;
            }
            return Ok(());
        }

        self.out.push('[');
        if negated {
            self.out.push('^');
        }
        for (lo, hi) in ranges {
            self.out.push_str(&format!(r"\x{{{:X}}}-\x{{{:X}}}", lo as u32, hi as u32));
        }
        self.out.push(']');
        Ok(())
    }

    /// One (possibly escaped) class member. The class must continue after it.
    fn class_char(&mut self, open: usize) -> Result<char, PatternError> {
        let c = match self.chars.next() {
            None | Some((_, '-' | ']')) => return Err(PatternError::Malformed(open)),
            Some((_, '\\')) => self.chars.next().ok_or(PatternError::Malformed(open))?.1,
            Some((_, c)) => c,
        };
        if self.chars.peek().is_none() {
            return Err(PatternError::Malformed(open));
        }
        Ok(c)
    }
}
