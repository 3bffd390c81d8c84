use super::{AddOp, Error, MulOp, RelOp};
use crate::error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Scan position over one line of source
///
/// Every `match_*` is speculative. When it fails the position is
/// left exactly where it was, so callers can try alternatives in order.

#[derive(Debug, Clone, Default)]
pub struct Cursor {
    line: Rc<str>,
    pos: usize,
}

impl Cursor {
    pub fn new<T: Into<Rc<str>>>(line: T) -> Cursor {
        Cursor {
            line: line.into(),
            pos: 0,
        }
    }

    pub fn line(&self) -> &Rc<str> {
        &self.line
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(pos <= self.line.len());
        self.pos = pos;
    }

    /// Unscanned text from the current position.
    pub fn rest(&self) -> &str {
        &self.line[self.pos..]
    }

    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_while<F: Fn(char) -> bool>(&mut self, f: F) -> usize {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !f(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.pos - start
    }

    pub fn skip_whitespace(&mut self) {
        self.skip_while(char::is_whitespace);
    }

    pub fn match_eol(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.line.len()
    }

    /// Exact, case-sensitive match of `text`.
    pub fn match_literal(&mut self, text: &str) -> bool {
        let mark = self.pos;
        self.skip_whitespace();
        if self.rest().starts_with(text) {
            self.pos += text.len();
            true
        } else {
            self.pos = mark;
            false
        }
    }

    /// A run of letters, folded to lower case.
    pub fn match_keyword(&mut self) -> Option<String> {
        self.match_word(char::is_alphabetic)
    }

    /// A letter followed by letters or digits, folded to lower case.
    pub fn match_varname(&mut self) -> Option<String> {
        self.match_word(char::is_alphanumeric)
    }

    fn match_word<F: Fn(char) -> bool>(&mut self, tail: F) -> Option<String> {
        let mark = self.pos;
        self.skip_whitespace();
        match self.peek() {
            Some(ch) if ch.is_alphabetic() => {}
            _ => {
                self.pos = mark;
                return None;
            }
        }
        let start = self.pos;
        self.skip_while(tail);
        Some(self.line[start..self.pos].to_lowercase())
    }

    /// Matches keyword `kw` ignoring case. A longer word which only
    /// starts with `kw` does not match.
    pub fn match_nocase(&mut self, kw: &str) -> bool {
        let mark = self.pos;
        match self.match_keyword() {
            Some(word) if word.eq_ignore_ascii_case(kw) => true,
            _ => {
                self.pos = mark;
                false
            }
        }
    }

    /// Unsigned decimal number with an optional fraction. No exponent.
    pub fn match_number(&mut self) -> Option<f64> {
        let mark = self.pos;
        self.skip_whitespace();
        let start = self.pos;
        if self.skip_while(|c| c.is_ascii_digit()) == 0 {
            self.pos = mark;
            return None;
        }
        if self.peek() == Some('.') {
            self.pos += 1;
            self.skip_while(|c| c.is_ascii_digit());
        }
        match self.line[start..self.pos].parse::<f64>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.pos = mark;
                None
            }
        }
    }

    /// Double quoted text without escapes. The quotes are not returned.
    pub fn match_string(&mut self) -> Result<Option<String>> {
        let mark = self.pos;
        self.skip_whitespace();
        if self.peek() != Some('"') {
            self.pos = mark;
            return Ok(None);
        }
        let start = self.pos + 1;
        match self.line[start..].find('"') {
            Some(len) => {
                self.pos = start + len + 1;
                Ok(Some(self.line[start..start + len].to_string()))
            }
            None => {
                self.skip_to_end();
                Err(error!(SyntaxError; "UNCLOSED STRING"))
            }
        }
    }

    pub fn match_relation(&mut self) -> Option<RelOp> {
        RelOp::ALL
            .iter()
            .copied()
            .find(|op| self.match_literal(op.as_str()))
    }

    pub fn match_add_sub(&mut self) -> Option<AddOp> {
        AddOp::ALL
            .iter()
            .copied()
            .find(|op| self.match_literal(op.as_str()))
    }

    pub fn match_mul_div(&mut self) -> Option<MulOp> {
        MulOp::ALL
            .iter()
            .copied()
            .find(|op| self.match_literal(op.as_str()))
    }

    /// Like `match_literal` but fails with a syntax error.
    pub fn expect(&mut self, text: &str) -> Result<()> {
        if self.match_literal(text) {
            Ok(())
        } else {
            Err(error!(SyntaxError; &format!("'{}' EXPECTED", text)))
        }
    }
}
