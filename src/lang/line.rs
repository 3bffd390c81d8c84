use super::{Error, LineNumber};
use crate::error;

/// A numbered line of program source.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    text: String,
}

impl Line {
    pub fn new(number: LineNumber, text: &str) -> Line {
        Line {
            number,
            text: text.trim().to_string(),
        }
    }

    /// Splits the leading line number from the statement text.
    /// Returns `None` when `s` does not start with a digit.
    pub fn from_str(s: &str) -> Result<Option<Line>, Error> {
        let s = s.trim_start();
        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        if digits == 0 {
            return Ok(None);
        }
        match s[..digits].parse::<LineNumber>() {
            Ok(number) => Ok(Some(Line::new(number, &s[digits..]))),
            Err(_) => Err(error!(SyntaxError; "LINE NUMBER OUT OF RANGE")),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\t{}", self.number, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let line = Line::from_str("10 PRINT \"HI\"  \r\n").unwrap().unwrap();
        assert_eq!(line.number(), 10);
        assert_eq!(line.text(), "PRINT \"HI\"");
        assert_eq!(line.to_string(), "10\tPRINT \"HI\"");
    }

    #[test]
    fn test_no_space_after_number() {
        let line = Line::from_str("20goto 10").unwrap().unwrap();
        assert_eq!(line.number(), 20);
        assert_eq!(line.text(), "goto 10");
    }

    #[test]
    fn test_direct() {
        assert_eq!(Line::from_str("print 1"), Ok(None));
        assert_eq!(Line::from_str(""), Ok(None));
    }

    #[test]
    fn test_empty_and_overflow() {
        assert!(Line::from_str("30").unwrap().unwrap().is_empty());
        assert!(Line::from_str("99999999999 END").is_err());
    }
}
