use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::{btree_map::Values, BTreeMap};
use std::sync::Arc;

/// ## Program store
///
/// Source lines by ascending line number. Cloning is cheap so the
/// terminal can hold a copy for completion while the program runs.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    source: Arc<BTreeMap<LineNumber, Line>>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Stores `line`, replacing any line with the same number.
    /// A line with no text deletes that number instead.
    pub fn insert(&mut self, line: Line) -> Option<Line> {
        let source = Arc::make_mut(&mut self.source);
        if line.is_empty() {
            source.remove(&line.number())
        } else {
            source.insert(line.number(), line)
        }
    }

    pub fn remove(&mut self, ln: LineNumber) -> Option<Line> {
        Arc::make_mut(&mut self.source).remove(&ln)
    }

    pub fn get(&self, ln: LineNumber) -> Option<&Line> {
        self.source.get(&ln)
    }

    pub fn lines(&self) -> Values<'_, LineNumber, Line> {
        self.source.values()
    }

    pub fn line_numbers(&self) -> impl Iterator<Item = LineNumber> + '_ {
        self.source.keys().copied()
    }

    /// Used for loading a Listing from a file.
    pub fn load_str(&mut self, s: &str) -> Result<(), Error> {
        if s.trim().is_empty() {
            return Ok(());
        }
        match Line::from_str(s)? {
            Some(line) => {
                self.insert(line);
                Ok(())
            }
            None => Err(error!(DirectStatementInFile)),
        }
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
