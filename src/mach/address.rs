use super::Listing;
use crate::lang::LineNumber;

/// ## Address table
///
/// Line numbers of the program in order, captured by RUN.
/// Jumps resolve to a position in this table, so edits made after
/// RUN are not seen until the next RUN.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressTable {
    lines: Vec<LineNumber>,
}

impl AddressTable {
    pub fn snapshot(listing: &Listing) -> AddressTable {
        AddressTable {
            lines: listing.line_numbers().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_number(&self, index: usize) -> Option<LineNumber> {
        self.lines.get(index).copied()
    }

    pub fn index_of(&self, line_number: LineNumber) -> Option<usize> {
        self.lines.binary_search(&line_number).ok()
    }
}
