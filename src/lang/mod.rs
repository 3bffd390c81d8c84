/*!
# Rust Language Module

This Rust module scans BASIC source one line at a time.
Nothing here is tokenized ahead of time; the machine asks the
`Cursor` for the next keyword, number, name, string, or operator
exactly when it needs one.

*/

#[macro_use]
mod error;
mod cursor;
mod line;
mod token;

pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
pub use token::{AddOp, MulOp, RelOp};

pub type LineNumber = u32;

#[cfg(test)]
mod tests;
