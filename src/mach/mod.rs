/*!
## Rust Machine Module

This Rust module interprets BASIC. A program line is scanned and
executed in the same pass; there is no intermediate code.

*/

mod address;
mod eval;
mod extension;
mod format;
mod frame;
mod function;
mod listing;
mod runtime;
mod stack;
mod statement;
mod var;

pub use address::AddressTable;
pub use extension::{ExpressionHook, Hooks, StatementHook};
pub use format::format_number;
pub use frame::{Frame, MAX_FRAMES};
pub use function::{Body, Builtin, Function, Functions, Native};
pub use listing::Listing;
pub use runtime::{Event, ForLoop, Runtime};
pub use stack::Stack;
pub use var::Var;

#[cfg(test)]
mod tests;
