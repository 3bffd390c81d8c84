//! # Tiny BASIC
//!
//! A line-numbered BASIC that executes each line directly as it is
//! scanned. There is one data type, the double, and strings appear only
//! as literals in `PRINT` and `INPUT`.
//!
//! Run the executable for an interactive shell, or pass program files
//! to run them.
//! ```text
//! TINY BASIC 0.1.0 READY
//!
//! > █
//! ```
//!
//! The interpreter can be embedded. Statements, expression forms, and
//! functions are added with [`mach::Runtime::add_statement`],
//! [`mach::Runtime::add_expression`], and [`mach::Runtime::add_function`].

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
