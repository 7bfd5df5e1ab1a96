//! Comment parsing: from source text to classified fragments.
//!
//! [`parser`] holds the public entry points. The internals are split the
//! same way the work is: [`atoms`] defines the regex building blocks per
//! comment family, [`matchers`] compiles and runs the per-rule patterns,
//! and [`resolver`] arbitrates between overlapping matches.

pub mod parser;

pub(crate) mod atoms;
pub(crate) mod matchers;
pub(crate) mod resolver;

pub use parser::{parse, parse_with, DoxygenParser, EnabledStyles};
