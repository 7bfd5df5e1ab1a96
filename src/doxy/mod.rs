//! Comment markup classification.
//!
//! The pipeline has three layers:
//!
//! 1. [`lexing`] splits raw source text into comment spans and tags each span
//!    with its style (`//`, `///`, `//!`, `/*`, `/**`, `/*!`).
//! 2. [`parsing`] and [`inlines`] scan the enabled spans for command matches
//!    and markdown emphasis candidates.
//! 3. The fragment resolver arbitrates overlapping candidates and returns
//!    non-overlapping [`fragments::Fragment`] values grouped per match.

pub mod catalog;
pub mod completion;
pub mod fragments;
pub mod inlines;
pub mod lexing;
pub mod parsing;
pub mod testing;
