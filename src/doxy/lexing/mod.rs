//! Comment extraction.
//!
//! [`tokens`] defines the low-level token set for walking raw source text;
//! [`comments`] runs the state machine that turns those tokens into
//! [`comments::CommentSpan`] values tagged with a [`comments::CommentStyle`].

pub mod comments;
pub mod tokens;

pub use comments::{split_comments, CommentSpan, CommentStyle};
