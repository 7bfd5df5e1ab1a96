//! doxy-parser: classify Doxygen and Javadoc markup inside source comments.
//!
//! The crate takes a buffer of source text, finds the comment regions in it,
//! and returns byte-offset fragments describing every piece of markup worth
//! highlighting: commands such as `\brief` or `@param[in]`, their arguments,
//! and the markdown emphasis spans (`**bold**`, `*italic*`, `~~strike~~`,
//! `` `code` ``) that Doxygen renders inside comments.
//!
//! The entry point is [`doxy::parsing::DoxygenParser`], which borrows an
//! immutable [`doxy::catalog::CommandCatalog`] describing every recognized
//! command. Catalogs are built once, validated eagerly, and shared freely.

pub mod doxy;
