//! Skeleton-notation processing for apertium dictionaries
//!
//! The pipeline runs in strict sequence per input line: the [`lexer`] splits
//! a line into text runs and structural characters, the [`parser`] builds a
//! [`line::ParsedLine`] out of them, and the [`render`] module turns the
//! parsed line plus the active stanza's category code into `.dix` entry
//! fragments. The [`processor`] module owns the line-oriented driver that
//! ties these together over whole files.

pub mod diagnostics;
pub mod lexer;
pub mod line;
pub mod parser;
pub mod processor;
pub mod render;
pub mod stanza;
