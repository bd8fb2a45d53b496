//! # skel2dix
//!
//! A preprocessor for apertium `.dix` dictionaries.
//!
//! If you are compiling from corpus you need power tools, and if you are
//! editing existing files you need an XML-aware editor. This crate covers the
//! case in between: organised word-list data that needs to become dictionary
//! XML. Input is a compact line notation,
//!
//! ```text
//! == verb
//! .buy:irregularbuy.acheter
//! {.wierd.bizzare.strange}.bizzare
//! ```
//!
//! and output is one `.dix` entry fragment per parsed line, ready to paste
//! into a monolingual or bilingual dictionary.

pub mod skel;
