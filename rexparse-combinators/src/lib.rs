//! A small parser-combinator toolkit over buffered rune sequences.
//!
//! Parsers are plain values of type [`Parser`]. They take an immutable [`Input`] cursor and
//! either fail, without any diagnostic payload, or return a [`Parsed`] result together with the
//! remaining input. Larger parsers are built from the primitive matchers with the combinators
//! in this crate; [`Forward`] ties the knot for rules that refer to each other.

mod combinator;
mod forward;
mod input;
mod parsed;
mod parser;
mod primitive;
mod tracker;

pub use combinator::{alt, concat, nested, opt, rep, rep1};
pub use forward::Forward;
pub use input::Input;
pub use parsed::{Parsed, Value};
pub use parser::{Parser, Reply};
pub use primitive::{expect_rune, expect_rune_in, expect_rune_in_range, expect_runes, expect_string};
pub use tracker::FailureTracker;
