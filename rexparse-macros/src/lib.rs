//! Compile-time checked regex patterns.
//!
//! ```
//! use rexparse::ast::Regex;
//! use rexparse_macros::regex;
//!
//! let regex: Regex = regex!("[a-z_][a-z0-9_]*");
//! assert_eq!(regex, rexparse::parse_regex("[a-z_][a-z0-9_]*").unwrap());
//! ```
//!
//! An invalid pattern is a compile error pointing at the literal:
//!
//! ```compile_fail
//! let regex = rexparse_macros::regex!("[0-9");
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

use crate::regex::RegexInput;

mod regex;

/// Parses a pattern literal at compile time and expands to the `rexparse::ast::Regex` it
/// parses to.
///
/// With the `dot` feature, a `#[graph = "path.dot"]` attribute before the literal also writes
/// the syntax tree as a Graphviz file while compiling.
#[proc_macro]
pub fn regex(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as RegexInput);
    input.compile().into()
}
