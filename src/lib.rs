//! Find Torpedodepot email addresses in a document.
//!
//! A regex prefilter picks out text shaped like `name@torpedodepot.<suffix>`
//! and each candidate is then tokenized and parsed against the address
//! grammar, which must consume it completely. Hosts call [`scanning::scan`]
//! or [`scanning::highlight`] whenever their text changes.

#[macro_use]
mod regex;

pub mod annotation;
pub mod language;
pub mod parsing;
pub mod scanning;

pub use parsing::validate;
pub use scanning::scan;
