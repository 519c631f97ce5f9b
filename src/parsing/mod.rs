//! Grammar validator for candidate addresses

use crate::language::Address;

pub mod lexer;
pub mod parser;

pub use parser::ParsingError;

/// Tokenize and parse a single candidate. The whole of `content` must be
/// consumed for the parse to succeed. The lexer and parser are built anew
/// for every call.
pub fn parse(content: &str) -> Result<Address<'_>, ParsingError> {
    let tokens = lexer::tokenize(content)?;
    parser::parse_email_address(content, tokens)
}

/// Decide whether `content` is, in its entirety, an address in one of the
/// accepted domains. Every kind of failure (an unrecognized character, a
/// syntax error, input left over after the address) is reported as false.
/// The parser's errors are returned as values and dropped here; nothing is
/// printed or logged.
pub fn validate(content: &str) -> bool {
    parse(content).is_ok()
}
