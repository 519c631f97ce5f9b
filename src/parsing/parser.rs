//! Parser for the address grammar, written as combinators over the token
//! stream:
//!
//! ```text
//! emailAddress : localPart '@' domain
//! localPart    : segment ('.' segment)*
//! segment      : atom (PUNCT* atom)*
//! atom         : WORD | KEYWORD
//! domain       : 'torpedodepot' '.' suffix
//! suffix       : 'com' | 'net' | 'wannabemil'
//! ```

use std::fmt;

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use chumsky::{Error as _, Stream};

use crate::language::{Address, Domain};

use super::lexer::{Kind, Span, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    IllegalParserState(usize),
    InvalidCharacter(usize, char),
    UnexpectedEndOfInput(usize),
    Expected(usize, &'static str),
    TrailingInput(usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::IllegalParserState(offset) => *offset,
            ParsingError::InvalidCharacter(offset, _) => *offset,
            ParsingError::UnexpectedEndOfInput(offset) => *offset,
            ParsingError::Expected(offset, _) => *offset,
            ParsingError::TrailingInput(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::IllegalParserState(_) => "illegal parser state".to_string(),
            ParsingError::InvalidCharacter(_, c) => format!("invalid character '{}'", c),
            ParsingError::UnexpectedEndOfInput(_) => "unexpected end of input".to_string(),
            ParsingError::Expected(_, value) => format!("expected {}", value),
            ParsingError::TrailingInput(_) => "unexpected input after address".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message(), self.offset())
    }
}

impl std::error::Error for ParsingError {}

// Only the end-of-input parser lists "nothing" among what it expected, which
// is how leftover tokens are told apart from ordinary syntax errors.
impl From<Simple<Kind>> for ParsingError {
    fn from(error: Simple<Kind>) -> Self {
        let offset = error
            .span()
            .start;

        if let SimpleReason::Custom(_) = error.reason() {
            return ParsingError::IllegalParserState(offset);
        }

        match error.found() {
            None => ParsingError::UnexpectedEndOfInput(offset),
            Some(_) if error
                .expected()
                .any(|expected| expected.is_none()) =>
            {
                ParsingError::TrailingInput(offset)
            }
            Some(_) => ParsingError::Expected(offset, error.label().unwrap_or("an address")),
        }
    }
}

// atom : WORD | KEYWORD
fn atom() -> impl Parser<Kind, Kind, Error = Simple<Kind>> + Clone {
    filter(Kind::is_atom).labelled("letters or digits")
}

// segment : atom (PUNCT* atom)*
fn segment() -> impl Parser<Kind, (), Error = Simple<Kind>> + Clone {
    atom()
        .then(
            just(Kind::Punct)
                .repeated()
                .then(atom())
                .repeated(),
        )
        .ignored()
}

// localPart : segment ('.' segment)*
//
// The value is the slice of the original text the segments cover.
fn local_part<'i>(
    original: &'i str,
) -> impl Parser<Kind, &'i str, Error = Simple<Kind>> + 'i {
    segment()
        .then(
            just(Kind::Dot)
                .ignore_then(segment())
                .repeated(),
        )
        .try_map(move |_, span: Span| {
            original
                .get(span.clone())
                .ok_or_else(|| Simple::custom(span, "local part outside of input"))
        })
}

// suffix : 'com' | 'net' | 'wannabemil'
fn suffix() -> impl Parser<Kind, Domain, Error = Simple<Kind>> {
    filter_map(|span, kind| match kind {
        Kind::Suffix(domain) => Ok(domain),
        _ => Err(Simple::expected_input_found(
            span,
            Domain::ALL
                .into_iter()
                .map(|domain| Some(Kind::Suffix(domain))),
            Some(kind),
        )),
    })
    .labelled("a Torpedodepot domain suffix")
}

// domain : 'torpedodepot' '.' suffix
fn domain() -> impl Parser<Kind, Domain, Error = Simple<Kind>> {
    just(Kind::Organization)
        .labelled("the organization name")
        .ignore_then(just(Kind::Dot).labelled("'.'"))
        .ignore_then(suffix())
}

// emailAddress : localPart '@' domain
fn email_address<'i>(
    original: &'i str,
) -> impl Parser<Kind, Address<'i>, Error = Simple<Kind>> + 'i {
    local_part(original)
        .then_ignore(just(Kind::At).labelled("'@'"))
        .then(domain())
        .map(|(local, domain)| Address { local, domain })
}

fn stream(
    original: &str,
    tokens: Vec<Token>,
) -> Stream<'static, Kind, Span, std::vec::IntoIter<Token>> {
    let eoi = original.len()..original.len();
    Stream::from_iter(eoi, tokens.into_iter())
}

fn first_error(errors: Vec<Simple<Kind>>) -> ParsingError {
    errors
        .into_iter()
        .next()
        .map(ParsingError::from)
        .unwrap_or(ParsingError::IllegalParserState(0))
}

/// Run the `emailAddress` production alone. Tokens after the address are
/// left where they are.
pub fn read_email_address<'i>(
    original: &'i str,
    tokens: Vec<Token>,
) -> Result<Address<'i>, ParsingError> {
    email_address(original)
        .parse(stream(original, tokens))
        .map_err(first_error)
}

/// Parse a complete address. Succeeds only if the grammar matches and
/// every token up to the end of input has been consumed.
pub fn parse_email_address<'i>(
    original: &'i str,
    tokens: Vec<Token>,
) -> Result<Address<'i>, ParsingError> {
    email_address(original)
        .then_ignore(end())
        .parse(stream(original, tokens))
        .map_err(first_error)
}
