//! Break a candidate address into tokens

use std::ops::Range;

use chumsky::prelude::*;

use crate::language::{Domain, ORGANIZATION};

use super::parser::ParsingError;

pub type Span = Range<usize>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A run of ASCII letters and digits that is not a keyword.
    Word,
    /// The organization name, "torpedodepot".
    Organization,
    /// One of the accepted top-level suffixes.
    Suffix(Domain),
    At,
    Dot,
    /// Separator allowed inside a local-part segment: '_', '+', or '-'.
    Punct,
}

impl Kind {
    /// Keywords are only keywords where the grammar asks for them; anywhere
    /// else a keyword is just a word.
    pub fn is_atom(&self) -> bool {
        matches!(self, Kind::Word | Kind::Organization | Kind::Suffix(_))
    }
}

pub type Token = (Kind, Span);

// A keyword only when the whole run equals it, so "comX" stays a Word.
fn classify(word: &str) -> Kind {
    if word == ORGANIZATION {
        Kind::Organization
    } else if let Some(domain) = Domain::from_suffix(word) {
        Kind::Suffix(domain)
    } else {
        Kind::Word
    }
}

// WORD    = 1*(ALPHA / DIGIT)
// SYMBOL  = "@" / "." / "_" / "+" / "-"
// TOKENS  = *(WORD / SYMBOL) EOF
pub(super) fn lexer() -> impl Parser<char, Vec<Token>, Error = Simple<char>> {
    let word = filter(|c: &char| c.is_ascii_alphanumeric())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(|word| classify(&word));

    let symbol = choice((
        just('@').to(Kind::At),
        just('.').to(Kind::Dot),
        one_of("_+-").to(Kind::Punct),
    ));

    word.or(symbol)
        .map_with_span(|kind, span| (kind, span))
        .repeated()
        .then_ignore(end())
}

/// Tokenize the whole of `content`. Any character outside the token set is
/// an error; it is never skipped.
pub fn tokenize(content: &str) -> Result<Vec<Token>, ParsingError> {
    // Spans count characters. Every character before an error, and every
    // character in a successful result, is ASCII, so these are byte offsets
    // as well.
    lexer()
        .parse(content)
        .map_err(|errors| match errors.into_iter().next() {
            Some(error) => match error.found() {
                Some(c) => ParsingError::InvalidCharacter(error.span().start, *c),
                None => ParsingError::UnexpectedEndOfInput(error.span().start),
            },
            None => ParsingError::IllegalParserState(0),
        })
}
