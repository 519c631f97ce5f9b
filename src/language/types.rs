//! Types shared by the prefilter, the grammar, and the annotation layer

use serde::Serialize;
use std::fmt;

/// The organization every accepted address must belong to.
pub const ORGANIZATION: &str = "torpedodepot";

/// The top-level suffixes accepted after the organization name. This is the
/// single list both the prefilter pattern and the grammar's suffix rule are
/// built from; adding a variant here extends both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Domain {
    Com,
    Net,
    Wannabemil,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Com, Domain::Net, Domain::Wannabemil];

    pub fn suffix(&self) -> &'static str {
        match self {
            Domain::Com => "com",
            Domain::Net => "net",
            Domain::Wannabemil => "wannabemil",
        }
    }

    /// Exact, case-sensitive lookup of a suffix keyword.
    pub fn from_suffix(text: &str) -> Option<Domain> {
        Domain::ALL
            .into_iter()
            .find(|domain| domain.suffix() == text)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", ORGANIZATION, self.suffix())
    }
}

/// A substring the prefilter considers plausibly an address, borrowed from
/// the text being scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate<'i> {
    pub text: &'i str,
    pub offset: usize,
}

impl<'i> Candidate<'i> {
    pub fn span(&self) -> Match {
        Match {
            start: self.offset,
            end: self.offset + self.text.len(),
        }
    }
}

/// A validated address, as a half-open range of byte offsets into the
/// scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    /// The matched text, if this range actually lies within `content`.
    pub fn text<'i>(&self, content: &'i str) -> Option<&'i str> {
        content.get(self.start..self.end)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The result of a successful parse of an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Address<'i> {
    pub local: &'i str,
    pub domain: Domain,
}

impl fmt::Display for Address<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

/// Line and column of an offset, both zero-origin. Columns count
/// characters, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn locate(content: &str, offset: usize) -> Position {
        let before = content
            .get(..offset)
            .unwrap_or(content);

        Position {
            line: calculate_line_number(before),
            column: calculate_column_number(before),
        }
    }
}

fn calculate_line_number(before: &str) -> usize {
    before
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

fn calculate_column_number(before: &str) -> usize {
    let line = match before.rfind('\n') {
        Some(start) => &before[start + 1..],
        None => before,
    };
    line.chars()
        .count()
}
