//! Coarse first pass over a document, looking for text shaped like an
//! address in one of the accepted domains.

use regex::Matches;

use crate::language::{Candidate, Domain, ORGANIZATION};

// The local part here is letters and digits only; dots, underscores and
// plus signs end the run. The grammar is wider than this, so something like
// "foo.bar@torpedodepot.net" surfaces here as "bar@torpedodepot.net".
// The boundary after the suffix is an ASCII one: a non-ASCII letter cannot
// continue "com" and so does not block the match.
fn prefilter_pattern() -> String {
    let suffixes = Domain::ALL
        .iter()
        .map(|domain| domain.suffix())
        .collect::<Vec<_>>()
        .join("|");

    format!(r"[A-Za-z0-9]+@{}\.(?:{})(?-u:\b)", ORGANIZATION, suffixes)
}

/// Lazy, left-to-right, non-overlapping sequence of candidates within a
/// text. Call [`candidates`] again to start over.
#[derive(Debug)]
pub struct Candidates<'i> {
    matches: Matches<'static, 'i>,
}

impl<'i> Iterator for Candidates<'i> {
    type Item = Candidate<'i>;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches
            .next()
            .map(|found| Candidate {
                text: found.as_str(),
                offset: found.start(),
            })
    }
}

pub fn candidates(content: &str) -> Candidates<'_> {
    let re = regex!(&prefilter_pattern());

    Candidates {
        matches: re.find_iter(content),
    }
}
