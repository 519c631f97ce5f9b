//! Scan a document for valid addresses and report them to a host

use tracing::debug;

use crate::annotation::{Annotate, Annotation, Annotator, RenderError};
use crate::language::{Candidate, Match};
use crate::parsing;

pub mod prefilter;

pub use prefilter::{candidates, Candidates};

// candidates that survive the grammar, in the order the prefilter found them
fn accepted(content: &str) -> impl Iterator<Item = Candidate<'_>> {
    candidates(content).filter(|candidate| parsing::validate(candidate.text))
}

/// Run the prefilter over the entire text and keep the candidates the
/// grammar accepts. There is no state carried between calls; hosts re-scan
/// whenever the document changes.
pub fn scan(content: &str) -> Vec<Match> {
    let matches: Vec<Match> = accepted(content)
        .map(|candidate| candidate.span())
        .collect();

    debug!(
        "Found {} address{}",
        matches.len(),
        if matches.len() == 1 { "" } else { "es" }
    );

    matches
}

/// Scan the text, render a hover message for each match, and hand the
/// complete set to the sink in a single call. Returns the number of
/// annotations delivered.
pub fn highlight<A>(
    content: &str,
    annotator: &Annotator,
    sink: &mut A,
) -> Result<usize, RenderError>
where
    A: Annotate + ?Sized,
{
    let mut annotations = Vec::new();

    for candidate in accepted(content) {
        let message = annotator.message(candidate.text)?;
        annotations.push(Annotation {
            range: candidate.span(),
            message,
        });
    }

    let count = annotations.len();
    debug!(count, "Delivering annotations");
    sink.annotate(annotations);

    Ok(count)
}
