//! Annotations handed to the host for display

use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::language::Match;

pub use tinytemplate::error::Error as RenderError;

static HOVER: &str = "Valid Torpedodepot Email: {email}";

/// A validated range together with the message shown when hovering over it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub range: Match,
    pub message: String,
}

/// Receiver for the annotations of one scan. Each call carries the complete
/// set for the current text and replaces whatever was delivered before.
pub trait Annotate {
    fn annotate(&mut self, annotations: Vec<Annotation>);
}

impl Annotate for Vec<Annotation> {
    fn annotate(&mut self, annotations: Vec<Annotation>) {
        *self = annotations;
    }
}

#[derive(Serialize)]
struct Context<'a> {
    email: &'a str,
}

/// Renders hover messages. Built once by the host and passed into each scan.
pub struct Annotator {
    templates: TinyTemplate<'static>,
}

impl Annotator {
    pub fn new() -> Result<Annotator, RenderError> {
        let mut templates = TinyTemplate::new();
        templates.set_default_formatter(&format_unescaped);
        templates.add_template("hover", HOVER)?;

        Ok(Annotator { templates })
    }

    pub fn message(&self, email: &str) -> Result<String, RenderError> {
        self.templates
            .render("hover", &Context { email })
    }
}
