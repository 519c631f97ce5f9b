// Types describing addresses and where they were found in a document

mod types;

// Re-export all public symbols
pub use types::*;
