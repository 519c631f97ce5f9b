// Cached regular expressions used by the prefilter

#[macro_use]
mod cache;
