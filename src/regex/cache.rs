// Compile a pattern once and hand back the same &'static Regex on every
// subsequent call from that site. Patterns are fixed at build time, so a
// failure to compile is a programming error.
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
