#![no_main]

use libfuzzer_sys::fuzz_target;
use pr1::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // No file context, so inclusion directives resolve against cwd and
        // fail fast into Error tokens.
        let tokens = lexer::tokenize(s, None);
        let outcome = parser::parse(tokens);
        assert!(outcome.tree.current_is_root());
    }
});
