// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_search_query
// Purpose: SearchQuery::parse and LIKE escaping on arbitrary text
#![no_main]

use clubpress::domain::SearchQuery;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data).to_string();

    if let Ok(Some(query)) = SearchQuery::parse(input) {
        let pattern = query.like_pattern();
        assert!(pattern.starts_with('%') && pattern.ends_with('%'));
        assert!(query.matches(query.as_ref()));
    }
});
