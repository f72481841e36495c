// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_normalize_preview
// Purpose: arbitrary Markdown + length -> normalize_preview invariants
#![no_main]

use arbitrary::Arbitrary;
use clubpress::normalize_preview;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    content: String,
    max_length: u16,
}

fuzz_target!(|input: Input| {
    let max_length = usize::from(input.max_length);
    let preview = normalize_preview(&input.content, max_length);

    assert!(preview.chars().count() <= max_length + 3);
    assert_eq!(preview.trim(), preview);
    assert!(!preview.contains("\n\n\n"));
    assert!(!preview.contains("  "));
});
