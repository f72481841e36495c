// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_preview_html
// Purpose: raw HTML blocks go through html5ever inside the preview walk
// Focus: unclosed tags, script/style bodies, comments, entities
#![no_main]

use clubpress::preview::markdown_to_plain_text;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);

    // Leading `<div>` forces an HTML block rather than a paragraph.
    let content = format!("<div>\n{body}\n\nafter");
    let plain = markdown_to_plain_text(&content);
    assert_eq!(plain.trim(), plain);
});
