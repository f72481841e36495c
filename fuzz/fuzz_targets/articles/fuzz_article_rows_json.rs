// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_article_rows_json
// Purpose: fuzz query-API JSON rows -> decode_records -> list_published
#![no_main]

use clubpress::articles::{decode_records, list_published};
use clubpress::configuration::PreviewSettings;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    if let Ok(rows) = serde_json::from_slice::<Value>(data) {
        // Errors are expected for most inputs; only panics are interesting.
        if let Ok(records) = decode_records(rows) {
            let _ = list_published(&records, None, None, &PreviewSettings::default());
        }
    }
});
