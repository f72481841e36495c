pub mod articles;
pub mod configuration;
pub mod dates;
pub mod domain;
pub mod preview;
pub mod telemetry;
pub mod utils;

pub use preview::{normalize_preview, normalize_preview_default};
pub use utils::*;
