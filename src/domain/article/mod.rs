mod category;
mod result_limit;
mod search_query;
mod types;

pub use category::*;
pub use result_limit::*;
pub use search_query::*;
pub use types::*;
