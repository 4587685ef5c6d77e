pub mod error;
pub mod list_query;
pub mod suggestions;
pub mod validation;
