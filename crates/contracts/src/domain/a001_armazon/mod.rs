pub mod aggregate;
pub mod duplicates;
pub mod validation;

pub use aggregate::{Armazon, ArmazonDto, CodeTriple};
pub use duplicates::{submit_new_armazon, ArmazonGateway, SubmitError, SubmitOutcome};
pub use validation::{normalize_code, ArmazonForm};
