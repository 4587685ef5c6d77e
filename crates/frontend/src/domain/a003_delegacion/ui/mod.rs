pub mod details;
pub mod list;

pub use details::DelegacionDetails;
pub use list::DelegacionesPage;
