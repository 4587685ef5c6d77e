pub mod details;
pub mod list;

pub use details::SindicatoDetails;
pub use list::SindicatosPage;
