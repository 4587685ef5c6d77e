mod create;
mod details;
mod list;

pub use create::FichaCreatePage;
pub use details::FichaDetails;
pub use list::FichasPage;
