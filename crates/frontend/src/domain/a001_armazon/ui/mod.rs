mod create;
mod list;
mod stock;

pub use create::ArmazonCreatePage;
pub use list::ArmazonesPage;
pub use stock::ArmazonesStockPage;
