pub mod page_header;
pub mod pagination_controls;
pub mod table;
pub mod ui;
