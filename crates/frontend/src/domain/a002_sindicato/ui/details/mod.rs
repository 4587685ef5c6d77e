//! Sindicato details
//!
//! - model.rs: API calls
//! - view_model.rs: state and commands
//! - view.rs: component

mod model;
mod view;
mod view_model;

pub use view::SindicatoDetails;
