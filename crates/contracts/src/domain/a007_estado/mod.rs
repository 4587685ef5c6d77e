pub mod aggregate;

pub use aggregate::Estado;
