pub mod aggregate;

pub use aggregate::Laboratorio;
