pub mod aggregate;

pub use aggregate::TipoLente;
