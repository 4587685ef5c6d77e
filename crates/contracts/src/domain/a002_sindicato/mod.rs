pub mod aggregate;

pub use aggregate::{validate_nombre, Sindicato, SindicatoDto, SindicatoUpdateDto};
