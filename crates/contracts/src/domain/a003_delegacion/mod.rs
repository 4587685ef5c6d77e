pub mod aggregate;
pub mod georef;

pub use aggregate::{Delegacion, DelegacionDto, DelegacionForm};
pub use georef::{GeorefPlace, GeorefQuery, LocalidadesResponse, ProvinciasResponse};
