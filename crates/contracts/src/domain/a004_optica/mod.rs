pub mod aggregate;
pub mod grouping;

pub use aggregate::{validate_optica_nombre, Optica, OpticaDto, OpticaLink, OpticaLinkAction, OpticaUpdateDto};
pub use grouping::{group_by_delegacion, group_by_sindicato, DelegacionGroup, SindicatoGroup};
