pub mod a001_armazon;
pub mod a002_sindicato;
pub mod a003_delegacion;
pub mod a004_optica;
pub mod a008_ficha;
