pub mod a001_armazon;
pub mod a002_sindicato;
pub mod a003_delegacion;
pub mod a004_optica;
pub mod a005_tipo_lente;
pub mod a006_laboratorio;
pub mod a007_estado;
pub mod a008_ficha;
pub mod common;
