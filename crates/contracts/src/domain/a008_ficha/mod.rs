pub mod aggregate;
pub mod lens_rows;

pub use aggregate::{Ficha, FichaForm, MIN_DNI_LEN};
pub use lens_rows::{rows_for, LensTypeCode, LenteRow};
