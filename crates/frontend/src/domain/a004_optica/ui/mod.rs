mod create;
mod delegaciones;
mod details;
mod list;
mod sindicatos;

pub use create::OpticaCreatePage;
pub use delegaciones::OpticaDelegacionesPage;
pub use details::OpticaDetails;
pub use list::OpticasPage;
pub use sindicatos::OpticaSindicatosPage;
