pub mod aggregate;
pub mod validation;

pub use aggregate::{reset_password_for_year, sort_by_nombre, Rol, RoleName, Usuario, UsuarioDto, UsuarioUpdateDto};
pub use validation::UsuarioForm;
