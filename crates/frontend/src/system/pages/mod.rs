pub mod complementos;
pub mod home;
pub mod login;
pub mod reports;
