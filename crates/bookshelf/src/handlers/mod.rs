pub mod authors;
pub mod books;
pub mod error;
pub mod health;
pub mod listing;
pub mod pages;

pub use error::AppError;

/// Path of the catalog listing; successful writes redirect here.
pub const HOME_PATH: &str = "/home";
