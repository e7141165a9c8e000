mod author;
mod book;
mod home;

pub use author::AuthorForm;
pub use book::BookForm;
pub use home::HomeForm;
