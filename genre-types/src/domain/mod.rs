//! Domain models for the genre taxonomy service.

pub mod genre;
pub mod slug;

pub use genre::{Genre, GenreId};
pub use slug::slugify;
