mod json_file_repository;
mod traits;

pub use json_file_repository::JsonFileRepository;
pub use traits::BookRepository;
