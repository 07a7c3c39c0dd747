//! Input handling module

pub mod collection;
pub mod file_reader;

pub use collection::CollectionReader;
pub use file_reader::FileReader;
