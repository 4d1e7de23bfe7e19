//! Output destinations

pub mod file;

pub use file::FileAppender;
