pub mod error;
pub mod source_loader;
pub mod window;
