//! Driver implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
mod file;
#[cfg(feature = "file")]
pub mod json_file;
pub mod memory;
#[cfg(feature = "file")]
pub mod text_file;

#[cfg(feature = "console")]
pub use console::ConsoleDriver;
#[cfg(feature = "file")]
pub use json_file::JsonFileDriver;
pub use memory::MemoryDriver;
#[cfg(feature = "file")]
pub use text_file::TextFileDriver;

pub use crate::core::Driver;
