//! Client for the tabletop.events library games API

pub mod library;

// Re-exports for public API convenience
pub use library::{fetch_library, LibraryGame, DEFAULT_PAGE_SIZE, LIBRARY_ID};
