// src/traverse/mod.rs
// Depth-first directory traversal: search and listing

pub mod list;
pub mod search;

pub use self::list::{list_directory, EntryKind, ListEntry};
pub use self::search::{search, SearchMatch, SearchOutcome};
