// src/files/mod.rs
// Line-addressable file mutation: read, edit, insert, delete, replace

pub mod edit;
pub mod io;
pub mod lines;
pub mod replace;
pub mod validate;

pub use self::edit::{
    delete_lines, edit_lines, insert_lines, read_lines, DeleteOutcome, EditOutcome,
    InsertOutcome, LineEdit, ReadOutcome,
};
pub use self::lines::{join_lines, split_lines, LineRecord};
pub use self::replace::{replace_pattern, ReplaceOutcome};
