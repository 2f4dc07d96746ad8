//! Domain types, error taxonomy, and pure storyboard rules shared by
//! every other crate in the workspace.

pub mod error;
pub mod storyboard;
pub mod types;
