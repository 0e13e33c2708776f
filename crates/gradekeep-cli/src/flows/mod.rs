//! One module per interactive menu flow.

pub mod add;
pub mod delete;
pub mod edit;
pub mod search;
pub mod summary;
