//! gradekeep-core — Student records, letter grades, and the in-memory store.
//!
//! This crate defines the data model and roster operations that the rest of
//! gradekeep builds on. It never touches the filesystem; persistence lives
//! in `gradekeep-persist`.

pub mod error;
pub mod model;
pub mod store;

pub use error::StoreError;
pub use model::Student;
pub use store::{Store, Summary};
