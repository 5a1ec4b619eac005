//! In-memory stores backing the HTTP layer.
//!
//! Each store is a single shared map behind one lock; every operation is a
//! direct key lookup. State lives for the process lifetime only.

mod task_store;
mod user_store;

pub use task_store::TaskStore;
pub use user_store::UserStore;
