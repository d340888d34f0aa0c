//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns who is signed in; `query` caches API reads. Both are
//! provided once by `App` and read through context.

pub mod query;
pub mod session;
