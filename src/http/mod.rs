//! HTTP layer for the library service
//!
//! Route handlers translating requests into operations on the shared book collection.

pub mod body;
pub mod handlers;
