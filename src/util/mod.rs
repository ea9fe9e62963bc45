//! Browser glue utilities.

pub mod token_store;
