//! Network layer: API payload types, request helpers, and error
//! normalization for the backend's `detail` error convention.

pub mod api;
pub mod error;
pub mod types;
