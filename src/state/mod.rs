//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `dashboard`, `feedback`) so
//! individual pages depend on small focused models. The dashboard and
//! feedback models are pure: pages drive them with events and render the
//! result, which keeps every transition testable off the browser.

pub mod dashboard;
pub mod feedback;
pub mod session;
