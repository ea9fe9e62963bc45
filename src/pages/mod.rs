//! One module per screen.

pub mod dashboard;
pub mod feedback;
pub mod login;
pub mod signup;
