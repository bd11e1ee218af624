//! Module for the activity roster API.
//!
//! Lists the school's extracurricular activities and lets teachers sign
//! students up for them or take them off.

pub mod handlers;
pub mod routes;

pub use routes::activities_router;
