//! Data Transfer Objects for the generation API
//!
//! Request bodies, query parameters and response envelopes exchanged with
//! the backend. Optional request fields are left out of the payload when
//! unset so the backend's own defaults apply.

pub mod generate;
pub mod health;
pub mod icon;
