//! Core domain types
//!
//! These structures mirror the records owned by the generation backend.
//! The client only ever reads them: every fetch yields a fresh snapshot.

pub mod generation;
pub mod icon;
mod timestamp;

pub(crate) use timestamp::deserialize_optional as deserialize_timestamp;
