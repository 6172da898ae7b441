//! Iconsmith Core
//!
//! Core types and abstractions shared by the Iconsmith client and CLI.
//!
//! This crate contains:
//! - Domain types: generation tasks and icons as the backend reports them
//! - DTOs: request and response bodies for the generation API
//! - Validation: form-level checks run before any request is issued

pub mod domain;
pub mod dto;
pub mod validation;
