//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, completion policy and scheduler into use-cases.
//! - Keep UI/FFI layers decoupled from internal wiring.

pub mod reminder_service;
