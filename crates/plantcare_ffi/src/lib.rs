//! Flutter bridge for the plant reminder core.

pub mod api;
mod host;
