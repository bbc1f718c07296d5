//! Core abstractions shared by the market agent crates
//!
//! This crate only carries the error vocabulary used at the tool boundary, so
//! that tool implementations and the registry agree on how failures read.

pub mod error;

pub use error::{Error, Result};
