//! Shared helpers for integration tests
//!
//! Tests run against an in-process stand-in for the Alpha Vantage endpoint so
//! request counts and failure modes can be observed.

#![allow(dead_code)]

pub mod fixtures;
pub mod server;

pub use server::{StubProvider, refused_base_url};
