//! Remote terms client for the jargon browser
//!
//! This crate provides:
//! - The `TermsClient` trait for retrieving the terminology list
//! - An HTTP implementation over a fixed JSON endpoint
//! - The `ClientError` taxonomy for fetch failures

pub mod client;
pub mod error;
pub mod http;

pub use client::TermsClient;
pub use error::ClientError;
pub use http::HttpTermsClient;
