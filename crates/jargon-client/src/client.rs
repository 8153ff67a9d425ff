//! Terms client trait
//!
//! This module defines the core `TermsClient` trait that all client
//! implementations must satisfy.

use crate::error::ClientError;
use async_trait::async_trait;
use jargon_store::Term;

/// Remote terms source
///
/// Defines the interface for retrieving the terminology list.
/// Implementations can be direct (hitting the endpoint) or decorated
/// with retry logic, caching, etc.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
#[async_trait]
pub trait TermsClient: Send + Sync {
    /// Fetch the full terminology list.
    ///
    /// # Returns
    ///
    /// The decoded list in response order, or a `ClientError` when the
    /// request, response status, or body decoding fails. No retry
    /// happens at this level.
    async fn fetch_terms(&self) -> Result<Vec<Term>, ClientError>;
}
