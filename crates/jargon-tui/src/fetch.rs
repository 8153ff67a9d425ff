//! One-shot startup fetch
//!
//! Runs the remote fetch exactly once and, on success, dispatches the
//! completed payload into the store. Failures are handed back to the
//! caller and the terms slice simply never updates.

use jargon_client::{ClientError, TermsClient};
use jargon_store::{Action, Store};
use tokio::runtime::Runtime;

/// Fetch the terminology list and dispatch it into the store.
///
/// Blocks on the single outbound request. On success the full payload
/// is dispatched as one `FetchCompleted` action; on failure no action
/// is dispatched at all.
pub fn fetch_into_store(
    runtime: &Runtime,
    client: &dyn TermsClient,
    store: &mut Store,
) -> Result<(), ClientError> {
    let terms = runtime.block_on(client.fetch_terms())?;
    store.dispatch(Action::fetch_completed(terms));
    Ok(())
}
