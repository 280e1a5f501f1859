// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

/// Forward a free-text description to the record service and return the
/// parsed items.
#[server(RecordItems, "/api")]
pub async fn record_items(request: RecordRequest) -> Result<RecordResponse, ServerFnError> {
    use crate::web_app::api::client;

    tracing::info!(
        "Record request: description='{}', current_time='{}'",
        request.description,
        request.current_time
    );

    if request.description.trim().is_empty() {
        return Err(ServerFnError::new(RecordError::EmptyDescription.to_string()));
    }

    let result = client::get_client().record(&request).await;

    match &result {
        Ok(res) => tracing::info!("Record successful: parsed {} items", res.items.len()),
        Err(e) => tracing::error!("Record failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(e.to_string()))
}

/// Turn a failed `record_items` call back into the error shown in the form.
///
/// Messages raised on the server arrive as `ServerError` and are passed
/// through unchanged so the status code stays readable.
pub fn into_record_error(err: ServerFnError) -> RecordError {
    match err {
        ServerFnError::ServerError(message) => RecordError::Request(message),
        other => RecordError::Request(other.to_string()),
    }
}
