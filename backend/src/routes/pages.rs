//! Landing page

use crate::error::ApiResult;
use crate::state::AppState;
use anyhow::Context;
use axum::{extract::State, response::Html};
use tracing::warn;

/// GET / - Serve the landing page
///
/// Index sync runs in the background so the page is not held up by it.
pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let path = state.config().assets.index_page();
    let page = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Landing page {} is unavailable", path.display()))?;

    let store = state.store.clone();
    tokio::spawn(async move {
        if let Err(e) = store.sync_indexes().await {
            warn!("Failed to sync store indexes: {:?}", e);
        }
    });

    Ok(Html(page))
}
