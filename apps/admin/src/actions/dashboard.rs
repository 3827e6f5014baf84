//! Dashboard actions: one refresh loads everything the landing view shows.

use bolt_client::api;
use bolt_client::ApiClient;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::Store;

/// Fetch shop-wide stats and the recent-activity feed together.
pub async fn refresh(store: &Store, client: &ApiClient, activity_limit: u32) -> AppResult<()> {
    store.with_mut(|s| s.dashboard.pending());

    let stats = api::dashboard::stats(client).await;
    let activities = api::dashboard::recent_activities(client, activity_limit).await;

    match (stats, activities) {
        (Ok(stats), Ok(activities)) => {
            info!(
                today_sales = stats.today_sales,
                activities = activities.len(),
                "Dashboard refreshed"
            );
            store.with_mut(|s| s.dashboard.loaded(stats, activities));
            Ok(())
        }
        (Err(e), _) | (_, Err(e)) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.dashboard.failed(err.message.clone()));
            Err(err)
        }
    }
}
