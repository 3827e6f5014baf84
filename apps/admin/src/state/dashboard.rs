//! Dashboard slice: shop-wide figures and the recent-activity feed.

use bolt_client::api::dashboard::Activity;
use bolt_core::types::DashboardStats;

use super::LoadState;

#[derive(Debug, Default)]
pub struct DashboardSlice {
    pub load: LoadState,
    pub stats: Option<DashboardStats>,
    pub activities: Vec<Activity>,
}

impl DashboardSlice {
    pub fn pending(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn loaded(&mut self, stats: DashboardStats, activities: Vec<Activity>) {
        self.load = LoadState::Loaded;
        self.stats = Some(stats);
        self.activities = activities;
    }

    pub fn failed(&mut self, message: String) {
        self.load = LoadState::Failed(message);
    }
}
