//! # State Module
//!
//! Application state for the admin console, one slice per domain.
//!
//! ## Slice Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      State Architecture                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Store (Arc<Mutex<AppState>>)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │              │                                                          │
//! │      ┌───────┼────────┬──────────┬──────────┬───────────┐              │
//! │      ▼       ▼        ▼          ▼          ▼           ▼              │
//! │  ┌──────┐┌────────┐┌───────┐┌─────────┐┌─────────┐┌──────────┐        │
//! │  │ auth ││customer││ sales ││payments ││products ││dashboard │        │
//! │  │slice ││ slice  ││ slice ││  slice  ││  slice  ││  slice   │        │
//! │  └──────┘└────────┘└───────┘└─────────┘└─────────┘└──────────┘        │
//! │                                                                         │
//! │  Each slice owns its data plus a LoadState, and mutates only through   │
//! │  its reducer methods. Actions fetch, then reduce; nothing else writes. │
//! │                                                                         │
//! │  THREAD SAFETY: one Mutex over the whole state. Actions hold the lock  │
//! │  only to reduce, never across an await.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod customers;
mod dashboard;
mod payments;
mod products;
mod sales;

pub use auth::AuthSlice;
pub use customers::CustomersSlice;
pub use dashboard::DashboardSlice;
pub use payments::PaymentsSlice;
pub use products::ProductsSlice;
pub use sales::{SaleDraft, SalesSlice};

use std::sync::{Arc, Mutex};

// =============================================================================
// Load State
// =============================================================================

/// Fetch lifecycle for a slice's data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Last fetch succeeded.
    Loaded,
    /// Last fetch failed; the message is what the operator sees.
    Failed(String),
}

impl LoadState {
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// App State & Store
// =============================================================================

/// The whole console state.
#[derive(Debug, Default)]
pub struct AppState {
    pub auth: AuthSlice,
    pub customers: CustomersSlice,
    pub sales: SalesSlice,
    pub payments: PaymentsSlice,
    pub products: ProductsSlice,
    pub dashboard: DashboardSlice,
}

/// Shared handle to the state. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<AppState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from the state under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let state = self.inner.lock().expect("State mutex poisoned");
        f(&state)
    }

    /// Mutate the state under the lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.inner.lock().expect("State mutex poisoned");
        f(&mut state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_shares_state_across_clones() {
        let store = Store::new();
        let clone = store.clone();

        store.with_mut(|s| s.customers.pending());
        assert_eq!(clone.with(|s| s.customers.load.clone()), LoadState::Loading);
    }

    #[test]
    fn test_load_state_error_accessor() {
        let failed = LoadState::Failed("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(LoadState::Loaded.error(), None);
    }
}
