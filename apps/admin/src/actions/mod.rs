//! # Actions Module
//!
//! Async operations that drive the console, the thunk layer between the
//! state slices and the API client.
//!
//! ## Action Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Action Lifecycle                                  │
//! │                                                                         │
//! │  action called                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  slice.pending()            (lock held briefly, released before I/O)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bolt_client::api::...      (await, no lock held)                       │
//! │       │                                                                 │
//! │       ├── Ok(data)  ──► slice.loaded(data)                              │
//! │       │                                                                 │
//! │       └── Err(e)    ──► slice.failed(message), error returned           │
//! │                                                                         │
//! │  Writes validate locally first; nothing invalid is sent to the API.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod payments;
pub mod products;
pub mod sales;
