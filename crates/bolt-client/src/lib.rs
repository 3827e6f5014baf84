//! # bolt-client: Shop API HTTP Client
//!
//! Typed client for the shop's REST API. This crate owns the HTTP concern
//! so that bolt-core stays pure and the admin app never touches reqwest
//! directly.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         bolt-client                                     │
//! │                                                                         │
//! │  config     ClientConfig (base URL, token, timeout; env overrides)     │
//! │  http       ApiClient (GET/POST/PUT/DELETE + bearer auth)              │
//! │  response   ApiResponse<T> envelope                                    │
//! │  error      ClientError                                                │
//! │  api/       one module per resource:                                   │
//! │             auth, customers, sales, payments, products, dashboard      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use bolt_client::{api, ClientConfig};
//!
//! # async fn run() -> Result<(), bolt_client::ClientError> {
//! let client = ClientConfig::from_env().build_client();
//! let session = api::auth::login(
//!     &client,
//!     &api::auth::LoginRequest {
//!         email: "asha@shop.in".to_string(),
//!         password: "secret".to_string(),
//!     },
//! )
//! .await?;
//!
//! let client = client.with_token(session.token);
//! let customers = api::customers::list(&client, &Default::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod response;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use response::ApiResponse;
