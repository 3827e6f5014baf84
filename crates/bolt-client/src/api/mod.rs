//! Endpoint groups, one module per API resource.
//!
//! Each module is a set of free async functions over [`ApiClient`](crate::ApiClient),
//! mirroring the route layout of the shop API:
//!
//! ```text
//! auth       /auth/*                login, me, profile, password
//! customers  /customers/*           CRUD + transactions
//! sales      /sales/*               CRUD + by-customer + report
//! payments   /payments/*            CRUD + by-customer
//! products   /inventory/products/*  CRUD + categories + stock
//! dashboard  /dashboard/*           stats + recent activities
//! ```

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod payments;
pub mod products;
pub mod sales;
