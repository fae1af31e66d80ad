//! # access-journal
//!
//! Tiny HTTP service that journals named accesses and exposes Prometheus
//! metrics for every routed request.
//!
//! The journal backend is picked once at startup from the `STORAGE`
//! environment variable: an append-only flat file (`file`, the default) or
//! a SQLite `users` table (`sql`).
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Router (api/)
//!     ├── Metrics middleware (metrics/)
//!     │
//!     ├── Handlers: /hello, /, /user, /metrics
//!     │
//!     └── JournalStore (persistence/)
//!             ├── FileJournal  → db.txt
//!             └── SqlJournal   → SQLite `users`
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod persistence;
