//! # carhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceRepository` — create, read, scan, delete listed items
//!   - `ReviewRepository` — create and scan reviews
//!   - `OrderRepository` — create, query by email, delete orders
//!   - `UserRepository` — insert, upsert by email, set role, find by email
//! - Define **use-case services** that validate on the boundary and perform
//!   exactly one storage call each — there is deliberately no further
//!   business layer between a route and its repository operation
//!
//! ## Dependency rule
//! Depends on `carhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
