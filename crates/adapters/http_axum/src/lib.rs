//! # carhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** of the listing site
//!   (`/services`, `/reviews`, `/orders`, `/myOrders/{email}`, `/users`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! ## Conventions
//! - Every route performs exactly one application call.
//! - A missing document on a single-item read is a `200` with a JSON `null`
//!   body, not an error.
//! - Write routes answer with storage-outcome-shaped bodies (`insertedId`,
//!   `deletedCount`, `matchedCount`/`modifiedCount`/`upsertedCount`).
//! - Malformed identifiers in path segments are `400`s with a JSON error
//!   body.
//! - No authentication anywhere, including the admin routes. The role flag
//!   is advisory; any caller can set or query it.
//!
//! ## Dependency rule
//! Depends on `carhub-app` (for port traits and services) and `carhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
