//! # carhub-domain
//!
//! Pure domain model for the carhub listing backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Services** (listed items — the antique cars on offer)
//! - Define **Reviews** (free-form customer feedback)
//! - Define **Orders** (placed orders, keyed to a user by email)
//! - Define **Users** (accounts with an advisory admin role flag)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod outcome;

pub mod order;
pub mod review;
pub mod service;
pub mod user;
