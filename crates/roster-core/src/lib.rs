//! Core types and the roster resolver for the organisation's membership
//! directory.
//!
//! This crate is deliberately free of HTTP and storage dependencies. It turns a
//! flat snapshot of [`Person`](person::Person) and
//! [`TransitionPeriod`](person::TransitionPeriod) records into the classified,
//! ranked view models in [`view`]. Fetching the snapshot is the job of a
//! [`MemberDirectory`](directory::MemberDirectory) implementation.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod config;
pub mod date;
pub mod directory;
pub mod error;
pub mod person;
pub mod rank;
pub mod resolve;
pub mod view;

pub use config::RosterConfig;
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
