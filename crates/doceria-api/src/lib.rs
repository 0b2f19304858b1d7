//! Client library for the doceria remote stock store.
//!
//! The store is a managed Postgres instance exposed over a PostgREST-style
//! HTTP interface. This crate covers exactly the three row operations the
//! stock view depends on: list all sweets, insert one, delete by id.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use doceria_api_rs::prelude::*;
//! ```
//!
//! This re-exports the most commonly used types including [`StoreClient`],
//! error types, and the record models.
//!
//! [`StoreClient`]: client::StoreClient

pub mod client;
pub mod error;
pub mod models;
pub mod prelude;
