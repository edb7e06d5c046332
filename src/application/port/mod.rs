// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`location`]: Free-text address lookup on a map service
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - No `async fn`: methods return a boxed future that callers wrap in an
//!   Iced `Task`

pub mod location;

pub use location::{LocationError, LocationLookup};
