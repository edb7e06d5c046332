// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus helpers that talk the formats of external
//! services.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Location lookup via Gemini with Google Maps grounding
//!   (implements [`LocationLookup`])
//! - [`links`]: Outbound WhatsApp and map-search links
//!
//! [`LocationLookup`]: crate::application::port::LocationLookup

pub mod gemini;
pub mod links;

pub use gemini::{GeminiLocator, GeminiSettings};
