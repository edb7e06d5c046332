// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the page and external services.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer calls ports through `iced::Task`

pub mod port;
