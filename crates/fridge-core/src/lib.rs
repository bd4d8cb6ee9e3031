// ABOUTME: Core types and constants for the fridge recipes API
// ABOUTME: Foundation crate with error handling and application constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Fridge Core
//!
//! Foundation crate providing shared types and constants for the fridge
//! recipes service. Kept small so the server crate recompiles independently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
