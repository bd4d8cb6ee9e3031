// ABOUTME: Error types re-exported from fridge-core
// ABOUTME: Preserves crate::errors import paths inside the server crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unified error handling, see [`fridge_core::errors`]

pub use fridge_core::errors::*;
