// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lingo HTTP server: localized pages behind locale negotiation.

pub mod api;
pub mod error;
pub mod render;
pub mod routes;
pub mod version;

pub use api::{create_app_state, create_router, AppState, UNLOCALIZED_PREFIXES};
pub use error::ServerError;
