// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Profile Portal: account signup, signin, and profile management
//!
//! This crate provides a small server-rendered web application whose
//! authentication and row storage are delegated to a hosted Supabase
//! backend. The application itself is the bridge: browser sessions hold
//! the backend's credential pair and replay it on each request.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod session;
pub mod supabase;
pub mod views;

use config::Config;
use supabase::SupabaseClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub supabase: SupabaseClient,
}
