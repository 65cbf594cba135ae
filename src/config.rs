// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! All values are read once at startup and never mutated afterwards.

use std::env;

/// Fallback session-cookie signing secret for local development.
/// Production deployments must set SESSION_SECRET.
const DEFAULT_SESSION_SECRET: &str = "insecure-dev-session-secret-change-me-please";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project base URL (e.g. https://xyz.supabase.co)
    pub supabase_url: String,
    /// Supabase public (anon) API key
    pub supabase_anon_key: String,
    /// Session-cookie signing secret (raw bytes, at least 32)
    pub session_secret: Vec<u8>,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing backend values fall back to empty strings so the server
    /// still starts for local page work; every backend call will fail
    /// until SUPABASE_URL and SUPABASE_ANON_KEY are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let supabase_url = env::var("SUPABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("SUPABASE_URL not set, backend calls will fail");
            String::new()
        });

        let supabase_anon_key = env::var("SUPABASE_ANON_KEY").unwrap_or_else(|_| {
            tracing::warn!("SUPABASE_ANON_KEY not set, backend calls will fail");
            String::new()
        });

        let session_secret = env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET not set, using insecure development default");
            DEFAULT_SESSION_SECRET.to_string()
        });
        if session_secret.len() < 32 {
            return Err(ConfigError::WeakSessionSecret);
        }

        Ok(Self {
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_anon_key: supabase_anon_key.trim().to_string(),
            session_secret: session_secret.into_bytes(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }

    /// Default config for tests.
    pub fn test_default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
            session_secret: b"test-session-secret-32-bytes-min!".to_vec(),
            port: 8080,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SESSION_SECRET must be at least 32 bytes")]
    WeakSessionSecret,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because the process environment is shared state.
    #[test]
    fn test_config_from_env() {
        env::set_var("SUPABASE_URL", "https://example.supabase.co/");
        env::set_var("SUPABASE_ANON_KEY", " anon-key ");
        env::set_var("SESSION_SECRET", "a-session-secret-that-is-long-enough");

        let config = Config::from_env().expect("Config should load");

        // Trailing slash is stripped so URL joining stays predictable
        assert_eq!(config.supabase_url, "https://example.supabase.co");
        assert_eq!(config.supabase_anon_key, "anon-key");
        assert_eq!(config.port, 8080);

        env::set_var("SESSION_SECRET", "too-short");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::WeakSessionSecret)
        ));
    }
}
