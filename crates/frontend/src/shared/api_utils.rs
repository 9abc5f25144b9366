//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    base_from_parts(&protocol, &hostname, port)
}

fn base_from_parts(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Full URL of the product listing endpoint
pub fn products_url(api: &ApiConfig) -> String {
    format!("{}{}", api_base(api.port), api.products_path)
}
