//! Kontent Client - HTTP transport for the Kontent.ai REST APIs
//!
//! This crate provides:
//! - Bearer-authenticated JSON client with configurable timeouts
//! - SDK identification header handling (X-KC-SDKID)
//! - Centralized classification of error responses into `ApiError`

pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::{HttpClientConfig, KontentHttpClient, SDK_ID_HEADER};
