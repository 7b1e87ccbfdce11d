// kontent-admin: Admin client for Kontent.ai content operations and
// contributor assignment

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod locale;
pub mod model;

pub use client::AdminClient;
pub use config::AdminClientConfig;
pub use error::AssignmentError;
