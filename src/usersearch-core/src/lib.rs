//! usersearch Core Library
//!
//! Types shared by the search client and the reference search server:
//! - Wire models (users, requests, pages, error bodies)
//! - Client and server configuration
//! - The in-memory user dataset and its search routine

pub mod config;
pub mod dataset;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{ClientConfig, ServerConfig};
pub use dataset::{Dataset, DatasetQuery, UserRecord};
pub use error::SearchError;
pub use models::*;
