//! usersearch-server - reference implementation of the user search endpoint
//!
//! Serves a [`Dataset`](usersearch_core::Dataset) over HTTP so the search
//! client can be exercised end to end.
//!
//! ```rust,no_run
//! use actix_web::{web, App, HttpServer};
//! use usersearch_core::{Dataset, ServerConfig};
//! use usersearch_server::api;
//!
//! #[actix_web::main]
//! async fn main() -> anyhow::Result<()> {
//!     let state = web::Data::new(api::AppState::new(
//!         Dataset::load("./data/dataset.json")?,
//!         ServerConfig::default(),
//!     ));
//!     HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
//!         .bind("127.0.0.1:8080")?
//!         .run()
//!         .await?;
//!     Ok(())
//! }
//! ```

pub use usersearch_core;

pub mod api;
