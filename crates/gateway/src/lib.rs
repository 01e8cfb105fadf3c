//! `gestock-gateway` — thin HTTP clients over the backend REST API.
//!
//! One gateway per backend surface (admin users, catalog, logistics,
//! profile), all sharing a bearer-authenticated [`ApiClient`]. Every
//! surface is also an `async_trait` so the console crate can run
//! against in-memory fakes.
//!
//! No retries, no local persistence: a failed call surfaces its
//! server message (when the backend sent one) and the caller decides
//! what to do.

pub mod admin;
pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod logistique;
pub mod profile;

pub use admin::AdminGateway;
pub use api::{AdminApi, CatalogApi, CreateUserResponse, LogistiqueApi, ProfileApi};
pub use catalog::CatalogGateway;
pub use client::{ApiClient, StaticToken, TokenProvider};
pub use config::ApiConfig;
pub use error::GatewayError;
pub use logistique::LogistiqueGateway;
pub use profile::ProfileGateway;
