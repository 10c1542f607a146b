//! API Module
//!
//! HTTP handlers and routing for the catalog service REST API.
//!
//! # Endpoints
//! - `GET /pokemon` - Full catalog listing
//! - `GET /pokemon/:identifier` - Detail view by numeric id or name
//! - `GET /characteristic/:id` - Uncached pass-through to the upstream
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
