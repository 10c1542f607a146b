//! PokéAPI Access
//!
//! Transport abstraction over the upstream REST API and the cached
//! resource fetchers built on top of it.

mod client;
mod transport;

pub use client::PokeApiClient;
pub use transport::{HttpTransport, Transport};

#[cfg(test)]
pub(crate) use transport::testing;
