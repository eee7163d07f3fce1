//! Star Wars reference-data and favourites REST API.
//!
//! Hexagonal layout: `domain` holds entities and repository ports,
//! `inbound::http` exposes the REST surface, `outbound::persistence`
//! implements the ports against PostgreSQL via Diesel.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Request tracing middleware attaching a `trace-id` response header.
pub use middleware::trace::Trace;
