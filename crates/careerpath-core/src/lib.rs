//! HTTP plumbing shared by CareerPath services: error bodies, health
//! handlers, request-id and CORS layers, tracing setup.

pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;
