//! methodscribe: HTTP service that drafts the "Proposed Method" section of an
//! academic paper from a short domain description and architecture diagrams.
//!
//! Provides endpoints for:
//! - GET  /health - liveness probe
//! - GET  /v1/models - the configured upstream model
//! - POST /v1/sections/method - draft a section from text + diagram images
//!
//! Drafting is proxied to a hosted vision-language model. Handlers queue
//! work over a channel to a dedicated worker task that owns the outbound
//! client, so at most one drafting call is in flight at a time and every
//! request is bounded by an outer timeout.

pub mod config;
pub mod error;
pub mod handlers;
pub mod normalize;
pub mod prompt;
pub mod router;
pub mod state;
pub mod types;
pub mod upstream;
