//! Query Service Module
//!
//! The read side of the system: fuzzy `search` and typed `lookup` over whatever
//! snapshot the catalog has committed most recently.
//!
//! ## Responsibilities
//! - **Snapshot discipline**: every call resolves exactly one snapshot reference
//!   and uses it throughout, so a concurrent reload cannot tear a response.
//! - **Readiness**: callers arriving before the first commit wait with bounded
//!   exponential backoff instead of failing or spinning.
//! - **API**: the `/search` and `/lookup` HTTP endpoints.

pub mod handlers;
pub mod service;
pub mod types;
