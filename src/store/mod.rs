//! Document Store Boundary
//!
//! Thin HTTP client for the document store the catalog is built from.
//!
//! ## Core Concepts
//! - **Connect/close lifecycle**: a reload cycle owns exactly one handle; the
//!   read path never touches the store.
//! - **Counting + pagination**: the only query capabilities consumed are a record
//!   count per collection and projected offset/limit page retrieval.
//! - **Retries**: transport errors are retried with exponential backoff and
//!   jitter; non-success HTTP statuses are surfaced as errors immediately.

pub mod client;
pub mod protocol;
