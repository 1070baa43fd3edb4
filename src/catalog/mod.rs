//! Catalog Module
//!
//! Owns the committed (entity list, search index) pair and the lifecycle that
//! produces new pairs.
//!
//! ## Overview
//! A reload cycle opens a store connection, fetches every category of the schema
//! table in bounded pages, normalizes the records, builds a fresh search index
//! over the combined entity list, and commits the pair as one immutable snapshot
//! behind an atomic pointer swap. Readers holding the previous snapshot keep a
//! fully consistent (if stale) view; readers arriving after the swap see the new
//! one. A failed cycle commits nothing and leaves the previous snapshot live.
//!
//! ## Responsibilities
//! - **Fetching**: counting each collection up front and pulling it in fixed-size
//!   projected pages, all pages of a category issued as one concurrent set.
//! - **Snapshotting**: pairing an entity list with the index built from exactly
//!   that list; the two are never mixed across cycles.
//! - **Commit protocol**: a single atomic reference swap, no in-place mutation.
//!   Overlapping reloads race freely; the last one to commit wins.
//! - **API**: the `/reload` trigger (fire-and-forget) and `/status` endpoints.
//!
//! ## Submodules
//! - **`fetcher`**: paginated category retrieval + normalization.
//! - **`snapshot`**: the immutable (entities, index) pair.
//! - **`service`**: the `Catalog` itself and its reload protocol.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod fetcher;
pub mod handlers;
pub mod service;
pub mod snapshot;
pub mod types;
