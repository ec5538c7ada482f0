//! Aircraft enrichment module - resolves hex identifiers to registration and
//! type data from an external lookup service.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types representing lookup
//!   outcomes and cache entries
//! - **API DTOs** (`adsbdb/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for the lookup API
//! - **Cache** (`cache.rs`) - In-memory positive/negative cache with
//!   write-through persistence and type normalization
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. We can swap lookup providers without changing the tracker
//!
//! # Failure semantics
//!
//! Enrichment is best-effort. Every upstream failure (network, status,
//! malformed body, timeout) is treated exactly like "no registration found":
//! it populates a negative cache entry and never propagates an error to the
//! tracker.

pub mod adsbdb;
pub mod cache;
pub mod domain;
pub mod traits;

pub use adsbdb::AdsbDbClient;
pub use cache::RegistryCache;
pub use domain::{CacheEntry, LookupError};
pub use traits::AircraftLookupApi;
