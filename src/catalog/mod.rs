//! Version catalog layer for Minecraft server builds
//!
//! This module provides the core functionality for fetching, caching, and
//! querying the list of available server versions across multiple upstream
//! sources.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Resolver   │────▶│    Store    │     │   Prober    │
//! │ (orchestr.) │     │   (cache)   │     │  (ad hoc)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Sources   │
//! │(mojang,vexy)│
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: Cache-first resolution across prioritized sources
//! - [`store`]: JSON file catalog store with age-based expiry
//! - [`source`]: Source trait for fetching versions from upstream providers
//! - [`sources`]: Concrete source implementations (Mojang manifest, vexyhost scrape)
//! - [`probe`]: Best-effort download URL probing for uncatalogued versions
//! - [`ordering`]: Dotted-numeric version comparison
//! - [`error`]: Error types for store and source operations
//! - [`types`]: Common types like `VersionCatalog`

pub mod error;
pub mod ordering;
pub mod probe;
pub mod resolver;
pub mod source;
pub mod sources;
pub mod store;
pub mod types;
