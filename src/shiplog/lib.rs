//! # Shiplog Architecture
//!
//! Shiplog is a **UI-agnostic journal library** with a thin CLI client. The
//! same core serves any front end that can hold a snapshot of the entry
//! collection: the bundled command-line binary, or an embedding UI that keeps
//! the collection in memory and persists through its own store.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                    │
//! │  - Parses arguments, formats output, prompts, exit codes   │
//! │  - The ONLY place that knows about stdout/stderr           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade: load snapshot → pure op → persist          │
//! │  - Returns structured Result types                         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Core (journal.rs, stats.rs, clock.rs, model.rs)           │
//! │  - Pure transformations over entry collections             │
//! │  - No I/O assumptions whatsoever                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - Abstract EntryStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Pure Core
//!
//! The functions in [`journal`] take a collection snapshot and return a new
//! one. They never mutate their input, never touch storage, and take their
//! notion of "now" as a [`clock::Clock`] parameter so tests can pin exact
//! timestamps. Persisting the returned snapshot is the caller's decision;
//! search results in particular are display-only views and are never saved.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade composing core operations with persistence
//! - [`journal`]: Pure add / delete / search over entry collections
//! - [`stats`]: Aggregate metrics over entry texts
//! - [`clock`]: Time source abstraction and the canonical timestamp format
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Entry` type and its persisted representation
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod error;
pub mod journal;
pub mod model;
pub mod stats;
pub mod store;
