//! Storage module for timetable entries.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different backends to be swapped without
//! touching the engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, embedding callers)         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Engine Facade (engine.rs) - Business Logic              │
//! │  - Conflict-gated create/update                          │
//! │  - Roster join for level listings                        │
//! │  - Calendar export & weekly grouping                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │     (in-memory, lock-serialized writes)       │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The repository is injected into the engine at construction time; there
//! is no process-global repository instance.

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::TimetableRepository;
