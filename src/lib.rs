//! # Timetable Engine
//!
//! Class scheduling and conflict detection engine.
//!
//! This crate maintains a weekly-recurring timetable of class sessions
//! (batch, teacher, day of week, time interval, room), guarantees that no
//! batch or teacher is ever double-booked, and projects the recurring
//! schedule onto concrete calendar occurrences for display and export.
//!
//! ## Features
//!
//! - **Interval Model**: strongly-typed day/time values with half-open
//!   overlap semantics
//! - **Conflict Detection**: batch- and teacher-scope collision checks,
//!   reported together for actionable errors
//! - **Atomic Writes**: check-and-commit runs as one atomic unit, so
//!   concurrent writers cannot double-book a slot
//! - **Occurrence Projection**: deterministic expansion of weekly entries
//!   into concrete UTC timestamps and RRULE descriptors
//! - **Calendar Export**: per-batch iCalendar feeds for external consumers
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: identifier newtypes and the consolidated public surface
//! - [`models`]: pure value types (days, times, slots, entries)
//! - [`db`]: repository trait and storage implementations
//! - [`services`]: conflict detection, projection, export, aggregation
//! - [`engine`]: the facade composing store and collaborators
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! Collaborators are injected into [`engine::SchedulingEngine`] at
//! construction time; the crate holds no process-global state.

pub mod api;
pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
