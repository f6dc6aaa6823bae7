//! Floodgate - Per-User Flood Control
//!
//! This crate implements a sliding-window request-rate limiter that decides,
//! on each call, whether a user has exceeded the maximum allowed number of
//! actions within a trailing time window. State is memory-resident, guarded
//! by a single lock, and lost on restart; there is no transport, persistence,
//! or cross-process coordination.

pub mod config;
pub mod error;
pub mod ratelimit;
