//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! sports-management entities and operation parameters. Domain models are converted from
//! entity models at the repository boundary, where stored enumeration strings are parsed
//! into their typed variants, and transformed to DTOs at the controller boundary.
//! Request payload validation rules (`Validate` implementations) live beside the model
//! they protect.

pub mod ai;
pub mod athlete;
pub mod discipline;
pub mod event;
pub mod gameday;
pub mod performance;
pub mod position;
pub mod season;
pub mod sport;
pub mod team;
pub mod venue;
