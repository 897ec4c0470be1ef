//! Core types and definitions for the arena combat agents.
//!
//! This crate defines the vocabulary shared with the host engine:
//! self-state, sensor events, commands, tuning constants and configuration.
//! It has no dependency on any simulation runtime.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod types;

pub use glam::DVec2;
