//! Core types and definitions for the PYRE city-fire battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! identifiers, actions, configuration, snapshots, events, errors and
//! tuning constants. It has no dependency on any runtime or renderer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
