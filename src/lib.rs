//! Core library for the study-compass advisory tools.
//!
//! The crate is organised around three pure, in-memory modules: `advisor`
//! holds the field-of-study suggestion engine, `directory` the searchable
//! university catalog, and `budget` the affordability calculator. None of
//! them perform I/O; the CLI binary wires them to the terminal.

pub mod advisor;
pub mod budget;
pub mod config;
pub mod directory;
pub mod error;
pub mod telemetry;
