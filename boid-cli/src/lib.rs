//! Headless host for the boid simulation.
//!
//! Acts as the frame clock: generates the initial population, then feeds a
//! fixed number of frame events to the simulation while logging flock
//! statistics and optionally streaming snapshots as JSON lines.

pub mod runner;
pub mod settings;

pub use runner::{RunOptions, Runner};
