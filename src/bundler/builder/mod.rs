//! Build orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that runs the
//! external packagers for each requested [`BuildTarget`](crate::bundler::BuildTarget).
//!
//! # Module Organization
//!
//! - [`orchestrator`] - Main [`Bundler`] struct and the per-target procedure
//! - [`tool_detection`] - External tool availability checking and opt-in install

mod orchestrator;
mod tool_detection;

pub use orchestrator::{BuildReport, Bundler, TargetReport};
pub use tool_detection::{ToolSpec, ensure_tool};
