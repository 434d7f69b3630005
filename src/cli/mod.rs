//! CLI infrastructure for the rollout-agents toolkit
//!
//! This module provides the command-line interface for playing matches
//! between agents and inspecting rollout evaluations of single positions.

pub mod commands;
pub mod config;
pub mod output;
