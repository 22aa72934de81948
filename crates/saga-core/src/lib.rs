//! # saga-core
//!
//! Foundation types, errors, and utilities for the saga scenario agent.
//!
//! This crate provides the shared vocabulary that all other saga crates
//! depend on:
//!
//! - **Events**: [`events::StreamEvent`] for generative-service streaming,
//!   [`events::SagaEvent`] for tool lifecycle
//! - **Tools**: [`tools::ToolInvocation`], [`tools::SagaToolResult`],
//!   [`tools::Tool`] schema types
//! - **Changes**: [`changes::EntityChange`], [`changes::PropagationType`],
//!   propagation result/hint types, [`changes::ContentSection`]
//! - **Text**: UTF-8-safe truncation helpers for log previews
//!
//! Error types live with the crate that produces them (`saga-stream`,
//! `saga-tools`, `saga-runtime`, `saga-settings`), all built on `thiserror`.
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other saga crates.

#![deny(unsafe_code)]

pub mod changes;
pub mod events;
pub mod text;
pub mod tools;
