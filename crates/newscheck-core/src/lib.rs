//! # newscheck-core
//!
//! Foundation types for the newscheck research pipeline.
//!
//! This crate provides the shared vocabulary the other newscheck crates
//! depend on:
//!
//! - **Provider**: [`provider::ChatProvider`] trait plus the request/response
//!   types for one chat-completion call
//! - **Tools**: [`tools::Tool`] trait — the capability interface a stage may
//!   invoke mid-reasoning
//! - **Search**: [`search::SearchResult`], [`search::SearchOutcome`], and the
//!   [`search::SearchBackend`] seam
//! - **Events**: [`events::PipelineEvent`] and the [`events::Observer`]
//!   lifecycle-callback interface
//! - **Errors**: `thiserror` hierarchies per boundary
//! - **Text**: UTF-8-safe truncation for event previews
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other newscheck crates.

#![deny(unsafe_code)]

pub mod errors;
pub mod events;
pub mod provider;
pub mod search;
pub mod text;
pub mod tools;
