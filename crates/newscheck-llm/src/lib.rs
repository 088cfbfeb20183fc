//! # newscheck-llm
//!
//! Chat-completion providers for the newscheck pipeline: the OpenAI-backed
//! [`openai::OpenAiProvider`] and the scripted [`mock::MockProvider`] used
//! for deterministic tests.
//!
//! Providers emit `ModelStart`/`ModelEnd` lifecycle events to their
//! registered observers around every call. No retry, no fallback model;
//! failures propagate to the caller.

#![deny(unsafe_code)]

pub mod mock;
pub mod openai;

pub use openai::{LlmConfig, OpenAiProvider};
