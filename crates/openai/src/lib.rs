//! OpenAI client for the generation pipeline.
//!
//! One [`client::OpenAiClient`] serves both capability seams from
//! `voxreel-core`: chat completions implement
//! [`voxreel_core::generate::TextGenerator`] and the speech endpoint
//! implements [`voxreel_core::generate::SpeechSynthesizer`]. The client is
//! configured once from environment state and injected into the pipelines,
//! so tests never touch this crate.

pub mod chat;
pub mod client;
pub mod config;
pub mod speech;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
