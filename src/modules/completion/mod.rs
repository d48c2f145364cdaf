// src/modules/completion/mod.rs
// Request/response calls against an OpenAI-compatible chat completion endpoint

mod client;
mod exercises;

pub use client::CompletionClient;
pub use exercises::{exercise, exercises, Exercise};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: Role,
    pub content: String,
}

impl CompletionMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Sampling knobs shown in the chat panel and sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl SamplingParams {
    pub const TEMPERATURE_RANGE: (f32, f32) = (0.0, 2.0);
    pub const TOP_P_RANGE: (f32, f32) = (0.0, 1.0);
    pub const MAX_TOKENS_RANGE: (u32, u32) = (1, 500);

    /// Nudges temperature by `delta`, staying inside the accepted range.
    pub fn adjust_temperature(&mut self, delta: f32) {
        let (lo, hi) = Self::TEMPERATURE_RANGE;
        self.temperature = round_tenth((self.temperature + delta).clamp(lo, hi));
    }

    pub fn adjust_top_p(&mut self, delta: f32) {
        let (lo, hi) = Self::TOP_P_RANGE;
        self.top_p = round_tenth((self.top_p + delta).clamp(lo, hi));
    }

    pub fn adjust_max_tokens(&mut self, delta: i64) {
        let (lo, hi) = Self::MAX_TOKENS_RANGE;
        let next = (self.max_tokens as i64 + delta).clamp(lo as i64, hi as i64);
        self.max_tokens = next as u32;
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 100,
            top_p: 1.0,
        }
    }
}

fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("API key variable {0} is not set")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Completion response contained no choices")]
    NoChoices,
}
