// src/cli.rs
// Command line surface: the TUI by default, one-shot completion calls as subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::error::{ChatDeskError, Result};
use crate::i18n::{Catalog, Msg};
use crate::modules::completion::{self, CompletionClient, CompletionMessage, SamplingParams};

#[derive(Debug, Parser)]
#[command(name = "chatdesk")]
#[command(about = "Chat front-end with a local session store", long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, short, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send one user message to the completion endpoint and print the answer.
    Ask {
        /// Message text
        text: String,
    },

    /// Run one of the fixed practice conversations (1-7).
    Exercise {
        /// Exercise number
        number: usize,
    },
}

/// `Du: <prompt>` followed by `<assistant>: <answer>`.
pub fn transcript(catalog: &Catalog, assistant_name: &str, prompt: &str, answer: &str) -> String {
    format!(
        "{}: {}\n{}: {}",
        catalog.text(Msg::You),
        prompt,
        assistant_name,
        answer.trim()
    )
}

pub async fn run_ask(config: &AppConfig, catalog: &Catalog, text: &str) -> Result<()> {
    let client = CompletionClient::from_config(&config.completion)?;
    let messages = vec![CompletionMessage::user(text)];
    let params: SamplingParams = config.completion.sampling();

    info!("ask: {} chars to {}", text.chars().count(), client.model());
    let answer = client.complete(&messages, &params).await?;

    println!(
        "{}",
        transcript(catalog, &config.common.assistant_name, text, &answer)
    );
    Ok(())
}

pub async fn run_exercise(config: &AppConfig, catalog: &Catalog, number: usize) -> Result<()> {
    let exercise = completion::exercise(number).ok_or_else(|| {
        ChatDeskError::RuntimeError(format!(
            "unknown exercise {}, expected 1..={}",
            number,
            completion::exercises().len()
        ))
    })?;

    let client = CompletionClient::from_config(&config.completion)?;
    info!("exercise {} via {}", exercise.number, client.model());
    let answer = client.complete(&exercise.messages, &exercise.params).await?;

    println!(
        "{}",
        transcript(catalog, &config.common.assistant_name, exercise.opener(), &answer)
    );
    Ok(())
}
