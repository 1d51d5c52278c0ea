use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "qa_client", version, about = "Terminal client for the paired Q&A service")]
pub struct Cli {
    /// Backend origin, e.g. http://127.0.0.1:8088 (defaults to QA_API_ORIGIN)
    #[arg(long, global = true)]
    pub origin: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Navigate to a page path and render it
    Open(OpenArgs),
    /// Print the question set
    Questions,
    /// Submit participant A's answers and print the invitation token
    SubmitA(AnswerArgs),
    /// Submit participant B's answers for an invitation token
    SubmitB {
        token: String,
        #[command(flatten)]
        answers: AnswerArgs,
    },
    /// Print the results for an invitation token
    Results { token: String },
    /// Replace the question set with the JSON array in FILE
    Upload { file: PathBuf },
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Page path such as /user-b/<token>
    pub path: String,

    /// Token to look up on the /view-results page
    #[arg(long)]
    pub token: Option<String>,

    /// Submit the answers on an intake page after rendering it
    #[arg(long)]
    pub submit: bool,

    #[command(flatten)]
    pub answers: AnswerArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct AnswerArgs {
    /// Answer as QUESTION_ID=VALUE; repeat for each question
    #[arg(long = "answer", value_name = "ID=VALUE", value_parser = parse_answer)]
    pub answers: Vec<(String, String)>,

    /// Consent to sharing these answers with the other participant
    #[arg(long)]
    pub share: bool,
}

pub fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got {raw:?}"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing question id in {raw:?}"));
    }
    Ok((id.to_string(), value.to_string()))
}
