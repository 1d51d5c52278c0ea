use crate::domain::{InvitationToken, Page, QuestionItem, QuestionService, Resolution};
use crate::frameworks::cli::{AnswerArgs, Cli, Command, OpenArgs};
use crate::frameworks::config;
use crate::interface_adapters::clients::QuestionClient;
use crate::interface_adapters::presenter;
use crate::use_cases::{
    HomePage, IntakeForm, Navigator, PageStatus, ResultsPage, UserAPage, UserBPage,
    ViewResultsPage,
};
use serde::Serialize;
use std::error::Error;
use std::fmt;

pub fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so stdout stays clean for page and JSON output.
    if config::json_logs() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// A rendered page ended in an error state.
#[derive(Debug)]
pub struct PageFailed(pub String);

impl fmt::Display for PageFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for PageFailed {}

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let origin = cli.origin.unwrap_or_else(config::api_origin);
    let client = QuestionClient::new(&origin)?;
    tracing::debug!(origin = %client.origin(), "question client configured.");

    match cli.command {
        Command::Open(args) => open(client, args).await,
        Command::Questions => print_json(&client.load_questions().await?),
        Command::SubmitA(args) => {
            let mut page = UserAPage::new(client);
            fill(&mut page.form, &args);
            let invitation = page.submit().await;
            match (&page.token, invitation) {
                (Some(token), Some(path)) => {
                    print!("{}", presenter::invitation(token, &path));
                    Ok(())
                }
                _ => Err(failed(&page.form.status)),
            }
        }
        Command::SubmitB { token, answers } => {
            let token = InvitationToken::new(token);
            let success = client
                .submit_user_b(&token, &answers_of(&answers), answers.share)
                .await?;
            print_json(&serde_json::json!({ "success": success }))
        }
        Command::Results { token } => {
            print_json(&client.get_results(&InvitationToken::new(token)).await?)
        }
        Command::Upload { file } => {
            let raw = tokio::fs::read_to_string(&file).await?;
            let items: Vec<QuestionItem> = serde_json::from_str(&raw)?;
            tracing::info!(file = %file.display(), count = items.len(), "uploading question set.");
            let message = client.upload_questions(&items).await?;
            println!("{message}");
            Ok(())
        }
    }
}

// Navigate like the browser would and render whichever page the path lands on.
async fn open(client: QuestionClient, args: OpenArgs) -> Result<(), Box<dyn Error>> {
    let viewer_client = client.clone();
    let mut navigator = Navigator::new(move || ViewResultsPage::new(viewer_client.clone()));

    let matched = match navigator.navigate(&args.path).clone() {
        Resolution::Matched(matched) => matched,
        Resolution::NotFound { path } => {
            print!("{}", presenter::not_found(&path));
            return Err(Box::new(PageFailed(format!("no page at {path}"))));
        }
    };
    let route_token = matched.props().remove("token").map(InvitationToken::new);

    match (matched.page(), route_token) {
        (Page::Homepage, _) => {
            print!("{}", presenter::home(&HomePage));
            Ok(())
        }
        (Page::UserA, _) => {
            let mut page = UserAPage::new(client);
            page.load().await;
            fill(&mut page.form, &args.answers);
            if args.submit && page.form.status == PageStatus::Ready {
                if let (Some(path), Some(token)) = (page.submit().await, page.token.as_ref()) {
                    print!("{}", presenter::invitation(token, &path));
                }
            }
            print!("{}", presenter::intake("User A", &page.form));
            finish(&page.form.status)
        }
        (Page::UserB, Some(token)) => {
            let mut page = UserBPage::new(client, token);
            page.load().await;
            fill(&mut page.form, &args.answers);
            if args.submit && page.form.status == PageStatus::Ready {
                if let Some(path) = page.submit().await {
                    println!("Answers submitted. Results: {path}");
                }
            }
            print!("{}", presenter::intake("User B", &page.form));
            finish(&page.form.status)
        }
        (Page::Results, Some(token)) => {
            let mut page = ResultsPage::new(client, token);
            page.load().await;
            print!(
                "{}",
                presenter::results(Some(&page.token), &page.status, page.results.as_ref())
            );
            finish(&page.status)
        }
        (Page::ViewResults, _) => {
            let Some(page) = navigator.view_results_mut() else {
                return Err(Box::new(PageFailed("results viewer did not load".to_string())));
            };
            if let Some(token) = &args.token {
                page.lookup(token).await;
            }
            print!(
                "{}",
                presenter::results(page.token.as_ref(), &page.status, page.results.as_ref())
            );
            finish(&page.status)
        }
        (page, None) => Err(Box::new(PageFailed(format!(
            "route for {page:?} did not supply a token"
        )))),
    }
}

fn answers_of(args: &AnswerArgs) -> crate::domain::AnswerSet {
    args.answers
        .iter()
        .map(|(id, value)| (id.clone(), value.clone()))
        .collect()
}

fn fill(form: &mut IntakeForm, args: &AnswerArgs) {
    for (id, value) in &args.answers {
        form.answer(id.clone(), value.clone());
    }
    form.share_answers = args.share;
}

fn failed(status: &PageStatus) -> Box<dyn Error> {
    let message = status.error().unwrap_or("request failed").to_string();
    Box::new(PageFailed(message))
}

fn finish(status: &PageStatus) -> Result<(), Box<dyn Error>> {
    match status {
        PageStatus::Failed(_) => Err(failed(status)),
        _ => Ok(()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
