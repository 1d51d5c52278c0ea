// Plain-text rendering of page state for the terminal front end.

use std::fmt::Write;

use crate::domain::{InvitationToken, ResultsPayload};
use crate::use_cases::{HomePage, IntakeForm, PageStatus};

pub fn home(page: &HomePage) -> String {
    let mut out = String::from("Paired Q&A\n");
    for (name, path) in page.links() {
        let _ = writeln!(out, "  {name}: {path}");
    }
    out
}

pub fn not_found(path: &str) -> String {
    format!("404: no page at {path}\n")
}

pub fn intake(title: &str, form: &IntakeForm) -> String {
    let mut out = format!("{title}\n");
    status_line(&mut out, &form.status);

    for (index, question) in form.questions.iter().enumerate() {
        match question.view() {
            Some(view) => {
                let id = view.id.to_string();
                let _ = writeln!(out, "{}. [{id}] {}", index + 1, view.question);
                for option in view.options() {
                    let _ = writeln!(out, "     - {option}");
                }
                if let Some(answer) = form.answers.get(&id) {
                    let _ = writeln!(out, "     > {answer}");
                }
            }
            None => {
                let _ = writeln!(out, "{}. {}", index + 1, question.0);
            }
        }
    }

    let _ = writeln!(
        out,
        "Share answers: {}",
        if form.share_answers { "yes" } else { "no" }
    );
    out
}

pub fn invitation(token: &InvitationToken, path: &str) -> String {
    format!("Invitation token: {token}\nSend this link to the other participant: {path}\n")
}

pub fn results(
    token: Option<&InvitationToken>,
    status: &PageStatus,
    payload: Option<&ResultsPayload>,
) -> String {
    let mut out = String::from("Results\n");
    if let Some(token) = token {
        let _ = writeln!(out, "Token: {token}");
    }
    status_line(&mut out, status);

    let Some(payload) = payload else {
        return out;
    };

    match payload.view() {
        Some(view) => {
            let _ = writeln!(out, "Compatibility: {}%", view.compatibility);
            let _ = writeln!(out, "{}", view.summary);
            answers_block(&mut out, "User A", view.user_a_shared, view.user_a_answers.as_ref());
            answers_block(&mut out, "User B", view.user_b_shared, view.user_b_answers.as_ref());
        }
        None => {
            let _ = writeln!(out, "{}", payload.0);
        }
    }
    out
}

fn status_line(out: &mut String, status: &PageStatus) {
    match status {
        PageStatus::Idle | PageStatus::Ready => {}
        PageStatus::Loading => out.push_str("Loading...\n"),
        PageStatus::Failed(message) => {
            let _ = writeln!(out, "Error: {message}");
        }
    }
}

fn answers_block(
    out: &mut String,
    who: &str,
    shared: bool,
    answers: Option<&std::collections::BTreeMap<String, serde_json::Value>>,
) {
    match answers {
        Some(answers) if shared => {
            let _ = writeln!(out, "{who} answers:");
            for (id, answer) in answers {
                let _ = writeln!(out, "  {id}: {answer}");
            }
        }
        _ => {
            let _ = writeln!(out, "{who} chose not to share their answers.");
        }
    }
}
