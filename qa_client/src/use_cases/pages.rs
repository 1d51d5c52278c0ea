use serde_json::Value;

use crate::domain::navigation;
use crate::domain::{
    AnswerSet, InvitationToken, Page, Question, QuestionService, ResultsPayload, ShareFlag,
};

// Local display state shared by every page that talks to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    // User-facing error message; the page stays usable and nothing is retried.
    Failed(String),
}

impl PageStatus {
    pub fn error(&self) -> Option<&str> {
        match self {
            PageStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

// Landing page. Static: links to the intake form and the results viewer.
pub struct HomePage;

impl HomePage {
    pub fn links(&self) -> Vec<(&'static str, String)> {
        [Page::UserA, Page::ViewResults]
            .into_iter()
            .filter_map(|page| {
                let path = navigation::link(page, &[])?;
                Some((navigation::route_for(page).name, path))
            })
            .collect()
    }
}

// Question list plus the answers being collected for it.
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    pub questions: Vec<Question>,
    pub answers: AnswerSet,
    pub share_answers: ShareFlag,
    pub status: PageStatus,
}

impl IntakeForm {
    pub fn answer(&mut self, question_id: impl Into<String>, answer: impl Into<Value>) {
        self.answers.insert(question_id, answer);
    }

    async fn load<S: QuestionService>(&mut self, service: &S) {
        self.status = PageStatus::Loading;
        match service.load_questions().await {
            Ok(questions) => {
                self.questions = questions;
                self.status = PageStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load questions.");
                self.status = PageStatus::Failed(e.to_string());
            }
        }
    }
}

// Participant A: answers the questions and receives an invitation for participant B.
pub struct UserAPage<S> {
    service: S,
    pub form: IntakeForm,
    pub token: Option<InvitationToken>,
}

impl<S: QuestionService> UserAPage<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            form: IntakeForm::default(),
            token: None,
        }
    }

    pub async fn load(&mut self) {
        self.form.load(&self.service).await;
    }

    // Submit the collected answers. Returns the invitation path for participant B.
    pub async fn submit(&mut self) -> Option<String> {
        self.form.status = PageStatus::Loading;
        match self
            .service
            .submit_user_a(&self.form.answers, self.form.share_answers)
            .await
        {
            Ok(token) => {
                let invitation = navigation::link(Page::UserB, &[("token", token.as_str())]);
                self.token = Some(token);
                self.form.status = PageStatus::Ready;
                invitation
            }
            Err(e) => {
                tracing::warn!(error = %e, "user a submission failed.");
                self.form.status = PageStatus::Failed(e.to_string());
                None
            }
        }
    }
}

// Participant B: answers the same questions against A's invitation token.
pub struct UserBPage<S> {
    service: S,
    pub token: InvitationToken,
    pub form: IntakeForm,
    pub submitted: bool,
}

impl<S: QuestionService> UserBPage<S> {
    pub fn new(service: S, token: InvitationToken) -> Self {
        Self {
            service,
            token,
            form: IntakeForm::default(),
            submitted: false,
        }
    }

    pub async fn load(&mut self) {
        self.form.load(&self.service).await;
    }

    // Submit the collected answers. Returns the results path once the backend accepts them.
    pub async fn submit(&mut self) -> Option<String> {
        self.form.status = PageStatus::Loading;
        match self
            .service
            .submit_user_b(&self.token, &self.form.answers, self.form.share_answers)
            .await
        {
            Ok(success) => {
                self.submitted = success;
                self.form.status = PageStatus::Ready;
                if success {
                    navigation::link(Page::Results, &[("token", self.token.as_str())])
                } else {
                    tracing::info!(token = %self.token, "backend did not accept user b answers.");
                    None
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "user b submission failed.");
                self.form.status = PageStatus::Failed(e.to_string());
                None
            }
        }
    }
}

// Results for a token taken from the route.
pub struct ResultsPage<S> {
    service: S,
    pub token: InvitationToken,
    pub results: Option<ResultsPayload>,
    pub status: PageStatus,
}

impl<S: QuestionService> ResultsPage<S> {
    pub fn new(service: S, token: InvitationToken) -> Self {
        Self {
            service,
            token,
            results: None,
            status: PageStatus::Idle,
        }
    }

    pub async fn load(&mut self) {
        self.status = PageStatus::Loading;
        match self.service.get_results(&self.token).await {
            Ok(results) => {
                self.results = Some(results);
                self.status = PageStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch results.");
                self.status = PageStatus::Failed(e.to_string());
            }
        }
    }
}

pub const MISSING_TOKEN_MESSAGE: &str = "Please enter an invitation token";

// Results viewer where the token is typed in rather than taken from the route.
pub struct ViewResultsPage<S> {
    service: S,
    pub token: Option<InvitationToken>,
    pub results: Option<ResultsPayload>,
    pub status: PageStatus,
}

impl<S: QuestionService> ViewResultsPage<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            token: None,
            results: None,
            status: PageStatus::Idle,
        }
    }

    pub async fn lookup(&mut self, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            self.status = PageStatus::Failed(MISSING_TOKEN_MESSAGE.to_string());
            return;
        }

        let token = InvitationToken::new(token);
        self.status = PageStatus::Loading;
        self.results = None;
        match self.service.get_results(&token).await {
            Ok(results) => {
                self.results = Some(results);
                self.status = PageStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch results.");
                self.status = PageStatus::Failed(e.to_string());
            }
        }
        self.token = Some(token);
    }
}
