use crate::domain::{
    AnswerSet, InvitationToken, Operation, Question, QuestionItem, QuestionService,
    ResultsPayload, ServiceError, ShareFlag,
};
use crate::interface_adapters::protocol::{
    SubmitUserARequest, SubmitUserAResponse, SubmitUserBRequest, SubmitUserBResponse,
    UploadQuestionsResponse,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

// Every endpoint lives under this prefix; only the origin in front of it is configurable.
pub const API_BASE_PATH: &str = "/api";

// Thin wrapper around reqwest for the question/answer backend.
// No retries, timeouts or caching: each call is one request.
#[derive(Clone)]
pub struct QuestionClient {
    http: Client,
    origin: String,
}

#[derive(Debug)]
pub enum ClientBuildError {
    InvalidOrigin { origin: String, reason: String },
    Http(reqwest::Error),
}

impl fmt::Display for ClientBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientBuildError::InvalidOrigin { origin, reason } => {
                write!(f, "invalid api origin {origin:?}: {reason}")
            }
            ClientBuildError::Http(err) => write!(f, "failed to build http client: {err}"),
        }
    }
}

impl std::error::Error for ClientBuildError {}

impl QuestionClient {
    pub fn new(origin: &str) -> Result<Self, ClientBuildError> {
        let origin = parse_origin(origin)?;
        let http = Client::builder()
            .user_agent(concat!("qa_client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientBuildError::Http)?;
        Ok(Self { http, origin })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    // Absolute URL for an endpoint path such as `/questions`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{API_BASE_PATH}{path}", self.origin)
    }

    // Send, check the status, then parse. A non-2xx body is never read.
    async fn send<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T, ServiceError> {
        let response = request.send().await.map_err(|err| {
            tracing::warn!(%operation, error = %err, "request did not reach the backend.");
            ServiceError::Transport(err)
        })?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(%operation, %status, "backend rejected request.");
            return Err(ServiceError::RequestFailed(operation));
        }

        response.json::<T>().await.map_err(|err| {
            tracing::warn!(%operation, error = %err, "response body was not the expected json.");
            ServiceError::Decode(err)
        })
    }
}

fn parse_origin(raw: &str) -> Result<String, ClientBuildError> {
    let invalid = |reason: String| ClientBuildError::InvalidOrigin {
        origin: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("origin must not carry a query or fragment".to_string()));
    }
    if url.path() != "/" {
        return Err(invalid(format!(
            "origin must not carry a path, got {}",
            url.path()
        )));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[async_trait]
impl QuestionService for QuestionClient {
    #[tracing::instrument(name = "load_questions", skip_all)]
    async fn load_questions(&self) -> Result<Vec<Question>, ServiceError> {
        let request = self.http.get(self.endpoint("/questions"));
        // An empty question table is served as `null`.
        let questions: Option<Vec<Question>> =
            self.send(Operation::LoadQuestions, request).await?;
        let questions = questions.unwrap_or_default();

        tracing::debug!(count = questions.len(), "questions loaded.");
        Ok(questions)
    }

    #[tracing::instrument(
        name = "submit_user_a",
        skip_all,
        fields(answers = answers.len(), share_answers = share_answers)
    )]
    async fn submit_user_a(
        &self,
        answers: &AnswerSet,
        share_answers: ShareFlag,
    ) -> Result<InvitationToken, ServiceError> {
        let request = self
            .http
            .post(self.endpoint("/submit-user-a"))
            .json(&SubmitUserARequest {
                answers,
                share_answers,
            });
        let response: SubmitUserAResponse = self.send(Operation::SubmitUserA, request).await?;

        tracing::info!("user a answers submitted.");
        Ok(response.token)
    }

    #[tracing::instrument(
        name = "submit_user_b",
        skip_all,
        fields(token = %token, answers = answers.len(), share_answers = share_answers)
    )]
    async fn submit_user_b(
        &self,
        token: &InvitationToken,
        answers: &AnswerSet,
        share_answers: ShareFlag,
    ) -> Result<bool, ServiceError> {
        let request = self
            .http
            .post(self.endpoint("/submit-user-b"))
            .json(&SubmitUserBRequest {
                token,
                answers,
                share_answers,
            });
        let response: SubmitUserBResponse = self.send(Operation::SubmitUserB, request).await?;

        tracing::info!(success = response.success, "user b answers submitted.");
        Ok(response.success)
    }

    #[tracing::instrument(name = "get_results", skip_all, fields(token = %token))]
    async fn get_results(&self, token: &InvitationToken) -> Result<ResultsPayload, ServiceError> {
        // The token goes into the path as-is.
        let request = self.http.get(self.endpoint(&format!("/results/{token}")));
        self.send(Operation::GetResults, request).await
    }

    #[tracing::instrument(name = "upload_questions", skip_all, fields(count = items.len()))]
    async fn upload_questions(&self, items: &[QuestionItem]) -> Result<String, ServiceError> {
        let request = self.http.post(self.endpoint("/questions/upload")).json(items);
        let response: UploadQuestionsResponse =
            self.send(Operation::UploadQuestions, request).await?;

        tracing::info!("question set replaced.");
        Ok(response.message)
    }
}
