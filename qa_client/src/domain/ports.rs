use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::models::{
    AnswerSet, InvitationToken, Question, QuestionItem, ResultsPayload, ShareFlag,
};

// Port for the remote question/answer backend. Pages depend on this trait, not on the
// reqwest client. Every call is independent; implementations keep no per-call state.
#[async_trait]
pub trait QuestionService: Send + Sync {
    async fn load_questions(&self) -> Result<Vec<Question>, ServiceError>;

    // Returns the invitation token for participant B.
    async fn submit_user_a(
        &self,
        answers: &AnswerSet,
        share_answers: ShareFlag,
    ) -> Result<InvitationToken, ServiceError>;

    // Returns the backend's `success` flag.
    async fn submit_user_b(
        &self,
        token: &InvitationToken,
        answers: &AnswerSet,
        share_answers: ShareFlag,
    ) -> Result<bool, ServiceError>;

    async fn get_results(&self, token: &InvitationToken) -> Result<ResultsPayload, ServiceError>;

    // Replaces the backend's question set. Returns the backend's confirmation message.
    async fn upload_questions(&self, items: &[QuestionItem]) -> Result<String, ServiceError>;
}
