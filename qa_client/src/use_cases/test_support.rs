use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{
    AnswerSet, InvitationToken, Operation, Question, QuestionItem, QuestionService,
    ResultsPayload, ServiceError, ShareFlag,
};

// Calls observed by the recording fake, in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    LoadQuestions,
    SubmitUserA {
        answers: AnswerSet,
        share_answers: ShareFlag,
    },
    SubmitUserB {
        token: InvitationToken,
        answers: AnswerSet,
        share_answers: ShareFlag,
    },
    GetResults {
        token: InvitationToken,
    },
    UploadQuestions {
        count: usize,
    },
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub load_questions: bool,
    pub submit_user_a: bool,
    pub submit_user_b: bool,
    pub get_results: bool,
    pub upload_questions: bool,
}

// In-memory stand-in for the backend that records every call.
#[derive(Clone)]
pub(crate) struct RecordingService {
    calls: Arc<Mutex<Vec<Call>>>,
    failures: FailureFlags,
    questions: Vec<Question>,
    token: String,
    accept_user_b: bool,
}

impl RecordingService {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failures: FailureFlags::default(),
            questions: vec![
                Question(json!({ "id": 1, "question": "Morning or night?", "isMultipleChoice": true, "options": ["morning", "night"] })),
                Question(json!({ "id": 2, "question": "Describe a perfect weekend.", "isMultipleChoice": false, "options": [] })),
            ],
            token: "abc123".to_string(),
            accept_user_b: true,
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn rejecting_user_b(mut self) -> Self {
        self.accept_user_b = false;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }
}

#[async_trait]
impl QuestionService for RecordingService {
    async fn load_questions(&self) -> Result<Vec<Question>, ServiceError> {
        self.record(Call::LoadQuestions);
        if self.failures.load_questions {
            return Err(ServiceError::RequestFailed(Operation::LoadQuestions));
        }
        Ok(self.questions.clone())
    }

    async fn submit_user_a(
        &self,
        answers: &AnswerSet,
        share_answers: ShareFlag,
    ) -> Result<InvitationToken, ServiceError> {
        self.record(Call::SubmitUserA {
            answers: answers.clone(),
            share_answers,
        });
        if self.failures.submit_user_a {
            return Err(ServiceError::RequestFailed(Operation::SubmitUserA));
        }
        Ok(InvitationToken::new(self.token.clone()))
    }

    async fn submit_user_b(
        &self,
        token: &InvitationToken,
        answers: &AnswerSet,
        share_answers: ShareFlag,
    ) -> Result<bool, ServiceError> {
        self.record(Call::SubmitUserB {
            token: token.clone(),
            answers: answers.clone(),
            share_answers,
        });
        if self.failures.submit_user_b {
            return Err(ServiceError::RequestFailed(Operation::SubmitUserB));
        }
        Ok(self.accept_user_b)
    }

    async fn get_results(&self, token: &InvitationToken) -> Result<ResultsPayload, ServiceError> {
        self.record(Call::GetResults {
            token: token.clone(),
        });
        if self.failures.get_results {
            return Err(ServiceError::RequestFailed(Operation::GetResults));
        }
        Ok(ResultsPayload(json!({
            "compatibility": 90,
            "summary": "Very much in sync.",
            "userAShared": true,
            "userBShared": true,
            "userAAnswers": { "1": "morning" },
            "userBAnswers": { "1": "morning" }
        })))
    }

    async fn upload_questions(&self, items: &[QuestionItem]) -> Result<String, ServiceError> {
        self.record(Call::UploadQuestions { count: items.len() });
        if self.failures.upload_questions {
            return Err(ServiceError::RequestFailed(Operation::UploadQuestions));
        }
        Ok("Questions uploaded successfully".to_string())
    }
}
