use std::fmt;

// Remote operations exposed by the question service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    LoadQuestions,
    SubmitUserA,
    SubmitUserB,
    GetResults,
    UploadQuestions,
}

impl Operation {
    // Fixed user-facing message raised when the backend answers with a non-2xx status.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::LoadQuestions => "Failed to load questions",
            Operation::SubmitUserA => "Failed to submit User A answers",
            Operation::SubmitUserB => "Failed to submit User B answers",
            Operation::GetResults => "Failed to fetch results",
            Operation::UploadQuestions => "Failed to upload questions",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::LoadQuestions => "load_questions",
            Operation::SubmitUserA => "submit_user_a",
            Operation::SubmitUserB => "submit_user_b",
            Operation::GetResults => "get_results",
            Operation::UploadQuestions => "upload_questions",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Carrying reqwest errors in the domain is a dependency leak, kept so transport and decode
// failures reach callers as the transport reported them.
#[derive(Debug)]
pub enum ServiceError {
    // Non-2xx response. Status and body are deliberately not carried.
    RequestFailed(Operation),
    Transport(reqwest::Error),
    Decode(reqwest::Error),
}

impl ServiceError {
    pub fn is_request_failed(&self) -> bool {
        matches!(self, ServiceError::RequestFailed(_))
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::RequestFailed(operation) => f.write_str(operation.failure_message()),
            ServiceError::Transport(err) => write!(f, "transport error: {err}"),
            ServiceError::Decode(err) => write!(f, "response decode error: {err}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::RequestFailed(_) => None,
            ServiceError::Transport(err) | ServiceError::Decode(err) => Some(err),
        }
    }
}
