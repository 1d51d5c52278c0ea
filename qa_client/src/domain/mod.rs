mod errors;
mod models;
pub mod navigation;
mod ports;

// Re-export the domain boundary types and ports.
pub use errors::{Operation, ServiceError};
pub use models::{
    AnswerSet, InvitationToken, Question, QuestionItem, QuestionView, ResultsPayload, ResultsView,
    ShareFlag,
};
pub use navigation::{MatchedRoute, Page, Resolution};
pub use ports::QuestionService;
