pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{
    AnswerSet, InvitationToken, Operation, Question, QuestionItem, QuestionService,
    ResultsPayload, ServiceError, ShareFlag,
};
pub use frameworks::app::run;
pub use interface_adapters::clients::QuestionClient;
