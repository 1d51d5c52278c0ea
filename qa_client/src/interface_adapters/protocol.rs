use crate::domain::{AnswerSet, InvitationToken, ShareFlag};
use serde::{Deserialize, Serialize};

// Wire payloads for the `/api` endpoints. Field names follow the backend's camelCase.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitUserARequest<'a> {
    pub answers: &'a AnswerSet,
    pub share_answers: ShareFlag,
}

#[derive(Debug, Deserialize)]
pub struct SubmitUserAResponse {
    // Invitation token for participant B.
    pub token: InvitationToken,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitUserBRequest<'a> {
    pub token: &'a InvitationToken,
    pub answers: &'a AnswerSet,
    pub share_answers: ShareFlag,
}

#[derive(Debug, Deserialize)]
pub struct SubmitUserBResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct UploadQuestionsResponse {
    pub message: String,
}
