use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// Consent bit sent as `shareAnswers`: whether the counterpart may see this participant's answers.
pub type ShareFlag = bool;

// A question as served by the backend. The backend owns the shape, so the raw JSON is kept
// and handed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question(pub Value);

impl Question {
    // Best-effort typed view for display. Returns None instead of rejecting odd payloads.
    pub fn view(&self) -> Option<QuestionView> {
        serde_json::from_value(self.0.clone()).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: u64,
    pub question: String,
    #[serde(default)]
    pub is_multiple_choice: bool,
    // The backend encodes an empty option list as `null`.
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

impl QuestionView {
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }
}

// Answers keyed by question identifier. Values are passed through as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, Value>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: impl Into<Value>) {
        self.0.insert(question_id.into(), answer.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&Value> {
        self.0.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, answer)| (id.into(), answer.into()))
                .collect(),
        )
    }
}

// Server-generated identifier pairing two participants' submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvitationToken(String);

impl InvitationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvitationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InvitationToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for InvitationToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// Results for a token, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultsPayload(pub Value);

impl ResultsPayload {
    pub fn view(&self) -> Option<ResultsView> {
        serde_json::from_value(self.0.clone()).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    #[serde(default)]
    pub compatibility: i64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub user_a_shared: bool,
    #[serde(default)]
    pub user_b_shared: bool,
    // Withheld (null) when the participant did not consent to sharing.
    #[serde(default)]
    pub user_a_answers: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    pub user_b_answers: Option<BTreeMap<String, Value>>,
}

// One entry of a question-set upload. Uploading replaces the whole set on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub id: u64,
    pub question: String,
    #[serde(default)]
    pub is_multiple_choice: bool,
    // Questions stored without options come back as `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub options: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
