use std::env;

// Runtime settings read from the environment (and `.env` when present).

pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:8088";

// Origin of the backend; the fixed `/api` prefix is appended by the client.
pub fn api_origin() -> String {
    env::var("QA_API_ORIGIN")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string())
}

pub fn json_logs() -> bool {
    matches!(env::var("LOG_FORMAT").as_deref(), Ok("json"))
}
