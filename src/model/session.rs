use serde::{Deserialize, Serialize};

/// Body of the create and join calls.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionCredentials {
    pub name: String,
    pub password: String,
}

/// A joined session: the name used in the hole URL and the token sent in
/// `X-Session-Token`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionHandle {
    pub name: String,
    pub token: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct JoinResponse {
    pub token: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ErrorDetail {
    pub detail: Option<String>,
}

/// Session listings come back either as plain names or as `{name}` objects.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum SessionListEntry {
    Name(String),
    Named { name: String },
}

impl SessionListEntry {
    #[must_use]
    pub fn into_name(self) -> String {
        match self {
            SessionListEntry::Name(name) | SessionListEntry::Named { name } => name,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum SessionListResponse {
    Wrapped { sessions: Vec<SessionListEntry> },
    Bare(Vec<SessionListEntry>),
}

impl SessionListResponse {
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        let entries = match self {
            SessionListResponse::Wrapped { sessions } => sessions,
            SessionListResponse::Bare(sessions) => sessions,
        };
        entries.into_iter().map(SessionListEntry::into_name).collect()
    }
}
