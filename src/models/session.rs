use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An operator session. Holds no credentials; the gateway owns real
/// authentication. The session exists so the shell can gate navigation
/// behind a logged-in state with explicit login/logout transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Generated session token.
    pub id: String,
    /// Operator identifier entered at login.
    pub operator: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(operator: String) -> Self {
        Self {
            id: format!("session-{}", Uuid::new_v4()),
            operator,
            logged_in_at: Utc::now(),
        }
    }
}
