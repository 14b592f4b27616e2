use crate::error::{AppError, Result};
use crate::models::Session;

/// Operator session state with explicit login/logout transitions.
///
/// No credential verification happens here; the gateway owns real
/// authentication. The shell consults `is_logged_in` as a capability check
/// before routing any view command.
pub struct SessionService {
    session: Option<Session>,
}

impl SessionService {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Start a session. Both inputs must be non-empty; nothing else is
    /// checked.
    pub fn login(&mut self, operator: &str, password: &str) -> Result<Session> {
        if operator.is_empty() || password.is_empty() {
            return Err(AppError::Session(
                "Please enter both ID and password.".to_string(),
            ));
        }

        let session = Session::new(operator.to_string());
        tracing::info!(operator, session = %session.id, "Operator logged in");
        self.session = Some(session.clone());
        Ok(session)
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(operator = %session.operator, "Operator logged out");
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}
