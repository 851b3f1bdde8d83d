//! # Session Commands
//!
//! Role selection and logout.
//!
//! ## Admin Login
//! ```text
//! "1) Admin Access"
//!      │
//!      ▼
//! Prompt: Enter admin name: ──► blank / cancelled ──► stay on role select
//!      │
//!      ▼
//! AdminAllowList::authorize_admin(name)
//!      ├── Ok(Admin) ─────────────────────────► Role::Admin
//!      └── Err(UnauthorizedAdminAttempt) ─────► Role::Staff + notice
//! ```

use std::fmt;

use stockscan_core::prompt::{Prompt, PromptReply, PromptRequest};
use stockscan_core::session::Session;
use stockscan_core::{AdminAllowList, CoreError, Role};
use tracing::{info, warn};

use crate::error::AppResult;

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Admin name accepted.
    Admin,
    /// Staff access selected.
    Staff,
    /// Admin name refused; continuing as staff.
    Downgraded { name: String },
    /// No name entered; still on role select.
    Cancelled,
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginOutcome::Admin => f.write_str("Logged in as Admin."),
            LoginOutcome::Staff => f.write_str("Logged in as Staff."),
            LoginOutcome::Downgraded { name } => {
                write!(f, "'{}' is not an authorized admin. Logged in as Staff.", name)
            }
            LoginOutcome::Cancelled => f.write_str("Login cancelled."),
        }
    }
}

/// Asks for an admin name and logs in with the role it earns.
pub fn login_admin<P>(
    session: &mut Session,
    gate: &AdminAllowList,
    prompt: &mut P,
) -> AppResult<LoginOutcome>
where
    P: Prompt + ?Sized,
{
    let name = match prompt.ask(&PromptRequest::AdminName) {
        PromptReply::Value(text) if !text.trim().is_empty() => text,
        _ => return Ok(LoginOutcome::Cancelled),
    };

    match gate.authorize_admin(&name) {
        Ok(role) => {
            session.login(role);
            info!(role = %role, "Logged in");
            Ok(LoginOutcome::Admin)
        }
        Err(CoreError::UnauthorizedAdminAttempt(name)) => {
            warn!(name = %name, "Admin login refused, continuing as staff");
            session.login(Role::Staff);
            Ok(LoginOutcome::Downgraded { name })
        }
        Err(e) => Err(e.into()),
    }
}

/// Logs in with staff access.
pub fn login_staff(session: &mut Session) -> LoginOutcome {
    session.login(Role::Staff);
    info!(role = %Role::Staff, "Logged in");
    LoginOutcome::Staff
}

/// Ends the session; the next screen is role select.
pub fn logout(session: &mut Session) {
    info!(role = %session.role(), "Logged out");
    session.logout();
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockscan_core::prompt::ScriptedPrompt;
    use stockscan_core::View;

    #[test]
    fn test_listed_admin_logs_in_as_admin() {
        let mut session = Session::new();
        let mut prompt = ScriptedPrompt::new(["  CODY ECKHARDT "]);

        let outcome = login_admin(&mut session, &AdminAllowList::default(), &mut prompt).unwrap();

        assert_eq!(outcome, LoginOutcome::Admin);
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(session.screen(), View::Dashboard);
    }

    #[test]
    fn test_unlisted_admin_is_downgraded() {
        let mut session = Session::new();
        let mut prompt = ScriptedPrompt::new(["Random Person"]);

        let outcome = login_admin(&mut session, &AdminAllowList::default(), &mut prompt).unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Downgraded {
                name: "Random Person".to_string()
            }
        );
        assert_eq!(session.role(), Role::Staff);
        assert_eq!(
            outcome.to_string(),
            "'Random Person' is not an authorized admin. Logged in as Staff."
        );
    }

    #[test]
    fn test_blank_or_cancelled_name_keeps_role_select() {
        let mut session = Session::new();
        let gate = AdminAllowList::default();

        let mut prompt = ScriptedPrompt::new(["   "]);
        assert_eq!(
            login_admin(&mut session, &gate, &mut prompt).unwrap(),
            LoginOutcome::Cancelled
        );

        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        assert_eq!(
            login_admin(&mut session, &gate, &mut prompt).unwrap(),
            LoginOutcome::Cancelled
        );

        assert_eq!(session.screen(), View::RoleSelect);
    }

    #[test]
    fn test_staff_then_logout() {
        let mut session = Session::new();
        assert_eq!(login_staff(&mut session), LoginOutcome::Staff);
        assert_eq!(session.role(), Role::Staff);

        logout(&mut session);
        assert_eq!(session.role(), Role::Unset);
        assert_eq!(session.screen(), View::RoleSelect);
    }
}
