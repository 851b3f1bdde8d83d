//! # Session & View Router
//!
//! Owns the session role and the current screen.
//!
//! ## State Machine
//! ```text
//!                 login(role)
//!  ┌────────────┐ ───────────► ┌───────────┐ ──navigate──► ┌──────────────────┐
//!  │ RoleSelect │              │ Dashboard │               │ Add (admin only) │
//!  └────────────┘ ◄─────────── └───────────┘ ◄────back──── │ Remove           │
//!        ▲           logout          ▲                     │ List             │
//!        │                           │                     └────────┬─────────┘
//!        └───────────────────────────┴──────── logout ──────────────┘
//! ```
//!
//! `RoleSelect` is not stored as a view: it is what the session shows while
//! the role is [`Role::Unset`]. Logout clears the role and parks the view on
//! `Dashboard`, so the next login starts from the menu.

use crate::error::{CoreError, CoreResult};
use crate::types::{Role, View};

/// Actions offered on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    /// Open the add scanner (admin only).
    AddStock,
    /// Open the remove scanner.
    RemoveStock,
    /// Open the stock list.
    ViewInventory,
}

impl DashboardAction {
    /// Menu label.
    pub const fn label(&self) -> &'static str {
        match self {
            DashboardAction::AddStock => "Add Stock",
            DashboardAction::RemoveStock => "Remove Stock",
            DashboardAction::ViewInventory => "View Inventory",
        }
    }

    /// Screen the action opens.
    pub const fn target(&self) -> View {
        match self {
            DashboardAction::AddStock => View::Add,
            DashboardAction::RemoveStock => View::Remove,
            DashboardAction::ViewInventory => View::List,
        }
    }
}

/// Role and screen of the running session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    role: Role,
    view: View,
}

impl Session {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        Session::default()
    }

    /// Current access level.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Screen to show right now.
    pub fn screen(&self) -> View {
        if self.role.is_set() {
            self.view
        } else {
            View::RoleSelect
        }
    }

    /// Sets the access level for this session and opens the dashboard.
    ///
    /// Logging in with [`Role::Unset`] is the same as logging out.
    pub fn login(&mut self, role: Role) {
        self.role = role;
        self.view = View::Dashboard;
    }

    /// Clears the role; the next screen is role selection.
    pub fn logout(&mut self) {
        self.role = Role::Unset;
        self.view = View::Dashboard;
    }

    /// Dashboard actions available to the current role.
    pub fn dashboard_actions(&self) -> Vec<DashboardAction> {
        let mut actions = Vec::with_capacity(3);
        if self.role.is_admin() {
            actions.push(DashboardAction::AddStock);
        }
        if self.role.is_set() {
            actions.push(DashboardAction::RemoveStock);
            actions.push(DashboardAction::ViewInventory);
        }
        actions
    }

    /// Moves to another screen.
    ///
    /// ## Returns
    /// * `Ok(View)` - The new screen
    /// * `Err(NoActiveSession)` - No role selected yet
    /// * `Err(AdminRequired)` - `Add` requested by a non-admin
    pub fn navigate(&mut self, target: View) -> CoreResult<View> {
        if !self.role.is_set() {
            return Err(CoreError::NoActiveSession);
        }

        match target {
            View::RoleSelect => {
                self.logout();
                return Ok(self.screen());
            }
            View::Add if !self.role.is_admin() => {
                return Err(CoreError::AdminRequired {
                    action: DashboardAction::AddStock.label().to_string(),
                });
            }
            _ => {}
        }

        self.view = target;
        Ok(target)
    }

    /// Returns to the dashboard from any sub-screen.
    pub fn back(&mut self) {
        self.view = View::Dashboard;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_shows_role_select() {
        let session = Session::new();
        assert_eq!(session.role(), Role::Unset);
        assert_eq!(session.screen(), View::RoleSelect);
        assert!(session.dashboard_actions().is_empty());
    }

    #[test]
    fn test_admin_sees_every_action() {
        let mut session = Session::new();
        session.login(Role::Admin);

        assert_eq!(session.screen(), View::Dashboard);
        assert_eq!(
            session.dashboard_actions(),
            vec![
                DashboardAction::AddStock,
                DashboardAction::RemoveStock,
                DashboardAction::ViewInventory
            ]
        );
        assert_eq!(session.navigate(View::Add).unwrap(), View::Add);
    }

    #[test]
    fn test_staff_cannot_open_add() {
        let mut session = Session::new();
        session.login(Role::Staff);

        assert_eq!(
            session.dashboard_actions(),
            vec![DashboardAction::RemoveStock, DashboardAction::ViewInventory]
        );
        assert!(matches!(
            session.navigate(View::Add),
            Err(CoreError::AdminRequired { .. })
        ));
        assert_eq!(session.screen(), View::Dashboard);

        assert_eq!(session.navigate(View::Remove).unwrap(), View::Remove);
        session.back();
        assert_eq!(session.navigate(View::List).unwrap(), View::List);
    }

    #[test]
    fn test_navigate_requires_role() {
        let mut session = Session::new();
        assert!(matches!(
            session.navigate(View::List),
            Err(CoreError::NoActiveSession)
        ));
    }

    #[test]
    fn test_logout_resets_to_fresh_dashboard() {
        let mut session = Session::new();
        session.login(Role::Admin);
        session.navigate(View::List).unwrap();

        session.logout();
        assert_eq!(session.role(), Role::Unset);
        assert_eq!(session.screen(), View::RoleSelect);

        session.login(Role::Staff);
        assert_eq!(session.screen(), View::Dashboard);
    }

    #[test]
    fn test_navigate_to_role_select_logs_out() {
        let mut session = Session::new();
        session.login(Role::Staff);
        assert_eq!(session.navigate(View::RoleSelect).unwrap(), View::RoleSelect);
        assert_eq!(session.role(), Role::Unset);
    }
}
