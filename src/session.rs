use crate::api::MoodApi;
use crate::app::{Action, NavTarget};
use tracing::{info, warn};

pub const SIGNED_IN_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: Action,
}

/// Asks the backend whether the session cookie is still good. Any failure
/// counts as logged out and is not retried.
pub async fn probe<A: MoodApi>(api: &A) -> bool {
    match api.probe_session().await {
        Ok(authenticated) => {
            info!(authenticated, "session probe finished");
            authenticated
        }
        Err(err) => {
            warn!("session probe failed: {err}");
            false
        }
    }
}

pub fn profile_menu(authenticated: bool) -> Vec<MenuItem> {
    if authenticated {
        vec![
            MenuItem {
                label: "Dashboard",
                action: Action::ShowDashboard,
            },
            MenuItem {
                label: "Logout",
                action: Action::Navigate(NavTarget::Logout),
            },
        ]
    } else {
        vec![MenuItem {
            label: "Login",
            action: Action::Navigate(NavTarget::Login),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_menu_only_offers_login() {
        let menu = profile_menu(false);
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].label, "Login");
        assert_eq!(menu[0].action, Action::Navigate(NavTarget::Login));
    }

    #[test]
    fn logged_in_menu_offers_dashboard_and_logout() {
        let labels: Vec<&str> = profile_menu(true).iter().map(|item| item.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Logout"]);
    }
}
