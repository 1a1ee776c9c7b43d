//! Interactive controls and the navigation they trigger.
//!
//! Only the login control has an effect: a full navigation of the current
//! browsing context to [`LOGIN_TARGET`]. "Get Started" and "Learn More" are
//! rendered as buttons but do nothing when activated.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Where the login control sends the browser.
pub const LOGIN_TARGET: &str = "http://localhost:8501";

/// Performs a full navigation of the current browsing context.
///
/// Implementations do not report failure; an unreachable target is the
/// browser's problem once navigation starts.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Navigator shared with event handlers.
pub type SharedNavigator = Arc<dyn Navigator>;

/// The clickable controls on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Navbar login button
    Login,
    /// Hero call-to-action
    GetStarted,
    /// "Why choose us" call-to-action
    LearnMore,
}

impl Control {
    /// Run this control's click behavior.
    pub fn activate(self, navigator: &dyn Navigator) {
        match self {
            Control::Login => on_login_click(navigator),
            Control::GetStarted | Control::LearnMore => {}
        }
    }

    /// Whether activating the control has no effect.
    pub fn is_inert(self) -> bool {
        !matches!(self, Control::Login)
    }

    /// CSS class of the rendered button.
    pub fn css_class(self) -> &'static str {
        match self {
            Control::Login => "login-btn",
            Control::GetStarted => "get-started",
            Control::LearnMore => "learn-more-btn",
        }
    }
}

/// Login click handler: redirect to [`LOGIN_TARGET`].
pub fn on_login_click(navigator: &dyn Navigator) {
    tracing::debug!("Login activated, navigating to {}", LOGIN_TARGET);
    navigator.navigate(LOGIN_TARGET);
}

/// Navigator that records targets instead of leaving the page.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every target navigated to, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|v| v.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        let mut visited = self
            .visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        visited.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_redirects_to_fixed_target() {
        let navigator = RecordingNavigator::new();
        on_login_click(&navigator);
        assert_eq!(navigator.visited(), vec![LOGIN_TARGET.to_string()]);
        assert_eq!(LOGIN_TARGET, "http://localhost:8501");
    }

    #[test]
    fn login_control_uses_handler() {
        let navigator = RecordingNavigator::new();
        Control::Login.activate(&navigator);
        Control::Login.activate(&navigator);
        assert_eq!(navigator.visited().len(), 2);
        assert!(navigator.visited().iter().all(|url| url == LOGIN_TARGET));
    }

    #[test]
    fn call_to_action_controls_are_inert() {
        let navigator = RecordingNavigator::new();
        for control in [Control::GetStarted, Control::LearnMore] {
            control.activate(&navigator);
            assert!(control.is_inert());
        }
        assert!(navigator.visited().is_empty());
        assert!(!Control::Login.is_inert());
    }
}
