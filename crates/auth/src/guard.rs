//! Route guard: decides, once per navigation attempt, whether a
//! screen may be entered.
//!
//! The guard is a pure decision function over a [`Session`] seam; it
//! performs no IO of its own. Failures while reading roles deny the
//! attempt and are logged, never propagated as panics.

use thiserror::Error;

use crate::role::normalize;

/// Landing screen for authenticated users that fail a role check.
pub const DEFAULT_LANDING: &str = "/dashboard";

/// Error surfaced by a [`Session`] when role retrieval fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("session error: {0}")]
pub struct SessionError(pub String);

impl SessionError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Identity-provider session as seen by the guard.
///
/// Implemented over the real provider client in the application shell
/// and over fixtures in tests.
pub trait Session {
    fn is_authenticated(&self) -> bool;

    /// Raw role names granted to the current user. Retrieval can fail
    /// (e.g. the provider client is not initialized yet).
    fn roles(&self) -> Result<Vec<String>, SessionError>;
}

/// Where the navigation attempt is happening.
///
/// A non-interactive pass (server-side render) cannot drive a login
/// flow; it is allowed through and the client re-checks on hydration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    pub interactive: bool,
}

impl NavigationContext {
    pub fn browser() -> Self {
        Self { interactive: true }
    }

    pub fn server() -> Self {
        Self { interactive: false }
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Enter the requested screen.
    Allow,
    /// Deny; start an interactive login that returns to the attempted
    /// destination on success.
    Login { return_to: String },
    /// Deny; send the user to another screen.
    Redirect { to: String },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Evaluate one navigation attempt.
///
/// Order of checks: non-interactive context, authentication, route
/// role requirements, normalized role intersection.
pub fn evaluate(
    session: &dyn Session,
    ctx: NavigationContext,
    attempted: &str,
    required_roles: &[&str],
) -> GuardDecision {
    if !ctx.interactive {
        return GuardDecision::Allow;
    }

    if !session.is_authenticated() {
        tracing::debug!(path = attempted, "unauthenticated navigation, starting login");
        return GuardDecision::Login {
            return_to: attempted.to_string(),
        };
    }

    if required_roles.is_empty() {
        return GuardDecision::Allow;
    }

    let user_roles = match session.roles() {
        Ok(roles) => roles,
        Err(err) => {
            tracing::error!(path = attempted, error = %err, "role retrieval failed, denying navigation");
            return GuardDecision::Redirect {
                to: DEFAULT_LANDING.to_string(),
            };
        }
    };

    let user_tokens: Vec<String> = user_roles.iter().map(|r| normalize(r)).collect();
    let eligible = required_roles
        .iter()
        .any(|required| user_tokens.iter().any(|held| *held == normalize(required)));

    if eligible {
        GuardDecision::Allow
    } else {
        tracing::warn!(path = attempted, "navigation denied, missing required role");
        GuardDecision::Redirect {
            to: DEFAULT_LANDING.to_string(),
        }
    }
}
