//! Role gate and root redirect decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every role section applies the same gate. The decision itself is a pure
//! function of the session; `install_gate_redirect` only replays the decision
//! through the router whenever the session changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::paths;
use crate::state::session::Session;

/// Outcome of evaluating a section's role gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Session not hydrated yet; nothing conclusive may render.
    Deferred,
    /// No user; send to login.
    Unauthenticated,
    /// Signed in, but the section does not admit this role.
    WrongRole { home: &'static str },
    /// Children may render.
    Authorized,
}

impl GateState {
    /// Route to navigate to, if the state requires leaving the section.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Unauthenticated => Some(paths::LOGIN),
            Self::WrongRole { home } => Some(home),
            Self::Deferred | Self::Authorized => None,
        }
    }
}

/// Evaluate the role gate for a section admitting `allowed` roles.
pub fn evaluate_role_gate(session: &Session, allowed: &[Role]) -> GateState {
    if session.is_loading {
        return GateState::Deferred;
    }
    match session.user.as_ref() {
        None => GateState::Unauthenticated,
        Some(user) if !allowed.contains(&user.role) => GateState::WrongRole { home: user.role.home_path() },
        Some(_) => GateState::Authorized,
    }
}

/// Where the root page sends the visitor, or `None` while loading.
pub fn root_redirect(session: &Session) -> Option<&'static str> {
    if session.is_loading {
        return None;
    }
    Some(session.user.as_ref().map_or(paths::LOGIN, |user| user.role.home_path()))
}

/// Navigation used for gate redirects: replace history so "back" does not
/// bounce through the guarded page.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever `target` yields a route.
pub fn install_gate_redirect<T, F>(target: T, navigate: F)
where
    T: Fn() -> Option<&'static str> + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = target() {
            navigate(path, redirect_options());
        }
    });
}
