//! Route guard: decide whether a navigation may render.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consulted by `AdminGuard` and the shell before any admin-zone view is
//! shown. The decision is a pure function of the session phase and the zone;
//! the guard keeps no state of its own and re-runs whenever the session
//! signal changes (initialize, login, logout).
//!
//! This gate is a UX convenience. The backend must authorize every
//! privileged request on its own.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::nav::{HOME_PATH, LOGIN_PATH, Zone};
use crate::state::session::{AppSession, AuthPhase};

/// Outcome of a single navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not read yet; show a placeholder and decide later.
    Loading,
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl GuardDecision {
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToHome => Some(HOME_PATH),
            Self::Loading | Self::Allow => None,
        }
    }
}

/// Decide a navigation into `zone` for a session in `phase`.
pub fn decide(phase: AuthPhase, zone: Zone) -> GuardDecision {
    match (zone, phase) {
        (Zone::Public, _) | (Zone::Admin, AuthPhase::Admin) => GuardDecision::Allow,
        (Zone::Admin, AuthPhase::Unknown) => GuardDecision::Loading,
        (Zone::Admin, AuthPhase::Unauthenticated) => GuardDecision::RedirectToLogin,
        (Zone::Admin, AuthPhase::Member) => GuardDecision::RedirectToHome,
    }
}

/// Reactive decision for `zone` tracking the session signal.
pub fn guard_decision(session: AppSession, zone: Zone) -> Memo<GuardDecision> {
    Memo::new(move |_| decide(session.with(|s| s.session().phase()), zone))
}

/// Navigate away whenever `decision` turns into a redirect.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = decision.get().redirect_target() {
            log::debug!("route guard redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
