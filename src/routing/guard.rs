//! Navigation guard: maps a session snapshot and a requested path to a
//! decision.
//!
//! DESIGN
//! ======
//! The rules are an ordered table evaluated first-match-wins; a request no
//! rule claims is allowed. The guard performs no I/O and cannot fail.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::{self, Access, LANDING, LOGIN, NOTICES, RouteEntry};
use crate::state::session::{Session, Viewer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session still resolving; render a neutral loading state.
    Pending,
    Allow,
    Redirect(&'static str),
}

struct Rule {
    name: &'static str,
    applies: fn(&Session, Option<&RouteEntry>) -> bool,
    outcome: fn(&Session) -> Decision,
}

const RULES: &[Rule] = &[
    Rule {
        name: "session-loading",
        applies: |session, _| session.loading,
        outcome: |_| Decision::Pending,
    },
    Rule {
        name: "unknown-path",
        applies: |_, route| route.is_none(),
        outcome: |_| Decision::Redirect(LANDING),
    },
    Rule {
        name: "anonymous-private",
        applies: |session, route| {
            session.viewer() == Viewer::Anonymous && route.is_some_and(|r| r.access != Access::Public)
        },
        outcome: |_| Decision::Redirect(LOGIN),
    },
    Rule {
        name: "signed-in-public",
        applies: |session, route| {
            session.viewer() != Viewer::Anonymous && route.is_some_and(|r| r.access == Access::Public)
        },
        outcome: |session| Decision::Redirect(table::home_path(session.viewer())),
    },
    Rule {
        name: "student-admin-only",
        applies: |session, route| {
            session.viewer() == Viewer::Student && route.is_some_and(|r| r.access == Access::Admin)
        },
        outcome: |_| Decision::Redirect(NOTICES),
    },
];

/// Decide what happens when `session` requests `path`.
#[must_use]
pub fn decide(session: &Session, path: &str) -> Decision {
    let route = table::lookup(path);
    let Some(rule) = RULES.iter().find(|rule| (rule.applies)(session, route)) else {
        return Decision::Allow;
    };
    let decision = (rule.outcome)(session);
    if let Decision::Redirect(target) = decision {
        log::debug!("guard {}: {path} -> {target}", rule.name);
    }
    decision
}
