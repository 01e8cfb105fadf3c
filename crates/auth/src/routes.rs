//! Static route table: which screens exist and which roles they
//! require.

use crate::guard::{GuardDecision, NavigationContext, Session, evaluate};

/// One navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    /// Empty means "authenticated users only" for guarded routes and
    /// "open" for unguarded ones; see [`RouteSpec::guarded`].
    pub required_roles: &'static [&'static str],
    /// Whether the guard runs at all for this route.
    pub guarded: bool,
}

/// Application route table. Paths and role requirements mirror the
/// backend's authorization rules.
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        path: "/admin/users",
        required_roles: &["ADMINISTRATEUR"],
        guarded: true,
    },
    RouteSpec {
        path: "/magasinier/catalogue",
        required_roles: &["MAGASINIER", "ADMINISTRATEUR"],
        guarded: true,
    },
    RouteSpec {
        path: "/magasinier/pieces",
        required_roles: &["MAGASINIER", "ADMINISTRATEUR"],
        guarded: true,
    },
    RouteSpec {
        path: "/magasinier/produits",
        required_roles: &["MAGASINIER", "ADMINISTRATEUR"],
        guarded: true,
    },
    RouteSpec {
        path: "/settings",
        required_roles: &[],
        guarded: true,
    },
    RouteSpec {
        path: "/dashboard",
        required_roles: &[],
        guarded: false,
    },
];

/// Role requirement for a path, if the path is a known route.
pub fn required_roles_for(path: &str) -> Option<&'static [&'static str]> {
    ROUTES
        .iter()
        .find(|r| r.path == path)
        .map(|r| r.required_roles)
}

/// Guard a navigation attempt against the route table.
///
/// Unknown and unguarded paths are allowed; known guarded paths run
/// the full guard evaluation.
pub fn guard_path(session: &dyn Session, ctx: NavigationContext, path: &str) -> GuardDecision {
    match ROUTES.iter().find(|r| r.path == path) {
        Some(route) if route.guarded => evaluate(session, ctx, path, route.required_roles),
        _ => GuardDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::SessionError;

    struct FakeSession {
        authenticated: bool,
        roles: Vec<String>,
    }

    impl Session for FakeSession {
        fn is_authenticated(&self) -> bool {
            self.authenticated
        }

        fn roles(&self) -> Result<Vec<String>, SessionError> {
            Ok(self.roles.clone())
        }
    }

    #[test]
    fn admin_screen_requires_administrator() {
        assert_eq!(
            required_roles_for("/admin/users"),
            Some(&["ADMINISTRATEUR"][..])
        );
    }

    #[test]
    fn dashboard_is_unguarded() {
        let session = FakeSession {
            authenticated: false,
            roles: vec![],
        };
        let decision = guard_path(&session, NavigationContext::browser(), "/dashboard");
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn settings_needs_authentication_but_no_role() {
        let anonymous = FakeSession {
            authenticated: false,
            roles: vec![],
        };
        assert_eq!(
            guard_path(&anonymous, NavigationContext::browser(), "/settings"),
            GuardDecision::Login {
                return_to: "/settings".to_string()
            }
        );

        let authenticated = FakeSession {
            authenticated: true,
            roles: vec![],
        };
        assert_eq!(
            guard_path(&authenticated, NavigationContext::browser(), "/settings"),
            GuardDecision::Allow
        );
    }

    #[test]
    fn warehouse_clerk_reaches_catalog_but_not_admin() {
        let session = FakeSession {
            authenticated: true,
            roles: vec!["ROLE_MAGASINIER".to_string()],
        };
        assert!(
            guard_path(&session, NavigationContext::browser(), "/magasinier/pieces").is_allowed()
        );
        assert_eq!(
            guard_path(&session, NavigationContext::browser(), "/admin/users"),
            GuardDecision::Redirect {
                to: "/dashboard".to_string()
            }
        );
    }
}
