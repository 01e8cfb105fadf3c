//! `gestock-auth` — role normalization and route gating.
//!
//! This crate is intentionally decoupled from HTTP and from the
//! identity provider: the provider is reached through the [`Session`]
//! seam, and every role comparison in the workspace goes through
//! [`role::normalize`].

pub mod guard;
pub mod role;
pub mod routes;

pub use guard::{GuardDecision, NavigationContext, Session, SessionError, evaluate};
pub use role::{BusinessRole, display_role, has_role, is_technical, normalize};
pub use routes::{ROUTES, RouteSpec, guard_path, required_roles_for};
