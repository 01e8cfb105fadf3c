//! `gestock-directory` — administered user accounts.
//!
//! Models for the identity-provider backed user list (admin screen)
//! and the self-service profile/password forms, with the client-side
//! validation that runs before any request is issued.

pub mod account;
pub mod profile;

pub use account::{
    CreateUserPayload, Credential, NewUser, RoleChange, RoleRepresentation, UserAccount,
    plan_role_change,
};
pub use profile::{MIN_PASSWORD_LEN, PasswordChange, PasswordPayload, ProfileUpdate};
