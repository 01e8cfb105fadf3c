//! User accounts as the admin surface sees them.
//!
//! The wire shape mirrors the identity provider's user representation
//! (camelCase field names); the `role` field carries the single
//! business role the backend has filtered out of the raw role list.

use serde::{Deserialize, Serialize};

use gestock_auth::BusinessRole;
use gestock_core::{DomainError, DomainResult, UserId};

/// A user account row in the admin screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    /// Single recognized business role, or a sentinel like `AUCUN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserAccount {
    /// Business role currently held, if the stored value is one.
    pub fn business_role(&self) -> Option<BusinessRole> {
        self.role.as_deref().and_then(BusinessRole::parse)
    }

    /// Status word used in search and display: `actif` / `bloqué`.
    pub fn status_label(&self) -> &'static str {
        if self.enabled { "actif" } else { "bloqué" }
    }
}

/// One role entry as returned by `GET .../users/{id}/roles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRepresentation {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Credential entry sent alongside a user creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub temporary: bool,
}

impl Credential {
    pub fn password(value: impl Into<String>) -> Self {
        Self {
            kind: "password".to_string(),
            value: value.into(),
            temporary: false,
        }
    }
}

/// Draft for the create-user modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: Option<BusinessRole>,
}

impl NewUser {
    /// Default draft: warehouse clerk preselected, everything else
    /// blank.
    pub fn template() -> Self {
        Self {
            role: Some(BusinessRole::Magasinier),
            ..Self::default()
        }
    }

    /// Validate and build the creation payload. The username falls
    /// back to the email when left blank.
    pub fn into_payload(self) -> DomainResult<CreateUserPayload> {
        if self.email.trim().is_empty() {
            return Err(DomainError::validation("l'email est obligatoire"));
        }
        let username = if self.username.trim().is_empty() {
            self.email.clone()
        } else {
            self.username
        };
        Ok(CreateUserPayload {
            username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            enabled: true,
            role: self.role.map(|r| r.as_token().to_string()),
            credentials: vec![Credential::password(self.password)],
        })
    }
}

/// Wire payload for `POST /api/admin/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub credentials: Vec<Credential>,
}

/// Planned mutation of a user's single business role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleChange {
    Assign(BusinessRole),
    Remove(BusinessRole),
    /// Replace: remove `old`, then assign `new`.
    Replace {
        old: BusinessRole,
        new: BusinessRole,
    },
}

/// Plan the role mutation for a target role, given the role currently
/// held. Returns `None` when the target is already held (no-op).
///
/// A user holds at most one business role, so assigning over an
/// existing one is a replace, never an accumulation.
pub fn plan_role_change(current: Option<BusinessRole>, target: BusinessRole) -> Option<RoleChange> {
    match current {
        Some(old) if old == target => None,
        Some(old) => Some(RoleChange::Replace { old, new: target }),
        None => Some(RoleChange::Assign(target)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_requires_email() {
        let draft = NewUser {
            email: "  ".to_string(),
            ..NewUser::template()
        };
        assert!(draft.into_payload().is_err());
    }

    #[test]
    fn username_falls_back_to_email() {
        let draft = NewUser {
            email: "alice@example.com".to_string(),
            password: "s3cret-pass".to_string(),
            ..NewUser::template()
        };
        let payload = draft.into_payload().unwrap();
        assert_eq!(payload.username, "alice@example.com");
        assert_eq!(payload.role.as_deref(), Some("MAGASINIER"));
        assert_eq!(payload.credentials[0].kind, "password");
        assert!(!payload.credentials[0].temporary);
    }

    #[test]
    fn role_change_is_noop_when_target_already_held() {
        assert_eq!(
            plan_role_change(Some(BusinessRole::Auditeur), BusinessRole::Auditeur),
            None
        );
    }

    #[test]
    fn assigning_over_an_existing_role_replaces_it() {
        assert_eq!(
            plan_role_change(Some(BusinessRole::Auditeur), BusinessRole::Magasinier),
            Some(RoleChange::Replace {
                old: BusinessRole::Auditeur,
                new: BusinessRole::Magasinier,
            })
        );
        assert_eq!(
            plan_role_change(None, BusinessRole::Magasinier),
            Some(RoleChange::Assign(BusinessRole::Magasinier))
        );
    }

    #[test]
    fn status_label_matches_search_vocabulary() {
        let mut user = UserAccount::default();
        assert_eq!(user.status_label(), "bloqué");
        user.enabled = true;
        assert_eq!(user.status_label(), "actif");
    }

    #[test]
    fn account_deserializes_provider_shape() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "username": "bob",
            "email": "bob@example.com",
            "firstName": "Bob",
            "lastName": "Martin",
            "enabled": true,
            "role": "RESPONSABLE_LOGISTIQUE"
        }"#;
        let user: UserAccount = serde_json::from_str(json).unwrap();
        assert_eq!(
            user.business_role(),
            Some(gestock_auth::BusinessRole::ResponsableLogistique)
        );
        assert_eq!(user.first_name.as_deref(), Some("Bob"));
    }
}
