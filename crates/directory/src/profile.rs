//! Self-service profile and password forms (settings screen).

use serde::{Deserialize, Serialize};

use gestock_core::{DomainError, DomainResult};

/// Minimum password length accepted by the identity provider policy.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Payload for `PUT /api/users/profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        if self.first_name.trim().is_empty() {
            return Err(DomainError::validation("le prénom est obligatoire"));
        }
        if self.last_name.trim().is_empty() {
            return Err(DomainError::validation("le nom est obligatoire"));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(DomainError::validation("email invalide"));
        }
        Ok(())
    }
}

/// Password change/reset form: new password typed twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChange {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    /// Match + minimum-length checks; runs before any request.
    pub fn validate(&self) -> DomainResult<()> {
        if self.new_password.is_empty() {
            return Err(DomainError::validation("le mot de passe est obligatoire"));
        }
        if self.new_password != self.confirm_password {
            return Err(DomainError::validation(
                "Les mots de passe ne correspondent pas",
            ));
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(
                "Le mot de passe doit contenir au moins 8 caractères",
            ));
        }
        Ok(())
    }
}

/// Wire payload for the two password endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPayload {
    pub new_password: String,
}

impl From<PasswordChange> for PasswordPayload {
    fn from(change: PasswordChange) -> Self {
        Self {
            new_password: change.new_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_update_rejects_blank_names_and_bad_email() {
        let mut update = ProfileUpdate {
            first_name: "Alice".to_string(),
            last_name: "Durand".to_string(),
            email: "alice@example.com".to_string(),
        };
        assert!(update.validate().is_ok());

        update.email = "not-an-email".to_string();
        assert!(update.validate().is_err());

        update.email = "alice@example.com".to_string();
        update.last_name = " ".to_string();
        assert!(update.validate().is_err());
    }

    #[test]
    fn password_mismatch_is_rejected() {
        let change = PasswordChange {
            new_password: "longenough".to_string(),
            confirm_password: "different".to_string(),
        };
        assert!(change.validate().is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        let change = PasswordChange {
            new_password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        assert!(change.validate().is_err());
    }

    #[test]
    fn valid_password_passes() {
        let change = PasswordChange {
            new_password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
        };
        assert!(change.validate().is_ok());
    }
}
