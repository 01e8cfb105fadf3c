//! Role tokens: normalization, comparison, and the business-role set.
//!
//! The identity provider emits role names in several conventions
//! (`ROLE_MAGASINIER`, `magasinier`, `Responsable Logistique`). All of
//! them funnel through [`normalize`] before any comparison; raw role
//! strings are never compared anywhere else in the workspace.

use serde::{Deserialize, Serialize};

/// Canonicalize a raw role string into a comparable token.
///
/// Uppercases, collapses internal whitespace runs to underscores, then
/// strips any leading `ROLE_` namespace prefix. Total over any input
/// and idempotent: a normalized token passes through unchanged.
pub fn normalize(role: &str) -> String {
    let upper = role.to_uppercase();

    let mut collapsed = String::with_capacity(upper.len());
    let mut in_whitespace = false;
    for c in upper.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                collapsed.push('_');
            }
            in_whitespace = true;
        } else {
            collapsed.push(c);
            in_whitespace = false;
        }
    }

    let mut token = collapsed.as_str();
    while let Some(rest) = token.strip_prefix("ROLE_") {
        token = rest;
    }
    token.to_string()
}

/// True iff any of `user_roles`, once normalized, equals the
/// normalized `target`.
pub fn has_role<I, S>(user_roles: I, target: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let wanted = normalize(target);
    user_roles
        .into_iter()
        .any(|r| normalize(r.as_ref()) == wanted)
}

/// Default identity-provider roles that every account carries; they
/// are hidden from display and never count as a business role.
const TECHNICAL_ROLES: &[&str] = &[
    "manage-account",
    "view-profile",
    "manage-account-links",
    "offline_access",
    "uma_authorization",
    "default-roles",
];

/// True for technical/default identity-provider roles.
pub fn is_technical(role: &str) -> bool {
    let lower = role.to_lowercase();
    TECHNICAL_ROLES.iter().any(|t| lower.contains(t))
}

/// The fixed business-role set. A user holds at most one of these at
/// a time; assigning a second replaces the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessRole {
    Administrateur,
    ResponsableLogistique,
    Auditeur,
    Magasinier,
}

impl BusinessRole {
    /// All business roles, in display order.
    pub const ALL: [BusinessRole; 4] = [
        BusinessRole::Administrateur,
        BusinessRole::ResponsableLogistique,
        BusinessRole::Auditeur,
        BusinessRole::Magasinier,
    ];

    /// Roles an administrator may assign from the user screen (the
    /// administrator role itself is granted out of band).
    pub const ASSIGNABLE: [BusinessRole; 3] = [
        BusinessRole::ResponsableLogistique,
        BusinessRole::Auditeur,
        BusinessRole::Magasinier,
    ];

    /// Canonical wire token for this role.
    pub fn as_token(&self) -> &'static str {
        match self {
            BusinessRole::Administrateur => "ADMINISTRATEUR",
            BusinessRole::ResponsableLogistique => "RESPONSABLE_LOGISTIQUE",
            BusinessRole::Auditeur => "AUDITEUR",
            BusinessRole::Magasinier => "MAGASINIER",
        }
    }

    /// French display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BusinessRole::Administrateur => "Administrateur",
            BusinessRole::ResponsableLogistique => "Responsable Logistique",
            BusinessRole::Auditeur => "Auditeur",
            BusinessRole::Magasinier => "Magasinier",
        }
    }

    /// Parse a raw role string. Accepts any normalization convention,
    /// including the misspelled `RESPONSABL_LOGISTIQUE` that the
    /// legacy front end emitted.
    pub fn parse(role: &str) -> Option<Self> {
        match normalize(role).as_str() {
            "ADMINISTRATEUR" => Some(BusinessRole::Administrateur),
            "RESPONSABLE_LOGISTIQUE" | "RESPONSABL_LOGISTIQUE" => {
                Some(BusinessRole::ResponsableLogistique)
            }
            "AUDITEUR" => Some(BusinessRole::Auditeur),
            "MAGASINIER" => Some(BusinessRole::Magasinier),
            _ => None,
        }
    }

    /// First business role found in a raw role list, if any.
    pub fn first_in<I, S>(roles: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        roles.into_iter().find_map(|r| Self::parse(r.as_ref()))
    }
}

impl core::fmt::Display for BusinessRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Display label for a stored role value.
///
/// `None` and the `AUCUN` sentinel render as `Aucun`; technical roles
/// render as `Utilisateur`; business roles get their French name;
/// anything else passes through with the namespace prefix removed.
pub fn display_role(role: Option<&str>) -> String {
    let Some(role) = role else {
        return "Aucun".to_string();
    };
    if role.is_empty() || normalize(role) == "AUCUN" {
        return "Aucun".to_string();
    }
    if is_technical(role) {
        return "Utilisateur".to_string();
    }
    match BusinessRole::parse(role) {
        Some(business) => business.display_name().to_string(),
        None => normalize(role),
    }
}
