//! Part categories.

use serde::{Deserialize, Serialize};

use gestock_core::{CategorieId, DomainError, DomainResult};

/// A part category. The code is derived from the name when the user
/// leaves it blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categorie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategorieId>,
    pub nom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Categorie {
    pub fn named(nom: impl Into<String>) -> Self {
        Self {
            nom: nom.into(),
            ..Self::default()
        }
    }

    /// Fill in the derived code if the user did not provide one.
    pub fn ensure_code(&mut self) {
        let blank = self.code.as_deref().is_none_or(|c| c.trim().is_empty());
        if blank && !self.nom.trim().is_empty() {
            self.code = Some(derive_code(&self.nom));
        }
    }

    /// Quick-add validation: a category needs a name and a code.
    pub fn validate(&self) -> DomainResult<()> {
        if self.nom.trim().is_empty() {
            return Err(DomainError::validation("le nom de la catégorie est obligatoire"));
        }
        if self.code.as_deref().is_none_or(|c| c.trim().is_empty()) {
            return Err(DomainError::validation("le code de la catégorie est obligatoire"));
        }
        Ok(())
    }
}

/// Derive a category code from its name: `CAT_` + uppercase name with
/// whitespace runs replaced by underscores.
pub fn derive_code(nom: &str) -> String {
    let mut code = String::from("CAT_");
    let mut in_whitespace = false;
    for c in nom.to_uppercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                code.push('_');
            }
            in_whitespace = true;
        } else {
            code.push(c);
            in_whitespace = false;
        }
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_derived_from_name() {
        assert_eq!(derive_code("visserie fine"), "CAT_VISSERIE_FINE");
        assert_eq!(derive_code("Freinage"), "CAT_FREINAGE");
    }

    #[test]
    fn ensure_code_keeps_explicit_codes() {
        let mut cat = Categorie {
            nom: "Visserie".to_string(),
            code: Some("VIS".to_string()),
            ..Categorie::default()
        };
        cat.ensure_code();
        assert_eq!(cat.code.as_deref(), Some("VIS"));
    }

    #[test]
    fn ensure_code_fills_blank_codes() {
        let mut cat = Categorie::named("pièces moteur");
        cat.ensure_code();
        assert_eq!(cat.code.as_deref(), Some("CAT_PIÈCES_MOTEUR"));
    }

    #[test]
    fn nameless_category_is_rejected() {
        let cat = Categorie::named("  ");
        assert!(cat.validate().is_err());
    }
}
