//! Finished products (produits finis).

use serde::{Deserialize, Serialize};

use gestock_core::{DomainError, DomainResult, ProduitId};

use crate::piece::Piece;

/// A finished product, optionally carrying its associated parts when
/// the backend expands the relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Produit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProduitId>,
    pub code: String,
    pub designation: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pieces: Vec<Piece>,
    #[serde(rename = "estArchivee", default)]
    pub est_archivee: bool,
}

impl Produit {
    /// Zero-value template for the create modal.
    pub fn template() -> Self {
        Self::default()
    }

    /// Client-side checks before create/update.
    pub fn validate(&self) -> DomainResult<()> {
        if self.code.trim().is_empty() {
            return Err(DomainError::validation("le code du produit est obligatoire"));
        }
        if self.designation.trim().is_empty() {
            return Err(DomainError::validation("la désignation est obligatoire"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_requires_code_and_designation() {
        let mut produit = Produit::template();
        assert!(produit.validate().is_err());

        produit.code = "PF-100".to_string();
        assert!(produit.validate().is_err());

        produit.designation = "Vélo cargo".to_string();
        assert!(produit.validate().is_ok());
    }

    #[test]
    fn wire_shape_uses_french_names() {
        let json = r#"{
            "id": 7,
            "code": "PF-100",
            "designation": "Vélo cargo",
            "imageUrl": "/uploads/pf-100.png",
            "estArchivee": false
        }"#;
        let produit: Produit = serde_json::from_str(json).unwrap();
        assert_eq!(produit.id, Some(7.into()));
        assert_eq!(produit.image_url.as_deref(), Some("/uploads/pf-100.png"));
        assert!(produit.pieces.is_empty());
    }
}
