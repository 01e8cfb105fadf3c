//! Spare parts (pièces détachées).

use serde::{Deserialize, Serialize};

use gestock_core::{DomainError, DomainResult, PieceId, ProduitId};

use crate::categorie::Categorie;
use crate::produit::Produit;

/// A spare part. The barcode is unique across the visible set and is
/// the delete key on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PieceId>,
    #[serde(rename = "codeBarre")]
    pub code_barre: String,
    pub designation: String,
    pub reference: String,
    #[serde(rename = "prixVente")]
    pub prix_vente: f64,
    #[serde(rename = "seuilMinimum")]
    pub seuil_minimum: i64,
    #[serde(rename = "tauxTVA")]
    pub taux_tva: f64,
    #[serde(default)]
    pub archivee: bool,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categorie: Option<Categorie>,
    #[serde(rename = "produitsAssocies", default, skip_serializing_if = "Vec::is_empty")]
    pub produits_associes: Vec<Produit>,
}

impl Piece {
    /// Zero-value template for the create modal.
    pub fn template() -> Self {
        Self {
            categorie: Some(Categorie::default()),
            ..Self::default()
        }
    }

    /// Field checks plus the duplicate-barcode invariant against the
    /// currently cached set (excluding this draft's own id when
    /// editing). Failing here means no request is issued.
    pub fn validate(&self, existing: &[Piece]) -> DomainResult<()> {
        if self.prix_vente <= 0.0 {
            return Err(DomainError::validation(
                "Le prix de vente doit être supérieur à 0",
            ));
        }
        if self.seuil_minimum < 0 {
            return Err(DomainError::validation(
                "Le seuil minimum ne peut pas être négatif",
            ));
        }
        if self.code_barre.trim().is_empty() {
            return Err(DomainError::validation("Le code barre est obligatoire"));
        }
        let duplicate = existing
            .iter()
            .any(|p| p.code_barre == self.code_barre && p.id != self.id);
        if duplicate {
            return Err(DomainError::invariant(
                "Ce code barre existe déjà pour une autre pièce",
            ));
        }
        Ok(())
    }

    /// Normalize the draft right before it is sent: derive the
    /// category code if needed, drop an unnamed category entirely.
    pub fn prepare_for_save(&mut self) {
        if let Some(cat) = self.categorie.as_mut() {
            if cat.nom.trim().is_empty() {
                self.categorie = None;
            } else {
                cat.ensure_code();
            }
        }
    }

    /// Whether a product is already associated to this draft.
    pub fn has_produit(&self, id: ProduitId) -> bool {
        self.produits_associes.iter().any(|p| p.id == Some(id))
    }

    /// Associate a product; duplicates (by id) are ignored.
    pub fn add_produit(&mut self, produit: Produit) {
        match produit.id {
            Some(id) if self.has_produit(id) => {}
            _ => self.produits_associes.push(produit),
        }
    }

    /// Remove an associated product by id.
    pub fn remove_produit(&mut self, id: ProduitId) {
        self.produits_associes.retain(|p| p.id != Some(id));
    }

    /// Flip membership: associate if absent, dissociate if present.
    /// Nothing reaches the backend until the parent save.
    pub fn toggle_produit(&mut self, produit: &Produit) {
        match produit.id {
            Some(id) if self.has_produit(id) => self.remove_produit(id),
            _ => self.produits_associes.push(produit.clone()),
        }
    }
}
