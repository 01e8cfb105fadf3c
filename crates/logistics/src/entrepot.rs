//! Warehouse model and the small fleet statistics the list screen
//! shows.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use gestock_core::{DomainError, DomainResult, EntrepotId};

/// A warehouse. `taille` is the integer storage capacity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entrepot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntrepotId>,
    #[serde(rename = "nomEntrepot")]
    pub nom: String,
    pub adresse: String,
    pub ville: String,
    pub taille: i64,
}

impl Entrepot {
    /// Zero-value template for the create modal.
    pub fn template() -> Self {
        Self::default()
    }

    /// All fields are mandatory on this screen.
    pub fn validate(&self) -> DomainResult<()> {
        if self.nom.trim().is_empty()
            || self.adresse.trim().is_empty()
            || self.ville.trim().is_empty()
        {
            return Err(DomainError::validation(
                "Veuillez remplir tous les champs obligatoires",
            ));
        }
        if self.taille < 0 {
            return Err(DomainError::validation(
                "la capacité ne peut pas être négative",
            ));
        }
        Ok(())
    }
}

/// Number of distinct cities across the fleet (case/whitespace
/// insensitive).
pub fn distinct_cities(entrepots: &[Entrepot]) -> usize {
    entrepots
        .iter()
        .map(|e| e.ville.trim().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

/// Sum of capacities across the fleet.
pub fn total_capacity(entrepots: &[Entrepot]) -> i64 {
    entrepots.iter().map(|e| e.taille).sum()
}
