//! Case-insensitive substring search over the cached entity lists.
//!
//! Every screen filters locally: the backend returns full lists and
//! the search box narrows them without another round trip. A blank
//! term matches everything.

use gestock_auth::display_role;
use gestock_catalog::{Categorie, Piece, Produit};
use gestock_directory::UserAccount;
use gestock_logistics::Entrepot;

fn contains_ci(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(&term.to_lowercase())
}

fn opt_contains_ci(haystack: Option<&str>, term: &str) -> bool {
    haystack.is_some_and(|h| contains_ci(h, term))
}

/// Searchable columns of the parts screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PieceField {
    #[default]
    All,
    Reference,
    Designation,
    CodeBarre,
    Categorie,
    Produit,
}

pub fn piece_matches(piece: &Piece, field: PieceField, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let in_categorie = || opt_contains_ci(piece.categorie.as_ref().map(|c| c.nom.as_str()), term);
    let in_produits = || {
        piece
            .produits_associes
            .iter()
            .any(|p| contains_ci(&p.designation, term) || contains_ci(&p.code, term))
    };
    match field {
        PieceField::Reference => contains_ci(&piece.reference, term),
        PieceField::Designation => contains_ci(&piece.designation, term),
        PieceField::CodeBarre => contains_ci(&piece.code_barre, term),
        PieceField::Categorie => in_categorie(),
        PieceField::Produit => in_produits(),
        PieceField::All => {
            contains_ci(&piece.reference, term)
                || contains_ci(&piece.designation, term)
                || contains_ci(&piece.code_barre, term)
                || in_categorie()
                || in_produits()
        }
    }
}

/// Searchable columns of the products screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProduitField {
    #[default]
    All,
    Code,
    Designation,
    Piece,
}

pub fn produit_matches(produit: &Produit, field: ProduitField, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let in_pieces = || {
        produit.pieces.iter().any(|p| {
            contains_ci(&p.designation, term)
                || contains_ci(&p.reference, term)
                || contains_ci(&p.code_barre, term)
        })
    };
    match field {
        ProduitField::Code => contains_ci(&produit.code, term),
        ProduitField::Designation => contains_ci(&produit.designation, term),
        ProduitField::Piece => in_pieces(),
        ProduitField::All => {
            contains_ci(&produit.code, term)
                || contains_ci(&produit.designation, term)
                || in_pieces()
        }
    }
}

/// Searchable columns of the users screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserField {
    #[default]
    All,
    Username,
    Email,
    Name,
    Role,
    Status,
}

pub fn user_matches(user: &UserAccount, field: UserField, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let in_name = || {
        opt_contains_ci(user.first_name.as_deref(), term)
            || opt_contains_ci(user.last_name.as_deref(), term)
    };
    // role matches against the display label, so "magasinier" finds
    // users whatever convention the stored token uses
    let in_role = || contains_ci(&display_role(user.role.as_deref()), term);
    let in_status = || contains_ci(user.status_label(), term);
    match field {
        UserField::Username => opt_contains_ci(user.username.as_deref(), term),
        UserField::Email => opt_contains_ci(user.email.as_deref(), term),
        UserField::Name => in_name(),
        UserField::Role => in_role(),
        UserField::Status => in_status(),
        UserField::All => {
            opt_contains_ci(user.username.as_deref(), term)
                || opt_contains_ci(user.email.as_deref(), term)
                || in_name()
                || in_role()
                || in_status()
        }
    }
}

/// Warehouses search a single term over name, address and city.
pub fn entrepot_matches(entrepot: &Entrepot, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    contains_ci(&entrepot.nom, term)
        || contains_ci(&entrepot.adresse, term)
        || contains_ci(&entrepot.ville, term)
}

/// Category picker filter (quick-add dropdown).
pub fn categorie_matches(categorie: &Categorie, term: &str) -> bool {
    term.trim().is_empty() || contains_ci(&categorie.nom, term)
}

/// Product picker filter (association modal).
pub fn produit_picker_matches(produit: &Produit, term: &str) -> bool {
    term.trim().is_empty()
        || contains_ci(&produit.designation, term)
        || contains_ci(&produit.code, term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bolt() -> Piece {
        Piece {
            id: Some(1.into()),
            code_barre: "3760123".to_string(),
            designation: "Boulon M8".to_string(),
            reference: "REF-B8".to_string(),
            categorie: Some(Categorie::named("Visserie")),
            produits_associes: vec![Produit {
                id: Some(7.into()),
                code: "PF-100".to_string(),
                designation: "Vélo cargo".to_string(),
                ..Produit::default()
            }],
            ..Piece::default()
        }
    }

    #[test]
    fn blank_term_matches_everything() {
        assert!(piece_matches(&bolt(), PieceField::All, "  "));
        assert!(entrepot_matches(&Entrepot::template(), ""));
    }

    #[test]
    fn piece_search_is_case_insensitive_per_field() {
        let piece = bolt();
        assert!(piece_matches(&piece, PieceField::Designation, "boulon"));
        assert!(piece_matches(&piece, PieceField::CodeBarre, "3760"));
        assert!(!piece_matches(&piece, PieceField::Reference, "boulon"));
    }

    #[test]
    fn piece_search_reaches_associated_products() {
        let piece = bolt();
        assert!(piece_matches(&piece, PieceField::Produit, "vélo"));
        assert!(piece_matches(&piece, PieceField::All, "pf-100"));
    }

    #[test]
    fn user_role_search_uses_the_display_label() {
        let user = UserAccount {
            username: Some("bob".to_string()),
            role: Some("ROLE_MAGASINIER".to_string()),
            enabled: true,
            ..UserAccount::default()
        };
        assert!(user_matches(&user, UserField::Role, "magasinier"));
        assert!(user_matches(&user, UserField::Status, "actif"));
        assert!(!user_matches(&user, UserField::Status, "bloqué"));
    }

    #[test]
    fn entrepot_search_covers_city_and_address() {
        let entrepot = Entrepot {
            id: Some(1.into()),
            nom: "Nord".to_string(),
            adresse: "1 rue des Docks".to_string(),
            ville: "Lille".to_string(),
            taille: 500,
        };
        assert!(entrepot_matches(&entrepot, "lille"));
        assert!(entrepot_matches(&entrepot, "docks"));
        assert!(!entrepot_matches(&entrepot, "marseille"));
    }
}
