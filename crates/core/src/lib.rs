//! `gestock-core` — shared foundation for the stock-console crates.
//!
//! Pure identifiers and the domain error model; no transport or view
//! concerns live here.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{CategorieId, EntrepotId, PieceId, ProduitId, UserId};
