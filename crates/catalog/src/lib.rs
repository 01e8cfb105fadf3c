//! `gestock-catalog` — spare parts, finished products and categories.
//!
//! Pure models and client-side rules: the wire shapes (French field
//! names, as the backend serializes them), draft validation that runs
//! before any request, and part↔product association bookkeeping.

pub mod categorie;
pub mod piece;
pub mod produit;

pub use categorie::Categorie;
pub use piece::Piece;
pub use produit::Produit;
