//! Gateway traits: one per backend surface.
//!
//! The console screens talk to these, never to reqwest directly, so
//! controller behavior can be exercised with in-memory fakes.

use async_trait::async_trait;
use serde::Deserialize;

use gestock_catalog::{Categorie, Piece, Produit};
use gestock_core::{EntrepotId, PieceId, ProduitId, UserId};
use gestock_directory::{
    CreateUserPayload, PasswordPayload, ProfileUpdate, RoleRepresentation, UserAccount,
};
use gestock_logistics::Entrepot;

use crate::error::GatewayError;

/// Response of `POST /api/admin/users`: a human message plus the
/// created record when provisioning completed synchronously.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateUserResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserAccount>,
}

/// Admin user-management surface.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserAccount>, GatewayError>;
    async fn create_user(
        &self,
        payload: &CreateUserPayload,
    ) -> Result<CreateUserResponse, GatewayError>;
    async fn update_user(&self, id: UserId, user: &UserAccount) -> Result<(), GatewayError>;
    async fn delete_user(&self, id: UserId) -> Result<(), GatewayError>;
    async fn user_roles(&self, id: UserId) -> Result<Vec<RoleRepresentation>, GatewayError>;
    async fn assign_role(&self, id: UserId, role: &str) -> Result<(), GatewayError>;
    async fn remove_role(&self, id: UserId, role: &str) -> Result<(), GatewayError>;
    async fn toggle_status(&self, id: UserId, enabled: bool) -> Result<(), GatewayError>;
    async fn reset_password(
        &self,
        id: UserId,
        payload: &PasswordPayload,
    ) -> Result<(), GatewayError>;
}

/// Catalog surface: parts, products, categories, image uploads.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn pieces(&self) -> Result<Vec<Piece>, GatewayError>;
    async fn create_piece(&self, piece: &Piece) -> Result<Piece, GatewayError>;
    async fn update_piece(&self, id: PieceId, piece: &Piece) -> Result<Piece, GatewayError>;
    /// Parts delete by barcode on the wire.
    async fn delete_piece(&self, code_barre: &str) -> Result<(), GatewayError>;
    async fn upload_piece_image(
        &self,
        id: PieceId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Piece, GatewayError>;

    async fn produits(&self) -> Result<Vec<Produit>, GatewayError>;
    async fn create_produit(&self, produit: &Produit) -> Result<Produit, GatewayError>;
    async fn update_produit(&self, id: ProduitId, produit: &Produit)
    -> Result<Produit, GatewayError>;
    async fn delete_produit(&self, id: ProduitId) -> Result<(), GatewayError>;
    async fn upload_produit_image(
        &self,
        id: ProduitId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Produit, GatewayError>;

    async fn categories(&self) -> Result<Vec<Categorie>, GatewayError>;
    async fn create_categorie(&self, categorie: &Categorie) -> Result<Categorie, GatewayError>;
}

/// Warehouse surface.
#[async_trait]
pub trait LogistiqueApi: Send + Sync {
    async fn entrepots(&self) -> Result<Vec<Entrepot>, GatewayError>;
    async fn create_entrepot(&self, entrepot: &Entrepot) -> Result<Entrepot, GatewayError>;
    async fn update_entrepot(
        &self,
        id: EntrepotId,
        entrepot: &Entrepot,
    ) -> Result<Entrepot, GatewayError>;
    async fn delete_entrepot(&self, id: EntrepotId) -> Result<(), GatewayError>;
}

/// Self-service profile surface (settings screen).
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), GatewayError>;
    async fn update_password(&self, payload: &PasswordPayload) -> Result<(), GatewayError>;
}
