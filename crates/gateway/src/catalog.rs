//! Catalog gateway (`/api/pieces`, `/api/produits`, `/api/categories`).

use async_trait::async_trait;

use gestock_catalog::{Categorie, Piece, Produit};
use gestock_core::{PieceId, ProduitId};

use crate::api::CatalogApi;
use crate::client::ApiClient;
use crate::error::GatewayError;

#[derive(Clone)]
pub struct CatalogGateway {
    client: ApiClient,
}

impl CatalogGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogApi for CatalogGateway {
    async fn pieces(&self) -> Result<Vec<Piece>, GatewayError> {
        self.client.get_json("/api/pieces").await
    }

    async fn create_piece(&self, piece: &Piece) -> Result<Piece, GatewayError> {
        self.client.post_json("/api/pieces", piece).await
    }

    async fn update_piece(&self, id: PieceId, piece: &Piece) -> Result<Piece, GatewayError> {
        self.client.put_json(&format!("/api/pieces/{id}"), piece).await
    }

    async fn delete_piece(&self, code_barre: &str) -> Result<(), GatewayError> {
        self.client.delete(&format!("/api/pieces/{code_barre}")).await
    }

    async fn upload_piece_image(
        &self,
        id: PieceId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Piece, GatewayError> {
        self.client
            .post_file(&format!("/api/pieces/upload-image/{id}"), file_name, bytes)
            .await
    }

    async fn produits(&self) -> Result<Vec<Produit>, GatewayError> {
        self.client.get_json("/api/produits").await
    }

    async fn create_produit(&self, produit: &Produit) -> Result<Produit, GatewayError> {
        self.client.post_json("/api/produits", produit).await
    }

    async fn update_produit(
        &self,
        id: ProduitId,
        produit: &Produit,
    ) -> Result<Produit, GatewayError> {
        self.client
            .put_json(&format!("/api/produits/{id}"), produit)
            .await
    }

    async fn delete_produit(&self, id: ProduitId) -> Result<(), GatewayError> {
        self.client.delete(&format!("/api/produits/{id}")).await
    }

    async fn upload_produit_image(
        &self,
        id: ProduitId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Produit, GatewayError> {
        self.client
            .post_file(&format!("/api/produits/upload-image/{id}"), file_name, bytes)
            .await
    }

    async fn categories(&self) -> Result<Vec<Categorie>, GatewayError> {
        self.client.get_json("/api/categories").await
    }

    async fn create_categorie(&self, categorie: &Categorie) -> Result<Categorie, GatewayError> {
        self.client.post_json("/api/categories", categorie).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::StaticToken;

    fn gateway(server: &mockito::Server) -> CatalogGateway {
        CatalogGateway::new(ApiClient::new(
            server.url(),
            Arc::new(StaticToken(Some("tok".to_string()))),
        ))
    }

    #[tokio::test]
    async fn pieces_decode_the_french_wire_shape() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/pieces")
            .with_status(200)
            .with_body(
                r#"[{"id":1,"codeBarre":"123","designation":"Bolt","reference":"REF-B",
                     "prixVente":2.5,"seuilMinimum":10,"tauxTVA":20.0,"archivee":false}]"#,
            )
            .create_async()
            .await;

        let pieces = gateway(&server).pieces().await.unwrap();
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].code_barre, "123");
    }

    #[tokio::test]
    async fn delete_piece_keys_on_barcode() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/api/pieces/123")
            .with_status(204)
            .create_async()
            .await;

        gateway(&server).delete_piece("123").await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn image_upload_is_multipart_and_returns_the_updated_record() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/produits/upload-image/7")
            .match_header(
                "content-type",
                mockito::Matcher::Regex("^multipart/form-data".to_string()),
            )
            .with_status(200)
            .with_body(r#"{"id":7,"code":"PF-7","designation":"Produit","imageUrl":"/uploads/pf7.png"}"#)
            .create_async()
            .await;

        let produit = gateway(&server)
            .upload_produit_image(7.into(), "pf7.png", vec![0xFF, 0xD8])
            .await
            .unwrap();
        assert_eq!(produit.image_url.as_deref(), Some("/uploads/pf7.png"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn create_categorie_round_trips() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/api/categories")
            .with_status(201)
            .with_body(r#"{"id":2,"nom":"Visserie","code":"CAT_VISSERIE"}"#)
            .create_async()
            .await;

        let created = gateway(&server)
            .create_categorie(&Categorie::named("Visserie"))
            .await
            .unwrap();
        assert_eq!(created.id, Some(2.into()));
    }
}
