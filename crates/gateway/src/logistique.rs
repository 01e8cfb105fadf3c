//! Warehouse gateway (`/api/entrepots`).

use async_trait::async_trait;

use gestock_core::EntrepotId;
use gestock_logistics::Entrepot;

use crate::api::LogistiqueApi;
use crate::client::ApiClient;
use crate::error::GatewayError;

#[derive(Clone)]
pub struct LogistiqueGateway {
    client: ApiClient,
}

impl LogistiqueGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogistiqueApi for LogistiqueGateway {
    async fn entrepots(&self) -> Result<Vec<Entrepot>, GatewayError> {
        self.client.get_json("/api/entrepots").await
    }

    async fn create_entrepot(&self, entrepot: &Entrepot) -> Result<Entrepot, GatewayError> {
        self.client.post_json("/api/entrepots", entrepot).await
    }

    async fn update_entrepot(
        &self,
        id: EntrepotId,
        entrepot: &Entrepot,
    ) -> Result<Entrepot, GatewayError> {
        self.client
            .put_json(&format!("/api/entrepots/{id}"), entrepot)
            .await
    }

    async fn delete_entrepot(&self, id: EntrepotId) -> Result<(), GatewayError> {
        self.client.delete(&format!("/api/entrepots/{id}")).await
    }
}
