//! Self-service profile gateway (`/api/users`).

use async_trait::async_trait;

use gestock_directory::{PasswordPayload, ProfileUpdate};

use crate::api::ProfileApi;
use crate::client::ApiClient;
use crate::error::GatewayError;

#[derive(Clone)]
pub struct ProfileGateway {
    client: ApiClient,
}

impl ProfileGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileApi for ProfileGateway {
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), GatewayError> {
        self.client.put_unit("/api/users/profile", update).await
    }

    async fn update_password(&self, payload: &PasswordPayload) -> Result<(), GatewayError> {
        self.client.put_unit("/api/users/password", payload).await
    }
}
