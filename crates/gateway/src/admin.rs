//! Admin user-management gateway (`/api/admin/users`).

use async_trait::async_trait;

use gestock_core::UserId;
use gestock_directory::{CreateUserPayload, PasswordPayload, RoleRepresentation, UserAccount};

use crate::api::{AdminApi, CreateUserResponse};
use crate::client::ApiClient;
use crate::error::GatewayError;

#[derive(Clone)]
pub struct AdminGateway {
    client: ApiClient,
}

impl AdminGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AdminApi for AdminGateway {
    async fn list_users(&self) -> Result<Vec<UserAccount>, GatewayError> {
        self.client.get_json("/api/admin/users").await
    }

    async fn create_user(
        &self,
        payload: &CreateUserPayload,
    ) -> Result<CreateUserResponse, GatewayError> {
        self.client.post_json("/api/admin/users", payload).await
    }

    async fn update_user(&self, id: UserId, user: &UserAccount) -> Result<(), GatewayError> {
        self.client
            .put_unit(&format!("/api/admin/users/{id}"), user)
            .await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), GatewayError> {
        self.client.delete(&format!("/api/admin/users/{id}")).await
    }

    async fn user_roles(&self, id: UserId) -> Result<Vec<RoleRepresentation>, GatewayError> {
        self.client
            .get_json(&format!("/api/admin/users/{id}/roles"))
            .await
    }

    async fn assign_role(&self, id: UserId, role: &str) -> Result<(), GatewayError> {
        self.client
            .post_unit(&format!("/api/admin/users/{id}/roles/{role}"))
            .await
    }

    async fn remove_role(&self, id: UserId, role: &str) -> Result<(), GatewayError> {
        self.client
            .delete(&format!("/api/admin/users/{id}/roles/{role}"))
            .await
    }

    async fn toggle_status(&self, id: UserId, enabled: bool) -> Result<(), GatewayError> {
        self.client
            .post_unit(&format!("/api/admin/users/{id}/toggle-status?enabled={enabled}"))
            .await
    }

    async fn reset_password(
        &self,
        id: UserId,
        payload: &PasswordPayload,
    ) -> Result<(), GatewayError> {
        self.client
            .put_unit(&format!("/api/admin/users/{id}/reset-password"), payload)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::StaticToken;

    fn gateway(server: &mockito::Server) -> AdminGateway {
        AdminGateway::new(ApiClient::new(
            server.url(),
            Arc::new(StaticToken(Some("tok".to_string()))),
        ))
    }

    const ALICE_ID: &str = "00000000-0000-0000-0000-000000000001";

    #[tokio::test]
    async fn list_users_decodes_provider_shape() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/admin/users")
            .with_status(200)
            .with_body(format!(
                r#"[{{"id":"{ALICE_ID}","username":"alice","email":"alice@example.com","enabled":true,"role":"MAGASINIER"}}]"#
            ))
            .create_async()
            .await;

        let users = gateway(&server).list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username.as_deref(), Some("alice"));
        assert!(users[0].enabled);
    }

    #[tokio::test]
    async fn toggle_status_encodes_the_query_flag() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock(
                "POST",
                format!("/api/admin/users/{ALICE_ID}/toggle-status?enabled=false").as_str(),
            )
            .with_status(200)
            .create_async()
            .await;

        let id: UserId = ALICE_ID.parse().unwrap();
        gateway(&server).toggle_status(id, false).await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn role_assignment_posts_to_the_role_path() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock(
                "POST",
                format!("/api/admin/users/{ALICE_ID}/roles/AUDITEUR").as_str(),
            )
            .with_status(200)
            .create_async()
            .await;

        let id: UserId = ALICE_ID.parse().unwrap();
        gateway(&server).assign_role(id, "AUDITEUR").await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn create_user_returns_message_and_record() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/api/admin/users")
            .with_status(201)
            .with_body(format!(
                r#"{{"message":"Utilisateur créé","user":{{"id":"{ALICE_ID}","username":"alice","enabled":true}}}}"#
            ))
            .create_async()
            .await;

        let payload = CreateUserPayload {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Durand".to_string(),
            enabled: true,
            role: Some("MAGASINIER".to_string()),
            credentials: vec![gestock_directory::Credential::password("s3cret-pass")],
        };
        let resp = gateway(&server).create_user(&payload).await.unwrap();
        assert_eq!(resp.message.as_deref(), Some("Utilisateur créé"));
        assert!(resp.user.is_some());
    }
}
