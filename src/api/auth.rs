//! Auth provider endpoints
//!
//! Thin pass-through: the provider owns tokens, this client only remembers
//! the last session it was handed.

use super::backend::Auth;
use super::client::BackendClient;
use super::constants;
use super::models::{Session, Signup, User, UserAttributes, UserMetadata};
use async_trait::async_trait;
use serde_json::json;

#[async_trait]
impl Auth for BackendClient {
    async fn sign_up(&self, email: &str, password: &str, metadata: UserMetadata) -> anyhow::Result<Signup> {
        let url = constants::auth_endpoint(self.base_url(), "signup");
        let context = self.logger().start_operation("sign_up", "auth");

        let request = self.http().post(&url).json(&json!({
            "email": email,
            "password": password,
            "data": metadata,
        }));
        let response = self
            .authorize(request, &context)
            .await
            .send()
            .await
            .map_err(|e| self.transport_error(&context, e))?;
        let (body, _) = self.read_response(&context, response).await?;

        // With email confirmation on, the provider answers with a bare user
        if body.get("access_token").is_some() {
            let session: Session = serde_json::from_value(body)?;
            self.set_session(Some(session.clone())).await;
            Ok(Signup {
                user: session.user.clone(),
                session: Some(session),
            })
        } else {
            let user: User = serde_json::from_value(body.get("user").cloned().unwrap_or(body))?;
            Ok(Signup { user, session: None })
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> anyhow::Result<Session> {
        let url = constants::auth_endpoint(self.base_url(), "token");
        let context = self.logger().start_operation("sign_in", "auth");

        let request = self
            .http()
            .post(&url)
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));
        let response = self
            .authorize(request, &context)
            .await
            .send()
            .await
            .map_err(|e| self.transport_error(&context, e))?;
        let (body, _) = self.read_response(&context, response).await?;

        let session: Session = serde_json::from_value(body)?;
        self.set_session(Some(session.clone())).await;
        log::info!("Signed in as {}", session.user.email.as_deref().unwrap_or(&session.user.id));
        Ok(session)
    }

    async fn sign_out(&self) -> anyhow::Result<()> {
        if self.session().await.is_none() {
            return Ok(());
        }

        let url = constants::auth_endpoint(self.base_url(), "logout");
        let context = self.logger().start_operation("sign_out", "auth");

        let request = self.http().post(&url);
        let response = self
            .authorize(request, &context)
            .await
            .send()
            .await
            .map_err(|e| self.transport_error(&context, e))?;
        self.read_response(&context, response).await?;

        self.set_session(None).await;
        Ok(())
    }

    async fn get_session(&self) -> Option<Session> {
        self.session().await
    }

    async fn get_user(&self) -> anyhow::Result<User> {
        if self.session().await.is_none() {
            anyhow::bail!("Auth session missing");
        }

        let url = constants::auth_endpoint(self.base_url(), "user");
        let context = self.logger().start_operation("get_user", "auth");

        let request = self.http().get(&url);
        let response = self
            .authorize(request, &context)
            .await
            .send()
            .await
            .map_err(|e| self.transport_error(&context, e))?;
        let (body, _) = self.read_response(&context, response).await?;

        Ok(serde_json::from_value(body)?)
    }

    async fn update_user(&self, attributes: &UserAttributes) -> anyhow::Result<User> {
        let Some(mut session) = self.session().await else {
            anyhow::bail!("Auth session missing");
        };

        let url = constants::auth_endpoint(self.base_url(), "user");
        let context = self.logger().start_operation("update_user", "auth");

        let request = self.http().put(&url).json(attributes);
        let response = self
            .authorize(request, &context)
            .await
            .send()
            .await
            .map_err(|e| self.transport_error(&context, e))?;
        let (body, _) = self.read_response(&context, response).await?;

        let user: User = serde_json::from_value(body)?;
        session.user = user.clone();
        self.set_session(Some(session)).await;
        Ok(user)
    }
}
