//! Session and profile operations, delegated to the auth provider

use crate::api::constants::buckets;
use crate::api::{Auth, FileUpload, Session, Signup, Storage, User, UserAttributes, UserMetadata};
use crate::error::{provider, DashboardError, Result};
use log::info;
use std::sync::Arc;

/// Profile changes for the signed-in user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub avatar: Option<FileUpload>,
}

impl ProfileUpdate {
    /// Password or full name, never both; the full name wins
    fn attributes(&self) -> Option<UserAttributes> {
        if let Some(full_name) = &self.full_name {
            return Some(UserAttributes {
                password: None,
                data: Some(UserMetadata {
                    full_name: Some(full_name.clone()),
                    avatar: None,
                }),
            });
        }
        self.password.as_ref().map(|password| UserAttributes {
            password: Some(password.clone()),
            data: None,
        })
    }
}

pub struct SessionGateway {
    auth: Arc<dyn Auth>,
    storage: Arc<dyn Storage>,
}

impl SessionGateway {
    pub fn new(auth: Arc<dyn Auth>, storage: Arc<dyn Storage>) -> Self {
        Self { auth, storage }
    }

    pub async fn signup(&self, full_name: &str, email: &str, password: &str) -> Result<Signup> {
        let metadata = UserMetadata {
            full_name: Some(full_name.to_string()),
            avatar: Some(String::new()),
        };
        let signup = self
            .auth
            .sign_up(email, password, metadata)
            .await
            .map_err(provider(DashboardError::Auth))?;

        info!("Signed up user {}", signup.user.id);
        Ok(signup)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        self.auth
            .sign_in_with_password(email, password)
            .await
            .map_err(provider(DashboardError::Auth))
    }

    pub async fn logout(&self) -> Result<()> {
        self.auth.sign_out().await.map_err(provider(DashboardError::Auth))
    }

    /// The signed-in user, or `None` without a session
    pub async fn get_current_user(&self) -> Result<Option<User>> {
        if self.auth.get_session().await.is_none() {
            return Ok(None);
        }

        let user = self.auth.get_user().await.map_err(provider(DashboardError::Auth))?;
        Ok(Some(user))
    }

    /// Change password or full name, then optionally replace the avatar
    pub async fn update_current_user(&self, update: &ProfileUpdate) -> Result<User> {
        let mut user = match update.attributes() {
            Some(attributes) => self
                .auth
                .update_user(&attributes)
                .await
                .map_err(provider(DashboardError::Auth))?,
            None => self.auth.get_user().await.map_err(provider(DashboardError::Auth))?,
        };

        let Some(avatar) = &update.avatar else {
            return Ok(user);
        };

        let name = format!("avatar-{}-{}", user.id, rand::random::<u64>());
        self.storage
            .upload(buckets::AVATARS, &name, avatar)
            .await
            .map_err(provider(DashboardError::Upload))?;

        let attributes = UserAttributes {
            password: None,
            data: Some(UserMetadata {
                full_name: None,
                avatar: Some(self.storage.public_url(buckets::AVATARS, &name)),
            }),
        };
        user = self
            .auth
            .update_user(&attributes)
            .await
            .map_err(provider(DashboardError::Auth))?;

        info!("Updated avatar of user {}", user.id);
        Ok(user)
    }
}
