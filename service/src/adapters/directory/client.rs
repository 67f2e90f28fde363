//! User directory API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::domain::entities::UserId;
use crate::domain::ports::{DirectoryProfile, DirectoryUser, UserDirectory};
use crate::error::DirectoryError;

/// Implementation of the user directory client
///
/// Endpoints, all under `/api/v1`:
/// - `GET /users?name=` - exact-name search
/// - `GET /users/{id}/profile`
/// - `GET /users/{id}/friends`
/// - `GET /user` - the authenticated user
/// - `POST /users/{id}/friends` - add a friend for that user
pub struct HttpUserDirectory {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpUserDirectory {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.get(self.api_url(path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.post(self.api_url(path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, DirectoryError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| DirectoryError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(DirectoryError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(DirectoryError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(DirectoryError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(), DirectoryError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(DirectoryError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(DirectoryError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(DirectoryError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Request types for the directory API
#[derive(Serialize)]
struct AddFriendRequest<'a> {
    friend_id: &'a str,
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get_users_by_name(&self, name: &str) -> Result<Vec<DirectoryUser>, DirectoryError> {
        let response = self.get("/users").query(&[("name", name)]).send().await?;
        self.handle_response(response).await
    }

    async fn get_profile(&self, id: &UserId) -> Result<DirectoryProfile, DirectoryError> {
        let response = self
            .get(&format!("/users/{}/profile", encode(id.as_str())))
            .send()
            .await?;

        if response.status().as_u16() == 404 {
            return Err(DirectoryError::UserNotFound(id.to_string()));
        }
        self.handle_response(response).await
    }

    async fn get_user_friends(&self, id: &UserId) -> Result<Vec<DirectoryUser>, DirectoryError> {
        let response = self
            .get(&format!("/users/{}/friends", encode(id.as_str())))
            .send()
            .await?;

        if response.status().as_u16() == 404 {
            return Err(DirectoryError::UserNotFound(id.to_string()));
        }
        self.handle_response(response).await
    }

    async fn get_current_user(&self) -> Result<DirectoryUser, DirectoryError> {
        let response = self.get("/user").send().await?;
        self.handle_response(response).await
    }

    async fn add_friend_for_current(
        &self,
        user_id: &UserId,
        friend_id: &UserId,
    ) -> Result<(), DirectoryError> {
        let response = self
            .post(&format!("/users/{}/friends", encode(user_id.as_str())))
            .json(&AddFriendRequest {
                friend_id: friend_id.as_str(),
            })
            .send()
            .await?;

        if response.status().as_u16() == 404 {
            return Err(DirectoryError::UserNotFound(user_id.to_string()));
        }
        self.handle_empty_response(response).await
    }
}
