//! The remote user collection. [`UserApi`] is the seam the client talks to,
//! [`HttpUserApi`] is the JSON-over-HTTP implementation:
//!
//! | Verb   | Path                  | Body      |
//! |--------|-----------------------|-----------|
//! | GET    | `/api/viewUser/`      |           |
//! | POST   | `/api/viewUser/`      | JSON User |
//! | PUT    | `/api/viewUser/{id}/` | JSON User |
//! | DELETE | `/api/viewUser/{id}/` |           |

use super::{error::DirectoryError, types::User};
use crate::APP_USER_AGENT;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Path of the collection relative to the server base URL.
pub const COLLECTION_PATH: &str = "/api/viewUser/";

/// Maximum number of error body characters kept in [`DirectoryError::Status`].
const MAX_ERROR_CHARS: usize = 200;

#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch the whole collection, in server order.
    async fn list(&self) -> Result<Vec<User>, DirectoryError>;

    async fn create(&self, user: &User) -> Result<(), DirectoryError>;

    /// Replace the record keyed by `id` with `user`.
    async fn update(&self, id: i64, user: &User) -> Result<(), DirectoryError>;

    async fn delete(&self, id: i64) -> Result<(), DirectoryError>;
}

#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    collection: Url,
}

impl HttpUserApi {
    /// Build a client for the collection served under `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, DirectoryError> {
        let collection = collection_url(base_url)?;

        let mut builder = Client::builder().user_agent(APP_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        debug!("collection URL: {}", collection);

        Ok(Self {
            client: builder.build()?,
            collection,
        })
    }

    #[must_use]
    pub fn collection(&self) -> &Url {
        &self.collection
    }

    fn member(&self, id: i64) -> Result<Url, DirectoryError> {
        Ok(self.collection.join(&format!("{id}/"))?)
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<User>, DirectoryError> {
        let response = self.client.get(self.collection.clone()).send().await?;
        let response = ensure_success(response).await?;

        let users: Vec<User> = response.json().await.map_err(DirectoryError::Decode)?;

        debug!("fetched {} users", users.len());

        Ok(users)
    }

    #[instrument(skip(self, user), fields(id = user.id))]
    async fn create(&self, user: &User) -> Result<(), DirectoryError> {
        let response = self
            .client
            .post(self.collection.clone())
            .json(user)
            .send()
            .await?;

        ensure_success(response).await?;

        Ok(())
    }

    #[instrument(skip(self, user))]
    async fn update(&self, id: i64, user: &User) -> Result<(), DirectoryError> {
        let url = self.member(id)?;
        let response = self.client.put(url).json(user).send().await?;

        ensure_success(response).await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DirectoryError> {
        let url = self.member(id)?;
        let response = self.client.delete(url).send().await?;

        ensure_success(response).await?;

        Ok(())
    }
}

/// Join the collection path onto `base_url`, keeping any path prefix of the base.
///
/// # Errors
/// Returns an error if the resulting URL cannot be parsed.
pub fn collection_url(base_url: &str) -> Result<Url, DirectoryError> {
    let base = base_url.trim().trim_end_matches('/');

    Ok(Url::parse(&format!(
        "{base}/{}",
        COLLECTION_PATH.trim_start_matches('/')
    ))?)
}

async fn ensure_success(response: Response) -> Result<Response, DirectoryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(DirectoryError::Status {
        status: status.as_u16(),
        message: sanitize_body(&body),
    })
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
