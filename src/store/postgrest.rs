use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Transport against the hosted data API. All row traffic in the crate goes
/// through here; the `{data, error}` split of the hosted SDK maps onto
/// `Result` at this boundary.
#[derive(Clone)]
pub struct PostgrestClient {
    http: Client,
    rest_url: Url,
    anon_key: String,
    access_token: Option<String>,
}

impl PostgrestClient {
    pub fn new(http: Client, config: &Config) -> Result<Self> {
        Ok(Self {
            http,
            rest_url: config.backend_url.join("rest/v1/")?,
            anon_key: config.anon_key.clone(),
            access_token: None,
        })
    }

    /// Same transport, authorized as the signed-in user instead of the
    /// anonymous role.
    pub fn with_access_token(&self, token: &str) -> Self {
        Self {
            access_token: Some(token.to_string()),
            ..self.clone()
        }
    }

    fn table_url(&self, table: &str) -> Result<Url> {
        Ok(self.rest_url.join(table)?)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        req.header("apikey", &self.anon_key).bearer_auth(bearer)
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let req = self.http.get(self.table_url(table)?).query(query);
        let resp = self.authorize(req).send().await?;
        Self::decode(resp).await
    }

    /// Inserts one row and returns the server representation, so callers see
    /// the assigned id and timestamps.
    pub async fn insert(&self, table: &str, body: &Value) -> Result<Value> {
        let req = self
            .http
            .post(self.table_url(table)?)
            .header("Prefer", "return=representation")
            .json(body);
        let resp = self.authorize(req).send().await?;
        let mut rows: Vec<Value> = Self::decode(resp).await?;
        rows.pop()
            .ok_or_else(|| Error::Internal("insert returned no representation".to_string()))
    }

    pub async fn update(&self, table: &str, id: &str, body: &Value) -> Result<()> {
        let req = self
            .http
            .patch(self.table_url(table)?)
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=minimal")
            .json(body);
        let resp = self.authorize(req).send().await?;
        Self::check(resp).await
    }

    pub async fn delete(&self, table: &str, id: &str) -> Result<()> {
        let req = self
            .http
            .delete(self.table_url(table)?)
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=minimal");
        let resp = self.authorize(req).send().await?;
        Self::check(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::store_error(status, resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    async fn check(resp: Response) -> Result<()> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::store_error(status, resp).await);
        }
        Ok(())
    }

    async fn store_error(status: StatusCode, resp: Response) -> Error {
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "unknown remote error".to_string());
        Error::Store {
            status: status.as_u16(),
            message,
        }
    }
}
