use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tokio::sync::watch;
use tracing::{info, warn};
use url::Url;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::user::UserProfile;
use crate::store::PostgrestClient;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(alias = "error_description", alias = "msg")]
    message: Option<String>,
}

/// Auth client for the hosted identity provider.
///
/// One instance lives on the `ContentClient`. Session state is an explicit
/// watch channel: dashboards subscribe with [`watch`](Self::watch) and tear
/// down by dropping the receiver, instead of reading process-wide state.
#[derive(Clone)]
pub struct AuthContext {
    http: Client,
    auth_url: Url,
    anon_key: String,
    rest: PostgrestClient,
    session_tx: watch::Sender<Option<Session>>,
}

impl AuthContext {
    pub fn new(http: Client, rest: PostgrestClient, config: &Config) -> Result<Self> {
        let (session_tx, _) = watch::channel(None);
        Ok(Self {
            http,
            auth_url: config.backend_url.join("auth/v1/")?,
            anon_key: config.anon_key.clone(),
            rest,
            session_tx,
        })
    }

    pub fn watch(&self) -> watch::Receiver<Option<Session>> {
        self.session_tx.subscribe()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.session_tx.borrow().clone()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let url = self.auth_url.join("token")?;
        let resp = self
            .http
            .post(url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let session = Self::decode_session(resp).await?;
        info!(user = %session.user.id, "signed in");
        self.session_tx.send_replace(Some(session.clone()));
        Ok(session)
    }

    /// Returns `None` when the provider requires e-mail confirmation before
    /// issuing a session.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Option<Session>> {
        let url = self.auth_url.join("signup")?;
        let resp = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::auth_error(resp).await);
        }
        let value: serde_json::Value = resp.json().await?;
        if value.get("access_token").is_some() {
            let session: Session = serde_json::from_value(value)?;
            self.session_tx.send_replace(Some(session.clone()));
            Ok(Some(session))
        } else {
            Ok(None)
        }
    }

    /// Ends the session locally even when the provider-side revocation
    /// fails; the token is short-lived either way.
    pub async fn sign_out(&self) -> Result<()> {
        if let Some(session) = self.current_session() {
            let url = self.auth_url.join("logout")?;
            let resp = self
                .http
                .post(url)
                .header("apikey", &self.anon_key)
                .bearer_auth(&session.access_token)
                .send()
                .await?;
            let status = resp.status();
            if !status.is_success() && status != StatusCode::UNAUTHORIZED {
                warn!(status = %status, "remote sign-out failed");
            }
        }
        self.session_tx.send_replace(None);
        Ok(())
    }

    /// The identity alone does not say whether a user may edit content; the
    /// `users` table carries the `admin`/`editor` role.
    pub async fn profile(&self, session: &Session) -> Result<UserProfile> {
        let rest = self.rest.with_access_token(&session.access_token);
        let eq = format!("eq.{}", session.user.id);
        let rows: Vec<UserProfile> = rest
            .select("users", &[("select", "*"), ("id", &eq), ("limit", "1")])
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("no profile row for user {}", session.user.id)))
    }

    async fn decode_session(resp: Response) -> Result<Session> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::auth_error(resp).await);
        }
        Ok(resp.json::<Session>().await?)
    }

    async fn auth_error(resp: Response) -> Error {
        let message = resp
            .json::<AuthErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "authentication failed".to_string());
        Error::Auth(message)
    }
}
