//! Remote data client for the hosted backend.
//!
//! A thin handle over the backend's REST surface: declarative reads and
//! writes against named tables (`profiles`, `items`, `prices`, `posts`,
//! `comments`) plus the password auth endpoints. The backend owns all
//! persistence, relational querying, and row-level authorization; this module
//! only builds requests and decodes responses.
//!
//! The access token of the signed-in session is kept in browser local
//! storage and attached as a bearer header on every table request, so the
//! remote row-level rules see the calling user.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use shared::{AuthUser, Credentials, Session, SignupRequest};

use crate::utils::constants::{REMOTE_KEY, REMOTE_URL, SESSION_STORAGE_KEY};

pub type Result<T> = std::result::Result<T, RemoteError>;

/// Failure surface of the remote client. Call sites log these and show an
/// inline banner or alert; nothing is retried.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("remote returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Handle to the remote store. Stateless and free to copy; the session token
/// is read from storage per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteClient;

/// The app-wide client handle.
pub fn client() -> RemoteClient {
    RemoteClient
}

impl RemoteClient {
    /// Start a declarative query against a named table.
    pub fn from(self, table: &str) -> TableQuery {
        TableQuery::new(table)
    }

    /// Exchange email/password for a session and persist it.
    pub async fn sign_in_with_password(self, credentials: &Credentials) -> Result<Session> {
        let url = format!("{REMOTE_URL}/auth/v1/token?grant_type=password");
        let builder = Request::post(&url).header("apikey", REMOTE_KEY);
        let response = send(builder, Some(credentials)).await?;
        let session: Session = decode(response).await?;
        store_session(&session);
        Ok(session)
    }

    /// Create an account and persist the returned session.
    pub async fn sign_up(self, request: &SignupRequest) -> Result<Session> {
        let url = format!("{REMOTE_URL}/auth/v1/signup");
        let builder = Request::post(&url).header("apikey", REMOTE_KEY);
        let response = send(builder, Some(request)).await?;
        let session: Session = decode(response).await?;
        store_session(&session);
        Ok(session)
    }

    /// The user behind the stored session, if the token is still accepted.
    ///
    /// A rejected token clears the stored session rather than erroring, so a
    /// stale login degrades to the signed-out state.
    pub async fn current_user(self) -> Result<Option<AuthUser>> {
        let Some(session) = load_session() else {
            return Ok(None);
        };
        let url = format!("{REMOTE_URL}/auth/v1/user");
        let builder = Request::get(&url)
            .header("apikey", REMOTE_KEY)
            .header("Authorization", &format!("Bearer {}", session.access_token));
        let response = send(builder, None::<&()>).await?;
        if response.status() == 401 || response.status() == 403 {
            clear_session();
            return Ok(None);
        }
        let user = decode(response).await?;
        Ok(Some(user))
    }

    /// Drop the stored session. Purely local; the token simply stops being
    /// attached.
    pub fn sign_out(self) {
        clear_session();
    }
}

/// One declarative request against a named table: projection, `eq` filters,
/// ordering, and a row limit, realized as REST query parameters.
#[derive(Debug, Clone)]
pub struct TableQuery {
    table: String,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<usize>,
}

impl TableQuery {
    fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            select: None,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Columns to return, including embedded resources such as
    /// `"*, profiles(full_name)"`.
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    /// Keep rows whose `column` equals `value`.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order = Some(format!("{column}.{direction}"));
        self
    }

    pub fn limit(mut self, rows: usize) -> Self {
        self.limit = Some(rows);
        self
    }

    fn query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(select) = &self.select {
            parts.push(format!("select={}", urlencoding::encode(select)));
        }
        for (column, filter) in &self.filters {
            parts.push(format!("{column}={}", urlencoding::encode(filter)));
        }
        if let Some(order) = &self.order {
            parts.push(format!("order={order}"));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        parts.join("&")
    }

    fn url(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            format!("{REMOTE_URL}/rest/v1/{}", self.table)
        } else {
            format!("{REMOTE_URL}/rest/v1/{}?{query}", self.table)
        }
    }

    /// Run the query and decode the result rows.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let response = send(authorized(Request::get(&self.url())), None::<&()>).await?;
        decode(response).await
    }

    /// First matching row, if any. Realized as `limit 1` plus a take, so an
    /// empty result is `None` rather than a protocol error.
    pub async fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>> {
        let mut rows: Vec<T> = self.limit(1).fetch().await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    /// Insert one row or a batch. Nothing is returned; callers re-run their
    /// read query afterwards.
    pub async fn insert(self, rows: &impl Serialize) -> Result<()> {
        let builder = authorized(Request::post(&self.url())).header("Prefer", "return=minimal");
        let response = send(builder, Some(rows)).await?;
        expect_status(response).await.map(|_| ())
    }

    /// Patch the rows matched by the filters.
    pub async fn update(self, patch: &impl Serialize) -> Result<()> {
        let builder = authorized(Request::patch(&self.url())).header("Prefer", "return=minimal");
        let response = send(builder, Some(patch)).await?;
        expect_status(response).await.map(|_| ())
    }

    /// Delete the rows matched by the filters.
    pub async fn delete(self) -> Result<()> {
        let builder = authorized(Request::delete(&self.url())).header("Prefer", "return=minimal");
        let response = send(builder, None::<&()>).await?;
        expect_status(response).await.map(|_| ())
    }
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("apikey", REMOTE_KEY);
    let token = load_session()
        .map(|session| session.access_token)
        .unwrap_or_else(|| REMOTE_KEY.to_string());
    builder.header("Authorization", &format!("Bearer {token}"))
}

async fn send<B: Serialize>(builder: RequestBuilder, body: Option<&B>) -> Result<Response> {
    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|err| RemoteError::Request(err.to_string()))?,
        None => builder
            .build()
            .map_err(|err| RemoteError::Request(err.to_string()))?,
    };
    request
        .send()
        .await
        .map_err(|err| RemoteError::Request(err.to_string()))
}

async fn expect_status(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(body) => extract_message(&body),
        Err(_) => String::from("unknown error"),
    };
    Err(RemoteError::Status { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = expect_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|err| RemoteError::Decode(err.to_string()))
}

/// Pull a human-readable message out of an error body, falling back to the
/// raw text. The auth and table endpoints disagree on the field name.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| {
                    value
                        .get(key)
                        .and_then(|field| field.as_str())
                        .map(str::to_string)
                })
        })
        .unwrap_or_else(|| body.to_string())
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn store_session(session: &Session) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            if storage.set_item(SESSION_STORAGE_KEY, &json).is_err() {
                log::warn!("failed to persist session");
            }
        }
        Err(err) => log::warn!("failed to serialize session: {err}"),
    }
}

fn load_session() -> Option<Session> {
    let raw = local_storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

fn clear_session() {
    if let Some(storage) = local_storage() {
        storage.remove_item(SESSION_STORAGE_KEY).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_orders_parameters() {
        let query = TableQuery::new("prices")
            .select("date, price")
            .eq("item_id", "abc-123")
            .order("date", false)
            .limit(7);
        assert_eq!(
            query.query_string(),
            "select=date%2C%20price&item_id=eq.abc-123&order=date.desc&limit=7"
        );
    }

    #[test]
    fn bare_query_has_no_parameters() {
        let query = TableQuery::new("items");
        assert_eq!(query.query_string(), "");
        assert!(query.url().ends_with("/rest/v1/items"));
    }

    #[test]
    fn embedded_select_is_encoded() {
        let query = TableQuery::new("posts").select("*, profiles(full_name), comments(count)");
        assert_eq!(
            query.query_string(),
            "select=%2A%2C%20profiles%28full_name%29%2C%20comments%28count%29"
        );
    }

    #[test]
    fn ascending_order_spelled_out() {
        let query = TableQuery::new("comments").order("created_at", true);
        assert_eq!(query.query_string(), "order=created_at.asc");
    }

    #[test]
    fn extract_message_prefers_known_fields() {
        assert_eq!(
            extract_message(r#"{"message":"duplicate key"}"#),
            "duplicate key"
        );
        assert_eq!(
            extract_message(r#"{"error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(extract_message("gateway timeout"), "gateway timeout");
    }
}
