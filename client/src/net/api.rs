//! REST helpers for the catalogue API.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`UNAVAILABLE`], which keeps the pure
//! helpers testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>`/`Option<T>` instead of panics; pages turn
//! errors into notices. Payloads are parsed once here into `records` types.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{
    Asset, AssetDraft, AssetObject, AssetPatch, AssetQuery, Endpoint, IntegrityReport, JobKind, JobRequest,
    Method, ObjectHit, ObjectPatch, ObjectQuery, Page, ProfileReport, RowCount, ValidationResult, WorkflowJob,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::state::auth::Session;

pub const UNAVAILABLE: &str = "not available outside the browser";

#[cfg(any(test, feature = "csr"))]
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Human-readable failure for a non-2xx response, with a short body excerpt.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn status_message(status: u16, status_text: &str, body: &str) -> String {
    let mut message = format!("{status} {status_text}").trim_end().to_owned();
    let body = body.trim();
    if !body.is_empty() {
        let excerpt: String = body.chars().take(200).collect();
        message.push_str(": ");
        message.push_str(&excerpt);
    }
    message
}

/// Fetch the identity-provider session. `None` when signed out.
pub async fn fetch_session(config: &ClientConfig) -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&config.session_url()).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let text = resp.text().await.ok()?;
        records::parse::<Session>(&text).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        None
    }
}

/// Authenticated handle on the REST API. Cheap to clone into async tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Api {
    base: String,
    token: Option<String>,
}

impl Api {
    pub fn new(config: &ClientConfig, token: Option<&str>) -> Self {
        Self {
            base: config.api_base.clone(),
            token: token.map(str::to_owned),
        }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        endpoint.url(&self.base)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    // =========================================================================
    // ASSETS
    // =========================================================================

    pub async fn list_assets(&self, query: AssetQuery) -> Result<Page<Asset>, String> {
        self.get_json(&Endpoint::Assets(query)).await
    }

    pub async fn get_asset(&self, uuid: Uuid) -> Result<Asset, String> {
        self.get_json(&Endpoint::Asset(uuid)).await
    }

    pub async fn create_asset(&self, draft: &AssetDraft) -> Result<Asset, String> {
        self.send_json(Method::Post, &Endpoint::Assets(AssetQuery::default()), Some(draft))
            .await
    }

    pub async fn update_asset(&self, uuid: Uuid, patch: &AssetPatch) -> Result<Asset, String> {
        self.send_json(Method::Patch, &Endpoint::Asset(uuid), Some(patch)).await
    }

    pub async fn delete_asset(&self, uuid: Uuid) -> Result<(), String> {
        self.send(Method::Delete, &Endpoint::Asset(uuid), None::<&()>).await.map(drop)
    }

    // =========================================================================
    // OBJECTS
    // =========================================================================

    pub async fn search_objects(&self, query: ObjectQuery) -> Result<Page<ObjectHit>, String> {
        self.get_json(&Endpoint::SearchObjects(query)).await
    }

    pub async fn get_object(&self, id: i64) -> Result<AssetObject, String> {
        self.get_json(&Endpoint::Object(id)).await
    }

    pub async fn update_object(&self, id: i64, patch: &ObjectPatch) -> Result<AssetObject, String> {
        self.send_json(Method::Patch, &Endpoint::Object(id), Some(patch)).await
    }

    pub async fn delete_object(&self, id: i64) -> Result<(), String> {
        self.send(Method::Delete, &Endpoint::Object(id), None::<&()>).await.map(drop)
    }

    pub async fn row_count(&self, id: i64) -> Result<RowCount, String> {
        self.get_json(&Endpoint::RowCount(id)).await
    }

    pub async fn profile(&self, id: i64) -> Result<ProfileReport, String> {
        self.get_json(&Endpoint::Profile(id)).await
    }

    pub async fn integrity(&self, id: i64) -> Result<IntegrityReport, String> {
        self.get_json(&Endpoint::Integrity(id)).await
    }

    /// Pre-rendered HTML, embedded through `<iframe srcdoc>`.
    pub async fn visualization(&self, id: i64) -> Result<String, String> {
        self.send(Method::Get, &Endpoint::Visualization(id), None::<&()>).await
    }

    pub async fn download(&self, id: i64) -> Result<Vec<u8>, String> {
        #[cfg(feature = "csr")]
        {
            let resp = self.request(Method::Get, &Endpoint::Download(id), None::<&()>).await?;
            resp.binary().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(UNAVAILABLE.to_owned())
        }
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    pub async fn start_validation(&self, id: i64) -> Result<(), String> {
        self.send(Method::Post, &Endpoint::Validation(id), None::<&()>).await.map(drop)
    }

    pub async fn validation(&self, id: i64) -> Result<ValidationResult, String> {
        self.get_json(&Endpoint::Validation(id)).await
    }

    // =========================================================================
    // JOBS
    // =========================================================================

    pub async fn list_jobs(&self, kind: Option<JobKind>) -> Result<Page<WorkflowJob>, String> {
        self.get_json(&Endpoint::Jobs(kind)).await
    }

    pub async fn get_job(&self, id: i64) -> Result<WorkflowJob, String> {
        self.get_json(&Endpoint::Job(id)).await
    }

    pub async fn extended_results(&self, id: i64) -> Result<serde_json::Value, String> {
        self.get_json(&Endpoint::ExtendedResults(id)).await
    }

    pub async fn submit_job(&self, request: &JobRequest) -> Result<WorkflowJob, String> {
        self.send_json(Method::Post, &Endpoint::Jobs(None), Some(request)).await
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, String> {
        self.send_json(Method::Get, endpoint, None::<&()>).await
    }

    async fn send_json<B, T>(&self, method: Method, endpoint: &Endpoint, body: Option<&B>) -> Result<T, String>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.send(method, endpoint, body).await?;
        records::parse(&text).map_err(|e| e.to_string())
    }

    /// Issue a request and return the body text of a 2xx response.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<String, String> {
        #[cfg(feature = "csr")]
        {
            let resp = self.request(method, endpoint, body).await?;
            resp.text().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, endpoint, body);
            Err(UNAVAILABLE.to_owned())
        }
    }

    #[cfg(feature = "csr")]
    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<gloo_net::http::Response, String> {
        use gloo_net::http::{Method as HttpMethod, RequestBuilder};

        let url = self.url(endpoint);
        let http_method = match method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Patch => HttpMethod::PATCH,
            Method::Delete => HttpMethod::DELETE,
        };
        let mut builder = RequestBuilder::new(&url).method(http_method);
        if let Some(token) = self.token.as_deref() {
            builder = builder.header("Authorization", &bearer(token));
        }
        log::debug!("{} {url}", method.as_str());
        let request = match body {
            Some(body) => builder.json(body).map_err(|e| e.to_string())?,
            None => builder.build().map_err(|e| e.to_string())?,
        };
        let resp = request.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(status_message(resp.status(), &resp.status_text(), &text));
        }
        Ok(resp)
    }
}
