//! BackendClient - reqwest implementation of the REST backend ports.
//!
//! One client covers pricing, combo orders, the admin curriculum endpoints and
//! file uploads. The storage service's manage endpoint (list/delete) lives on
//! a separate host and is configured with its own URL and API key.
//!
//! # Error mapping
//!
//! - request never answered → `ApiError::Transport`
//! - non-2xx → `ApiError::Rejected` carrying the body's `error` field, if any
//! - 2xx with an unexpected body → `ApiError::Decode`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::domain::checkout::{ComboOrder, ComboOrderRequest, VerifyPaymentRequest};
use crate::domain::curriculum::{CatalogItem, NewChapter, NewUnit, TopicDraft};
use crate::domain::foundation::{ChapterId, ProgramId, UnitId};
use crate::domain::pricing::ProgramPricing;
use crate::domain::upload::{LocalFile, StoredFile, UploadedFile};
use crate::ports::{
    ApiError, ComboOrderGateway, CreatedTopic, CurriculumCatalog, FileManager, FileStorage,
    PricingCatalog,
};

/// Manage endpoint of the storage service.
#[derive(Debug, Clone)]
struct ManageEndpoint {
    url: String,
    api_key: Secret<String>,
}

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct BackendClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    manage: Option<ManageEndpoint>,
}

impl BackendClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
            manage: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables `FileManager` against the storage service's manage endpoint.
    pub fn with_file_manager(mut self, url: impl Into<String>, api_key: Secret<String>) -> Self {
        self.manage = Some(ManageEndpoint {
            url: url.into(),
            api_key,
        });
        self
    }
}

pub struct BackendClient {
    config: BackendClientConfig,
    client: Client,
}

#[derive(Deserialize)]
struct ComboOrderEnvelope {
    order: ComboOrder,
}

#[derive(Deserialize)]
struct ManageListResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    files: Vec<StoredFile>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct ManageResponse {
    #[serde(default)]
    success: bool,
    error: Option<String>,
}

impl BackendClient {
    pub fn new(config: BackendClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn manage(&self) -> Result<&ManageEndpoint, ApiError> {
        self.config.manage.as_ref().ok_or_else(|| {
            ApiError::rejected(503, Some("File manager is not configured".to_string()))
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::transport("Request timed out")
            } else if e.is_connect() {
                ApiError::transport(format!("Connection failed: {}", e))
            } else {
                ApiError::transport(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Best effort: the body may not be JSON at all
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string));
        warn!(status = status.as_u16(), error = ?message, "Backend request rejected");
        Err(ApiError::rejected(status.as_u16(), message))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    /// List endpoints answer `[]`-or-anything; anything else is an empty list.
    async fn decode_list<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, ApiError> {
        let body: Value = Self::decode(response).await?;
        match body {
            Value::Array(_) => {
                serde_json::from_value(body).map_err(|e| ApiError::decode(e.to_string()))
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self.send(self.client.get(self.url(path)).query(query)).await?;
        Self::decode(response).await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        debug!(path, "GET");
        let response = self.send(self.client.get(self.url(path)).query(query)).await?;
        Self::decode_list(response).await
    }

    async fn post_json<B: serde::Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl PricingCatalog for BackendClient {
    async fn program_pricing(&self, slug: &str) -> Result<ProgramPricing, ApiError> {
        self.get_json("/api/programs/pricing", &[("slug", slug)]).await
    }
}

#[async_trait]
impl ComboOrderGateway for BackendClient {
    async fn create_combo_order(&self, request: ComboOrderRequest) -> Result<ComboOrder, ApiError> {
        let envelope: ComboOrderEnvelope = self.post_json("/api/payment/combo", &request).await?;
        Ok(envelope.order)
    }

    async fn verify_payment(&self, request: VerifyPaymentRequest) -> Result<(), ApiError> {
        debug!(order_id = %request.receipt.razorpay_order_id, "POST /api/payment/verify");
        self.send(self.client.post(self.url("/api/payment/verify")).json(&request))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CurriculumCatalog for BackendClient {
    async fn list_programs(&self) -> Result<Vec<CatalogItem<ProgramId>>, ApiError> {
        self.get_list("/api/admin/programs", &[]).await
    }

    async fn list_units(&self, program: ProgramId) -> Result<Vec<CatalogItem<UnitId>>, ApiError> {
        let class_id = program.to_string();
        self.get_list("/api/admin/units", &[("classId", class_id.as_str())])
            .await
    }

    async fn list_chapters(&self, unit: &UnitId) -> Result<Vec<CatalogItem<ChapterId>>, ApiError> {
        self.get_list("/api/admin/chapters", &[("subjectId", unit.as_str())])
            .await
    }

    async fn create_unit(&self, unit: NewUnit) -> Result<CatalogItem<UnitId>, ApiError> {
        self.post_json("/api/admin/units", &unit).await
    }

    async fn create_chapter(
        &self,
        chapter: NewChapter,
    ) -> Result<CatalogItem<ChapterId>, ApiError> {
        self.post_json("/api/admin/chapters", &chapter).await
    }

    async fn create_topic(&self, draft: TopicDraft) -> Result<CreatedTopic, ApiError> {
        self.post_json("/api/admin/topics", &draft).await
    }
}

#[async_trait]
impl FileStorage for BackendClient {
    async fn upload(&self, file: LocalFile, folder: &str) -> Result<UploadedFile, ApiError> {
        debug!(filename = %file.name, size = file.size(), folder, "Uploading file");
        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)
            .map_err(|e| ApiError::decode(format!("Invalid MIME type: {}", e)))?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("folder", folder.to_string());

        let response = self
            .send(self.client.post(self.url("/api/upload")).multipart(form))
            .await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl FileManager for BackendClient {
    async fn list_files(&self, folder: &str) -> Result<Vec<StoredFile>, ApiError> {
        let manage = self.manage()?;
        let response = self
            .send(
                self.client
                    .get(&manage.url)
                    .query(&[("folder", folder)])
                    .header("X-API-Key", manage.api_key.expose_secret()),
            )
            .await?;
        let status = response.status().as_u16();
        let body: ManageListResponse = Self::decode(response).await?;
        if body.success {
            Ok(body.files)
        } else {
            Err(ApiError::rejected(status, body.error))
        }
    }

    async fn delete_file(&self, folder: &str, filename: &str) -> Result<(), ApiError> {
        let manage = self.manage()?;
        let response = self
            .send(
                self.client
                    .delete(&manage.url)
                    .header("X-API-Key", manage.api_key.expose_secret())
                    .json(&json!({ "folder": folder, "filename": filename })),
            )
            .await?;
        let status = response.status().as_u16();
        let body: ManageResponse = Self::decode(response).await?;
        if body.success {
            Ok(())
        } else {
            Err(ApiError::rejected(status, body.error))
        }
    }
}
