//! REST client for the kolam analysis backend.
//!
//! One method per endpoint, one HTTP call per method. Non-success statuses
//! become [`KolamError::Http`] carrying the status text; nothing is retried.
//!
//! ```text
//! POST /upload-kolam               multipart, field `kolam_image`
//! GET  /analysis-status/{id}       {status}
//! GET  /analysis/{id}              full result
//! GET  /cultural-description/{id}  ┐
//! GET  /mathematical-analysis/{id} │
//! GET  /analysis-image/{id}        ├ result subsets
//! GET  /parametric-equations/{id}  │
//! GET  /generated-kolams/{id}      ┘
//! GET  /download-analysis/{id}     image bytes
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{KolamError, KolamResult};
use crate::types::{
    AnalysisId, AnalysisResult, AnalysisStatus, ResultField, StatusResponse, UploadResponse,
};
use crate::upload::KolamImage;

/// Multipart field name expected by the backend
pub const UPLOAD_FIELD: &str = "kolam_image";

/// The subset of backend operations the analysis lifecycle needs.
///
/// Implemented by [`KolamApi`] for the real service and by
/// [`crate::demo::DemoBackend`] for offline use.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn upload(&self, image: &KolamImage) -> KolamResult<UploadResponse>;

    async fn status(&self, id: &AnalysisId) -> KolamResult<AnalysisStatus>;

    async fn results(&self, id: &AnalysisId) -> KolamResult<AnalysisResult>;

    async fn download_image(&self, id: &AnalysisId) -> KolamResult<Bytes>;
}

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct KolamApi {
    client: Client,
    config: ClientConfig,
}

impl KolamApi {
    pub fn new(config: ClientConfig) -> KolamResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("kolam-analyzer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Upload an image for analysis.
    pub async fn upload_kolam(&self, image: &KolamImage) -> KolamResult<UploadResponse> {
        let part = Part::bytes(image.data.to_vec())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        debug!(file = %image.file_name, bytes = image.size_bytes(), "uploading kolam");
        let response = self
            .client
            .post(self.config.endpoint("upload-kolam"))
            .multipart(form)
            .send()
            .await?;

        Ok(check("Upload", response)?.json().await?)
    }

    /// Complete analysis results.
    pub async fn analysis_results(&self, id: &AnalysisId) -> KolamResult<AnalysisResult> {
        let response = self
            .client
            .get(self.config.endpoint(&format!("analysis/{}", id)))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        Ok(check("Analysis fetch", response)?.json().await?)
    }

    pub async fn analysis_status(&self, id: &AnalysisId) -> KolamResult<AnalysisStatus> {
        let body: StatusResponse = self
            .get_json("Status check", &format!("analysis-status/{}", id))
            .await?;
        Ok(body.status)
    }

    /// Fetch one partial-field endpoint. Only the fields that endpoint
    /// serves are populated in the returned result.
    pub async fn fetch_field(
        &self,
        field: ResultField,
        id: &AnalysisId,
    ) -> KolamResult<AnalysisResult> {
        self.get_json(field.operation(), &format!("{}/{}", field.endpoint(), id))
            .await
    }

    pub async fn cultural_description(&self, id: &AnalysisId) -> KolamResult<AnalysisResult> {
        self.fetch_field(ResultField::CulturalDescription, id).await
    }

    pub async fn mathematical_analysis(&self, id: &AnalysisId) -> KolamResult<AnalysisResult> {
        self.fetch_field(ResultField::MathematicalAnalysis, id).await
    }

    pub async fn analysis_image(&self, id: &AnalysisId) -> KolamResult<AnalysisResult> {
        self.fetch_field(ResultField::AnalysisImage, id).await
    }

    pub async fn parametric_equations(&self, id: &AnalysisId) -> KolamResult<AnalysisResult> {
        self.fetch_field(ResultField::ParametricEquations, id).await
    }

    pub async fn generated_kolams(&self, id: &AnalysisId) -> KolamResult<AnalysisResult> {
        self.fetch_field(ResultField::GeneratedKolams, id).await
    }

    /// Raw bytes of the rendered analysis image.
    pub async fn download_analysis_image(&self, id: &AnalysisId) -> KolamResult<Bytes> {
        let response = self
            .client
            .get(self.config.endpoint(&format!("download-analysis/{}", id)))
            .send()
            .await?;

        Ok(check("Image download", response)?.bytes().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> KolamResult<T> {
        let response = self.client.get(self.config.endpoint(path)).send().await?;
        Ok(check(operation, response)?.json().await?)
    }
}

fn check(operation: &'static str, response: Response) -> KolamResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        debug!(operation, status = status.as_u16(), "backend returned error status");
        Err(KolamError::http(operation, status))
    }
}

#[async_trait]
impl AnalysisBackend for KolamApi {
    async fn upload(&self, image: &KolamImage) -> KolamResult<UploadResponse> {
        self.upload_kolam(image).await
    }

    async fn status(&self, id: &AnalysisId) -> KolamResult<AnalysisStatus> {
        self.analysis_status(id).await
    }

    async fn results(&self, id: &AnalysisId) -> KolamResult<AnalysisResult> {
        self.analysis_results(id).await
    }

    async fn download_image(&self, id: &AnalysisId) -> KolamResult<Bytes> {
        self.download_analysis_image(id).await
    }
}
