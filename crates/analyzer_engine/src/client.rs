use analyzer_core::AnalysisResult;
use analyzer_logging::{analyzer_debug, analyzer_info};
use reqwest::multipart::{Form, Part};

use crate::upload::{content_type_for, read_resume};
use crate::{AnalysisError, AnalysisRequest, ClientSettings, EngineError, FailureKind};

#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}

/// Posts the resume as multipart form data. No timeout and no retry:
/// a request runs until the service answers or the transport fails.
#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestAnalysisClient {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { settings, client })
    }

    fn build_form(&self, request: &AnalysisRequest, bytes: Vec<u8>) -> Result<Form, AnalysisError> {
        let resume = Part::bytes(bytes)
            .file_name(request.resume_name.clone())
            .mime_str(content_type_for(&request.resume_name))
            .map_err(map_reqwest_error)?;
        Ok(Form::new()
            .part("resume", resume)
            .text("jd", request.job_description.clone()))
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let bytes = read_resume(&request.resume_path).await?;
        analyzer_info!(
            "Submitting resume={} bytes={} jd_len={}",
            request.resume_name,
            bytes.len(),
            request.job_description.len()
        );
        let form = self.build_form(request, bytes)?;

        let response = self
            .client
            .post(self.settings.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body is treated as empty.
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::http_status(status.as_u16(), body));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        analyzer_debug!("Analysis response status={} body_len={}", status, body.len());
        AnalysisResult::from_json(&body)
            .map_err(|err| AnalysisError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AnalysisError {
    AnalysisError::new(FailureKind::Network, err.to_string())
}
