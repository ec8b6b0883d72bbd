//! # Facebook Graph API 클라이언트
//!
//! `FacebookAuthAdapter`의 HTTP 구현입니다. 로그인 버튼이 넘겨준 액세스 토큰으로
//! Graph API `/me` 엔드포인트를 조회합니다.
//!
//! ```text
//! GET https://graph.facebook.com[/v19.0]/me?fields=id,name,first_name,last_name&access_token=...
//! ```
//!
//! ## 에러 응답 형식
//!
//! ```json
//! { "error": { "message": "Invalid OAuth access token.", "type": "OAuthException", "code": 190 } }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use crate::adapters::facebook::FacebookAuthAdapter;
use crate::config::ScreenConfig;
use crate::domain::models::FacebookProfileRecord;
use crate::errors::{AppError, AppResult, FacebookGraphError};
use crate::utils::string_utils::mask_token;

#[derive(Debug, Deserialize)]
struct GraphErrorEnvelope {
    error: GraphErrorBody,
}

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    code: i64,
}

pub struct FacebookGraphClient {
    client: reqwest::Client,
    graph_url: String,
    graph_version: Option<String>,
}

impl FacebookGraphClient {
    pub fn new(graph_url: impl Into<String>, graph_version: Option<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ExternalServiceError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            graph_url: graph_url.into().trim_end_matches('/').to_string(),
            graph_version,
        })
    }

    pub fn from_config(config: &ScreenConfig) -> AppResult<Self> {
        Self::new(config.graph_url.clone(), config.graph_version.clone())
    }

    /// 프로필 조회 엔드포인트 URL
    pub fn profile_endpoint(&self) -> String {
        match &self.graph_version {
            Some(version) => format!("{}/{}/me", self.graph_url, version),
            None => format!("{}/me", self.graph_url),
        }
    }
}

/// 실패 응답 본문을 에러로 변환합니다.
///
/// Graph 에러 형식이 아니면 HTTP 상태 코드와 원문을 그대로 담습니다.
pub(crate) fn parse_graph_error(status: u16, body: &str) -> FacebookGraphError {
    match serde_json::from_str::<GraphErrorEnvelope>(body) {
        Ok(envelope) => {
            if let Some(kind) = &envelope.error.kind {
                log::debug!("Graph 에러 타입: {}", kind);
            }
            FacebookGraphError::Api {
                code: envelope.error.code,
                message: envelope.error.message,
            }
        }
        Err(_) => FacebookGraphError::Api {
            code: i64::from(status),
            message: body.to_string(),
        },
    }
}

#[async_trait]
impl FacebookAuthAdapter for FacebookGraphClient {
    async fn fetch_profile(
        &self,
        access_token: &str,
        fields: &[&str],
    ) -> Result<FacebookProfileRecord, FacebookGraphError> {
        let endpoint = self.profile_endpoint();
        log::debug!("Graph 프로필 조회: {} (token={})", endpoint, mask_token(access_token));

        let response = self
            .client
            .get(&endpoint)
            .query(&[("fields", fields.join(",").as_str()), ("access_token", access_token)])
            .send()
            .await
            .map_err(|e| FacebookGraphError::Request(format!("Facebook 프로필 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(parse_graph_error(status.as_u16(), &error_text));
        }

        response
            .json::<FacebookProfileRecord>()
            .await
            .map_err(|e| FacebookGraphError::Decode(format!("Facebook 프로필 파싱 실패: {}", e)))
    }
}
