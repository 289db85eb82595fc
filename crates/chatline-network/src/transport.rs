//! HTTP 전송 포트와 reqwest 구현.
//!
//! 요청 구성, Bearer 인증 헤더 주입, 상태 코드 확인을 담당한다.
//! 재시도는 하지 않는다 — 호출 1회당 아웃바운드 요청은 정확히 1회다.

use async_trait::async_trait;
use chatline_core::error::ChatError;
use std::time::Duration;
use tracing::debug;

/// JSON POST 전송 포트.
///
/// 구현체는 요청 구성과 인증 헤더 주입을 책임지고, 응답 본문을 바이트로
/// 돌려준다. 봉투 해석은 호출 측(`ChatClient`) 몫이다.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// API 메서드 엔드포인트로 JSON 본문을 POST하고 응답 본문을 반환
    async fn post_json(
        &self,
        endpoint: &str,
        token: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, ChatError>;
}

/// reqwest 기반 전송 구현
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    debug: bool,
}

impl ReqwestTransport {
    /// 타임아웃이 설정된 전송 계층 생성
    pub fn new(base_url: &str, timeout: Duration, debug: bool) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatError::Network(format!("HTTP 클라이언트 빌드 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            debug,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        token: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, ChatError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        if self.debug {
            debug!("POST {url} 본문: {}", String::from_utf8_lossy(&body));
        }

        let resp = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .bearer_auth(token)
            .body(body)
            .send()
            .await
            .map_err(|e| ChatError::Network(format!("{endpoint} 요청 실패: {e}")))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ChatError::Network(format!("{endpoint} 응답 본문 읽기 실패: {e}")))?;

        if self.debug {
            debug!("{endpoint} 응답 ({status}): {}", String::from_utf8_lossy(&bytes));
        }

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            return match status.as_u16() {
                401 => Err(ChatError::Auth(format!("인증 실패: {text}"))),
                _ => Err(ChatError::Network(format!("API 에러 ({status}): {text}"))),
            };
        }

        Ok(bytes.to_vec())
    }
}
