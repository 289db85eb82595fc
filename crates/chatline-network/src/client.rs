//! Web API 메서드 래퍼.
//!
//! 설정(토큰, 베이스 URL, 디버그 플래그)은 `ClientConfig`로 명시적으로 받는다.
//! 내부 가변 상태가 없으므로 여러 태스크에서 동시에 호출해도 안전하다.

use chatline_core::config::ClientConfig;
use chatline_core::error::ChatError;
use chatline_core::models::dialog::{Dialog, DialogTrigger};
use chatline_core::models::response::ApiResponse;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::transport::{HttpTransport, ReqwestTransport};

/// Chatline Web API 클라이언트
pub struct ChatClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl ChatClient {
    /// 설정으로부터 reqwest 전송 계층을 구성해 클라이언트 생성
    pub fn new(config: ClientConfig) -> Result<Self, ChatError> {
        let transport = Arc::new(ReqwestTransport::new(
            &config.base_url,
            config.timeout(),
            config.debug,
        )?);
        Ok(Self { config, transport })
    }

    /// 전송 계층을 직접 주입해 클라이언트 생성 (테스트 대역용)
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// trigger_id가 발생한 위치에 다이얼로그를 연다.
    ///
    /// trigger_id는 발급 후 3초 안에 소비해야 하는 단명 토큰이다. 비어 있으면
    /// 네트워크 호출 없이 즉시 [`ChatError::InvalidArgument`]로 실패한다.
    /// 원격 서비스가 `ok: false`를 내려주면 [`ChatError::Remote`]에 서비스
    /// 에러 코드가 그대로 담긴다.
    pub async fn open_dialog(&self, trigger_id: &str, dialog: &Dialog) -> Result<(), ChatError> {
        if trigger_id.is_empty() {
            return Err(ChatError::InvalidArgument(
                "trigger_id가 비어 있음".to_string(),
            ));
        }

        let envelope = DialogTrigger {
            trigger_id: trigger_id.to_string(),
            dialog: dialog.clone(),
        };
        let body = serde_json::to_vec(&envelope)?;

        debug!("dialog.open 요청: callback_id={}", dialog.callback_id);
        let raw = self
            .transport
            .post_json("dialog.open", &self.config.token, body)
            .await?;

        let response: ApiResponse = serde_json::from_slice(&raw)?;
        response.into_result()
    }

    /// 데드라인이 있는 [`open_dialog`](Self::open_dialog).
    ///
    /// 데드라인을 넘기면 전송 실패([`ChatError::Network`])로 표면화된다.
    /// 데드라인은 이 호출 1회에만 적용된다.
    pub async fn open_dialog_with_timeout(
        &self,
        timeout: Duration,
        trigger_id: &str,
        dialog: &Dialog,
    ) -> Result<(), ChatError> {
        match tokio::time::timeout(timeout, self.open_dialog(trigger_id, dialog)).await {
            Ok(result) => result,
            Err(_) => Err(ChatError::Network(format!(
                "dialog.open 데드라인 초과 ({timeout:?})"
            ))),
        }
    }
}
