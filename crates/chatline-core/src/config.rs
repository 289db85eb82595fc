//! 클라이언트 설정 구조체.
//!
//! 인증 토큰, API 베이스 URL, 디버그 플래그를 명시적 설정 객체로 전달한다.
//! 전역 상태에 숨기지 않는다.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chatline Web API 클라이언트 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API 베이스 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer 인증 토큰
    pub token: String,
    /// 요청/응답 본문을 debug 레벨로 로깅할지 여부
    #[serde(default)]
    pub debug: bool,
    /// HTTP 요청 타임아웃 (초)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.chatline.io/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            debug: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// 토큰만 지정한 기본 설정 생성
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// HTTP 타임아웃을 `Duration`으로 반환
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
