//! 공통 응답 봉투.
//!
//! Web API의 모든 메서드는 `{ "ok": bool, "error"?: string }` 형태로 응답한다.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// 공통 응답 봉투
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    /// `ok: false`일 때 서비스가 내려주는 에러 코드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// `ok` 플래그를 로컬 에러로 사상한다.
    /// 에러 코드는 서비스가 내려준 문자열 그대로 전달한다.
    pub fn into_result(self) -> Result<(), ChatError> {
        if self.ok {
            Ok(())
        } else {
            Err(ChatError::Remote(self.error.unwrap_or_default()))
        }
    }
}
