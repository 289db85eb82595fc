//! 인바운드 webhook 페이로드.
//!
//! 사용자가 다이얼로그를 제출하거나 external 셀렉트에 입력할 때 원격 서비스가
//! 통합 측 webhook 엔드포인트로 POST하는 역직렬화 대상. webhook 서버 자체는
//! 이 crate 범위 밖이다.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 콜백 `type` 판별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackType {
    DialogSubmission,
    DialogSuggestion,
}

/// 다이얼로그 제출 콜백.
/// submission은 엘리먼트 name → 사용자가 제출한 값의 맵이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogCallback {
    #[serde(rename = "type")]
    pub callback_type: CallbackType,
    pub callback_id: String,
    pub team: Team,
    pub channel: Channel,
    pub user: User,
    pub action_ts: String,
    pub token: String,
    pub response_url: String,
    pub submission: HashMap<String, String>,
}

/// external 셀렉트 입력 콜백.
/// 사용자가 타이핑한 현재 값으로 옵션 목록을 조회하라는 요청이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogSuggestionCallback {
    #[serde(rename = "type")]
    pub callback_type: CallbackType,
    pub token: String,
    pub action_ts: String,
    pub team: Team,
    pub user: User,
    pub channel: Channel,
    /// 입력 중인 엘리먼트의 name
    pub name: String,
    /// 사용자가 현재까지 타이핑한 값
    pub value: String,
    pub callback_id: String,
}

/// 워크스페이스 식별자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub domain: String,
}

/// 채널 식별자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

/// 사용자 식별자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}
