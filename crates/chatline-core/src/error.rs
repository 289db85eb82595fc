//! Chatline 핵심 에러 타입.
//!
//! 네트워크 어댑터 crate는 이 타입을 그대로 반환한다. 재시도/복구는 하지 않고
//! 호출자에게 단일 에러 값으로 전파한다.

use thiserror::Error;

/// 클라이언트 공통 에러.
/// 로컬 인자 검증, 전송 계층, 원격 서비스 응답의 세 갈래를 구분한다.
#[derive(Debug, Error)]
pub enum ChatError {
    /// 잘못된 인자 (네트워크 호출 전에 로컬에서 감지)
    #[error("잘못된 인자: {0}")]
    InvalidArgument(String),

    /// 네트워크 에러 (연결 실패, 타임아웃, 취소, 비정상 상태 코드)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 원격 서비스가 요청을 처리한 뒤 실패를 보고함 (`ok: false`)
    /// 페이로드는 서비스가 내려준 에러 코드 문자열 그대로다.
    #[error("원격 서비스 에러: {0}")]
    Remote(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 인증 실패 (토큰 만료, 자격증명 오류 등)
    #[error("인증 에러: {0}")]
    Auth(String),
}
