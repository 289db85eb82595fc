//! Chatline 와이어 데이터 모델.
//!
//! 원격 서비스와 주고받는 JSON 구조체를 정의한다. 필드명과 옵션 필드 생략
//! 규칙은 와이어 계약의 일부다. 모든 모델은 `serde` Serialize/Deserialize를
//! 구현한다.

pub mod callback;
pub mod dialog;
pub mod response;
