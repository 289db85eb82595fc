//! # chatline-core
//!
//! Chatline Web API 클라이언트의 도메인 모델, 에러 타입, 설정.
//! 네트워크 어댑터 crate(`chatline-network`)가 공유하는 핵심 타입을 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 와이어 데이터 구조체 (serde Serialize/Deserialize)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 클라이언트 설정 구조체

pub mod config;
pub mod error;
pub mod models;
