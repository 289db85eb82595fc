//! # chatline-network
//!
//! Chatline Web API HTTP 어댑터.
//!
//! - [`transport`] — `HttpTransport` 포트와 reqwest 구현
//! - [`client`] — API 메서드 래퍼 (`dialog.open`)

pub mod client;
pub mod transport;

pub use client::ChatClient;
pub use transport::{HttpTransport, ReqwestTransport};
