//! OAuth 2.0 클라이언트 모듈
//!
//! Bearer 인증 GET 요청 capability와 reqwest 기반 구현체를 제공합니다.
//! 전략은 구체 타입이 아닌 [`client::OAuth2Client`] trait에 의존합니다.

pub mod client;

pub use client::*;
