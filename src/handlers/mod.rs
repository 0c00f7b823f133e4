//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 호스트 인증 파이프라인 역할을 수행하며, 요청에서 [`TokenRequest`]를
//! 조립하고 전략의 결과를 HTTP 응답으로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Mobile App, SPA)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - TokenRequest 조립          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   KakaoTokenStrategy - 토큰 추출/프로필/검증       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   OAuth2Client - Bearer GET                     ← Integration Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 전략에 프레임워크 타입을 노출하지 않습니다. actix의
//! `HttpRequest`는 핸들러 안에서 문자열 맵으로 변환되어 전략에 전달됩니다.
//!
//! [`TokenRequest`]: crate::domain::TokenRequest

pub mod auth;
