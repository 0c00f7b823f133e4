//! 카카오 토큰 인증 전략
//!
//! 이미 발급받은 카카오 OAuth 2.0 액세스 토큰을 검증하고,
//! 카카오 사용자 프로필을 정규화된 형태로 변환하는 인증 어댑터입니다.
//! 모바일 앱이나 프론트엔드가 카카오 SDK로 직접 획득한 토큰을
//! 백엔드에 전달하는 토큰 패스스루(token passthrough) 방식을 지원합니다.
//!
//! # Features
//!
//! - **토큰 추출**: 요청의 body/query/header에서 액세스/리프레시 토큰 추출
//! - **프로필 조회**: Bearer 인증 GET 한 번으로 카카오 사용자 프로필 획득
//! - **프로필 정규화**: 카카오 응답을 공통 프로필 형태로 변환
//! - **검증 콜백**: 호출자가 제공하는 검증 함수에 결과 위임
//! - **3-way 시그널**: success / fail / error 중 정확히 하나로 종결
//! - **Actix-web 통합**: 핸들러와 라우트 구성 함수 제공
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐
//! │    HTTP Routes     │ ← /auth/kakao/token
//! └────────────────────┘
//!           │
//!           ▼
//! ┌────────────────────┐
//! │      Handlers      │ ← TokenRequest 조립, 결과 → HTTP 매핑
//! └────────────────────┘
//!           │
//!           ▼
//! ┌────────────────────┐
//! │ KakaoTokenStrategy │ ← 토큰 추출 → 프로필 조회 → 검증
//! └────────────────────┘
//!           │
//!           ▼
//! ┌────────────────────┐
//! │    OAuth2Client    │ ← Bearer GET (reqwest)
//! └────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use kakao_token_strategy::services::auth::{
//!     verify_fn, KakaoTokenStrategy, KakaoTokenStrategyOptions,
//! };
//! use kakao_token_strategy::domain::Verification;
//!
//! let strategy = KakaoTokenStrategy::new(
//!     KakaoTokenStrategyOptions::new("your-kakao-app-key"),
//!     verify_fn(|ctx| async move {
//!         let user = find_or_create_user(ctx.profile.id).await?;
//!         Ok(Verification::Granted { user, info: None })
//!     }),
//! );
//!
//! let outcome = strategy.authenticate(&request).await;
//! ```

pub mod core;
pub mod config;
pub mod oauth2;
pub mod domain;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
