//! 인증 서비스 모듈
//!
//! 카카오 토큰 전략과 검증 콜백 seam을 제공합니다.
//! 토큰 패스스루 방식으로 이미 발급받은 액세스 토큰을 검증합니다.
//!
//! # Features
//!
//! - 요청(body/query/header)에서 액세스/리프레시 토큰 추출
//! - 카카오 사용자 프로필 조회 및 정규화
//! - 호출자 검증 콜백 기반의 success / fail / error 판정
//!
//! # Examples
//!
//! ```rust,ignore
//! use kakao_token_strategy::services::auth::{
//!     verify_fn, KakaoTokenStrategy, KakaoTokenStrategyOptions,
//! };
//!
//! let strategy = KakaoTokenStrategy::new(
//!     KakaoTokenStrategyOptions::new("your-kakao-app-key"),
//!     verify_fn(|ctx| async move { /* 사용자 조회/생성 */ }),
//! );
//! ```

pub mod kakao_token_strategy;
pub mod verify;

pub use kakao_token_strategy::*;
pub use verify::*;
