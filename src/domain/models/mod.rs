//! # Domain Models Module
//!
//! 도메인의 비즈니스 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//! 인증 요청/결과 모델과 외부 시스템(OAuth 프로바이더) 통합 모델을 담습니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/     ← 인증 요청 표면(TokenRequest)과 결과(AuthOutcome, Verification)
//! └── oauth/    ← 프로바이더 프로필 정규화 모델(KakaoProfile)
//! ```
//!
//! ## 설계 원칙
//!
//! - **불변성**: 모델은 생성 이후 변경되지 않는 값 객체로 설계합니다
//! - **프레임워크 독립성**: HTTP 프레임워크 타입이 도메인에 스며들지 않습니다
//! - **타입 안전성**: 3-way 결과를 열거형으로 표현하여 누락/중복을 컴파일
//!   타임에 차단합니다

pub mod auth;
pub mod oauth;
