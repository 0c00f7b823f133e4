//! API 라우트 설정 모듈
//!
//! 카카오 토큰 인증 엔드포인트를 애플리케이션에 등록하는 구성 함수를
//! 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App, HttpServer};
//! use kakao_token_strategy::routes::configure_kakao_routes;
//!
//! let strategy = web::Data::new(strategy);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(strategy.clone())
//!         .configure(configure_kakao_routes::<MyVerify>)
//! })
//! .bind("127.0.0.1:8080")?
//! .run()
//! .await
//! ```

use actix_web::web;
use serde::Serialize;

use crate::handlers;
use crate::services::auth::verify::VerifyCredentials;

/// 카카오 토큰 인증 라우트를 설정합니다
///
/// `POST /auth/kakao/token` 엔드포인트를 등록합니다. 인증을 위한
/// 엔드포인트이므로 Public 접근이 가능합니다.
///
/// 타입 파라미터 `V`는 `web::Data`로 등록된 전략의 검증 콜백 타입과
/// 일치해야 합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```bash
/// # 카카오 토큰 로그인
/// curl -X POST http://localhost:8080/auth/kakao/token \
///   -H "Content-Type: application/json" \
///   -d '{"access_token":"kakao-sdk-access-token"}'
/// ```
pub fn configure_kakao_routes<V>(cfg: &mut web::ServiceConfig)
where
    V: VerifyCredentials + 'static,
    V::User: Serialize,
{
    cfg.service(web::scope("/auth").route(
        "/kakao/token",
        web::post().to(handlers::auth::kakao_token_login::<V>),
    ));
}
