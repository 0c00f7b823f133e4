//! Authentication HTTP Handlers
//!
//! 카카오 토큰 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 호스트 파이프라인 역할을 수행하며, 전략의 3-way 결과를 HTTP 응답으로
//! 매핑합니다.
//!
//! # Outcome → HTTP 매핑
//!
//! | 결과 | HTTP 응답 |
//! |------|-----------|
//! | `Success { user, info }` | `200 OK` + `{ "user": ..., "info": ... }` |
//! | `Fail { info }` | `401 Unauthorized` + info JSON |
//! | `Error(e)` | `AppError`의 `ResponseError` 매핑 (502/500 등) |

use std::collections::HashMap;

use actix_web::{Either, HttpRequest, HttpResponse, web};
use serde::Serialize;
use serde_json::json;

use crate::domain::models::auth::{AuthOutcome, TokenRequest};
use crate::errors::errors::AppError;
use crate::services::auth::kakao_token_strategy::KakaoTokenStrategy;
use crate::services::auth::verify::VerifyCredentials;

/// JSON 또는 urlencoded form 본문을 문자열 맵으로 받는 extractor
type BodyParams = Either<web::Json<HashMap<String, String>>, web::Form<HashMap<String, String>>>;

/// 카카오 토큰 로그인 핸들러
///
/// 클라이언트가 카카오 SDK로 직접 획득한 액세스 토큰을 받아
/// 전략으로 인증을 수행합니다. 토큰은 JSON/form 본문, 쿼리 스트링,
/// 요청 헤더 어디에 있어도 추출됩니다 (body > query > header 우선순위).
///
/// 전략 인스턴스는 `web::Data<KakaoTokenStrategy<V>>`로 등록되어 있어야
/// 합니다.
///
/// # Endpoint
/// `POST /auth/kakao/token`
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/auth/kakao/token \
///   -H "Content-Type: application/json" \
///   -d '{"access_token":"kakao-sdk-access-token"}'
/// ```
pub async fn kakao_token_login<V>(
    strategy: web::Data<KakaoTokenStrategy<V>>,
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    body: Option<BodyParams>,
) -> Result<HttpResponse, AppError>
where
    V: VerifyCredentials + 'static,
    V::User: Serialize,
{
    let body_params = body.map(|either| match either {
        Either::Left(json_body) => json_body.into_inner(),
        Either::Right(form_body) => form_body.into_inner(),
    });

    // actix의 HeaderName은 소문자로 정규화되어 있음
    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    let mut token_request = TokenRequest::new()
        .with_query(query.into_inner())
        .with_headers(headers);
    if let Some(body_params) = body_params {
        token_request = token_request.with_body(body_params);
    }

    match strategy.authenticate(&token_request).await {
        AuthOutcome::Success { user, info } => {
            log::info!("카카오 토큰 로그인 성공");
            Ok(HttpResponse::Ok().json(json!({ "user": user, "info": info })))
        }
        AuthOutcome::Fail { info } => {
            log::warn!("카카오 토큰 로그인 거부됨");
            Ok(HttpResponse::Unauthorized()
                .json(info.unwrap_or_else(|| json!({ "message": "Unauthorized" }))))
        }
        AuthOutcome::Error(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{App, test};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::domain::models::auth::Verification;
    use crate::oauth2::client::{OAuth2Client, OAuth2Error};
    use crate::routes::configure_kakao_routes;
    use crate::services::auth::kakao_token_strategy::KakaoTokenStrategyOptions;
    use crate::services::auth::verify::VerifyContext;

    const PROFILE_BODY: &str =
        r#"{"id": 123, "properties": {"nickname": "Alice", "profile_image": "http://x/img.png"}}"#;

    struct StaticProfileClient;

    #[async_trait]
    impl OAuth2Client for StaticProfileClient {
        async fn get(&self, _url: &str, _access_token: &str) -> Result<String, OAuth2Error> {
            Ok(PROFILE_BODY.to_string())
        }
    }

    #[derive(Serialize)]
    struct StubUser {
        kakao_id: i64,
    }

    struct GrantStub;

    #[async_trait]
    impl VerifyCredentials for GrantStub {
        type User = StubUser;

        async fn verify(
            &self,
            ctx: VerifyContext,
        ) -> Result<Verification<StubUser>, AppError> {
            Ok(Verification::Granted {
                user: StubUser {
                    kakao_id: ctx.profile.id,
                },
                info: None,
            })
        }
    }

    fn stub_strategy() -> KakaoTokenStrategy<GrantStub> {
        KakaoTokenStrategy::with_client(
            KakaoTokenStrategyOptions::default(),
            GrantStub,
            Arc::new(StaticProfileClient),
        )
    }

    #[actix_web::test]
    async fn test_missing_token_returns_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(stub_strategy()))
                .configure(configure_kakao_routes::<GrantStub>),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/auth/kakao/token")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["message"], "You should provide access_token");
    }

    #[actix_web::test]
    async fn test_json_body_token_logs_in() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(stub_strategy()))
                .configure(configure_kakao_routes::<GrantStub>),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/auth/kakao/token")
            .set_json(json!({ "access_token": "kakao-token" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["user"]["kakao_id"], 123);
    }

    #[actix_web::test]
    async fn test_query_token_logs_in() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(stub_strategy()))
                .configure(configure_kakao_routes::<GrantStub>),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/auth/kakao/token?access_token=kakao-token")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_header_token_logs_in() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(stub_strategy()))
                .configure(configure_kakao_routes::<GrantStub>),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/auth/kakao/token")
            .insert_header(("access_token", "kakao-token"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    }
}
