//! # 카카오 토큰 인증 전략
//!
//! 이미 발급받은 카카오 액세스 토큰을 검증하는 토큰 패스스루 전략입니다.
//! 모바일 앱이나 SPA가 카카오 SDK로 로그인하여 직접 획득한 토큰을
//! 백엔드에 전달하면, 백엔드는 리다이렉트 플로우 없이 그 토큰만으로
//! 사용자를 인증합니다.
//!
//! ## 토큰 패스스루 플로우
//!
//! ```text
//! ┌─────────────┐                  ┌─────────────────┐                ┌─────────────┐
//! │  클라이언트   │                  │   우리 서버      │                │  Kakao API  │
//! └─────────────┘                  └─────────────────┘                └─────────────┘
//!        │                                  │                               │
//!        │ 1. 카카오 SDK 로그인              │                               │
//!        │    (access_token 획득)           │                               │
//!        │                                  │                               │
//!        │ 2. POST /auth/kakao/token        │                               │
//!        │    { access_token }              │                               │
//!        ├─────────────────────────────────►│                               │
//!        │                                  │ 3. body/query/header에서      │
//!        │                                  │    토큰 추출                   │
//!        │                                  │                               │
//!        │                                  │ 4. GET /v1/user/me            │
//!        │                                  │    Authorization: Bearer      │
//!        │                                  ├──────────────────────────────►│
//!        │                                  │ 5. 사용자 프로필 응답          │
//!        │                                  │◄──────────────────────────────┤
//!        │                                  │ 6. 프로필 정규화 후            │
//!        │                                  │    검증 콜백 호출              │
//!        │ 7. success / fail / error        │                               │
//!        │◄─────────────────────────────────┤                               │
//! ```
//!
//! ## Passport.js와의 비교
//!
//! | Passport.js | 이 모듈 |
//! |-------------|---------|
//! | `new Strategy(options, verify)` | `KakaoTokenStrategy::new(options, verify)` |
//! | `strategy.authenticate(req)` | `strategy.authenticate(&request).await` |
//! | `this.success/fail/error` | `AuthOutcome::{Success, Fail, Error}` |
//! | `userProfile(accessToken, done)` | `user_profile(access_token).await` |
//! | `passReqToCallback` | `options.pass_request_to_callback` |
//!
//! ## 보안 특징
//!
//! - 액세스 토큰 누락 시 네트워크 호출 없이 즉시 거절합니다
//! - 프로필 조회는 요청당 정확히 한 번이며, 재시도하지 않습니다
//! - 카카오는 클라이언트 시크릿을 요구하지 않으므로 시크릿 없이 동작합니다

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::config::kakao_config::{
    KAKAO_AUTHORIZATION_URL, KAKAO_PROFILE_URL, KAKAO_SCOPE_SEPARATOR, KAKAO_TOKEN_URL,
    KakaoOAuthConfig,
};
use crate::core::strategy::Strategy;
use crate::domain::models::auth::{AuthOutcome, TokenRequest, Verification};
use crate::domain::models::oauth::KakaoProfile;
use crate::errors::errors::{AppError, AppResult};
use crate::oauth2::client::{OAuth2Client, OAuth2ClientConfig, ReqwestOAuth2Client};
use crate::services::auth::verify::{VerifyContext, VerifyCredentials};

/// 호스트 파이프라인 등록에 사용되는 전략 이름
pub const STRATEGY_NAME: &str = "kakao-token";

/// 카카오 토큰 전략 설정
///
/// 엔드포인트 URL들은 카카오 고정값이 기본이며, 테스트나 프록시 환경에서만
/// 변경합니다. `authorization_url`과 `token_url`은 전체 리다이렉트 플로우에
/// 내장될 때를 위한 값으로, 토큰 패스스루 경로에서는 사용되지 않습니다.
///
/// | 필드 | 기본값 |
/// |------|--------|
/// | `authorization_url` | `https://kauth.kakao.com/oauth/authorize` |
/// | `token_url` | `https://kauth.kakao.com/oauth/token` |
/// | `profile_url` | `https://kapi.kakao.com/v1/user/me` |
/// | `scope_separator` | `,` |
/// | `access_token_field` | `access_token` |
/// | `refresh_token_field` | `refresh_token` |
/// | `pass_request_to_callback` | `false` |
#[derive(Debug, Clone)]
pub struct KakaoTokenStrategyOptions {
    /// 카카오 애플리케이션의 REST API 키 (App Key)
    pub client_id: String,
    /// 클라이언트 시크릿. 카카오는 요구하지 않으므로 기본값은 `None`입니다.
    pub client_secret: Option<String>,
    /// 인증(authorize) 엔드포인트 (토큰 패스스루 경로에서는 미사용)
    pub authorization_url: String,
    /// 토큰 교환 엔드포인트 (토큰 패스스루 경로에서는 미사용)
    pub token_url: String,
    /// 사용자 프로필 조회 엔드포인트
    pub profile_url: String,
    /// OAuth 스코프 구분자
    pub scope_separator: String,
    /// 요청에서 액세스 토큰을 찾을 필드 이름
    pub access_token_field: String,
    /// 요청에서 리프레시 토큰을 찾을 필드 이름
    pub refresh_token_field: String,
    /// 검증 콜백에 원본 요청을 전달할지 여부
    pub pass_request_to_callback: bool,
}

impl Default for KakaoTokenStrategyOptions {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: None,
            authorization_url: KAKAO_AUTHORIZATION_URL.to_string(),
            token_url: KAKAO_TOKEN_URL.to_string(),
            profile_url: KAKAO_PROFILE_URL.to_string(),
            scope_separator: KAKAO_SCOPE_SEPARATOR.to_string(),
            access_token_field: "access_token".to_string(),
            refresh_token_field: "refresh_token".to_string(),
            pass_request_to_callback: false,
        }
    }
}

impl KakaoTokenStrategyOptions {
    /// 앱 키만 지정하고 나머지는 기본값을 사용하는 옵션을 생성합니다.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// 환경 변수(`KAKAO_*`)에서 설정을 읽어 옵션을 구성합니다.
    ///
    /// # Panics
    ///
    /// `KAKAO_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn from_env() -> Self {
        Self {
            client_id: KakaoOAuthConfig::client_id(),
            authorization_url: KakaoOAuthConfig::authorization_url(),
            token_url: KakaoOAuthConfig::token_url(),
            profile_url: KakaoOAuthConfig::profile_url(),
            ..Self::default()
        }
    }
}

/// 카카오 토큰 인증 전략
///
/// 요청에서 액세스 토큰을 추출하고, 카카오 프로필을 조회하여 정규화한 뒤,
/// 검증 콜백의 판정을 3-way 결과로 번역합니다.
///
/// 설정은 생성 이후 읽기 전용이므로 전략 인스턴스는 동시 요청 간에
/// 안전하게 공유됩니다 (actix-web `web::Data`로 등록).
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use kakao_token_strategy::services::auth::{
///     verify_fn, KakaoTokenStrategy, KakaoTokenStrategyOptions,
/// };
/// use kakao_token_strategy::domain::{AuthOutcome, Verification};
///
/// let strategy = KakaoTokenStrategy::new(
///     KakaoTokenStrategyOptions::new("your-kakao-app-key"),
///     verify_fn(|ctx| async move {
///         let user = user_service.find_or_create(ctx.profile.id).await?;
///         Ok(Verification::Granted { user, info: None })
///     }),
/// );
///
/// match strategy.authenticate(&request).await {
///     AuthOutcome::Success { user, .. } => { /* 세션/토큰 발급 */ }
///     AuthOutcome::Fail { info } => { /* 401 응답 */ }
///     AuthOutcome::Error(e) => { /* 에러 응답 */ }
/// }
/// ```
pub struct KakaoTokenStrategy<V> {
    options: KakaoTokenStrategyOptions,
    oauth2: Arc<dyn OAuth2Client>,
    verify: V,
}

impl<V> KakaoTokenStrategy<V>
where
    V: VerifyCredentials,
{
    /// reqwest 기반 OAuth2 클라이언트로 전략을 생성합니다.
    ///
    /// # 인자
    ///
    /// * `options` - 전략 설정
    /// * `verify` - 호출자가 제공하는 검증 함수
    pub fn new(options: KakaoTokenStrategyOptions, verify: V) -> Self {
        let client_config = OAuth2ClientConfig {
            client_id: options.client_id.clone(),
            client_secret: options.client_secret.clone(),
        };

        Self {
            oauth2: Arc::new(ReqwestOAuth2Client::new(client_config)),
            options,
            verify,
        }
    }

    /// OAuth2 클라이언트를 직접 주입하여 전략을 생성합니다.
    ///
    /// 테스트에서 네트워크 없이 전략을 검증하거나,
    /// 공유 클라이언트를 재사용할 때 사용합니다.
    pub fn with_client(
        options: KakaoTokenStrategyOptions,
        verify: V,
        oauth2: Arc<dyn OAuth2Client>,
    ) -> Self {
        Self {
            options,
            oauth2,
            verify,
        }
    }

    /// 전략 이름을 반환합니다.
    pub fn name(&self) -> &'static str {
        STRATEGY_NAME
    }

    /// 전략 설정에 대한 참조를 반환합니다.
    pub fn options(&self) -> &KakaoTokenStrategyOptions {
        &self.options
    }

    /// 요청을 인증하고 정확히 하나의 결과를 반환합니다.
    ///
    /// # 처리 단계
    ///
    /// 1. body > query > header 순서로 액세스/리프레시 토큰 추출
    /// 2. 액세스 토큰이 없으면 네트워크 호출 없이 fail
    /// 3. 카카오 프로필 조회 (실패 시 error)
    /// 4. 검증 콜백 호출 후 판정을 결과로 번역
    pub async fn authenticate(&self, request: &TokenRequest) -> AuthOutcome<V::User> {
        self.run_authenticate(request).await
    }

    async fn run_authenticate(&self, request: &TokenRequest) -> AuthOutcome<V::User> {
        let access_token = request.credential(&self.options.access_token_field);
        let refresh_token = request.credential(&self.options.refresh_token_field);

        let Some(access_token) = access_token else {
            log::warn!(
                "요청에서 액세스 토큰을 찾을 수 없습니다 (필드: {})",
                self.options.access_token_field
            );
            return AuthOutcome::Fail {
                info: Some(json!({ "message": "You should provide access_token" })),
            };
        };

        let profile = match self.user_profile(&access_token).await {
            Ok(profile) => profile,
            Err(e) => {
                log::warn!("카카오 프로필 조회 실패: {}", e);
                return AuthOutcome::Error(e);
            }
        };

        let ctx = VerifyContext {
            request: self
                .options
                .pass_request_to_callback
                .then(|| request.clone()),
            access_token,
            refresh_token,
            profile,
        };

        match self.verify.verify(ctx).await {
            Err(e) => AuthOutcome::Error(e),
            Ok(Verification::Denied { info }) => AuthOutcome::Fail { info },
            Ok(Verification::Granted { user, info }) => {
                log::debug!("카카오 토큰 인증 성공");
                AuthOutcome::Success { user, info }
            }
        }
    }

    /// 액세스 토큰으로 카카오 사용자 프로필을 조회합니다.
    ///
    /// 전체 인증 플로우와 독립적으로 재사용할 수 있도록 공개되어 있습니다.
    ///
    /// # 인자
    ///
    /// * `access_token` - Bearer 인증에 사용할 액세스 토큰
    ///
    /// # 반환값
    ///
    /// * `Ok(KakaoProfile)` - 정규화된 프로필
    /// * `Err(AppError::ProfileFetch)` - 전송/프로바이더 에러 (원인 포함)
    /// * `Err(AppError::MalformedProfile)` - 응답 본문 파싱 실패
    pub async fn user_profile(&self, access_token: &str) -> AppResult<KakaoProfile> {
        let body = self
            .oauth2
            .get(&self.options.profile_url, access_token)
            .await
            .map_err(AppError::ProfileFetch)?;

        let parsed: serde_json::Value = serde_json::from_str(&body)?;
        let profile = KakaoProfile::from_response(body, parsed)?;

        log::debug!("카카오 프로필 조회 성공: id={}", profile.id);
        Ok(profile)
    }
}

#[async_trait]
impl<V> Strategy for KakaoTokenStrategy<V>
where
    V: VerifyCredentials,
{
    type User = V::User;

    fn name(&self) -> &'static str {
        STRATEGY_NAME
    }

    async fn authenticate(&self, request: &TokenRequest) -> AuthOutcome<V::User> {
        self.run_authenticate(request).await
    }
}
