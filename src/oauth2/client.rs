//! OAuth 2.0 클라이언트 구현
//!
//! Bearer 토큰 인증 GET 요청을 수행하는 범용 OAuth 2.0 클라이언트입니다.
//! 전략은 이 모듈의 [`OAuth2Client`] trait에만 의존하므로,
//! 테스트에서는 네트워크 없이 trait 구현체를 주입할 수 있습니다.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// OAuth 2.0 클라이언트 설정
///
/// 카카오는 클라이언트 시크릿을 요구하지 않으므로 `client_secret`은
/// 선택 사항입니다. 시크릿을 요구하는 프로바이더에 재사용할 경우에만
/// `Some`으로 설정합니다.
#[derive(Debug, Clone)]
pub struct OAuth2ClientConfig {
    /// 프로바이더가 발급한 클라이언트 ID (카카오의 경우 REST API 키)
    pub client_id: String,
    /// 클라이언트 시크릿 (카카오는 불필요)
    pub client_secret: Option<String>,
}

/// OAuth 2.0 클라이언트 에러
///
/// 전송 계층 실패와 프로바이더의 비정상 응답을 구분합니다.
#[derive(Error, Debug)]
pub enum OAuth2Error {
    /// 네트워크/전송 계층 에러 (연결 실패, 타임아웃 등)
    #[error("OAuth2 transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 프로바이더가 2xx가 아닌 상태 코드로 응답한 경우
    #[error("OAuth2 provider responded with status {status}: {body}")]
    Provider {
        status: StatusCode,
        body: String,
    },
}

/// Bearer 토큰 인증 GET을 수행하는 OAuth 2.0 클라이언트 capability
///
/// 프로필 조회처럼 액세스 토큰만으로 보호 자원에 접근하는 요청을 추상화합니다.
#[async_trait]
pub trait OAuth2Client: Send + Sync {
    /// 액세스 토큰을 Bearer 자격으로 사용하여 `url`에 GET 요청을 보내고
    /// 응답 본문을 문자열로 반환합니다.
    ///
    /// # 인자
    /// * `url` - 요청 대상 URL
    /// * `access_token` - Bearer 인증에 사용할 액세스 토큰
    ///
    /// # 반환값
    /// * `Ok(String)` - 2xx 응답의 본문
    /// * `Err(OAuth2Error)` - 전송 실패 또는 프로바이더 에러 응답
    async fn get(&self, url: &str, access_token: &str) -> Result<String, OAuth2Error>;
}

/// reqwest 기반 [`OAuth2Client`] 구현체
///
/// 커넥션 풀을 내장한 [`reqwest::Client`]를 보유하므로
/// 전략 생성 시 한 번만 만들어 재사용합니다.
pub struct ReqwestOAuth2Client {
    http: reqwest::Client,
    config: OAuth2ClientConfig,
}

impl ReqwestOAuth2Client {
    /// 새로운 reqwest 기반 클라이언트를 생성합니다.
    pub fn new(config: OAuth2ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// 클라이언트 설정에 대한 참조를 반환합니다.
    pub fn config(&self) -> &OAuth2ClientConfig {
        &self.config
    }
}

#[async_trait]
impl OAuth2Client for ReqwestOAuth2Client {
    async fn get(&self, url: &str, access_token: &str) -> Result<String, OAuth2Error> {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(OAuth2Error::Provider { status, body });
        }

        Ok(body)
    }
}
