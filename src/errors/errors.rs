//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 전략을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! - **ProfileFetch**: 프로필 조회 중 네트워크/프로바이더 에러 (원인 포함)
//! - **MalformedProfile**: 프로필 응답 본문의 JSON 파싱 실패 (파싱 에러 그대로 노출)
//! - **AuthenticationError / ExternalServiceError / InternalError**: 검증 콜백과
//!   핸들러가 사용하는 일반 에러
//!
//! 액세스 토큰 누락은 에러가 아니라 검증 조건이므로 이 타입에 포함되지 않고,
//! fail 시그널([`crate::domain::AuthOutcome::Fail`])로 처리됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use kakao_token_strategy::errors::AppError;
//!
//! async fn verify_user(kakao_id: i64) -> Result<User, AppError> {
//!     user_repo.find_by_kakao_id(kakao_id).await
//!         .map_err(|e| AppError::InternalError(e.to_string()))?
//!         .ok_or_else(|| AppError::AuthenticationError("등록되지 않은 사용자".to_string()))
//! }
//! ```

use thiserror::Error;

use crate::oauth2::client::OAuth2Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 전략에서 발생할 수 있는 에러를 포괄하는 열거형입니다.
/// 핸들러에서 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 프로필 조회 실패 (502 Bad Gateway)
    ///
    /// 프로필 GET 요청의 전송 실패 또는 프로바이더 에러 응답을 감쌉니다.
    /// 표시 메시지는 고정이며, 원인은 `source()`로 접근합니다.
    #[error("Failed to fetch user profile")]
    ProfileFetch(#[source] OAuth2Error),

    /// 프로필 응답 파싱 실패 (502 Bad Gateway)
    ///
    /// 원본 파싱 에러를 감싸지 않고 그대로 전달합니다.
    #[error("{0}")]
    MalformedProfile(#[from] serde_json::Error),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ProfileFetch(_) | AppError::MalformedProfile(_) => StatusCode::BAD_GATEWAY,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use reqwest::StatusCode;
    use std::error::Error;

    #[test]
    fn test_profile_fetch_error_message_is_fixed() {
        let error = AppError::ProfileFetch(OAuth2Error::Provider {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "upstream down".to_string(),
        });

        assert_eq!(error.to_string(), "Failed to fetch user profile");
        // 원인은 source 체인으로 보존됨
        assert!(error.source().unwrap().to_string().contains("upstream down"));
    }

    #[test]
    fn test_malformed_profile_error_is_unwrapped() {
        let parse_error = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let raw_message = parse_error.to_string();

        let error = AppError::MalformedProfile(parse_error);
        assert_eq!(error.to_string(), raw_message);
    }

    #[test]
    fn test_profile_fetch_error_response() {
        let error = AppError::ProfileFetch(OAuth2Error::Provider {
            status: StatusCode::UNAUTHORIZED,
            body: "invalid token".to_string(),
        });
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
