//! 검증 콜백 seam
//!
//! 전략은 프로필 조회까지만 책임지고, "이 카카오 사용자를 우리 서비스의
//! 누구로 볼 것인가"는 호출자가 제공하는 검증 함수가 결정합니다.
//! 이 모듈은 그 검증 함수의 trait와 호출 컨텍스트를 정의합니다.

use std::future::Future;

use async_trait::async_trait;

use crate::domain::models::auth::{TokenRequest, Verification};
use crate::domain::models::oauth::KakaoProfile;
use crate::errors::errors::AppError;

/// 검증 함수에 전달되는 호출 컨텍스트
///
/// 추출된 자격 증명과 정규화된 프로필의 소유권을 검증 함수로 넘깁니다.
/// `request`는 전략 옵션의 `pass_request_to_callback`이 켜진 경우에만
/// 원본 요청의 복사본으로 채워집니다.
#[derive(Debug, Clone)]
pub struct VerifyContext {
    /// 원본 요청 (pass_request_to_callback 활성화 시에만 `Some`)
    pub request: Option<TokenRequest>,
    /// 요청에서 추출한 액세스 토큰
    pub access_token: String,
    /// 요청에서 추출한 리프레시 토큰 (선택)
    pub refresh_token: Option<String>,
    /// 정규화된 카카오 프로필
    pub profile: KakaoProfile,
}

/// 호출자가 제공하는 검증 함수
///
/// 프로필이 확보된 뒤 호출되며, 도메인 사용자 조회/생성과 같은
/// 서비스 고유의 판단을 수행합니다. 반환값은 전략이
/// [`AuthOutcome`](crate::domain::AuthOutcome)으로 번역합니다.
///
/// # 예제
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use kakao_token_strategy::domain::Verification;
/// use kakao_token_strategy::errors::AppError;
/// use kakao_token_strategy::services::auth::{VerifyContext, VerifyCredentials};
///
/// struct FindOrCreateUser;
///
/// #[async_trait]
/// impl VerifyCredentials for FindOrCreateUser {
///     type User = User;
///
///     async fn verify(&self, ctx: VerifyContext) -> Result<Verification<User>, AppError> {
///         let user = user_repo.find_or_create_by_kakao_id(ctx.profile.id).await?;
///         if user.is_banned {
///             return Ok(Verification::Denied {
///                 info: Some(serde_json::json!({ "reason": "banned" })),
///             });
///         }
///         Ok(Verification::Granted { user, info: None })
///     }
/// }
/// ```
#[async_trait]
pub trait VerifyCredentials: Send + Sync {
    /// 검증 성공 시 반환되는 도메인 사용자 타입
    type User: Send;

    /// 자격 증명과 프로필을 검증하고 판정을 반환합니다.
    async fn verify(&self, ctx: VerifyContext) -> Result<Verification<Self::User>, AppError>;
}

/// 비동기 함수/클로저를 [`VerifyCredentials`]로 감싸는 어댑터
///
/// trait를 직접 구현하는 대신 함수 하나로 검증을 표현할 때 사용합니다.
/// [`verify_fn`]으로 생성합니다.
pub struct VerifyFn<F>(F);

/// 비동기 함수/클로저로 검증 콜백을 만듭니다.
///
/// # 예제
///
/// ```rust,ignore
/// use kakao_token_strategy::domain::Verification;
/// use kakao_token_strategy::services::auth::verify_fn;
///
/// let verify = verify_fn(|ctx| async move {
///     Ok(Verification::Granted {
///         user: SessionUser { kakao_id: ctx.profile.id },
///         info: None,
///     })
/// });
/// ```
pub fn verify_fn<F>(f: F) -> VerifyFn<F> {
    VerifyFn(f)
}

#[async_trait]
impl<U, F, Fut> VerifyCredentials for VerifyFn<F>
where
    U: Send + 'static,
    F: Fn(VerifyContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Verification<U>, AppError>> + Send + 'static,
{
    type User = U;

    async fn verify(&self, ctx: VerifyContext) -> Result<Verification<U>, AppError> {
        (self.0)(ctx).await
    }
}
