//! 인증 전략 추상화
//!
//! 호스트 파이프라인이 이름으로 등록하고 요청마다 균일하게 호출하는
//! 플러그형 인증 방식(strategy)의 seam입니다.
//! 각 전략은 요청을 받아 정확히 하나의 [`AuthOutcome`]을 반환합니다.

use async_trait::async_trait;

use crate::domain::models::auth::{AuthOutcome, TokenRequest};

/// 플러그형 인증 전략 trait
///
/// 호스트 파이프라인은 이 trait를 통해 전략을 이름으로 구분하고,
/// 요청마다 `authenticate`를 호출하여 3-way 결과를 받습니다.
/// 결과가 반환값이므로 success/fail/error 중 정확히 하나만 발생한다는
/// 계약이 타입 수준에서 보장됩니다.
///
/// # 예제
///
/// ```rust,ignore
/// use kakao_token_strategy::core::Strategy;
/// use kakao_token_strategy::domain::AuthOutcome;
///
/// async fn dispatch<S: Strategy>(strategy: &S, request: &TokenRequest) {
///     match strategy.authenticate(request).await {
///         AuthOutcome::Success { user, .. } => { /* 세션 발급 */ }
///         AuthOutcome::Fail { info } => { /* 401 응답 */ }
///         AuthOutcome::Error(e) => { /* 에러 응답 */ }
///     }
/// }
/// ```
#[async_trait]
pub trait Strategy: Send + Sync {
    /// 검증 콜백이 반환하는 사용자 타입
    type User: Send;

    /// 파이프라인 등록에 사용되는 전략 이름
    fn name(&self) -> &'static str;

    /// 요청을 인증하고 정확히 하나의 결과를 반환합니다.
    async fn authenticate(&self, request: &TokenRequest) -> AuthOutcome<Self::User>;
}
