//! 인증 결과 모델
//!
//! 전략 호출 한 번이 만들어내는 종결 시그널과,
//! 검증 콜백이 내리는 판정을 값 객체로 표현합니다.

use serde_json::Value;

use crate::errors::errors::AppError;

/// 인증 호출의 종결 시그널
///
/// 요청당 정확히 하나의 변형만 생성됩니다. 반환값이므로
/// success/fail/error가 중복 발생할 수 없습니다.
///
/// - `Fail`은 예상된 거절(자격 증명 누락/검증 거부)이고,
/// - `Error`는 예상치 못한 결함(네트워크/파싱 실패, 콜백 예외)입니다.
#[derive(Debug)]
pub enum AuthOutcome<U> {
    /// 인증 성공. 검증 콜백이 반환한 사용자와 부가 정보를 담습니다.
    Success {
        user: U,
        info: Option<Value>,
    },
    /// 예상된 거절. 거절 사유 등 부가 정보를 담습니다.
    Fail {
        info: Option<Value>,
    },
    /// 예상치 못한 결함.
    Error(AppError),
}

impl<U> AuthOutcome<U> {
    /// Success 변형 여부
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success { .. })
    }

    /// Fail 변형 여부
    pub fn is_fail(&self) -> bool {
        matches!(self, AuthOutcome::Fail { .. })
    }

    /// Error 변형 여부
    pub fn is_error(&self) -> bool {
        matches!(self, AuthOutcome::Error(_))
    }
}

/// 검증 콜백의 판정
///
/// 콜백은 `Result<Verification<U>, AppError>`를 반환하며, 전략이 이를
/// [`AuthOutcome`]으로 번역합니다:
/// `Err` → `Error`, `Denied` → `Fail`, `Granted` → `Success`.
#[derive(Debug)]
pub enum Verification<U> {
    /// 자격 증명이 유효함. 도메인 사용자와 부가 정보를 전달합니다.
    Granted {
        user: U,
        info: Option<Value>,
    },
    /// 도메인 수준의 거절 (예: 차단된 사용자).
    Denied {
        info: Option<Value>,
    },
}
