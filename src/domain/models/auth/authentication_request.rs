//! 인증 요청 모델
//!
//! 전략이 읽는 요청 표면입니다. HTTP 프레임워크에 의존하지 않도록
//! body/query/header를 문자열 맵으로만 노출합니다.

use std::collections::HashMap;

/// 토큰 추출 대상이 되는 요청의 불투명한 표현
///
/// body, query, header 각각은 존재하지 않을 수 있으며(`None`),
/// 없는 컨테이너는 조회 시 조용히 건너뜁니다.
/// 헤더 이름은 HTTP 관례에 따라 소문자로 저장된 것으로 간주합니다.
///
/// # 예제
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use kakao_token_strategy::domain::TokenRequest;
///
/// let request = TokenRequest::new()
///     .with_query(HashMap::from([("access_token".to_string(), "abc".to_string())]));
///
/// assert_eq!(request.credential("access_token"), Some("abc".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenRequest {
    body: Option<HashMap<String, String>>,
    query: Option<HashMap<String, String>>,
    headers: Option<HashMap<String, String>>,
}

impl TokenRequest {
    /// 모든 컨테이너가 비어 있는 요청을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// body 파라미터 맵을 설정합니다.
    pub fn with_body(mut self, body: HashMap<String, String>) -> Self {
        self.body = Some(body);
        self
    }

    /// query 파라미터 맵을 설정합니다.
    pub fn with_query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// 헤더 맵을 설정합니다. 키는 소문자여야 합니다.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// body에서 파라미터를 조회합니다.
    pub fn body_param(&self, name: &str) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }

    /// query에서 파라미터를 조회합니다.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }

    /// 헤더를 조회합니다. 이름은 소문자로 정규화하여 비교합니다.
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .as_ref()
            .and_then(|headers| headers.get(&name))
            .map(String::as_str)
    }

    /// body > query > header 우선순위로 자격 증명 필드를 조회합니다.
    ///
    /// 각 위치에서 빈 문자열은 값이 없는 것으로 취급하여 다음 위치로
    /// 넘어갑니다. 우선순위는 정책적 선택이며, 한 곳에서만 관리하기 위해
    /// 이 메서드에 모아 두었습니다.
    pub fn credential(&self, field: &str) -> Option<String> {
        self.body_param(field)
            .filter(|value| !value.is_empty())
            .or_else(|| self.query_param(field).filter(|value| !value.is_empty()))
            .or_else(|| self.header(field).filter(|value| !value.is_empty()))
            .map(str::to_string)
    }
}
