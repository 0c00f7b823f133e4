//! # 카카오 사용자 프로필 모델
//!
//! 카카오 사용자 정보 API(`/v1/user/me`)의 응답을 정규화된 프로필로
//! 변환하기 위한 데이터 모델을 정의합니다.
//!
//! ## API 응답 예시
//!
//! ```json
//! {
//!   "id": 123456789,
//!   "properties": {
//!     "nickname": "홍길동",
//!     "profile_image": "http://k.kakaocdn.net/.../profile.jpg",
//!     "thumbnail_image": "http://k.kakaocdn.net/.../thumb.jpg"
//!   }
//! }
//! ```
//!
//! `properties` 객체가 없는 응답은 역직렬화에 실패하며, 전략 수준에서
//! 잘못된 프로필 응답 에러로 처리됩니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 프로필 사진 항목
#[derive(Debug, Clone, Serialize)]
pub struct Photo {
    /// 사진 URL. 카카오 계정에 프로필 사진이 없으면 생략됩니다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// 정규화된 카카오 사용자 프로필
///
/// 프로바이더별 응답 형식 차이를 감추는 공통 형태입니다.
/// 생성 이후 불변이며, 소유권은 검증 콜백으로 이동합니다.
/// 원본 응답은 `raw`(본문 문자열)와 `json`(파싱된 값)으로 보존되므로
/// 정규화에서 빠진 필드가 필요하면 `json`에서 꺼내 쓸 수 있습니다.
///
/// ## 필드 매핑
///
/// | 카카오 응답 | 프로필 필드 |
/// |-------------|-------------|
/// | `id` | `id` |
/// | `properties.nickname` | `display_name` (없으면 빈 문자열) |
/// | `properties.profile_image` | `photos[0].value` |
/// | 본문 전체 | `raw` / `json` |
#[derive(Debug, Clone, Serialize)]
pub struct KakaoProfile {
    /// 프로바이더 식별자. 항상 `"kakao"`입니다.
    pub provider: &'static str,
    /// 카카오 사용자 고유 ID
    pub id: i64,
    /// 사용자 닉네임. `properties.nickname`이 없으면 빈 문자열입니다.
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// 프로필 사진 목록
    pub photos: Vec<Photo>,
    /// 원본 응답 본문
    #[serde(rename = "_raw")]
    pub raw: String,
    /// 파싱된 원본 응답
    #[serde(rename = "_json")]
    pub json: Value,
}

/// 카카오 사용자 정보 API 응답의 역직렬화 형태
#[derive(Debug, Deserialize)]
struct KakaoUserResponse {
    id: i64,
    properties: KakaoUserProperties,
}

#[derive(Debug, Deserialize)]
struct KakaoUserProperties {
    #[serde(default)]
    nickname: String,
    profile_image: Option<String>,
}

impl KakaoProfile {
    /// 원본 응답으로부터 정규화된 프로필을 생성합니다.
    ///
    /// # 인자
    /// * `raw` - 응답 본문 문자열
    /// * `json` - 파싱된 응답 값
    ///
    /// # 반환값
    /// * `Ok(KakaoProfile)` - 정규화된 프로필
    /// * `Err(serde_json::Error)` - 응답이 기대한 형태가 아닌 경우
    ///   (`id` 또는 `properties` 누락 등)
    pub(crate) fn from_response(raw: String, json: Value) -> Result<Self, serde_json::Error> {
        let parsed: KakaoUserResponse = serde_json::from_value(json.clone())?;

        Ok(KakaoProfile {
            provider: "kakao",
            id: parsed.id,
            display_name: parsed.properties.nickname,
            photos: vec![Photo {
                value: parsed.properties.profile_image,
            }],
            raw,
            json,
        })
    }
}
