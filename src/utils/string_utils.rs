//! # 문자열 처리 유틸리티
//!
//! 프로바이더 프로필 필드 정리와 로그용 토큰 마스킹을 제공합니다.
//!
//! SDK가 돌려주는 이름/사진 필드는 `null`, 빈 문자열, 공백 문자열이
//! 섞여서 들어오는 경우가 있어서 모두 `None`으로 정규화합니다.

use serde::Deserialize;

/// 선택적 문자열을 정리합니다. 공백뿐인 값은 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde용 선택적 문자열 역직렬화 함수
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Profile {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     name: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 액세스 토큰을 로그에 남길 수 있도록 앞 4글자만 남기고 가립니다.
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  Ann  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("Ann".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "\t\n  "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드가 없는 경우 default 사용
        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // 한글 이름
        let result: TestStruct = serde_json::from_str(r#"{"optional_field": " 홍길동 "}"#).unwrap();
        assert_eq!(result.optional_field, Some("홍길동".to_string()));
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("EAAGm0PX4ZCpsBA"), "EAAG****");
        assert_eq!(mask_token("abcd"), "****");
        assert_eq!(mask_token(""), "****");
    }
}
