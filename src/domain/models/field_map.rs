//! 동적 타입 필드 맵과 얕은 병합
//!
//! PATCH 요청 본문은 변경할 필드만 담고 있어 전체 스키마로 바로 검증할 수 없습니다.
//! 그래서 본문을 필드 이름 → JSON 값 맵으로 받고, 기존 레코드도 같은 표현으로 바꾼 뒤
//! 병합하고 나서 다시 강타입 `UserData`로 검증합니다.

use serde_json::{Map, Value};

/// 필드 이름에서 동적 타입 값으로의 맵
pub type FieldMap = Map<String, Value>;

/// 얕은 병합
///
/// `base`에서 시작해 `overrides`에 있는 모든 키로 덮어씁니다.
/// `null`을 포함해 값과 무관하게 덮어쓰며, `overrides`에 없는 키는 그대로 유지됩니다.
pub fn merge_fields(mut base: FieldMap, overrides: FieldMap) -> FieldMap {
    for (key, value) in overrides {
        base.insert(key, value);
    }
    base
}
