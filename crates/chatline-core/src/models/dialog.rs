//! 다이얼로그(모달 폼) 스키마.
//!
//! `dialog.open` 요청 봉투와 폼 엘리먼트 정의. 엘리먼트 종류는 원격 서비스가
//! 인식하는 고정 집합이므로 닫힌 enum으로 모델링한다. 알 수 없는 `type` 값은
//! 역직렬화 단계에서 거부된다.
//!
//! 필드 내용의 적법성(max_length 범위, 옵션 100개 제한, options/option_groups
//! 중 하나 필수 등)은 로컬에서 검증하지 않는다. 위반 시 원격 서비스가 에러
//! 응답을 내려준다.

use serde::{Deserialize, Serialize};

/// `dialog.open` 요청 봉투.
/// trigger_id는 원격 서비스가 발급한 단명 토큰으로, 발급 후 3초 안에 소비해야 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogTrigger {
    pub trigger_id: String,
    pub dialog: Dialog,
}

/// 모달 폼 정의.
/// title/callback_id는 필수, elements는 최소 1개 — 위반 여부는 원격 서비스가 판정한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialog {
    pub title: String,
    pub callback_id: String,
    pub elements: Vec<DialogElement>,
    /// 제출 버튼 라벨. 생략 시 서비스 기본값 "Submit"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_label: Option<String>,
    /// 사용자가 취소했을 때 webhook 통지를 받을지 여부. 기본 false
    #[serde(default, skip_serializing_if = "is_false")]
    pub notify_on_cancel: bool,
}

/// 폼 엘리먼트 — `type` 판별자로 구분되는 닫힌 집합
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DialogElement {
    /// 한 줄 텍스트 입력
    Text(TextElement),
    /// 여러 줄 텍스트 입력
    Textarea(TextElement),
    /// 드롭다운 선택
    Select(SelectElement),
}

/// 텍스트 계열 엘리먼트 (`text` / `textarea` 공용 필드 집합)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub label: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// 입력 생략 허용 여부. 기본 false
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    /// 미리 채워 둘 값
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    /// 입력란 아래 표시되는 안내 문구
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<TextSubtype>,
}

/// 텍스트 입력 서브타입 — 클라이언트 측 입력기/검증 힌트
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSubtype {
    Email,
    Number,
    Tel,
    Url,
}

/// 선택 엘리먼트
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectElement {
    pub label: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    /// 미리 선택해 둘 옵션의 value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// 동적 옵션 소스. `external`이면 suggestion 콜백으로 옵션을 조회한다
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,
    /// `data_source: external`일 때 초기 선택 상태
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_options: Vec<DialogElementOption>,
    /// 정적 옵션 목록. options/option_groups 중 하나 필수, 최대 100개
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<DialogElementOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_groups: Vec<DialogOptionGroup>,
}

/// 옵션 동적 소스 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Users,
    Channels,
    Conversations,
    External,
}

/// 선택 옵션 — 표시 라벨과 제출 값의 쌍
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogElementOption {
    pub label: String,
    pub value: String,
}

/// 라벨이 붙은 옵션 묶음
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogOptionGroup {
    pub label: String,
    pub options: Vec<DialogElementOption>,
}

fn is_false(v: &bool) -> bool {
    !*v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dialog() -> Dialog {
        Dialog {
            title: "휴가 신청".to_string(),
            callback_id: "vacation_request".to_string(),
            elements: vec![
                DialogElement::Text(TextElement {
                    label: "사유".to_string(),
                    name: "reason".to_string(),
                    max_length: Some(200),
                    hint: Some("간단히 적어주세요".to_string()),
                    ..TextElement::default()
                }),
                DialogElement::Select(SelectElement {
                    label: "기간".to_string(),
                    name: "duration".to_string(),
                    options: vec![
                        DialogElementOption {
                            label: "반차".to_string(),
                            value: "half".to_string(),
                        },
                        DialogElementOption {
                            label: "연차".to_string(),
                            value: "full".to_string(),
                        },
                    ],
                    ..SelectElement::default()
                }),
            ],
            submit_label: None,
            notify_on_cancel: false,
        }
    }

    #[test]
    fn trigger_envelope_roundtrip() {
        let trigger = DialogTrigger {
            trigger_id: "13345224609.738474920.8088930838d88f008e0".to_string(),
            dialog: sample_dialog(),
        };

        let json = serde_json::to_string(&trigger).unwrap();
        let decoded: DialogTrigger = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, trigger);
    }

    #[test]
    fn zero_value_optionals_are_omitted() {
        let json = serde_json::to_value(sample_dialog()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("submit_label"));
        assert!(!obj.contains_key("notify_on_cancel"));

        // 텍스트 엘리먼트에서도 미설정 옵션 필드는 생략된다
        let text = &json["elements"][0];
        assert!(text.get("placeholder").is_none());
        assert!(text.get("optional").is_none());
        assert_eq!(text["max_length"], 200);
    }

    #[test]
    fn populated_optionals_are_kept() {
        let mut dialog = sample_dialog();
        dialog.submit_label = Some("신청".to_string());
        dialog.notify_on_cancel = true;

        let json = serde_json::to_value(&dialog).unwrap();
        assert_eq!(json["submit_label"], "신청");
        assert_eq!(json["notify_on_cancel"], true);
    }

    #[test]
    fn element_type_tags_on_the_wire() {
        let json = serde_json::to_value(sample_dialog()).unwrap();
        assert_eq!(json["elements"][0]["type"], "text");
        assert_eq!(json["elements"][1]["type"], "select");

        let textarea = DialogElement::Textarea(TextElement {
            label: "본문".to_string(),
            name: "body".to_string(),
            ..TextElement::default()
        });
        let json = serde_json::to_value(&textarea).unwrap();
        assert_eq!(json["type"], "textarea");
    }

    #[test]
    fn subtype_and_data_source_wire_values() {
        let text = TextElement {
            label: "이메일".to_string(),
            name: "email".to_string(),
            subtype: Some(TextSubtype::Email),
            ..TextElement::default()
        };
        assert_eq!(serde_json::to_value(&text).unwrap()["subtype"], "email");

        let select = SelectElement {
            label: "담당자".to_string(),
            name: "assignee".to_string(),
            data_source: Some(DataSource::Users),
            ..SelectElement::default()
        };
        assert_eq!(serde_json::to_value(&select).unwrap()["data_source"], "users");
    }

    #[test]
    fn unknown_element_kind_is_rejected() {
        let json = r#"{"type":"datepicker","label":"날짜","name":"date"}"#;
        let result: Result<DialogElement, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn option_groups_nest_options() {
        let select = SelectElement {
            label: "메뉴".to_string(),
            name: "menu".to_string(),
            option_groups: vec![DialogOptionGroup {
                label: "한식".to_string(),
                options: vec![DialogElementOption {
                    label: "비빔밥".to_string(),
                    value: "bibimbap".to_string(),
                }],
            }],
            ..SelectElement::default()
        };

        let json = serde_json::to_value(&select).unwrap();
        assert_eq!(json["option_groups"][0]["options"][0]["value"], "bibimbap");
        assert!(json.get("options").is_none());
    }
}
