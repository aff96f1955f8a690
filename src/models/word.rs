// file: src/models/word.rs
// description: wordbook records as returned by the word-list endpoint and as exported
// reference: internal data structures

use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response envelope of `/wordbook/webapi/words`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WordListEnvelope {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
    pub data: WordListData,
}

impl WordListEnvelope {
    /// Page data of a successful response. A non-zero `code` means the
    /// server refused the request even though it answered 200.
    pub fn into_data(self) -> Result<WordListData> {
        match self.code {
            Some(code) if code != 0 => Err(ExportError::Api {
                code,
                message: self.msg.unwrap_or_default(),
            }),
            _ => Ok(self.data),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordListData {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub item_list: Vec<RawWordRecord>,
}

/// One saved word. Only `word` and `trans` are used; the rest is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawWordRecord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub trans: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            meaning: Some(meaning.into()),
        }
    }
}

impl From<RawWordRecord> for WordRecord {
    fn from(raw: RawWordRecord) -> Self {
        Self {
            word: raw.word,
            meaning: raw.trans,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_parsing_keeps_extra_fields() {
        let body = json!({
            "code": 0,
            "msg": "SUCCESS",
            "data": {
                "total": 1,
                "itemList": [
                    {"word": "apple", "trans": "n. 苹果", "phonetic": "ˈæpl", "modifiedTime": 1700000000}
                ]
            }
        });

        let envelope: WordListEnvelope = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.code, Some(0));
        assert_eq!(envelope.data.total, 1);

        let item = &envelope.data.item_list[0];
        assert_eq!(item.word.as_deref(), Some("apple"));
        assert_eq!(item.trans.as_deref(), Some("n. 苹果"));
        assert_eq!(item.extra.get("phonetic"), Some(&json!("ˈæpl")));
    }

    #[test]
    fn test_envelope_missing_fields_default() {
        let envelope: WordListEnvelope = serde_json::from_value(json!({"data": {}})).unwrap();
        assert_eq!(envelope.data.total, 0);
        assert!(envelope.data.item_list.is_empty());
    }

    #[test]
    fn test_envelope_without_data_is_rejected() {
        let body = json!({"code": 2033, "msg": "not login"});
        assert!(serde_json::from_value::<WordListEnvelope>(body).is_err());
        assert!(serde_json::from_value::<WordListEnvelope>(json!({})).is_err());
    }

    #[test]
    fn test_into_data_checks_code() {
        let ok: WordListEnvelope =
            serde_json::from_value(json!({"code": 0, "data": {"total": 3}})).unwrap();
        assert_eq!(ok.into_data().unwrap().total, 3);

        let no_code: WordListEnvelope =
            serde_json::from_value(json!({"data": {"total": 1}})).unwrap();
        assert_eq!(no_code.into_data().unwrap().total, 1);

        let refused: WordListEnvelope = serde_json::from_value(
            json!({"code": 2033, "msg": "not login", "data": {"total": 0}}),
        )
        .unwrap();
        match refused.into_data().unwrap_err() {
            ExportError::Api { code, message } => {
                assert_eq!(code, 2033);
                assert_eq!(message, "not login");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_word_record_omits_absent_fields() {
        let record = WordRecord {
            word: Some("orphan".to_string()),
            meaning: None,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"word":"orphan"}"#
        );
    }
}
