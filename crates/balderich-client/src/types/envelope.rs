/*
[INPUT]:  Raw `{code, data}` JSON bodies returned by every endpoint
[OUTPUT]: Payload on success, mapped BalderichError otherwise
[POS]:    Data layer - response envelope decoding
[UPDATE]: When the envelope layout changes
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::http::error::{BalderichError, Result, SUCCESS, map_code_to_error};

/// Wrapper carried by every non-binary response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T = Value> {
    pub code: i32,
    #[serde(default)]
    pub data: T,
}

impl ResponseEnvelope<Value> {
    /// Deserialize `data` into `T`, or fail with the error mapped from `code`
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
        if self.code != SUCCESS {
            warn!(
                code = self.code,
                kind = ?map_code_to_error(self.code),
                "API returned error code"
            );
            return Err(BalderichError::from_code(self.code));
        }
        Ok(serde_json::from_value(self.data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_success_returns_data() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "code": 0,
            "data": {"uid": 1}
        }))
        .unwrap();
        let data: Value = envelope.into_data().unwrap();
        assert_eq!(data, json!({"uid": 1}));
    }

    #[test]
    fn test_error_code_maps_kind() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "code": 1001,
            "data": null
        }))
        .unwrap();
        let err = envelope.into_data::<Value>().unwrap_err();
        match err {
            BalderichError::Api { code, kind } => {
                assert_eq!(code, 1001);
                assert_eq!(kind, ErrorKind::UserNotExist);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_data_defaults_to_null() {
        let envelope: ResponseEnvelope = serde_json::from_str(r#"{"code": 0}"#).unwrap();
        assert_eq!(envelope.data, Value::Null);
        let data: Option<u32> = envelope.into_data().unwrap();
        assert_eq!(data, None);
    }

    #[test]
    fn test_payload_type_mismatch() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "code": 0,
            "data": "not a number"
        }))
        .unwrap();
        let err = envelope.into_data::<u64>().unwrap_err();
        assert!(matches!(err, BalderichError::Serialization(_)));
    }
}
