//! 評価結果レコード
//!
//! `supplement` 以外はすべて Option。未設定は JSON で null として出力する
//! 数値項目は整数・小数のどちらも受け、受け取った表記のまま書き出す
//! （skip_serializing_if を付けないことで、全フィールドが常に出力される）。

use common::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// 1 対象分の評価結果
///
/// 生成後は変更しない。未知のキーは無視し、欠けたキーは None のまま。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementResult {
    pub supplement: String,
    pub efficacy: Option<Number>,
    pub safety: Option<Number>,
    pub evidence_strength: Option<Number>,
    pub bioavailability: Option<Number>,
    pub cost_eur_per_day: Option<Number>,
    pub regulatory_status_eu: Option<String>,
    pub novelty_index: Option<Number>,
    pub stack_synergy: Option<Number>,
    pub rapid_onset: Option<Number>,
    pub psychoactive_intensity: Option<Number>,
    pub dosing_elasticity: Option<Number>,
    pub diy_formulation: Option<Number>,
    pub mitochondrial_drive: Option<Number>,
    pub autophagy_trigger: Option<Number>,
    pub hormetic_stress: Option<Number>,
    pub epigenetic_modulation: Option<Number>,
    pub snp_leverage: Option<Number>,
    pub anecdotal_roi: Option<Number>,
    pub forum_buzz: Option<Number>,
    pub key_human_outcomes: Option<Vec<String>>,
    pub primary_mechanisms: Option<Vec<String>>,
    pub contraindications: Option<Vec<Map<String, Value>>>,
    pub confidence: Option<Number>,
    pub citations: Option<Vec<String>>,
}

/// 出力 JSON のキー（宣言順）。プロンプトでモデルに期待する形を伝えるのに使う。
pub const FIELD_NAMES: [&str; 25] = [
    "supplement",
    "efficacy",
    "safety",
    "evidence_strength",
    "bioavailability",
    "cost_eur_per_day",
    "regulatory_status_eu",
    "novelty_index",
    "stack_synergy",
    "rapid_onset",
    "psychoactive_intensity",
    "dosing_elasticity",
    "diy_formulation",
    "mitochondrial_drive",
    "autophagy_trigger",
    "hormetic_stress",
    "epigenetic_modulation",
    "snp_leverage",
    "anecdotal_roi",
    "forum_buzz",
    "key_human_outcomes",
    "primary_mechanisms",
    "contraindications",
    "confidence",
    "citations",
];

impl SupplementResult {
    /// 名前だけのレコード
    pub fn empty(name: &str) -> Self {
        Self {
            supplement: name.to_string(),
            efficacy: None,
            safety: None,
            evidence_strength: None,
            bioavailability: None,
            cost_eur_per_day: None,
            regulatory_status_eu: None,
            novelty_index: None,
            stack_synergy: None,
            rapid_onset: None,
            psychoactive_intensity: None,
            dosing_elasticity: None,
            diy_formulation: None,
            mitochondrial_drive: None,
            autophagy_trigger: None,
            hormetic_stress: None,
            epigenetic_modulation: None,
            snp_leverage: None,
            anecdotal_roi: None,
            forum_buzz: None,
            key_human_outcomes: None,
            primary_mechanisms: None,
            contraindications: None,
            confidence: None,
            citations: None,
        }
    }

    /// モデルが返した JSON からレコードを作る
    ///
    /// `supplement` が無い（または null）なら `requested` を入れる。
    /// オブジェクト以外や型の合わない値は `Error::Json`。
    pub fn from_json(data: Value, requested: &str) -> Result<Self, Error> {
        let mut obj = match data {
            Value::Object(obj) => obj,
            other => {
                return Err(Error::json(format!(
                    "Expected a JSON object for '{}', got {}",
                    requested,
                    json_type_name(&other)
                )))
            }
        };
        if obj.get("supplement").map_or(true, Value::is_null) {
            obj.insert("supplement".to_string(), Value::String(requested.to_string()));
        }
        serde_json::from_value(Value::Object(obj)).map_err(|e| {
            Error::json(format!("Failed to build result for '{}': {}", requested, e))
        })
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_yields_name_only_record() {
        let r = SupplementResult::from_json(json!({}), "Creatine Monohydrate").unwrap();
        assert_eq!(r, SupplementResult::empty("Creatine Monohydrate"));
    }

    #[test]
    fn test_all_fields_serialize_as_null_when_unset() {
        let v = serde_json::to_value(SupplementResult::empty("Creatine Monohydrate")).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), FIELD_NAMES.len());
        assert_eq!(obj["supplement"], "Creatine Monohydrate");
        for key in FIELD_NAMES.iter().skip(1) {
            assert!(obj[*key].is_null(), "{} should be null", key);
        }
    }

    #[test]
    fn test_field_names_match_serialization_order() {
        let s = serde_json::to_string(&SupplementResult::empty("x")).unwrap();
        let mut last = 0;
        for key in FIELD_NAMES {
            let pos = s.find(&format!("\"{}\":", key)).unwrap();
            assert!(pos >= last, "{} out of order", key);
            last = pos;
        }
    }

    #[test]
    fn test_requested_name_is_injected_only_when_missing() {
        let r = SupplementResult::from_json(json!({"efficacy": 8}), "Ashwagandha").unwrap();
        assert_eq!(r.supplement, "Ashwagandha");
        assert_eq!(r.efficacy, Some(Number::from(8)));

        let r = SupplementResult::from_json(json!({"supplement": null}), "Ashwagandha").unwrap();
        assert_eq!(r.supplement, "Ashwagandha");

        let r = SupplementResult::from_json(
            json!({"supplement": "Withania somnifera"}),
            "Ashwagandha",
        )
        .unwrap();
        assert_eq!(r.supplement, "Withania somnifera");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let r = SupplementResult::from_json(json!({"safety": 9, "notes": "extra"}), "Resveratrol")
            .unwrap();
        assert_eq!(r.safety, Some(Number::from(9)));
    }

    #[test]
    fn test_nested_values_are_kept() {
        let r = SupplementResult::from_json(
            json!({
                "key_human_outcomes": ["strength", "power output"],
                "contraindications": [{"condition": "kidney disease", "severity": "high"}],
                "citations": ["PMID:12345"],
                "regulatory_status_eu": "food supplement",
            }),
            "Creatine Monohydrate",
        )
        .unwrap();
        assert_eq!(
            r.key_human_outcomes,
            Some(vec!["strength".to_string(), "power output".to_string()])
        );
        let ci = r.contraindications.unwrap();
        assert_eq!(ci[0]["condition"], "kidney disease");
        assert_eq!(r.regulatory_status_eu.as_deref(), Some("food supplement"));
    }

    #[test]
    fn test_fractional_numbers_are_accepted() {
        let r = SupplementResult::from_json(
            json!({"efficacy": 8, "cost_eur_per_day": 0.35, "confidence": 0.8}),
            "Creatine Monohydrate",
        )
        .unwrap();
        assert_eq!(r.efficacy, Some(Number::from(8)));
        assert_eq!(r.cost_eur_per_day.as_ref().and_then(Number::as_f64), Some(0.35));
        assert_eq!(r.confidence.as_ref().and_then(Number::as_f64), Some(0.8));

        let out = serde_json::to_value(&r).unwrap();
        assert_eq!(out["efficacy"], json!(8));
        assert_eq!(out["cost_eur_per_day"], json!(0.35));
    }

    #[test]
    fn test_wrong_field_type_is_json_error() {
        let err = SupplementResult::from_json(json!({"efficacy": "high"}), "Resveratrol")
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("Resveratrol"));
    }

    #[test]
    fn test_non_object_is_json_error() {
        let err = SupplementResult::from_json(json!([1, 2]), "Resveratrol").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("an array"));
    }
}
