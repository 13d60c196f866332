//! ジャガイモ病害カタログ
//!
//! プロセス起動時に一度だけ構築される固定データ。実行中の追加・削除・
//! 編集は一切ない。symptoms / solutions / preventive_measures の並び順は
//! 表示順そのものなので並べ替えてはいけない。

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// 病害レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRecord {
    /// 病名（カタログ内で一意）
    pub name: String,
    pub description: String,
    pub symptoms: Vec<String>,
    /// 深刻度 0..=100（表示専用スコア）
    pub severity: u8,
    pub yield_impact: String,
    pub spread_rate: String,
    pub solutions: Vec<String>,
    pub preventive_measures: Vec<String>,
}

lazy_static! {
    static ref CATALOG: Vec<DiseaseRecord> = {
        let records = build_catalog();
        validate(&records).expect("病害カタログの起動時検証に失敗");
        records
    };
}

/// カタログ全体への参照を返す
pub fn catalog() -> &'static [DiseaseRecord] {
    &CATALOG
}

/// 起動時不変条件の検証: 非空・病名一意・深刻度100以下
pub fn validate(records: &[DiseaseRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(Error::Catalog("カタログが空".to_string()));
    }
    for (i, record) in records.iter().enumerate() {
        if record.severity > 100 {
            return Err(Error::Catalog(format!(
                "深刻度が範囲外: {} ({})",
                record.name, record.severity
            )));
        }
        if records[..i].iter().any(|r| r.name == record.name) {
            return Err(Error::Catalog(format!("重複した病名: {}", record.name)));
        }
    }
    Ok(())
}

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_catalog() -> Vec<DiseaseRecord> {
    vec![
        DiseaseRecord {
            name: "Late Blight".to_string(),
            description: "A devastating fungal disease caused by Phytophthora infestans \
                          that can destroy entire crops within days if not treated."
                .to_string(),
            symptoms: texts(&[
                "Dark brown spots",
                "White fuzzy growth",
                "Rapid spread",
                "Wet rot",
            ]),
            severity: 95,
            yield_impact: "Up to 70-100% crop loss if untreated".to_string(),
            spread_rate: "Very rapid - can spread to entire field within days".to_string(),
            solutions: texts(&[
                "Apply fungicides preventatively",
                "Plant resistant varieties",
                "Improve field drainage",
                "Remove infected plants immediately",
            ]),
            preventive_measures: texts(&[
                "Monitor weather conditions",
                "Maintain plant spacing for airflow",
                "Use certified disease-free seed potatoes",
            ]),
        },
        DiseaseRecord {
            name: "Early Blight".to_string(),
            description: "A fungal disease caused by Alternaria solani that primarily \
                          affects older leaves and can significantly reduce yield."
                .to_string(),
            symptoms: texts(&[
                "Concentric rings",
                "Yellow halos",
                "Older leaf infection",
                "Dark brown lesions",
            ]),
            severity: 75,
            yield_impact: "20-50% reduction in yield".to_string(),
            spread_rate: "Moderate - develops over weeks".to_string(),
            solutions: texts(&[
                "Apply copper-based fungicides",
                "Remove infected leaves",
                "Rotate crops every 2-3 years",
                "Maintain proper plant nutrition",
            ]),
            preventive_measures: texts(&[
                "Avoid overhead irrigation",
                "Space plants properly",
                "Keep foliage dry",
            ]),
        },
        DiseaseRecord {
            name: "Common Scab".to_string(),
            description: "A bacterial disease that affects tuber appearance and \
                          marketability but not internal quality."
                .to_string(),
            symptoms: texts(&[
                "Corky patches",
                "Rough texture",
                "Surface lesions",
                "Brown spots",
            ]),
            severity: 60,
            yield_impact: "10-25% market value reduction".to_string(),
            spread_rate: "Slow - persists in soil".to_string(),
            solutions: texts(&[
                "Maintain soil pH below 5.5",
                "Increase irrigation during tuber formation",
                "Use resistant varieties",
                "Practice crop rotation",
            ]),
            preventive_measures: texts(&[
                "Avoid adding lime to potato fields",
                "Maintain consistent soil moisture",
                "Use clean seed potatoes",
            ]),
        },
        DiseaseRecord {
            name: "Blackleg".to_string(),
            description: "A bacterial disease that causes black stem rot and can lead \
                          to complete plant collapse."
                .to_string(),
            symptoms: texts(&["Black stem base", "Wilting", "Yellow leaves", "Soft rot"]),
            severity: 80,
            yield_impact: "30-60% yield loss".to_string(),
            spread_rate: "Moderate to rapid in wet conditions".to_string(),
            solutions: texts(&[
                "Remove infected plants",
                "Improve soil drainage",
                "Use certified seed potatoes",
                "Practice field sanitation",
            ]),
            preventive_measures: texts(&[
                "Avoid planting in wet soil",
                "Sanitize equipment",
                "Store seed potatoes properly",
            ]),
        },
        DiseaseRecord {
            name: "Potato Virus Y".to_string(),
            description: "A viral disease that causes significant yield reduction and \
                          quality issues."
                .to_string(),
            symptoms: texts(&[
                "Mosaic patterns",
                "Leaf drop",
                "Stunted growth",
                "Necrotic spots",
            ]),
            severity: 85,
            yield_impact: "40-70% yield reduction".to_string(),
            spread_rate: "Rapid through aphid vectors".to_string(),
            solutions: texts(&[
                "Remove infected plants",
                "Control aphid populations",
                "Use virus-free seed potatoes",
                "Implement aphid monitoring",
            ]),
            preventive_measures: texts(&[
                "Plant resistant varieties",
                "Use reflective mulches",
                "Maintain weed control",
            ]),
        },
        DiseaseRecord {
            name: "Ring Rot".to_string(),
            description: "A serious bacterial disease that can lead to quarantine and \
                          significant economic losses."
                .to_string(),
            symptoms: texts(&[
                "Ring-shaped rot",
                "Yellowing",
                "Wilting",
                "Tuber discoloration",
            ]),
            severity: 90,
            yield_impact: "50-90% crop loss".to_string(),
            spread_rate: "Moderate - spreads through infected seed".to_string(),
            solutions: texts(&[
                "Destroy infected crops",
                "Sanitize all equipment",
                "Use certified seed potatoes",
                "Practice strict sanitation",
            ]),
            preventive_measures: texts(&[
                "Regular equipment cleaning",
                "Inspect seed potatoes carefully",
                "Maintain field records",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_known_diseases() {
        let names: Vec<&str> = catalog().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Late Blight",
                "Early Blight",
                "Common Scab",
                "Blackleg",
                "Potato Virus Y",
                "Ring Rot",
            ]
        );
    }

    #[test]
    fn test_catalog_severity_in_range() {
        for record in catalog() {
            assert!(
                record.severity <= 100,
                "深刻度が範囲外: {} ({})",
                record.name,
                record.severity
            );
        }
    }

    #[test]
    fn test_catalog_fields_non_empty() {
        for record in catalog() {
            assert!(!record.description.is_empty());
            assert!(!record.symptoms.is_empty());
            assert!(!record.yield_impact.is_empty());
            assert!(!record.spread_rate.is_empty());
            assert!(!record.solutions.is_empty());
            assert!(!record.preventive_measures.is_empty());
        }
    }

    #[test]
    fn test_catalog_preserves_list_order() {
        // 表示順が意味を持つため、並び替えられていないことを先頭レコードで確認
        let late_blight = &catalog()[0];
        assert_eq!(late_blight.symptoms[0], "Dark brown spots");
        assert_eq!(late_blight.symptoms[3], "Wet rot");
        assert_eq!(late_blight.solutions[0], "Apply fungicides preventatively");
        assert_eq!(
            late_blight.preventive_measures[2],
            "Use certified disease-free seed potatoes"
        );
    }

    #[test]
    fn test_validate_rejects_empty() {
        let result = validate(&[]);
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_name() {
        let mut records = build_catalog();
        records[1].name = "Late Blight".to_string();
        let result = validate(&records);
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_disease_record_serialize_camel_case() {
        let json = serde_json::to_string(&catalog()[0]).expect("シリアライズ失敗");
        assert!(json.contains("\"name\":\"Late Blight\""));
        assert!(json.contains("\"yieldImpact\""));
        assert!(json.contains("\"spreadRate\""));
        assert!(json.contains("\"preventiveMeasures\""));
    }

    #[test]
    fn test_disease_record_roundtrip() {
        let json = serde_json::to_string(&catalog()[5]).expect("シリアライズ失敗");
        let parsed: DiseaseRecord = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(parsed, catalog()[5]);
    }
}
