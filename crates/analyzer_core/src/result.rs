use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decoded response of the analysis service.
///
/// Every field is optional on the wire. Missing or `null` lists decode as empty
/// lists, so the view layer never has to re-apply defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "score")]
    pub ats_score: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub ai_raw: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub matched_keywords: Vec<String>,
    #[serde(default, deserialize_with = "list")]
    pub missing_keywords: Vec<String>,
    #[serde(default, deserialize_with = "list")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "list")]
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    /// Decode a response body. A literal `null` body decodes as an empty result.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let decoded: Option<Self> = serde_json::from_str(body)?;
        Ok(decoded.unwrap_or_default())
    }
}

// Kept as sent: numbers and numeric strings both count, anything else is no score.
fn score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let value = match raw {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|score| score.is_finite()))
}

fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
