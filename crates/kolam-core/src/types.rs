//! Wire and session data types.
//!
//! Every field the backend produces is treated as an opaque display string.
//! Nothing here validates content beyond "the field may be absent".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque identifier issued by the backend for one upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisId(String);

impl AnalysisId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnalysisId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Backend-side progress of an analysis.
///
/// Unrecognised strings are read as `Processing`, so an unexpected status
/// keeps the poll loop going until the attempt ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AnalysisStatus {
    Processing,
    Completed,
    Failed,
}

impl From<String> for AnalysisStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "completed" => AnalysisStatus::Completed,
            "failed" => AnalysisStatus::Failed,
            _ => AnalysisStatus::Processing,
        }
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisStatus::Processing => write!(f, "processing"),
            AnalysisStatus::Completed => write!(f, "completed"),
            AnalysisStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Body of `GET /analysis-status/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: AnalysisStatus,
}

/// Body of `POST /upload-kolam`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub analysis_id: String,
    #[serde(default)]
    pub message: String,
}

/// Analysis output produced by the backend.
///
/// The partial-field endpoints return a subset of the same shape, so they
/// decode into this type too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mathematical_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desmos_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_kolams: Option<Vec<String>>,
}

impl AnalysisResult {
    /// Fold a partial response into this result. Fields present in
    /// `partial` replace the current ones.
    pub fn merge(&mut self, partial: AnalysisResult) {
        if partial.cultural_description.is_some() {
            self.cultural_description = partial.cultural_description;
        }
        if partial.mathematical_analysis.is_some() {
            self.mathematical_analysis = partial.mathematical_analysis;
        }
        if partial.analysis_image_url.is_some() {
            self.analysis_image_url = partial.analysis_image_url;
        }
        if partial.equations.is_some() {
            self.equations = partial.equations;
        }
        if partial.desmos_url.is_some() {
            self.desmos_url = partial.desmos_url;
        }
        if partial.generated_kolams.is_some() {
            self.generated_kolams = partial.generated_kolams;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == AnalysisResult::default()
    }

    /// Generated pattern references, empty when the backend sent none.
    pub fn generated(&self) -> &[String] {
        self.generated_kolams.as_deref().unwrap_or(&[])
    }
}

/// A partial-field endpoint of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultField {
    CulturalDescription,
    MathematicalAnalysis,
    AnalysisImage,
    ParametricEquations,
    GeneratedKolams,
}

impl ResultField {
    pub const ALL: [ResultField; 5] = [
        ResultField::CulturalDescription,
        ResultField::MathematicalAnalysis,
        ResultField::AnalysisImage,
        ResultField::ParametricEquations,
        ResultField::GeneratedKolams,
    ];

    /// Path segment preceding the analysis id.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ResultField::CulturalDescription => "cultural-description",
            ResultField::MathematicalAnalysis => "mathematical-analysis",
            ResultField::AnalysisImage => "analysis-image",
            ResultField::ParametricEquations => "parametric-equations",
            ResultField::GeneratedKolams => "generated-kolams",
        }
    }

    /// Operation name used in error messages.
    pub fn operation(&self) -> &'static str {
        match self {
            ResultField::CulturalDescription => "Cultural description fetch",
            ResultField::MathematicalAnalysis => "Mathematical analysis fetch",
            ResultField::AnalysisImage => "Analysis image fetch",
            ResultField::ParametricEquations => "Equations fetch",
            ResultField::GeneratedKolams => "Generated kolams fetch",
        }
    }
}

impl FromStr for ResultField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cultural" | "cultural-description" => Ok(ResultField::CulturalDescription),
            "math" | "mathematical-analysis" => Ok(ResultField::MathematicalAnalysis),
            "image" | "analysis-image" => Ok(ResultField::AnalysisImage),
            "equations" | "parametric-equations" => Ok(ResultField::ParametricEquations),
            "generated" | "generated-kolams" => Ok(ResultField::GeneratedKolams),
            other => Err(format!(
                "Invalid field '{}'. Must be one of: cultural, math, image, equations, generated",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        let parsed: StatusResponse = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
        assert_eq!(parsed.status, AnalysisStatus::Completed);

        let parsed: StatusResponse = serde_json::from_str(r#"{"status":"failed"}"#).unwrap();
        assert_eq!(parsed.status, AnalysisStatus::Failed);
    }

    #[test]
    fn test_unknown_status_is_processing() {
        let parsed: StatusResponse = serde_json::from_str(r#"{"status":"queued"}"#).unwrap();
        assert_eq!(parsed.status, AnalysisStatus::Processing);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&AnalysisStatus::Processing).unwrap();
        assert_eq!(json, r#""processing""#);
    }

    #[test]
    fn test_upload_response_camel_case() {
        let parsed: UploadResponse = serde_json::from_str(
            r#"{"success":true,"analysisId":"abc-123","message":"queued"}"#,
        )
        .unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.analysis_id, "abc-123");
    }

    #[test]
    fn test_upload_response_missing_fields_default() {
        let parsed: UploadResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(parsed.analysis_id.is_empty());
        assert!(parsed.message.is_empty());
    }

    #[test]
    fn test_result_fields_may_be_absent() {
        let parsed: AnalysisResult =
            serde_json::from_str(r#"{"culturalDescription":"Pulli kolam"}"#).unwrap();
        assert_eq!(parsed.cultural_description.as_deref(), Some("Pulli kolam"));
        assert!(parsed.desmos_url.is_none());
        assert!(parsed.generated().is_empty());
    }

    #[test]
    fn test_merge_keeps_existing_fields() {
        let mut result = AnalysisResult {
            cultural_description: Some("old".to_string()),
            equations: Some("x(t) = cos(t)".to_string()),
            ..Default::default()
        };
        result.merge(AnalysisResult {
            cultural_description: Some("new".to_string()),
            desmos_url: Some("https://www.desmos.com/calculator".to_string()),
            ..Default::default()
        });

        assert_eq!(result.cultural_description.as_deref(), Some("new"));
        assert_eq!(result.equations.as_deref(), Some("x(t) = cos(t)"));
        assert!(result.desmos_url.is_some());
    }

    #[test]
    fn test_result_field_from_str() {
        assert_eq!("math".parse::<ResultField>(), Ok(ResultField::MathematicalAnalysis));
        assert_eq!(
            "generated-kolams".parse::<ResultField>(),
            Ok(ResultField::GeneratedKolams)
        );
        assert!("colour".parse::<ResultField>().is_err());
    }

    #[test]
    fn test_result_field_endpoints_unique() {
        let mut endpoints: Vec<_> = ResultField::ALL.iter().map(|f| f.endpoint()).collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), ResultField::ALL.len());
    }
}
