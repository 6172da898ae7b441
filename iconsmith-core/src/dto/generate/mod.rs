//! Generation DTOs

use serde::{Deserialize, Serialize};

use crate::domain::generation::{ConceptPriority, GenerationStatus};

/// Request to generate a single icon from a text concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateConceptRequest {
    pub concept: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Image dimensions, e.g. "2048x2048"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_animation_prompt: Option<bool>,
}

impl GenerateConceptRequest {
    pub fn new(concept: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            category: None,
            style: None,
            size: None,
            include_animation_prompt: None,
        }
    }
}

/// Request to extract concepts from a YouTube video and generate their icons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateYouTubeRequest {
    pub youtube_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concepts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_priority: Option<ConceptPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Generate icons right after extraction instead of stopping at concepts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_generate: Option<bool>,
}

impl GenerateYouTubeRequest {
    pub fn new(youtube_url: impl Into<String>) -> Self {
        Self {
            youtube_url: youtube_url.into(),
            max_concepts: None,
            min_priority: None,
            style: None,
            auto_generate: None,
        }
    }
}

/// Response to either generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub task_id: String,
    pub status: GenerationStatus,
    pub message: String,
    #[serde(default)]
    pub estimated_time_seconds: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_request_omits_unset_fields() {
        let json = serde_json::to_value(GenerateConceptRequest::new("Bitcoin")).unwrap();
        assert_eq!(json, serde_json::json!({ "concept": "Bitcoin" }));
    }

    #[test]
    fn test_youtube_request_serializes_priority() {
        let req = GenerateYouTubeRequest {
            max_concepts: Some(10),
            min_priority: Some(ConceptPriority::High),
            auto_generate: Some(false),
            ..GenerateYouTubeRequest::new("https://youtu.be/dQw4w9WgXcQ")
        };
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "youtube_url": "https://youtu.be/dQw4w9WgXcQ",
                "max_concepts": 10,
                "min_priority": "high",
                "auto_generate": false
            })
        );
    }

    #[test]
    fn test_generate_response_without_estimate() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"task_id":"t1","status":"pending","message":"queued"}"#,
        )
        .unwrap();
        assert_eq!(resp.status, GenerationStatus::Pending);
        assert!(resp.estimated_time_seconds.is_none());
    }
}
