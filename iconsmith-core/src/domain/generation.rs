//! Generation task domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::timestamp;

/// Status snapshot of a backend generation job
///
/// Re-fetched on every poll. Result payloads (`extracted_concepts`,
/// `generated_icons`, `transcript`) are filled in as the job advances and
/// each snapshot replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationTask {
    pub task_id: String,
    pub status: GenerationStatus,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub extracted_concepts: Option<Vec<ConceptExtraction>>,
    /// IDs of icons produced so far
    #[serde(default)]
    pub generated_icons: Option<Vec<String>>,
    #[serde(default)]
    pub transcript: Option<Vec<TranscriptSegment>>,
    #[serde(default)]
    pub transcript_text: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl GenerationTask {
    /// Create a bare snapshot with the given status and progress
    pub fn new(task_id: impl Into<String>, status: GenerationStatus, progress: u8) -> Self {
        Self {
            task_id: task_id.into(),
            status,
            progress,
            message: None,
            created_at: None,
            updated_at: None,
            completed_at: None,
            error: None,
            extracted_concepts: None,
            generated_icons: None,
            transcript: None,
            transcript_text: None,
            metadata: HashMap::new(),
        }
    }

    /// Whether this snapshot is the last one the job will ever produce
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether any partial result has been reported yet
    pub fn has_results(&self) -> bool {
        self.extracted_concepts.as_ref().is_some_and(|c| !c.is_empty())
            || self.generated_icons.as_ref().is_some_and(|i| !i.is_empty())
            || self.transcript.as_ref().is_some_and(|t| !t.is_empty())
            || self.transcript_text.as_ref().is_some_and(|t| !t.is_empty())
    }
}

/// Generation job status
///
/// `Completed` and `Failed` are the only terminal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    Pending,
    Processing,
    ExtractingConcepts,
    GeneratingImages,
    RemovingBackgrounds,
    Uploading,
    Completed,
    Failed,
}

impl GenerationStatus {
    /// Every status, in the order a job normally moves through them
    pub const ALL: [GenerationStatus; 8] = [
        GenerationStatus::Pending,
        GenerationStatus::Processing,
        GenerationStatus::ExtractingConcepts,
        GenerationStatus::GeneratingImages,
        GenerationStatus::RemovingBackgrounds,
        GenerationStatus::Uploading,
        GenerationStatus::Completed,
        GenerationStatus::Failed,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, GenerationStatus::Completed | GenerationStatus::Failed)
    }

    /// Wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationStatus::Pending => "pending",
            GenerationStatus::Processing => "processing",
            GenerationStatus::ExtractingConcepts => "extracting_concepts",
            GenerationStatus::GeneratingImages => "generating_images",
            GenerationStatus::RemovingBackgrounds => "removing_backgrounds",
            GenerationStatus::Uploading => "uploading",
            GenerationStatus::Completed => "completed",
            GenerationStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Importance of a concept extracted from a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptPriority {
    Low,
    Medium,
    High,
}

impl ConceptPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            ConceptPriority::Low => "low",
            ConceptPriority::Medium => "medium",
            ConceptPriority::High => "high",
        }
    }
}

impl fmt::Display for ConceptPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConceptPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(ConceptPriority::Low),
            "medium" => Ok(ConceptPriority::Medium),
            "high" => Ok(ConceptPriority::High),
            other => Err(format!(
                "unknown priority '{}' (expected high, medium or low)",
                other
            )),
        }
    }
}

/// Icon subject derived from a video transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptExtraction {
    pub name: String,
    pub category: String,
    pub priority: ConceptPriority,
    pub visual_description: String,
    #[serde(default)]
    pub context: Option<String>,
}

/// One timed line of a video transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Offset from the start of the video, in seconds
    pub start: f64,
    /// Length of the segment, in seconds
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_two_terminal_statuses() {
        let terminal: Vec<_> = GenerationStatus::ALL
            .iter()
            .copied()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(
            terminal,
            vec![GenerationStatus::Completed, GenerationStatus::Failed]
        );
    }

    #[test]
    fn test_status_wire_names_match_serde() {
        for status in GenerationStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_deserialize_minimal_snapshot() {
        let task: GenerationTask =
            serde_json::from_str(r#"{"task_id":"t1","status":"extracting_concepts"}"#).unwrap();
        assert_eq!(task.task_id, "t1");
        assert_eq!(task.status, GenerationStatus::ExtractingConcepts);
        assert_eq!(task.progress, 0);
        assert!(task.created_at.is_none());
        assert!(task.metadata.is_empty());
        assert!(!task.has_results());
    }

    #[test]
    fn test_deserialize_backend_snapshot() {
        let json = r#"{
            "task_id": "gen_yt_abc",
            "status": "generating_images",
            "progress": 55,
            "message": "Generating 3 icons",
            "created_at": "2024-05-02T09:00:00.000123",
            "updated_at": "2024-05-02T09:01:00Z",
            "completed_at": null,
            "error": null,
            "extracted_concepts": [
                {"name": "Bitcoin", "category": "devises", "priority": "high",
                 "visual_description": "gold coin with a B"}
            ],
            "generated_icons": ["i1"],
            "transcript": [{"text": "hello", "start": 0.0, "duration": 1.5}],
            "metadata": {"video_id": "dQw4w9WgXcQ"}
        }"#;

        let task: GenerationTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.progress, 55);
        assert!(task.created_at.is_some());
        assert!(task.updated_at.is_some());
        assert!(task.completed_at.is_none());
        let concepts = task.extracted_concepts.as_ref().unwrap();
        assert_eq!(concepts[0].priority, ConceptPriority::High);
        assert!(concepts[0].context.is_none());
        assert_eq!(task.transcript.as_ref().unwrap()[0].duration, 1.5);
        assert!(task.has_results());
        assert!(!task.is_terminal());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result =
            serde_json::from_str::<GenerationTask>(r#"{"task_id":"t1","status":"cancelled"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_priority_ordering_and_parse() {
        assert!(ConceptPriority::High > ConceptPriority::Medium);
        assert_eq!("HIGH".parse::<ConceptPriority>(), Ok(ConceptPriority::High));
        assert!("urgent".parse::<ConceptPriority>().is_err());
    }
}
