use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_videos: i64,
    pub completed: i64,
    pub pending: i64,
    pub unused_metadata: i64,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_videos: 0,
            completed: 0,
            pending: 0,
            unused_metadata: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub filename: String,
    pub file_size: i64,
    pub upload_date: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
    pub created_date: String,
    pub is_used: bool,
}

/// Request body for single and bulk metadata creation. Also the element
/// shape a bulk JSON paste has to parse into before anything is sent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MetadataCreate {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QueueEntry {
    pub id: String,
    pub video_id: String,
    pub metadata_id: String,
    pub schedule_interval: ScheduleInterval,
    pub scheduled_time: String,
    pub status: String,
    pub created_date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScheduleRequest {
    pub video_id: String,
    pub metadata_id: String,
    pub schedule_interval: ScheduleInterval,
}

/// The upload endpoint acknowledges with a message and the new record's id
/// rather than the full video record.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UploadResponse {
    pub message: String,
    pub video_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BulkCreateResponse {
    pub message: String,
}

/// Structured error body the backend sends with non-2xx responses.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleInterval {
    #[serde(rename = "immediately")]
    Immediately,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "3h")]
    ThreeHours,
}

impl Default for ScheduleInterval {
    fn default() -> Self {
        ScheduleInterval::Immediately
    }
}

impl ScheduleInterval {
    pub fn display_name(&self) -> &'static str {
        match self {
            ScheduleInterval::Immediately => "Immediately",
            ScheduleInterval::ThirtyMinutes => "After 30 minutes",
            ScheduleInterval::OneHour => "After 1 hour",
            ScheduleInterval::ThreeHours => "After 3 hours",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            ScheduleInterval::Immediately,
            ScheduleInterval::ThirtyMinutes,
            ScheduleInterval::OneHour,
            ScheduleInterval::ThreeHours,
        ]
    }
}

// Keys used in <option value="..."> so we can reliably map back and forth.
pub fn interval_key(interval: &ScheduleInterval) -> &'static str {
    match interval {
        ScheduleInterval::Immediately => "immediately",
        ScheduleInterval::ThirtyMinutes => "30m",
        ScheduleInterval::OneHour => "1h",
        ScheduleInterval::ThreeHours => "3h",
    }
}

pub fn interval_from_key(key: &str) -> Option<ScheduleInterval> {
    match key {
        "immediately" => Some(ScheduleInterval::Immediately),
        "30m" => Some(ScheduleInterval::ThirtyMinutes),
        "1h" => Some(ScheduleInterval::OneHour),
        "3h" => Some(ScheduleInterval::ThreeHours),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_interval_uses_backend_wire_values() {
        for interval in ScheduleInterval::all_variants() {
            let encoded = serde_json::to_string(&interval).unwrap();
            assert_eq!(encoded, format!("\"{}\"", interval_key(&interval)));

            let decoded: ScheduleInterval = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, interval);
        }
    }

    #[test]
    fn schedule_interval_defaults_to_immediately() {
        assert_eq!(ScheduleInterval::default(), ScheduleInterval::Immediately);
    }

    #[test]
    fn interval_keys_map_back_and_forth() {
        for interval in ScheduleInterval::all_variants() {
            assert_eq!(interval_from_key(interval_key(&interval)), Some(interval));
        }
        assert_eq!(interval_from_key("2h"), None);
    }

    #[test]
    fn video_tolerates_server_only_fields() {
        let body = r#"{
            "id": "b8e7f3e2-2c0f-4a85-9d8a-2e9f6f4b5f10",
            "filename": "clip.mp4",
            "file_path": "/app/uploads/b8e7f3e2_clip.mp4",
            "file_size": 1048576,
            "upload_date": "2025-07-01T09:30:00.123456",
            "status": "uploaded",
            "metadata_id": null,
            "sequence_number": 3
        }"#;

        let video: Video = serde_json::from_str(body).unwrap();
        assert_eq!(video.filename, "clip.mp4");
        assert_eq!(video.file_size, 1_048_576);
        assert_eq!(video.status, "uploaded");
    }

    #[test]
    fn queue_entry_parses_backend_shape() {
        let body = r#"{
            "id": "q1",
            "video_id": "v1",
            "metadata_id": "m1",
            "schedule_interval": "1h",
            "scheduled_time": "2025-07-01T10:30:00.000000",
            "status": "pending",
            "created_date": "2025-07-01T09:30:00.000000"
        }"#;

        let entry: QueueEntry = serde_json::from_str(body).unwrap();
        assert_eq!(entry.schedule_interval, ScheduleInterval::OneHour);
        assert_eq!(entry.status, "pending");
    }

    #[test]
    fn stats_default_is_zeroed() {
        let stats = DashboardStats::default();
        assert_eq!(stats.total_videos, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.unused_metadata, 0);
    }
}
