use crate::dashboard::components::StatusBadge;
use crate::models::{QueueEntry, Video, VideoMetadata};
use crate::utils::format_iso8601_datetime;
use yew::prelude::*;

// Queue entries reference videos and metadata by id; resolve the names
// against the current snapshots and fall back to the raw id.

pub fn video_filename<'a>(videos: &'a [Video], video_id: &str) -> Option<&'a str> {
    videos
        .iter()
        .find(|video| video.id == video_id)
        .map(|video| video.filename.as_str())
}

pub fn metadata_title<'a>(metadata: &'a [VideoMetadata], metadata_id: &str) -> Option<&'a str> {
    metadata
        .iter()
        .find(|entry| entry.id == metadata_id)
        .map(|entry| entry.title.as_str())
}

#[derive(Properties, PartialEq)]
pub struct QueueTabProps {
    pub queue: Vec<QueueEntry>,
    pub videos: Vec<Video>,
    pub metadata: Vec<VideoMetadata>,
}

#[function_component(QueueTab)]
pub fn queue_tab(props: &QueueTabProps) -> Html {
    if props.queue.is_empty() {
        return html! {
            <p class="text-gray-600">{"No uploads scheduled yet"}</p>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-300">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Video"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Metadata"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Scheduled"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Interval"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {
                        props.queue.iter().map(|entry| {
                            let video = video_filename(&props.videos, &entry.video_id)
                                .unwrap_or(entry.video_id.as_str());
                            let metadata = metadata_title(&props.metadata, &entry.metadata_id)
                                .unwrap_or(entry.metadata_id.as_str());

                            html! {
                                <tr key={entry.id.clone()}>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                        <div class="max-w-xs truncate">{video}</div>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                        <div class="max-w-xs truncate">{metadata}</div>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                        {format_iso8601_datetime(&entry.scheduled_time)}
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                        {entry.schedule_interval.display_name()}
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <StatusBadge status={entry.status.clone()} />
                                    </td>
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_rows_resolve_names_against_snapshots() {
        let videos = vec![Video {
            id: "v1".to_string(),
            filename: "clip.mp4".to_string(),
            file_size: 1024,
            upload_date: "2025-07-01T09:30:00.000000".to_string(),
            status: "uploaded".to_string(),
        }];

        assert_eq!(video_filename(&videos, "v1"), Some("clip.mp4"));
        assert_eq!(video_filename(&videos, "missing"), None);
    }

    #[test]
    fn unresolved_metadata_falls_back_to_none() {
        assert_eq!(metadata_title(&[], "m1"), None);
    }
}
