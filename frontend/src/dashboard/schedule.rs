use crate::api;
use crate::dashboard::components::{ErrorMessage, SuccessMessage};
use crate::models::{interval_from_key, interval_key, ScheduleInterval, Video, VideoMetadata};
use crate::utils::format_iso8601_datetime;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Metadata already consumed by an earlier scheduling action stays out of
/// the candidate list; the flag is only ever flipped server-side.
pub fn selectable_metadata(metadata: &[VideoMetadata]) -> Vec<&VideoMetadata> {
    metadata.iter().filter(|entry| !entry.is_used).collect()
}

#[derive(Properties, PartialEq)]
pub struct ScheduleTabProps {
    pub videos: Vec<Video>,
    pub metadata: Vec<VideoMetadata>,
    pub on_scheduled: Callback<()>,
}

#[function_component(ScheduleTab)]
pub fn schedule_tab(props: &ScheduleTabProps) -> Html {
    let selected_video_id = use_state(String::new);
    let selected_metadata_id = use_state(String::new);
    let interval = use_state(ScheduleInterval::default);
    let submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);

    let on_video_change = {
        let selected_video_id = selected_video_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected_video_id.set(select.value());
        })
    };

    let on_metadata_change = {
        let selected_metadata_id = selected_metadata_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected_metadata_id.set(select.value());
        })
    };

    let on_interval_change = {
        let interval = interval.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(parsed) = interval_from_key(&select.value()) {
                interval.set(parsed);
            }
        })
    };

    let on_submit = {
        let selected_video_id = selected_video_id.clone();
        let selected_metadata_id = selected_metadata_id.clone();
        let interval = interval.clone();
        let submitting = submitting.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let on_scheduled = props.on_scheduled.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            error_message.set(None);
            success_message.set(None);

            if selected_video_id.is_empty() || selected_metadata_id.is_empty() {
                error_message.set(Some(
                    "Please select both a video and a metadata entry".to_string(),
                ));
                return;
            }

            let video_id = (*selected_video_id).clone();
            let metadata_id = (*selected_metadata_id).clone();
            let chosen_interval = *interval;

            let selected_video_id = selected_video_id.clone();
            let selected_metadata_id = selected_metadata_id.clone();
            let interval = interval.clone();
            let submitting = submitting.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let on_scheduled = on_scheduled.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::schedule_upload(&video_id, &metadata_id, chosen_interval).await {
                    Ok(entry) => {
                        selected_video_id.set(String::new());
                        selected_metadata_id.set(String::new());
                        interval.set(ScheduleInterval::default());
                        success_message.set(Some(format!(
                            "Upload scheduled for {}",
                            format_iso8601_datetime(&entry.scheduled_time)
                        )));
                        on_scheduled.emit(());
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to schedule upload: {}", e)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let candidates = selectable_metadata(&props.metadata);

    html! {
        <div>
            <ErrorMessage error_message={(*error_message).clone()} />
            <SuccessMessage success_message={(*success_message).clone()} />

            <div class="bg-gray-50 p-4 rounded-lg">
                <h3 class="text-lg font-semibold text-gray-800 mb-4">{"Schedule Upload"}</h3>
                <form onsubmit={on_submit}>
                    <label class="block text-gray-700 text-sm font-bold mb-2">
                        {"Video"}
                    </label>
                    <select
                        class="w-full p-3 border border-gray-300 rounded mb-4"
                        onchange={on_video_change}
                    >
                        <option value="" selected={selected_video_id.is_empty()}>
                            {"Select a video..."}
                        </option>
                        {
                            for props.videos.iter().map(|video| {
                                html! {
                                    <option
                                        value={video.id.clone()}
                                        selected={video.id == *selected_video_id}
                                    >
                                        {&video.filename}
                                    </option>
                                }
                            })
                        }
                    </select>

                    <label class="block text-gray-700 text-sm font-bold mb-2">
                        {"Metadata"}
                    </label>
                    <select
                        class="w-full p-3 border border-gray-300 rounded mb-4"
                        onchange={on_metadata_change}
                    >
                        <option value="" selected={selected_metadata_id.is_empty()}>
                            {"Select metadata..."}
                        </option>
                        {
                            for candidates.iter().map(|entry| {
                                html! {
                                    <option
                                        value={entry.id.clone()}
                                        selected={entry.id == *selected_metadata_id}
                                    >
                                        {&entry.title}
                                    </option>
                                }
                            })
                        }
                    </select>

                    <label class="block text-gray-700 text-sm font-bold mb-2">
                        {"Schedule"}
                    </label>
                    <select
                        class="w-full p-3 border border-gray-300 rounded mb-4"
                        onchange={on_interval_change}
                    >
                        {
                            for ScheduleInterval::all_variants().into_iter().map(|variant| {
                                html! {
                                    <option
                                        value={interval_key(&variant)}
                                        selected={variant == *interval}
                                    >
                                        { variant.display_name() }
                                    </option>
                                }
                            })
                        }
                    </select>

                    <button
                        type="submit"
                        disabled={*submitting}
                        class="bg-blue-600 text-white px-6 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if *submitting { "Scheduling..." } else { "Schedule Upload" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoMetadata;

    fn metadata(id: &str, is_used: bool) -> VideoMetadata {
        VideoMetadata {
            id: id.to_string(),
            title: format!("title-{}", id),
            description: String::new(),
            hashtags: Vec::new(),
            created_date: "2025-07-01T09:30:00.000000".to_string(),
            is_used,
        }
    }

    #[test]
    fn used_metadata_is_not_selectable() {
        let all = vec![metadata("a", false), metadata("b", true), metadata("c", false)];

        let candidates = selectable_metadata(&all);
        let ids: Vec<&str> = candidates.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn flipping_is_used_removes_the_record_from_candidates() {
        let mut all = vec![metadata("a", false)];
        assert_eq!(selectable_metadata(&all).len(), 1);

        // What the next refresh delivers once the server consumed the record
        all[0].is_used = true;
        assert!(selectable_metadata(&all).is_empty());
    }
}
