use crate::api;
use crate::dashboard::components::{ErrorMessage, SuccessMessage};
use crate::models::{MetadataCreate, VideoMetadata};
use crate::utils::format_iso8601_datetime;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Comma-separated input, trimmed per entry. Empty entries (double or
/// trailing commas) pass through unchanged; the backend accepts any string.
pub fn parse_hashtags(input: &str) -> Vec<String> {
    input.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// A bulk paste has to parse as a JSON array of metadata entries before
/// anything is sent; a bad paste is a single local error with no request.
pub fn parse_bulk_metadata(input: &str) -> Result<Vec<MetadataCreate>, String> {
    let entries: Vec<MetadataCreate> =
        serde_json::from_str(input).map_err(|e| format!("Invalid JSON: {}", e))?;

    if entries.is_empty() {
        return Err("The JSON array contains no metadata entries".to_string());
    }
    Ok(entries)
}

#[derive(Properties, PartialEq)]
pub struct MetadataTabProps {
    pub metadata: Vec<VideoMetadata>,
    pub on_created: Callback<()>,
}

#[function_component(MetadataTab)]
pub fn metadata_tab(props: &MetadataTabProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let hashtags_input = use_state(String::new);
    let bulk_input = use_state(String::new);
    let submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_hashtags_input = {
        let hashtags_input = hashtags_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            hashtags_input.set(input.value());
        })
    };

    let on_bulk_input = {
        let bulk_input = bulk_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            bulk_input.set(input.value());
        })
    };

    let on_submit_single = {
        let title = title.clone();
        let description = description.clone();
        let hashtags_input = hashtags_input.clone();
        let submitting = submitting.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            error_message.set(None);
            success_message.set(None);

            if title.trim().is_empty()
                || description.trim().is_empty()
                || hashtags_input.trim().is_empty()
            {
                error_message.set(Some(
                    "Please fill in title, description and hashtags".to_string(),
                ));
                return;
            }

            let entry = MetadataCreate {
                title: (*title).clone(),
                description: (*description).clone(),
                hashtags: parse_hashtags(&hashtags_input),
            };

            let title = title.clone();
            let description = description.clone();
            let hashtags_input = hashtags_input.clone();
            let submitting = submitting.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let on_created = on_created.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::create_metadata(&entry).await {
                    Ok(created) => {
                        title.set(String::new());
                        description.set(String::new());
                        hashtags_input.set(String::new());
                        success_message.set(Some(format!("Created metadata \"{}\"", created.title)));
                        on_created.emit(());
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to create metadata: {}", e)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_submit_bulk = {
        let bulk_input = bulk_input.clone();
        let submitting = submitting.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            error_message.set(None);
            success_message.set(None);

            // Parse locally first; nothing is sent for a bad paste
            let entries = match parse_bulk_metadata(&bulk_input) {
                Ok(entries) => entries,
                Err(e) => {
                    error_message.set(Some(format!("Bulk import failed: {}", e)));
                    return;
                }
            };

            let bulk_input = bulk_input.clone();
            let submitting = submitting.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let on_created = on_created.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::create_metadata_bulk(&entries).await {
                    Ok(response) => {
                        bulk_input.set(String::new());
                        success_message.set(Some(response.message));
                        on_created.emit(());
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Bulk import failed: {}", e)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div>
            <ErrorMessage error_message={(*error_message).clone()} />
            <SuccessMessage success_message={(*success_message).clone()} />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
                <div class="bg-gray-50 p-4 rounded-lg">
                    <h3 class="text-lg font-semibold text-gray-800 mb-4">{"Add Metadata"}</h3>
                    <form onsubmit={on_submit_single}>
                        <input
                            type="text"
                            class="w-full p-3 border border-gray-300 rounded mb-4 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Title"
                            value={(*title).clone()}
                            oninput={on_title_input}
                        />
                        <textarea
                            class="w-full p-3 border border-gray-300 rounded mb-4 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            rows="3"
                            placeholder="Description"
                            value={(*description).clone()}
                            oninput={on_description_input}
                        />
                        <input
                            type="text"
                            class="w-full p-3 border border-gray-300 rounded mb-4 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Hashtags, comma separated"
                            value={(*hashtags_input).clone()}
                            oninput={on_hashtags_input}
                        />
                        <button
                            type="submit"
                            disabled={*submitting}
                            class="bg-blue-600 text-white px-6 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
                        >
                            {if *submitting { "Saving..." } else { "Add Metadata" }}
                        </button>
                    </form>
                </div>

                <div class="bg-gray-50 p-4 rounded-lg">
                    <h3 class="text-lg font-semibold text-gray-800 mb-4">{"Bulk Import"}</h3>
                    <form onsubmit={on_submit_bulk}>
                        <textarea
                            class="w-full p-3 border border-gray-300 rounded mb-4 font-mono text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                            rows="8"
                            placeholder={r##"[{"title": "My Short", "description": "...", "hashtags": ["#shorts"]}]"##}
                            value={(*bulk_input).clone()}
                            oninput={on_bulk_input}
                        />
                        <button
                            type="submit"
                            disabled={*submitting}
                            class="bg-blue-600 text-white px-6 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
                        >
                            {if *submitting { "Importing..." } else { "Import JSON" }}
                        </button>
                    </form>
                </div>
            </div>

            <h3 class="text-lg font-semibold text-gray-800 mb-4">{"Metadata Library"}</h3>
            {
                if props.metadata.is_empty() {
                    html! {
                        <p class="text-gray-600">{"No metadata created yet"}</p>
                    }
                } else {
                    html! {
                        <div class="overflow-x-auto">
                            <table class="min-w-full bg-white border border-gray-300">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Title"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Hashtags"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Created"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    {
                                        props.metadata.iter().map(|entry| {
                                            html! {
                                                <tr key={entry.id.clone()}>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                        <div class="max-w-xs truncate" title={entry.description.clone()}>
                                                            {&entry.title}
                                                        </div>
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                        <div class="max-w-xs truncate">
                                                            {entry.hashtags.join(", ")}
                                                        </div>
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                        {format_iso8601_datetime(&entry.created_date)}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap">
                                                        <span class={format!(
                                                            "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
                                                            if entry.is_used {
                                                                "bg-gray-100 text-gray-800"
                                                            } else {
                                                                "bg-green-100 text-green-800"
                                                            }
                                                        )}>
                                                            {if entry.is_used { "used" } else { "available" }}
                                                        </span>
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
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashtags_are_split_and_trimmed() {
        assert_eq!(parse_hashtags("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_hashtag_entries_pass_through() {
        // A trailing comma keeps its empty entry; the backend decides
        assert_eq!(parse_hashtags("a,b,"), vec!["a", "b", ""]);
        assert_eq!(parse_hashtags("a,  ,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn bulk_parse_maps_entries_field_for_field() {
        let input = r##"[
            {"title": "First", "description": "one", "hashtags": ["#a", "#b"]},
            {"title": "Second", "description": "two", "hashtags": []}
        ]"##;

        let entries = parse_bulk_metadata(input).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "First");
        assert_eq!(entries[0].hashtags, vec!["#a", "#b"]);
        assert_eq!(entries[1].description, "two");
        assert!(entries[1].hashtags.is_empty());
    }

    #[test]
    fn bulk_parse_rejects_malformed_json() {
        let err = parse_bulk_metadata("not json at all").unwrap_err();
        assert!(err.starts_with("Invalid JSON:"));
    }

    #[test]
    fn bulk_parse_rejects_non_arrays() {
        let err =
            parse_bulk_metadata(r#"{"title": "x", "description": "y", "hashtags": []}"#).unwrap_err();
        assert!(err.starts_with("Invalid JSON:"));
    }

    #[test]
    fn bulk_parse_rejects_empty_arrays() {
        let err = parse_bulk_metadata("[]").unwrap_err();
        assert!(err.contains("no metadata entries"));
    }
}
