use crate::api;
use crate::dashboard::components::{ErrorMessage, StatusBadge, SuccessMessage};
use crate::models::Video;
use crate::utils::{format_file_size, format_iso8601_datetime};
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};
use yew::prelude::*;

fn file_list_to_vec(list: Option<FileList>) -> Vec<File> {
    let mut files = Vec::new();
    if let Some(list) = list {
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                files.push(file);
            }
        }
    }
    files
}

#[derive(Properties, PartialEq)]
pub struct UploadTabProps {
    pub videos: Vec<Video>,
    pub on_uploaded: Callback<()>,
}

#[function_component(UploadTab)]
pub fn upload_tab(props: &UploadTabProps) -> Html {
    let selected_files = use_state(Vec::<File>::new);
    let uploading = use_state(|| false);
    let drag_active = use_state(|| false);
    let current_upload = use_state(|| None::<String>);
    let upload_percent = use_state(|| 0.0f64);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);

    let on_drop = {
        let selected_files = selected_files.clone();
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(false);

            let dropped = file_list_to_vec(e.data_transfer().and_then(|t| t.files()));
            if !dropped.is_empty() {
                let mut files = (*selected_files).clone();
                files.extend(dropped);
                selected_files.set(files);
            }
        })
    };

    let on_drag_over = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(true);
        })
    };

    let on_drag_leave = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(false);
        })
    };

    let on_file_input = {
        let selected_files = selected_files.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let picked = file_list_to_vec(input.files());
            if !picked.is_empty() {
                let mut files = (*selected_files).clone();
                files.extend(picked);
                selected_files.set(files);
            }
            // Allow picking the same file again later
            input.set_value("");
        })
    };

    let on_remove_file = {
        let selected_files = selected_files.clone();
        Callback::from(move |index: usize| {
            let mut files = (*selected_files).clone();
            if index < files.len() {
                files.remove(index);
            }
            selected_files.set(files);
        })
    };

    let on_start_upload = {
        let selected_files = selected_files.clone();
        let uploading = uploading.clone();
        let current_upload = current_upload.clone();
        let upload_percent = upload_percent.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let on_uploaded = props.on_uploaded.clone();

        Callback::from(move |_: MouseEvent| {
            let files = (*selected_files).clone();
            if files.is_empty() {
                error_message.set(Some("Please select at least one video file".to_string()));
                return;
            }

            let selected_files = selected_files.clone();
            let uploading = uploading.clone();
            let current_upload = current_upload.clone();
            let upload_percent = upload_percent.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let on_uploaded = on_uploaded.clone();

            uploading.set(true);
            error_message.set(None);
            success_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let total = files.len();
                let mut uploaded = 0usize;
                let mut failures = Vec::new();

                // Files go up one at a time so the progress display stays
                // coherent; a failed file is reported and the rest still run.
                for (index, file) in files.iter().enumerate() {
                    current_upload.set(Some(format!("{} ({}/{})", file.name(), index + 1, total)));
                    upload_percent.set(0.0);

                    let on_progress = {
                        let upload_percent = upload_percent.clone();
                        Callback::from(move |percent: f64| {
                            upload_percent.set(percent);
                        })
                    };

                    match api::upload_video(file, on_progress).await {
                        Ok(_) => {
                            uploaded += 1;
                        }
                        Err(e) => {
                            failures.push(format!("{}: {}", file.name(), e));
                            error_message
                                .set(Some(format!("Failed uploads - {}", failures.join("; "))));
                        }
                    }
                }

                if uploaded > 0 {
                    success_message.set(Some(format!(
                        "Uploaded {} of {} video(s) successfully",
                        uploaded, total
                    )));
                }

                current_upload.set(None);
                selected_files.set(Vec::new());
                uploading.set(false);

                // One refresh for the whole batch, regardless of failures
                on_uploaded.emit(());
            });
        })
    };

    html! {
        <div>
            <ErrorMessage error_message={(*error_message).clone()} />
            <SuccessMessage success_message={(*success_message).clone()} />

            <div class="mb-6 bg-gray-50 p-4 rounded-lg">
                <h3 class="text-lg font-semibold text-gray-800 mb-4">{"Upload Videos"}</h3>

                <div
                    ondrop={on_drop}
                    ondragover={on_drag_over}
                    ondragleave={on_drag_leave}
                    class={if *drag_active {
                        "border-2 border-dashed border-blue-500 bg-blue-50 rounded-lg p-8 text-center"
                    } else {
                        "border-2 border-dashed border-gray-300 rounded-lg p-8 text-center"
                    }}
                >
                    <p class="text-gray-600 mb-2">{"Drag & drop video files here, or"}</p>
                    <label class="text-blue-600 hover:underline cursor-pointer">
                        {"browse files"}
                        <input
                            type="file"
                            multiple=true
                            accept=".mp4,.mov,.avi"
                            class="hidden"
                            onchange={on_file_input}
                        />
                    </label>
                </div>

                {
                    if !(*selected_files).is_empty() {
                        html! {
                            <ul class="mt-4 divide-y divide-gray-200">
                                {
                                    (*selected_files).iter().enumerate().map(|(index, file)| {
                                        let on_remove = on_remove_file.clone();
                                        html! {
                                            <li class="py-2 flex justify-between items-center text-sm text-gray-900">
                                                <span>
                                                    {file.name()}
                                                    <span class="text-gray-500 ml-2">
                                                        {format_file_size(file.size() as i64)}
                                                    </span>
                                                </span>
                                                <button
                                                    onclick={Callback::from(move |_| on_remove.emit(index))}
                                                    disabled={*uploading}
                                                    class="text-red-600 hover:text-red-900"
                                                >
                                                    {"Remove"}
                                                </button>
                                            </li>
                                        }
                                    }).collect::<Html>()
                                }
                            </ul>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(label) = &*current_upload {
                        html! {
                            <div class="mt-4">
                                <p class="text-sm text-gray-600 mb-1">
                                    {format!("Uploading {} - {:.0}%", label, *upload_percent)}
                                </p>
                                <div class="w-full bg-gray-200 rounded h-2">
                                    <div
                                        class="bg-blue-600 h-2 rounded"
                                        style={format!("width: {:.0}%", *upload_percent)}
                                    />
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <button
                    onclick={on_start_upload}
                    disabled={*uploading}
                    class="mt-4 bg-blue-600 text-white px-6 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
                >
                    {if *uploading { "Uploading..." } else { "Start Upload" }}
                </button>
            </div>

            <h3 class="text-lg font-semibold text-gray-800 mb-4">{"Uploaded Videos"}</h3>
            {
                if props.videos.is_empty() {
                    html! {
                        <p class="text-gray-600">{"No videos uploaded yet"}</p>
                    }
                } else {
                    html! {
                        <div class="overflow-x-auto">
                            <table class="min-w-full bg-white border border-gray-300">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Filename"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Size"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Uploaded"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    {
                                        props.videos.iter().map(|video| {
                                            html! {
                                                <tr key={video.id.clone()}>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                        <div class="max-w-xs truncate">{&video.filename}</div>
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                        {format_file_size(video.file_size)}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                        {format_iso8601_datetime(&video.upload_date)}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap">
                                                        <StatusBadge status={video.status.clone()} />
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
