use crate::env_variable_utils::API_BASE_URL;
use crate::models::{
    BulkCreateResponse, DashboardStats, ErrorResponse, MetadataCreate, QueueEntry,
    ScheduleInterval, ScheduleRequest, UploadResponse, Video, VideoMetadata,
};
use gloo_net::http::{Request, Response};
use js_sys::Promise;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};
use yew::Callback;

fn endpoint_url(path: &str) -> Result<String, String> {
    match &*API_BASE_URL {
        Some(base) => Ok(format!("{}{}", base, path)),
        None => Err("Backend URL is not configured".to_string()),
    }
}

/// Non-2xx responses carry a structured `{"detail": ...}` body when the
/// backend rejected the request itself; anything else falls back to the
/// status and raw body text.
fn error_from_body(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => error_response.detail,
        Err(_) => {
            if body.trim().is_empty() {
                format!("HTTP error: {}", status)
            } else {
                format!("HTTP error: {} - {}", status, body)
            }
        }
    }
}

async fn read_error(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => error_from_body(status, &body),
        Err(_) => format!("HTTP error: {}", status),
    }
}

pub async fn fetch_stats() -> Result<DashboardStats, String> {
    let url = endpoint_url("/dashboard/stats")?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<DashboardStats>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(read_error(response).await)
    }
}

pub async fn fetch_videos() -> Result<Vec<Video>, String> {
    let url = endpoint_url("/videos")?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<Video>>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(read_error(response).await)
    }
}

pub async fn fetch_metadata() -> Result<Vec<VideoMetadata>, String> {
    let url = endpoint_url("/metadata")?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<VideoMetadata>>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(read_error(response).await)
    }
}

pub async fn fetch_queue() -> Result<Vec<QueueEntry>, String> {
    let url = endpoint_url("/queue")?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<QueueEntry>>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(read_error(response).await)
    }
}

/// Optional deployment configuration probe. The endpoint may not exist on
/// every backend, so 404 counts as "no config" rather than an error.
pub async fn fetch_api_config() -> Result<Option<serde_json::Value>, String> {
    let url = endpoint_url("/config/api")?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<serde_json::Value>()
            .await
            .map(Some)
            .map_err(|e| format!("JSON parse error: {}", e))
    } else if response.status() == 404 {
        Ok(None)
    } else {
        Err(read_error(response).await)
    }
}

pub async fn create_metadata(entry: &MetadataCreate) -> Result<VideoMetadata, String> {
    let url = endpoint_url("/metadata")?;

    let response = Request::post(&url)
        .json(entry)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<VideoMetadata>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(read_error(response).await)
    }
}

pub async fn create_metadata_bulk(entries: &[MetadataCreate]) -> Result<BulkCreateResponse, String> {
    let url = endpoint_url("/metadata/bulk")?;

    let response = Request::post(&url)
        .json(&entries)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<BulkCreateResponse>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(read_error(response).await)
    }
}

pub async fn schedule_upload(
    video_id: &str,
    metadata_id: &str,
    schedule_interval: ScheduleInterval,
) -> Result<QueueEntry, String> {
    let url = endpoint_url("/queue")?;

    let request_body = ScheduleRequest {
        video_id: video_id.to_string(),
        metadata_id: metadata_id.to_string(),
        schedule_interval,
    };

    let response = Request::post(&url)
        .json(&request_body)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<QueueEntry>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(read_error(response).await)
    }
}

/// Multipart upload over `XmlHttpRequest`: the fetch API cannot observe
/// upload progress, and the dropzone needs a live percentage. The progress
/// sink receives 0-100 as the browser reports it, zero or more times.
pub async fn upload_video(file: &File, on_progress: Callback<f64>) -> Result<UploadResponse, String> {
    let url = endpoint_url("/videos/upload")?;

    let form_data = FormData::new().map_err(|_| "Failed to create form data".to_string())?;
    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Failed to attach file to form data".to_string())?;

    let xhr = XmlHttpRequest::new().map_err(|_| "Failed to create upload request".to_string())?;
    xhr.open("POST", &url)
        .map_err(|_| "Failed to open upload request".to_string())?;

    let completion = Promise::new(&mut |resolve, reject| {
        let progress = {
            let on_progress = on_progress.clone();
            Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
                if event.length_computable() && event.total() > 0.0 {
                    on_progress.emit(event.loaded() / event.total() * 100.0);
                }
            })
        };
        if let Ok(upload) = xhr.upload() {
            upload.set_onprogress(Some(progress.as_ref().unchecked_ref()));
        }
        progress.forget();

        let onload = Closure::once(move |_: ProgressEvent| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        xhr.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::once(move |_: ProgressEvent| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("transport failure"));
        });
        xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    });

    xhr.send_with_opt_form_data(Some(&form_data))
        .map_err(|_| "Failed to send upload request".to_string())?;

    JsFuture::from(completion)
        .await
        .map_err(|_| "Network error: upload transport failed".to_string())?;

    let status = xhr.status().unwrap_or(0);
    let body = xhr.response_text().ok().flatten().unwrap_or_default();

    if (200..300).contains(&status) {
        serde_json::from_str::<UploadResponse>(&body)
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(error_from_body(status, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_detail_bodies_surface_their_message() {
        let message = error_from_body(400, r#"{"detail": "Only MP4, MOV, AVI files allowed"}"#);
        assert_eq!(message, "Only MP4, MOV, AVI files allowed");
    }

    #[test]
    fn unstructured_bodies_fall_back_to_status_and_text() {
        let message = error_from_body(502, "Bad Gateway");
        assert_eq!(message, "HTTP error: 502 - Bad Gateway");
    }

    #[test]
    fn empty_bodies_fall_back_to_status_only() {
        assert_eq!(error_from_body(500, ""), "HTTP error: 500");
        assert_eq!(error_from_body(500, "  "), "HTTP error: 500");
    }
}
