use crate::api;
use crate::env_variable_utils::get_app_name;
use crate::models::{DashboardStats, QueueEntry, Video, VideoMetadata};
use yew::prelude::*;

pub mod components;
pub mod metadata;
pub mod queue;
pub mod schedule;
pub mod upload;

use components::{StatsPanel, TabBar};
use metadata::MetadataTab;
use queue::QueueTab;
use schedule::ScheduleTab;
use upload::UploadTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Upload,
    Metadata,
    Schedule,
    Queue,
}

impl Default for ActiveTab {
    fn default() -> Self {
        ActiveTab::Upload
    }
}

impl ActiveTab {
    pub fn display_name(&self) -> &'static str {
        match self {
            ActiveTab::Upload => "Upload",
            ActiveTab::Metadata => "Metadata",
            ActiveTab::Schedule => "Schedule",
            ActiveTab::Queue => "Queue",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            ActiveTab::Upload,
            ActiveTab::Metadata,
            ActiveTab::Schedule,
            ActiveTab::Queue,
        ]
    }
}

// Read paths fail soft: on error the previous snapshot stays in place and
// the failure only leaves a trace in the console.

pub async fn refresh_stats(stats: UseStateHandle<DashboardStats>) {
    match api::fetch_stats().await {
        Ok(data) => stats.set(data),
        Err(e) => log::error!("Failed to refresh stats: {}", e),
    }
}

pub async fn refresh_videos(videos: UseStateHandle<Vec<Video>>) {
    match api::fetch_videos().await {
        Ok(data) => videos.set(data),
        Err(e) => log::error!("Failed to refresh videos: {}", e),
    }
}

pub async fn refresh_metadata(metadata: UseStateHandle<Vec<VideoMetadata>>) {
    match api::fetch_metadata().await {
        Ok(data) => metadata.set(data),
        Err(e) => log::error!("Failed to refresh metadata: {}", e),
    }
}

pub async fn refresh_queue(queue: UseStateHandle<Vec<QueueEntry>>) {
    match api::fetch_queue().await {
        Ok(data) => queue.set(data),
        Err(e) => log::error!("Failed to refresh queue: {}", e),
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {}

#[function_component(DashboardPage)]
pub fn dashboard_page(_props: &DashboardPageProps) -> Html {
    let stats = use_state(DashboardStats::default);
    let videos = use_state(Vec::<Video>::new);
    let metadata = use_state(Vec::<VideoMetadata>::new);
    let queue = use_state(Vec::<QueueEntry>::new);
    let active_tab = use_state(ActiveTab::default);

    // Initial load: the four collections fetch as independent tasks with no
    // ordering between them, each resolving on its own.
    {
        let stats = stats.clone();
        let videos = videos.clone();
        let metadata = metadata.clone();
        let queue = queue.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(refresh_stats(stats));
            wasm_bindgen_futures::spawn_local(refresh_videos(videos));
            wasm_bindgen_futures::spawn_local(refresh_metadata(metadata));
            wasm_bindgen_futures::spawn_local(refresh_queue(queue));
            wasm_bindgen_futures::spawn_local(async {
                match api::fetch_api_config().await {
                    Ok(Some(config)) => log::debug!("API config: {}", config),
                    Ok(None) => log::debug!("Backend publishes no API config"),
                    Err(e) => log::warn!("Failed to fetch API config: {}", e),
                }
            });
            || ()
        });
    }

    // Tab selection is local UI state; switching never touches the network.
    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: ActiveTab| {
            active_tab.set(tab);
        })
    };

    let on_uploaded = {
        let stats = stats.clone();
        let videos = videos.clone();
        Callback::from(move |_: ()| {
            wasm_bindgen_futures::spawn_local(refresh_stats(stats.clone()));
            wasm_bindgen_futures::spawn_local(refresh_videos(videos.clone()));
        })
    };

    let on_metadata_created = {
        let stats = stats.clone();
        let metadata = metadata.clone();
        Callback::from(move |_: ()| {
            wasm_bindgen_futures::spawn_local(refresh_stats(stats.clone()));
            wasm_bindgen_futures::spawn_local(refresh_metadata(metadata.clone()));
        })
    };

    let on_scheduled = {
        let stats = stats.clone();
        let queue = queue.clone();
        Callback::from(move |_: ()| {
            wasm_bindgen_futures::spawn_local(refresh_stats(stats.clone()));
            wasm_bindgen_futures::spawn_local(refresh_queue(queue.clone()));
        })
    };

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-6xl mx-auto">
                <div class="bg-white rounded-lg shadow-lg p-8">
                    <div class="flex justify-between items-center mb-6">
                        <h1 class="text-3xl font-bold text-gray-800">
                            { get_app_name() }
                        </h1>
                    </div>

                    <StatsPanel stats={(*stats).clone()} />

                    <TabBar active={*active_tab} on_select={on_select_tab} />

                    {
                        match *active_tab {
                            ActiveTab::Upload => html! {
                                <UploadTab
                                    videos={(*videos).clone()}
                                    on_uploaded={on_uploaded}
                                />
                            },
                            ActiveTab::Metadata => html! {
                                <MetadataTab
                                    metadata={(*metadata).clone()}
                                    on_created={on_metadata_created}
                                />
                            },
                            ActiveTab::Schedule => html! {
                                <ScheduleTab
                                    videos={(*videos).clone()}
                                    metadata={(*metadata).clone()}
                                    on_scheduled={on_scheduled}
                                />
                            },
                            ActiveTab::Queue => html! {
                                <QueueTab
                                    queue={(*queue).clone()}
                                    videos={(*videos).clone()}
                                    metadata={(*metadata).clone()}
                                />
                            },
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_upload() {
        assert_eq!(ActiveTab::default(), ActiveTab::Upload);
    }

    #[test]
    fn tab_bar_offers_all_four_views() {
        let tabs = ActiveTab::all_variants();
        assert_eq!(
            tabs,
            vec![
                ActiveTab::Upload,
                ActiveTab::Metadata,
                ActiveTab::Schedule,
                ActiveTab::Queue,
            ]
        );
    }
}
