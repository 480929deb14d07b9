use crate::dashboard::ActiveTab;
use crate::models::DashboardStats;
use crate::utils::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessMessageProps {
    pub success_message: Option<String>,
}

#[function_component(SuccessMessage)]
pub fn success_message(props: &SuccessMessageProps) -> Html {
    if let Some(msg) = &props.success_message {
        html! {
            <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub stats: DashboardStats,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-6">
            <div class="bg-blue-100 p-4 rounded-lg">
                <h3 class="text-lg font-semibold text-blue-800">{"Total Videos"}</h3>
                <p class="text-2xl font-bold text-blue-600">{format_number(props.stats.total_videos)}</p>
            </div>
            <div class="bg-green-100 p-4 rounded-lg">
                <h3 class="text-lg font-semibold text-green-800">{"Completed"}</h3>
                <p class="text-2xl font-bold text-green-600">{format_number(props.stats.completed)}</p>
            </div>
            <div class="bg-yellow-100 p-4 rounded-lg">
                <h3 class="text-lg font-semibold text-yellow-800">{"Pending"}</h3>
                <p class="text-2xl font-bold text-yellow-600">{format_number(props.stats.pending)}</p>
            </div>
            <div class="bg-purple-100 p-4 rounded-lg">
                <h3 class="text-lg font-semibold text-purple-800">{"Unused Metadata"}</h3>
                <p class="text-2xl font-bold text-purple-600">{format_number(props.stats.unused_metadata)}</p>
            </div>
        </div>
    }
}

pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "uploaded" => "bg-blue-100 text-blue-800",
        "pending" => "bg-yellow-100 text-yellow-800",
        "completed" => "bg-green-100 text-green-800",
        "failed" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: String,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={format!(
            "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
            status_badge_class(&props.status)
        )}>
            { &props.status }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: ActiveTab,
    pub on_select: Callback<ActiveTab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="flex gap-2 border-b border-gray-200 mb-6">
            {
                for ActiveTab::all_variants().into_iter().map(|tab| {
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_| {
                        on_select.emit(tab);
                    });

                    html! {
                        <button
                            {onclick}
                            class={if tab == props.active {
                                "px-4 py-2 font-semibold text-blue-600 border-b-2 border-blue-600"
                            } else {
                                "px-4 py-2 text-gray-500 hover:text-gray-700"
                            }}
                        >
                            { tab.display_name() }
                        </button>
                    }
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_statuses_get_a_neutral_badge() {
        assert_eq!(status_badge_class("processing"), "bg-gray-100 text-gray-800");
        assert_eq!(status_badge_class("failed"), "bg-red-100 text-red-800");
        assert_eq!(status_badge_class("completed"), "bg-green-100 text-green-800");
    }
}
