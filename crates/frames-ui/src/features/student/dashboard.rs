//! Student overview: attendance stats, notices, recent logs and live status.

use std::rc::Rc;

use crate::app::Route;
use crate::app::api::use_api;
use crate::app::session::use_current_user;
use crate::components::atoms::{EmptyState, StatCard};
use crate::components::load::{Load, render_load};
use crate::core::config::LIVE_STATUS_POLL_MS;
use crate::core::live_status::{LiveStatus, live_status};
use crate::services::clock::now_local;
use frames_api_models::StudentDashboard;
use gloo::console;
use gloo::timers::callback::Interval;
use web_sys::AbortController;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const DASHBOARD_FALLBACK: &str = "Unable to load your dashboard.";

#[function_component(StudentDashboardPage)]
pub(crate) fn student_dashboard_page() -> Html {
    let api = use_api();
    let user = use_current_user();
    let user_id = user.as_ref().map(|user| user.id);
    let dashboard = use_state(|| Load::<StudentDashboard>::Loading);
    let live = use_state(|| None::<LiveStatus>);

    {
        let api = api.clone();
        let dashboard = dashboard.clone();
        use_effect_with_deps(
            move |user_id: &Option<i64>| {
                if let Some(id) = *user_id {
                    spawn_local(async move {
                        let result = api.student_dashboard(id).await;
                        dashboard.set(Load::from_result(result, DASHBOARD_FALLBACK));
                    });
                }
                || ()
            },
            user_id,
        );
    }
    {
        let live = live.clone();
        use_effect_with_deps(
            move |user_id: &Option<i64>| {
                let controller = AbortController::new().ok();
                let mut interval = None;
                if let Some(id) = *user_id {
                    let signal = controller.as_ref().map(AbortController::signal);
                    let poll = Rc::new(move || {
                        let api = api.clone();
                        let live = live.clone();
                        let signal = signal.clone();
                        spawn_local(async move {
                            match api.student_history(id, signal.as_ref()).await {
                                Ok(records) => live.set(Some(live_status(&records, now_local()))),
                                Err(err) if err.is_aborted() => {}
                                Err(err) => console::warn!("live status poll failed", err.to_string()),
                            }
                        });
                    });
                    poll();
                    interval = Some(Interval::new(LIVE_STATUS_POLL_MS, move || poll()));
                }
                move || {
                    drop(interval);
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
            user_id,
        );
    }

    let first_name = user.map(|user| user.first_name).unwrap_or_default();

    html! {
        <div class="flex flex-col gap-6">
            <section>
                <h2 class="text-2xl font-semibold">{format!("Welcome back, {first_name}!")}</h2>
                <p class="opacity-70">{"Here is your attendance at a glance."}</p>
            </section>
            {live_card((*live).as_ref())}
            {render_load(&dashboard, |data| html! {
                <>
                    <div class="stats stats-vertical md:stats-horizontal shadow">
                        <StatCard label="Attendance Rate" value={data.attendance_rate.clone()} icon="fas fa-chart-line" />
                        <StatCard label="Enrolled Courses" value={data.enrolled_courses.to_string()} icon="fas fa-book" />
                    </div>
                    <div class="grid lg:grid-cols-2 gap-6">
                        {notices(data)}
                        {recent(data)}
                    </div>
                </>
            })}
        </div>
    }
}

fn live_card(status: Option<&LiveStatus>) -> Html {
    let Some(status) = status else {
        return html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body"><span class="loading loading-dots"></span></div>
            </div>
        };
    };
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body flex-row items-center gap-4">
                <span class={classes!("badge", "badge-lg", format!("badge-{}", status.presence.tone()))}>
                    {status.presence.label()}
                </span>
                <div class="flex-1">
                    <p class="font-medium">{status.message.clone()}</p>
                    <p class="text-sm opacity-70">{format!("Room: {}", status.room)}</p>
                </div>
            </div>
        </div>
    }
}

fn notices(data: &StudentDashboard) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-base">{"Notices"}</h3>
                if data.notifications.is_empty() {
                    <EmptyState message="No new notices." />
                }
                <ul class="flex flex-col gap-2">
                    {for data.notifications.iter().map(|notice| html! {
                        <li class="flex gap-2 items-start">
                            <i class={notice.icon.clone().unwrap_or_else(|| "fas fa-info-circle".to_string())} aria-hidden="true"></i>
                            <span>{notice.message.clone()}</span>
                        </li>
                    })}
                </ul>
            </div>
        </div>
    }
}

fn recent(data: &StudentDashboard) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h3 class="card-title text-base">{"Recent Attendance"}</h3>
                    <Link<Route> to={Route::StudentAttendance} classes="btn btn-link btn-sm">{"View history"}</Link<Route>>
                </div>
                if data.recent_attendance.is_empty() {
                    <EmptyState message="No attendance recorded yet." />
                } else {
                    <table class="table table-sm">
                        <thead><tr><th>{"Course"}</th><th>{"Room"}</th><th>{"Time"}</th></tr></thead>
                        <tbody>
                            {for data.recent_attendance.iter().map(|entry| html! {
                                <tr>
                                    <td>{entry.course_name.clone()}</td>
                                    <td>{entry.room.clone()}</td>
                                    <td>{entry.timestamp.clone()}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
