//! Faculty overview: teaching stats and today's classes.

use crate::app::Route;
use crate::app::api::use_api;
use crate::app::session::use_current_user;
use crate::components::atoms::{EmptyState, StatCard};
use crate::components::load::{Load, render_load};
use crate::features::faculty::logic::{class_label, classes_on, rate_tone};
use crate::features::student::logic::format_clock;
use crate::services::clock::now_local;
use frames_api_models::{ClassResponse, FacultyDashboardStats};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(FacultyDashboardPage)]
pub(crate) fn faculty_dashboard_page() -> Html {
    let api = use_api();
    let user_id = use_current_user().map(|user| user.id);
    let stats = use_state(|| Load::<FacultyDashboardStats>::Loading);
    let classes = use_state(|| Load::<Vec<ClassResponse>>::Loading);

    {
        let stats = stats.clone();
        let classes = classes.clone();
        use_effect_with_deps(
            move |user_id: &Option<i64>| {
                if let Some(id) = *user_id {
                    let schedule_api = api.clone();
                    spawn_local(async move {
                        let result = api.faculty_stats(id).await;
                        stats.set(Load::from_result(result, "Unable to load statistics."));
                    });
                    spawn_local(async move {
                        let result = schedule_api.faculty_schedule(id).await;
                        classes.set(Load::from_result(result, "Unable to load classes."));
                    });
                }
                || ()
            },
            user_id,
        );
    }

    let weekday = now_local().format("%A").to_string();

    html! {
        <div class="flex flex-col gap-6">
            {render_load(&stats, |stats| html! {
                <div class="stats stats-vertical md:stats-horizontal shadow">
                    <StatCard label="Total Classes" value={stats.total_classes.to_string()} icon="fas fa-chalkboard" />
                    <StatCard label="Total Students" value={stats.total_students.to_string()} icon="fas fa-users" />
                    <StatCard label="Today's Classes" value={stats.todays_classes.to_string()} icon="far fa-calendar-check" />
                    <StatCard label="Average Attendance" value={format!("{:.0}%", stats.average_attendance)} icon="fas fa-chart-pie" />
                </div>
            })}
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex justify-between items-center">
                        <h3 class="card-title text-base">{format!("Today's Classes ({weekday})")}</h3>
                        <Link<Route> to={Route::FacultyClasses} classes="btn btn-link btn-sm">{"All classes"}</Link<Route>>
                    </div>
                    {render_load(&classes, |all| {
                        let today = classes_on(all, &weekday);
                        if today.is_empty() {
                            return html! { <EmptyState message="No classes scheduled today." icon="far fa-calendar" /> };
                        }
                        html! {
                            <table class="table">
                                <thead>
                                    <tr><th>{"Class"}</th><th>{"Section"}</th><th>{"Time"}</th><th>{"Room"}</th><th>{"Attendance"}</th><th>{"Status"}</th></tr>
                                </thead>
                                <tbody>
                                    {for today.iter().map(|class| html! {
                                        <tr>
                                            <td>{class_label(class)}</td>
                                            <td>{class.section.clone().unwrap_or_default()}</td>
                                            <td>{format!("{} - {}", format_clock(class.start_time.as_deref()), format_clock(class.end_time.as_deref()))}</td>
                                            <td>{class.room.clone().unwrap_or_else(|| "TBA".to_string())}</td>
                                            <td>
                                                <span class={classes!("badge", rate_tone(class.rate))}>
                                                    {format!("{}/{} ({}%)", class.present_count, class.total_students, class.rate)}
                                                </span>
                                            </td>
                                            <td>{class.status.clone()}</td>
                                        </tr>
                                    })}
                                </tbody>
                            </table>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
