//! Weekly class schedule.

use crate::app::api::use_api;
use crate::app::session::use_current_user;
use crate::components::atoms::EmptyState;
use crate::components::load::{Load, render_load};
use crate::features::student::logic::{group_by_day, time_span};
use frames_api_models::ScheduleItem;
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(StudentSchedulePage)]
pub(crate) fn student_schedule_page() -> Html {
    let api = use_api();
    let user_id = use_current_user().map(|user| user.id);
    let schedule = use_state(|| Load::<Vec<ScheduleItem>>::Loading);

    {
        let schedule = schedule.clone();
        use_effect_with_deps(
            move |user_id: &Option<i64>| {
                if let Some(id) = *user_id {
                    spawn_local(async move {
                        let result = api.student_schedule(id).await;
                        schedule.set(Load::from_result(result, "Unable to load your schedule."));
                    });
                }
                || ()
            },
            user_id,
        );
    }

    html! {
        <div class="flex flex-col gap-4">
            {render_load(&schedule, |items| {
                let days = group_by_day(items);
                if days.is_empty() {
                    return html! { <EmptyState message="No classes scheduled." icon="far fa-calendar" /> };
                }
                html! {
                    <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-4">
                        {for days.iter().map(|day| html! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <h3 class="card-title text-base">{day.day}</h3>
                                    <ul class="flex flex-col gap-3">
                                        {for day.classes.iter().map(|item| html! {
                                            <li class="border-l-4 border-primary pl-3">
                                                <p class="font-medium">
                                                    {item.subject_title.clone().or_else(|| item.subject_code.clone()).unwrap_or_default()}
                                                </p>
                                                <p class="text-sm opacity-70">{time_span(item)}</p>
                                                <p class="text-sm opacity-70">
                                                    {item.room.clone().unwrap_or_else(|| "TBA".to_string())}
                                                    if let Some(faculty) = &item.faculty_name {
                                                        {format!(" / {faculty}")}
                                                    }
                                                </p>
                                            </li>
                                        })}
                                    </ul>
                                </div>
                            </div>
                        })}
                    </div>
                }
            })}
        </div>
    }
}
