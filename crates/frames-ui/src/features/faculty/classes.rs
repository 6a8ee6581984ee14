//! Class list with a per-class attendance sheet and export.

use crate::app::api::use_api;
use crate::app::session::use_current_user;
use crate::components::atoms::{EmptyState, ExportMenu, SearchInput};
use crate::components::load::{Load, render_load};
use crate::components::toast::notify;
use crate::core::store::ToastKind;
use crate::features::faculty::logic::{class_label, search_classes};
use crate::features::student::logic::format_clock;
use crate::services::clock::now_local;
use crate::services::download::{ReportMode, export_report};
use frames_api_models::{ClassAttendanceEntry, ClassResponse};
use frames_report::generated_label;
use frames_report::rows::{class_attendance_info, class_attendance_rows};
use frames_report::ReportFormat;
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(FacultyClassesPage)]
pub(crate) fn faculty_classes_page() -> Html {
    let api = use_api();
    let user_id = use_current_user().map(|user| user.id);
    let classes = use_state(|| Load::<Vec<ClassResponse>>::Loading);
    let search = use_state(String::new);
    let selected = use_state(|| None::<ClassResponse>);
    let roster = use_state(|| Load::<Vec<ClassAttendanceEntry>>::Loading);

    {
        let api = api.clone();
        let classes = classes.clone();
        use_effect_with_deps(
            move |user_id: &Option<i64>| {
                if let Some(id) = *user_id {
                    spawn_local(async move {
                        let result = api.faculty_schedule(id).await;
                        classes.set(Load::from_result(result, "Unable to load classes."));
                    });
                }
                || ()
            },
            user_id,
        );
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(value))
    };
    let on_open = {
        let selected = selected.clone();
        let roster = roster.clone();
        Callback::from(move |class: ClassResponse| {
            let api = api.clone();
            let roster = roster.clone();
            let class_id = class.id;
            selected.set(Some(class));
            roster.set(Load::Loading);
            spawn_local(async move {
                let result = api.class_details(class_id).await;
                roster.set(Load::from_result(result, "Unable to load class attendance."));
            });
        })
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };
    let on_export = {
        let selected = selected.clone();
        let roster = roster.clone();
        Callback::from(move |(format, mode): (ReportFormat, ReportMode)| {
            let (Some(class), Some(entries)) = ((*selected).as_ref(), roster.ready()) else {
                return;
            };
            let now = now_local();
            let info = class_attendance_info(
                class.subject_code.clone(),
                class.section.clone(),
                now.format("%B %-d, %Y").to_string(),
                generated_label(now),
            );
            match export_report(&info, &class_attendance_rows(entries), format, mode) {
                Ok(file_name) if mode == ReportMode::Download => {
                    notify(ToastKind::Success, format!("Saved {file_name}"));
                }
                Ok(_) => {}
                Err(message) => notify(ToastKind::Error, message),
            }
        })
    };

    html! {
        <div class="flex flex-col gap-4">
            <div class="flex justify-between items-center gap-2">
                <SearchInput value={(*search).clone()} on_input={on_search} placeholder="Search classes..." />
            </div>
            {render_load(&classes, |all| {
                let shown = search_classes(all, &search);
                if shown.is_empty() {
                    return html! { <EmptyState message="No classes found." icon="fas fa-chalkboard" /> };
                }
                html! {
                    <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-4">
                        {for shown.into_iter().map(|class| {
                            let on_open = on_open.clone();
                            let target = class.clone();
                            let onclick = Callback::from(move |_| on_open.emit(target.clone()));
                            html! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <h3 class="card-title text-base">{class_label(class)}</h3>
                                        <p class="text-sm opacity-70">
                                            {format!(
                                                "{} {} {} - {}",
                                                class.section.clone().unwrap_or_default(),
                                                class.day_of_week.clone().unwrap_or_default(),
                                                format_clock(class.start_time.as_deref()),
                                                format_clock(class.end_time.as_deref()),
                                            )}
                                        </p>
                                        <p class="text-sm">{format!("{} students", class.total_students)}</p>
                                        <div class="card-actions justify-end">
                                            <button class="btn btn-sm btn-primary" {onclick}>{"View attendance"}</button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            })}
            if let Some(class) = &*selected {
                <dialog class="modal modal-open" aria-label="Class attendance">
                    <div class="modal-box max-w-4xl">
                        <div class="flex justify-between items-center gap-2 mb-4">
                            <h3 class="font-bold text-lg">{class_label(class)}</h3>
                            <ExportMenu {on_export} disabled={roster.ready().is_none()} />
                        </div>
                        {render_load(&roster, |entries| roster_table(entries))}
                        <div class="modal-action">
                            <button class="btn" onclick={on_close}>{"Close"}</button>
                        </div>
                    </div>
                </dialog>
            }
        </div>
    }
}

fn roster_table(entries: &[ClassAttendanceEntry]) -> Html {
    if entries.is_empty() {
        return html! { <EmptyState message="No students enrolled in this class." /> };
    }
    html! {
        <table class="table table-sm">
            <thead>
                <tr><th>{"Student"}</th><th>{"TUPM ID"}</th><th>{"Time In"}</th><th>{"Status"}</th><th>{"Remarks"}</th></tr>
            </thead>
            <tbody>
                {for entries.iter().map(|entry| html! {
                    <tr>
                        <td>{format!("{} {}", entry.first_name, entry.last_name)}</td>
                        <td>{entry.tupm_id.clone()}</td>
                        <td>{entry.time_in.clone().unwrap_or_else(|| "--".to_string())}</td>
                        <td>{entry.status.clone()}</td>
                        <td>{entry.remarks.clone().unwrap_or_else(|| "-".to_string())}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
