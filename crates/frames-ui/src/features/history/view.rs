//! Attendance history with report filters and export.

use crate::app::api::use_api;
use crate::app::session::use_current_user;
use crate::components::atoms::{EmptyState, ExportMenu, StatCard};
use crate::components::load::{Load, render_load};
use crate::components::toast::notify;
use crate::core::errors::ApiError;
use crate::core::store::ToastKind;
use crate::features::history::logic::{
    ALL_SUBJECTS, HistoryForm, academic_year_label, academic_year_options,
};
use crate::services::api::ApiClient;
use crate::services::clock::now_local;
use crate::services::download::{ReportMode, export_report};
use frames_api_models::{AttendanceRecord, ScheduleItem, UserResponse};
use frames_report::history::{
    AttendanceTally, DateInput, history_rows, map_logs, schedule_subjects, status_label,
};
use frames_report::{HistoryReportKind, MappedLog, ReportFormat, Semester, generated_label};
use gloo::console;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    account: Option<UserResponse>,
    logs: Vec<MappedLog>,
    subjects: Vec<String>,
}

async fn load_history(
    api: &ApiClient,
    user_id: i64,
) -> Result<HistoryData, ApiError> {
    let account = match api.fetch_user(user_id).await {
        Ok(account) => Some(account),
        Err(err) => {
            console::warn!("profile refresh failed", err.to_string());
            None
        }
    };
    let schedule: Vec<ScheduleItem> = match api.student_schedule(user_id).await {
        Ok(schedule) => schedule,
        Err(err) => {
            console::warn!("schedule unavailable", err.to_string());
            Vec::new()
        }
    };
    let records: Vec<AttendanceRecord> = api.student_history(user_id, None).await?;
    Ok(HistoryData {
        account,
        logs: map_logs(&records, &schedule),
        subjects: schedule_subjects(&schedule),
    })
}

fn select_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}

fn input_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(AttendanceHistoryPage)]
pub(crate) fn attendance_history_page() -> Html {
    let api = use_api();
    let user = use_current_user();
    let user_id = user.as_ref().map(|user| user.id);
    let today = now_local().date();
    let data = use_state(|| Load::<HistoryData>::Loading);
    let form = use_state(|| HistoryForm::new(today));

    {
        let data = data.clone();
        use_effect_with_deps(
            move |user_id: &Option<i64>| {
                if let Some(id) = *user_id {
                    spawn_local(async move {
                        let result = load_history(&api, id).await;
                        data.set(Load::from_result(result, "Unable to load attendance history."));
                    });
                }
                || ()
            },
            user_id,
        );
    }

    let update = |apply: fn(&mut HistoryForm, String), read: fn(&Event) -> String| {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let mut next = (*form).clone();
            apply(&mut next, read(&event));
            form.set(next);
        })
    };
    let on_kind = update(
        |form, value| {
            if let Ok(kind) = value.parse::<HistoryReportKind>() {
                form.kind = kind;
            }
        },
        select_value,
    );
    let on_date = update(|form, value| form.date = value, input_value);
    let on_month = update(|form, value| form.month = value, input_value);
    let on_year = update(
        |form, value| {
            if let Ok(year) = value.parse() {
                form.academic_year = year;
            }
        },
        select_value,
    );
    let on_semester = update(
        |form, value| {
            if let Ok(semester) = value.parse::<Semester>() {
                form.semester = semester;
            }
        },
        select_value,
    );
    let on_subject = update(|form, value| form.subject = value, select_value);

    let query = form.query(today);
    let selected: Vec<MappedLog> = data
        .ready()
        .map(|loaded| query.apply(&loaded.logs))
        .unwrap_or_default();

    let on_export = {
        let query = query.clone();
        let selected = selected.clone();
        let data = data.clone();
        Callback::from(move |(format, mode): (ReportFormat, ReportMode)| {
            let account = data
                .ready()
                .and_then(|loaded| loaded.account.clone())
                .or_else(|| user.clone());
            let info = query.report_info(
                account.as_ref().map(UserResponse::full_name),
                account.map(|account| account.tupm_id),
                generated_label(now_local()),
            );
            match export_report(&info, &history_rows(&selected), format, mode) {
                Ok(file_name) if mode == ReportMode::Download => {
                    notify(ToastKind::Success, format!("Saved {file_name}"));
                }
                Ok(_) => {}
                Err(message) => notify(ToastKind::Error, message),
            }
        })
    };

    let tally = AttendanceTally::from_logs(&selected);
    let subjects = data
        .ready()
        .map(|loaded| loaded.subjects.clone())
        .unwrap_or_default();
    let current = (*form).clone();

    html! {
        <div class="flex flex-col gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <div class="flex flex-wrap gap-3 items-end">
                        <label class="form-control">
                            <span class="label-text">{"Report"}</span>
                            <select class="select select-bordered select-sm" onchange={on_kind}>
                                {for HistoryReportKind::ALL.iter().map(|kind| html! {
                                    <option value={kind.code()} selected={*kind == current.kind}>{kind.label()}</option>
                                })}
                            </select>
                        </label>
                        {match current.kind.input() {
                            DateInput::Day | DateInput::WeekStart | DateInput::RangeEnd => html! {
                                <label class="form-control">
                                    <span class="label-text">{date_caption(current.kind.input())}</span>
                                    <input class="input input-bordered input-sm" type="date" value={current.date.clone()} onchange={on_date} />
                                </label>
                            },
                            DateInput::Month => html! {
                                <label class="form-control">
                                    <span class="label-text">{"Month"}</span>
                                    <input class="input input-bordered input-sm" type="month" value={current.month.clone()} onchange={on_month} />
                                </label>
                            },
                            DateInput::AcademicYear | DateInput::Semester => html! {
                                <>
                                    <label class="form-control">
                                        <span class="label-text">{"Academic Year"}</span>
                                        <select class="select select-bordered select-sm" onchange={on_year}>
                                            {for academic_year_options(today).into_iter().map(|year| html! {
                                                <option value={year.to_string()} selected={year == current.academic_year}>
                                                    {academic_year_label(year)}
                                                </option>
                                            })}
                                        </select>
                                    </label>
                                    if current.kind.input() == DateInput::Semester {
                                        <label class="form-control">
                                            <span class="label-text">{"Semester"}</span>
                                            <select class="select select-bordered select-sm" onchange={on_semester}>
                                                {for Semester::ALL.iter().map(|semester| html! {
                                                    <option value={semester.code()} selected={*semester == current.semester}>
                                                        {format!("{} Semester", semester.ordinal())}
                                                    </option>
                                                })}
                                            </select>
                                        </label>
                                    }
                                </>
                            },
                            DateInput::None => html! {},
                        }}
                        <label class="form-control">
                            <span class="label-text">{"Subject"}</span>
                            <select class="select select-bordered select-sm" onchange={on_subject}>
                                <option value={ALL_SUBJECTS} selected={current.subject == ALL_SUBJECTS}>{ALL_SUBJECTS}</option>
                                {for subjects.iter().map(|subject| html! {
                                    <option value={subject.clone()} selected={current.subject == *subject}>{subject.clone()}</option>
                                })}
                            </select>
                        </label>
                        <div class="ml-auto">
                            <ExportMenu {on_export} disabled={data.ready().is_none()} />
                        </div>
                    </div>
                    <p class="text-sm opacity-70">
                        {format!("{}: {}", current.kind.description(), query.date_range_label())}
                    </p>
                </div>
            </div>
            <div class="stats stats-vertical md:stats-horizontal shadow">
                <StatCard label="Present" value={tally.present.to_string()} icon="fas fa-check" />
                <StatCard label="Late" value={tally.late.to_string()} icon="fas fa-clock" />
                <StatCard label="Absent" value={tally.absent.to_string()} icon="fas fa-xmark" />
                <StatCard label="Breaks" value={tally.breaks.to_string()} icon="fas fa-mug-hot" />
            </div>
            {render_load(&data, |_| history_table(&selected))}
        </div>
    }
}

const fn date_caption(input: DateInput) -> &'static str {
    match input {
        DateInput::WeekStart => "Week starting",
        DateInput::RangeEnd => "Ending on",
        _ => "Date",
    }
}

fn history_table(logs: &[MappedLog]) -> Html {
    if logs.is_empty() {
        return html! { <EmptyState message="No attendance records for this period." icon="far fa-calendar-xmark" /> };
    }
    html! {
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table table-zebra">
                <thead>
                    <tr><th>{"Date"}</th><th>{"Time"}</th><th>{"Subject"}</th><th>{"Room"}</th><th>{"Status"}</th></tr>
                </thead>
                <tbody>
                    {for logs.iter().map(|log| html! {
                        <tr>
                            <td>{log.at.format("%b %-d, %Y").to_string()}</td>
                            <td>{log.at.format("%-I:%M %p").to_string()}</td>
                            <td>{log.subject.clone()}</td>
                            <td>{log.record.room.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                            <td>{status_label(&log.record.action)}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
