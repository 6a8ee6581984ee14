//! Department reports over the faculty summary and room occupancy feeds.

use crate::app::api::use_api;
use crate::components::atoms::{EmptyState, ExportMenu};
use crate::components::load::{Load, render_load};
use crate::components::toast::notify;
use crate::core::store::ToastKind;
use crate::features::dept_head::logic::{DeptReport, ReportSource, period_label};
use crate::services::clock::now_local;
use crate::services::download::{ReportMode, export_report};
use frames_api_models::{FacultySummaryEntry, RoomOccupancyEntry};
use frames_report::rows::{faculty_summary_rows, room_occupancy_rows};
use frames_report::{ReportFormat, ReportInfo, ReportRow, generated_label};
use yew::platform::spawn_local;
use yew::prelude::*;

fn deliver(info: &ReportInfo, rows: &[ReportRow], format: ReportFormat, mode: ReportMode) {
    match export_report(info, rows, format, mode) {
        Ok(file_name) if mode == ReportMode::Download => {
            notify(ToastKind::Success, format!("Saved {file_name}"));
        }
        Ok(_) => {}
        Err(message) => notify(ToastKind::Error, message),
    }
}

#[function_component(DeptReportsPage)]
pub(crate) fn dept_reports_page() -> Html {
    let api = use_api();
    let faculty = use_state(|| Load::<Vec<FacultySummaryEntry>>::Loading);
    let rooms = use_state(|| Load::<Vec<RoomOccupancyEntry>>::Loading);

    {
        let faculty = faculty.clone();
        let rooms = rooms.clone();
        use_effect_with_deps(
            move |()| {
                let rooms_api = api.clone();
                spawn_local(async move {
                    let result = api.faculty_summary().await;
                    faculty.set(Load::from_result(result, "Unable to load the faculty summary."));
                });
                spawn_local(async move {
                    let result = rooms_api.room_occupancy().await;
                    rooms.set(Load::from_result(result, "Unable to load room occupancy."));
                });
                || ()
            },
            (),
        );
    }

    let selected = use_state(|| DeptReport::FacultySummary);
    let report = *selected;

    let on_export = {
        let faculty = faculty.clone();
        let rooms = rooms.clone();
        Callback::from(move |(format, mode): (ReportFormat, ReportMode)| {
            let now = now_local();
            let info = report.info(period_label(now), generated_label(now));
            let rows = match report.source() {
                ReportSource::Faculty => faculty
                    .ready()
                    .map(|entries| faculty_summary_rows(&report.order_faculty(entries))),
                ReportSource::Rooms => rooms
                    .ready()
                    .map(|entries| room_occupancy_rows(&report.order_rooms(entries))),
            };
            if let Some(rows) = rows {
                deliver(&info, &rows, format, mode);
            }
        })
    };
    let ready = match report.source() {
        ReportSource::Faculty => faculty.ready().is_some(),
        ReportSource::Rooms => rooms.ready().is_some(),
    };
    let body = match report.source() {
        ReportSource::Faculty => {
            render_load(&faculty, |entries| faculty_table(&report.order_faculty(entries)))
        }
        ReportSource::Rooms => {
            render_load(&rooms, |entries| room_table(&report.order_rooms(entries)))
        }
    };

    html! {
        <div class="flex flex-col gap-6">
            <p class="opacity-70">{format!("Reporting period: {}", period_label(now_local()))}</p>
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-3" role="radiogroup" aria-label="Report type">
                {for DeptReport::ALL.into_iter().map(|candidate| {
                    let selected = selected.clone();
                    let onclick = Callback::from(move |_| selected.set(candidate));
                    let active = candidate == report;
                    html! {
                        <button role="radio" aria-checked={active.to_string()} {onclick}
                            class={classes!("card", "bg-base-100", "shadow", "text-left", active.then_some("ring-2 ring-primary"))}>
                            <div class="card-body p-4">
                                <h3 class="font-semibold">{candidate.label()}</h3>
                                <p class="text-xs opacity-70">{candidate.description()}</p>
                            </div>
                        </button>
                    }
                })}
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex flex-wrap justify-between items-start gap-2">
                        <h3 class="card-title text-base">{report.label()}</h3>
                        <ExportMenu {on_export} disabled={!ready} />
                    </div>
                    {body}
                </div>
            </div>
        </div>
    }
}

fn faculty_table(entries: &[FacultySummaryEntry]) -> Html {
    if entries.is_empty() {
        return html! { <EmptyState message="No faculty data available." /> };
    }
    html! {
        <table class="table table-sm">
            <thead>
                <tr><th>{"Faculty"}</th><th>{"Subject Load"}</th><th>{"Attendance"}</th><th>{"Average Lates"}</th><th>{"Status"}</th></tr>
            </thead>
            <tbody>
                {for entries.iter().map(|entry| html! {
                    <tr>
                        <td>{entry.name.clone()}</td>
                        <td>{format!("{} Units", entry.subject_load)}</td>
                        <td>{format!("{:.0}%", entry.attendance_rate)}</td>
                        <td>{format!("{:.1}", entry.lates)}</td>
                        <td>{entry.remarks.clone()}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

fn room_table(entries: &[RoomOccupancyEntry]) -> Html {
    if entries.is_empty() {
        return html! { <EmptyState message="No room data available." /> };
    }
    html! {
        <table class="table table-sm">
            <thead>
                <tr><th>{"Room"}</th><th>{"Capacity"}</th><th>{"Current"}</th><th>{"Utilization"}</th><th>{"Status"}</th></tr>
            </thead>
            <tbody>
                {for entries.iter().map(|entry| html! {
                    <tr>
                        <td>{entry.room_name.clone()}</td>
                        <td>{entry.capacity.to_string()}</td>
                        <td>{entry.peak_hour.to_string()}</td>
                        <td>
                            <progress class="progress progress-primary w-24" value={entry.utilization.to_string()} max="100"></progress>
                            {format!(" {:.0}%", entry.utilization)}
                        </td>
                        <td>{entry.status.clone()}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
