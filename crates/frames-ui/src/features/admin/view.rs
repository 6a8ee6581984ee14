//! Administrator overview: verification queue and directory export.

use crate::app::api::use_api;
use crate::components::atoms::{ExportMenu, SearchInput, StatCard};
use crate::components::load::render_load;
use crate::components::user_table::UserTable;
use crate::features::dept_head::logic::UserAction;
use crate::features::dept_head::users::{export_directory, run_user_action, use_user_list};
use crate::services::download::ReportMode;
use frames_report::{ReportFormat, RoleCounts, StatusFilter, UserListing, VerificationFilter};
use yew::prelude::*;

#[function_component(AdminDashboardPage)]
pub(crate) fn admin_dashboard_page() -> Html {
    let api = use_api();
    let (users, refresh) = use_user_list();
    let search = use_state(String::new);

    let listings: Vec<UserListing> = users
        .ready()
        .map(|all| all.iter().map(UserListing::from).collect())
        .unwrap_or_default();
    let queue: Vec<UserListing> = VerificationFilter {
        search: (*search).clone(),
        status: StatusFilter::Outstanding,
        ..VerificationFilter::default()
    }
    .apply(&listings)
    .into_iter()
    .cloned()
    .collect();

    let on_search = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(value))
    };
    let on_action = {
        let refresh = refresh.clone();
        Callback::from(move |(action, user): (UserAction, UserListing)| {
            run_user_action(api.clone(), action, &user, refresh.clone());
        })
    };
    let on_export = {
        let listings = listings.clone();
        Callback::from(move |(format, mode): (ReportFormat, ReportMode)| {
            let rows: Vec<&UserListing> = listings.iter().collect();
            export_directory(&rows, format, mode);
        })
    };

    html! {
        <div class="flex flex-col gap-6">
            {render_load(&users, |all| {
                let counts = RoleCounts::tally(all);
                html! {
                    <div class="stats stats-vertical md:stats-horizontal shadow">
                        <StatCard label="Students" value={counts.students.to_string()} icon="fas fa-user-graduate" />
                        <StatCard label="Faculty" value={counts.faculty.to_string()} icon="fas fa-chalkboard-teacher" />
                        <StatCard label="Admins" value={counts.admins.to_string()} icon="fas fa-user-shield" />
                        <StatCard label="Pending" value={counts.pending.to_string()} icon="fas fa-user-clock" />
                    </div>
                }
            })}
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <div class="flex flex-wrap justify-between items-center gap-2">
                        <h3 class="card-title text-base">{"Verification Queue"}</h3>
                        <SearchInput value={(*search).clone()} on_input={on_search} placeholder="Search applicants..." />
                    </div>
                    <UserTable users={queue} on_action={Some(on_action)} />
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body flex-row flex-wrap justify-between items-center gap-2">
                    <div>
                        <h3 class="card-title text-base">{"User Directory"}</h3>
                        <p class="text-sm opacity-70">{format!("{} accounts", listings.len())}</p>
                    </div>
                    <ExportMenu {on_export} disabled={listings.is_empty()} />
                </div>
            </div>
        </div>
    }
}
