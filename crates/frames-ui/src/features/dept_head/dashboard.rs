//! Department overview: head counts and the pending queue.

use crate::app::Route;
use crate::components::atoms::{EmptyState, StatCard};
use crate::components::load::render_load;
use crate::components::user_table::UserTable;
use crate::features::dept_head::users::use_user_list;
use frames_api_models::VerificationStatus;
use frames_report::{RoleCounts, UserListing};
use yew::prelude::*;
use yew_router::prelude::*;

const PENDING_PREVIEW: usize = 5;

#[function_component(DeptHeadDashboardPage)]
pub(crate) fn dept_head_dashboard_page() -> Html {
    let (users, _refresh) = use_user_list();

    html! {
        <div class="flex flex-col gap-6">
            {render_load(&users, |all| {
                let counts = RoleCounts::tally(all);
                let pending: Vec<UserListing> = all
                    .iter()
                    .filter(|user| user.verification_status == VerificationStatus::Pending)
                    .take(PENDING_PREVIEW)
                    .map(UserListing::from)
                    .collect();
                html! {
                    <>
                        <div class="stats stats-vertical md:stats-horizontal shadow">
                            <StatCard label="Students" value={counts.students.to_string()} icon="fas fa-user-graduate" />
                            <StatCard label="Faculty" value={counts.faculty.to_string()} icon="fas fa-chalkboard-teacher"
                                hint={Some(AttrValue::from(format!("{} department heads", counts.heads)))} />
                            <StatCard label="Total Users" value={counts.total().to_string()} icon="fas fa-users" />
                            <StatCard label="Pending Verification" value={counts.pending.to_string()} icon="fas fa-user-clock" />
                        </div>
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <div class="flex justify-between items-center">
                                    <h3 class="card-title text-base">{"Pending Verifications"}</h3>
                                    <Link<Route> to={Route::DeptHeadUsers} classes="btn btn-link btn-sm">{"Manage users"}</Link<Route>>
                                </div>
                                if pending.is_empty() {
                                    <EmptyState message="No registrations awaiting review." icon="fas fa-user-check" />
                                } else {
                                    <UserTable users={pending} />
                                }
                            </div>
                        </div>
                    </>
                }
            })}
        </div>
    }
}
