//! Application root: providers, router and boot.
//!
//! # Design
//! - The stored session is loaded into the store before the first render so
//!   route gates never see a transient signed-out state.
//! - Session changes are written back to local storage from one effect.

use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::store::AppStore;
use crate::features::admin::view::AdminDashboardPage;
use crate::features::dept_head::dashboard::DeptHeadDashboardPage;
use crate::features::dept_head::reports::DeptReportsPage;
use crate::features::dept_head::users::UserManagementPage;
use crate::features::enrollment::view::FaceEnrollmentPage;
use crate::features::faculty::classes::FacultyClassesPage;
use crate::features::faculty::dashboard::FacultyDashboardPage;
use crate::features::history::view::AttendanceHistoryPage;
use crate::features::landing::view::LandingPage;
use crate::features::notifications::view::NotificationsPage;
use crate::features::profile::view::ProfilePage;
use crate::features::registration::status::RegistrationStatusPage;
use crate::features::registration::view::RegisterPage;
use crate::features::student::dashboard::StudentDashboardPage;
use crate::features::student::schedule::StudentSchedulePage;
use preferences::{api_base_url, load_session, persist_session};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
mod preferences;
mod routes;
pub(crate) mod session;

use api::ApiCtx;

#[function_component(FramesApp)]
pub(crate) fn frames_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let session = use_selector(|store: &AppStore| store.session.clone());

    use_effect_with_deps(
        move |session| {
            persist_session(session.as_ref().as_ref());
            || ()
        },
        session,
    );

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
                <ToastHost />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn guarded(route: &Route, page: Html) -> Html {
    match route.area() {
        Some(area) => html! { <AppShell {area}>{page}</AppShell> },
        None => page,
    }
}

fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Landing => html! { <LandingPage /> },
        Route::Register { role } => html! { <RegisterPage role={role.clone()} /> },
        Route::RegistrationStatus { state } => {
            html! { <RegistrationStatusPage state={state.clone()} /> }
        }
        Route::FaceEnrollment => html! { <FaceEnrollmentPage /> },
        Route::StudentDashboard => html! { <StudentDashboardPage /> },
        Route::StudentSchedule => html! { <StudentSchedulePage /> },
        Route::StudentAttendance => html! { <AttendanceHistoryPage /> },
        Route::FacultyDashboard => html! { <FacultyDashboardPage /> },
        Route::FacultyClasses => html! { <FacultyClassesPage /> },
        Route::DeptHeadDashboard => html! { <DeptHeadDashboardPage /> },
        Route::DeptHeadUsers => html! { <UserManagementPage /> },
        Route::DeptHeadReports => html! { <DeptReportsPage /> },
        Route::AdminDashboard => html! { <AdminDashboardPage /> },
        Route::Notifications => html! { <NotificationsPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => html! {
            <section class="not-found">
                <h2>{"Page not found"}</h2>
                <Link<Route> to={Route::Landing} classes="btn btn-primary">{"Back to sign in"}</Link<Route>>
            </section>
        },
    };
    guarded(&route, page)
}

/// Mount the dashboard into `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let session = load_session();
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        store.session = session;
    });
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<FramesApp>::with_root(root).render();
    } else {
        yew::Renderer::<FramesApp>::new().render();
    }
}
