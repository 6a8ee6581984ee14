//! Account table shared by the management pages.

use crate::components::atoms::EmptyState;
use crate::features::dept_head::logic::UserAction;
use frames_api_models::VerificationStatus;
use frames_report::UserListing;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct UserTableProps {
    pub users: Vec<UserListing>,
    /// Receives the chosen action; no action column when absent.
    #[prop_or_default]
    pub on_action: Option<Callback<(UserAction, UserListing)>>,
    /// Makes the name open the account summary.
    #[prop_or_default]
    pub on_select: Option<Callback<UserListing>>,
}

const fn status_badge(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Verified => "badge-success",
        VerificationStatus::Pending => "badge-warning",
        VerificationStatus::Rejected => "badge-error",
    }
}

#[function_component(UserTable)]
pub(crate) fn user_table(props: &UserTableProps) -> Html {
    if props.users.is_empty() {
        return html! { <EmptyState message="No users match the current filters." icon="fas fa-user-slash" /> };
    }
    let action_button = |action: UserAction, user: &UserListing, style: &'static str| {
        let Some(on_action) = props.on_action.clone() else {
            return html! {};
        };
        let user = user.clone();
        let onclick = Callback::from(move |_| on_action.emit((action, user.clone())));
        html! { <button class={classes!("btn", "btn-xs", style)} {onclick}>{action.label()}</button> }
    };
    html! {
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Name"}</th><th>{"TUPM ID"}</th><th>{"Role"}</th><th>{"Department"}</th>
                        <th>{"Status"}</th><th>{"Face"}</th>
                        if props.on_action.is_some() { <th>{"Actions"}</th> }
                    </tr>
                </thead>
                <tbody>
                    {for props.users.iter().map(|user| html! {
                        <tr>
                            <td>
                                {match props.on_select.clone() {
                                    Some(on_select) => {
                                        let selected = user.clone();
                                        let onclick =
                                            Callback::from(move |_| on_select.emit(selected.clone()));
                                        html! {
                                            <button class="link link-hover font-medium" title="View Profile" {onclick}>
                                                {user.name.clone()}
                                            </button>
                                        }
                                    }
                                    None => html! { <div class="font-medium">{user.name.clone()}</div> },
                                }}
                                <div class="text-xs opacity-60">{user.email.clone()}</div>
                            </td>
                            <td>{user.tupm_id.clone()}</td>
                            <td>{user.role.clone()}</td>
                            <td>{user.department.clone()}</td>
                            <td><span class={classes!("badge", status_badge(user.verification))}>{user.verification.as_str()}</span></td>
                            <td>{user.face.label()}</td>
                            if props.on_action.is_some() {
                                <td class="flex gap-1">
                                    if user.verification != VerificationStatus::Verified {
                                        {action_button(UserAction::Approve, user, "btn-success")}
                                    }
                                    if user.verification == VerificationStatus::Pending {
                                        {action_button(UserAction::Reject, user, "btn-warning")}
                                    }
                                    {action_button(UserAction::Delete, user, "btn-error btn-outline")}
                                </td>
                            }
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
