use frames_api_models::{
    MessageResponse, NotificationItem, UserResponse, UserScheduleEntry, VerificationDecision,
    VerificationStatus,
};
use frames_report::{DirectoryFilter, RoleCounts, RoleFilter, UserListing, VerificationFilter};
use reqwest::Method;

use crate::cli::{OutputFormat, UserIdArgs, UserListArgs, VerifyListArgs};
use crate::client::{AppContext, CliResult};
use crate::output::{render_notifications, render_user, render_user_list, render_user_schedule};

pub(crate) const USER_LIST_PATH: &str = "/api/admin/verification/list";

/// Every account known to the verification endpoint.
pub(crate) async fn fetch_users(ctx: &AppContext) -> CliResult<Vec<UserResponse>> {
    ctx.get_json(USER_LIST_PATH).await
}

pub(crate) fn directory_filter(args: &UserListArgs) -> DirectoryFilter {
    DirectoryFilter {
        search: args.search.clone(),
        role: RoleFilter::parse(&args.role),
    }
}

pub(crate) async fn handle_user_list(
    ctx: &AppContext,
    args: UserListArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let users = fetch_users(ctx).await?;
    let counts = RoleCounts::tally(&users);
    let listings: Vec<UserListing> = users.iter().map(UserListing::from).collect();
    let shown = directory_filter(&args).apply(&listings);
    render_user_list(&shown, &counts, format)
}

pub(crate) async fn handle_user_show(
    ctx: &AppContext,
    args: UserIdArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let user: UserResponse = ctx.get_json(&format!("/api/users/{}", args.id)).await?;
    render_user(&user, format)
}

pub(crate) async fn handle_user_schedule(
    ctx: &AppContext,
    args: UserIdArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let entries: Vec<UserScheduleEntry> = ctx
        .get_json(&format!("/api/dept/user-schedule/{}", args.id))
        .await?;
    render_user_schedule(&entries, format)
}

pub(crate) async fn handle_user_delete(ctx: &AppContext, args: UserIdArgs) -> CliResult<()> {
    let response: MessageResponse = ctx
        .delete_json(&format!("/api/admin/user/{}", args.id))
        .await?;
    println!("{}", response.message);
    Ok(())
}

pub(crate) async fn handle_verify_list(
    ctx: &AppContext,
    args: VerifyListArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let users = fetch_users(ctx).await?;
    let counts = RoleCounts::tally(&users);
    let listings: Vec<UserListing> = users.iter().map(UserListing::from).collect();
    let shown = VerificationFilter::new(&args.search, &args.role, &args.status).apply(&listings);
    render_user_list(&shown, &counts, format)
}

/// Approve (`true`) or reject (`false`) a pending registration.
pub(crate) async fn handle_verify_decision(
    ctx: &AppContext,
    args: UserIdArgs,
    approve: bool,
) -> CliResult<()> {
    let (path, status) = if approve {
        ("/api/admin/verification/approve", VerificationStatus::Verified)
    } else {
        ("/api/admin/verification/reject", VerificationStatus::Rejected)
    };
    let decision = VerificationDecision {
        user_id: args.id,
        verification_status: status,
    };
    let response: MessageResponse = ctx
        .send_json(
            Method::POST,
            path,
            &[("user_id", args.id.to_string())],
            &decision,
        )
        .await?;
    tracing::info!(user_id = args.id, status = status.as_str(), "verification decided");
    println!("{}", response.message);
    Ok(())
}

pub(crate) async fn handle_notifications(
    ctx: &AppContext,
    args: UserIdArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let items: Vec<NotificationItem> = ctx
        .get_json(&format!("/api/users/notifications/{}", args.id))
        .await?;
    render_notifications(&items, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CliError;
    use crate::commands::test_support::context_with;
    use httpmock::prelude::*;
    use serde_json::{Value, json};

    fn user_json(id: i64, role: &str, status: &str) -> Value {
        json!({
            "id": id,
            "email": format!("user{id}@tup.edu.ph"),
            "first_name": "User",
            "last_name": id.to_string(),
            "role": role,
            "tupm_id": format!("TUPM-22-{id:04}"),
            "face_registered": false,
            "verification_status": status
        })
    }

    #[tokio::test]
    async fn user_list_reads_verification_listing() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path(USER_LIST_PATH);
            then.status(200).json_body(json!([
                user_json(1, "STUDENT", "Verified"),
                user_json(2, "FACULTY", "Pending"),
                user_json(3, "FACULTY", "Verified")
            ]));
        });

        let ctx = context_with(&server);
        let args = UserListArgs {
            search: String::new(),
            role: "FACULTY".into(),
        };
        handle_user_list(&ctx, args, OutputFormat::Json)
            .await
            .expect("list should succeed");
        mock.assert();
    }

    #[test]
    fn directory_filter_matches_role_exactly() {
        let users: Vec<UserResponse> = [
            user_json(1, "STUDENT", "Verified"),
            user_json(2, "FACULTY", "Verified"),
            user_json(3, "FACULTY", "Pending"),
        ]
        .into_iter()
        .map(|value| serde_json::from_value(value).expect("user"))
        .collect();
        let listings: Vec<UserListing> = users.iter().map(UserListing::from).collect();

        let faculty = directory_filter(&UserListArgs {
            search: String::new(),
            role: "FACULTY".into(),
        })
        .apply(&listings);
        assert_eq!(faculty.iter().map(|user| user.id).collect::<Vec<_>>(), vec![2, 3]);

        let lowercase = directory_filter(&UserListArgs {
            search: String::new(),
            role: "Faculty".into(),
        })
        .apply(&listings);
        assert!(lowercase.is_empty());
    }

    #[tokio::test]
    async fn approve_sends_query_and_body() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/admin/verification/approve")
                .query_param("user_id", "12")
                .json_body(json!({"user_id": 12, "verification_status": "Verified"}));
            then.status(200).json_body(json!({"message": "User approved"}));
        });

        let ctx = context_with(&server);
        handle_verify_decision(&ctx, UserIdArgs { id: 12 }, true)
            .await
            .expect("approve should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn reject_targets_reject_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/admin/verification/reject")
                .query_param("user_id", "12")
                .json_body(json!({"user_id": 12, "verification_status": "Rejected"}));
            then.status(200).json_body(json!({"message": "User rejected"}));
        });

        let ctx = context_with(&server);
        handle_verify_decision(&ctx, UserIdArgs { id: 12 }, false)
            .await
            .expect("reject should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn delete_missing_user_is_validation_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/admin/user/99");
            then.status(404).json_body(json!({"detail": "User not found"}));
        });

        let ctx = context_with(&server);
        let err = handle_user_delete(&ctx, UserIdArgs { id: 99 })
            .await
            .expect_err("delete should fail");
        assert!(matches!(err, CliError::Validation(ref message) if message == "User not found"));
    }

    #[tokio::test]
    async fn notifications_accept_numeric_ids() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/users/notifications/5");
            then.status(200).json_body(json!([
                {"id": 1, "icon": "fa-bell", "text": "Account verified", "time": "2h ago", "read": false}
            ]));
        });

        let ctx = context_with(&server);
        handle_notifications(&ctx, UserIdArgs { id: 5 }, OutputFormat::Table)
            .await
            .expect("notifications should load");
        mock.assert();
    }

    #[tokio::test]
    async fn schedule_reads_department_timetable() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/dept/user-schedule/7");
            then.status(200).json_body(json!([
                {"subject_code": "CS101", "section": "BSCS-1A", "day": "Monday", "time": "08:00 AM - 10:00 AM", "room": "Lab 1"},
                {"subject_code": "CS102"}
            ]));
        });

        let ctx = context_with(&server);
        handle_user_schedule(&ctx, UserIdArgs { id: 7 }, OutputFormat::Table)
            .await
            .expect("schedule should load");
        mock.assert();
    }
}
