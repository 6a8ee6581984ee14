use frames_api_models::{LoginRequest, LoginResponse};
use reqwest::Method;

use crate::cli::{LoginArgs, OutputFormat};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_login;

pub(crate) async fn handle_login(
    ctx: &AppContext,
    args: LoginArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let email = args.email.trim().to_string();
    if email.is_empty() || args.password.is_empty() {
        return Err(CliError::validation("email and password are required"));
    }
    let request = LoginRequest {
        email,
        password: args.password,
    };
    let response: LoginResponse = ctx
        .send_json(Method::POST, "/api/auth/login", &[], &request)
        .await?;
    tracing::info!(user_id = response.user.id, role = %response.user.role.as_str(), "login accepted");
    render_login(&response, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context_with;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn login_posts_credentials() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(json!({"email": "ana@tup.edu.ph", "password": "secret1"}));
            then.status(200).json_body(json!({
                "message": "Login successful",
                "user": {
                    "id": 4,
                    "email": "ana@tup.edu.ph",
                    "first_name": "Ana",
                    "last_name": "Cruz",
                    "role": "STUDENT",
                    "tupm_id": "TUPM-22-0001",
                    "face_registered": true,
                    "verification_status": "Verified"
                }
            }));
        });

        let ctx = context_with(&server);
        let args = LoginArgs {
            email: " ana@tup.edu.ph ".into(),
            password: "secret1".into(),
        };
        handle_login(&ctx, args, OutputFormat::Json)
            .await
            .expect("login should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn rejected_credentials_are_validation_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .json_body(json!({"detail": "Invalid credentials"}));
        });

        let ctx = context_with(&server);
        let args = LoginArgs {
            email: "ana@tup.edu.ph".into(),
            password: "wrong".into(),
        };
        let err = handle_login(&ctx, args, OutputFormat::Table)
            .await
            .expect_err("login should fail");
        assert!(matches!(err, CliError::Validation(ref message) if message == "Invalid credentials"));
    }

    #[tokio::test]
    async fn blank_email_never_reaches_the_server() {
        let server = MockServer::start_async().await;
        let ctx = context_with(&server);
        let args = LoginArgs {
            email: "  ".into(),
            password: "secret1".into(),
        };
        let err = handle_login(&ctx, args, OutputFormat::Table)
            .await
            .expect_err("blank email");
        assert_eq!(err.exit_code(), 2);
    }
}
