use std::fs;
use std::path::Path;

use anyhow::anyhow;
use base64::{Engine as _, engine::general_purpose};
use frames_api_models::{
    ENROLLMENT_MAX_FRAMES, ENROLLMENT_MIN_FRAMES, EnrollmentRequest, EnrollmentResponse,
    FaceStatusResponse,
};
use reqwest::Method;

use crate::cli::{FaceEnrollArgs, OutputFormat, UserIdArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::{render_enrollment, render_face_status};

fn image_mime(path: &Path) -> CliResult<&'static str> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => Ok("image/jpeg"),
        Some("png") => Ok("image/png"),
        _ => Err(CliError::validation(format!(
            "unsupported image type for {} (expected .jpg, .jpeg or .png)",
            path.display()
        ))),
    }
}

/// Encode an image file as a `data:` URL accepted by the enrollment endpoint.
pub(crate) fn frame_data_url(path: &Path) -> CliResult<String> {
    let mime = image_mime(path)?;
    let bytes = fs::read(path)
        .map_err(|err| CliError::failure(anyhow!("failed to read {}: {err}", path.display())))?;
    Ok(format!(
        "data:{mime};base64,{}",
        general_purpose::STANDARD.encode(bytes)
    ))
}

pub(crate) async fn handle_face_enroll(
    ctx: &AppContext,
    args: FaceEnrollArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let count = args.images.len();
    if !(ENROLLMENT_MIN_FRAMES..=ENROLLMENT_MAX_FRAMES).contains(&count) {
        return Err(CliError::validation(format!(
            "enrollment needs between {ENROLLMENT_MIN_FRAMES} and {ENROLLMENT_MAX_FRAMES} frames, got {count}"
        )));
    }

    let frames = args
        .images
        .iter()
        .map(|path| frame_data_url(path))
        .collect::<CliResult<Vec<_>>>()?;
    let request = EnrollmentRequest {
        user_id: args.user_id,
        frames,
    };

    tracing::info!(user_id = args.user_id, frames = count, "submitting face enrollment");
    let response: EnrollmentResponse = ctx
        .send_json(Method::POST, "/api/face/enroll", &[], &request)
        .await?;
    if !response.success {
        return Err(CliError::validation(response.message));
    }
    render_enrollment(&response, format)
}

pub(crate) async fn handle_face_status(
    ctx: &AppContext,
    args: UserIdArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let status: FaceStatusResponse = ctx
        .get_json(&format!("/api/face/status/{}", args.id))
        .await?;
    render_face_status(&status, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context_with;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn write_frames(dir: &Path, count: usize, extension: &str) -> Vec<PathBuf> {
        (0..count)
            .map(|index| {
                let path = dir.join(format!("frame{index}.{extension}"));
                fs::write(&path, [0xFF, 0xD8, 0xFF]).expect("write frame");
                path
            })
            .collect()
    }

    #[test]
    fn data_url_carries_mime_and_base64_body() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("face.JPG");
        fs::write(&path, [0xFF, 0xD8, 0xFF]).expect("write frame");
        assert_eq!(
            frame_data_url(&path).expect("encode"),
            "data:image/jpeg;base64,/9j/"
        );
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = frame_data_url(Path::new("face.gif")).expect_err("gif rejected");
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn enroll_rejects_too_few_frames_locally() {
        let server = MockServer::start_async().await;
        let temp = tempfile::tempdir().expect("tempdir");
        let args = FaceEnrollArgs {
            user_id: 3,
            images: write_frames(temp.path(), ENROLLMENT_MIN_FRAMES - 1, "jpg"),
        };

        let ctx = context_with(&server);
        let err = handle_face_enroll(&ctx, args, OutputFormat::Table)
            .await
            .expect_err("too few frames");
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn enroll_uploads_every_frame() {
        let server = MockServer::start_async().await;
        let temp = tempfile::tempdir().expect("tempdir");
        let images = write_frames(temp.path(), 15, "png");
        let frames: Vec<String> = std::iter::repeat_n("data:image/png;base64,/9j/".to_string(), 15).collect();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/face/enroll")
                .json_body(json!({"user_id": 3, "frames": frames}));
            then.status(200).json_body(json!({
                "success": true,
                "message": "Face registered",
                "num_samples": 14,
                "quality_score": 0.91
            }));
        });

        let ctx = context_with(&server);
        handle_face_enroll(
            &ctx,
            FaceEnrollArgs { user_id: 3, images },
            OutputFormat::Json,
        )
        .await
        .expect("enroll should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn unsuccessful_enrollment_surfaces_message() {
        let server = MockServer::start_async().await;
        let temp = tempfile::tempdir().expect("tempdir");
        server.mock(|when, then| {
            when.method(POST).path("/api/face/enroll");
            then.status(200).json_body(json!({
                "success": false,
                "message": "No face detected in enough frames"
            }));
        });

        let ctx = context_with(&server);
        let err = handle_face_enroll(
            &ctx,
            FaceEnrollArgs {
                user_id: 3,
                images: write_frames(temp.path(), 5, "jpg"),
            },
            OutputFormat::Table,
        )
        .await
        .expect_err("enrollment should fail");
        assert_eq!(err.display_message(), "No face detected in enough frames");
    }

    #[tokio::test]
    async fn status_reads_face_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/face/status/3");
            then.status(200).json_body(json!({
                "user_id": 3,
                "face_registered": true,
                "num_samples": 14,
                "quality_score": 0.91,
                "model_version": "facenet-512"
            }));
        });

        let ctx = context_with(&server);
        handle_face_status(&ctx, UserIdArgs { id: 3 }, OutputFormat::Table)
            .await
            .expect("status should load");
        mock.assert();
    }
}
