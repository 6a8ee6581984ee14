//! Camera capture and face template submission.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::Route;
use crate::app::api::use_api;
use crate::core::enrollment::{
    CAMERA_ERROR, CAMERA_IDEAL, CAPTURE_INTERVAL_MS, CameraSlot, CaptureProgress, CaptureState,
    JPEG_QUALITY,
    REDIRECT_DELAY_MS, REQUIRED_FRAMES, phase_at, success_message,
};
use crate::core::session::enrollment_destination;
use crate::core::store::AppStore;
use crate::services::clock::now_ms;
use frames_api_models::EnrollmentRequest;
use gloo::console;
use gloo::timers::callback::{Interval, Timeout};
use gloo::utils::window;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const PHASE_TICK_MS: u32 = 250;

#[derive(Clone, Debug, PartialEq)]
enum Stage {
    Starting,
    Ready,
    Capturing,
    Submitting { started_ms: i64 },
    Enrolled(String),
    Failed(String),
}

fn video_constraints() -> Result<JsValue, JsValue> {
    let ideal = |value: u32| -> Result<Object, JsValue> {
        let entry = Object::new();
        Reflect::set(&entry, &"ideal".into(), &value.into())?;
        Ok(entry)
    };
    let video = Object::new();
    Reflect::set(&video, &"width".into(), &ideal(CAMERA_IDEAL.0)?)?;
    Reflect::set(&video, &"height".into(), &ideal(CAMERA_IDEAL.1)?)?;
    Reflect::set(&video, &"facingMode".into(), &"user".into())?;
    Ok(video.into())
}

async fn open_camera(video: &HtmlVideoElement) -> Result<MediaStream, JsValue> {
    let devices = window().navigator().media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video_constraints()?);
    constraints.set_audio(&JsValue::FALSE);
    let stream: MediaStream = JsFuture::from(devices.get_user_media_with_constraints(&constraints)?)
        .await?
        .dyn_into()?;
    video.set_src_object(Some(&stream));
    JsFuture::from(video.play()?).await?;
    Ok(stream)
}

fn stop_camera(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Draw the mirrored video frame and encode it as a JPEG data URL.
fn grab_frame(video: &HtmlVideoElement, canvas: &HtmlCanvasElement) -> Result<String, JsValue> {
    let (width, height) = (video.video_width(), video.video_height());
    canvas.set_width(width);
    canvas.set_height(height);
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;
    context.translate(f64::from(width), 0.0)?;
    context.scale(-1.0, 1.0)?;
    context.draw_image_with_html_video_element(video, 0.0, 0.0)?;
    context.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    canvas.to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(JPEG_QUALITY))
}

#[function_component(FaceEnrollmentPage)]
pub(crate) fn face_enrollment_page() -> Html {
    let session = use_selector(|store: &AppStore| store.session.clone());
    let navigator = use_navigator();
    let api = use_api();
    let video_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let camera = use_mut_ref(CameraSlot::<MediaStream>::default);
    let capture = use_mut_ref(CaptureState::default);
    let capture_timer: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);
    let stage = use_state(|| Stage::Starting);
    let frames_taken = use_state(|| 0_usize);
    let now = use_state(now_ms);

    {
        let navigator = navigator.clone();
        let signed_in = session.is_some();
        use_effect_with_deps(
            move |signed_in: &bool| {
                if !*signed_in {
                    if let Some(navigator) = &navigator {
                        navigator.replace(&Route::Landing);
                    }
                }
                || ()
            },
            signed_in,
        );
    }
    {
        let video_ref = video_ref.clone();
        let camera = camera.clone();
        let stage = stage.clone();
        let capture_timer = capture_timer.clone();
        use_effect_with_deps(
            move |()| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    let camera = camera.clone();
                    spawn_local(async move {
                        match open_camera(&video).await {
                            Ok(opened) => {
                                let stale = camera.borrow_mut().attach(opened);
                                match stale {
                                    // Permission resolved after the page went away.
                                    Some(stale) => stop_camera(&stale),
                                    None => stage.set(Stage::Ready),
                                }
                            }
                            Err(err) => {
                                console::error!("camera unavailable", err);
                                stage.set(Stage::Failed(CAMERA_ERROR.to_string()));
                            }
                        }
                    });
                }
                move || {
                    capture_timer.borrow_mut().take();
                    let opened = camera.borrow_mut().close();
                    if let Some(opened) = opened {
                        stop_camera(&opened);
                    }
                }
            },
            (),
        );
    }
    {
        let now = now.clone();
        use_effect_with_deps(
            move |submitting: &bool| {
                let ticker = submitting.then(|| {
                    Interval::new(PHASE_TICK_MS, move || now.set(now_ms()))
                });
                move || drop(ticker)
            },
            matches!(*stage, Stage::Submitting { .. }),
        );
    }

    let on_start = {
        let capture = capture.clone();
        let capture_timer = capture_timer.clone();
        let stage = stage.clone();
        let frames_taken = frames_taken.clone();
        let video_ref = video_ref.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |_| {
            let (Some(video), Some(canvas)) = (
                video_ref.cast::<HtmlVideoElement>(),
                canvas_ref.cast::<HtmlCanvasElement>(),
            ) else {
                return;
            };
            capture.borrow_mut().start();
            frames_taken.set(0);
            stage.set(Stage::Capturing);
            let capture = capture.clone();
            let stage = stage.clone();
            let frames_taken = frames_taken.clone();
            let timer_slot = capture_timer.clone();
            let interval = Interval::new(CAPTURE_INTERVAL_MS, move || {
                let frame = match grab_frame(&video, &canvas) {
                    Ok(frame) => frame,
                    Err(err) => {
                        console::warn!("frame capture failed", err);
                        return;
                    }
                };
                let progress = capture.borrow_mut().push(frame);
                frames_taken.set(capture.borrow().count());
                if progress == CaptureProgress::Complete {
                    stage.set(Stage::Ready);
                    // Dropping the interval from inside its own tick is deferred to a timeout.
                    let timer_slot = timer_slot.clone();
                    Timeout::new(0, move || {
                        timer_slot.borrow_mut().take();
                    })
                    .forget();
                }
            });
            *capture_timer.borrow_mut() = Some(interval);
        })
    };
    let on_reset = {
        let capture = capture.clone();
        let capture_timer = capture_timer.clone();
        let stage = stage.clone();
        let frames_taken = frames_taken.clone();
        Callback::from(move |_| {
            capture_timer.borrow_mut().take();
            capture.borrow_mut().reset();
            frames_taken.set(0);
            stage.set(Stage::Ready);
        })
    };
    let on_submit = {
        let capture = capture.clone();
        let stage = stage.clone();
        let session = session.clone();
        Callback::from(move |_| {
            let Some(user) = (*session).clone() else {
                return;
            };
            if !capture.borrow().can_submit() {
                return;
            }
            let request = EnrollmentRequest {
                user_id: user.id,
                frames: capture.borrow().frames().to_vec(),
            };
            let api = api.clone();
            let stage = stage.clone();
            let navigator = navigator.clone();
            let capture = capture.clone();
            stage.set(Stage::Submitting {
                started_ms: now_ms(),
            });
            spawn_local(async move {
                match api.enroll_face(&request).await {
                    Ok(response) if response.success => {
                        Dispatch::<AppStore>::new().reduce_mut(AppStore::mark_face_registered);
                        stage.set(Stage::Enrolled(success_message(response.quality_score)));
                        let destination = Route::from(enrollment_destination(user.role));
                        Timeout::new(REDIRECT_DELAY_MS, move || {
                            if let Some(navigator) = &navigator {
                                navigator.replace(&destination);
                            }
                        })
                        .forget();
                    }
                    Ok(response) => {
                        capture.borrow_mut().reset();
                        stage.set(Stage::Failed(response.message));
                    }
                    Err(err) => {
                        console::error!("enrollment failed", err.to_string());
                        capture.borrow_mut().reset();
                        let message = err.user_message("Enrollment failed. Please try again.");
                        stage.set(Stage::Failed(message));
                    }
                }
            });
        })
    };

    let snapshot = capture.borrow().clone();
    let percent = snapshot.percent();
    let status = match &*stage {
        Stage::Starting => "Starting camera...".to_string(),
        Stage::Submitting { started_ms } => {
            let elapsed = u32::try_from((*now - started_ms).max(0)).unwrap_or(u32::MAX);
            phase_at(elapsed).message.to_string()
        }
        Stage::Enrolled(message) | Stage::Failed(message) => message.clone(),
        Stage::Ready | Stage::Capturing => snapshot.status_line(),
    };
    let busy = matches!(*stage, Stage::Submitting { .. } | Stage::Enrolled(_));
    let camera_open = camera.borrow().is_open();
    let tone = match &*stage {
        Stage::Enrolled(_) => "alert-success",
        Stage::Failed(_) => "alert-error",
        _ => "alert-info",
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-6">
            <div class="card w-full max-w-2xl bg-base-100 shadow-xl">
                <div class="card-body gap-4">
                    <h2 class="card-title">{"Face Enrollment"}</h2>
                    <p class="text-sm opacity-70">
                        {format!("Look at the camera and turn your head slowly. {REQUIRED_FRAMES} frames are captured automatically.")}
                    </p>
                    <div class="relative rounded-box overflow-hidden bg-black aspect-video">
                        <video ref={video_ref} class="w-full h-full object-cover -scale-x-100" autoplay=true muted=true playsinline=true />
                        <canvas ref={canvas_ref} class="hidden" />
                    </div>
                    <div class="flex items-center gap-3">
                        <progress class="progress progress-primary flex-1" value={percent.to_string()} max="100"></progress>
                        <span class="badge badge-outline">{format!("{}/{REQUIRED_FRAMES}", *frames_taken)}</span>
                    </div>
                    <div class={classes!("alert", tone)} role="status">{status}</div>
                    <div class="card-actions justify-end">
                        <button class="btn btn-ghost" onclick={on_reset} disabled={busy || !camera_open}>
                            {"Reset"}
                        </button>
                        <button class="btn btn-outline" onclick={on_start}
                            disabled={busy || !camera_open || snapshot.is_capturing()}>
                            {"Start Capture"}
                        </button>
                        <button class="btn btn-primary" onclick={on_submit} disabled={busy || !snapshot.can_submit()}>
                            {"Enroll Face"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
