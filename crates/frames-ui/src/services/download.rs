//! Hand rendered reports to the browser as a download or a new tab.

use crate::services::clock::now_ms;
use frames_report::{ExportedReport, ReportFormat, ReportInfo, ReportRow, export};
use gloo::console;
use gloo::utils::{document, window};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Whether a report is saved or opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReportMode {
    Download,
    View,
}

fn object_url(report: &ExportedReport) -> Result<String, JsValue> {
    let bytes = Uint8Array::from(report.bytes.as_slice());
    let parts = Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(report.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}

/// Save or open `report`; the object URL is revoked after a download.
fn deliver(report: &ExportedReport, mode: ReportMode) -> Result<(), JsValue> {
    let url = object_url(report)?;
    match mode {
        ReportMode::Download => {
            let anchor: HtmlAnchorElement = document().create_element("a")?.dyn_into()?;
            anchor.set_href(&url);
            anchor.set_download(&report.file_name);
            anchor.click();
            Url::revoke_object_url(&url)?;
        }
        ReportMode::View => {
            window().open_with_url_and_target(&url, "_blank")?;
        }
    }
    Ok(())
}

/// Render rows in `format` and deliver them; the error is a user-facing message.
pub(crate) fn export_report(
    info: &ReportInfo,
    rows: &[ReportRow],
    format: ReportFormat,
    mode: ReportMode,
) -> Result<String, String> {
    let report = export(info, rows, format, now_ms()).map_err(|err| err.to_string())?;
    deliver(&report, mode).map_err(|err| {
        console::error!("report delivery failed", err);
        "Could not open the report in this browser.".to_string()
    })?;
    Ok(report.file_name)
}
