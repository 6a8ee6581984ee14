use crate::services::download::ReportMode;
use frames_report::ReportFormat;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ExportMenuProps {
    pub on_export: Callback<(ReportFormat, ReportMode)>,
    #[prop_or_default]
    pub disabled: bool,
}

/// View-as-PDF, PDF download and CSV download buttons.
#[function_component(ExportMenu)]
pub(crate) fn export_menu(props: &ExportMenuProps) -> Html {
    let button = |label: &'static str, icon: &'static str, format, mode| {
        let on_export = props.on_export.clone();
        let onclick = Callback::from(move |_| on_export.emit((format, mode)));
        html! {
            <button class="btn btn-sm btn-outline" disabled={props.disabled} {onclick}>
                <i class={icon} aria-hidden="true"></i>{" "}{label}
            </button>
        }
    };
    html! {
        <div class="join">
            {button("View PDF", "far fa-eye", ReportFormat::Pdf, ReportMode::View)}
            {button("PDF", "far fa-file-pdf", ReportFormat::Pdf, ReportMode::Download)}
            {button("CSV", "fas fa-file-csv", ReportFormat::Csv, ReportMode::Download)}
        </div>
    }
}
