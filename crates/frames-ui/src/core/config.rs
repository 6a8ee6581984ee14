//! Environment-derived settings for the Web UI.
//!
//! # Design
//! - The API base comes from a `<meta name="frames-api-base">` tag when present.
//! - Otherwise the page origin is used, with dev-server ports mapped to the backend port.
//! - Poll intervals and toast limits live here so views never hard-code them.

/// Meta tag consulted for an explicit API base.
pub const API_BASE_META: &str = "frames-api-base";
/// Port the backend listens on during development.
pub const BACKEND_DEV_PORT: &str = "5000";
/// Ports served by frontend dev servers.
pub const DEV_SERVER_PORTS: [&str; 3] = ["3000", "5173", "8080"];
/// Fallback when the page location is unavailable.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Notification badge refresh.
pub const NOTIFICATION_POLL_MS: u32 = 60_000;
/// Student live-status refresh.
pub const LIVE_STATUS_POLL_MS: u32 = 30_000;
/// How long a toast stays visible.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;
/// Visible toasts; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

/// Resolve the REST base address.
///
/// `meta` is the content of the [`API_BASE_META`] tag; `protocol` keeps its
/// trailing colon as `Location.protocol` reports it.
#[must_use]
pub fn resolve_api_base(meta: Option<&str>, protocol: &str, host: &str, port: &str) -> String {
    if let Some(explicit) = meta.map(str::trim).filter(|value| !value.is_empty()) {
        return explicit.trim_end_matches('/').to_string();
    }
    if host.is_empty() {
        return DEFAULT_API_BASE.to_string();
    }
    let port = if DEV_SERVER_PORTS.contains(&port) {
        BACKEND_DEV_PORT
    } else {
        port
    };
    let mut base = format!("{protocol}//{host}");
    if !port.is_empty() {
        base.push(':');
        base.push_str(port);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_tag_wins_and_loses_trailing_slash() {
        assert_eq!(
            resolve_api_base(Some("https://api.frames.local/"), "http:", "localhost", "3000"),
            "https://api.frames.local"
        );
    }

    #[test]
    fn dev_ports_map_to_backend() {
        for port in DEV_SERVER_PORTS {
            assert_eq!(
                resolve_api_base(None, "http:", "localhost", port),
                "http://localhost:5000"
            );
        }
    }

    #[test]
    fn production_origin_is_kept() {
        assert_eq!(
            resolve_api_base(Some("  "), "https:", "frames.tup.edu.ph", ""),
            "https://frames.tup.edu.ph"
        );
        assert_eq!(
            resolve_api_base(None, "http:", "10.0.0.4", "9000"),
            "http://10.0.0.4:9000"
        );
    }

    #[test]
    fn missing_host_falls_back() {
        assert_eq!(resolve_api_base(None, "", "", ""), DEFAULT_API_BASE);
    }
}
