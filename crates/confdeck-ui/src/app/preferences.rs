//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

pub(crate) const SOURCE_KEY: &str = "confdeck.source";

/// Where the console reads configurations from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SourceKind {
    Mock,
    Http,
}

pub(crate) fn load_source() -> SourceKind {
    match LocalStorage::get::<String>(SOURCE_KEY) {
        Ok(value) if value.trim().eq_ignore_ascii_case("http") => SourceKind::Http,
        Ok(value) if !value.trim().eq_ignore_ascii_case("mock") => {
            console::warn!("unknown configuration source, using mock", value);
            SourceKind::Mock
        }
        _ => SourceKind::Mock,
    }
}

/// REST base URL derived from the page location; `trunk serve` on 8080 maps to the API on 7070.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("7070"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:7070".to_string()
}
