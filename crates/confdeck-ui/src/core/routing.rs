//! Path recognition and redirect resolution for the console routes.
//!
//! # Design
//! - Route semantics live here so they are testable without a browser.
//! - The wasm router only asks [`resolve`] where a path ends up.

use std::borrow::Cow;

/// Root path; always redirects.
pub const ROOT_PATH: &str = "/";
/// Configuration list path.
pub const CONFIGURATIONS_PATH: &str = "/configurations";
/// Upper bound on followed redirects.
pub const MAX_REDIRECT_HOPS: usize = 4;

/// A recognised client path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`.
    Root,
    /// `/configurations`.
    Configurations,
    /// `/configurations/:configName`, with the name percent-decoded.
    ConfigurationDetail {
        /// Decoded configuration name.
        config_name: String,
    },
    /// Anything else.
    NotFound {
        /// The unrecognised path as received.
        path: String,
    },
}

/// A renderable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Configuration list.
    List,
    /// Detail view of one configuration.
    Detail {
        /// Configuration to show.
        config_name: String,
    },
}

/// Where a path ends up after following redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical path of the rendered view.
    pub final_path: String,
    /// View to render.
    pub view: View,
    /// Number of redirects followed.
    pub hops: usize,
}

impl Resolution {
    /// Whether the browser location must change to `final_path`.
    #[must_use]
    pub const fn redirected(&self) -> bool {
        self.hops > 0
    }
}

impl AppRoute {
    /// Recognise a client path. Query strings and fragments are ignored, as is
    /// a single trailing slash on anything but `/`.
    #[must_use]
    pub fn recognize(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        if trimmed.is_empty() || trimmed == ROOT_PATH {
            return Self::Root;
        }
        if trimmed == CONFIGURATIONS_PATH {
            return Self::Configurations;
        }
        if let Some(segment) = trimmed
            .strip_prefix(CONFIGURATIONS_PATH)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|segment| !segment.is_empty() && !segment.contains('/'))
        {
            let config_name = urlencoding::decode(segment)
                .map_or_else(|_| segment.to_string(), Cow::into_owned);
            return Self::ConfigurationDetail { config_name };
        }
        Self::NotFound {
            path: path.to_string(),
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Root => ROOT_PATH.to_string(),
            Self::Configurations => CONFIGURATIONS_PATH.to_string(),
            Self::ConfigurationDetail { config_name } => {
                format!("{CONFIGURATIONS_PATH}/{}", urlencoding::encode(config_name))
            }
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Redirect target, if this route only redirects.
    #[must_use]
    pub const fn redirect(&self) -> Option<Self> {
        match self {
            Self::Root => Some(Self::Configurations),
            Self::NotFound { .. } => Some(Self::Root),
            Self::Configurations | Self::ConfigurationDetail { .. } => None,
        }
    }

    /// View rendered for this route, if it renders one.
    #[must_use]
    pub fn view(&self) -> Option<View> {
        match self {
            Self::Configurations => Some(View::List),
            Self::ConfigurationDetail { config_name } => Some(View::Detail {
                config_name: config_name.clone(),
            }),
            Self::Root | Self::NotFound { .. } => None,
        }
    }
}

impl From<View> for AppRoute {
    fn from(view: View) -> Self {
        match view {
            View::List => Self::Configurations,
            View::Detail { config_name } => Self::ConfigurationDetail { config_name },
        }
    }
}

/// Follow redirects from `path` until a view renders.
///
/// A chain longer than [`MAX_REDIRECT_HOPS`] lands on the list view.
#[must_use]
pub fn resolve(path: &str) -> Resolution {
    let mut route = AppRoute::recognize(path);
    let mut hops = 0;
    while hops < MAX_REDIRECT_HOPS {
        match route.redirect() {
            Some(next) => {
                route = next;
                hops += 1;
            }
            None => break,
        }
    }

    match route.view() {
        Some(view) => Resolution {
            final_path: route.to_path(),
            view,
            hops,
        },
        None => Resolution {
            final_path: CONFIGURATIONS_PATH.to_string(),
            view: View::List,
            hops: hops.max(1),
        },
    }
}
