//! Routing definitions for the Confdeck UI.
use yew_router::prelude::*;

use crate::core::routing::{AppRoute, View};

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Root,
    #[at("/configurations")]
    Configurations,
    #[at("/configurations/:config_name")]
    ConfigurationDetail { config_name: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match AppRoute::from(view) {
            AppRoute::Configurations => Self::Configurations,
            AppRoute::ConfigurationDetail { config_name } => {
                Self::ConfigurationDetail { config_name }
            }
            AppRoute::Root => Self::Root,
            AppRoute::NotFound { .. } => Self::NotFound,
        }
    }
}
