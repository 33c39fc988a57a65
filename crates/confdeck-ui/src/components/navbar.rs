use crate::app::Route;
use crate::core::nav::{MenuItem, NavMenu};
use yew::prelude::*;
use yew_router::prelude::{Link, Routable};

#[derive(Properties, PartialEq)]
pub(crate) struct NavbarProps {
    pub menu: NavMenu,
    pub current_path: String,
    pub on_toggle_nav: Callback<()>,
}

#[function_component(Navbar)]
pub(crate) fn navbar(props: &NavbarProps) -> Html {
    let toggle = {
        let cb = props.on_toggle_nav.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <header class="navbar">
            <button class="ghost mobile-only" aria-label="Open navigation" onclick={toggle}>{"☰"}</button>
            <strong class="brand">{"Confdeck"}</strong>
            <nav class="navbar-links">
                {for props.menu.entries().iter().map(|item| {
                    menu_link(item, props.menu.is_active(item, &props.current_path), "navbar-item")
                })}
            </nav>
        </header>
    }
}

/// Link for one menu entry; entries that are not client routes fall back to a plain anchor.
pub(crate) fn menu_link(item: &MenuItem, active: bool, class: &'static str) -> Html {
    let classes = classes!(class, active.then_some("active"));
    match Route::recognize(item.link) {
        Some(route) => html! {
            <Link<Route> to={route} classes={classes}>{item.title}</Link<Route>>
        },
        None => html! {
            <a href={item.link} class={classes}>{item.title}</a>
        },
    }
}
