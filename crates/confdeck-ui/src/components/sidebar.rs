use crate::components::navbar::menu_link;
use crate::core::nav::NavMenu;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SidebarProps {
    pub menu: NavMenu,
    pub current_path: String,
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(Sidebar)]
pub(crate) fn sidebar(props: &SidebarProps) -> Html {
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let active_title = props
        .menu
        .active_entry(&props.current_path)
        .map_or("", |item| item.title);

    html! {
        <aside class={classes!("sidebar", if props.open { "open" } else { "closed" })}>
            <div class="sidebar-header">
                <button class="ghost mobile-only" onclick={close} aria-label="Close navigation">{"✕"}</button>
                <small class="muted">{active_title}</small>
            </div>
            <nav>
                {for props.menu.entries().iter().map(|item| {
                    menu_link(item, props.menu.is_active(item, &props.current_path), "nav-item")
                })}
            </nav>
        </aside>
    }
}
