use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::core::nav::NavMenu;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub menu: NavMenu,
    pub current_path: String,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let nav_open = use_state(|| false);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |()| nav_open.set(!*nav_open))
    };

    html! {
        <div class="app-shell">
            <Navbar
                menu={props.menu.clone()}
                current_path={props.current_path.clone()}
                on_toggle_nav={toggle_nav.clone()}
            />
            <div class="body">
                <Sidebar
                    menu={props.menu.clone()}
                    current_path={props.current_path.clone()}
                    open={*nav_open}
                    on_close={toggle_nav}
                />
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}
