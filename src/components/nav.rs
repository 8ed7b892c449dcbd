use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{NavLink, BRAND, BRAND_ACCENT, NAV_LINKS};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub is_scrolled: bool,
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_select: Callback<NavLink>,
}

/// Fixed header. Transparent at the top of the page, compact and blurred once scrolled.
#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { is_scrolled, menu_open, on_toggle, on_select } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let (toggle_icon, toggle_label) = if *menu_open {
        (Icon::Close, Icon::Close.label())
    } else {
        (Icon::Menu, Icon::Menu.label())
    };

    html! {
        <nav class={classes!("top-nav", if *is_scrolled { "compact" } else { "expanded" })}>
            <div class="nav-content">
                <a class="nav-logo" href="#">
                    <span class="logo-mark">
                        <IconSvg icon={Icon::Zap} class="logo-bolt" />
                    </span>
                    <span class="logo-text">{BRAND}{" "}<span class="accent">{BRAND_ACCENT}</span></span>
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| {
                        let link = *link;
                        let on_select = on_select.clone();
                        html! {
                            <a
                                key={link.label()}
                                href={link.href()}
                                class="nav-link"
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(link))}
                            >
                                {link.label()}
                            </a>
                        }
                    }) }
                </div>

                <div class="nav-actions">
                    <button type="button" class="nav-login">{"Log in"}</button>
                    <button type="button" class="nav-start">{"Start Free"}</button>
                    <button
                        type="button"
                        class="burger-menu"
                        aria-label={toggle_label}
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <IconSvg icon={toggle_icon} />
                    </button>
                </div>
            </div>
        </nav>
    }
}
