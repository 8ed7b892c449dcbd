use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{NavLink, NAV_LINKS};
use crate::hooks::use_presence;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_select: Callback<NavLink>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let presence = use_presence(props.open);

    if !presence.is_mounted() {
        return html! {};
    }
    let phase = if presence.is_interactive() { "entering" } else { "leaving" };

    html! {
        <div
            class={classes!("mobile-menu", phase)}
            aria-hidden={(!presence.is_interactive()).to_string()}
        >
            <div class="mobile-menu-links">
                { for NAV_LINKS.iter().map(|link| {
                    let link = *link;
                    let on_select = props.on_select.clone();
                    html! {
                        <a
                            key={link.label()}
                            href={link.href()}
                            class="mobile-menu-link"
                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(link))}
                        >
                            {link.label()}
                        </a>
                    }
                }) }
                <hr class="mobile-menu-divider" />
                <button type="button" class="mobile-menu-cta">{"Get Started"}</button>
            </div>
        </div>
    }
}
