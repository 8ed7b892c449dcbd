use gloo_timers::callback::Timeout;
use log::error;
use yew::prelude::*;

use crate::config::MENU_EXIT_MS;
use crate::menu::{MenuState, Presence, PresenceEvent};
use crate::scroll::{ScrollHandle, ScrollTracker};

/// `true` once the page is scrolled past the header threshold.
/// The listener lives exactly as long as the calling component.
#[hook]
pub fn use_scrolled(source: &ScrollHandle) -> bool {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |source: &ScrollHandle| {
                let setter = is_scrolled.setter();
                let tracker = match ScrollTracker::mount(source.source(), move |flag| setter.set(flag)) {
                    Ok(tracker) => Some(tracker),
                    Err(err) => {
                        error!("could not watch page scroll: {}", err);
                        None
                    }
                };

                move || drop(tracker)
            },
            source.clone(),
        );
    }

    *is_scrolled
}

#[hook]
pub fn use_mobile_menu() -> UseReducerHandle<MenuState> {
    use_reducer_eq(MenuState::default)
}

/// Follows `open` and keeps the overlay mounted for [`MENU_EXIT_MS`] after it closes.
/// A reopen during the exit cancels the pending unmount.
#[hook]
pub fn use_presence(open: bool) -> Presence {
    let presence = use_reducer_eq(|| if open { Presence::Shown } else { Presence::Hidden });

    {
        let presence = presence.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let exit = if *open {
                    presence.dispatch(PresenceEvent::Open);
                    None
                } else {
                    presence.dispatch(PresenceEvent::Close);
                    Some(Timeout::new(MENU_EXIT_MS, move || {
                        presence.dispatch(PresenceEvent::ExitFinished)
                    }))
                };

                move || drop(exit)
            },
            open,
        );
    }

    *presence
}
