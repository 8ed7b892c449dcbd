//! Mobile menu view state.
//!
//! [`MenuState`] is the open/closed machine the header toggle drives.
//! [`Presence`] follows it one step behind so the overlay can play its exit
//! animation before it leaves the page.

use std::rc::Rc;

use log::debug;
use yew::functional::Reducible;

use crate::content::NavLink;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    SelectLink(NavLink),
}

impl MenuState {
    pub fn apply(self, action: MenuAction) -> Self {
        match (self, action) {
            (MenuState::Closed, MenuAction::Toggle) => MenuState::Open,
            (MenuState::Open, MenuAction::Toggle) => MenuState::Closed,
            (_, MenuAction::SelectLink(_)) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            return self;
        }
        debug!("mobile menu {:?} -> {:?} on {:?}", *self, next, action);
        Rc::new(next)
    }
}

/// Whether the overlay is on the page, and in which phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Hidden,
    Shown,
    /// Closed, still mounted while the exit animation runs.
    Leaving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenceEvent {
    Open,
    Close,
    ExitFinished,
}

impl Presence {
    pub fn apply(self, event: PresenceEvent) -> Self {
        match (self, event) {
            (Presence::Hidden, PresenceEvent::Open) => Presence::Shown,
            (Presence::Leaving, PresenceEvent::Open) => Presence::Shown,
            (Presence::Shown, PresenceEvent::Close) => Presence::Leaving,
            (Presence::Leaving, PresenceEvent::ExitFinished) => Presence::Hidden,
            (current, _) => current,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != Presence::Hidden
    }

    pub fn is_interactive(self) -> bool {
        self == Presence::Shown
    }
}

impl Reducible for Presence {
    type Action = PresenceEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            return self;
        }
        debug!("mobile menu presence {:?} -> {:?}", *self, next);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_LINKS;

    fn toggled(times: usize) -> MenuState {
        (0..times).fold(MenuState::default(), |state, _| state.apply(MenuAction::Toggle))
    }

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_parity() {
        for times in 0..12 {
            assert_eq!(toggled(times).is_open(), times % 2 == 1, "after {} toggles", times);
        }
    }

    #[test]
    fn open_then_toggle_closes() {
        let state = MenuState::Closed.apply(MenuAction::Toggle);
        assert_eq!(state, MenuState::Open);
        assert_eq!(state.apply(MenuAction::Toggle), MenuState::Closed);
    }

    #[test]
    fn selecting_pricing_closes_open_menu() {
        let state = MenuState::Closed.apply(MenuAction::Toggle);
        assert!(state.is_open());
        assert_eq!(state.apply(MenuAction::SelectLink(NavLink::Pricing)), MenuState::Closed);
    }

    #[test]
    fn any_link_closes_regardless_of_history() {
        for times in 0..8 {
            for link in NAV_LINKS {
                let state = toggled(times).apply(MenuAction::SelectLink(link));
                assert_eq!(state, MenuState::Closed, "{:?} after {} toggles", link, times);
            }
        }
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let closed = Rc::new(MenuState::Closed);
        let after = closed.clone().reduce(MenuAction::SelectLink(NavLink::Docs));
        assert!(Rc::ptr_eq(&closed, &after));

        let opened = closed.reduce(MenuAction::Toggle);
        assert_eq!(*opened, MenuState::Open);
    }

    #[test]
    fn presence_enter_and_exit() {
        let shown = Presence::Hidden.apply(PresenceEvent::Open);
        assert_eq!(shown, Presence::Shown);
        assert!(shown.is_interactive());

        let leaving = shown.apply(PresenceEvent::Close);
        assert_eq!(leaving, Presence::Leaving);
        assert!(leaving.is_mounted());
        assert!(!leaving.is_interactive());

        let hidden = leaving.apply(PresenceEvent::ExitFinished);
        assert_eq!(hidden, Presence::Hidden);
        assert!(!hidden.is_mounted());
    }

    #[test]
    fn reopening_supersedes_exit() {
        let state = Presence::Shown
            .apply(PresenceEvent::Close)
            .apply(PresenceEvent::Open);
        assert_eq!(state, Presence::Shown);
        // a stale exit timer must not unmount the reopened menu
        assert_eq!(state.apply(PresenceEvent::ExitFinished), Presence::Shown);
    }

    #[test]
    fn presence_ignores_redundant_events() {
        assert_eq!(Presence::Hidden.apply(PresenceEvent::Close), Presence::Hidden);
        assert_eq!(Presence::Hidden.apply(PresenceEvent::ExitFinished), Presence::Hidden);
        assert_eq!(Presence::Shown.apply(PresenceEvent::Open), Presence::Shown);
        assert_eq!(Presence::Leaving.apply(PresenceEvent::Close), Presence::Leaving);
    }

    #[test]
    fn presence_follows_menu_state() {
        let mut menu = MenuState::default();
        let mut presence = Presence::default();
        for action in [
            MenuAction::Toggle,
            MenuAction::SelectLink(NavLink::Features),
            MenuAction::Toggle,
        ] {
            menu = menu.apply(action);
            presence = presence.apply(if menu.is_open() {
                PresenceEvent::Open
            } else {
                PresenceEvent::Close
            });
            assert_eq!(presence.is_interactive(), menu.is_open());
        }
        assert_eq!(presence, Presence::Shown);
    }
}
