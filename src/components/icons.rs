use yew::prelude::*;

/// Inline line icons, 24x24 stroke paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Link,
    Bell,
    Share,
    CheckCircle,
    Play,
    ChevronRight,
    Youtube,
    Menu,
    Close,
    Twitter,
    Instagram,
    Github,
}

impl Icon {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::Link => &[
                "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71",
                "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71",
            ],
            Icon::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
            Icon::Share => &[
                "M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8",
                "m16 6-4-4-4 4",
                "M12 2v13",
            ],
            Icon::CheckCircle => &[
                "M12 22c5.523 0 10-4.477 10-10S17.523 2 12 2 2 6.477 2 12s4.477 10 10 10z",
                "m9 12 2 2 4-4",
            ],
            Icon::Play => &["m5 3 14 9-14 9V3z"],
            Icon::ChevronRight => &["m9 18 6-6-6-6"],
            Icon::Youtube => &[
                "M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17",
                "m10 15 5-3-5-3z",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Icon::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Icon::Zap => "zap",
            Icon::Link => "link",
            Icon::Bell => "bell",
            Icon::Share => "share",
            Icon::CheckCircle => "check",
            Icon::Play => "play",
            Icon::ChevronRight => "chevron-right",
            Icon::Youtube => "YouTube",
            Icon::Menu => "Open menu",
            Icon::Close => "Close menu",
            Icon::Twitter => "Twitter",
            Icon::Instagram => "Instagram",
            Icon::Github => "GitHub",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconSvg)]
pub fn icon_svg(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 13] = [
        Icon::Zap,
        Icon::Link,
        Icon::Bell,
        Icon::Share,
        Icon::CheckCircle,
        Icon::Play,
        Icon::ChevronRight,
        Icon::Youtube,
        Icon::Menu,
        Icon::Close,
        Icon::Twitter,
        Icon::Instagram,
        Icon::Github,
    ];

    #[test]
    fn every_icon_has_path_data() {
        for icon in ALL {
            assert!(!icon.paths().is_empty(), "{:?}", icon);
            for d in icon.paths() {
                assert!(d.starts_with('M') || d.starts_with('m'), "{:?}: {}", icon, d);
            }
        }
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> = ALL.iter().map(|icon| icon.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ALL.len());
    }
}
