use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    /// Start of the reveal animation, so the grid fades in left to right.
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="glass feature-card reveal" style={format!("animation-delay: {}ms;", props.delay_ms)}>
            <div class="feature-icon">
                <IconSvg icon={props.icon} />
            </div>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
        </div>
    }
}
