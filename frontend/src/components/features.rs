use ece_shared::content::{FeatureTile, FEATURES};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub tile: FeatureTile,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let tile = props.tile;
    html! {
        <div class={styles::FEATURE_CARD}>
            <div class={styles::FEATURE_ICON}>{tile.icon}</div>
            <h3 class={styles::FEATURE_TITLE}>{tile.title}</h3>
            <p class={styles::FEATURE_TEXT}>{tile.text}</p>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class={styles::SECTION_DARKER}>
            <div class={styles::FEATURE_GRID}>
                { for FEATURES.iter().map(|tile| html! { <FeatureCard tile={*tile} /> }) }
            </div>
        </section>
    }
}
