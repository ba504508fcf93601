use ece_shared::content::{StatTile, STATS};
use yew::prelude::*;

use crate::styles;

fn reference_stats() -> Vec<StatTile> {
    STATS.to_vec()
}

#[derive(Properties, PartialEq)]
pub struct StatsCounterProps {
    #[prop_or_else(reference_stats)]
    pub stats: Vec<StatTile>,
}

#[function_component(StatsCounter)]
pub fn stats_counter(props: &StatsCounterProps) -> Html {
    html! {
        <section class={styles::SECTION_DARK}>
            <div class={styles::STAT_GRID}>
                { for props.stats.iter().map(|stat| html! {
                    <div class={styles::STAT_CARD}>
                        <div class={styles::STAT_NUMBER}>{stat.value}</div>
                        <div class={styles::STAT_LABEL}>{stat.label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
