use ece_shared::achievements::{AchievementRecord, CategoryKey};
use ece_shared::content::ACHIEVEMENTS_TITLE;
use ece_shared::motion::{card_delay, card_duration};
use ece_shared::page::TabView;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AchievementCardProps {
    pub record: AchievementRecord,
    pub index: usize,
}

#[function_component(AchievementCard)]
pub fn achievement_card(props: &AchievementCardProps) -> Html {
    let record = props.record;
    let style = format!(
        "animation: card-enter {:.2}s ease-out {:.2}s both;",
        card_duration(),
        card_delay(props.index)
    );

    html! {
        <div class={styles::ACHIEVEMENT_CARD} style={style}>
            <div class={styles::ACHIEVEMENT_ICON}>{record.icon}</div>
            <h3 class={styles::ACHIEVEMENT_TITLE}>{record.title}</h3>
            <div class={styles::ACHIEVEMENT_DATE}>{record.date}</div>
            <p class={styles::ACHIEVEMENT_TEXT}>{record.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AchievementGridProps {
    pub category: CategoryKey,
    pub records: &'static [AchievementRecord],
}

/// One card per record, in order. Cards are keyed by category so switching
/// tabs replays the entry animation.
#[function_component(AchievementGrid)]
pub fn achievement_grid(props: &AchievementGridProps) -> Html {
    html! {
        <div class={styles::ACHIEVEMENT_GRID}>
            { for props.records.iter().enumerate().map(|(index, record)| html! {
                <AchievementCard
                    key={format!("{}-{}", props.category, index)}
                    record={*record}
                    index={index}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AchievementsProps {
    pub tabs: Vec<TabView>,
    pub current: CategoryKey,
    pub records: &'static [AchievementRecord],
    pub on_select: Callback<CategoryKey>,
}

#[function_component(Achievements)]
pub fn achievements(props: &AchievementsProps) -> Html {
    html! {
        <section id="achievements" class={styles::ACHIEVEMENTS_SECTION}>
            <h2 class={styles::SECTION_TITLE}>{ACHIEVEMENTS_TITLE}</h2>
            <div class={styles::TAB_ROW}>
                { for props.tabs.iter().map(|tab| {
                    let key = tab.key;
                    let onclick = props.on_select.reform(move |_: MouseEvent| key);
                    html! {
                        <button
                            key={tab.label}
                            class={if tab.active { styles::TAB_ACTIVE } else { styles::TAB }}
                            {onclick}
                        >
                            {tab.label}
                        </button>
                    }
                }) }
            </div>
            <AchievementGrid category={props.current} records={props.records} />
        </section>
    }
}
