use ece_shared::constants::SUBTITLE_DELAY_MS;
use ece_shared::content::{DEPARTMENT_NAME, LOGO};
use ece_shared::motion::hero_scale;
use ece_shared::page::{DecorationLayer, DecorationState};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::{AnimatedSphere, ParticlesBackground};
use crate::config::load_decoration_config;
use crate::hooks::use_scroll_progress;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_decoration: Callback<(DecorationLayer, DecorationState)>,
    /// Both decorations failed; skip their mount points entirely.
    #[prop_or(false)]
    pub decorations_absent: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let config = use_memo((), |_| load_decoration_config());
    let progress = use_scroll_progress();
    let title_visible = use_state(|| false);
    let subtitle_visible = use_state(|| false);

    // Fade the title in on mount, the subtitle a moment later
    {
        let title_visible = title_visible.clone();
        let subtitle_visible = subtitle_visible.clone();
        use_effect_with((), move |_| {
            let title = Timeout::new(0, move || title_visible.set(true));
            let subtitle = Timeout::new(SUBTITLE_DELAY_MS, move || subtitle_visible.set(true));

            move || {
                drop(title);
                drop(subtitle);
            }
        });
    }

    let on_particles = {
        let on_decoration = props.on_decoration.clone();
        Callback::from(move |state| on_decoration.emit((DecorationLayer::Particles, state)))
    };
    let on_sphere = {
        let on_decoration = props.on_decoration.clone();
        Callback::from(move |state| on_decoration.emit((DecorationLayer::Sphere, state)))
    };

    let fade = |visible: bool| if visible { "opacity-100" } else { "opacity-0" };

    html! {
        <section class={styles::HERO_SECTION}>
            <div class={styles::HERO_GLOW}></div>
            if !props.decorations_absent {
                <ParticlesBackground config={config.particles.clone()} on_settled={on_particles} />
                <AnimatedSphere config={config.sphere.clone()} on_settled={on_sphere} />
            }
            <div
                class={classes!(styles::HERO_CONTENT, fade(*title_visible))}
                style={format!("transform: scale({:.4});", hero_scale(progress))}
            >
                <h1 class={styles::HERO_TITLE}>{LOGO}</h1>
                <h2 class={classes!(styles::HERO_SUBTITLE, fade(*subtitle_visible))}>
                    {DEPARTMENT_NAME}
                </h2>
            </div>
        </section>
    }
}
