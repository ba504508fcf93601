use ece_shared::achievements::{CategoryKey, Dataset};
use ece_shared::page::{DecorationLayer, DecorationState, PageModel};
use log::{debug, info};
use yew::prelude::*;

use crate::components::{
    About, Achievements, Features, Hero, SiteFooter, SiteHeader, StatsCounter, Welcome,
};

pub enum Msg {
    SelectTab(CategoryKey),
    DecorationSettled(DecorationLayer, DecorationState),
}

/// The whole department page. Owns the tab selection; every other section is
/// static copy.
pub struct Home {
    page: PageModel<'static>,
}

impl Component for Home {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let page = PageModel::new(Dataset::reference());
        info!("home mounted on tab {}", page.current());
        Self { page }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectTab(key) => {
                let changed = self.page.select(key);
                debug!("tab {} selected (changed: {})", key, changed);
                changed
            }
            Msg::DecorationSettled(layer, state) => {
                let was_absent = self.page.decorations_absent();
                self.page.set_decoration(layer, state);
                // Only the hero cares, and only once both layers are gone
                was_absent != self.page.decorations_absent()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_select = ctx.link().callback(Msg::SelectTab);
        let on_decoration = ctx
            .link()
            .callback(|(layer, state)| Msg::DecorationSettled(layer, state));

        html! {
            <div class="min-h-screen">
                <SiteHeader />
                <Hero {on_decoration} decorations_absent={self.page.decorations_absent()} />
                <About />
                <Welcome />
                <Features />
                <StatsCounter />
                <Achievements
                    tabs={self.page.tabs()}
                    current={self.page.current()}
                    records={self.page.visible_records()}
                    {on_select}
                />
                <SiteFooter />
            </div>
        }
    }
}
