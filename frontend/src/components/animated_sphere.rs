use ece_shared::clock::FrameClock;
use ece_shared::constants::FPS_LIMIT;
use ece_shared::page::{DecorationLayer, DecorationState};
use ece_shared::sphere::{Sphere, SphereConfig, Viewport};
use gloo::events::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::components::canvas_surface::CanvasSurface;
use crate::hooks::FrameLoop;
use crate::styles;

// Dot radius in CSS pixels at unit perspective scale
const DOT_SIZE: f64 = 2.2;

#[derive(Properties, PartialEq)]
pub struct AnimatedSphereProps {
    pub config: SphereConfig,
    pub on_settled: Callback<DecorationState>,
}

struct Running {
    _frames: FrameLoop,
    _resize: Option<EventListener>,
}

fn draw(surface: &CanvasSurface, sphere: &Sphere, elapsed: f64) {
    let (width, height) = surface.size();
    let config = sphere.config();
    surface.clear();
    for vertex in sphere.frame(elapsed, Viewport { width, height }) {
        surface.dot(
            vertex.x,
            vertex.y,
            DOT_SIZE * vertex.scale,
            &config.color,
            config.opacity * vertex.shade,
        );
    }
}

fn start(surface: CanvasSurface, config: SphereConfig) -> Running {
    let sphere = Sphere::new(config);
    let surface = Rc::new(RefCell::new(surface));
    let mut clock = FrameClock::new(FPS_LIMIT);

    let resize = window().map(|window| {
        let surface = surface.clone();
        EventListener::new(&window, "resize", move |_| {
            surface.borrow_mut().fit();
        })
    });

    // Rotation is driven by elapsed time, so skipped frames cost nothing.
    let frames = FrameLoop::start(move |timestamp| {
        if let Some(tick) = clock.tick(timestamp) {
            draw(&surface.borrow(), &sphere, tick.elapsed);
        }
    });

    Running {
        _frames: frames,
        _resize: resize,
    }
}

/// The slowly rotating, wobbling sphere behind the hero title.
#[function_component(AnimatedSphere)]
pub fn animated_sphere(props: &AnimatedSphereProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let config = props.config.clone();
        let on_settled = props.on_settled.clone();

        use_effect_with((), move |_| {
            let running: Rc<RefCell<Option<Running>>> = Rc::new(RefCell::new(None));
            let mounted = Rc::new(Cell::new(true));

            {
                let running = running.clone();
                let mounted = mounted.clone();
                spawn_local(async move {
                    let result = CanvasSurface::attach(&canvas_ref, true).await;
                    if !mounted.get() {
                        return;
                    }
                    on_settled.emit(DecorationState::settle(DecorationLayer::Sphere, &result));
                    if let Ok(surface) = result {
                        *running.borrow_mut() = Some(start(surface, config));
                    }
                });
            }

            move || {
                mounted.set(false);
                running.borrow_mut().take();
            }
        });
    }

    html! {
        <div class={styles::HERO_SPHERE}>
            <canvas ref={canvas_ref} class="w-full h-full" />
        </div>
    }
}
