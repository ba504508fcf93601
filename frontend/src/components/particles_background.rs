use ece_shared::clock::FrameClock;
use ece_shared::page::{DecorationLayer, DecorationState};
use ece_shared::particles::{ParticleConfig, ParticleField, Point};
use gloo::events::EventListener;
use log::info;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::components::canvas_surface::CanvasSurface;
use crate::hooks::FrameLoop;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ParticlesBackgroundProps {
    pub config: ParticleConfig,
    pub on_settled: Callback<DecorationState>,
}

/// Everything that has to stay alive while the field is animating.
struct Running {
    _frames: FrameLoop,
    _listeners: Vec<EventListener>,
}

fn pointer_position(event: &Event) -> Option<Point> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(event.offset_x() as f64, event.offset_y() as f64))
}

fn draw(surface: &CanvasSurface, field: &ParticleField) {
    let config = field.config();
    surface.clear();

    for link in field.links().into_iter().chain(field.grab_lines()) {
        surface.line(
            (link.from.x, link.from.y),
            (link.to.x, link.to.y),
            config.links.width,
            &config.links.color,
            link.opacity,
        );
    }

    for particle in field.particles() {
        let color = config
            .colors
            .get(particle.color)
            .map(String::as_str)
            .unwrap_or("#ffffff");
        surface.dot(
            particle.position.x,
            particle.position.y,
            particle.size(config),
            color,
            particle.opacity(config),
        );
    }
}

fn start(surface: CanvasSurface, config: ParticleConfig) -> Running {
    let (width, height) = surface.size();
    let mut clock = FrameClock::new(config.fps_limit);
    let field = Rc::new(RefCell::new(ParticleField::new(
        config,
        width,
        height,
        rand::random::<u64>(),
    )));
    let surface = Rc::new(RefCell::new(surface));

    let mut listeners = Vec::new();
    {
        let canvas = surface.borrow().canvas().clone();

        let field_move = field.clone();
        listeners.push(EventListener::new(&canvas, "mousemove", move |event| {
            field_move.borrow_mut().pointer_move(pointer_position(event));
        }));

        let field_leave = field.clone();
        listeners.push(EventListener::new(&canvas, "mouseleave", move |_| {
            field_leave.borrow_mut().pointer_move(None);
        }));

        let field_click = field.clone();
        listeners.push(EventListener::new(&canvas, "click", move |event| {
            if let Some(at) = pointer_position(event) {
                field_click.borrow_mut().click(at);
            }
        }));
    }
    if let Some(window) = window() {
        let field = field.clone();
        let surface = surface.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            let mut surface = surface.borrow_mut();
            if surface.fit() {
                let (w, h) = surface.size();
                field.borrow_mut().resize(w, h);
            }
        }));
    }

    let frames = FrameLoop::start(move |timestamp| {
        if let Some(tick) = clock.tick(timestamp) {
            let mut field = field.borrow_mut();
            field.step(tick.delta);
            draw(&surface.borrow(), &field);
        }
    });

    Running {
        _frames: frames,
        _listeners: listeners,
    }
}

/// Drifting, linked particles behind the hero. Sets itself up asynchronously
/// after mount; if that fails the canvas just stays empty.
#[function_component(ParticlesBackground)]
pub fn particles_background(props: &ParticlesBackgroundProps) -> Html {
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
                    let result = CanvasSurface::attach(&canvas_ref, config.detect_retina).await;
                    if !mounted.get() {
                        return;
                    }
                    on_settled.emit(DecorationState::settle(DecorationLayer::Particles, &result));
                    if let Ok(surface) = result {
                        info!("particle field attached ({} points)", config.count);
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
        <canvas id="hero-particles" ref={canvas_ref} class={styles::HERO_PARTICLES} />
    }
}
