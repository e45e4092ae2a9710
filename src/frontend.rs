use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, CanvasRenderingContext2d, Document, Element, EventTarget, HtmlCanvasElement,
    IntersectionObserver, IntersectionObserverEntry, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::content::{self, Project, SkillCategory};
use crate::sim::particles::{ParticleField, Pointer};
use crate::sim::scrollspy::{active_section, SectionBounds, SECTION_IDS};
use crate::sim::starfield::{self, DriftField, STAR_COUNT, STAR_COUNT_LOW};
use crate::sim::typewriter::Typewriter;
use crate::sim::wireframe;

const MOBILE_UA_MARKERS: [&str; 8] = [
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

const CUBE_CANVAS_SIZE: u32 = 280;

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn media_query_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn prefers_reduced_motion() -> bool {
    media_query_matches("(prefers-reduced-motion: reduce)")
}

fn navigator_number(property: &str) -> Option<f64> {
    let navigator = window()?.navigator();
    Reflect::get(navigator.as_ref(), &JsValue::from_str(property))
        .ok()?
        .as_f64()
}

fn connection_effective_type() -> Option<String> {
    let navigator = window()?.navigator();
    let connection = Reflect::get(navigator.as_ref(), &JsValue::from_str("connection")).ok()?;

    if connection.is_undefined() || connection.is_null() {
        return None;
    }

    Reflect::get(&connection, &JsValue::from_str("effectiveType"))
        .ok()?
        .as_string()
}

fn is_mobile_user_agent() -> bool {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker)))
        .unwrap_or(false)
}

/// Read-only render gates resolved once at startup and passed down through
/// context; absent browser signals are treated as a capable device.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
struct RenderCaps {
    reduced_motion: bool,
    low_power: bool,
}

impl RenderCaps {
    fn detect() -> Self {
        let low_memory = navigator_number("deviceMemory").is_some_and(|gigabytes| gigabytes < 4.0);
        let slow_connection = connection_effective_type().is_some_and(|kind| kind == "slow-2g");

        Self {
            reduced_motion: prefers_reduced_motion(),
            low_power: is_mobile_user_agent() || low_memory || slow_connection,
        }
    }

    fn animations_enabled(self) -> bool {
        !self.reduced_motion && !self.low_power
    }
}

fn canvas_context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn scroll_to_section(id: &str) {
    let Some(doc) = document() else {
        return;
    };
    let Some(element) = doc.get_element_by_id(id) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Animation-frame loop that keeps rescheduling itself until cancelled.
/// Dropping the handle cancels the pending frame and releases the closure.
struct FrameLoop {
    active: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    fn start(mut frame: impl FnMut(f64) + 'static) -> Self {
        let active = Rc::new(Cell::new(true));
        let raf_id = Rc::new(Cell::new(0));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let callback = {
            let active = active.clone();
            let raf_id = raf_id.clone();
            let tick = tick.clone();
            Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                if !active.get() {
                    return;
                }

                frame(timestamp);

                if let Some(win) = window() {
                    if let Some(callback) = tick.borrow().as_ref() {
                        if let Ok(id) = win.request_animation_frame(callback.as_ref().unchecked_ref())
                        {
                            raf_id.set(id);
                        }
                    }
                }
            })
        };
        *tick.borrow_mut() = Some(callback);

        if let Some(win) = window() {
            if let Some(callback) = tick.borrow().as_ref() {
                if let Ok(id) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    raf_id.set(id);
                }
            }
        }

        Self {
            active,
            raf_id,
            tick,
        }
    }

    fn cancel(&self) {
        self.active.set(false);
        if let Some(win) = window() {
            let _ = win.cancel_animation_frame(self.raf_id.get());
        }
        // Dropping the closure here breaks the Rc cycle with the callback.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// DOM event subscription released on drop.
struct ListenerGuard {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Flips to true the first time the node enters the viewport, then stays
/// true. Falls back to visible when the observer is unavailable.
#[hook]
fn use_once_visible(node: &NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with(node.clone(), move |node| {
            let mut handle: Option<(
                IntersectionObserver,
                Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
            )> = None;

            match node.cast::<Element>() {
                Some(element) => {
                    let flag = visible.clone();
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let intersecting = entries.iter().any(|entry| {
                                entry
                                    .unchecked_into::<IntersectionObserverEntry>()
                                    .is_intersecting()
                            });

                            if intersecting {
                                flag.set(true);
                                observer.disconnect();
                            }
                        },
                    );

                    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                        Ok(observer) => {
                            observer.observe(&element);
                            handle = Some((observer, callback));
                        }
                        Err(_) => visible.set(true),
                    }
                }
                None => visible.set(true),
            }

            move || {
                if let Some((observer, _callback)) = handle {
                    observer.disconnect();
                }
            }
        });
    }

    *visible
}

fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}ms;", index * 100)
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

struct MenuItem {
    label: &'static str,
    section: &'static str,
}

static MENU_ITEMS: [MenuItem; 5] = [
    MenuItem {
        label: "Home",
        section: "hero",
    },
    MenuItem {
        label: "About",
        section: "about",
    },
    MenuItem {
        label: "Skills",
        section: "skills",
    },
    MenuItem {
        label: "Projects",
        section: "projects",
    },
    MenuItem {
        label: "Contact",
        section: "contact",
    },
];

fn probe_active_section() -> Option<&'static str> {
    let doc = document()?;
    let mut sections = Vec::with_capacity(SECTION_IDS.len());

    for id in SECTION_IDS {
        if let Some(element) = doc.get_element_by_id(id) {
            let rect = element.get_bounding_client_rect();
            sections.push(SectionBounds {
                id,
                top: rect.top(),
                bottom: rect.bottom(),
            });
        }
    }

    active_section(&sections)
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let active = use_state(|| "hero");

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let update = move || {
                if let Some(current) = probe_active_section() {
                    if *active != current {
                        active.set(current);
                    }
                }
            };

            update();
            let guard = window()
                .and_then(|win| ListenerGuard::attach(win.as_ref(), "scroll", move |_event| update()));

            move || drop(guard)
        });
    }

    let nav_items = |variant: &'static str| -> Html {
        MENU_ITEMS
            .iter()
            .map(|item| {
                let is_active = *active == item.section;
                let section = item.section;
                let onclick = Callback::from(move |_event: MouseEvent| scroll_to_section(section));
                html! {
                    <li key={format!("{variant}-{section}")}>
                        <button
                            type="button"
                            class={classes!("nav-link", is_active.then_some("is-active"))}
                            aria-current={is_active.then_some("true")}
                            onclick={onclick}
                        >
                            <span>{item.label}</span>
                            if is_active {
                                <span class="nav-dot" aria-hidden="true"></span>
                            }
                        </button>
                    </li>
                }
            })
            .collect()
    };

    html! {
        <>
            <nav class="site-nav desktop-nav glass-card" aria-label="Primary">
                <ul class="nav-list">{nav_items("desktop")}</ul>
            </nav>
            <nav class="site-nav mobile-nav glass-card" aria-label="Primary">
                <ul class="nav-list">{nav_items("mobile")}</ul>
            </nav>
        </>
    }
}

fn draw_particles(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, field: &ParticleField) {
    ctx.clear_rect(
        0.0,
        0.0,
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    );

    for particle in &field.particles {
        let Ok(gradient) = ctx.create_radial_gradient(
            particle.x,
            particle.y,
            0.0,
            particle.x,
            particle.y,
            particle.size,
        ) else {
            continue;
        };

        let alpha = (particle.opacity * 255.0) as u8;
        let _ = gradient.add_color_stop(0.0, &format!("{}{alpha:02x}", particle.color));
        let _ = gradient.add_color_stop(1.0, &format!("{}00", particle.color));

        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        let _ = ctx.arc(particle.x, particle.y, particle.size, 0.0, TAU);
        ctx.fill();
    }
}

#[function_component(InteractiveParticles)]
fn interactive_particles() -> Html {
    let caps = use_context::<RenderCaps>().unwrap_or_default();
    let canvas_ref = use_node_ref();

    use_effect_with((canvas_ref.clone(), caps), |(canvas_ref, caps)| {
        let mut teardown: Vec<Box<dyn FnOnce()>> = Vec::new();

        if caps.animations_enabled() {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let (width, height) = viewport_size();
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);

                let field = Rc::new(RefCell::new(ParticleField::new(
                    width,
                    height,
                    fastrand::Rng::new(),
                )));
                let pointer = Rc::new(Cell::new(Pointer::off_canvas()));

                if let Some(ctx) = canvas_context_2d(&canvas) {
                    let frame_loop = FrameLoop::start({
                        let field = field.clone();
                        let pointer = pointer.clone();
                        let canvas = canvas.clone();
                        move |_timestamp| {
                            let mut field = field.borrow_mut();
                            field.step(pointer.get());
                            draw_particles(&ctx, &canvas, &field);
                        }
                    });
                    teardown.push(Box::new(move || drop(frame_loop)));
                }

                if let Some(win) = window() {
                    let target: &EventTarget = win.as_ref();

                    let move_guard = ListenerGuard::attach(target, "mousemove", {
                        let pointer = pointer.clone();
                        let canvas = canvas.clone();
                        move |event| {
                            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                                let rect = canvas.get_bounding_client_rect();
                                pointer.set(Pointer {
                                    x: f64::from(mouse.client_x()) - rect.left(),
                                    y: f64::from(mouse.client_y()) - rect.top(),
                                });
                            }
                        }
                    });

                    let leave_guard = ListenerGuard::attach(target, "mouseout", {
                        let pointer = pointer.clone();
                        move |event| {
                            let left_window = event
                                .dyn_ref::<MouseEvent>()
                                .is_some_and(|mouse| mouse.related_target().is_none());
                            if left_window {
                                pointer.set(Pointer::off_canvas());
                            }
                        }
                    });

                    let resize_guard = ListenerGuard::attach(target, "resize", {
                        let field = field.clone();
                        let canvas = canvas.clone();
                        move |_event| {
                            let (width, height) = viewport_size();
                            canvas.set_width(width as u32);
                            canvas.set_height(height as u32);
                            *field.borrow_mut() =
                                ParticleField::new(width, height, fastrand::Rng::new());
                        }
                    });

                    teardown.push(Box::new(move || {
                        drop(move_guard);
                        drop(leave_guard);
                        drop(resize_guard);
                    }));
                }
            }
        }

        move || {
            for release in teardown {
                release();
            }
        }
    });

    if !caps.animations_enabled() {
        return html! {};
    }

    html! {
        <canvas ref={canvas_ref} class="particle-overlay" aria-hidden="true"></canvas>
    }
}

fn draw_starfield(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    field: &DriftField,
    time: f64,
) {
    ctx.clear_rect(0.0, 0.0, width, height);

    for (index, point) in field.points.iter().enumerate() {
        let (x, y, depth) = starfield::projected(point, width, height);
        let alpha = field.twinkle(index, time) * (0.25 + 0.55 * depth);
        let radius = 0.6 + 1.6 * depth;

        ctx.set_fill_style_str(&format!("rgba(191, 219, 254, {alpha:.3})"));
        ctx.begin_path();
        let _ = ctx.arc(x, y, radius, 0.0, TAU);
        ctx.fill();
    }
}

#[function_component(StarfieldCanvas)]
fn starfield_canvas() -> Html {
    let caps = use_context::<RenderCaps>().unwrap_or_default();
    let canvas_ref = use_node_ref();

    use_effect_with((canvas_ref.clone(), caps), |(canvas_ref, caps)| {
        let mut frame_loop = None;

        if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
            let (viewport_width, viewport_height) = viewport_size();
            let width = match canvas.client_width() {
                w if w > 0 => w as u32,
                _ => viewport_width as u32,
            };
            let height = match canvas.client_height() {
                h if h > 0 => h as u32,
                _ => viewport_height as u32,
            };
            canvas.set_width(width);
            canvas.set_height(height);

            if let Some(ctx) = canvas_context_2d(&canvas) {
                let mut rng = fastrand::Rng::new();
                let count = if caps.low_power {
                    STAR_COUNT_LOW
                } else {
                    STAR_COUNT
                };
                let field = Rc::new(RefCell::new(DriftField::new(count, &mut rng)));

                frame_loop = Some(FrameLoop::start({
                    let field = field.clone();
                    move |timestamp| {
                        let time = timestamp / 1000.0;
                        let mut field = field.borrow_mut();
                        field.step(time);
                        draw_starfield(&ctx, f64::from(width), f64::from(height), &field, time);
                    }
                }));
            }
        }

        move || drop(frame_loop)
    });

    html! {
        <canvas ref={canvas_ref} class="hero-canvas" aria-hidden="true"></canvas>
    }
}

fn schedule_typewriter(
    machine: Rc<RefCell<Typewriter>>,
    display: UseStateHandle<String>,
    pending: Rc<RefCell<Option<Timeout>>>,
) {
    let delay = {
        let mut machine_ref = machine.borrow_mut();
        let delay = machine_ref.advance();
        display.set(machine_ref.visible());
        delay
    };

    let next = {
        let machine = machine.clone();
        let display = display.clone();
        let pending = pending.clone();
        Timeout::new(delay, move || schedule_typewriter(machine, display, pending))
    };
    *pending.borrow_mut() = Some(next);
}

#[function_component(Hero)]
fn hero() -> Html {
    let caps = use_context::<RenderCaps>().unwrap_or_default();
    let typed = use_state(String::new);

    {
        let typed = typed.clone();
        use_effect_with(caps.reduced_motion, move |reduced| {
            let mut pending_slot: Option<Rc<RefCell<Option<Timeout>>>> = None;

            if *reduced {
                typed.set(content::ROLES[0].to_string());
            } else {
                let machine = Rc::new(RefCell::new(Typewriter::new(
                    content::ROLES.iter().map(|role| role.to_string()).collect(),
                )));
                let pending = Rc::new(RefCell::new(None));
                schedule_typewriter(machine, typed, pending.clone());
                pending_slot = Some(pending);
            }

            move || {
                if let Some(pending) = pending_slot {
                    pending.borrow_mut().take();
                }
            }
        });
    }

    let background = if caps.animations_enabled() {
        html! { <StarfieldCanvas /> }
    } else {
        html! {
            <div class="hero-fallback" aria-hidden="true">
                <div class="glow glow-blue"></div>
                <div class="glow glow-purple"></div>
                <div class="glow glow-cyan"></div>
            </div>
        }
    };

    let on_contact = Callback::from(|_event: MouseEvent| scroll_to_section("contact"));
    let on_scroll_down = Callback::from(|_event: MouseEvent| scroll_to_section("about"));

    html! {
        <section id="hero" class="hero">
            {background}
            <div class="hero-overlay" aria-hidden="true"></div>
            <div class="hero-content">
                <div class="hero-portrait">
                    <img
                        src={content::PROFILE.portrait}
                        alt={format!("Portrait of {}", content::PROFILE.name)}
                        loading="lazy"
                    />
                </div>
                <h1 class="hero-name">
                    <span class="gradient-text">{content::PROFILE.name}</span>
                </h1>
                <p class="hero-role">
                    <span>{(*typed).clone()}</span>
                    <span class="caret" aria-hidden="true">{"|"}</span>
                </p>
                <p class="hero-tagline">{content::PROFILE.tagline}</p>
                <div class="hero-actions">
                    <a
                        class="button button-primary"
                        href={content::PROFILE.resume_path}
                        download={content::PROFILE.resume_download_name}
                    >
                        {"Download résumé"}
                    </a>
                    <button class="button button-ghost" type="button" onclick={on_contact}>
                        {"Contact me"}
                    </button>
                </div>
                <div class="hero-social">
                    <ExternalLink href={content::PROFILE.github} label="GitHub" class="social-link" />
                    <ExternalLink href={content::PROFILE.linkedin} label="LinkedIn" class="social-link" />
                </div>
            </div>
            <button class="scroll-indicator" type="button" onclick={on_scroll_down}>
                <span>{"Scroll down"}</span>
                <span class="scroll-wheel" aria-hidden="true"></span>
            </button>
        </section>
    }
}

#[function_component(DeveloperAvatar)]
fn developer_avatar() -> Html {
    html! {
        <div class="avatar-scene">
            <div class="avatar-halo" aria-hidden="true"></div>
            <svg
                viewBox="0 0 320 320"
                class="avatar-figure"
                role="img"
                aria-label="Illustration of a developer at a laptop"
                xmlns="http://www.w3.org/2000/svg"
            >
                // Head and hair
                <circle cx="160" cy="120" r="35" fill="#fdbcb4" />
                <path d="M125 95 Q160 80 195 95 Q195 85 160 85 Q125 85 125 95" fill="#4a4a4a" />
                // Eyes and glasses
                <circle cx="150" cy="115" r="3" fill="#2563eb" />
                <circle cx="170" cy="115" r="3" fill="#2563eb" />
                <rect x="140" y="110" width="15" height="12" fill="none" stroke="#374151" stroke-width="2" rx="2" />
                <rect x="165" y="110" width="15" height="12" fill="none" stroke="#374151" stroke-width="2" rx="2" />
                <line x1="155" y1="116" x2="165" y2="116" stroke="#374151" stroke-width="2" />
                <path d="M150 125 Q160 130 170 125" fill="none" stroke="#374151" stroke-width="2" stroke-linecap="round" />
                // Hoodie
                <rect x="130" y="155" width="60" height="80" fill="#1f2937" rx="8" />
                <rect x="135" y="160" width="50" height="70" fill="#374151" rx="6" />
                <circle cx="155" cy="170" r="2" fill="#6b7280" />
                <circle cx="165" cy="170" r="2" fill="#6b7280" />
                // Arms and hands
                <rect x="110" y="165" width="20" height="50" fill="#1f2937" rx="10" />
                <rect x="190" y="165" width="20" height="50" fill="#1f2937" rx="10" />
                <circle cx="120" cy="220" r="8" fill="#fdbcb4" />
                <circle cx="200" cy="220" r="8" fill="#fdbcb4" />
                // Laptop with code lines
                <rect x="140" y="235" width="40" height="25" fill="#374151" rx="2" />
                <rect x="142" y="237" width="36" height="15" fill="#000000" rx="1" />
                <line x1="145" y1="240" x2="155" y2="240" stroke="#3b82f6" stroke-width="1" />
                <line x1="145" y1="243" x2="165" y2="243" stroke="#10b981" stroke-width="1" />
                <line x1="145" y1="246" x2="160" y2="246" stroke="#f59e0b" stroke-width="1" />
                <line x1="145" y1="249" x2="170" y2="249" stroke="#8b5cf6" stroke-width="1" />
            </svg>
            <div class="avatar-chip chip-code" aria-hidden="true">{"{ }"}</div>
            <div class="avatar-chip chip-terminal" aria-hidden="true">{">_"}</div>
            <div class="avatar-chip chip-laptop" aria-hidden="true">{"💻"}</div>
            <div class="avatar-chip chip-coffee" aria-hidden="true">{"☕"}</div>
            <div class="avatar-accent accent-diamond" aria-hidden="true"></div>
            <div class="avatar-accent accent-dot" aria-hidden="true"></div>
            <div class="avatar-accent accent-triangle" aria-hidden="true"></div>
        </div>
    }
}

#[function_component(About)]
fn about() -> Html {
    let section_ref = use_node_ref();
    let visible = use_once_visible(&section_ref);

    html! {
        <section
            id="about"
            ref={section_ref}
            class={classes!("section", "about", visible.then_some("is-visible"))}
        >
            <div class="section-inner about-grid">
                <div class="about-avatar reveal">
                    <DeveloperAvatar />
                </div>
                <div class="about-copy">
                    <h2 class="section-title reveal">
                        {"About "}<span class="gradient-text">{"Me"}</span>
                    </h2>
                    { for content::ABOUT_PARAGRAPHS.iter().enumerate().map(|(index, paragraph)| html! {
                        <p class="about-paragraph reveal" style={stagger_style(index)}>{*paragraph}</p>
                    })}
                    <div class="stat-grid">
                        { for content::STATS.iter().map(|stat| html! {
                            <div class="glass-card stat-card reveal">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        })}
                    </div>
                    <h3 class="about-subtitle reveal">{"Core expertise"}</h3>
                    <div class="chip-row">
                        { for content::CORE_EXPERTISE.iter().enumerate().map(|(index, skill)| html! {
                            <span class="chip reveal" style={stagger_style(index)}>{*skill}</span>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn draw_wireframe_cube(ctx: &CanvasRenderingContext2d, size: f64, time: f64) {
    ctx.clear_rect(0.0, 0.0, size, size);

    let projected: Vec<(f64, f64)> = wireframe::rotated(time)
        .iter()
        .map(|vertex| wireframe::project(*vertex, size))
        .collect();

    ctx.set_stroke_style_str("rgba(59, 130, 246, 0.7)");
    ctx.set_line_width(1.5);
    ctx.begin_path();
    for (a, b) in wireframe::EDGES {
        ctx.move_to(projected[a].0, projected[a].1);
        ctx.line_to(projected[b].0, projected[b].1);
    }
    ctx.stroke();
}

#[function_component(SkillCubeCanvas)]
fn skill_cube_canvas() -> Html {
    let canvas_ref = use_node_ref();

    use_effect_with(canvas_ref.clone(), |canvas_ref| {
        let mut frame_loop = None;

        if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
            canvas.set_width(CUBE_CANVAS_SIZE);
            canvas.set_height(CUBE_CANVAS_SIZE);

            if let Some(ctx) = canvas_context_2d(&canvas) {
                frame_loop = Some(FrameLoop::start(move |timestamp| {
                    draw_wireframe_cube(&ctx, f64::from(CUBE_CANVAS_SIZE), timestamp / 1000.0);
                }));
            }
        }

        move || drop(frame_loop)
    });

    html! {
        <canvas ref={canvas_ref} class="skill-cube" aria-hidden="true"></canvas>
    }
}

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    name: AttrValue,
    icon: AttrValue,
    level: u8,
    index: usize,
    visible: bool,
}

#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let width = if props.visible { props.level } else { 0 };
    let fill_style = format!(
        "width: {width}%; transition-delay: {}ms;",
        props.index * 100 + 300
    );

    html! {
        <div
            class={classes!("skill-row", props.visible.then_some("is-visible"))}
            style={stagger_style(props.index)}
        >
            <div class="skill-meta">
                <span class="skill-icon" aria-hidden="true">{props.icon.clone()}</span>
                <span class="skill-name">{props.name.clone()}</span>
                <span class="skill-level">{format!("{}%", props.level)}</span>
            </div>
            <div class="skill-track">
                <div class="skill-fill" style={fill_style}></div>
            </div>
        </div>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    let caps = use_context::<RenderCaps>().unwrap_or_default();
    let section_ref = use_node_ref();
    let visible = use_once_visible(&section_ref);
    let active = use_state(|| content::SKILL_CATEGORIES[0].key);

    let current: &SkillCategory = content::SKILL_CATEGORIES
        .iter()
        .find(|category| category.key == *active)
        .unwrap_or(&content::SKILL_CATEGORIES[0]);

    let cube = if caps.animations_enabled() {
        html! { <SkillCubeCanvas /> }
    } else {
        html! { <div class="cube-placeholder" aria-hidden="true"></div> }
    };

    html! {
        <section
            id="skills"
            ref={section_ref}
            class={classes!("section", "skills", visible.then_some("is-visible"))}
        >
            <div class="section-inner">
                <header class="section-header reveal">
                    <h2 class="section-title">
                        {"Technical "}<span class="gradient-text">{"Skills"}</span>
                    </h2>
                    <p class="section-lede">
                        {"A working toolkit of the technologies I reach for most."}
                    </p>
                </header>
                <div class="skills-grid">
                    <div class="skills-visual reveal">{cube}</div>
                    <div class="skills-panel">
                        <div class="tab-row" role="tablist" aria-label="Skill categories">
                            { for content::SKILL_CATEGORIES.iter().map(|category| {
                                let key = category.key;
                                let is_active = key == *active;
                                let onclick = {
                                    let active = active.clone();
                                    Callback::from(move |_event: MouseEvent| active.set(key))
                                };
                                html! {
                                    <button
                                        type="button"
                                        role="tab"
                                        aria-selected={is_active.to_string()}
                                        class={classes!("tab", is_active.then_some("is-active"))}
                                        onclick={onclick}
                                    >
                                        <span aria-hidden="true">{category.icon}</span>
                                        {category.label}
                                    </button>
                                }
                            })}
                        </div>
                        <div class="glass-card skill-list">
                            <h3 class="skill-list-title">{format!("{} technologies", current.label)}</h3>
                            { for current.skills.iter().enumerate().map(|(index, skill)| html! {
                                <SkillBar
                                    key={skill.name}
                                    name={skill.name}
                                    icon={skill.icon}
                                    level={skill.level}
                                    index={index}
                                    visible={visible}
                                />
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ProjectFilter {
    All,
    Featured,
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    index: usize,
    visible: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <article
            class={classes!(
                "glass-card",
                "project-card",
                "reveal",
                project.featured.then_some("is-featured"),
                props.visible.then_some("is-visible"),
            )}
            style={stagger_style(props.index)}
        >
            <div class="project-media">
                <img src={project.image} alt={format!("Screenshot of {}", project.title)} loading="lazy" />
                if project.featured {
                    <span class="featured-badge">{"★ Featured"}</span>
                }
            </div>
            <div class="project-body">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="chip-row">
                    { for project.tech.iter().map(|tech| html! {
                        <span class="chip chip-small">{*tech}</span>
                    })}
                </div>
                <div class="project-links">
                    <ExternalLink href={project.live_url} label="Live demo" class="project-link" />
                    <ExternalLink href={project.source_url} label="Source code" class="project-link" />
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    let section_ref = use_node_ref();
    let visible = use_once_visible(&section_ref);
    let filter = use_state(|| ProjectFilter::All);

    let shown: Vec<&'static Project> = content::PROJECTS
        .iter()
        .filter(|project| *filter == ProjectFilter::All || project.featured)
        .collect();

    let filter_button = |target: ProjectFilter, label: &'static str| -> Html {
        let is_active = *filter == target;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_event: MouseEvent| filter.set(target))
        };
        html! {
            <button
                type="button"
                class={classes!("tab", is_active.then_some("is-active"))}
                aria-pressed={is_active.to_string()}
                onclick={onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <section
            id="projects"
            ref={section_ref}
            class={classes!("section", "projects", visible.then_some("is-visible"))}
        >
            <div class="section-inner">
                <header class="section-header reveal">
                    <h2 class="section-title">
                        {"Featured "}<span class="gradient-text">{"Projects"}</span>
                    </h2>
                    <p class="section-lede">
                        {"A selection of recent work across product, tooling, and infrastructure."}
                    </p>
                    <div class="tab-row filter-row">
                        {filter_button(ProjectFilter::All, "All projects")}
                        {filter_button(ProjectFilter::Featured, "Featured only")}
                    </div>
                </header>
                <div class="project-grid">
                    { for shown.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard
                            key={project.id}
                            project={*project}
                            index={index}
                            visible={visible}
                        />
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let section_ref = use_node_ref();
    let visible = use_once_visible(&section_ref);

    html! {
        <section
            id="contact"
            ref={section_ref}
            class={classes!("section", "contact", visible.then_some("is-visible"))}
        >
            <div class="section-inner contact-inner">
                <h2 class="section-title reveal">
                    {"Get in "}<span class="gradient-text">{"Touch"}</span>
                </h2>
                <p class="section-lede reveal">
                    {"Have a project in mind, or just want to talk shop? My inbox is open."}
                </p>
                <div class="contact-actions reveal">
                    <a class="button button-primary" href={format!("mailto:{}", content::PROFILE.email)}>
                        {content::PROFILE.email}
                    </a>
                    <a
                        class="button button-ghost"
                        href={content::PROFILE.resume_path}
                        download={content::PROFILE.resume_download_name}
                    >
                        {"Download résumé"}
                    </a>
                </div>
                <div class="hero-social reveal">
                    <ExternalLink href={content::PROFILE.github} label="GitHub" class="social-link" />
                    <ExternalLink href={content::PROFILE.linkedin} label="LinkedIn" class="social-link" />
                </div>
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let caps = use_memo((), |_| RenderCaps::detect());

    html! {
        <ContextProvider<RenderCaps> context={*caps}>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <Navigation />
            <InteractiveParticles />
            <main id="content">
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Contact />
            </main>
        </ContextProvider<RenderCaps>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
