//! Browser binding: finds the carousel markup, splices the wraparound clones,
//! wires DOM events into [`CarouselCore`] and applies the resulting actions.
//!
//! ARCHITECTURE
//! ============
//! Each mounted carousel is a `Host`: the engine behind a `RefCell` plus the
//! elements it drives. Hosts are owned by a thread-local [`Registry`]; every
//! listener and timer holds only a `Weak` handle, so a carousel whose root has
//! left the document is dropped the next time the registry is pruned and its
//! leftover callbacks turn into no-ops.
//!
//! A page gets one `keydown` listener and one `resize` listener no matter how
//! many carousels it holds. Keys go to the carousel whose viewport matches
//! `:hover` at the moment of the key press; resizes go to all of them.
//!
//! Pending timeouts live in per-host [`TimerSlots`]. Scheduling a timer of a
//! kind that is already pending drops, and so cancels, the previous timeout.
//!
//! Nothing here reports failure to the page. A carousel with missing markup is
//! skipped with a debug log line and the rest of the page is untouched.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, NodeList, ScrollBehavior,
    ScrollToOptions, TouchEvent, Window,
};

use crate::config::CarouselConfig;
use crate::consts::{
    ACTIVE_CLASS, CLONE_CLASS, DOT_CLASS, ITEM_CLASS, NEXT_CLASS, PREV_CLASS, ROOT_ATTR, TRACK_CLASS, VIEWPORT_CLASS,
};
use crate::engine::{Action, CarouselCore, Motion, Timer};
use crate::geometry::{ItemBox, Layout, centered_scroll_left};
use crate::input::{Intent, Key, SwipeTracker};
use crate::registry::Registry;
use crate::timers::TimerSlots;

/// Attribute set on a root once it has been mounted.
const MOUNTED_ATTR: &str = "data-carousel-mounted";

/// Selector a viewport matches while the pointer is over it.
const HOVER_SELECTOR: &str = ":hover";

/// Why a root could not be turned into a working carousel.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no browser window")]
    NoWindow,
    #[error("root is already mounted")]
    AlreadyMounted,
    #[error("viewport element not found")]
    MissingViewport,
    #[error("track element not found")]
    MissingTrack,
    #[error("track has no items")]
    EmptyTrack,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry<Rc<Host>>> = RefCell::new(Registry::new());
    static GLOBAL_LISTENERS: Cell<bool> = const { Cell::new(false) };
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Module start: install the panic hook and logger, then mount every
/// `[data-carousel]` root in the current document.
#[wasm_bindgen(start)]
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        initialize_all(&document);
    }
}

/// JS entry point for markup inserted after module start.
#[wasm_bindgen(js_name = initializeCarousel)]
pub fn initialize_carousel(root: Element) {
    initialize(&root);
}

/// Mount every `[data-carousel]` root in `document`.
pub fn initialize_all(document: &Document) {
    let roots = match document.query_selector_all(&format!("[{ROOT_ATTR}]")) {
        Ok(roots) => roots,
        Err(e) => {
            log::debug!("carousel lookup failed: {e:?}");
            return;
        }
    };
    for root in elements(&roots) {
        initialize(&root);
    }
}

/// Turn `root` into a live carousel. Silently does nothing when the markup is
/// incomplete or the track is empty.
pub fn initialize(root: &Element) {
    match mount(root) {
        Ok(item_count) => log::debug!("carousel mounted with {item_count} items"),
        Err(e) => log::debug!("carousel skipped: {e}"),
    }
}

// =============================================================================
// MOUNT
// =============================================================================

fn mount(root: &Element) -> Result<usize, MountError> {
    if root.has_attribute(MOUNTED_ATTR) {
        return Err(MountError::AlreadyMounted);
    }
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoWindow)?;

    let viewport = root
        .query_selector(&class_selector(VIEWPORT_CLASS))?
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
        .ok_or(MountError::MissingViewport)?;
    let track = viewport
        .query_selector(&class_selector(TRACK_CLASS))?
        .ok_or(MountError::MissingTrack)?;
    let items = elements(&track.query_selector_all(&class_selector(ITEM_CLASS))?);
    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return Err(MountError::EmptyTrack);
    };

    let config = CarouselConfig::from_attr(root.get_attribute(ROOT_ATTR).as_deref());
    let finish_signal = supports_scroll_end(&window);
    let core = CarouselCore::new(items.len(), config)
        .ok_or(MountError::EmptyTrack)?
        .with_finish_signal(finish_signal);

    root.set_attribute(MOUNTED_ATTR, "true")?;
    splice_clones(&track, first, last)?;

    let prev = root.query_selector(&class_selector(PREV_CLASS))?;
    let next = root.query_selector(&class_selector(NEXT_CLASS))?;
    let dots = elements(&root.query_selector_all(&class_selector(DOT_CLASS))?);

    let host = Rc::new(Host {
        core: RefCell::new(core),
        swipe: RefCell::new(SwipeTracker::new()),
        timers: RefCell::new(TimerSlots::new()),
        dom: Dom { root: root.clone(), viewport, track, dots },
    });
    REGISTRY.with(|registry| registry.borrow_mut().insert(Rc::clone(&host)));

    install_global_listeners(&window, &document)?;
    wire_controls(&host, prev.as_ref(), next.as_ref())?;
    wire_viewport(&host, finish_signal)?;
    start_when_loaded(&window, &document, Rc::downgrade(&host))?;

    Ok(items.len())
}

/// Prepend a copy of the last item and append a copy of the first.
fn splice_clones(track: &Element, first: &Element, last: &Element) -> Result<(), MountError> {
    let first_clone = tagged_clone(first)?;
    let last_clone = tagged_clone(last)?;
    track.append_child(&first_clone)?;
    track.insert_before(&last_clone, track.first_child().as_ref())?;
    Ok(())
}

fn tagged_clone(item: &Element) -> Result<Element, MountError> {
    let clone = item
        .clone_node_with_deep(true)?
        .dyn_into::<Element>()
        .map_err(|_| MountError::Dom("cloned item is not an element".into()))?;
    clone.class_list().add_1(CLONE_CLASS)?;
    clone.set_attribute("aria-hidden", "true")?;
    Ok(clone)
}

fn supports_scroll_end(window: &Window) -> bool {
    matches!(js_sys::Reflect::has(window, &JsValue::from_str("onscrollend")), Ok(true))
}

// =============================================================================
// HOST
// =============================================================================

struct Host {
    core: RefCell<CarouselCore>,
    swipe: RefCell<SwipeTracker>,
    timers: RefCell<TimerSlots<Timeout>>,
    dom: Dom,
}

/// Run one engine transition, then apply its actions with the borrow released.
fn handle(host: &Rc<Host>, transition: impl FnOnce(&mut CarouselCore) -> Vec<Action>) {
    let actions = transition(&mut host.core.borrow_mut());
    dispatch(host, actions);
}

fn with_host(host: &Weak<Host>, transition: impl FnOnce(&mut CarouselCore) -> Vec<Action>) {
    if let Some(host) = host.upgrade() {
        handle(&host, transition);
    }
}

fn dispatch(host: &Rc<Host>, actions: Vec<Action>) {
    for action in actions {
        log::trace!("carousel action {action:?}");
        match action {
            Action::ScrollTo { index, motion } => host.dom.scroll_to(index, motion),
            Action::SetActiveIndicator(index) => host.dom.mark_active(index),
            Action::Schedule { timer, delay_ms } => schedule(host, timer, delay_ms),
        }
    }
}

/// Arm `timer`, replacing (and cancelling) any pending timeout of its kind.
fn schedule(host: &Rc<Host>, timer: Timer, delay_ms: u32) {
    let weak = Rc::downgrade(host);
    let timeout = Timeout::new(delay_ms, move || with_host(&weak, |core| core.on_timer(timer)));
    let displaced = host.timers.borrow_mut().replace(timer, timeout);
    drop(displaced);
}

// =============================================================================
// DOM SURFACE
// =============================================================================

struct Dom {
    root: Element,
    viewport: HtmlElement,
    track: Element,
    dots: Vec<Element>,
}

impl Dom {
    fn scroll_to(&self, index: usize, motion: Motion) {
        let layout = DomLayout { viewport: &self.viewport, items: self.rendered_items() };
        let options = ScrollToOptions::new();
        options.set_left(centered_scroll_left(&layout, index));
        options.set_behavior(match motion {
            Motion::Smooth => ScrollBehavior::Smooth,
            Motion::Instant => ScrollBehavior::Instant,
        });
        self.viewport.scroll_to_with_scroll_to_options(&options);
    }

    fn mark_active(&self, active: usize) {
        for (index, dot) in self.dots.iter().enumerate() {
            let is_active = index == active;
            if let Err(e) = dot.class_list().toggle_with_force(ACTIVE_CLASS, is_active) {
                log::debug!("indicator {index} class update failed: {e:?}");
            }
            let aria = if is_active {
                dot.set_attribute("aria-current", "true")
            } else {
                dot.remove_attribute("aria-current")
            };
            if let Err(e) = aria {
                log::debug!("indicator {index} aria update failed: {e:?}");
            }
        }
    }

    /// Live check that the pointer is over the viewport.
    fn is_hovered(&self) -> bool {
        matches!(self.viewport.matches(HOVER_SELECTOR), Ok(true))
    }

    /// Rendered items in track order, clones included.
    fn rendered_items(&self) -> Vec<HtmlElement> {
        match self.track.query_selector_all(&class_selector(ITEM_CLASS)) {
            Ok(list) => elements(&list)
                .iter()
                .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
                .collect(),
            Err(e) => {
                log::debug!("carousel item lookup failed: {e:?}");
                Vec::new()
            }
        }
    }
}

struct DomLayout<'a> {
    viewport: &'a HtmlElement,
    items: Vec<HtmlElement>,
}

impl Layout for DomLayout<'_> {
    fn viewport_width(&self) -> f64 {
        f64::from(self.viewport.offset_width())
    }

    fn item_box(&self, index: usize) -> Option<ItemBox> {
        let item = self.items.get(index)?;
        Some(ItemBox::new(f64::from(item.offset_left()), f64::from(item.offset_width())))
    }
}

// =============================================================================
// LISTENERS
// =============================================================================

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), MountError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_controls(host: &Rc<Host>, prev: Option<&Element>, next: Option<&Element>) -> Result<(), MountError> {
    for (control, intent) in [(prev, Intent::Prev), (next, Intent::Next)] {
        let Some(control) = control else {
            continue;
        };
        let weak = Rc::downgrade(host);
        listen(control, "click", move |event| {
            event.prevent_default();
            with_host(&weak, |core| core.on_intent(intent));
        })?;
    }

    for (index, dot) in host.dom.dots.iter().enumerate() {
        let weak = Rc::downgrade(host);
        listen(dot, "click", move |_| with_host(&weak, |core| core.on_intent(Intent::Jump(index))))?;
    }
    Ok(())
}

fn wire_viewport(host: &Rc<Host>, finish_signal: bool) -> Result<(), MountError> {
    let viewport = &host.dom.viewport;

    if finish_signal {
        let weak = Rc::downgrade(host);
        listen(viewport, "scrollend", move |_| with_host(&weak, CarouselCore::on_scroll_end))?;
    }

    let weak = Rc::downgrade(host);
    listen(viewport, "touchstart", move |event| {
        let Some(host) = weak.upgrade() else {
            return;
        };
        let Some(touch) = event.dyn_ref::<TouchEvent>() else {
            return;
        };
        let mut swipe = host.swipe.borrow_mut();
        match touch.touches().get(0) {
            Some(first) if touch.touches().length() == 1 => swipe.begin(f64::from(first.client_x())),
            _ => swipe.cancel(),
        }
    })?;

    let weak = Rc::downgrade(host);
    listen(viewport, "touchend", move |event| {
        let Some(host) = weak.upgrade() else {
            return;
        };
        let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|t| t.changed_touches().get(0)) else {
            return;
        };
        let threshold = host.core.borrow().config().swipe_threshold_px;
        let intent = host.swipe.borrow_mut().end(f64::from(touch.client_x()), threshold);
        if let Some(intent) = intent {
            handle(&host, |core| core.on_intent(intent));
        }
    })?;

    let weak = Rc::downgrade(host);
    listen(viewport, "touchcancel", move |_| {
        if let Some(host) = weak.upgrade() {
            host.swipe.borrow_mut().cancel();
        }
    })?;

    Ok(())
}

fn install_global_listeners(window: &Window, document: &Document) -> Result<(), MountError> {
    if GLOBAL_LISTENERS.with(Cell::get) {
        return Ok(());
    }
    listen(document, "keydown", on_key_down)?;
    listen(window, "resize", |_| on_window_resize())?;
    GLOBAL_LISTENERS.with(|installed| installed.set(true));
    Ok(())
}

fn on_key_down(event: Event) {
    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };
    let Some(intent) = Key(key_event.key()).intent() else {
        return;
    };
    let Some(host) = hovered_host() else {
        return;
    };
    event.prevent_default();
    handle(&host, |core| core.on_intent(intent));
}

fn on_window_resize() {
    for host in live_hosts() {
        handle(&host, CarouselCore::on_resize);
    }
}

fn start_when_loaded(window: &Window, document: &Document, host: Weak<Host>) -> Result<(), MountError> {
    if document.ready_state() == "complete" {
        return after_layout(window, host);
    }
    let window_for_load = window.clone();
    listen(window, "load", move |_| {
        if let Err(e) = after_layout(&window_for_load, host.clone()) {
            log::debug!("carousel start deferred failed: {e}");
        }
    })
}

/// Start initial placement two animation frames from now, once layout has run.
fn after_layout(window: &Window, host: Weak<Host>) -> Result<(), MountError> {
    let second_window = window.clone();
    let first = Closure::wrap(Box::new(move |_ts: f64| {
        let host = host.clone();
        let second = Closure::wrap(Box::new(move |_ts: f64| {
            with_host(&host, CarouselCore::start);
        }) as Box<dyn FnMut(f64)>);
        if let Err(e) = second_window.request_animation_frame(second.as_ref().unchecked_ref()) {
            log::debug!("carousel animation frame request failed: {e:?}");
        }
        second.forget();
    }) as Box<dyn FnMut(f64)>);
    window.request_animation_frame(first.as_ref().unchecked_ref())?;
    first.forget();
    Ok(())
}

// =============================================================================
// REGISTRY ACCESS
// =============================================================================

/// Drop hosts whose root has left the document.
fn prune(registry: &mut Registry<Rc<Host>>) {
    registry.retain(|host| host.dom.root.is_connected());
}

fn hovered_host() -> Option<Rc<Host>> {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        prune(&mut registry);
        registry.find(|host| host.dom.is_hovered()).cloned()
    })
}

fn live_hosts() -> Vec<Rc<Host>> {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        prune(&mut registry);
        registry.iter().cloned().collect()
    })
}

// =============================================================================
// HELPERS
// =============================================================================

fn class_selector(class: &str) -> String {
    format!(".{class}")
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}
