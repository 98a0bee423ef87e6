//! Browser glue for WASM hosts.
//!
//! The host wires element-local events (board pointer-down/move/up/leave,
//! key presses) straight into [`BoardDom`]. Rotate and resize gestures are
//! document-scoped — the pointer routinely leaves the small handle hit-area
//! mid-gesture — so when the engine emits [`Action::CaptureDocument`] this
//! module attaches a document-level mousemove/mouseup pair as an RAII
//! guard and drops it on [`Action::ReleaseDocument`]. The guard also listens
//! for window blur and tab visibility loss and force-ends the active gesture
//! there, so a lost pointer-up can never leave listeners attached.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::camera::Point;
use crate::engine::{Action, EngineCore};
use crate::input::{Button, Key};

/// Document-level listener set for an active rotate or resize gesture.
/// Dropping the guard detaches everything.
struct DocumentCapture {
    _listeners: Vec<EventListener>,
}

/// Holds the live capture guard, tagged with a generation. Releases are
/// deferred a tick (a listener must not drop itself mid-callback), so a
/// gesture can attach a fresh capture while a release is still pending —
/// the release only clears the slot when no newer guard has been attached
/// since it was scheduled.
struct CaptureSlot<G> {
    generation: Cell<u64>,
    active: RefCell<Option<G>>,
}

impl<G> CaptureSlot<G> {
    fn new() -> Self {
        Self { generation: Cell::new(0), active: RefCell::new(None) }
    }

    /// Install a new guard, superseding any pending release.
    fn attach(&self, guard: G) {
        self.generation.set(self.generation.get() + 1);
        *self.active.borrow_mut() = Some(guard);
    }

    /// Generation of the most recently attached guard.
    fn current(&self) -> u64 {
        self.generation.get()
    }

    /// Drop the held guard, unless a newer one replaced it after this
    /// release was scheduled.
    fn release_if_current(&self, generation: u64) {
        if self.generation.get() == generation {
            self.active.borrow_mut().take();
        }
    }
}

type Capture = Rc<CaptureSlot<DocumentCapture>>;
type ActionSink = Rc<dyn Fn(Action)>;

/// Engine wrapper that owns the document-capture lifecycle.
///
/// All actions the host must handle (commits, cursor, redraw) flow through
/// the sink passed at construction; capture and release actions are
/// consumed here.
pub struct BoardDom {
    core: Rc<RefCell<EngineCore>>,
    capture: Capture,
    /// Page offset of the board element's top-left corner, subtracted from
    /// client coordinates before they reach the engine.
    origin: Rc<Cell<(f64, f64)>>,
    sink: ActionSink,
}

impl BoardDom {
    pub fn new(core: EngineCore, sink: impl Fn(Action) + 'static) -> Self {
        Self {
            core: Rc::new(RefCell::new(core)),
            capture: Rc::new(CaptureSlot::new()),
            origin: Rc::new(Cell::new((0.0, 0.0))),
            sink: Rc::new(sink),
        }
    }

    /// Shared handle to the engine core for host-side reads (projection,
    /// queries) and direct operations (add, edit, remove).
    #[must_use]
    pub fn core(&self) -> Rc<RefCell<EngineCore>> {
        Rc::clone(&self.core)
    }

    /// Record the board element's page offset. Call on mount and whenever
    /// layout moves the element.
    pub fn set_origin(&self, x: f64, y: f64) {
        self.origin.set((x, y));
    }

    pub fn pointer_down(&self, event: &MouseEvent) {
        let pt = self.screen_point(event);
        let actions = self.core.borrow_mut().on_pointer_down(pt, button_of(event));
        self.dispatch(actions);
    }

    pub fn pointer_move(&self, event: &MouseEvent) {
        // Document-scoped gestures already receive moves via the capture;
        // this element-local path feeds pan and drag.
        if self.core.borrow().gesture.holds_document_capture() {
            return;
        }
        let pt = self.screen_point(event);
        let actions = self.core.borrow_mut().on_pointer_move(pt);
        self.dispatch(actions);
    }

    pub fn pointer_up(&self, event: &MouseEvent) {
        if self.core.borrow().gesture.holds_document_capture() {
            return;
        }
        let pt = self.screen_point(event);
        let actions = self.core.borrow_mut().on_pointer_up(pt, button_of(event));
        self.dispatch(actions);
    }

    pub fn pointer_leave(&self) {
        let actions = self.core.borrow_mut().on_pointer_leave();
        self.dispatch(actions);
    }

    pub fn key_down(&self, key: &str) {
        let actions = self.core.borrow_mut().on_key_down(Key(key.to_owned()));
        self.dispatch(actions);
    }

    fn screen_point(&self, event: &MouseEvent) -> Point {
        let (ox, oy) = self.origin.get();
        Point::new(f64::from(event.client_x()) - ox, f64::from(event.client_y()) - oy)
    }

    fn dispatch(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::CaptureDocument => self.attach_capture(),
                Action::ReleaseDocument => schedule_release(&self.capture),
                other => (self.sink)(other),
            }
        }
    }

    fn attach_capture(&self) {
        let Some(window) = web_sys::window() else {
            warn!("document capture requested outside a browser window");
            return;
        };
        let Some(document) = window.document() else {
            warn!("document capture requested without a document");
            return;
        };

        let mut listeners = Vec::with_capacity(4);

        {
            let core = Rc::clone(&self.core);
            let origin = Rc::clone(&self.origin);
            let capture = Rc::clone(&self.capture);
            let sink = Rc::clone(&self.sink);
            listeners.push(EventListener::new(&document, "mousemove", move |event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    let (ox, oy) = origin.get();
                    let pt = Point::new(
                        f64::from(mouse.client_x()) - ox,
                        f64::from(mouse.client_y()) - oy,
                    );
                    let actions = core.borrow_mut().on_pointer_move(pt);
                    forward(&capture, &sink, actions);
                }
            }));
        }

        {
            let core = Rc::clone(&self.core);
            let origin = Rc::clone(&self.origin);
            let capture = Rc::clone(&self.capture);
            let sink = Rc::clone(&self.sink);
            listeners.push(EventListener::new(&document, "mouseup", move |event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    let (ox, oy) = origin.get();
                    let pt = Point::new(
                        f64::from(mouse.client_x()) - ox,
                        f64::from(mouse.client_y()) - oy,
                    );
                    let actions = core.borrow_mut().on_pointer_up(pt, button_of(mouse));
                    forward(&capture, &sink, actions);
                }
            }));
        }

        {
            let core = Rc::clone(&self.core);
            let capture = Rc::clone(&self.capture);
            let sink = Rc::clone(&self.sink);
            listeners.push(EventListener::new(&window, "blur", move |_event| {
                let actions = core.borrow_mut().cancel_gesture();
                forward(&capture, &sink, actions);
            }));
        }

        {
            let core = Rc::clone(&self.core);
            let capture = Rc::clone(&self.capture);
            let sink = Rc::clone(&self.sink);
            let doc = document.clone();
            listeners.push(EventListener::new(&document, "visibilitychange", move |_event| {
                if doc.hidden() {
                    let actions = core.borrow_mut().cancel_gesture();
                    forward(&capture, &sink, actions);
                }
            }));
        }

        self.capture.attach(DocumentCapture { _listeners: listeners });
    }
}

/// Route actions produced inside a capture callback. A capture request can
/// never arrive here — the capture is already live while these run.
fn forward(capture: &Capture, sink: &ActionSink, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::ReleaseDocument => schedule_release(capture),
            Action::CaptureDocument => {}
            other => sink(other),
        }
    }
}

/// Detach the capture on the next tick. The release is often requested from
/// inside one of the captured listeners, and a listener must not be dropped
/// while its own callback frame is still on the stack. The generation taken
/// here keeps the deferred drop from tearing down a newer gesture's capture.
fn schedule_release(capture: &Capture) {
    let generation = capture.current();
    let capture = Rc::clone(capture);
    Timeout::new(0, move || {
        capture.release_if_current(generation);
    })
    .forget();
}

fn button_of(event: &MouseEvent) -> Button {
    match event.button() {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}
