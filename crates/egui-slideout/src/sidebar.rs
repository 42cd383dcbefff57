use crate::animation::Slide;
use crate::config::SidebarConfig;
use crate::errors::SidebarError;
use crate::gesture::{DragEvent, GestureInterpreter, GestureOutcome, Settle, TouchFilter};
use crate::geometry;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use tracing::debug;

/// A host-supplied view rendered into the content or menu area.
pub trait AreaView {
    fn ui(&mut self, ui: &mut egui::Ui);
}

impl<F: FnMut(&mut egui::Ui)> AreaView for F {
    fn ui(&mut self, ui: &mut egui::Ui) {
        self(ui)
    }
}

/// Shared handle to an area view. The host keeps ownership; the sidebar
/// only borrows it while rendering.
pub type AreaHandle = Rc<RefCell<dyn AreaView>>;

/// Wraps a view (or a `FnMut(&mut Ui)` closure) into an [`AreaHandle`].
pub fn area<V: AreaView + 'static>(view: V) -> AreaHandle {
    Rc::new(RefCell::new(view))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Closed,
    Opening,
    Open,
    Closing,
}

// What to do when the active slide completes. Snap transitions restore
// the resting state without flipping `is_open` or notifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlideKind {
    Open,
    Close,
    Snap,
}

/// Token returned by [`Sidebar::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type StateListener = Box<dyn FnMut(bool)>;

/// A slideout sidebar: a content area that can be dragged, flicked, or
/// toggled to reveal a menu anchored to the left or right edge.
pub struct Sidebar {
    config: SidebarConfig,
    content: AreaHandle,
    menu: AreaHandle,
    state: SlideState,
    is_open: bool,
    offset_x: f32,
    slide: Option<(SlideKind, Slide)>,
    interpreter: GestureInterpreter,
    touch_filter: Option<Box<TouchFilter>>,
    shadow_shown: bool,
    overlay_shown: bool,
    content_interaction_enabled: bool,
    tap_to_close_attached: bool,
    open_when_rotated: bool,
    listeners: Vec<(Subscription, StateListener)>,
    next_subscription: u64,
}

impl Sidebar {
    pub fn new(content: AreaHandle, menu: AreaHandle) -> Self {
        Self::with_config(content, menu, SidebarConfig::default())
    }

    pub fn with_config(content: AreaHandle, menu: AreaHandle, config: SidebarConfig) -> Self {
        Self {
            config,
            content,
            menu,
            state: SlideState::Closed,
            is_open: false,
            offset_x: 0.0,
            slide: None,
            interpreter: GestureInterpreter::default(),
            touch_filter: None,
            shadow_shown: false,
            overlay_shown: false,
            content_interaction_enabled: true,
            tap_to_close_attached: false,
            open_when_rotated: false,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SidebarConfig {
        &mut self.config
    }

    pub fn set_menu_width(&mut self, width: f32) -> Result<(), SidebarError> {
        self.config.set_menu_width(width)
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.set_disabled(disabled);
        if disabled {
            self.interpreter.reset();
        }
    }

    /// Installs a predicate consulted before a pan may start.
    pub fn set_touch_filter(&mut self, filter: impl Fn(f32) -> bool + 'static) {
        self.touch_filter = Some(Box::new(filter));
    }

    pub fn clear_touch_filter(&mut self) {
        self.touch_filter = None;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn slide_state(&self) -> SlideState {
        self.state
    }

    /// Current horizontal offset of the content area.
    pub fn offset(&self) -> f32 {
        self.offset_x
    }

    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    pub fn shadow_visible(&self) -> bool {
        self.shadow_shown
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_shown
    }

    pub fn content_interaction_enabled(&self) -> bool {
        self.content_interaction_enabled
    }

    pub fn tap_to_close_attached(&self) -> bool {
        self.tap_to_close_attached
    }

    pub fn content(&self) -> AreaHandle {
        Rc::clone(&self.content)
    }

    pub fn menu(&self) -> AreaHandle {
        Rc::clone(&self.menu)
    }

    /// Starts the animated open transition. No-op while disabled or
    /// already open/opening; an open during a closing animation retargets
    /// the slide in flight.
    pub fn open_menu(&mut self, now: Instant) {
        if self.config.disabled() {
            return;
        }
        if matches!(self.state, SlideState::Open | SlideState::Opening) {
            return;
        }
        debug!("opening menu");
        self.show_shadow();
        self.show_overlay();
        let target = geometry::open_offset(self.config.menu_location(), self.config.menu_width());
        self.start_slide(SlideKind::Open, target, now);
        self.state = SlideState::Opening;
    }

    /// Starts the close transition; with `animate` false the close applies
    /// instantly (used during rotation). No-op while disabled or already
    /// closed/closing.
    pub fn close_menu(&mut self, now: Instant, animate: bool) {
        if self.config.disabled() {
            return;
        }
        if matches!(self.state, SlideState::Closed | SlideState::Closing) {
            return;
        }
        debug!(animate, "closing menu");
        if animate {
            self.start_slide(SlideKind::Close, 0.0, now);
            self.state = SlideState::Closing;
        } else {
            self.slide = None;
            self.offset_x = 0.0;
            self.finish_close();
        }
    }

    pub fn toggle_menu(&mut self, now: Instant) {
        match self.state {
            SlideState::Open | SlideState::Opening => self.close_menu(now, true),
            SlideState::Closed | SlideState::Closing => self.open_menu(now),
        }
    }

    /// Advances the active slide and returns the current offset. Runs the
    /// completion step exactly once when the slide finishes.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some((kind, slide)) = self.slide else {
            return self.offset_x;
        };
        self.offset_x = slide.value_at(now);
        if slide.is_finished(now) {
            self.offset_x = slide.to();
            self.slide = None;
            match kind {
                SlideKind::Open => self.finish_open(),
                SlideKind::Close => self.finish_close(),
                SlideKind::Snap => {
                    if self.is_open {
                        self.state = SlideState::Open;
                    } else {
                        self.state = SlideState::Closed;
                        self.hide_shadow();
                        self.hide_overlay();
                    }
                }
            }
        }
        self.offset_x
    }

    /// Feeds one pan update through the gesture interpreter.
    pub fn handle_drag(&mut self, event: &DragEvent, view_width: f32, now: Instant) {
        let outcome = self.interpreter.handle(
            &self.config,
            self.is_open,
            self.offset_x,
            view_width,
            self.touch_filter.as_deref(),
            event,
        );
        match outcome {
            GestureOutcome::Ignored => {}
            GestureOutcome::Dragging { offset } => {
                // Direct manipulation preempts any slide in flight.
                self.slide = None;
                self.state = if self.is_open {
                    SlideState::Open
                } else {
                    SlideState::Closed
                };
                self.offset_x = offset;
                if offset != 0.0 {
                    self.show_shadow();
                    self.show_overlay();
                }
            }
            GestureOutcome::Released(settle) => match settle {
                Settle::Open => self.open_menu(now),
                Settle::Close => self.close_menu(now, true),
                Settle::SnapOpen => {
                    let target = geometry::open_offset(
                        self.config.menu_location(),
                        self.config.menu_width(),
                    );
                    self.start_slide(SlideKind::Snap, target, now);
                    self.state = SlideState::Opening;
                }
                Settle::SnapClosed => {
                    self.start_slide(SlideKind::Snap, 0.0, now);
                    self.state = SlideState::Closing;
                }
            },
        }
    }

    /// To be called when the host begins a device rotation. An open (or
    /// opening) menu closes immediately, without animation, and is
    /// remembered for [`Sidebar::rotation_ended`].
    pub fn rotation_began(&mut self, now: Instant) {
        if matches!(self.state, SlideState::Open | SlideState::Opening) {
            self.open_when_rotated = true;
            self.close_menu(now, false);
        }
    }

    /// Reopens the menu after rotation if it was open before and
    /// `reopen_on_rotate` is set. The remembered flag always clears.
    pub fn rotation_ended(&mut self, now: Instant) {
        if self.open_when_rotated && self.config.reopen_on_rotate() {
            self.open_menu(now);
        }
        self.open_when_rotated = false;
    }

    /// Registers a listener fired with the new `is_open` once per
    /// completed open or close transition, never during a drag.
    pub fn subscribe(&mut self, listener: impl FnMut(bool) + 'static) -> Subscription {
        let id = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.retain(|(id, _)| *id != subscription);
    }

    /// Swaps the content area view. Idempotent for the same handle;
    /// otherwise resets gesture state and closes the menu unanimated, so
    /// the incoming view starts from a resting panel.
    pub fn change_content_view(&mut self, view: AreaHandle, now: Instant) {
        if Rc::ptr_eq(&self.content, &view) {
            return;
        }
        self.close_menu(now, false);
        self.interpreter.reset();
        self.content = view;
    }

    pub fn change_menu_view(&mut self, view: AreaHandle) {
        if Rc::ptr_eq(&self.menu, &view) {
            return;
        }
        self.menu = view;
    }

    fn start_slide(&mut self, kind: SlideKind, to: f32, now: Instant) {
        match &mut self.slide {
            Some((active_kind, slide)) => {
                *active_kind = kind;
                slide.retarget(to, now);
            }
            None => self.slide = Some((kind, Slide::new(self.offset_x, to, now))),
        }
    }

    fn finish_open(&mut self) {
        let changed = !self.is_open;
        self.is_open = true;
        self.state = SlideState::Open;
        self.content_interaction_enabled = false;
        self.tap_to_close_attached = true;
        if changed {
            debug!("menu opened");
            self.notify(true);
        }
    }

    fn finish_close(&mut self) {
        let changed = self.is_open;
        self.is_open = false;
        self.state = SlideState::Closed;
        self.content_interaction_enabled = true;
        self.tap_to_close_attached = false;
        self.hide_shadow();
        self.hide_overlay();
        if changed {
            debug!("menu closed");
            self.notify(false);
        }
    }

    fn notify(&mut self, is_open: bool) {
        for (_, listener) in &mut self.listeners {
            listener(is_open);
        }
    }

    fn show_shadow(&mut self) {
        if !self.config.has_shadow() || self.shadow_shown {
            return;
        }
        self.shadow_shown = true;
    }

    fn hide_shadow(&mut self) {
        if !self.shadow_shown {
            return;
        }
        self.shadow_shown = false;
    }

    fn show_overlay(&mut self) {
        if !self.config.has_dark_overlay() || self.overlay_shown {
            return;
        }
        self.overlay_shown = true;
    }

    fn hide_overlay(&mut self) {
        if !self.overlay_shown {
            return;
        }
        self.overlay_shown = false;
    }
}
