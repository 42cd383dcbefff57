use crate::config::MenuLocation;
use crate::gesture::{DragEvent, DragPhase};
use crate::geometry;
use crate::sidebar::Sidebar;
use egui::{
    Color32, Context, Id, Pos2, Rect, Response, Sense, Ui, UiBuilder, Vec2, Widget,
};
use std::time::Instant;

/// Per-widget state persisted between frames.
#[derive(Clone, Default)]
pub struct SidebarViewState {
    pub dragging: bool,
    pub drag_start_x: f32,
    pub drag_translation: f32,
    pub last_width: f32,
}

impl SidebarViewState {
    pub fn load(ctx: &Context, id: Id) -> Self {
        ctx.data_mut(|d| d.get_temp::<Self>(id).unwrap_or_default())
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }

    pub fn remove(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.remove_temp::<Self>(id));
    }
}

/// Renders a [`Sidebar`]: the menu anchored to its edge, the content area
/// shifted by the current offset, and the shadow/overlay decorations.
/// Pointer input over the edge-activation strip (or the whole content
/// area while open) is translated into drag events for the sidebar.
pub struct SidebarView<'a> {
    widget_id: Id,
    sidebar: &'a mut Sidebar,
    size: Vec2,
}

impl<'a> SidebarView<'a> {
    pub fn new(ui: &mut Ui, sidebar: &'a mut Sidebar) -> Self {
        let widget_id = ui.make_persistent_id("egui_slideout");
        Self {
            widget_id,
            sidebar,
            size: ui.available_size(),
        }
    }

    pub fn id(&self) -> Id {
        self.widget_id
    }

    #[inline]
    pub fn set_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    // The region that catches pans: the edge strip while closed, the whole
    // content area while open (content interaction is disabled then).
    fn drag_rect(&self, rect: Rect) -> Rect {
        let config = self.sidebar.config();
        let content_rect = rect.translate(Vec2::new(self.sidebar.offset(), 0.0));
        if self.sidebar.is_open() {
            return content_rect;
        }
        let strip = config.gesture_active_area().min(rect.width());
        match config.menu_location() {
            MenuLocation::Left => Rect::from_min_size(
                content_rect.min,
                Vec2::new(strip, content_rect.height()),
            ),
            MenuLocation::Right => Rect::from_min_size(
                Pos2::new(content_rect.max.x - strip, content_rect.min.y),
                Vec2::new(strip, content_rect.height()),
            ),
        }
    }

    fn process_input(&mut self, state: &mut SidebarViewState, rect: Rect, ui: &mut Ui, now: Instant) {
        if self.sidebar.config().disabled() {
            return;
        }
        let drag_id = self.widget_id.with("drag");
        let response = ui.interact(self.drag_rect(rect), drag_id, Sense::click_and_drag());

        if response.drag_started() {
            let start_x = response
                .interact_pointer_pos()
                .map_or(0.0, |pos| pos.x - rect.min.x);
            state.dragging = true;
            state.drag_start_x = start_x;
            state.drag_translation = 0.0;
            self.sidebar.handle_drag(
                &DragEvent {
                    phase: DragPhase::Began,
                    start_x,
                    translation_x: 0.0,
                    velocity_x: 0.0,
                },
                rect.width(),
                now,
            );
        } else if response.dragged() && state.dragging {
            state.drag_translation += response.drag_delta().x;
            self.sidebar.handle_drag(
                &DragEvent {
                    phase: DragPhase::Changed,
                    start_x: state.drag_start_x,
                    translation_x: state.drag_translation,
                    velocity_x: 0.0,
                },
                rect.width(),
                now,
            );
        } else if response.drag_stopped() && state.dragging {
            state.drag_translation += response.drag_delta().x;
            let velocity_x = ui.input(|input| input.pointer.velocity()).x;
            self.sidebar.handle_drag(
                &DragEvent {
                    phase: DragPhase::Ended,
                    start_x: state.drag_start_x,
                    translation_x: state.drag_translation,
                    velocity_x,
                },
                rect.width(),
                now,
            );
            state.dragging = false;
            state.drag_translation = 0.0;
        }

        if self.sidebar.tap_to_close_attached() && response.clicked() {
            self.sidebar.close_menu(now, true);
        }
    }

    fn menu_rect(&self, rect: Rect) -> Rect {
        let menu_width = self.sidebar.config().menu_width().min(rect.width());
        match self.sidebar.config().menu_location() {
            MenuLocation::Left => {
                Rect::from_min_size(rect.min, Vec2::new(menu_width, rect.height()))
            }
            MenuLocation::Right => Rect::from_min_size(
                Pos2::new(rect.max.x - menu_width, rect.min.y),
                Vec2::new(menu_width, rect.height()),
            ),
        }
    }

    fn paint_shadow(&self, ui: &Ui, content_rect: Rect, progress: f32) {
        const SHADOW_WIDTH: f32 = 12.0;
        const STRIPS: usize = 4;
        let strip_width = SHADOW_WIDTH / STRIPS as f32;
        let max_alpha = 0.5 * progress;
        for strip in 0..STRIPS {
            // fade out toward the menu
            let alpha = max_alpha * (1.0 - strip as f32 / STRIPS as f32);
            let inset = strip as f32 * strip_width;
            let strip_rect = match self.sidebar.config().menu_location() {
                MenuLocation::Left => Rect::from_min_size(
                    Pos2::new(content_rect.min.x - inset - strip_width, content_rect.min.y),
                    Vec2::new(strip_width, content_rect.height()),
                ),
                MenuLocation::Right => Rect::from_min_size(
                    Pos2::new(content_rect.max.x + inset, content_rect.min.y),
                    Vec2::new(strip_width, content_rect.height()),
                ),
            };
            ui.painter().rect_filled(
                strip_rect,
                0.0,
                Color32::from_black_alpha((alpha * 255.0) as u8),
            );
        }
    }
}

impl Widget for SidebarView<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let widget_id = self.widget_id;
        let mut state = SidebarViewState::load(ui.ctx(), widget_id);
        let now = Instant::now();

        let (rect, layout) = ui.allocate_exact_size(self.size, Sense::hover());

        // a width change is the closest egui gets to a device rotation
        if state.last_width != 0.0 && state.last_width != rect.width() {
            self.sidebar.rotation_began(now);
            self.sidebar.rotation_ended(now);
        }
        state.last_width = rect.width();

        self.process_input(&mut state, rect, ui, now);

        let offset = self.sidebar.tick(now);
        let config = self.sidebar.config();
        let progress = geometry::reveal_progress(offset, config.menu_width());
        let overlay_alpha = config.dark_overlay_alpha();

        if progress > 0.0 {
            let menu_rect = self.menu_rect(rect);
            let mut menu_ui = ui.new_child(UiBuilder::new().max_rect(menu_rect));
            self.sidebar.menu().borrow_mut().ui(&mut menu_ui);
        }

        if self.sidebar.shadow_visible() && progress > 0.0 {
            let content_rect = rect.translate(Vec2::new(offset, 0.0));
            self.paint_shadow(ui, content_rect, progress);
        }

        let content_rect = rect.translate(Vec2::new(offset, 0.0));
        // opaque backdrop so the menu never shows through the content
        ui.painter()
            .rect_filled(content_rect, 0.0, ui.visuals().panel_fill);
        let mut content_ui = ui.new_child(UiBuilder::new().max_rect(content_rect));
        if !self.sidebar.content_interaction_enabled() {
            content_ui.disable();
        }
        self.sidebar.content().borrow_mut().ui(&mut content_ui);

        if self.sidebar.overlay_visible() && progress > 0.0 {
            ui.painter().rect_filled(
                content_rect,
                0.0,
                Color32::from_black_alpha((overlay_alpha * progress * 255.0) as u8),
            );
        }

        if self.sidebar.is_animating() {
            ui.ctx().request_repaint();
        }

        state.store(ui.ctx(), widget_id);
        layout
    }
}
