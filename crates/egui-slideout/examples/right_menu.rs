use egui_slideout::{area, Sidebar, SidebarConfig, SidebarView};
use std::time::Instant;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

pub struct App {
    sidebar: Sidebar,
}

impl App {
    pub fn new() -> Self {
        let content = area(|ui: &mut egui::Ui| {
            ui.heading("Inbox");
            ui.separator();
            for n in 1..=10 {
                ui.label(format!("Message {n}"));
            }
            ui.label("Drag from the right edge to reveal the menu.");
        });
        let menu = area(|ui: &mut egui::Ui| {
            ui.heading("Filters");
            ui.separator();
            for item in ["Unread", "Starred", "Archive", "Trash"] {
                let _ = ui.button(item);
            }
        });

        let mut config = SidebarConfig::default();
        config.set_menu_width(220.0).expect("valid width");
        config.set_fling_fraction(0.4).expect("valid fraction");
        config.set_has_dark_overlay(true);

        let mut sidebar = Sidebar::with_config(content, menu, config);
        sidebar.subscribe(|open| tracing::info!(open, "sidebar state changed"));

        Self { sidebar }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Toggle menu").clicked() {
                    self.sidebar.toggle_menu(Instant::now());
                }
                let mut disabled = self.sidebar.config().disabled();
                if ui.checkbox(&mut disabled, "disabled").changed() {
                    self.sidebar.set_disabled(disabled);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let sidebar_view = SidebarView::new(ui, &mut self.sidebar);
            ui.add(sidebar_view);
        });
    }
}

fn init_log() {
    let env_filter = EnvFilter::new("egui_slideout=debug");
    let formatting_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .init();
}

fn main() -> eframe::Result {
    init_log();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "right_menu_example",
        native_options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )
}
