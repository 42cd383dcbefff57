use egui_slideout::{area, MenuLocation, Sidebar, SidebarView};
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
            ui.heading("Content");
            ui.label("Drag from the left edge, or use the toggle button above.");
        });
        let menu = area(|ui: &mut egui::Ui| {
            ui.heading("Menu");
            ui.separator();
            for item in ["Home", "Profile", "Settings", "About"] {
                let _ = ui.button(item);
            }
        });

        let mut sidebar = Sidebar::new(content, menu);
        sidebar.config_mut().set_menu_location(MenuLocation::Left);
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
                ui.label(format!("open: {}", self.sidebar.is_open()));
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
        "basic_example",
        native_options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )
}
