use equimap::{
    constants::DEFAULT_CONFIG_FILE,
    ui::{MapView, MapViewExt},
    MapImage, ViewerConfig,
};
use std::path::Path;

/// Standalone map viewer application
///
/// Usage: `equimap-app [CONFIG_PATH]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    equimap::init_logging();

    let config = load_config()?;
    let image = MapImage::load(&config.image_path).map_err(|e| {
        log::error!("error loading image {}: {}", config.image_path.display(), e);
        e
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.title.clone()),
        centered: true,
        ..Default::default()
    };

    let app_name = config.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Box::new(EquimapApp::new(cc, config, &image))),
    )?;

    log::info!("exiting");
    Ok(())
}

fn load_config() -> equimap::Result<ViewerConfig> {
    if let Some(path) = std::env::args().nth(1) {
        log::info!("using config {path}");
        return ViewerConfig::load(path);
    }

    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        log::info!("using config {DEFAULT_CONFIG_FILE}");
        return ViewerConfig::load(DEFAULT_CONFIG_FILE);
    }

    log::info!("no config file, using built-in defaults");
    Ok(ViewerConfig::default())
}

/// The main application struct
struct EquimapApp {
    view: MapView,
    show_status_bar: bool,
}

impl EquimapApp {
    fn new(cc: &eframe::CreationContext<'_>, config: ViewerConfig, image: &MapImage) -> Self {
        if config.dark_theme {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        let mut view = MapView::new(&cc.egui_ctx, image, config.target, config.scale_factor)
            .with_markers(config.pins);
        if let Err(e) = view.set_zoom_limits(config.min_scale, config.max_scale) {
            log::warn!("ignoring zoom limits: {e}");
        }

        Self {
            view,
            show_status_bar: true,
        }
    }
}

impl eframe::App for EquimapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::F1)) {
            self.show_status_bar = !self.show_status_bar;
        }

        if self.show_status_bar {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("Center: {}", self.view.visible_center()));
                    ui.separator();
                    ui.label(format!("Zoom: {:.2}x", self.view.viewport().scale));
                    if let Some(hovered) = self.view.hovered() {
                        ui.separator();
                        ui.label(format!("Cursor: {hovered}"));
                    }
                });
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                ui.map_view(&mut self.view);
            });
    }
}
