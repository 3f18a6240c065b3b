//! Gene Explorer: hypothyroidism gene search and expression visualization.

mod app;
mod charts;
mod content;
mod data;
mod error;
mod view;

use eframe::egui;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Gene Explorer",
        options,
        Box::new(|cc| Ok(Box::new(app::GeneExplorerApp::new(cc)))),
    )
}
