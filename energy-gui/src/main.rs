use energy_gui::labels::Locale;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([760.0, 860.0])
            .with_min_inner_size([480.0, 560.0])
            .with_title(Locale::default().labels().window_title),
        ..Default::default()
    };

    let result = eframe::run_native(
        "energy-field-viewer",
        options,
        Box::new(|cc| Ok(Box::new(energy_gui::app::EnergyFieldApp::new(cc)))),
    );
    log::info!("window closed");
    result
}
