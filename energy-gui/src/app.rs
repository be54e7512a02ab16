//! eframe application: parameter panel on top, contour plot below.

use eframe::egui;

use crate::contour::ContourPlot;
use crate::labels::{Labels, Locale};
use crate::viewer::{Phase, Viewer};

pub struct EnergyFieldApp {
    viewer: Viewer<ContourPlot>,
    locale: Locale,
}

impl EnergyFieldApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        EnergyFieldApp {
            viewer: Viewer::default(),
            locale: Locale::default(),
        }
    }

    fn plot(&mut self, ctx: &egui::Context) {
        // rejected input is kept on the viewer and shown by error_window
        if self.viewer.request_plot(|field| ContourPlot::new(ctx, field)).is_ok() {
            ctx.request_repaint();
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let labels = self.locale.labels();

        ui.horizontal(|ui| {
            ui.label(labels.language);
            let before = self.locale;
            egui::ComboBox::from_id_salt("locale")
                .selected_text(self.locale.name())
                .show_ui(ui, |ui| {
                    for locale in Locale::ALL {
                        ui.selectable_value(&mut self.locale, locale, locale.name());
                    }
                });
            if self.locale != before {
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                    self.locale.labels().window_title.to_string(),
                ));
            }
        });

        ui.add_space(6.0);
        self.viewer.form.ui(ui, labels);
        ui.add_space(10.0);

        if ui.button(labels.plot_button).clicked() {
            self.plot(ctx);
        }

        if let Some(p) = self.viewer.plotted_parameters() {
            ui.weak(format!("m = {}, g = {}, k = {}", p.mass, p.gravity, p.spring));
        }
    }

    fn error_window(&mut self, ctx: &egui::Context, labels: &Labels) {
        let Some(err) = self.viewer.error() else {
            return;
        };
        let detail = err.to_string();
        let mut dismissed = false;

        egui::Window::new(labels.error_title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(labels.error_message);
                ui.weak(detail);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button(labels.ok).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.viewer.dismiss_error();
        }
    }
}

impl eframe::App for EnergyFieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.viewer.shutdown();
            return;
        }
        if self.viewer.phase() == Phase::Terminated {
            return;
        }

        let labels = self.locale.labels();
        let blocked = self.viewer.error().is_some();

        egui::TopBottomPanel::top("parameters").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.add_enabled_ui(!blocked, |ui| self.controls(ui, ctx));
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.viewer.plot() {
            Some(plot) => plot.show(ui, labels),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.weak(labels.empty_plot);
                });
            }
        });

        self.error_window(ctx, labels);
    }
}
