//! Filled-contour drawable: the banded field as a texture inside an
//! egui_plot, plus a colour bar.

use eframe::egui;
use egui_plot::{Plot, PlotImage, PlotPoint};
use energy_core::{CONTOUR_LEVELS, ContourLevels, Field, band_color, rasterize};

use crate::labels::Labels;

/// Texture resolution; finer than the grid so band edges follow the
/// interpolated field instead of grid cells.
const RASTER_SIZE: usize = 400;
const COLORBAR_WIDTH: f32 = 18.0;
const COLORBAR_GUTTER: f32 = 110.0;
const COLORBAR_TICKS: usize = 6;

pub struct ContourPlot {
    texture: egui::TextureHandle,
    levels: ContourLevels,
    half_width: f64,
}

impl ContourPlot {
    /// Uploads a new texture. Dropping the plot frees it.
    pub fn new(ctx: &egui::Context, field: &Field) -> ContourPlot {
        let levels = ContourLevels::for_field(field, CONTOUR_LEVELS);
        let pixels = rasterize(field, &levels, RASTER_SIZE, RASTER_SIZE);
        let rgba: Vec<u8> = pixels.iter().flatten().copied().collect();
        let image = egui::ColorImage::from_rgba_unmultiplied([RASTER_SIZE, RASTER_SIZE], &rgba);
        let texture = ctx.load_texture("energy-field", image, egui::TextureOptions::NEAREST);

        ContourPlot {
            texture,
            levels,
            half_width: field.half_width(),
        }
    }

    pub fn bands(&self) -> usize {
        self.levels.bands()
    }

    pub fn show(&self, ui: &mut egui::Ui, labels: &Labels) {
        ui.vertical_centered(|ui| {
            ui.heading(labels.plot_title);
        });

        let avail = ui.available_size();
        let plot_w = (avail.x - COLORBAR_GUTTER).max(100.0);
        let plot_h = avail.y.max(100.0);
        let extent = 2.0 * self.half_width as f32;

        ui.horizontal(|ui| {
            Plot::new("energy_field")
                .width(plot_w)
                .height(plot_h)
                .data_aspect(1.0)
                .x_axis_label("x")
                .y_axis_label("y")
                .include_x(-self.half_width)
                .include_x(self.half_width)
                .include_y(-self.half_width)
                .include_y(self.half_width)
                .show_grid([false, false])
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.image(PlotImage::new(
                        self.texture.id(),
                        PlotPoint::new(0.0, 0.0),
                        [extent, extent],
                    ));
                });

            self.colorbar(ui, plot_h, labels);
        });
    }

    fn colorbar(&self, ui: &mut egui::Ui, height: f32, labels: &Labels) {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(COLORBAR_GUTTER - 10.0, height), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let text_color = ui.visuals().text_color();
        let font = egui::FontId::proportional(11.0);

        let title = painter.layout(labels.colorbar.to_string(), font.clone(), text_color, rect.width());
        let title_h = title.size().y;
        painter.galley(rect.left_top(), title, text_color);

        let bar = egui::Rect::from_min_max(
            egui::pos2(rect.left() + 4.0, rect.top() + title_h + 12.0),
            egui::pos2(rect.left() + 4.0 + COLORBAR_WIDTH, rect.bottom() - 24.0),
        );
        let bands = self.levels.bands();
        let band_h = bar.height() / bands as f32;

        // band 0 at the bottom
        for b in 0..bands {
            let bottom = bar.bottom() - b as f32 * band_h;
            let r = egui::Rect::from_min_max(egui::pos2(bar.left(), bottom - band_h), egui::pos2(bar.right(), bottom));
            let [cr, cg, cb] = band_color(b, bands);
            painter.rect_filled(r, 0.0, egui::Color32::from_rgb(cr, cg, cb));
        }
        painter.rect_stroke(bar, 0.0, egui::Stroke::new(1.0, text_color));

        let (lo, hi) = (self.levels.lo(), self.levels.hi());
        for i in 0..COLORBAR_TICKS {
            let t = i as f32 / (COLORBAR_TICKS - 1) as f32;
            let y = bar.bottom() - t * bar.height();
            let value = lo + (hi - lo) * t as f64;
            painter.line_segment(
                [egui::pos2(bar.right(), y), egui::pos2(bar.right() + 4.0, y)],
                egui::Stroke::new(1.0, text_color),
            );
            painter.text(
                egui::pos2(bar.right() + 6.0, y),
                egui::Align2::LEFT_CENTER,
                format!("{value:.2}"),
                font.clone(),
                text_color,
            );
        }
    }
}
