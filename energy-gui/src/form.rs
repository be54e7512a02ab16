use eframe::egui;
use energy_core::{DEFAULT_GRAVITY, DEFAULT_MASS, DEFAULT_SPRING, ParameterText};

use crate::labels::Labels;

/// The three raw text inputs. Nothing is validated while typing.
#[derive(Debug, Clone)]
pub struct InputForm {
    pub mass: String,
    pub gravity: String,
    pub spring: String,
}

impl Default for InputForm {
    fn default() -> Self {
        InputForm {
            mass: DEFAULT_MASS.to_string(),
            gravity: DEFAULT_GRAVITY.to_string(),
            spring: DEFAULT_SPRING.to_string(),
        }
    }
}

impl InputForm {
    /// Current contents, read fresh on every request.
    pub fn text(&self) -> ParameterText<'_> {
        ParameterText::new(&self.mass, &self.gravity, &self.spring)
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, labels: &Labels) {
        egui::Grid::new("parameter_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (label, text) in [
                    (labels.mass, &mut self.mass),
                    (labels.gravity, &mut self.gravity),
                    (labels.spring, &mut self.spring),
                ] {
                    ui.label(label);
                    ui.add(egui::TextEdit::singleline(text).desired_width(120.0));
                    ui.end_row();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = InputForm::default();
        let t = form.text();
        assert_eq!((t.mass, t.gravity, t.spring), ("1", "9.81", "1"));
    }

    #[test]
    fn test_text_reflects_edits() {
        let mut form = InputForm::default();
        form.spring = "abc".into();
        assert!(form.text().parse().is_err());
    }
}
