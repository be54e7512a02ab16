use energy_core::{Field, Grid, Parameters, ValidationError, compute_field};

use crate::form::InputForm;
use crate::slot::PlotSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Plotted,
    Terminated,
}

/// Form, grid and plot slot for one window. Independent of egui so the
/// request/replace/shutdown flow can run without a display; `P` is the
/// drawable the front end builds from a [`Field`].
pub struct Viewer<P> {
    pub form: InputForm,
    grid: Grid,
    slot: PlotSlot<P>,
    error: Option<ValidationError>,
    plotted: Option<Parameters>,
    terminated: bool,
}

impl<P> Default for Viewer<P> {
    fn default() -> Self {
        Viewer::new(Grid::standard())
    }
}

impl<P> Viewer<P> {
    pub fn new(grid: Grid) -> Self {
        Viewer {
            form: InputForm::default(),
            grid,
            slot: PlotSlot::new(),
            error: None,
            plotted: None,
            terminated: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.terminated {
            Phase::Terminated
        } else if self.slot.is_occupied() {
            Phase::Plotted
        } else {
            Phase::Idle
        }
    }

    /// Validate, compute, and replace the drawable in one pass. On a
    /// validation error the current drawable stays and the error is kept
    /// for the front end to show.
    pub fn request_plot(&mut self, build: impl FnOnce(&Field) -> P) -> Result<(), ValidationError> {
        if self.terminated {
            return Ok(());
        }

        let field = match compute_field(&self.grid, &self.form.text()) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("plot request rejected: {e}");
                self.error = Some(e.clone());
                return Err(e);
            }
        };

        let replaced = self.slot.is_occupied();
        self.slot.rebuild(|| build(&field));
        self.plotted = Some(field.parameters());
        self.error = None;

        log::info!(
            "plotted m={} g={} k={} (range [{:.3}, {:.3}]){}",
            field.parameters().mass,
            field.parameters().gravity,
            field.parameters().spring,
            field.min(),
            field.max(),
            if replaced { ", previous plot replaced" } else { "" }
        );
        Ok(())
    }

    /// Release the drawable ahead of the window going away.
    pub fn shutdown(&mut self) {
        if self.terminated {
            return;
        }
        if self.slot.release() {
            log::info!("plot released before window teardown");
        }
        self.terminated = true;
    }

    pub fn plot(&self) -> Option<&P> {
        self.slot.get()
    }

    pub fn plot_generation(&self) -> u64 {
        self.slot.generation()
    }

    pub fn plotted_parameters(&self) -> Option<Parameters> {
        self.plotted
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in drawable that counts how many are alive.
    struct FakePlot {
        alive: Rc<Cell<i32>>,
        max: f64,
    }

    impl Drop for FakePlot {
        fn drop(&mut self) {
            self.alive.set(self.alive.get() - 1);
        }
    }

    fn builder(alive: &Rc<Cell<i32>>) -> impl FnOnce(&Field) -> FakePlot + use<> {
        let alive = alive.clone();
        move |field| {
            alive.set(alive.get() + 1);
            FakePlot {
                alive: alive.clone(),
                max: field.max(),
            }
        }
    }

    #[test]
    fn test_starts_idle() {
        let v: Viewer<FakePlot> = Viewer::default();
        assert_eq!(v.phase(), Phase::Idle);
        assert!(v.plot().is_none());
    }

    #[test]
    fn test_valid_request_plots() {
        let alive = Rc::new(Cell::new(0));
        let mut v = Viewer::default();
        v.request_plot(builder(&alive)).unwrap();

        assert_eq!(v.phase(), Phase::Plotted);
        assert_eq!(alive.get(), 1);
        assert_eq!(v.plotted_parameters(), Some(Parameters::new(1.0, 9.81, 1.0)));
    }

    #[test]
    fn test_plotting_twice_keeps_one_drawable() {
        let alive = Rc::new(Cell::new(0));
        let mut v = Viewer::default();
        v.request_plot(builder(&alive)).unwrap();
        v.form.mass = "2".into();
        v.request_plot(builder(&alive)).unwrap();

        assert_eq!(alive.get(), 1);
        assert_eq!(v.plot_generation(), 2);
        assert_eq!(v.phase(), Phase::Plotted);
        assert_eq!(v.plotted_parameters().map(|p| p.mass), Some(2.0));
    }

    #[test]
    fn test_invalid_input_never_builds() {
        let alive = Rc::new(Cell::new(0));
        let mut v: Viewer<FakePlot> = Viewer::default();
        v.form.gravity = "abc".into();

        let built = Cell::new(false);
        let err = v
            .request_plot(|_| {
                built.set(true);
                unreachable!()
            })
            .unwrap_err();

        assert!(!built.get());
        assert_eq!(v.phase(), Phase::Idle);
        assert_eq!(v.error(), Some(&err));
        assert_eq!(alive.get(), 0);
    }

    #[test]
    fn test_invalid_input_after_plot_keeps_old_plot() {
        let alive = Rc::new(Cell::new(0));
        let mut v = Viewer::default();
        v.request_plot(builder(&alive)).unwrap();
        let before = v.plot().map(|p| p.max);

        v.form.spring = "abc".into();
        assert!(v.request_plot(builder(&alive)).is_err());

        assert_eq!(v.phase(), Phase::Plotted);
        assert_eq!(v.plot().map(|p| p.max), before);
        assert_eq!(v.plot_generation(), 1);
        assert_eq!(alive.get(), 1);
        assert!(v.error().is_some());
    }

    #[test]
    fn test_overflowing_input_is_rejected_like_bad_text() {
        let mut v: Viewer<FakePlot> = Viewer::default();
        v.form.mass = "1e308".into();
        v.form.gravity = "10".into();

        let err = v.request_plot(|_| unreachable!()).unwrap_err();
        assert!(matches!(err, ValidationError::Overflow { .. }));
        assert_eq!(v.phase(), Phase::Idle);
        assert!(v.error().is_some());
    }

    #[test]
    fn test_successful_plot_clears_error() {
        let alive = Rc::new(Cell::new(0));
        let mut v = Viewer::default();
        v.form.mass = "abc".into();
        assert!(v.request_plot(builder(&alive)).is_err());

        v.form.mass = "1".into();
        v.request_plot(builder(&alive)).unwrap();
        assert!(v.error().is_none());
    }

    #[test]
    fn test_dismiss_error() {
        let mut v: Viewer<FakePlot> = Viewer::default();
        v.form.mass = "abc".into();
        let _ = v.request_plot(|_| unreachable!());
        v.dismiss_error();
        assert!(v.error().is_none());
    }

    #[test]
    fn test_shutdown_after_plot_releases_drawable() {
        let alive = Rc::new(Cell::new(0));
        let mut v = Viewer::default();
        v.request_plot(builder(&alive)).unwrap();

        v.shutdown();
        assert_eq!(alive.get(), 0);
        assert_eq!(v.phase(), Phase::Terminated);

        // idempotent, and no further plotting
        v.shutdown();
        v.request_plot(builder(&alive)).unwrap();
        assert_eq!(alive.get(), 0);
        assert_eq!(v.phase(), Phase::Terminated);
    }
}
