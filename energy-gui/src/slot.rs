/// Holds at most one drawable. Replacement drops the old one before the
/// new one is built, so two are never alive together.
#[derive(Debug)]
pub struct PlotSlot<P> {
    current: Option<P>,
    generation: u64,
}

impl<P> Default for PlotSlot<P> {
    fn default() -> Self {
        PlotSlot {
            current: None,
            generation: 0,
        }
    }
}

impl<P> PlotSlot<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Release the current drawable, then build and store a new one.
    pub fn rebuild(&mut self, build: impl FnOnce() -> P) -> &P {
        self.release();
        self.generation += 1;
        self.current.insert(build())
    }

    /// Drop the current drawable, if any. Returns whether one was held.
    pub fn release(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn get(&self) -> Option<&P> {
        self.current.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    /// Number of drawables built so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
