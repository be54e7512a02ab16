//! Energy Field Viewer: desktop front end for `energy-core`.

pub mod app;
pub mod contour;
pub mod form;
pub mod labels;
pub mod slot;
pub mod viewer;
