//! Shapes drawn by the control.

use crate::geo::LatLon;
use crate::style::{MarkerStyle, PathStyle};

/// Circle with a radius in meters showing the accuracy of the position.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyCircle {
    /// Center of the circle.
    pub center: LatLon,
    /// Radius in meters.
    pub radius: f64,
    /// Style.
    pub style: PathStyle,
}

/// Small circle of a fixed pixel size at the position, with a popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionMarker {
    /// Position.
    pub position: LatLon,
    /// Style. Radius of the style is in pixels.
    pub style: MarkerStyle,
    /// Text shown when the marker is clicked.
    pub popup: String,
}

/// Group of shapes owned by the control. Holds at most one circle and one marker.
///
/// The group is handed to the host as a whole with
/// [`LayerSurface::show_layer`](crate::host::LayerSurface::show_layer) after every change, so the
/// host never sees a half-updated group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationLayer {
    circle: Option<AccuracyCircle>,
    marker: Option<PositionMarker>,
}

impl LocationLayer {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all shapes.
    pub fn clear(&mut self) {
        self.circle = None;
        self.marker = None;
    }

    /// Returns true if the layer has no shapes.
    pub fn is_empty(&self) -> bool {
        self.circle.is_none() && self.marker.is_none()
    }

    /// Accuracy circle, if drawn.
    pub fn circle(&self) -> Option<&AccuracyCircle> {
        self.circle.as_ref()
    }

    /// Position marker, if drawn.
    pub fn marker(&self) -> Option<&PositionMarker> {
        self.marker.as_ref()
    }

    pub(crate) fn set_circle(&mut self, circle: AccuracyCircle) {
        self.circle = Some(circle);
    }

    pub(crate) fn set_marker(&mut self, marker: PositionMarker) {
        self.marker = Some(marker);
    }
}
