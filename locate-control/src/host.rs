//! Interfaces the control needs from the map application hosting it.
//!
//! The control never calls the platform directly. Instead, the application implements these
//! traits (usually all on one type, see [`LocateHost`]) and forwards platform events to the
//! handler methods of [`LocateControl`](crate::LocateControl):
//!
//! * button clicks to [`toggle`](crate::LocateControl::toggle),
//! * location fixes to [`handle_location_found`](crate::LocateControl::handle_location_found),
//! * location failures to [`handle_location_error`](crate::LocateControl::handle_location_error),
//! * map events subscribed through [`MapEvents`] to
//!   [`handle_map_event`](crate::LocateControl::handle_map_event).

use crate::error::LocateError;
use crate::event::MapEventName;
use crate::geo::LatLonBounds;
use crate::layer::LocationLayer;
use crate::options::{ControlPosition, LocationRequest};

/// Source of location updates.
pub trait LocationSource {
    /// Starts delivering location events according to the request.
    fn start_locate(&mut self, request: &LocationRequest) -> Result<(), LocateError>;

    /// Stops delivering location events. Events already in flight may still arrive.
    fn stop_locate(&mut self);
}

/// Map view the control reads and moves.
pub trait MapViewport {
    /// Currently visible area.
    fn view_bounds(&self) -> LatLonBounds;

    /// Area the map view is restricted to, if any.
    fn max_bounds(&self) -> Option<LatLonBounds>;

    /// Changes the view so that the given area is visible.
    fn fit_bounds(&mut self, bounds: &LatLonBounds);
}

/// Named map events the control can listen to.
pub trait MapEvents {
    /// Starts forwarding the given events to the control.
    fn subscribe(&mut self, events: &[MapEventName]);

    /// Stops forwarding the given events to the control.
    fn unsubscribe(&mut self, events: &[MapEventName]);
}

/// Drawing surface for the control layer.
pub trait LayerSurface {
    /// Replaces whatever was drawn for the control before with the content of `layer`.
    fn show_layer(&mut self, layer: &LocationLayer);
}

/// Parameters of the control button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    /// Map corner.
    pub position: ControlPosition,
    /// Tooltip.
    pub title: String,
    /// Initial state.
    pub state: ButtonState,
}

/// Visual state of the control button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Not locating.
    #[default]
    Inactive,
    /// Waiting for the first fix.
    Requesting,
    /// Position is shown.
    Active,
    /// Position is shown and followed.
    Following,
}

impl ButtonState {
    /// CSS-like class list of the button in this state.
    pub fn class_name(&self) -> &'static str {
        match self {
            ButtonState::Inactive => "locate-control",
            ButtonState::Requesting => "locate-control requesting",
            ButtonState::Active => "locate-control active",
            ButtonState::Following => "locate-control active following",
        }
    }
}

/// Control panel of the map where the button lives.
pub trait ControlChrome {
    /// Creates the button.
    ///
    /// Clicks on the button must call [`LocateControl::toggle`](crate::LocateControl::toggle) and must
    /// not reach the map. Double clicks must not reach the map either, so they do not zoom it.
    fn mount_button(&mut self, spec: &ButtonSpec);

    /// Updates the look of the button.
    fn set_button_state(&mut self, state: ButtonState);
}

/// Shows messages to the user.
pub trait Notifier {
    /// Shows a message that the user has to acknowledge.
    fn alert(&mut self, message: &str);
}

/// Everything the control needs from the host.
pub trait LocateHost:
    LocationSource + MapViewport + MapEvents + LayerSurface + ControlChrome + Notifier
{
    /// Upcasts to the notifier, for the handler hooks.
    fn as_notifier(&mut self) -> &mut dyn Notifier;
}

impl<T> LocateHost for T
where
    T: LocationSource + MapViewport + MapEvents + LayerSurface + ControlChrome + Notifier,
{
    fn as_notifier(&mut self) -> &mut dyn Notifier {
        self
    }
}
