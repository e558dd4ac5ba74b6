//! A map control that shows the user's position and can keep the map view on it.
//!
//! The control adds a button to the map. When the button is pressed, the control starts watching
//! the location provided by the platform, draws a marker at the position together with a circle
//! showing its accuracy, and fits the map view to the position. In follow mode the view keeps
//! moving with every position update until one of the configured map events (for example
//! `dragstart`) is fired. Pressing the button again while the position is in view stops locating.
//!
//! # Usage
//!
//! The control does not talk to a map engine or to the platform directly. The application
//! implements the traits from the [`host`] module and forwards platform events to the control:
//!
//! ```ignore
//! use locate_control::{LocateControl, LocateOptions, LatLon, LocationEvent};
//!
//! let options = LocateOptions::default()
//!     .with_follow(true)
//!     .with_stop_following_on_events(["dragstart"]);
//! let mut control = LocateControl::new(options)?;
//! control.add_to(&mut host);
//!
//! // The button was clicked
//! control.toggle(&mut host)?;
//!
//! // The platform reported a position
//! control.handle_location_found(
//!     &mut host,
//!     LocationEvent::from_accuracy(LatLon::new(51.505, -0.09), Some(25.0)),
//! );
//! ```
//!
//! # Main components
//!
//! * [`LocateControl`] is the state machine. It owns its [`RuntimeState`] and the
//!   [`LocationLayer`] with the shapes it draws.
//! * [`LocateOptions`] configure it. Options are validated and follow-mode styles are resolved
//!   once, when the control is created.
//! * [`LocateHandler`] receives location errors and positions outside of the map max bounds. The
//!   default [`AlertHandler`] shows them to the user through [`host::Notifier`].

mod color;
mod control;
pub mod error;
pub mod event;
pub mod geo;
pub mod handler;
pub mod host;
pub mod layer;
pub mod options;
pub mod style;
pub mod units;

#[cfg(test)]
pub(crate) mod tests;

pub use color::Color;
pub use control::{LocateControl, LocateState, RuntimeState};
pub use error::LocateError;
pub use event::{LocationError, LocationErrorCode, LocationEvent, MapEventName};
pub use geo::{LatLon, LatLonBounds};
pub use handler::{AlertHandler, LocateHandler};
pub use host::LocateHost;
pub use layer::LocationLayer;
pub use options::{ControlPosition, LocateOptions, LocateStrings, LocationRequest};
pub use units::UnitSystem;

/// Creates a locate control with the given options.
pub fn locate_control(options: LocateOptions) -> Result<LocateControl, LocateError> {
    LocateControl::new(options)
}

/// Creates a locate control and adds it to the map, if `enabled` is true.
///
/// This is meant for applications that let the map configuration decide whether the map gets a
/// locate control. Nothing is added to a map unless this function is called.
pub fn attach_locate_control<H: LocateHost>(
    host: &mut H,
    enabled: bool,
    options: LocateOptions,
) -> Result<Option<LocateControl>, LocateError> {
    if !enabled {
        return Ok(None);
    }

    let mut control = LocateControl::new(options)?;
    control.add_to(host);

    Ok(Some(control))
}

#[cfg(test)]
mod factory_tests {
    use super::*;
    use crate::tests::RecordingHost;

    #[test]
    fn attach_disabled_adds_nothing() {
        let mut host = RecordingHost::new();
        let control = attach_locate_control(&mut host, false, LocateOptions::default())
            .expect("valid options");

        assert!(control.is_none());
        assert!(host.button.is_none());
    }

    #[test]
    fn attach_enabled_mounts_button() {
        let mut host = RecordingHost::new();
        let control = attach_locate_control(&mut host, true, LocateOptions::default())
            .expect("valid options")
            .expect("control is created");

        assert!(host.button.is_some());
        assert_eq!(control.state(), LocateState::Idle);
    }
}
