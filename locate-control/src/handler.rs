//! Application hooks for location failures and positions outside of the map.

use crate::event::{LocationError, LocationEvent};
use crate::host::Notifier;
use crate::options::LocateStrings;

/// Hooks called by the control when something needs the application's attention.
///
/// Both methods have default implementations that show a blocking message through the host
/// [`Notifier`], so an implementation only needs to override what it wants to handle differently.
pub trait LocateHandler {
    /// Called for every location error that stops the control.
    ///
    /// Timeouts of a running watch after the first fix are not reported.
    fn location_error(&mut self, notifier: &mut dyn Notifier, error: &LocationError) {
        notifier.alert(&error.message);
    }

    /// Called instead of moving the view when the found position is outside of the map max bounds.
    ///
    /// This is called every time the view would be re-centered, so with follow mode on it can be
    /// called on every position update.
    fn outside_max_bounds(
        &mut self,
        notifier: &mut dyn Notifier,
        _event: &LocationEvent,
        strings: &LocateStrings,
    ) {
        notifier.alert(&strings.outside_map_bounds);
    }
}

/// Default handler: every notification is shown as an alert.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertHandler;

impl LocateHandler for AlertHandler {}
