//! Test fixtures.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::LocateError;
use crate::event::{LocationError, LocationEvent, MapEventName};
use crate::geo::{LatLon, LatLonBounds};
use crate::handler::LocateHandler;
use crate::host::{
    ButtonSpec, ButtonState, ControlChrome, LayerSurface, LocationSource, MapEvents, MapViewport,
    Notifier,
};
use crate::layer::LocationLayer;
use crate::options::{LocateStrings, LocationRequest};

/// Host that records every call made by the control.
#[derive(Debug)]
pub(crate) struct RecordingHost {
    pub(crate) view: LatLonBounds,
    pub(crate) max_bounds: Option<LatLonBounds>,
    pub(crate) fail_start: bool,

    pub(crate) locating: bool,
    pub(crate) start_requests: Vec<LocationRequest>,
    pub(crate) stop_calls: usize,
    pub(crate) fitted: Vec<LatLonBounds>,
    pub(crate) subscribed: Vec<MapEventName>,
    pub(crate) subscribe_calls: Vec<Vec<MapEventName>>,
    pub(crate) unsubscribe_calls: Vec<Vec<MapEventName>>,
    pub(crate) shown_layers: Vec<LocationLayer>,
    pub(crate) button: Option<ButtonSpec>,
    pub(crate) button_state: ButtonState,
    pub(crate) alerts: Vec<String>,
}

impl RecordingHost {
    /// View over London, no max bounds.
    pub(crate) fn new() -> Self {
        Self {
            view: LatLonBounds::new(LatLon::new(51.4, -0.3), LatLon::new(51.6, 0.1)),
            max_bounds: None,
            fail_start: false,
            locating: false,
            start_requests: vec![],
            stop_calls: 0,
            fitted: vec![],
            subscribed: vec![],
            subscribe_calls: vec![],
            unsubscribe_calls: vec![],
            shown_layers: vec![],
            button: None,
            button_state: ButtonState::Inactive,
            alerts: vec![],
        }
    }

    pub(crate) fn last_layer(&self) -> &LocationLayer {
        self.shown_layers
            .last()
            .expect("no layer was shown to the host")
    }
}

impl LocationSource for RecordingHost {
    fn start_locate(&mut self, request: &LocationRequest) -> Result<(), LocateError> {
        if self.fail_start {
            return Err(LocateError::Host("geolocation is not supported".into()));
        }

        self.locating = true;
        self.start_requests.push(request.clone());
        Ok(())
    }

    fn stop_locate(&mut self) {
        self.locating = false;
        self.stop_calls += 1;
    }
}

impl MapViewport for RecordingHost {
    fn view_bounds(&self) -> LatLonBounds {
        self.view
    }

    fn max_bounds(&self) -> Option<LatLonBounds> {
        self.max_bounds
    }

    fn fit_bounds(&mut self, bounds: &LatLonBounds) {
        self.view = *bounds;
        self.fitted.push(*bounds);
    }
}

impl MapEvents for RecordingHost {
    fn subscribe(&mut self, events: &[MapEventName]) {
        self.subscribed.extend_from_slice(events);
        self.subscribe_calls.push(events.to_vec());
    }

    fn unsubscribe(&mut self, events: &[MapEventName]) {
        self.subscribed.retain(|subscribed| !events.contains(subscribed));
        self.unsubscribe_calls.push(events.to_vec());
    }
}

impl LayerSurface for RecordingHost {
    fn show_layer(&mut self, layer: &LocationLayer) {
        self.shown_layers.push(layer.clone());
    }
}

impl ControlChrome for RecordingHost {
    fn mount_button(&mut self, spec: &ButtonSpec) {
        self.button_state = spec.state;
        self.button = Some(spec.clone());
    }

    fn set_button_state(&mut self, state: ButtonState) {
        self.button_state = state;
    }
}

impl Notifier for RecordingHost {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// What a [`RecordingHandler`] was called with.
#[derive(Debug, Default)]
pub(crate) struct HandlerCalls {
    pub(crate) errors: Vec<LocationError>,
    pub(crate) outside_bounds: Vec<LocationEvent>,
}

/// Handler that records its calls instead of alerting.
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingHandler {
    pub(crate) calls: Rc<RefCell<HandlerCalls>>,
}

impl LocateHandler for RecordingHandler {
    fn location_error(&mut self, _notifier: &mut dyn Notifier, error: &LocationError) {
        self.calls.borrow_mut().errors.push(error.clone());
    }

    fn outside_max_bounds(
        &mut self,
        _notifier: &mut dyn Notifier,
        event: &LocationEvent,
        _strings: &LocateStrings,
    ) {
        self.calls.borrow_mut().outside_bounds.push(event.clone());
    }
}

/// Fix in central London.
pub(crate) fn london_fix(accuracy: f64) -> LocationEvent {
    LocationEvent::from_accuracy(LatLon::new(51.505, -0.09), Some(accuracy))
}
