//! Walks the locate control through a short session against a host that only logs what it is
//! asked to do.
//!
//! Run with: RUST_LOG=debug cargo run --example simulated

use locate_control::event::LocationErrorCode;
use locate_control::host::{
    ButtonSpec, ButtonState, ControlChrome, LayerSurface, LocationSource, MapEvents, MapViewport,
    Notifier,
};
use locate_control::layer::LocationLayer;
use locate_control::{
    LatLon, LatLonBounds, LocateControl, LocateError, LocateOptions, LocationError,
    LocationEvent, LocationRequest, MapEventName,
};

struct LoggingHost {
    view: LatLonBounds,
}

impl LocationSource for LoggingHost {
    fn start_locate(&mut self, request: &LocationRequest) -> Result<(), LocateError> {
        log::info!("start locating: {request:?}");
        Ok(())
    }

    fn stop_locate(&mut self) {
        log::info!("stop locating");
    }
}

impl MapViewport for LoggingHost {
    fn view_bounds(&self) -> LatLonBounds {
        self.view
    }

    fn max_bounds(&self) -> Option<LatLonBounds> {
        None
    }

    fn fit_bounds(&mut self, bounds: &LatLonBounds) {
        log::info!("fit view to {bounds:?}");
        self.view = *bounds;
    }
}

impl MapEvents for LoggingHost {
    fn subscribe(&mut self, events: &[MapEventName]) {
        log::info!("subscribe to {events:?}");
    }

    fn unsubscribe(&mut self, events: &[MapEventName]) {
        log::info!("unsubscribe from {events:?}");
    }
}

impl LayerSurface for LoggingHost {
    fn show_layer(&mut self, layer: &LocationLayer) {
        match (layer.circle(), layer.marker()) {
            (_, None) => log::info!("layer cleared"),
            (circle, Some(marker)) => log::info!(
                "marker at {:?} ({}), circle radius {:?}",
                marker.position,
                marker.popup,
                circle.map(|c| c.radius)
            ),
        }
    }
}

impl ControlChrome for LoggingHost {
    fn mount_button(&mut self, spec: &ButtonSpec) {
        log::info!("button '{}' added at {:?}", spec.title, spec.position);
    }

    fn set_button_state(&mut self, state: ButtonState) {
        log::info!("button class: {}", state.class_name());
    }
}

impl Notifier for LoggingHost {
    fn alert(&mut self, message: &str) {
        log::warn!("ALERT: {message}");
    }
}

fn main() -> Result<(), LocateError> {
    env_logger::init();

    let mut host = LoggingHost {
        view: LatLonBounds::new(LatLon::new(48.8, 2.2), LatLon::new(48.9, 2.4)),
    };

    let options = LocateOptions::default()
        .with_follow(true)
        .with_stop_following_on_events([MapEventName::DRAG_START]);
    let mut control = LocateControl::new(options)?;
    control.add_to(&mut host);

    control.toggle(&mut host)?;

    let track = [
        (LatLon::new(51.5050, -0.0900), Some(40.0)),
        (LatLon::new(51.5050, -0.0900), Some(40.0)),
        (LatLon::new(51.5056, -0.0912), Some(15.0)),
        (LatLon::new(51.5061, -0.0925), None),
    ];
    for (position, accuracy) in track {
        control.handle_location_found(&mut host, LocationEvent::from_accuracy(position, accuracy));
        log::info!("state: {:?}", control.state());
    }

    control.handle_map_event(&mut host, &MapEventName::from(MapEventName::DRAG_START));
    log::info!("state after drag: {:?}", control.state());

    control.handle_location_error(
        &mut host,
        LocationError::new(LocationErrorCode::Timeout, "Timeout expired"),
    );
    log::info!("state after timeout: {:?}", control.state());

    control.handle_location_error(
        &mut host,
        LocationError::new(LocationErrorCode::PositionUnavailable, "Position unavailable"),
    );
    log::info!("state after error: {:?}", control.state());

    Ok(())
}
