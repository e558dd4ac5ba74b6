//! The locate control state machine.

use std::fmt;

use crate::error::LocateError;
use crate::event::{LocationError, LocationEvent, MapEventName};
use crate::handler::{AlertHandler, LocateHandler};
use crate::host::{ButtonSpec, ButtonState, LocateHost};
use crate::layer::{AccuracyCircle, LocationLayer, PositionMarker};
use crate::options::{LocateOptions, LocationRequest};
use crate::style::ResolvedStyles;

/// Phase of the control lifecycle, derived from its [`RuntimeState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateState {
    /// Not locating.
    Idle,
    /// Locating, no fix received yet.
    Requesting,
    /// Position is shown.
    Active,
    /// Position is shown and the view follows it.
    Following,
}

/// Mutable state of the control. Reset to [`Default`] every time the control stops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuntimeState {
    active: bool,
    following: bool,
    location_found: bool,
    pending_recenter: bool,
    last_event: Option<LocationEvent>,
    current_cancel_events: Option<Vec<MapEventName>>,
}

impl RuntimeState {
    /// Locating is requested.
    pub fn active(&self) -> bool {
        self.active
    }

    /// The view follows position updates.
    pub fn following(&self) -> bool {
        self.following
    }

    /// At least one fix was received since the control was started.
    pub fn location_found(&self) -> bool {
        self.location_found
    }

    /// The view will be fitted to the position on the next render.
    pub fn pending_recenter(&self) -> bool {
        self.pending_recenter
    }

    /// Last received fix.
    pub fn last_event(&self) -> Option<&LocationEvent> {
        self.last_event.as_ref()
    }

    /// Map events currently subscribed to stop following.
    pub fn current_cancel_events(&self) -> Option<&[MapEventName]> {
        self.current_cancel_events.as_deref()
    }
}

/// Map control showing the user's position.
///
/// The control is driven by the host: see [`host`](crate::host) for which events must be
/// forwarded to which method. All methods run to completion and take the host by mutable
/// reference, so there is no shared state between the control and the host.
pub struct LocateControl {
    options: LocateOptions,
    styles: ResolvedStyles,
    request: LocationRequest,
    handler: Box<dyn LocateHandler>,
    state: RuntimeState,
    layer: LocationLayer,
}

impl fmt::Debug for LocateControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocateControl")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("layer", &self.layer)
            .finish_non_exhaustive()
    }
}

impl LocateControl {
    /// Creates a control that reports problems with alerts.
    pub fn new(options: LocateOptions) -> Result<Self, LocateError> {
        Self::with_handler(options, AlertHandler)
    }

    /// Creates a control with custom hooks for errors and out-of-bounds positions.
    ///
    /// Fails if the styles or the popup template in the options are invalid.
    pub fn with_handler(
        options: LocateOptions,
        handler: impl LocateHandler + 'static,
    ) -> Result<Self, LocateError> {
        let styles = ResolvedStyles::resolve(
            options.circle_style,
            &options.follow_circle_style,
            options.marker_style,
            &options.follow_marker_style,
        )?;
        options
            .strings
            .format_popup(&options.units.distance(0.0))?;

        let request = options.locate_options.effective();

        Ok(Self {
            options,
            styles,
            request,
            handler: Box::new(handler),
            state: RuntimeState::default(),
            layer: LocationLayer::new(),
        })
    }

    /// Options the control was created with.
    pub fn options(&self) -> &LocateOptions {
        &self.options
    }

    /// Styles with the following variants merged in.
    pub fn styles(&self) -> &ResolvedStyles {
        &self.styles
    }

    /// Request sent to the location source.
    pub fn location_request(&self) -> &LocationRequest {
        &self.request
    }

    /// Current runtime state.
    pub fn runtime(&self) -> &RuntimeState {
        &self.state
    }

    /// Current lifecycle phase.
    pub fn state(&self) -> LocateState {
        let state = &self.state;
        if !state.active {
            LocateState::Idle
        } else if state.last_event.is_none() {
            LocateState::Requesting
        } else if state.following {
            LocateState::Following
        } else {
            LocateState::Active
        }
    }

    /// Locating is requested.
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// The view follows the position.
    pub fn is_following(&self) -> bool {
        self.state.following
    }

    /// At least one fix was received since the control was started.
    pub fn is_location_found(&self) -> bool {
        self.state.location_found
    }

    /// Last received fix.
    pub fn last_event(&self) -> Option<&LocationEvent> {
        self.state.last_event.as_ref()
    }

    /// Shapes currently drawn by the control.
    pub fn layer(&self) -> &LocationLayer {
        &self.layer
    }

    /// Replaces the set of map events that stop following.
    ///
    /// If the control is following, the subscriptions are updated on the next render.
    pub fn set_stop_following_on_events(&mut self, events: Option<Vec<MapEventName>>) {
        self.options.stop_following_on_events = events;
    }

    /// Mounts the button and the layer. Starts locating if `tracking_on_start` is set.
    ///
    /// Failure to start locating is logged and otherwise ignored.
    pub fn add_to<H: LocateHost>(&mut self, host: &mut H) {
        host.mount_button(&ButtonSpec {
            position: self.options.position,
            title: self.options.strings.title.clone(),
            state: ButtonState::Inactive,
        });

        self.layer.clear();
        host.show_layer(&self.layer);

        if self.options.tracking_on_start {
            if let Err(err) = self.toggle(host) {
                log::warn!("Failed to start tracking on start: {err}");
            }
        }
    }

    /// Button click.
    ///
    /// Stops the control if it shows a position and there is nothing to re-center to. Otherwise
    /// starts or continues locating, or re-centers the view on the known position.
    pub fn toggle<H: LocateHost>(&mut self, host: &mut H) -> Result<(), LocateError> {
        if self.state.active && self.toggle_stops(host) {
            log::debug!("Locate control switched off");
            self.stop(host);
            return Ok(());
        }

        if self.options.set_view {
            self.state.pending_recenter = true;
        }

        if !self.state.active {
            log::debug!("Starting location watch: {:?}", self.request);
            if let Err(err) = host.start_locate(&self.request) {
                self.state = RuntimeState::default();
                return Err(err);
            }
        }

        self.state.active = true;
        if self.options.follow {
            self.start_following(host);
        }

        if self.state.last_event.is_none() {
            host.set_button_state(ButtonState::Requesting);
        } else {
            self.visualize(host);
        }

        Ok(())
    }

    fn toggle_stops<H: LocateHost>(&self, host: &H) -> bool {
        let Some(event) = &self.state.last_event else {
            return false;
        };

        host.view_bounds().contains(event.position)
            || !self.options.set_view
            || self.is_outside_max_bounds(host)
    }

    /// New location fix from the location source.
    pub fn handle_location_found<H: LocateHost>(&mut self, host: &mut H, event: LocationEvent) {
        if !self.state.active {
            log::trace!("Location event ignored: control is not active");
            return;
        }

        self.state.location_found = true;

        if self
            .state
            .last_event
            .as_ref()
            .is_some_and(|last| last.same_fix(&event))
        {
            log::trace!("Location event ignored: position did not change");
            return;
        }

        if self.options.follow && self.state.following {
            self.state.pending_recenter = true;
        }

        self.state.last_event = Some(event);
        self.visualize(host);
    }

    /// Location failure from the location source.
    pub fn handle_location_error<H: LocateHost>(&mut self, host: &mut H, error: LocationError) {
        if !self.state.active {
            log::trace!("Location error ignored: control is not active: {error}");
            return;
        }

        if error.is_timeout() && self.request.watch && self.state.location_found {
            log::debug!("Location watch timed out after a fix, still watching: {error}");
            return;
        }

        log::warn!("Location error, stopping: {error}");
        self.stop(host);
        self.handler.location_error(host.as_notifier(), &error);
    }

    /// Map event subscribed by the control was fired.
    pub fn handle_map_event<H: LocateHost>(&mut self, host: &mut H, event: &MapEventName) {
        if !self.state.following {
            return;
        }

        let subscribed = self
            .state
            .current_cancel_events
            .as_ref()
            .is_some_and(|events| events.contains(event));

        if subscribed {
            log::debug!("Following stopped by map event '{event}'");
            self.stop_following(host);
        }
    }

    /// Turns on follow mode.
    pub fn start_following<H: LocateHost>(&mut self, host: &mut H) {
        if !self.state.active {
            return;
        }

        self.state.following = true;

        let configured = self.options.stop_following_on_events.clone();
        if self.state.current_cancel_events == configured {
            return;
        }

        self.unsubscribe_cancel_events(host);
        if let Some(events) = &configured {
            host.subscribe(events);
        }
        self.state.current_cancel_events = configured;
    }

    /// Turns off follow mode. Locating continues.
    pub fn stop_following<H: LocateHost>(&mut self, host: &mut H) {
        self.state.following = false;
        self.unsubscribe_cancel_events(host);

        if self.state.last_event.is_some() {
            self.visualize(host);
        } else if self.state.active {
            host.set_button_state(ButtonState::Requesting);
        }
    }

    /// Stops locating, clears the layer and resets the control to its initial state.
    pub fn stop<H: LocateHost>(&mut self, host: &mut H) {
        host.stop_locate();
        self.unsubscribe_cancel_events(host);
        host.set_button_state(ButtonState::Inactive);

        self.state = RuntimeState::default();

        self.layer.clear();
        host.show_layer(&self.layer);
    }

    fn unsubscribe_cancel_events<H: LocateHost>(&mut self, host: &mut H) {
        if let Some(current) = self.state.current_cancel_events.take() {
            host.unsubscribe(&current);
        }
    }

    fn reconcile_cancel_events<H: LocateHost>(&mut self, host: &mut H) {
        let Some(current) = &self.state.current_cancel_events else {
            return;
        };
        if Some(current) == self.options.stop_following_on_events.as_ref() {
            return;
        }

        log::debug!(
            "Follow cancel events changed from {current:?} to {:?}",
            self.options.stop_following_on_events
        );
        self.unsubscribe_cancel_events(host);
        if let Some(configured) = self.options.stop_following_on_events.clone() {
            host.subscribe(&configured);
            self.state.current_cancel_events = Some(configured);
        }
    }

    fn is_outside_max_bounds<H: LocateHost>(&self, host: &H) -> bool {
        let Some(event) = &self.state.last_event else {
            return false;
        };

        host.max_bounds()
            .is_some_and(|bounds| !bounds.contains(event.position))
    }

    fn visualize<H: LocateHost>(&mut self, host: &mut H) {
        let Some(event) = self.state.last_event.clone() else {
            return;
        };

        self.layer.clear();
        self.reconcile_cancel_events(host);

        if self.state.pending_recenter {
            if self.is_outside_max_bounds(host) {
                self.handler
                    .outside_max_bounds(host.as_notifier(), &event, &self.options.strings);
            } else {
                host.fit_bounds(&event.bounds);
            }
            self.state.pending_recenter = false;
        }

        let following = self.state.following;
        let radius = event.radius();

        if self.options.draw_circle {
            self.layer.set_circle(AccuracyCircle {
                center: event.position,
                radius,
                style: *self.styles.circle(following),
            });
        }

        let distance = self.options.units.distance(radius);
        let popup = self
            .options
            .strings
            .format_popup(&distance)
            .unwrap_or_else(|err| {
                log::error!("Failed to format location popup: {err}");
                String::new()
            });

        self.layer.set_marker(PositionMarker {
            position: event.position,
            style: *self.styles.marker(following),
            popup,
        });

        host.show_layer(&self.layer);
        host.set_button_state(if following {
            ButtonState::Following
        } else {
            ButtonState::Active
        });
    }
}
