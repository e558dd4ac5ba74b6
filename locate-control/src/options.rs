//! Configuration of the locate control.

use std::collections::HashMap;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LocateError;
use crate::event::MapEventName;
use crate::style::{MarkerStyle, PathStyle, StyleOverride};
use crate::units::{Distance, UnitSystem};

/// Corner of the map the control button is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ControlPosition {
    /// Top left corner.
    #[default]
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom right corner.
    BottomRight,
}

/// User-facing texts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocateStrings {
    /// Tooltip of the control button.
    pub title: String,
    /// Popup of the position marker. `{distance}` and `{unit}` are substituted.
    pub popup: String,
    /// Message shown by the default handler when the position is outside of the map bounds.
    pub outside_map_bounds: String,
}

impl Default for LocateStrings {
    fn default() -> Self {
        Self {
            title: "Show me where I am".into(),
            popup: "You are within {distance} {unit} from this point".into(),
            outside_map_bounds: "You seem located outside the boundaries of the map".into(),
        }
    }
}

impl LocateStrings {
    /// Formats the popup template with the given distance.
    pub fn format_popup(&self, distance: &Distance) -> Result<String, LocateError> {
        let mut vars = HashMap::new();
        vars.insert("distance".to_string(), distance.formatted_value());
        vars.insert("unit".to_string(), distance.unit().to_string());

        strfmt::strfmt(&self.popup, &vars).map_err(|err| LocateError::InvalidTemplate {
            template: self.popup.clone(),
            reason: err.to_string(),
        })
    }
}

/// Options forwarded to the host location source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocationRequest {
    /// Keep delivering updates until stopped instead of a single fix.
    pub watch: bool,
    /// Let the host move the view to the found location by itself.
    pub set_view: bool,
    /// Maximum zoom the host may use when moving the view.
    pub max_zoom: Option<f64>,
    /// How long to wait for a fix before reporting a timeout.
    pub timeout: Duration,
    /// Maximum age of a cached position that is still acceptable.
    pub maximum_age: Duration,
    /// Ask the platform for the most precise position available.
    pub enable_high_accuracy: bool,
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            watch: false,
            set_view: false,
            max_zoom: None,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
            enable_high_accuracy: false,
        }
    }
}

impl LocationRequest {
    /// Request the control actually sends: always a watch, and the view is never moved by the host
    /// since the control positions the view itself.
    pub fn effective(&self) -> Self {
        Self {
            watch: true,
            set_view: false,
            ..self.clone()
        }
    }
}

/// Configuration of a [`LocateControl`](crate::LocateControl).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocateOptions {
    /// Where to put the button.
    pub position: ControlPosition,
    /// Draw the accuracy circle around the position.
    pub draw_circle: bool,
    /// Keep the view on the position as it updates.
    pub follow: bool,
    /// Map events that stop following when fired, e.g. `dragstart`.
    pub stop_following_on_events: Option<Vec<MapEventName>>,
    /// Accuracy circle style.
    pub circle_style: PathStyle,
    /// Changes to the accuracy circle style while following.
    pub follow_circle_style: StyleOverride,
    /// Position marker style.
    pub marker_style: MarkerStyle,
    /// Changes to the position marker style while following.
    pub follow_marker_style: StyleOverride,
    /// Units used in the popup.
    pub units: UnitSystem,
    /// Fit the view to the position when it is found.
    pub set_view: bool,
    /// Texts.
    pub strings: LocateStrings,
    /// Start locating as soon as the control is added to the map.
    pub tracking_on_start: bool,
    /// Options passed to the location source.
    pub locate_options: LocationRequest,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            position: ControlPosition::default(),
            draw_circle: true,
            follow: false,
            stop_following_on_events: None,
            circle_style: PathStyle::default(),
            follow_circle_style: StyleOverride::default(),
            marker_style: MarkerStyle::default(),
            follow_marker_style: StyleOverride::default(),
            units: UnitSystem::Metric,
            set_view: true,
            strings: LocateStrings::default(),
            tracking_on_start: false,
            locate_options: LocationRequest::default(),
        }
    }
}

impl LocateOptions {
    /// Sets the button position.
    pub fn with_position(mut self, position: ControlPosition) -> Self {
        self.position = position;
        self
    }

    /// Enables or disables the accuracy circle.
    pub fn with_draw_circle(mut self, draw_circle: bool) -> Self {
        self.draw_circle = draw_circle;
        self
    }

    /// Enables or disables follow mode.
    pub fn with_follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }

    /// Sets map events that stop following.
    pub fn with_stop_following_on_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MapEventName>,
    {
        self.stop_following_on_events = Some(events.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the accuracy circle style.
    pub fn with_circle_style(mut self, style: PathStyle) -> Self {
        self.circle_style = style;
        self
    }

    /// Sets the accuracy circle changes while following.
    pub fn with_follow_circle_style(mut self, style: StyleOverride) -> Self {
        self.follow_circle_style = style;
        self
    }

    /// Sets the position marker style.
    pub fn with_marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = style;
        self
    }

    /// Sets the position marker changes while following.
    pub fn with_follow_marker_style(mut self, style: StyleOverride) -> Self {
        self.follow_marker_style = style;
        self
    }

    /// Sets the unit system.
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Enables or disables fitting the view to the found position.
    pub fn with_set_view(mut self, set_view: bool) -> Self {
        self.set_view = set_view;
        self
    }

    /// Sets the texts.
    pub fn with_strings(mut self, strings: LocateStrings) -> Self {
        self.strings = strings;
        self
    }

    /// Start locating right after the control is added.
    pub fn with_tracking_on_start(mut self, tracking_on_start: bool) -> Self {
        self.tracking_on_start = tracking_on_start;
        self
    }

    /// Sets options passed to the location source.
    pub fn with_locate_options(mut self, locate_options: LocationRequest) -> Self {
        self.locate_options = locate_options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_request_forces_watch_without_set_view() {
        let request = LocationRequest {
            watch: false,
            set_view: true,
            enable_high_accuracy: true,
            ..Default::default()
        };

        let effective = request.effective();
        assert!(effective.watch);
        assert!(!effective.set_view);
        assert!(effective.enable_high_accuracy);
        assert_eq!(effective.timeout, Duration::from_secs(10));
    }

    #[test]
    fn popup_template() {
        let strings = LocateStrings::default();
        let popup = strings
            .format_popup(&UnitSystem::Metric.distance(5.0))
            .expect("default template is valid");
        assert_eq!(popup, "You are within 5 meters from this point");
    }

    #[test]
    fn popup_template_with_unknown_key() {
        let strings = LocateStrings {
            popup: "{radius} {unit}".into(),
            ..Default::default()
        };
        let result = strings.format_popup(&UnitSystem::Metric.distance(5.0));
        assert!(matches!(result, Err(LocateError::InvalidTemplate { .. })));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_partial_options() {
        let json = r##"{
            "follow": true,
            "stop_following_on_events": ["dragstart", "zoomstart"],
            "units": "imperial",
            "follow_marker_style": { "color": "#FFA500" },
            "strings": { "title": "Where am I?" }
        }"##;

        let options: LocateOptions = serde_json::from_str(json).expect("valid options");
        assert!(options.follow);
        assert!(options.draw_circle);
        assert_eq!(options.units, UnitSystem::Imperial);
        assert_eq!(
            options.stop_following_on_events,
            Some(vec![
                MapEventName::from("dragstart"),
                MapEventName::from("zoomstart")
            ])
        );
        assert_eq!(
            options.follow_marker_style.color,
            crate::Color::try_from_hex("#FFA500")
        );
        assert_eq!(options.strings.title, "Where am I?");
        assert_eq!(options.strings.popup, LocateStrings::default().popup);
    }
}
