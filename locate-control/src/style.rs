//! Styles of the accuracy circle and the position marker.
//!
//! Both the circle and the marker have a normal and a "following" variant. The following variant
//! is given as a [`StyleOverride`] that only lists what changes; it is merged into the normal style
//! once when the control is created, see [`ResolvedStyles`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LocateError;
use crate::Color;

/// Stroke and fill parameters of a circle shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathStyle {
    /// Stroke color.
    pub color: Color,
    /// Fill color.
    pub fill_color: Color,
    /// Fill opacity in range `0..=1`.
    pub fill_opacity: f32,
    /// Stroke width in pixels.
    pub weight: f32,
    /// Stroke opacity in range `0..=1`.
    pub opacity: f32,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: Color::LOCATE_BLUE,
            fill_color: Color::LOCATE_BLUE,
            fill_opacity: 0.15,
            weight: 2.0,
            opacity: 0.5,
        }
    }
}

/// Style of the position marker: a circle of a fixed pixel radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarkerStyle {
    /// Stroke and fill of the marker.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub path: PathStyle,
    /// Marker radius in pixels.
    pub radius: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            path: PathStyle {
                color: Color::LOCATE_BLUE,
                fill_color: Color::LOCATE_LIGHT_BLUE,
                fill_opacity: 0.7,
                weight: 2.0,
                opacity: 0.9,
            },
            radius: 5.0,
        }
    }
}

/// Partial style: every field that is set replaces the one of the base style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleOverride {
    /// Stroke color.
    pub color: Option<Color>,
    /// Fill color.
    pub fill_color: Option<Color>,
    /// Fill opacity.
    pub fill_opacity: Option<f32>,
    /// Stroke width.
    pub weight: Option<f32>,
    /// Stroke opacity.
    pub opacity: Option<f32>,
    /// Marker radius. Ignored for the accuracy circle.
    pub radius: Option<f32>,
}

impl StyleOverride {
    /// Sets the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the fill color.
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Sets the fill opacity.
    pub fn with_fill_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    /// Sets the stroke width.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the stroke opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Sets the marker radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }
}

impl PathStyle {
    /// Returns a copy of this style with the set fields of `overrides` applied.
    pub fn merged_with(&self, overrides: &StyleOverride) -> Self {
        Self {
            color: overrides.color.unwrap_or(self.color),
            fill_color: overrides.fill_color.unwrap_or(self.fill_color),
            fill_opacity: overrides.fill_opacity.unwrap_or(self.fill_opacity),
            weight: overrides.weight.unwrap_or(self.weight),
            opacity: overrides.opacity.unwrap_or(self.opacity),
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), LocateError> {
        let in_unit_range = |v: f32| (0.0..=1.0).contains(&v);

        if !in_unit_range(self.opacity) {
            return Err(LocateError::InvalidStyle {
                style: name,
                reason: format!("opacity {} is outside of 0..=1", self.opacity),
            });
        }
        if !in_unit_range(self.fill_opacity) {
            return Err(LocateError::InvalidStyle {
                style: name,
                reason: format!("fill opacity {} is outside of 0..=1", self.fill_opacity),
            });
        }
        if !(self.weight >= 0.0 && self.weight.is_finite()) {
            return Err(LocateError::InvalidStyle {
                style: name,
                reason: format!("weight {} must be a non-negative number", self.weight),
            });
        }

        Ok(())
    }
}

impl MarkerStyle {
    /// Returns a copy of this style with the set fields of `overrides` applied.
    pub fn merged_with(&self, overrides: &StyleOverride) -> Self {
        Self {
            path: self.path.merged_with(overrides),
            radius: overrides.radius.unwrap_or(self.radius),
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), LocateError> {
        self.path.validate(name)?;
        if !(self.radius >= 0.0 && self.radius.is_finite()) {
            return Err(LocateError::InvalidStyle {
                style: name,
                reason: format!("radius {} must be a non-negative number", self.radius),
            });
        }

        Ok(())
    }
}

/// Styles with the following variants already merged in. Computed once per control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyles {
    /// Accuracy circle when not following.
    pub circle: PathStyle,
    /// Accuracy circle while following.
    pub follow_circle: PathStyle,
    /// Position marker when not following.
    pub marker: MarkerStyle,
    /// Position marker while following.
    pub follow_marker: MarkerStyle,
}

impl ResolvedStyles {
    /// Merges the overrides into the base styles and validates the result.
    pub fn resolve(
        circle: PathStyle,
        follow_circle: &StyleOverride,
        marker: MarkerStyle,
        follow_marker: &StyleOverride,
    ) -> Result<Self, LocateError> {
        let resolved = Self {
            circle,
            follow_circle: circle.merged_with(follow_circle),
            marker,
            follow_marker: marker.merged_with(follow_marker),
        };

        resolved.circle.validate("circle")?;
        resolved.follow_circle.validate("follow circle")?;
        resolved.marker.validate("marker")?;
        resolved.follow_marker.validate("follow marker")?;

        Ok(resolved)
    }

    /// Circle style for the given follow mode.
    pub fn circle(&self, following: bool) -> &PathStyle {
        if following {
            &self.follow_circle
        } else {
            &self.circle
        }
    }

    /// Marker style for the given follow mode.
    pub fn marker(&self, following: bool) -> &MarkerStyle {
        if following {
            &self.follow_marker
        } else {
            &self.marker
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_override_keeps_base() {
        let styles = ResolvedStyles::resolve(
            PathStyle::default(),
            &StyleOverride::default(),
            MarkerStyle::default(),
            &StyleOverride::default(),
        )
        .expect("default styles are valid");

        assert_eq!(styles.follow_circle, styles.circle);
        assert_eq!(styles.follow_marker, styles.marker);
    }

    #[test]
    fn override_replaces_only_set_fields() {
        let orange = Color::rgba(0xFF, 0xA5, 0x00, 255);
        let styles = ResolvedStyles::resolve(
            PathStyle::default(),
            &StyleOverride::default().with_weight(4.0),
            MarkerStyle::default(),
            &StyleOverride::default().with_color(orange).with_radius(7.0),
        )
        .expect("valid styles");

        assert_eq!(styles.follow_circle.weight, 4.0);
        assert_eq!(styles.follow_circle.color, styles.circle.color);

        assert_eq!(styles.follow_marker.path.color, orange);
        assert_eq!(styles.follow_marker.path.fill_color, Color::LOCATE_LIGHT_BLUE);
        assert_eq!(styles.follow_marker.radius, 7.0);
        assert_eq!(styles.marker(false).radius, 5.0);
        assert_eq!(styles.marker(true).radius, 7.0);
    }

    #[test]
    fn invalid_follow_override_is_rejected() {
        let result = ResolvedStyles::resolve(
            PathStyle::default(),
            &StyleOverride::default().with_opacity(1.5),
            MarkerStyle::default(),
            &StyleOverride::default(),
        );

        assert!(matches!(
            result,
            Err(LocateError::InvalidStyle {
                style: "follow circle",
                ..
            })
        ));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let marker = MarkerStyle {
            radius: -1.0,
            ..Default::default()
        };
        let result = ResolvedStyles::resolve(
            PathStyle::default(),
            &StyleOverride::default(),
            marker,
            &StyleOverride::default(),
        );

        assert!(matches!(
            result,
            Err(LocateError::InvalidStyle { style: "marker", .. })
        ));
    }
}
