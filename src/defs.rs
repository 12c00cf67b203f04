//! Shared gradient and filter definitions.
//!
//! A [`Defs`] registry is built once per render by the composer and handed to
//! every generator by reference. Generators never assume an entry exists:
//! [`Defs::paint_or`] and [`Defs::filter_id`] fall back to a flat color or to
//! no filter when the renderer did not register the definition.

use serde::Serialize;

use crate::color::HexColor;
use crate::shape::Paint;

/// Radial shading on skin (face, hands, limbs).
pub const SKIN_GRADIENT: &str = "skin-gradient";
/// Vertical sheen across the hair mass.
pub const HAIR_GRADIENT: &str = "hair-gradient";
/// Soft fabric shading for garments.
pub const FABRIC_GRADIENT: &str = "fabric-gradient";
/// Drop shadow under the figure and large hair shapes.
pub const SOFT_SHADOW: &str = "soft-shadow";
/// Subtle glow used by cosmetics (eyeshadow shimmer, lip gloss).
pub const SHIMMER: &str = "shimmer";

// ============================================================================
// Gradients
// ============================================================================

/// One color stop; `offset` and `opacity` are in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: HexColor,
    pub opacity: f64,
}

impl GradientStop {
    pub fn new(offset: f64, color: HexColor) -> Self {
        Self {
            offset,
            color,
            opacity: 1.0,
        }
    }
}

/// Coordinate system of a gradient's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientUnits {
    /// Fractions of each painted shape's bounding box.
    #[default]
    ObjectBoundingBox,
    /// Canvas coordinates, shared by every shape. Needed for strokes on
    /// straight lines, whose bounding box has zero width.
    UserSpaceOnUse,
}

impl GradientUnits {
    pub fn as_str(self) -> &'static str {
        match self {
            GradientUnits::ObjectBoundingBox => "objectBoundingBox",
            GradientUnits::UserSpaceOnUse => "userSpaceOnUse",
        }
    }
}

/// Gradient geometry, in the gradient's [`GradientUnits`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GradientKind {
    Linear { x1: f64, y1: f64, x2: f64, y2: f64 },
    Radial { cx: f64, cy: f64, r: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    pub id: String,
    pub kind: GradientKind,
    pub units: GradientUnits,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// A top-to-bottom linear gradient.
    pub fn vertical(id: &str, stops: Vec<GradientStop>) -> Self {
        Self {
            id: id.to_string(),
            kind: GradientKind::Linear {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: 1.0,
            },
            units: GradientUnits::ObjectBoundingBox,
            stops,
        }
    }

    /// A top-to-bottom linear gradient spanning canvas rows `top..bottom`.
    pub fn vertical_span(id: &str, top: f64, bottom: f64, stops: Vec<GradientStop>) -> Self {
        Self {
            id: id.to_string(),
            kind: GradientKind::Linear {
                x1: 0.0,
                y1: top,
                x2: 0.0,
                y2: bottom,
            },
            units: GradientUnits::UserSpaceOnUse,
            stops,
        }
    }

    /// A radial gradient whose center is offset toward the upper left.
    pub fn radial(id: &str, stops: Vec<GradientStop>) -> Self {
        Self {
            id: id.to_string(),
            kind: GradientKind::Radial {
                cx: 0.4,
                cy: 0.35,
                r: 0.75,
            },
            units: GradientUnits::ObjectBoundingBox,
            stops,
        }
    }
}

// ============================================================================
// Filters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FilterKind {
    DropShadow {
        dx: f64,
        dy: f64,
        blur: f64,
        color: HexColor,
        opacity: f64,
    },
    Blur {
        std_dev: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    pub id: String,
    pub kind: FilterKind,
}

// ============================================================================
// Defs registry
// ============================================================================

/// The definitions shared by one scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Defs {
    gradients: Vec<Gradient>,
    filters: Vec<Filter>,
}

impl Defs {
    /// An empty registry: every lookup falls back.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a gradient, replacing any previous one with the same id.
    pub fn add_gradient(&mut self, gradient: Gradient) {
        self.gradients.retain(|g| g.id != gradient.id);
        self.gradients.push(gradient);
    }

    /// Registers a filter, replacing any previous one with the same id.
    pub fn add_filter(&mut self, filter: Filter) {
        self.filters.retain(|f| f.id != filter.id);
        self.filters.push(filter);
    }

    pub fn gradients(&self) -> &[Gradient] {
        &self.gradients
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty() && self.filters.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.gradients.iter().any(|g| g.id == id) || self.filters.iter().any(|f| f.id == id)
    }

    /// Paint referencing gradient `id`, or the flat `fallback` if absent.
    pub fn paint_or(&self, id: &str, fallback: HexColor) -> Paint {
        if self.gradients.iter().any(|g| g.id == id) {
            Paint::Reference(id.to_string())
        } else {
            Paint::Color(fallback)
        }
    }

    /// The filter id if registered.
    pub fn filter_id<'a>(&self, id: &'a str) -> Option<&'a str> {
        self.filters.iter().any(|f| f.id == id).then_some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_defs_fall_back() {
        let defs = Defs::new();
        let color = HexColor::rgb(1, 2, 3);
        assert_eq!(defs.paint_or(SKIN_GRADIENT, color), Paint::Color(color));
        assert_eq!(defs.filter_id(SOFT_SHADOW), None);
        assert!(defs.is_empty());
    }

    #[test]
    fn registered_defs_are_referenced() {
        let mut defs = Defs::new();
        defs.add_gradient(Gradient::vertical(
            HAIR_GRADIENT,
            vec![GradientStop::new(0.0, HexColor::WHITE), GradientStop::new(1.0, HexColor::BLACK)],
        ));
        defs.add_filter(Filter {
            id: SOFT_SHADOW.to_string(),
            kind: FilterKind::Blur { std_dev: 2.0 },
        });

        assert_eq!(
            defs.paint_or(HAIR_GRADIENT, HexColor::BLACK),
            Paint::Reference(HAIR_GRADIENT.to_string())
        );
        assert_eq!(defs.filter_id(SOFT_SHADOW), Some(SOFT_SHADOW));
        assert!(defs.contains(HAIR_GRADIENT));
        assert!(!defs.contains(SKIN_GRADIENT));
    }

    #[test]
    fn span_gradients_use_canvas_units() {
        let gradient = Gradient::vertical_span(HAIR_GRADIENT, 20.0, 300.0, vec![]);
        assert_eq!(gradient.units, GradientUnits::UserSpaceOnUse);
        assert_eq!(gradient.units.as_str(), "userSpaceOnUse");
        assert_eq!(
            Gradient::vertical(HAIR_GRADIENT, vec![]).units,
            GradientUnits::ObjectBoundingBox
        );
    }

    #[test]
    fn re_registering_replaces() {
        let mut defs = Defs::new();
        defs.add_gradient(Gradient::radial(SKIN_GRADIENT, vec![]));
        defs.add_gradient(Gradient::radial(
            SKIN_GRADIENT,
            vec![GradientStop::new(0.0, HexColor::WHITE)],
        ));
        assert_eq!(defs.gradients().len(), 1);
        assert_eq!(defs.gradients()[0].stops.len(), 1);
    }
}
