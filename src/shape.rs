//! Vector shape primitives.
//!
//! A [`Shape`] is a tagged geometry plus a paint [`Style`] and an optional
//! class label. Generators build shapes with the free constructor functions
//! ([`ellipse`], [`path`], ...) and the chained style setters:
//!
//! ```
//! use dressup_renderer::shape::{ellipse, PathData, path};
//! use dressup_renderer::HexColor;
//!
//! let head = ellipse(200.0, 150.0, 70.0, 85.0)
//!     .fill(HexColor::rgb(0x8d, 0x55, 0x24))
//!     .class("head");
//! let brow = path(PathData::new().move_to(160.0, 118.0).quad_to(175.0, 110.0, 190.0, 118.0))
//!     .stroke(HexColor::BLACK, 3.0)
//!     .round_caps();
//! assert_eq!(head.tag(), "ellipse");
//! assert_eq!(brow.tag(), "path");
//! ```

use std::fmt;
use std::fmt::Write as _;

use serde::Serialize;

use crate::color::HexColor;

// ============================================================================
// Paint
// ============================================================================

/// What a fill or stroke is painted with.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum Paint {
    /// Nothing is painted.
    #[default]
    None,
    /// A flat color.
    Color(HexColor),
    /// A reference to a shared definition (gradient) by id.
    Reference(String),
}

impl From<HexColor> for Paint {
    fn from(color: HexColor) -> Self {
        Paint::Color(color)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::None => f.write_str("none"),
            Paint::Color(color) => write!(f, "{color}"),
            Paint::Reference(id) => write!(f, "url(#{id})"),
        }
    }
}

// ============================================================================
// Style
// ============================================================================

/// Paint attributes shared by every shape kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub fill: Paint,
    pub stroke: Paint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    pub round_caps: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Id of a shared filter definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

// ============================================================================
// Geometry
// ============================================================================

/// The geometric part of a shape, one variant per element type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64, rx: f64 },
    Path { d: String },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Group { children: Vec<Shape> },
}

// ============================================================================
// Shape
// ============================================================================

/// A single drawable element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(flatten)]
    pub geometry: Geometry,
    pub style: Style,
    /// Space-separated semantic labels, e.g. `"afro-coil"` or `"bottom leg"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl Shape {
    fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            style: Style::default(),
            class: None,
        }
    }

    /// The SVG element name for this shape.
    pub fn tag(&self) -> &'static str {
        match self.geometry {
            Geometry::Ellipse { .. } => "ellipse",
            Geometry::Circle { .. } => "circle",
            Geometry::Rect { .. } => "rect",
            Geometry::Path { .. } => "path",
            Geometry::Line { .. } => "line",
            Geometry::Group { .. } => "g",
        }
    }

    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.style.fill = paint.into();
        self
    }

    pub fn stroke(mut self, paint: impl Into<Paint>, width: f64) -> Self {
        self.style.stroke = paint.into();
        self.style.stroke_width = Some(width);
        self
    }

    pub fn round_caps(mut self) -> Self {
        self.style.round_caps = true;
        self
    }

    /// Sets a stroke dash pattern such as `"6 4"`.
    pub fn dashed(mut self, pattern: impl Into<String>) -> Self {
        self.style.dash = Some(pattern.into());
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// References a shared filter. `None` leaves the shape unfiltered.
    pub fn filter(mut self, id: Option<&str>) -> Self {
        self.style.filter = id.map(str::to_string);
        self
    }

    /// Appends a class label.
    pub fn class(mut self, name: &str) -> Self {
        self.class = Some(match self.class.take() {
            Some(existing) => format!("{existing} {name}"),
            None => name.to_string(),
        });
        self
    }

    /// Returns true if one of the space-separated class labels equals `name`.
    pub fn has_class(&self, name: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|part| part == name))
    }

    /// Child shapes for groups, empty for everything else.
    pub fn children(&self) -> &[Shape] {
        match &self.geometry {
            Geometry::Group { children } => children,
            _ => &[],
        }
    }

    /// Element attributes in output order: geometry, class, then paint.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        match &self.geometry {
            Geometry::Ellipse { cx, cy, rx, ry } => {
                attrs.push(("cx", fmt_num(*cx)));
                attrs.push(("cy", fmt_num(*cy)));
                attrs.push(("rx", fmt_num(*rx)));
                attrs.push(("ry", fmt_num(*ry)));
            }
            Geometry::Circle { cx, cy, r } => {
                attrs.push(("cx", fmt_num(*cx)));
                attrs.push(("cy", fmt_num(*cy)));
                attrs.push(("r", fmt_num(*r)));
            }
            Geometry::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => {
                attrs.push(("x", fmt_num(*x)));
                attrs.push(("y", fmt_num(*y)));
                attrs.push(("width", fmt_num(*width)));
                attrs.push(("height", fmt_num(*height)));
                if *rx > 0.0 {
                    attrs.push(("rx", fmt_num(*rx)));
                }
            }
            Geometry::Path { d } => attrs.push(("d", d.clone())),
            Geometry::Line { x1, y1, x2, y2 } => {
                attrs.push(("x1", fmt_num(*x1)));
                attrs.push(("y1", fmt_num(*y1)));
                attrs.push(("x2", fmt_num(*x2)));
                attrs.push(("y2", fmt_num(*y2)));
            }
            Geometry::Group { .. } => {}
        }

        if let Some(class) = &self.class {
            attrs.push(("class", class.clone()));
        }

        let style = &self.style;
        // Groups inherit paint; only emit what was set explicitly.
        if !matches!(self.geometry, Geometry::Group { .. }) || style.fill != Paint::None {
            attrs.push(("fill", style.fill.to_string()));
        }
        if style.stroke != Paint::None {
            attrs.push(("stroke", style.stroke.to_string()));
        }
        if let Some(width) = style.stroke_width {
            attrs.push(("stroke-width", fmt_num(width)));
        }
        if style.round_caps {
            attrs.push(("stroke-linecap", "round".to_string()));
            attrs.push(("stroke-linejoin", "round".to_string()));
        }
        if let Some(dash) = &style.dash {
            attrs.push(("stroke-dasharray", dash.clone()));
        }
        if let Some(opacity) = style.opacity {
            attrs.push(("opacity", fmt_num(opacity)));
        }
        if let Some(filter) = &style.filter {
            attrs.push(("filter", format!("url(#{filter})")));
        }
        attrs
    }
}

// ============================================================================
// Constructors
// ============================================================================

pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Shape {
    Shape::new(Geometry::Ellipse { cx, cy, rx, ry })
}

pub fn circle(cx: f64, cy: f64, r: f64) -> Shape {
    Shape::new(Geometry::Circle { cx, cy, r })
}

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Shape {
    rounded_rect(x, y, width, height, 0.0)
}

pub fn rounded_rect(x: f64, y: f64, width: f64, height: f64, rx: f64) -> Shape {
    Shape::new(Geometry::Rect {
        x,
        y,
        width,
        height,
        rx,
    })
}

pub fn path(data: PathData) -> Shape {
    Shape::new(Geometry::Path { d: data.build() })
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Shape {
    Shape::new(Geometry::Line { x1, y1, x2, y2 })
}

pub fn group(children: Vec<Shape>) -> Shape {
    Shape::new(Geometry::Group { children })
}

// ============================================================================
// Path data
// ============================================================================

/// Builder for SVG path data strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    data: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, command: char, points: &[f64]) -> Self {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(command);
        for value in points {
            let _ = write!(self.data, " {}", fmt_num(*value));
        }
        self
    }

    pub fn move_to(self, x: f64, y: f64) -> Self {
        self.push('M', &[x, y])
    }

    pub fn line_to(self, x: f64, y: f64) -> Self {
        self.push('L', &[x, y])
    }

    pub fn quad_to(self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.push('Q', &[cx, cy, x, y])
    }

    pub fn cubic_to(self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.push('C', &[c1x, c1y, c2x, c2y, x, y])
    }

    pub fn close(self) -> Self {
        self.push('Z', &[])
    }

    /// Number of drawing commands so far.
    pub fn command_count(&self) -> usize {
        self.data
            .chars()
            .filter(|c| matches!(c, 'M' | 'L' | 'Q' | 'C' | 'Z'))
            .count()
    }

    pub fn build(self) -> String {
        self.data
    }
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
