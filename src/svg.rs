//! SVG markup for a [`VectorScene`].
//!
//! Output order is fixed: `<defs>` first, then one `<g>` per layer in draw
//! order, then the interactive section regions as transparent hit targets.
//! The same scene always produces byte-identical markup.

use std::fmt::Write as _;

use crate::defs::{Defs, FilterKind, GradientKind};
use crate::scene::{HitRegion, VectorScene};
use crate::shape::{Shape, fmt_num};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serializes `scene` to a standalone SVG document.
pub fn to_svg(scene: &VectorScene) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let width = fmt_num(scene.size.width);
    let height = fmt_num(scene.size.height);
    let _ = writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    if !scene.defs.is_empty() {
        write_defs(&mut out, &scene.defs);
    }

    for group in &scene.groups {
        let _ = writeln!(out, r#"<g id="{}">"#, group.layer.id());
        for shape in &group.shapes {
            write_shape(&mut out, shape, 1);
        }
        out.push_str("</g>\n");
    }

    if !scene.regions.is_empty() {
        out.push_str("<g id=\"sections\">\n");
        for region in &scene.regions {
            write_region(&mut out, region);
        }
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    out
}

// ============================================================================
// Definitions
// ============================================================================

fn write_defs(out: &mut String, defs: &Defs) {
    out.push_str("<defs>\n");

    for gradient in defs.gradients() {
        let id = escape(&gradient.id);
        let units = gradient.units.as_str();
        let tag = match gradient.kind {
            GradientKind::Linear { x1, y1, x2, y2 } => {
                let _ = writeln!(
                    out,
                    r#"  <linearGradient id="{id}" gradientUnits="{units}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    fmt_num(x1),
                    fmt_num(y1),
                    fmt_num(x2),
                    fmt_num(y2)
                );
                "linearGradient"
            }
            GradientKind::Radial { cx, cy, r } => {
                let _ = writeln!(
                    out,
                    r#"  <radialGradient id="{id}" gradientUnits="{units}" cx="{}" cy="{}" r="{}">"#,
                    fmt_num(cx),
                    fmt_num(cy),
                    fmt_num(r)
                );
                "radialGradient"
            }
        };
        for stop in &gradient.stops {
            let _ = writeln!(
                out,
                r#"    <stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                fmt_num(stop.offset),
                stop.color,
                fmt_num(stop.opacity)
            );
        }
        let _ = writeln!(out, "  </{tag}>");
    }

    for filter in defs.filters() {
        let id = escape(&filter.id);
        // Room for the shadow or blur to spread past the shape's box.
        let _ = writeln!(
            out,
            r#"  <filter id="{id}" x="-20%" y="-20%" width="140%" height="140%">"#
        );
        match &filter.kind {
            FilterKind::DropShadow {
                dx,
                dy,
                blur,
                color,
                opacity,
            } => {
                let _ = writeln!(
                    out,
                    r#"    <feDropShadow dx="{}" dy="{}" stdDeviation="{}" flood-color="{color}" flood-opacity="{}"/>"#,
                    fmt_num(*dx),
                    fmt_num(*dy),
                    fmt_num(*blur),
                    fmt_num(*opacity)
                );
            }
            FilterKind::Blur { std_dev } => {
                let _ = writeln!(
                    out,
                    r#"    <feGaussianBlur stdDeviation="{}"/>"#,
                    fmt_num(*std_dev)
                );
            }
        }
        out.push_str("  </filter>\n");
    }

    out.push_str("</defs>\n");
}

// ============================================================================
// Shapes
// ============================================================================

fn write_shape(out: &mut String, shape: &Shape, depth: usize) {
    let indent = "  ".repeat(depth);
    let tag = shape.tag();
    let _ = write!(out, "{indent}<{tag}");
    for (name, value) in shape.attributes() {
        let _ = write!(out, r#" {name}="{}""#, escape(&value));
    }

    let children = shape.children();
    if children.is_empty() {
        out.push_str("/>\n");
    } else {
        out.push_str(">\n");
        for child in children {
            write_shape(out, child, depth + 1);
        }
        let _ = writeln!(out, "{indent}</{tag}>");
    }
}

fn write_region(out: &mut String, region: &HitRegion) {
    let bounds = region.bounds;
    let _ = writeln!(
        out,
        r#"  <rect class="hit-region" data-section="{}" data-completed="{}" x="{}" y="{}" width="{}" height="{}" fill="transparent"/>"#,
        region.index,
        region.completed,
        fmt_num(bounds.x),
        fmt_num(bounds.y),
        fmt_num(bounds.width),
        fmt_num(bounds.height)
    );
}

/// Escapes text for use inside a double-quoted attribute.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::CharacterAttributes;
    use crate::compose::{BasicRenderer, compose, render_character};
    use crate::hair::HairStyle;
    use crate::interaction::InteractionOverlay;
    use crate::store::CharacterStore;

    #[test]
    fn escapes_attribute_text() {
        assert_eq!(escape(r#"a<b & "c""#), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn defs_precede_layers_in_draw_order() {
        let svg = to_svg(&render_character(&CharacterAttributes::default()));
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"600\""
        ));

        let defs = svg.find("<defs>").unwrap();
        let positions: Vec<usize> = ["body", "neck", "head", "face", "hair", "outfit", "nails"]
            .iter()
            .map(|id| svg.find(&format!("<g id=\"{id}\">")).unwrap())
            .collect();
        assert!(defs < positions[0]);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(svg.contains("<feDropShadow"));
        assert!(svg.contains("gradientUnits=\"userSpaceOnUse\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn basic_scene_has_no_defs() {
        let svg = to_svg(&compose(&BasicRenderer, &CharacterAttributes::default(), None));
        assert!(!svg.contains("<defs>"));
        assert!(!svg.contains("url(#"));
    }

    #[test]
    fn markup_is_deterministic() {
        let attrs = CharacterAttributes::default().with_hair_style(HairStyle::TwoStrandTwists);
        assert_eq!(to_svg(&render_character(&attrs)), to_svg(&render_character(&attrs)));
    }

    #[test]
    fn session_regions_are_emitted_last() {
        let mut store = CharacterStore::default();
        let mut overlay = InteractionOverlay::new();
        overlay.start(HairStyle::FlatTwists, &mut store);
        overlay.click(1, &mut store);

        let svg = to_svg(&compose(&BasicRenderer, store.attributes(), Some(&overlay)));
        assert_eq!(svg.matches("class=\"hit-region\"").count(), 6);
        assert!(svg.contains("data-section=\"1\" data-completed=\"true\""));
        assert!(svg.find("<g id=\"sections\">").unwrap() > svg.find("<g id=\"nails\">").unwrap());
    }
}
