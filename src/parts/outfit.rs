//! Garments: top, bottom and shoes.
//!
//! Garment ids are free-form strings. Shape kind is chosen by keywords in the
//! id (`dress`, `skirt`, `shorts`, `tank`, `boots`, `heels`, ...) and color by
//! the first color word found in it, so `"tshirt-pink"` is a pink t-shirt.

use super::{FEET, WAIST_Y, id_class};
use crate::attributes::Outfit;
use crate::color::HexColor;
use crate::defs::{Defs, FABRIC_GRADIENT, SOFT_SHADOW};
use crate::shape::{PathData, Shape, ellipse, path, rect, rounded_rect};

const COLOR_WORDS: &[(&str, HexColor)] = &[
    ("pink", HexColor::rgb(0xff, 0x69, 0xb4)),
    ("red", HexColor::rgb(0xe5, 0x39, 0x35)),
    ("orange", HexColor::rgb(0xfb, 0x8c, 0x00)),
    ("yellow", HexColor::rgb(0xfd, 0xd8, 0x35)),
    ("gold", HexColor::rgb(0xd4, 0xaf, 0x37)),
    ("green", HexColor::rgb(0x43, 0xa0, 0x47)),
    ("teal", HexColor::rgb(0x00, 0x96, 0x88)),
    ("blue", HexColor::rgb(0x1e, 0x88, 0xe5)),
    ("navy", HexColor::rgb(0x1a, 0x23, 0x7e)),
    ("purple", HexColor::rgb(0x8e, 0x24, 0xaa)),
    ("lavender", HexColor::rgb(0xb3, 0x9d, 0xdb)),
    ("white", HexColor::rgb(0xf5, 0xf5, 0xf5)),
    ("black", HexColor::rgb(0x21, 0x21, 0x21)),
    ("gray", HexColor::rgb(0x9e, 0x9e, 0x9e)),
    ("grey", HexColor::rgb(0x9e, 0x9e, 0x9e)),
    ("brown", HexColor::rgb(0x79, 0x55, 0x48)),
    ("khaki", HexColor::rgb(0xc3, 0xb0, 0x91)),
    ("denim", HexColor::rgb(0x3f, 0x5e, 0x8c)),
    ("jeans", HexColor::rgb(0x3f, 0x5e, 0x8c)),
];

const NEUTRAL: HexColor = HexColor::rgb(0x9e, 0x9e, 0x9e);
const SOLE: HexColor = HexColor::rgb(0xf5, 0xf5, 0xf5);

/// Color named by the first color word in `id`, matched per `-`/`_`/space
/// separated token, or `fallback`.
pub fn garment_color(id: &str, fallback: HexColor) -> HexColor {
    let lower = id.to_ascii_lowercase();
    lower
        .split(['-', '_', ' '])
        .find_map(|token| {
            COLOR_WORDS
                .iter()
                .find(|(word, _)| *word == token)
                .map(|(_, color)| *color)
        })
        .unwrap_or(fallback)
}

/// How the bottom garment is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomKind {
    /// Two separate leg shapes.
    Trousers,
    /// Two short leg shapes.
    Shorts,
    /// A single wrap shape.
    Skirt,
}

impl BottomKind {
    pub fn from_id(id: &str) -> Self {
        let lower = id.to_ascii_lowercase();
        if lower.contains("skirt") {
            BottomKind::Skirt
        } else if lower.contains("shorts") {
            BottomKind::Shorts
        } else {
            BottomKind::Trousers
        }
    }
}

/// Top, bottom (unless the top is a dress), then shoes.
pub fn outfit(outfit: &Outfit, defs: &Defs) -> Vec<Shape> {
    let mut shapes = Vec::new();

    if outfit.is_dress() {
        shapes.extend(dress(&outfit.top, defs));
    } else {
        shapes.extend(top(&outfit.top, defs));
        shapes.extend(bottom(&outfit.bottom, defs));
    }
    shapes.extend(shoes(&outfit.shoes));

    shapes
}

/// A copy of `shape`'s geometry painted with the fabric shading gradient, or
/// nothing when the renderer did not register it.
fn fabric_shading(shape: &Shape, defs: &Defs) -> Option<Shape> {
    defs.contains(FABRIC_GRADIENT).then(|| Shape {
        geometry: shape.geometry.clone(),
        style: Default::default(),
        class: None,
    }
    .fill(defs.paint_or(FABRIC_GRADIENT, NEUTRAL))
    .class("fabric-shading"))
}

fn push_garment(shapes: &mut Vec<Shape>, shape: Shape, defs: &Defs) {
    let shading = fabric_shading(&shape, defs);
    shapes.push(shape);
    shapes.extend(shading);
}

fn bodice() -> PathData {
    PathData::new()
        .move_to(128.0, 298.0)
        .quad_to(200.0, 272.0, 272.0, 298.0)
        .line_to(262.0, WAIST_Y + 5.0)
        .quad_to(200.0, WAIST_Y + 18.0, 138.0, WAIST_Y + 5.0)
        .close()
}

fn sleeves(id: &str, color: HexColor) -> Vec<Shape> {
    let lower = id.to_ascii_lowercase();
    let outline = color.darken(15.0);
    if lower.contains("tank") {
        return Vec::new();
    }
    let long = ["hoodie", "sweater", "jacket", "longsleeve"]
        .iter()
        .any(|word| lower.contains(word));

    [100.0, 270.0]
        .into_iter()
        .map(|x| {
            let height = if long { 128.0 } else { 48.0 };
            rounded_rect(x - 2.0, 296.0, 34.0, height, 14.0)
                .fill(color)
                .stroke(outline, 1.5)
                .class("top")
                .class("sleeve")
        })
        .collect()
}

fn top(id: &str, defs: &Defs) -> Vec<Shape> {
    let color = garment_color(id, NEUTRAL);
    let mut shapes = sleeves(id, color);
    let body = path(bodice())
        .fill(color)
        .stroke(color.darken(15.0), 1.5)
        .filter(defs.filter_id(SOFT_SHADOW))
        .class("top")
        .class(&id_class("garment", id));
    push_garment(&mut shapes, body, defs);
    shapes
}

fn dress(id: &str, defs: &Defs) -> Vec<Shape> {
    let color = garment_color(id, NEUTRAL);
    let outline = color.darken(15.0);
    let mut shapes = Vec::new();

    let skirt = PathData::new()
        .move_to(140.0, WAIST_Y)
        .line_to(260.0, WAIST_Y)
        .line_to(292.0, 520.0)
        .quad_to(200.0, 535.0, 108.0, 520.0)
        .close();
    push_garment(
        &mut shapes,
        path(skirt)
            .fill(color)
            .stroke(outline, 1.5)
            .class("dress-skirt")
            .class(&id_class("garment", id)),
        defs,
    );
    push_garment(
        &mut shapes,
        path(bodice())
            .fill(color)
            .stroke(outline, 1.5)
            .filter(defs.filter_id(SOFT_SHADOW))
            .class("top")
            .class("dress")
            .class(&id_class("garment", id)),
        defs,
    );
    shapes
}

fn skirt_hem(id: &str) -> f64 {
    if id.to_ascii_lowercase().contains("mini") {
        470.0
    } else {
        500.0
    }
}

fn bottom(id: &str, defs: &Defs) -> Vec<Shape> {
    let kind = BottomKind::from_id(id);
    let fallback = match kind {
        BottomKind::Trousers => HexColor::rgb(0x3f, 0x5e, 0x8c),
        BottomKind::Shorts | BottomKind::Skirt => NEUTRAL,
    };
    let color = garment_color(id, fallback);
    let outline = color.darken(15.0);
    let garment = id_class("garment", id);
    let mut shapes = Vec::new();

    match kind {
        BottomKind::Skirt => {
            let hem = skirt_hem(id);
            let wrap = PathData::new()
                .move_to(140.0, WAIST_Y - 2.0)
                .line_to(260.0, WAIST_Y - 2.0)
                .line_to(280.0, hem)
                .quad_to(200.0, hem + 12.0, 120.0, hem)
                .close();
            push_garment(
                &mut shapes,
                path(wrap)
                    .fill(color)
                    .stroke(outline, 1.5)
                    .class("bottom")
                    .class("skirt")
                    .class(&garment),
                defs,
            );
        }
        BottomKind::Trousers | BottomKind::Shorts => {
            let length = if kind == BottomKind::Shorts { 60.0 } else { 150.0 };
            for x in [146.0, 206.0] {
                push_garment(
                    &mut shapes,
                    rounded_rect(x, WAIST_Y - 4.0, 48.0, length, 12.0)
                        .fill(color)
                        .stroke(outline, 1.5)
                        .class("bottom")
                        .class("leg")
                        .class(&garment),
                    defs,
                );
            }
        }
    }
    shapes
}

fn shoes(id: &str) -> Vec<Shape> {
    let lower = id.to_ascii_lowercase();
    let class = id_class("garment", id);
    let mut shapes = Vec::new();

    for (x, y) in FEET {
        if lower.contains("boot") {
            let color = garment_color(id, HexColor::rgb(0x6d, 0x4c, 0x41));
            shapes.push(
                rounded_rect(x - 22.0, y - 42.0, 44.0, 42.0, 6.0)
                    .fill(color)
                    .stroke(color.darken(20.0), 1.5)
                    .class("shoe")
                    .class("boot-shaft")
                    .class(&class),
            );
            shapes.push(
                ellipse(x, y, 27.0, 11.0)
                    .fill(color)
                    .stroke(color.darken(20.0), 1.5)
                    .class("shoe")
                    .class(&class),
            );
        } else if lower.contains("heel") {
            let color = garment_color(id, HexColor::rgb(0x21, 0x21, 0x21));
            shapes.push(
                rect(x + 14.0, y, 6.0, 14.0)
                    .fill(color.darken(10.0))
                    .class("shoe")
                    .class("heel")
                    .class(&class),
            );
            shapes.push(
                ellipse(x, y - 2.0, 24.0, 9.0)
                    .fill(color)
                    .stroke(color.darken(20.0), 1.0)
                    .class("shoe")
                    .class(&class),
            );
        } else {
            let color = garment_color(id, HexColor::WHITE);
            shapes.push(
                ellipse(x, y, 27.0, 12.0)
                    .fill(color)
                    .stroke(color.darken(20.0), 1.5)
                    .class("shoe")
                    .class(&class),
            );
            shapes.push(
                rect(x - 27.0, y + 6.0, 54.0, 5.0)
                    .fill(SOLE)
                    .stroke(SOLE.darken(25.0), 1.0)
                    .class("shoe")
                    .class("sole")
                    .class(&class),
            );
        }
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{Gradient, GradientStop};
    use crate::shape::Paint;

    fn count(shapes: &[Shape], class: &str) -> usize {
        shapes.iter().filter(|s| s.has_class(class)).count()
    }

    fn outfit_of(top: &str, bottom: &str, shoes: &str) -> Outfit {
        Outfit {
            top: top.to_string(),
            bottom: bottom.to_string(),
            shoes: shoes.to_string(),
        }
    }

    #[test]
    fn color_words() {
        assert_eq!(garment_color("tshirt-pink", NEUTRAL), HexColor::rgb(0xff, 0x69, 0xb4));
        assert_eq!(garment_color("Dress_Red", NEUTRAL), HexColor::rgb(0xe5, 0x39, 0x35));
        // "redwood" is not "red"
        assert_eq!(garment_color("redwood", NEUTRAL), NEUTRAL);
    }

    #[test]
    fn mini_skirts_ignore_case() {
        assert_eq!(skirt_hem("Mini-Skirt"), skirt_hem("miniskirt-red"));
        assert!(skirt_hem("MINI-skirt") < skirt_hem("skirt-navy"));
    }

    #[test]
    fn default_outfit_has_top_and_two_legs() {
        let shapes = outfit(&Outfit::default(), &Defs::new());
        assert!(count(&shapes, "top") >= 1);
        assert_eq!(count(&shapes, "leg"), 2);
        assert_eq!(count(&shapes, "shoe"), 4);
        assert_eq!(count(&shapes, "sole"), 2);
    }

    #[test]
    fn dress_suppresses_bottom() {
        let shapes = outfit(&outfit_of("dress-red", "jeans", "heels"), &Defs::new());
        assert_eq!(count(&shapes, "bottom"), 0);
        assert_eq!(count(&shapes, "garment-jeans"), 0);
        assert_eq!(count(&shapes, "dress-skirt"), 1);
        assert_eq!(count(&shapes, "dress"), 1);
        assert_eq!(count(&shapes, "heel"), 2);
    }

    #[test]
    fn skirt_is_a_single_wrap() {
        let shapes = outfit(&outfit_of("tank-white", "skirt-purple", "boots"), &Defs::new());
        assert_eq!(count(&shapes, "bottom"), 1);
        assert_eq!(count(&shapes, "skirt"), 1);
        assert_eq!(count(&shapes, "sleeve"), 0);
        assert_eq!(count(&shapes, "boot-shaft"), 2);
    }

    #[test]
    fn shorts_are_shorter_legs() {
        let shapes = outfit(&outfit_of("tshirt-blue", "shorts-khaki", "sneakers"), &Defs::new());
        let legs: Vec<&Shape> = shapes.iter().filter(|s| s.has_class("leg")).collect();
        assert_eq!(legs.len(), 2);
        for leg in legs {
            let crate::shape::Geometry::Rect { height, .. } = leg.geometry else {
                panic!("legs are rects");
            };
            assert_eq!(height, 60.0);
        }
    }

    #[test]
    fn fabric_shading_follows_defs() {
        assert_eq!(count(&outfit(&Outfit::default(), &Defs::new()), "fabric-shading"), 0);

        let mut defs = Defs::new();
        defs.add_gradient(Gradient::vertical(
            FABRIC_GRADIENT,
            vec![GradientStop::new(0.0, HexColor::WHITE)],
        ));
        let shapes = outfit(&Outfit::default(), &defs);
        // one per garment piece: bodice plus two legs
        assert_eq!(count(&shapes, "fabric-shading"), 3);
        assert!(
            shapes
                .iter()
                .filter(|s| s.has_class("fabric-shading"))
                .all(|s| s.style.fill == Paint::Reference(FABRIC_GRADIENT.to_string()))
        );
    }
}
