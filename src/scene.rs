//! The layered vector scene produced by one render.

use serde::Serialize;

use crate::defs::Defs;
use crate::geometry::{CANVAS, CanvasSize, Rect};
use crate::shape::Shape;

// ============================================================================
// Layers
// ============================================================================

/// Draw-order groups, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneLayer {
    Body,
    Neck,
    Head,
    Face,
    Hair,
    Outfit,
    Nails,
}

impl SceneLayer {
    /// Every layer in draw order.
    pub const ORDER: [SceneLayer; 7] = [
        SceneLayer::Body,
        SceneLayer::Neck,
        SceneLayer::Head,
        SceneLayer::Face,
        SceneLayer::Hair,
        SceneLayer::Outfit,
        SceneLayer::Nails,
    ];

    /// Group id used in markup.
    pub fn id(self) -> &'static str {
        match self {
            SceneLayer::Body => "body",
            SceneLayer::Neck => "neck",
            SceneLayer::Head => "head",
            SceneLayer::Face => "face",
            SceneLayer::Hair => "hair",
            SceneLayer::Outfit => "outfit",
            SceneLayer::Nails => "nails",
        }
    }
}

/// The shapes of one layer, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeGroup {
    pub layer: SceneLayer,
    pub shapes: Vec<Shape>,
}

// ============================================================================
// Hit regions
// ============================================================================

/// A clickable section placeholder shown while a style is being applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HitRegion {
    pub index: usize,
    pub bounds: Rect,
    pub completed: bool,
}

// ============================================================================
// VectorScene
// ============================================================================

/// A complete, self-contained description of one character drawing.
///
/// Scenes are rebuilt from scratch on every render and never mutated by the
/// presenters that consume them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorScene {
    pub size: CanvasSize,
    pub defs: Defs,
    pub groups: Vec<ShapeGroup>,
    pub regions: Vec<HitRegion>,
}

impl VectorScene {
    /// An empty scene on the standard canvas.
    pub fn new(defs: Defs) -> Self {
        Self {
            size: CANVAS,
            defs,
            groups: Vec::new(),
            regions: Vec::new(),
        }
    }

    /// Appends a layer. Layers are drawn in the order they are pushed.
    pub fn push(&mut self, layer: SceneLayer, shapes: Vec<Shape>) {
        self.groups.push(ShapeGroup { layer, shapes });
    }

    /// Shapes of `layer`, or an empty slice.
    pub fn group(&self, layer: SceneLayer) -> &[Shape] {
        self.groups
            .iter()
            .find(|g| g.layer == layer)
            .map(|g| g.shapes.as_slice())
            .unwrap_or(&[])
    }

    /// Layers in draw order.
    pub fn layers(&self) -> impl Iterator<Item = SceneLayer> + '_ {
        self.groups.iter().map(|g| g.layer)
    }

    /// Total number of top-level shapes across layers.
    pub fn shape_count(&self) -> usize {
        self.groups.iter().map(|g| g.shapes.len()).sum()
    }

    /// All top-level shapes carrying class `name`, in draw order.
    pub fn shapes_with_class<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Shape> + 'a {
        self.groups
            .iter()
            .flat_map(|g| g.shapes.iter())
            .filter(move |s| s.has_class(name))
    }

    /// The section region under a canvas point, if any.
    pub fn region_at(&self, x: f64, y: f64) -> Option<&HitRegion> {
        self.regions.iter().find(|r| r.bounds.contains(x, y))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::circle;

    #[test]
    fn group_lookup() {
        let mut scene = VectorScene::new(Defs::new());
        scene.push(SceneLayer::Body, vec![circle(0.0, 0.0, 1.0).class("torso")]);
        scene.push(SceneLayer::Hair, Vec::new());

        assert_eq!(scene.group(SceneLayer::Body).len(), 1);
        assert!(scene.group(SceneLayer::Hair).is_empty());
        assert!(scene.group(SceneLayer::Nails).is_empty());
        assert_eq!(scene.shape_count(), 1);
        assert_eq!(scene.shapes_with_class("torso").count(), 1);
    }

    #[test]
    fn layer_order_is_back_to_front() {
        assert!(SceneLayer::Body < SceneLayer::Hair);
        assert!(SceneLayer::Hair < SceneLayer::Outfit);
        assert_eq!(SceneLayer::ORDER.last(), Some(&SceneLayer::Nails));
    }

    #[test]
    fn region_hit_testing() {
        let mut scene = VectorScene::new(Defs::new());
        scene.regions = Rect::new(100.0, 100.0, 200.0, 50.0)
            .columns(4)
            .into_iter()
            .enumerate()
            .map(|(index, bounds)| HitRegion {
                index,
                bounds,
                completed: false,
            })
            .collect();

        assert_eq!(scene.region_at(110.0, 120.0).map(|r| r.index), Some(0));
        assert_eq!(scene.region_at(290.0, 149.0).map(|r| r.index), Some(3));
        assert!(scene.region_at(10.0, 10.0).is_none());
    }

    #[test]
    fn serializes_layers_in_kebab_case() {
        let mut scene = VectorScene::new(Defs::new());
        scene.push(SceneLayer::Outfit, Vec::new());
        let json = scene.to_json().unwrap();
        assert!(json.contains("\"layer\":\"outfit\""));
        assert!(json.contains("\"regions\":[]"));
    }
}
