//! Scene composition: fixed draw order over every generator.
//!
//! # Pipeline
//!
//! 1. The [`SceneRenderer`] builds the shared [`Defs`] for this render.
//! 2. Generators run back to front, each reading its attribute slice and the
//!    defs by reference:
//!    body → neck → head → face → hair → outfit → nails.
//! 3. While a styling session is active, the hair layer is replaced by the
//!    overlay's section placeholders and the scene carries its hit regions.
//!
//! The renderer variant is picked once, at composition time. Generators never
//! probe for features; they fall back to flat paint for any def the renderer
//! did not register.

use crate::attributes::CharacterAttributes;
use crate::color::HexColor;
use crate::defs::{
    Defs, FABRIC_GRADIENT, Filter, FilterKind, Gradient, GradientStop, HAIR_GRADIENT, SHIMMER,
    SKIN_GRADIENT, SOFT_SHADOW,
};
use crate::hair::{self, HairInput};
use crate::interaction::InteractionOverlay;
use crate::parts;
use crate::scene::{SceneLayer, VectorScene};

/// Canvas rows the hair sheen runs across, crown to shoulders.
const HAIR_SPAN: (f64, f64) = (20.0, 300.0);

// ============================================================================
// Renderer variants
// ============================================================================

/// Chooses how richly a scene is shaded.
pub trait SceneRenderer {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Builds the shared definitions for one render.
    fn build_defs(&self, attributes: &CharacterAttributes) -> Defs;
}

/// Flat colors only: no gradients, no filters.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRenderer;

impl SceneRenderer for BasicRenderer {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn build_defs(&self, _attributes: &CharacterAttributes) -> Defs {
        Defs::new()
    }
}

/// Gradient shading on skin, hair and fabric, plus soft shadows and a
/// cosmetic shimmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TexturedRenderer;

impl SceneRenderer for TexturedRenderer {
    fn name(&self) -> &'static str {
        "textured"
    }

    fn build_defs(&self, attributes: &CharacterAttributes) -> Defs {
        let skin = attributes.appearance.skin_tone;
        let hair = attributes.hair.color;
        let mut defs = Defs::new();

        defs.add_gradient(Gradient::radial(
            SKIN_GRADIENT,
            vec![
                GradientStop::new(0.0, skin.lighten(8.0)),
                GradientStop::new(0.7, skin),
                GradientStop::new(1.0, skin.darken(8.0)),
            ],
        ));
        // Canvas units: straight strands have zero-width bounding boxes.
        defs.add_gradient(Gradient::vertical_span(
            HAIR_GRADIENT,
            HAIR_SPAN.0,
            HAIR_SPAN.1,
            vec![
                GradientStop::new(0.0, hair.lighten(10.0)),
                GradientStop::new(0.5, hair),
                GradientStop::new(1.0, hair.darken(10.0)),
            ],
        ));
        // Laid over garments, so it only shades: white sheen to dark hem.
        defs.add_gradient(Gradient::vertical(
            FABRIC_GRADIENT,
            vec![
                GradientStop {
                    offset: 0.0,
                    color: HexColor::WHITE,
                    opacity: 0.18,
                },
                GradientStop {
                    offset: 0.6,
                    color: HexColor::WHITE,
                    opacity: 0.0,
                },
                GradientStop {
                    offset: 1.0,
                    color: HexColor::BLACK,
                    opacity: 0.15,
                },
            ],
        ));
        defs.add_filter(Filter {
            id: SOFT_SHADOW.to_string(),
            kind: FilterKind::DropShadow {
                dx: 0.0,
                dy: 2.0,
                blur: 3.0,
                color: HexColor::BLACK,
                opacity: 0.25,
            },
        });
        defs.add_filter(Filter {
            id: SHIMMER.to_string(),
            kind: FilterKind::Blur { std_dev: 0.6 },
        });
        defs
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Composes a full scene. `overlay` replaces the hair layer while a styling
/// session is in progress.
pub fn compose(
    renderer: &dyn SceneRenderer,
    attributes: &CharacterAttributes,
    overlay: Option<&InteractionOverlay>,
) -> VectorScene {
    // Defs exist before any generator runs.
    let defs = renderer.build_defs(attributes);
    let skin = attributes.appearance.skin_tone;

    let body = parts::body(skin, &defs);
    let neck = parts::neck(skin, &defs);
    let head = parts::head(skin, &defs);
    let face = parts::face(
        &attributes.appearance,
        attributes.hair.color,
        &attributes.makeup,
        &defs,
    );

    let (hair_shapes, regions) = match overlay.filter(|o| o.is_active()) {
        Some(overlay) => (overlay.placeholders(attributes.hair.color), overlay.regions()),
        None => {
            let input = HairInput::new(
                attributes.hair.color,
                attributes.hair.texture.properties(),
                &defs,
            );
            (hair::generate(attributes.hair.style, &input), Vec::new())
        }
    };

    let outfit = parts::outfit(&attributes.outfit, &defs);
    let nails = parts::nails(&attributes.nails, &defs);

    let mut scene = VectorScene::new(defs);
    scene.push(SceneLayer::Body, body);
    scene.push(SceneLayer::Neck, neck);
    scene.push(SceneLayer::Head, head);
    scene.push(SceneLayer::Face, face);
    scene.push(SceneLayer::Hair, hair_shapes);
    scene.push(SceneLayer::Outfit, outfit);
    scene.push(SceneLayer::Nails, nails);
    scene.regions = regions;

    log::debug!(
        "compose: {} renderer, {} hair, {} shapes",
        renderer.name(),
        attributes.hair.style,
        scene.shape_count()
    );
    scene
}

/// Renders a character with the textured renderer and no overlay.
pub fn render_character(attributes: &CharacterAttributes) -> VectorScene {
    compose(&TexturedRenderer, attributes, None)
}
