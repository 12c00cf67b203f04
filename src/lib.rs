//! dressup-renderer: procedural dress-up character rendering
//!
//! This crate turns a character's attributes (skin tone, hair texture, style
//! and color, outfit, nails, makeup) into a layered vector scene, and the
//! scene into SVG markup or a PNG download.
//!
//! # Example
//!
//! ```
//! use dressup_renderer::{render_character, to_svg, CharacterAttributes, HairStyle, HairTexture};
//!
//! let attributes = CharacterAttributes::new()
//!     .with_hair_texture(HairTexture::Curly3B)
//!     .with_hair_style(HairStyle::TwoStrandTwists)
//!     .with_outfit("tshirt-yellow", "skirt-navy", "boots");
//!
//! let scene = render_character(&attributes);
//! assert_eq!(scene.shapes_with_class("twist").count(), 16);
//!
//! let svg = to_svg(&scene);
//! assert!(svg.contains("<g id=\"hair\">"));
//! ```
//!
//! # Serializable Attributes
//!
//! Attributes use the same camelCase JSON the picker panels speak. Unknown
//! hairstyles fall back to the afro; unknown textures are rejected:
//!
//! ```
//! use dressup_renderer::{CharacterAttributes, HairStyle};
//!
//! let attributes = CharacterAttributes::from_json(
//!     r#"{"hair": {"texture": "4b", "style": "space-buns"}, "makeup": {"lipstick": "none"}}"#,
//! )
//! .unwrap();
//! assert_eq!(attributes.hair.style, HairStyle::Afro);
//!
//! assert!(CharacterAttributes::from_json(r#"{"hair": {"texture": "9Z"}}"#).is_err());
//! ```
//!
//! # Studio
//!
//! [`Studio`] wires a [`CharacterStore`] to a renderer and a [`Presenter`],
//! re-rendering synchronously after every change:
//!
//! ```
//! use dressup_renderer::{Studio, SvgPresenter};
//!
//! let mut studio = Studio::new(Default::default());
//! studio.mount(SvgPresenter::new());
//! studio.set("nails.color", "#c0392b").unwrap();
//!
//! assert_eq!(studio.presenter().unwrap().frames(), 2);
//! ```

pub mod attributes;
mod color;
mod compose;
pub mod defs;
mod error;
pub mod export;
pub mod geometry;
pub mod hair;
pub mod interaction;
pub mod parts;
mod presenter;
mod scene;
pub mod shape;
mod store;
mod studio;
mod svg;
mod texture;

pub use attributes::{
    Appearance, CharacterAttributes, Cosmetic, FaceShape, HairAttributes, HairLength, Makeup,
    Nails, Outfit,
};
pub use color::{HexColor, boost_saturation, darken, lighten};
pub use compose::{BasicRenderer, SceneRenderer, TexturedRenderer, compose, render_character};
pub use error::{ColorError, ConfigError, ExportError, StoreError};
pub use export::{ExportOptions, ExportedImage, export_png, rasterize};
pub use hair::HairStyle;
pub use interaction::{HairCareRoutine, InteractionOverlay};
pub use presenter::{Presenter, SvgPresenter};
pub use scene::{HitRegion, SceneLayer, ShapeGroup, VectorScene};
pub use store::{CharacterStore, Listener};
pub use studio::{Configurable, Studio};
pub use svg::to_svg;
pub use texture::{HairTexture, TextureProperties};
