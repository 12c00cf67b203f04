//! The dress-up studio: state, rendering and presentation in one place.

use serde_json::Value;
use time::OffsetDateTime;

use crate::attributes::CharacterAttributes;
use crate::compose::{SceneRenderer, TexturedRenderer, compose};
use crate::error::{ExportError, StoreError};
use crate::export::{ExportOptions, ExportedImage, export_png};
use crate::hair::HairStyle;
use crate::interaction::{
    CareAction, CareOutcome, ClickOutcome, HairCareRoutine, InteractionOverlay, StartOutcome,
};
use crate::presenter::Presenter;
use crate::scene::VectorScene;
use crate::store::CharacterStore;

// ============================================================================
// Configurable Trait
// ============================================================================

/// Types that can load and save a complete character look.
pub trait Configurable {
    /// Replaces the current look.
    fn apply_profile(&mut self, profile: &CharacterAttributes);

    /// Exports the current look.
    fn export_profile(&self) -> CharacterAttributes;
}

// ============================================================================
// Studio
// ============================================================================

/// Application facade over the store, the renderer and an optional presenter.
///
/// Every mutation re-renders the full scene synchronously and hands it to the
/// mounted presenter. Without a presenter the scene is still rebuilt and kept,
/// but nothing is drawn.
///
/// # Example
///
/// ```
/// use dressup_renderer::{HairStyle, Studio, SvgPresenter};
/// use dressup_renderer::interaction::ClickOutcome;
///
/// let mut studio = Studio::new(Default::default());
/// studio.mount(SvgPresenter::new());
///
/// studio.set("outfit.top", "dress-blue").unwrap();
/// studio.start_styling(HairStyle::FlatTwists);
/// for section in 0..5 {
///     studio.click_section(section);
/// }
/// assert!(matches!(studio.click_section(5), ClickOutcome::Complete { .. }));
/// assert_eq!(studio.attributes().hair.style, HairStyle::FlatTwists);
/// assert!(studio.presenter().unwrap().markup().unwrap().contains("flat-twist"));
/// ```
pub struct Studio<P: Presenter> {
    store: CharacterStore,
    renderer: Box<dyn SceneRenderer>,
    presenter: Option<P>,
    overlay: InteractionOverlay,
    care: HairCareRoutine,
    scene: VectorScene,
}

impl<P: Presenter> Studio<P> {
    /// Creates a studio with the textured renderer and nothing mounted.
    pub fn new(attributes: CharacterAttributes) -> Self {
        Self::with_renderer(attributes, TexturedRenderer)
    }

    pub fn with_renderer(
        attributes: CharacterAttributes,
        renderer: impl SceneRenderer + 'static,
    ) -> Self {
        let store = CharacterStore::new(attributes);
        let overlay = InteractionOverlay::new();
        let scene = compose(&renderer, store.attributes(), Some(&overlay));
        Self {
            store,
            renderer: Box::new(renderer),
            presenter: None,
            overlay,
            care: HairCareRoutine::new(),
            scene,
        }
    }

    /// Mounts a presenter and shows it the current scene.
    pub fn mount(&mut self, presenter: P) {
        self.presenter = Some(presenter);
        self.present();
    }

    /// Unmounts and returns the presenter.
    pub fn unmount(&mut self) -> Option<P> {
        self.presenter.take()
    }

    pub fn presenter(&self) -> Option<&P> {
        self.presenter.as_ref()
    }

    /// Switches renderer variant and re-renders.
    pub fn set_renderer(&mut self, renderer: impl SceneRenderer + 'static) {
        self.renderer = Box::new(renderer);
        self.refresh();
    }

    pub fn store(&self) -> &CharacterStore {
        &self.store
    }

    pub fn attributes(&self) -> &CharacterAttributes {
        self.store.attributes()
    }

    pub fn overlay(&self) -> &InteractionOverlay {
        &self.overlay
    }

    /// The most recently rendered scene.
    pub fn scene(&self) -> &VectorScene {
        &self.scene
    }

    // ------------------------------------------------------------------------
    // Attribute writes
    // ------------------------------------------------------------------------

    pub fn get(&self, path: &str) -> Result<Value, StoreError> {
        self.store.get(path)
    }

    /// Dot-path write followed by a re-render. Rejected writes do not render.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<(), StoreError> {
        self.store.set(path, value)?;
        self.refresh();
        Ok(())
    }

    pub fn update(&mut self, edit: impl FnOnce(&mut CharacterAttributes)) {
        self.store.update(edit);
        self.refresh();
    }

    // ------------------------------------------------------------------------
    // Activities
    // ------------------------------------------------------------------------

    pub fn start_styling(&mut self, style: HairStyle) -> StartOutcome {
        let outcome = self.overlay.start(style, &mut self.store);
        self.refresh();
        outcome
    }

    pub fn click_section(&mut self, index: usize) -> ClickOutcome {
        let outcome = self.overlay.click(index, &mut self.store);
        if outcome != ClickOutcome::Ignored {
            self.refresh();
        }
        outcome
    }

    /// Clicks the section under a canvas point.
    pub fn click_at(&mut self, x: f64, y: f64) -> ClickOutcome {
        let outcome = self.overlay.click_at(x, y, &mut self.store);
        if outcome != ClickOutcome::Ignored {
            self.refresh();
        }
        outcome
    }

    /// Called by the host once the dismissal delay has elapsed.
    pub fn dismiss_overlay(&mut self) {
        self.overlay.dismiss();
        self.refresh();
    }

    pub fn cancel_styling(&mut self) {
        self.overlay.cancel();
        self.refresh();
    }

    pub fn care(&mut self, action: CareAction) -> CareOutcome {
        let outcome = self.care.perform(action, &mut self.store);
        if matches!(outcome, CareOutcome::Done { .. }) {
            self.refresh();
        }
        outcome
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    /// Exports the current scene as a PNG stamped with the current UTC time.
    pub fn export_png(&self, options: &ExportOptions) -> Result<ExportedImage, ExportError> {
        export_png(&self.scene, options, OffsetDateTime::now_utc())
    }

    /// Rebuilds the scene and presents it.
    pub fn refresh(&mut self) {
        self.scene = compose(self.renderer.as_ref(), self.store.attributes(), Some(&self.overlay));
        self.present();
    }

    fn present(&mut self) {
        match self.presenter.as_mut() {
            Some(presenter) => presenter.present(&self.scene),
            None => log::trace!("studio: no presenter mounted, skipping present"),
        }
    }
}

impl<P: Presenter> Configurable for Studio<P> {
    fn apply_profile(&mut self, profile: &CharacterAttributes) {
        let profile = profile.clone();
        self.overlay.cancel();
        self.store.update(move |attrs| *attrs = profile);
        self.refresh();
    }

    fn export_profile(&self) -> CharacterAttributes {
        self.store.attributes().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::BasicRenderer;
    use crate::interaction::{CARE_THRESHOLD, OverlayState};
    use crate::presenter::SvgPresenter;
    use crate::scene::SceneLayer;

    fn studio() -> Studio<SvgPresenter> {
        let mut studio = Studio::new(CharacterAttributes::default());
        studio.mount(SvgPresenter::new());
        studio
    }

    fn frames(studio: &Studio<SvgPresenter>) -> u64 {
        studio.presenter().unwrap().frames()
    }

    #[test]
    fn mount_presents_immediately() {
        let studio = studio();
        assert_eq!(frames(&studio), 1);
    }

    #[test]
    fn set_rerenders_synchronously() {
        let mut studio = studio();
        studio.set("makeup.eyeshadow", "#8e44ad").unwrap();

        assert_eq!(frames(&studio), 2);
        assert_eq!(studio.scene().shapes_with_class("eyeshadow").count(), 2);
        assert!(studio.presenter().unwrap().markup().unwrap().contains("eyeshadow"));
    }

    #[test]
    fn rejected_set_does_not_render() {
        let mut studio = studio();
        assert!(studio.set("hair.nope", 1).is_err());
        assert_eq!(frames(&studio), 1);
    }

    #[test]
    fn unmounted_studio_still_renders() {
        let mut studio: Studio<SvgPresenter> = Studio::new(CharacterAttributes::default());
        studio.set("hair.style", "cornrows").unwrap();
        assert!(studio.presenter().is_none());
        assert_eq!(studio.scene().shapes_with_class("cornrow").count(), 8);
    }

    #[test]
    fn styling_session_flows_through_scene() {
        let mut studio = studio();
        studio.start_styling(HairStyle::BoxBraids);
        assert_eq!(studio.scene().regions.len(), 12);
        assert_eq!(studio.scene().group(SceneLayer::Hair).len(), 12);

        assert_eq!(studio.click_section(40), ClickOutcome::Ignored);
        let before = frames(&studio);
        for index in 0..12 {
            studio.click_section(index);
        }
        assert_eq!(frames(&studio), before + 12);
        assert_eq!(studio.attributes().hair.style, HairStyle::BoxBraids);
        assert!(matches!(studio.overlay().state(), OverlayState::Complete(_)));
        assert!(studio.scene().regions.is_empty());
        assert_eq!(studio.scene().shapes_with_class("braid-segment").count(), 72);

        studio.dismiss_overlay();
        assert_eq!(studio.overlay().state(), &OverlayState::Idle);
    }

    #[test]
    fn care_renders_only_on_completion() {
        let mut studio = studio();
        studio.update(|attrs| attrs.hair.moisture = 0);
        let before = frames(&studio);
        for _ in 0..CARE_THRESHOLD {
            studio.care(CareAction::Condition);
        }
        assert_eq!(frames(&studio), before + 1);
        assert_eq!(studio.attributes().hair.moisture, 100);
    }

    #[test]
    fn profiles_round_trip() {
        let mut studio = studio();
        let look = CharacterAttributes::default()
            .with_hair_style(HairStyle::Locs)
            .with_outfit("dress-green", "jeans", "boots");
        studio.apply_profile(&look);
        assert_eq!(studio.export_profile(), look);
        assert_eq!(studio.scene().shapes_with_class("loc").count(), 20);
    }

    #[test]
    fn renderer_can_be_swapped() {
        let mut studio = studio();
        assert!(!studio.scene().defs.is_empty());
        studio.set_renderer(BasicRenderer);
        assert!(studio.scene().defs.is_empty());
    }

    #[test]
    fn export_uses_current_scene() {
        let studio = studio();
        let image = studio.export_png(&ExportOptions::default().with_scale(0.25)).unwrap();
        assert!(image.file_name.starts_with("my-character-"));
        assert!(image.file_name.ends_with(".png"));
        assert_eq!((image.width, image.height), (100, 150));
    }
}
