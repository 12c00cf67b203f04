//! Sinks that consume finished scenes.

use crate::scene::VectorScene;
use crate::svg::to_svg;

/// Something that displays scenes: a DOM node, a window, a test buffer.
///
/// Presenters only read the scene. Geometry never depends on which one is
/// mounted, or whether one is mounted at all.
pub trait Presenter {
    fn present(&mut self, scene: &VectorScene);
}

/// Keeps the markup of the most recent scene.
#[derive(Debug, Clone, Default)]
pub struct SvgPresenter {
    markup: Option<String>,
    frames: u64,
}

impl SvgPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the last presented scene.
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    /// Number of scenes presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presenter for SvgPresenter {
    fn present(&mut self, scene: &VectorScene) {
        self.markup = Some(to_svg(scene));
        self.frames += 1;
    }
}

impl<F: FnMut(&VectorScene)> Presenter for F {
    fn present(&mut self, scene: &VectorScene) {
        self(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::CharacterAttributes;
    use crate::compose::render_character;

    #[test]
    fn svg_presenter_keeps_latest_markup() {
        let mut presenter = SvgPresenter::new();
        assert!(presenter.markup().is_none());

        let scene = render_character(&CharacterAttributes::default());
        presenter.present(&scene);
        presenter.present(&scene);

        assert_eq!(presenter.frames(), 2);
        assert!(presenter.markup().unwrap().starts_with("<svg"));
    }

    #[test]
    fn closures_are_presenters() {
        let mut shapes = 0;
        {
            let mut sink = |scene: &VectorScene| shapes = scene.shape_count();
            sink.present(&render_character(&CharacterAttributes::default()));
        }
        assert!(shapes > 0);
    }
}
