//! Step-by-step styling sessions and the hair-care counter.
//!
//! # Sectioned styling
//!
//! Picking an interactive hairstyle does not apply it straight away. The hair
//! layer is replaced by a row of placeholder sections which the user styles
//! one click at a time:
//!
//! ```text
//! Idle --start(style)--> AwaitingSections { total, completed: {} }
//!                            |  click(i), i not yet completed
//!                            v
//!                        AwaitingSections { completed + i }
//!                            |  |completed| == total
//!                            v
//!                        Complete --dismiss()--> Idle
//! ```
//!
//! Completion commits the real style to the [`CharacterStore`] and hands the
//! host a dismissal delay for the "all done" banner.
//!
//! # Hair care
//!
//! Care actions (wet, shampoo, condition, detangle, rinse) count clicks on the
//! current action; the fifth click in a row restores moisture to the maximum.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::attributes::MAX_MOISTURE;
use crate::color::HexColor;
use crate::geometry::Rect;
use crate::hair::HairStyle;
use crate::scene::HitRegion;
use crate::shape::{Shape, rounded_rect};
use crate::store::CharacterStore;

/// How long the completion banner stays up.
pub const DISMISS_DELAY: Duration = Duration::from_millis(1500);

/// Clicks on one care action needed to finish it.
pub const CARE_THRESHOLD: u32 = 5;

/// Area the section placeholders are laid out across: the hair region around
/// the head, from crown to shoulders.
const SECTION_AREA: Rect = Rect::new(100.0, 40.0, 200.0, 250.0);
const SECTION_GAP: f64 = 2.0;

// ============================================================================
// Sectioned styling
// ============================================================================

/// One in-progress styling activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionSession {
    pub style: HairStyle,
    pub total_sections: usize,
    pub completed: BTreeSet<usize>,
}

impl InteractionSession {
    fn new(style: HairStyle, total_sections: usize) -> Self {
        Self {
            style,
            total_sections,
            completed: BTreeSet::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.completed.len() == self.total_sections
    }

    pub fn remaining(&self) -> usize {
        self.total_sections - self.completed.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Idle,
    AwaitingSections(InteractionSession),
    Complete(HairStyle),
}

/// Result of [`InteractionOverlay::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The style has no sections and was committed immediately.
    Committed(HairStyle),
    /// A session is waiting for `total` section clicks.
    Awaiting { style: HairStyle, total: usize },
}

/// Result of [`InteractionOverlay::click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No session, index out of range, or section already styled.
    Ignored,
    Progress { completed: usize, total: usize },
    /// The last section was styled and the style committed. The host should
    /// call [`InteractionOverlay::dismiss`] after `dismiss_after`.
    Complete {
        style: HairStyle,
        dismiss_after: Duration,
    },
}

#[derive(Debug, Clone, Default)]
pub struct InteractionOverlay {
    state: OverlayState,
}

impl InteractionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// The in-progress session, if any.
    pub fn session(&self) -> Option<&InteractionSession> {
        match &self.state {
            OverlayState::AwaitingSections(session) => Some(session),
            _ => None,
        }
    }

    /// True while the hair layer is replaced by placeholders.
    pub fn is_active(&self) -> bool {
        self.session().is_some()
    }

    /// Starts styling `style`, discarding any session already in progress.
    pub fn start(&mut self, style: HairStyle, store: &mut CharacterStore) -> StartOutcome {
        if let Some(previous) = self.session() {
            log::debug!(
                "interaction: abandoning {} with {}/{} sections",
                previous.style,
                previous.completed.len(),
                previous.total_sections
            );
        }

        match style.section_count() {
            Some(total) if total > 0 => {
                log::debug!("interaction: start {style} ({total} sections)");
                self.state = OverlayState::AwaitingSections(InteractionSession::new(style, total));
                StartOutcome::Awaiting { style, total }
            }
            _ => {
                log::debug!("interaction: {style} is not sectioned, committing");
                store.update(|attrs| attrs.hair.style = style);
                self.state = OverlayState::Idle;
                StartOutcome::Committed(style)
            }
        }
    }

    /// Styles section `index`.
    pub fn click(&mut self, index: usize, store: &mut CharacterStore) -> ClickOutcome {
        let OverlayState::AwaitingSections(session) = &mut self.state else {
            log::trace!("interaction: click {index} with no session");
            return ClickOutcome::Ignored;
        };
        if index >= session.total_sections || !session.completed.insert(index) {
            log::trace!("interaction: click {index} ignored");
            return ClickOutcome::Ignored;
        }
        log::trace!(
            "interaction: section {index} styled ({}/{})",
            session.completed.len(),
            session.total_sections
        );

        if !session.is_finished() {
            return ClickOutcome::Progress {
                completed: session.completed.len(),
                total: session.total_sections,
            };
        }

        let style = session.style;
        store.update(|attrs| attrs.hair.style = style);
        self.state = OverlayState::Complete(style);
        log::debug!("interaction: {style} complete");
        ClickOutcome::Complete {
            style,
            dismiss_after: DISMISS_DELAY,
        }
    }

    /// Clicks whichever section contains the canvas point.
    pub fn click_at(&mut self, x: f64, y: f64, store: &mut CharacterStore) -> ClickOutcome {
        match self.regions().into_iter().find(|r| r.bounds.contains(x, y)) {
            Some(region) => self.click(region.index, store),
            None => ClickOutcome::Ignored,
        }
    }

    /// Hides the completion banner.
    pub fn dismiss(&mut self) {
        if matches!(self.state, OverlayState::Complete(_)) {
            self.state = OverlayState::Idle;
        }
    }

    /// Abandons any session without committing.
    pub fn cancel(&mut self) {
        self.state = OverlayState::Idle;
    }

    /// Clickable section bounds, equally spaced across the hair area.
    pub fn regions(&self) -> Vec<HitRegion> {
        let Some(session) = self.session() else {
            return Vec::new();
        };
        SECTION_AREA
            .columns(session.total_sections)
            .into_iter()
            .enumerate()
            .map(|(index, bounds)| HitRegion {
                index,
                bounds,
                completed: session.completed.contains(&index),
            })
            .collect()
    }

    /// Placeholder shapes standing in for the hair layer.
    ///
    /// Unstyled sections are dashed at reduced opacity; styled ones are solid.
    pub fn placeholders(&self, hair_color: HexColor) -> Vec<Shape> {
        self.regions()
            .into_iter()
            .map(|region| {
                let Rect {
                    x,
                    y,
                    width,
                    height,
                } = region.bounds;
                let shape = rounded_rect(x + SECTION_GAP / 2.0, y, width - SECTION_GAP, height, 4.0)
                    .class("section");
                if region.completed {
                    shape
                        .fill(hair_color)
                        .stroke(hair_color.darken(15.0), 1.5)
                        .opacity(1.0)
                        .class("section-styled")
                } else {
                    shape
                        .fill(hair_color.lighten(35.0))
                        .stroke(hair_color, 1.5)
                        .dashed("6 4")
                        .opacity(0.4)
                        .class("section-unstyled")
                }
            })
            .collect()
    }
}

// ============================================================================
// Hair care
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareAction {
    Wet,
    Shampoo,
    Condition,
    Detangle,
    Rinse,
}

impl CareAction {
    pub const ALL: [CareAction; 5] = [
        CareAction::Wet,
        CareAction::Shampoo,
        CareAction::Condition,
        CareAction::Detangle,
        CareAction::Rinse,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CareState {
    #[default]
    Idle,
    Counting { action: CareAction, clicks: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareOutcome {
    Counting {
        action: CareAction,
        clicks: u32,
        remaining: u32,
    },
    /// Threshold reached: moisture restored, routine back to idle.
    Done { action: CareAction, moisture: u8 },
}

#[derive(Debug, Clone, Default)]
pub struct HairCareRoutine {
    state: CareState,
}

impl HairCareRoutine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CareState {
        self.state
    }

    /// Records one click on `action`. Switching action restarts the count.
    pub fn perform(&mut self, action: CareAction, store: &mut CharacterStore) -> CareOutcome {
        let clicks = match self.state {
            CareState::Counting { action: current, clicks } if current == action => clicks + 1,
            _ => 1,
        };

        if clicks >= CARE_THRESHOLD {
            self.state = CareState::Idle;
            store.update(|attrs| attrs.hair.moisture = MAX_MOISTURE);
            log::debug!("care: {action:?} done, moisture restored");
            return CareOutcome::Done {
                action,
                moisture: MAX_MOISTURE,
            };
        }

        self.state = CareState::Counting { action, clicks };
        CareOutcome::Counting {
            action,
            clicks,
            remaining: CARE_THRESHOLD - clicks,
        }
    }
}
