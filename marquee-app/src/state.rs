//! Application state composing the core model.

use std::time::Instant;

use iced::Size;

use marquee_core::easing::Easing;
use marquee_core::items::ItemStore;
use marquee_core::pulse::{PULSE_MIN_SCALE, Pulse};
use marquee_core::selection::SelectionState;
use marquee_core::transition::{FOCUS_TRANSITION_DURATION, Transition};

use crate::app::{AppConfig, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Number of items seeded at startup.
pub const ITEM_COUNT: u32 = 5;

/// Index emphasized on first render.
pub const INITIAL_SELECTION: usize = 2;

/// Whole-application state.
///
/// The latest observed [`Instant`] is committed by `Tick` messages; every
/// frame-dependent read (focus position, pulse scale) derives from it, so
/// the renderer always observes the state as of the last committed tick.
#[derive(Debug, Clone)]
pub struct State {
    config: AppConfig,
    store: ItemStore,
    selection: SelectionState,
    focus: Transition,
    pulse: Pulse,
    now: Instant,
    window_size: Size,
}

impl State {
    /// Build the initial state: the seeded store, the default selection,
    /// a settled focus tween, and the pulse oscillator started at `now`.
    pub fn new(config: AppConfig, now: Instant) -> Self {
        let store = ItemStore::seeded(ITEM_COUNT);
        let selection = SelectionState::new(INITIAL_SELECTION, store.len());
        let focus = Transition::new(
            selection.selected() as f32,
            FOCUS_TRANSITION_DURATION,
            Easing::EaseOutCubic,
        );

        Self {
            config,
            store,
            selection,
            focus,
            pulse: Pulse::new(now),
            now,
            window_size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn selected(&self) -> usize {
        self.selection.selected()
    }

    /// Select `index` (clamped into range). Returns whether the selection
    /// changed; a change retargets the focus tween.
    pub fn select(&mut self, index: usize) -> bool {
        let changed = self.selection.select(index, self.store.len());
        if changed {
            self.retarget_focus();
        }
        changed
    }

    /// Move the selection left; no-op at the first item.
    pub fn select_previous(&mut self) -> bool {
        let changed = self.selection.select_previous(self.store.len());
        if changed {
            self.retarget_focus();
        }
        changed
    }

    /// Move the selection right; no-op at the last item.
    pub fn select_next(&mut self) -> bool {
        let changed = self.selection.select_next(self.store.len());
        if changed {
            self.retarget_focus();
        }
        changed
    }

    pub fn can_go_previous(&self) -> bool {
        self.selection.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.selection.can_go_next(self.store.len())
    }

    /// Fractional focus position as of the last committed tick.
    pub fn focus(&self) -> f32 {
        self.focus.value(self.now)
    }

    /// Where the focus tween is heading (the selected index).
    pub fn focus_target(&self) -> f32 {
        self.focus.target()
    }

    pub fn is_focus_animating(&self) -> bool {
        self.focus.is_animating(self.now)
    }

    /// Current scale of the navigation controls.
    pub fn pulse_scale(&self) -> f32 {
        if self.config.reduced_motion {
            PULSE_MIN_SCALE
        } else {
            self.pulse.value(self.now)
        }
    }

    /// Whether the periodic driver needs to run: the pulse is perpetual
    /// unless reduced motion is on, in which case only an in-flight focus
    /// tween (there are none in practice, selections snap) would need it.
    pub fn animation_active(&self) -> bool {
        !self.config.reduced_motion || self.focus.is_animating(self.now)
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Commit an animation frame.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
    }

    pub fn window_size(&self) -> Size {
        self.window_size
    }

    pub fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
    }

    pub fn reduced_motion(&self) -> bool {
        self.config.reduced_motion
    }

    fn retarget_focus(&mut self) {
        let target = self.selection.selected() as f32;
        if self.config.reduced_motion {
            self.focus.snap_to(target);
        } else {
            self.focus.retarget(target, self.now);
        }
    }
}
