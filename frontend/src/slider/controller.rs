//! Position state for the card carousel.
//!
//! Every input the carousel reacts to is a [`SliderEvent`], and
//! [`SliderState::apply`] is the only way the state changes. The component
//! owns one `SliderState`, feeds it events from the DOM and renders
//! [`SliderState::view`].

use super::drag::{Direction, DragSession};

/// Measured geometry the controller works against. Replaced wholesale on
/// every setup, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub slide_count: usize,
    pub slide_width: f64,
    pub slides_per_view: usize,
}

impl Layout {
    pub fn max_index(&self) -> usize {
        self.slide_count.saturating_sub(self.slides_per_view)
    }

    /// No slides or no measurable width: nothing can move.
    pub fn is_degenerate(&self) -> bool {
        self.slide_count == 0 || !self.slide_width.is_finite() || self.slide_width <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// Initial mount or viewport resize.
    Setup(Layout),
    Next,
    Prev,
    PointerDown(f64),
    PointerMove(f64),
    /// Pointer released or gesture cancelled.
    PointerUp,
}

/// What the DOM should show for the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderView {
    pub transform: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub grabbing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    current_index: usize,
    layout: Layout,
    drag: Option<DragSession>,
    commit_threshold: f64,
}

impl SliderState {
    pub fn new(commit_threshold: f64) -> Self {
        Self {
            current_index: 0,
            layout: Layout::default(),
            drag: None,
            commit_threshold,
        }
    }

    pub fn with_commit_threshold(self, commit_threshold: f64) -> Self {
        Self { commit_threshold, ..self }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn apply(self, event: SliderEvent) -> Self {
        match event {
            // An open drag survives a resize and is checked against the new bounds.
            SliderEvent::Setup(layout) => Self {
                current_index: 0,
                layout,
                ..self
            },
            SliderEvent::Next => self.step(Direction::Forward),
            SliderEvent::Prev => self.step(Direction::Backward),
            SliderEvent::PointerDown(x) => Self {
                drag: Some(DragSession::start(x)),
                ..self
            },
            SliderEvent::PointerMove(x) => {
                let Some(session) = self.drag else {
                    return self;
                };
                let session = session.moved_to(x);
                match session.commit_direction(self.commit_threshold) {
                    // one step per gesture, however far the pointer keeps going
                    Some(direction) => Self {
                        drag: None,
                        ..self.step(direction)
                    },
                    None => Self {
                        drag: Some(session),
                        ..self
                    },
                }
            }
            SliderEvent::PointerUp => Self { drag: None, ..self },
        }
    }

    fn step(self, direction: Direction) -> Self {
        if self.layout.is_degenerate() {
            return self;
        }
        let current_index = match direction {
            Direction::Forward if self.current_index < self.layout.max_index() => {
                self.current_index + 1
            }
            Direction::Backward if self.current_index > 0 => self.current_index - 1,
            _ => return self,
        };
        Self { current_index, ..self }
    }

    pub fn offset(&self) -> f64 {
        if self.layout.is_degenerate() {
            return 0.0;
        }
        let offset = -(self.layout.slide_width * self.current_index as f64);
        // avoid rendering "-0px"
        if offset == 0.0 {
            0.0
        } else {
            offset
        }
    }

    pub fn view(&self) -> SliderView {
        SliderView {
            transform: format!("translateX({}px)", self.offset()),
            prev_disabled: self.current_index == 0,
            next_disabled: self.layout.is_degenerate()
                || self.current_index >= self.layout.max_index(),
            grabbing: self.drag.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(slide_count: usize, slides_per_view: usize) -> Layout {
        Layout {
            slide_count,
            slide_width: 300.0,
            slides_per_view,
        }
    }

    fn ready(slide_count: usize, slides_per_view: usize) -> SliderState {
        SliderState::new(50.0).apply(SliderEvent::Setup(layout(slide_count, slides_per_view)))
    }

    fn run(state: SliderState, events: &[SliderEvent]) -> SliderState {
        events.iter().fold(state, |state, event| state.apply(*event))
    }

    #[test]
    fn setup_renders_zero_offset_and_disables_prev() {
        let view = ready(5, 3).view();
        assert_eq!(view.transform, "translateX(0px)");
        assert!(view.prev_disabled);
        assert!(!view.next_disabled);
        assert!(!view.grabbing);
    }

    #[test]
    fn next_stops_at_last_full_view() {
        let state = run(ready(5, 3), &[SliderEvent::Next; 5]);
        assert_eq!(state.current_index(), 2);
        let view = state.view();
        assert_eq!(view.transform, "translateX(-600px)");
        assert!(view.next_disabled);
        assert!(!view.prev_disabled);
    }

    #[test]
    fn prev_at_start_is_ignored() {
        let state = ready(5, 1).apply(SliderEvent::Prev);
        assert_eq!(state, ready(5, 1));
    }

    #[test]
    fn index_stays_in_range_for_mixed_sequences() {
        let pattern = [
            SliderEvent::Next,
            SliderEvent::Next,
            SliderEvent::Prev,
            SliderEvent::Next,
            SliderEvent::Next,
            SliderEvent::Next,
            SliderEvent::Prev,
            SliderEvent::Prev,
            SliderEvent::Prev,
            SliderEvent::Prev,
        ];
        for (count, per_view) in [(0, 1), (1, 3), (2, 2), (5, 3), (7, 1), (9, 2)] {
            let mut state = ready(count, per_view);
            let max = layout(count, per_view).max_index();
            for event in pattern.iter().cycle().take(60) {
                state = state.apply(*event);
                assert!(state.current_index() <= max, "{count}/{per_view}");
            }
        }
    }

    #[test]
    fn random_event_sequences_keep_state_consistent() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let widths = [300.0, 187.5, 0.0, -20.0, f64::NAN, f64::INFINITY];
        for seed in 0..500u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = SliderState::new(50.0);
            for _ in 0..200 {
                let event = match rng.gen_range(0..6) {
                    0 => SliderEvent::Setup(Layout {
                        slide_count: rng.gen_range(0..8),
                        slide_width: widths[rng.gen_range(0..widths.len())],
                        slides_per_view: rng.gen_range(1..=3),
                    }),
                    1 => SliderEvent::Next,
                    2 => SliderEvent::Prev,
                    3 => SliderEvent::PointerDown(rng.gen_range(-500.0..500.0)),
                    4 if rng.gen_bool(0.1) => SliderEvent::PointerMove(f64::NAN),
                    4 => SliderEvent::PointerMove(rng.gen_range(-500.0..500.0)),
                    _ => SliderEvent::PointerUp,
                };
                state = state.apply(event);

                assert!(
                    state.current_index() <= state.layout.max_index(),
                    "seed {seed}: {state:?}"
                );
                let view = state.view();
                assert!(
                    !view.transform.contains("NaN")
                        && !view.transform.contains("inf")
                        && view.transform != "translateX(-0px)",
                    "seed {seed}: {}",
                    view.transform
                );
                assert_eq!(view, state.view());
            }
        }
    }

    #[test]
    fn render_is_idempotent() {
        let state = run(ready(6, 2), &[SliderEvent::Next, SliderEvent::Next]);
        assert_eq!(state.view(), state.view());
    }

    #[test]
    fn fewer_slides_than_view_disables_both_controls() {
        let view = ready(2, 3).view();
        assert!(view.prev_disabled);
        assert!(view.next_disabled);
    }

    #[test]
    fn swipe_past_threshold_commits_one_forward_step() {
        let state = run(
            ready(5, 1),
            &[SliderEvent::PointerDown(100.0), SliderEvent::PointerMove(40.0)],
        );
        assert_eq!(state.current_index(), 1);
        assert!(!state.is_dragging());
    }

    #[test]
    fn short_swipe_commits_nothing() {
        let state = run(
            ready(5, 1),
            &[SliderEvent::PointerDown(100.0), SliderEvent::PointerMove(70.0)],
        );
        assert_eq!(state.current_index(), 0);
        assert!(state.is_dragging());
        assert!(state.view().grabbing);
    }

    #[test]
    fn one_commit_per_gesture() {
        let state = run(
            ready(5, 1),
            &[
                SliderEvent::PointerDown(500.0),
                SliderEvent::PointerMove(420.0),
                SliderEvent::PointerMove(200.0),
                SliderEvent::PointerMove(0.0),
                SliderEvent::PointerUp,
            ],
        );
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn swipe_back_at_start_closes_session_without_moving() {
        let state = run(
            ready(5, 1),
            &[SliderEvent::PointerDown(0.0), SliderEvent::PointerMove(80.0)],
        );
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn move_without_pointer_down_is_ignored() {
        let state = ready(5, 1).apply(SliderEvent::PointerMove(-400.0));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn pointer_up_discards_session() {
        let state = run(
            ready(5, 1),
            &[
                SliderEvent::PointerDown(100.0),
                SliderEvent::PointerUp,
                SliderEvent::PointerMove(0.0),
            ],
        );
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn empty_track_setup_is_harmless() {
        let state = SliderState::new(50.0).apply(SliderEvent::Setup(Layout {
            slide_count: 0,
            slide_width: 0.0,
            slides_per_view: 3,
        }));
        let state = run(state, &[SliderEvent::Next, SliderEvent::Prev]);
        assert_eq!(state.current_index(), 0);
        let view = state.view();
        assert_eq!(view.transform, "translateX(0px)");
        assert!(view.next_disabled);
    }

    #[test]
    fn zero_width_blocks_steps() {
        let state = SliderState::new(50.0).apply(SliderEvent::Setup(Layout {
            slide_count: 5,
            slide_width: 0.0,
            slides_per_view: 1,
        }));
        let state = state.apply(SliderEvent::Next);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn resize_to_narrower_view_resets_into_range() {
        let state = run(ready(5, 3), &[SliderEvent::Next, SliderEvent::Next]);
        assert_eq!(state.current_index(), 2);
        let state = state.apply(SliderEvent::Setup(Layout {
            slide_count: 5,
            slide_width: 350.0,
            slides_per_view: 1,
        }));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.view().transform, "translateX(0px)");
    }

    #[test]
    fn resize_mid_drag_uses_fresh_bounds() {
        let state = run(
            ready(3, 1),
            &[SliderEvent::Next, SliderEvent::Next, SliderEvent::PointerDown(300.0)],
        );
        // widened to three per view: nothing left to scroll to
        let state = state.apply(SliderEvent::Setup(layout(3, 3)));
        assert!(state.is_dragging());
        let state = state.apply(SliderEvent::PointerMove(100.0));
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_dragging());
    }
}
