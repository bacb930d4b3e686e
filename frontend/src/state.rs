use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config::HEADER_SHRINK_OFFSET;
use crate::content::{PHRASES, USE_CASES};

/// Everything on the landing page that changes after mount.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayState {
    pub active_phrase: usize,
    pub flipped_card: Option<usize>,
    pub header_shrunk: bool,
}

pub enum DisplayAction {
    /// The rotation timer fired.
    Tick,
    /// Latest vertical scroll offset in px.
    Scrolled(f64),
    ToggleFlip(usize),
}

impl DisplayState {
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped_card == Some(index)
    }
}

impl Reducible for DisplayState {
    type Action = DisplayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DisplayAction::Tick => {
                let active_phrase = (self.active_phrase + 1) % PHRASES.len();
                debug!("Rotating headline to {}", PHRASES[active_phrase]);
                Rc::new(Self { active_phrase, ..*self })
            }
            DisplayAction::Scrolled(offset) => {
                let header_shrunk = offset > HEADER_SHRINK_OFFSET;
                if header_shrunk == self.header_shrunk {
                    return self;
                }
                Rc::new(Self { header_shrunk, ..*self })
            }
            DisplayAction::ToggleFlip(index) => {
                if index >= USE_CASES.len() {
                    return self;
                }
                let flipped_card = if self.is_flipped(index) { None } else { Some(index) };
                debug!("Use case card flip: {:?} -> {:?}", self.flipped_card, flipped_card);
                Rc::new(Self { flipped_card, ..*self })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: DisplayState, actions: impl IntoIterator<Item = DisplayAction>) -> DisplayState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        *state
    }

    #[test]
    fn starts_on_first_phrase_with_nothing_flipped() {
        let state = DisplayState::default();
        assert_eq!(state.active_phrase, 0);
        assert_eq!(state.flipped_card, None);
        assert!(!state.header_shrunk);
    }

    #[test]
    fn phrase_index_is_tick_count_mod_phrase_count() {
        for n in 0..23 {
            let state = apply(DisplayState::default(), (0..n).map(|_| DisplayAction::Tick));
            assert_eq!(state.active_phrase, n % PHRASES.len());
        }
    }

    #[test]
    fn one_tick_shows_business_and_five_wrap_around() {
        let once = apply(DisplayState::default(), [DisplayAction::Tick]);
        assert_eq!(PHRASES[once.active_phrase], "Business");

        let wrapped = apply(DisplayState::default(), (0..5).map(|_| DisplayAction::Tick));
        assert_eq!(wrapped.active_phrase, 0);
    }

    #[test]
    fn header_shrinks_strictly_above_threshold() {
        let at = apply(DisplayState::default(), [DisplayAction::Scrolled(60.0)]);
        assert!(!at.header_shrunk);
        let above = apply(DisplayState::default(), [DisplayAction::Scrolled(61.0)]);
        assert!(above.header_shrunk);
    }

    #[test]
    fn header_follows_latest_scroll_sample() {
        let down = apply(DisplayState::default(), [DisplayAction::Scrolled(200.0)]);
        assert!(down.header_shrunk);
        let back = apply(down, [DisplayAction::Scrolled(0.0)]);
        assert!(!back.header_shrunk);
    }

    #[test]
    fn unchanged_scroll_sample_keeps_same_state() {
        let state = Rc::new(DisplayState { header_shrunk: true, ..Default::default() });
        let next = state.clone().reduce(DisplayAction::Scrolled(400.0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn flipping_from_none_flips_only_that_card() {
        let state = apply(DisplayState::default(), [DisplayAction::ToggleFlip(2)]);
        assert_eq!(state.flipped_card, Some(2));
        for index in 0..USE_CASES.len() {
            assert_eq!(state.is_flipped(index), index == 2);
        }
    }

    #[test]
    fn flipping_the_flipped_card_unflips_it() {
        let state = apply(
            DisplayState::default(),
            [DisplayAction::ToggleFlip(3), DisplayAction::ToggleFlip(3)],
        );
        assert_eq!(state.flipped_card, None);
    }

    #[test]
    fn flipping_another_card_switches_in_one_step() {
        let state = apply(
            DisplayState::default(),
            [DisplayAction::ToggleFlip(1), DisplayAction::ToggleFlip(4)],
        );
        assert_eq!(state.flipped_card, Some(4));
        assert!(!state.is_flipped(1));
    }

    #[test]
    fn out_of_range_flip_is_ignored() {
        let state = apply(
            DisplayState::default(),
            [DisplayAction::ToggleFlip(0), DisplayAction::ToggleFlip(USE_CASES.len())],
        );
        assert_eq!(state.flipped_card, Some(0));
    }

    #[test]
    fn sources_do_not_interfere() {
        let state = apply(
            DisplayState::default(),
            [
                DisplayAction::ToggleFlip(1),
                DisplayAction::Tick,
                DisplayAction::Scrolled(120.0),
                DisplayAction::Tick,
            ],
        );
        assert_eq!(state, DisplayState { active_phrase: 2, flipped_card: Some(1), header_shrunk: true });
    }
}
