//! Repetition planner
//!
//! Decides whether the lucky digit appears twice or three times and draws the
//! positions it will occupy.

use log::trace;
use rand::Rng;

use crate::core::models::{BODY_LEN, Repetition, RepetitionCount, is_consecutive_run};

/// Fair coin flip between two and three occurrences
pub fn choose_repetition_count<R: Rng + ?Sized>(rng: &mut R) -> RepetitionCount {
    if rng.random_bool(0.5) {
        RepetitionCount::Twice
    } else {
        RepetitionCount::Thrice
    }
}

/// Draw distinct body positions for the lucky digit
///
/// The first two indices are drawn without replacement. For three
/// occurrences the third index is redrawn until it differs from both others
/// and the three indices are not consecutive integers. Adjacency between the
/// first two indices alone never triggers a redraw.
pub fn choose_positions<R: Rng + ?Sized>(rng: &mut R, count: RepetitionCount) -> Repetition {
    let first = rng.random_range(0..BODY_LEN);
    let second = draw_until(rng, |i| i != first);

    match count {
        RepetitionCount::Twice => Repetition::Twice([first, second]),
        RepetitionCount::Thrice => {
            let third = draw_until(rng, |i| {
                i != first && i != second && !is_consecutive_run(first, second, i)
            });
            Repetition::Thrice([first, second, third])
        },
    }
}

fn draw_until<R, F>(rng: &mut R, accept: F) -> usize
where
    R: Rng + ?Sized,
    F: Fn(usize) -> bool,
{
    loop {
        let index = rng.random_range(0..BODY_LEN);
        if accept(index) {
            return index;
        }
        trace!("rejected repetition index {index}");
    }
}
