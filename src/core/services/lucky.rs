//! Lucky digit chooser

use log::trace;
use rand::Rng;

use crate::core::models::{Repetition, TinKind};

/// Pick the digit value that fills the repetition positions
///
/// For a regular TIN whose plan includes position 0 the digit is redrawn
/// until it is nonzero, since it will be the leading digit. Test TINs accept
/// any value.
pub fn choose_lucky_digit<R: Rng + ?Sized>(rng: &mut R, plan: &Repetition, kind: TinKind) -> u8 {
    let leads = plan.contains(0);
    loop {
        let digit = rng.random_range(0..10u8);
        if kind.is_test() || !leads || digit != 0 {
            return digit;
        }
        trace!("rejected lucky digit 0 at leading position");
    }
}
