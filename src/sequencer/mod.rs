//! Draw Sequencer for spindraw
//!
//! One draw is a phase walk `Idle -> Animating -> Settling -> Idle`.
//! Animating ticks display a uniformly-random candidate name at an interval
//! that stretches from the start rate toward the end rate as the spin
//! window elapses. Settling performs one final uniform draw: the committed
//! winner. The sequencer yields at every tick and honors a cancellation
//! token at each yield point.

mod cancel;
mod sequencer;
mod state;
mod timing;

pub use cancel::CancelToken;
pub use sequencer::{Sequencer, SpinOutcome};
pub use state::DrawPhase;
pub use timing::SpinTiming;
