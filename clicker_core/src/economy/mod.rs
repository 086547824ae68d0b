//! Economy formulas - match outcome odds and reward amounts

mod efficiency;
mod formulas;

pub use efficiency::StatEfficiency;
pub use formulas::{currency_gain, score_gain, score_loss, win_chance};
