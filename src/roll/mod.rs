mod bounded;
mod ctx;
mod eval;
mod mt;
mod record;
mod roller;
mod stringify;

pub use bounded::{BoundedRng, Extract, Extractor, Int26, Int31};
pub use ctx::{Placeholder, RollSession};
pub use eval::{DieOutcome, RollResult};
pub use mt::Mt19937;
pub use record::DiceRecord;
pub use roller::Roller;
pub use stringify::{SimpleStringifier, Stringify};
