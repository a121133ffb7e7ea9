mod janitor;

pub use janitor::{ImageJanitor, SweepReport};
