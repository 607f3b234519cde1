pub mod delay;
pub mod itd;
pub mod pan;

pub use delay::DelayLine;
