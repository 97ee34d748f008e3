pub mod rng;
pub mod timers;
