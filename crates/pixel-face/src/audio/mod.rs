pub mod sink;
pub mod tone;
