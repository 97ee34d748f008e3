pub mod blink;
pub mod controller;
pub mod easter_egg;
pub mod pointer;
pub mod tally;
