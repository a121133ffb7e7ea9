// src/application/ports/mod.rs
pub mod security;
pub mod storage;
pub mod time;
pub mod util;

// Keeps `dyn` noise out of port injection sites
pub type ClockPort = dyn time::Clock;
