//! Content bundled with the binary rather than fetched at runtime.

pub mod awards;
pub mod spotlight;
pub mod trivia;
