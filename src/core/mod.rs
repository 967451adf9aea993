//! Core building blocks shared by the systems: safety macros, console
//! logging, the random source, small vector math and the line buffer.

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;
#[macro_use]
#[path = "utils/console.rs"]
pub mod console;
#[path = "utils/random.rs"]
pub mod random;
pub mod math;
#[path = "buffers/line_buffer.rs"]
pub mod line_buffer;
