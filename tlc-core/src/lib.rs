//! TLC Core - Treiber für den TLC59711 (12 Kanäle, 16 Bit PWM, verkettbar)
//!
//! Diese Crate enthält KEINE plattformspezifischen Dependencies.
//! Sie arbeitet nur gegen die embedded-hal Traits und ist auf dem Host testbar.

#![no_std]

extern crate alloc;

pub mod driver;
pub mod logic;
pub mod protocol;
pub mod traits;
pub mod transport;
pub mod types;

// Re-exports für einfachen Zugriff
pub use driver::Tlc59711;
pub use logic::{encode_chip_frame, rotate_color, widen_color};
pub use protocol::{MAX_SPI_FREQUENCY_HZ, SPI_BIT_ORDER_MSB_FIRST, SPI_MODE};
pub use traits::{ShiftOut, Tlc59711Error, TransportMode};
pub use transport::{BitBang, HardwareSpi};
pub use types::{Brightness, CommandWord, ControlFlags};
