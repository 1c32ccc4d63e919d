//! TLC59711 Protokoll-Konstanten
//!
//! Werte aus dem TLC59711-Datenblatt.

use embedded_hal::spi::{MODE_0, Mode};

/// PWM-Kanäle pro Chip (4 RGB-Pixel)
pub const CHANNELS_PER_CHIP: usize = 12;

/// Kanäle pro Pixel (R, G, B)
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Pixel pro Chip
pub const PIXELS_PER_CHIP: usize = CHANNELS_PER_CHIP / CHANNELS_PER_PIXEL;

/// Bytes im Command-Word (32 Bit, MSB zuerst)
pub const COMMAND_BYTES: usize = 4;

/// Bytes pro Chip auf der Leitung: Command-Word + 12 × 16 Bit
pub const FRAME_BYTES_PER_CHIP: usize = COMMAND_BYTES + CHANNELS_PER_CHIP * 2;

/// Magic-Wert "Write" (6 Bit)
pub const WRITE_COMMAND: u32 = 0x25;

/// Breite des Function-Control-Felds in Bit
pub const CONTROL_BITS: u32 = 5;

/// Breite eines Brightness-Correction-Werts in Bit
pub const BRIGHTNESS_BITS: u32 = 7;

/// Maximale Brightness-Correction (7 Bit)
pub const BRIGHTNESS_MAX: u8 = 0x7F;

/// OUTTMG = 1, EXTGCK = 0, TMGRST = 1, DSPRPT = 1, BLANK = 0
pub const DEFAULT_CONTROL: u8 = 0x16;

/// Settle-Zeit nach einem Frame im Bit-Bang-Modus (µs)
pub const BITBANG_SETTLE_US: u32 = 200;

/// Settle-Zeit nach einem Frame mit Hardware-SPI (µs)
pub const SPI_SETTLE_US: u32 = 2;

/// SPI-Modus 0 (CPOL = 0, CPHA = 0)
pub const SPI_MODE: Mode = MODE_0;

/// Der Chip erwartet MSB zuerst
pub const SPI_BIT_ORDER_MSB_FIRST: bool = true;

/// Sichere Obergrenze für den SPI-Takt: 2 MHz
///
/// Entspricht 84 MHz / 42 auf ARM bzw. 16 MHz / 8 auf AVR.
pub const MAX_SPI_FREQUENCY_HZ: u32 = 2_000_000;
