//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::{RGB8, RGB16};

use crate::protocol::{CHANNELS_PER_CHIP, COMMAND_BYTES, FRAME_BYTES_PER_CHIP};
use crate::types::CommandWord;

/// Kodiert den Block eines Chips so, wie er auf die Leitung geht
///
/// Erst die 4 Bytes des Command-Words, dann Kanal 11 bis Kanal 0,
/// jeweils High-Byte vor Low-Byte.
///
/// # Beispiele
///
/// ```
/// # use tlc_core::{Brightness, CommandWord, ControlFlags, encode_chip_frame};
/// let cmd = CommandWord::new(ControlFlags::default(), Brightness::MAX);
/// let mut channels = [0u16; 12];
/// channels[11] = 0xABCD;
/// let frame = encode_chip_frame(cmd, &channels);
/// assert_eq!(&frame[..6], &[0x96, 0xDF, 0xFF, 0xFF, 0xAB, 0xCD]);
/// ```
pub fn encode_chip_frame(
    command: CommandWord,
    channels: &[u16; CHANNELS_PER_CHIP],
) -> [u8; FRAME_BYTES_PER_CHIP] {
    let mut frame = [0u8; FRAME_BYTES_PER_CHIP];
    frame[..COMMAND_BYTES].copy_from_slice(&command.to_bytes());

    let payload = &mut frame[COMMAND_BYTES..];
    for (slot, value) in payload.chunks_exact_mut(2).zip(channels.iter().rev()) {
        slot.copy_from_slice(&value.to_be_bytes());
    }
    frame
}

/// Erweitert eine 8-Bit-Farbe auf 16 Bit (0xFF → 0xFFFF)
pub fn widen_color(color: RGB8) -> RGB16 {
    RGB16 {
        r: u16::from(color.r) * 257,
        g: u16::from(color.g) * 257,
        b: u16::from(color.b) * 257,
    }
}

/// Rotiert RGB-Farbwerte zyklisch: Rot → Grün → Blau → Rot
///
/// ```
/// # use rgb::RGB16;
/// # use tlc_core::rotate_color;
/// let color = rotate_color(RGB16 { r: 10, g: 0, b: 0 });
/// assert_eq!(color, RGB16 { r: 0, g: 10, b: 0 });
/// ```
pub fn rotate_color(color: RGB16) -> RGB16 {
    RGB16 {
        r: color.b,
        g: color.r,
        b: color.g,
    }
}
