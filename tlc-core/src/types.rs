//! Core Types für den TLC59711
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::protocol::{
    BRIGHTNESS_BITS, BRIGHTNESS_MAX, CONTROL_BITS, DEFAULT_CONTROL, WRITE_COMMAND,
};

/// Globale Brightness-Correction pro Farbe (je 7 Bit)
///
/// Der Chip skaliert damit alle Kanäle der jeweiligen Farbe in der ganzen Kette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brightness {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Brightness {
    /// Volle Helligkeit (127/127/127)
    pub const MAX: Self = Self::uniform(BRIGHTNESS_MAX);

    /// Werte werden auf 7 Bit maskiert
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red & BRIGHTNESS_MAX,
            green: green & BRIGHTNESS_MAX,
            blue: blue & BRIGHTNESS_MAX,
        }
    }

    /// Gleicher Wert für alle drei Farben
    pub const fn uniform(value: u8) -> Self {
        Self::new(value, value, value)
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

/// Function-Control-Bits im Command-Word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlFlags {
    /// OUTTMG: Ausgänge schalten auf steigende GS-Clock-Flanke
    pub output_timing_rising: bool,
    /// EXTGCK: externe GS-Clock statt interner Oszillator
    pub external_clock: bool,
    /// TMGRST: Display-Timing-Reset beim Latch
    pub timing_reset: bool,
    /// DSPRPT: PWM-Zyklus automatisch wiederholen
    pub auto_repeat: bool,
    /// BLANK: alle Ausgänge aus
    pub blank: bool,
}

impl ControlFlags {
    /// Packt die Flags in das 5-Bit-Feld (OUTTMG ist das höchste Bit)
    pub const fn bits(self) -> u8 {
        (self.output_timing_rising as u8) << 4
            | (self.external_clock as u8) << 3
            | (self.timing_reset as u8) << 2
            | (self.auto_repeat as u8) << 1
            | self.blank as u8
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self {
            output_timing_rising: bits & 0x10 != 0,
            external_clock: bits & 0x08 != 0,
            timing_reset: bits & 0x04 != 0,
            auto_repeat: bits & 0x02 != 0,
            blank: bits & 0x01 != 0,
        }
    }
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self::from_bits(DEFAULT_CONTROL)
    }
}

/// 32-Bit Command-Word, das jedem Chip-Block vorangeht
///
/// Layout (MSB → LSB): 6 Bit Write-Magic `0x25`, 5 Bit Control,
/// 7 Bit BC rot, 7 Bit BC grün, 7 Bit BC blau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandWord(u32);

impl CommandWord {
    /// Baut das Command-Word mit exakt der Shift-Folge des Chips
    ///
    /// ```
    /// # use tlc_core::{Brightness, CommandWord, ControlFlags};
    /// let cmd = CommandWord::new(ControlFlags::default(), Brightness::MAX);
    /// assert_eq!(cmd.value(), 0x96DF_FFFF);
    /// ```
    pub const fn new(control: ControlFlags, brightness: Brightness) -> Self {
        let mut command = WRITE_COMMAND;

        command <<= CONTROL_BITS;
        command |= (control.bits() & 0x1F) as u32;

        command <<= BRIGHTNESS_BITS;
        command |= (brightness.red & BRIGHTNESS_MAX) as u32;

        command <<= BRIGHTNESS_BITS;
        command |= (brightness.green & BRIGHTNESS_MAX) as u32;

        command <<= BRIGHTNESS_BITS;
        command |= (brightness.blue & BRIGHTNESS_MAX) as u32;

        Self(command)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Bytes in Sendereihenfolge (Bit 31..24 zuerst)
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Brightness {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Brightness {{ r: {}, g: {}, b: {} }}",
            self.red,
            self.green,
            self.blue
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ControlFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "ControlFlags({=u8:#b})", self.bits())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CommandWord {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "CommandWord({=u32:#x})", self.0)
    }
}
