//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstelle zum Schieberegister-Bus
//! ohne konkrete Implementierung.

use crate::protocol::{BITBANG_SETTLE_US, SPI_SETTLE_US};

/// Fehler-Typ für Treiber-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tlc59711Error {
    /// Kanal-Buffer konnte nicht allokiert werden
    BufferAllocation,
    /// `transmit()` vor erfolgreichem `begin()`
    NotInitialized,
    /// Pin- oder Bus-Zugriff während eines Frames fehlgeschlagen
    Transport,
}

/// Übertragungsart zum Chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportMode {
    /// Clock und Data werden per GPIO getoggelt
    BitBanged,
    /// Bytes gehen über ein bereits konfiguriertes SPI-Peripheral
    HardwareSerial,
}

impl TransportMode {
    /// Wartezeit nach einem Frame, bis der Chip sicher gelatcht hat
    pub const fn settle_time_us(self) -> u32 {
        match self {
            TransportMode::BitBanged => BITBANG_SETTLE_US,
            TransportMode::HardwareSerial => SPI_SETTLE_US,
        }
    }
}

/// Trait für das Herausschieben einzelner Bytes
///
/// Abstrahiert den Weg der Bits zum ersten Chip der Kette.
///
/// # Implementierungen
/// - **Production:** `BitBang` (zwei GPIOs) und `HardwareSpi` (SPI-Peripheral)
/// - **Testing:** Mocks in `tlc-tests`
pub trait ShiftOut {
    /// Übertragungsart, bestimmt die Settle-Zeit
    fn mode(&self) -> TransportMode;

    /// Bringt die Leitungen in den Ruhezustand
    fn init(&mut self) -> Result<(), Tlc59711Error>;

    /// Schiebt ein Byte heraus, MSB zuerst
    ///
    /// # Fehlerbehandlung
    /// Gibt `Tlc59711Error::Transport` zurück wenn Hardware-Zugriff fehlschlägt
    fn shift_byte(&mut self, byte: u8) -> Result<(), Tlc59711Error>;

    /// Wartet, bis alle Bytes wirklich auf der Leitung waren
    fn finish(&mut self) -> Result<(), Tlc59711Error> {
        Ok(())
    }
}

/// Merkt sich nur den ersten Fehler, spätere werden verworfen
pub(crate) fn keep_first(slot: &mut Option<Tlc59711Error>, result: Result<(), Tlc59711Error>) {
    if slot.is_none() {
        *slot = result.err();
    }
}
