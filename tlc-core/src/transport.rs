//! Transports: Bit-Bang über zwei GPIOs oder Hardware-SPI
//!
//! Beide implementieren `ShiftOut` gegen die embedded-hal 1.0 Traits.

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiBus;

use crate::traits::{ShiftOut, Tlc59711Error, TransportMode, keep_first};

/// Software-Schieberegister über Clock- und Data-Pin
///
/// Pro Bit: Clock low, Data setzen, Clock high. MSB zuerst.
pub struct BitBang<CLK, DAT> {
    clock: CLK,
    data: DAT,
}

impl<CLK: OutputPin, DAT: OutputPin> BitBang<CLK, DAT> {
    /// Die Pins müssen bereits als Push-Pull-Ausgänge konfiguriert sein
    pub fn new(clock: CLK, data: DAT) -> Self {
        Self { clock, data }
    }

    pub fn release(self) -> (CLK, DAT) {
        (self.clock, self.data)
    }
}

impl<CLK: OutputPin, DAT: OutputPin> ShiftOut for BitBang<CLK, DAT> {
    fn mode(&self) -> TransportMode {
        TransportMode::BitBanged
    }

    fn init(&mut self) -> Result<(), Tlc59711Error> {
        self.clock.set_low().map_err(|_| Tlc59711Error::Transport)?;
        self.data.set_low().map_err(|_| Tlc59711Error::Transport)
    }

    /// Taktet immer alle 8 Bit, auch wenn ein Pin-Zugriff fehlschlägt.
    /// Ein fehlender Clock-Puls würde die ganze Kette verschieben.
    fn shift_byte(&mut self, byte: u8) -> Result<(), Tlc59711Error> {
        let mut first_error = None;
        let mut mask = 0x80u8;
        while mask != 0 {
            let low = self.clock.set_low().map_err(|_| Tlc59711Error::Transport);
            keep_first(&mut first_error, low);

            let bit = self
                .data
                .set_state(PinState::from(byte & mask != 0))
                .map_err(|_| Tlc59711Error::Transport);
            keep_first(&mut first_error, bit);

            let high = self.clock.set_high().map_err(|_| Tlc59711Error::Transport);
            keep_first(&mut first_error, high);

            mask >>= 1;
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// Hardware-SPI
///
/// Der Bus muss schon mit `SPI_MODE`, MSB zuerst und höchstens
/// `MAX_SPI_FREQUENCY_HZ` konfiguriert sein.
pub struct HardwareSpi<SPI> {
    spi: SPI,
}

impl<SPI: SpiBus> HardwareSpi<SPI> {
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiBus> ShiftOut for HardwareSpi<SPI> {
    fn mode(&self) -> TransportMode {
        TransportMode::HardwareSerial
    }

    fn init(&mut self) -> Result<(), Tlc59711Error> {
        self.spi.flush().map_err(|_| Tlc59711Error::Transport)
    }

    fn shift_byte(&mut self, byte: u8) -> Result<(), Tlc59711Error> {
        self.spi.write(&[byte]).map_err(|_| Tlc59711Error::Transport)
    }

    fn finish(&mut self) -> Result<(), Tlc59711Error> {
        self.spi.flush().map_err(|_| Tlc59711Error::Transport)
    }
}
