// TLC59711 Ketten-Treiber auf dem ESP32-C6
//
// Standard: SPI2 als Hardware-Schieberegister (Mode 0, MSB zuerst, 2 MHz).
// Mit Feature `bitbang`: Clock und Data als normale GPIO-Ausgänge.

use esp_hal::delay::Delay;
use esp_hal::peripherals::{GPIO6, GPIO7, SPI2};

use crate::config::{BRIGHTNESS_CORRECTION, CHAIN_LENGTH};
use tlc_core::Tlc59711;

#[cfg(not(feature = "bitbang"))]
mod real_impl {
    use super::*;
    use esp_hal::Blocking;
    use esp_hal::spi::master::{Config, Spi};
    use esp_hal::spi::{BitOrder, Mode};
    use esp_hal::time::Rate;
    use tlc_core::HardwareSpi;

    use crate::config::SPI_FREQUENCY_HZ;

    /// Konkreter Treiber-Typ (Hardware-SPI)
    pub type ChainDriver = Tlc59711<HardwareSpi<Spi<'static, Blocking>>, Delay>;

    /// Erstellt den Treiber für die Kette an SPI2
    ///
    /// # Parameter
    /// - `clock`: GPIO6 als SCK
    /// - `data`: GPIO7 als MOSI
    /// - `spi`: SPI2 Peripheral
    pub fn new_chain_driver(
        clock: GPIO6<'static>,
        data: GPIO7<'static>,
        spi: SPI2<'static>,
    ) -> ChainDriver {
        // Mode 0, MSB zuerst, Takt auf die sichere Obergrenze begrenzt
        let config = Config::default()
            .with_frequency(Rate::from_hz(SPI_FREQUENCY_HZ))
            .with_mode(Mode::_0)
            .with_write_bit_order(BitOrder::MsbFirst);

        let spi = Spi::new(spi, config)
            .unwrap()
            .with_sck(clock)
            .with_mosi(data);

        let mut driver = Tlc59711::hardware_spi(CHAIN_LENGTH, spi, Delay::new());
        driver.set_uniform_brightness(BRIGHTNESS_CORRECTION);
        driver
    }
}

#[cfg(feature = "bitbang")]
mod real_impl {
    use super::*;
    use esp_hal::gpio::{Level, Output, OutputConfig};
    use tlc_core::BitBang;

    /// Konkreter Treiber-Typ (GPIO-Bit-Bang)
    pub type ChainDriver = Tlc59711<BitBang<Output<'static>, Output<'static>>, Delay>;

    /// Erstellt den Treiber mit GPIO6 als Clock und GPIO7 als Data
    ///
    /// SPI2 bleibt ungenutzt, wird aber für eine einheitliche Signatur übernommen.
    pub fn new_chain_driver(
        clock: GPIO6<'static>,
        data: GPIO7<'static>,
        _spi: SPI2<'static>,
    ) -> ChainDriver {
        let clock = Output::new(clock, Level::Low, OutputConfig::default());
        let data = Output::new(data, Level::Low, OutputConfig::default());

        let mut driver = Tlc59711::bit_banged(CHAIN_LENGTH, clock, data, Delay::new());
        driver.set_uniform_brightness(BRIGHTNESS_CORRECTION);
        driver
    }
}

pub use real_impl::{ChainDriver, new_chain_driver};
