//! TLC59711 Kettentreiber
//!
//! Hält den lokalen Kanal-Buffer und die Brightness-Correction und schiebt
//! beides als Frame in die Kette. Das Protokoll ist reines Write-Only:
//! der Chip quittiert nichts, ein einziges falsches Bit verschiebt die
//! ganze Kette.

use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use rgb::{RGB8, RGB16};

use crate::logic::{encode_chip_frame, widen_color};
use crate::protocol::{CHANNELS_PER_CHIP, CHANNELS_PER_PIXEL};
use crate::traits::{ShiftOut, Tlc59711Error, keep_first};
use crate::transport::{BitBang, HardwareSpi};
use crate::types::{Brightness, CommandWord, ControlFlags};

/// Treiber für eine Kette aus TLC59711
///
/// Chip 0 (der direkt am Controller hängt) belegt die Kanäle 0..12,
/// Chip 1 die Kanäle 12..24 usw.
///
/// # Grenzfall Kanal-Index
/// `set_channel()` akzeptiert Indizes bis **einschließlich**
/// `channel_count()`. Der Index `channel_count()` landet in einem
/// Überlauf-Slot, der nie übertragen wird.
pub struct Tlc59711<T, D> {
    transport: T,
    delay: D,
    chain_length: usize,
    // channel_count() + 1 Slots, der letzte ist der Überlauf-Slot
    buffer: Option<Vec<u16>>,
    brightness: Brightness,
    control: ControlFlags,
    initialized: bool,
}

impl<CLK: OutputPin, DAT: OutputPin, D: DelayNs> Tlc59711<BitBang<CLK, DAT>, D> {
    /// Kette per Bit-Bang über Clock- und Data-Pin
    pub fn bit_banged(chain_length: usize, clock: CLK, data: DAT, delay: D) -> Self {
        Self::new(chain_length, BitBang::new(clock, data), delay)
    }
}

impl<SPI: SpiBus, D: DelayNs> Tlc59711<HardwareSpi<SPI>, D> {
    /// Kette über einen fertig konfigurierten SPI-Bus
    pub fn hardware_spi(chain_length: usize, spi: SPI, delay: D) -> Self {
        Self::new(chain_length, HardwareSpi::new(spi), delay)
    }
}

impl<T: ShiftOut, D: DelayNs> Tlc59711<T, D> {
    /// Erstellt den Treiber und allokiert den Kanal-Buffer
    ///
    /// Schlägt die Allokation fehl, meldet das erst `begin()`.
    pub fn new(chain_length: usize, transport: T, delay: D) -> Self {
        let buffer = allocate_buffer(chain_length);

        #[cfg(feature = "defmt")]
        if buffer.is_none() {
            defmt::warn!("TLC59711: buffer allocation failed ({} chips)", chain_length);
        }

        Self {
            transport,
            delay,
            chain_length,
            buffer,
            brightness: Brightness::default(),
            control: ControlFlags::default(),
            initialized: false,
        }
    }

    /// Initialisiert die Leitungen
    ///
    /// Gibt nur dann `Err(BufferAllocation)` zurück, wenn der Buffer fehlt.
    /// Ein Fehler beim Initialisieren des Transports wird nur geloggt.
    pub fn begin(&mut self) -> Result<(), Tlc59711Error> {
        if self.buffer.is_none() {
            return Err(Tlc59711Error::BufferAllocation);
        }

        if let Err(_e) = self.transport.init() {
            #[cfg(feature = "defmt")]
            defmt::warn!("TLC59711: transport init failed: {}", _e);
        }

        self.initialized = true;
        Ok(())
    }

    /// Setzt einen Kanal im lokalen Buffer (keine Übertragung)
    ///
    /// Indizes größer als `channel_count()` werden still ignoriert.
    pub fn set_channel(&mut self, channel: usize, value: u16) {
        if channel > self.channel_count() {
            return;
        }
        if let Some(slot) = self.buffer.as_mut().and_then(|b| b.get_mut(channel)) {
            *slot = value;
        }
    }

    /// Setzt die drei Kanäle eines Pixels (3p, 3p+1, 3p+2)
    pub fn set_pixel(&mut self, pixel: usize, r: u16, g: u16, b: u16) {
        let first = pixel.saturating_mul(CHANNELS_PER_PIXEL);
        self.set_channel(first, r);
        self.set_channel(first.saturating_add(1), g);
        self.set_channel(first.saturating_add(2), b);
    }

    pub fn set_pixel_color(&mut self, pixel: usize, color: RGB16) {
        self.set_pixel(pixel, color.r, color.g, color.b);
    }

    /// 8-Bit-Farbe, wird auf 16 Bit gestreckt
    pub fn set_pixel_color8(&mut self, pixel: usize, color: RGB8) {
        self.set_pixel_color(pixel, widen_color(color));
    }

    /// Liest einen Kanal aus dem lokalen Buffer (inkl. Überlauf-Slot)
    pub fn channel(&self, channel: usize) -> Option<u16> {
        self.buffer.as_ref()?.get(channel).copied()
    }

    pub fn pixel(&self, pixel: usize) -> Option<RGB16> {
        if pixel >= self.pixel_count() {
            return None;
        }
        let first = pixel * CHANNELS_PER_PIXEL;
        Some(RGB16 {
            r: self.channel(first)?,
            g: self.channel(first + 1)?,
            b: self.channel(first + 2)?,
        })
    }

    /// Die Kanäle, die tatsächlich übertragen werden
    pub fn channels(&self) -> &[u16] {
        match &self.buffer {
            Some(buffer) => &buffer[..self.channel_count()],
            None => &[],
        }
    }

    /// Alle Kanäle auf 0
    pub fn clear(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.fill(0);
        }
    }

    /// Brightness-Correction pro Farbe, maskiert auf 7 Bit
    pub fn set_brightness(&mut self, red: u8, green: u8, blue: u8) {
        self.brightness = Brightness::new(red, green, blue);
    }

    pub fn set_uniform_brightness(&mut self, value: u8) {
        self.brightness = Brightness::uniform(value);
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn set_control_flags(&mut self, control: ControlFlags) {
        self.control = control;
    }

    pub fn control_flags(&self) -> ControlFlags {
        self.control
    }

    /// Command-Word, das vor jedem Chip-Block gesendet wird
    pub fn command_word(&self) -> CommandWord {
        CommandWord::new(self.control, self.brightness)
    }

    pub fn chain_length(&self) -> usize {
        self.chain_length
    }

    pub fn channel_count(&self) -> usize {
        self.chain_length.saturating_mul(CHANNELS_PER_CHIP)
    }

    pub fn pixel_count(&self) -> usize {
        self.channel_count() / CHANNELS_PER_PIXEL
    }

    /// Schiebt den kompletten Buffer in die Kette
    ///
    /// Läuft in einer Critical Section, danach folgt die Settle-Zeit des
    /// Transports (200 µs Bit-Bang, 2 µs SPI).
    ///
    /// # Fehlerbehandlung
    /// - `NotInitialized`: kein erfolgreiches `begin()`, es wird nichts gesendet
    /// - `Transport`: ein Byte ging schief. Der Frame wird trotzdem komplett
    ///   gesendet und die Settle-Zeit abgewartet, es gibt keinen Retry.
    pub fn transmit(&mut self) -> Result<(), Tlc59711Error> {
        let count = self.channel_count();
        let command = self.command_word();
        let buffer = match (&self.buffer, self.initialized) {
            (Some(buffer), true) => &buffer[..count],
            _ => return Err(Tlc59711Error::NotInitialized),
        };
        let transport = &mut self.transport;

        let mut first_error = None;
        critical_section::with(|_| {
            for channels in buffer.as_chunks::<CHANNELS_PER_CHIP>().0 {
                for byte in encode_chip_frame(command, channels) {
                    keep_first(&mut first_error, transport.shift_byte(byte));
                }
            }
            keep_first(&mut first_error, transport.finish());
        });

        self.delay.delay_us(self.transport.mode().settle_time_us());

        match first_error {
            Some(e) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("TLC59711: frame sent with transport error");
                Err(e)
            }
            None => Ok(()),
        }
    }

    /// Gibt Transport und Delay zurück
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }
}

fn allocate_buffer(chain_length: usize) -> Option<Vec<u16>> {
    let len = chain_length
        .checked_mul(CHANNELS_PER_CHIP)?
        .checked_add(1)?;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).ok()?;
    buffer.resize(len, 0);
    Some(buffer)
}
