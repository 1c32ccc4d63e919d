//! Mock-Implementierungen der embedded-hal Traits für Host-Tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};
use tlc_core::{ShiftOut, Tlc59711Error, TransportMode};

// ============================================================================
// Mock Shift-Out (zeichnet Bytes auf)
// ============================================================================

pub struct MockShiftOut {
    pub mode: TransportMode,
    pub bytes: Vec<u8>,
    pub init_count: usize,
    pub finish_count: usize,
    /// Byte-Index (gezählt über alle Versuche), der fehlschlagen soll
    pub fail_at: Option<usize>,
    pub attempts: usize,
}

impl MockShiftOut {
    pub fn new(mode: TransportMode) -> Self {
        Self {
            mode,
            bytes: Vec::new(),
            init_count: 0,
            finish_count: 0,
            fail_at: None,
            attempts: 0,
        }
    }
}

impl ShiftOut for MockShiftOut {
    fn mode(&self) -> TransportMode {
        self.mode
    }

    fn init(&mut self) -> Result<(), Tlc59711Error> {
        self.init_count += 1;
        Ok(())
    }

    fn shift_byte(&mut self, byte: u8) -> Result<(), Tlc59711Error> {
        let index = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(index) {
            return Err(Tlc59711Error::Transport);
        }
        self.bytes.push(byte);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Tlc59711Error> {
        self.finish_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

#[derive(Default)]
pub struct MockDelay {
    pub delays_us: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_us.push(ns / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.delays_us.push(us);
    }
}

// ============================================================================
// Mock GPIO (gemeinsames Event-Log für Clock und Data)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clock,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinEvent {
    pub line: Line,
    pub high: bool,
}

pub type PinLog = Rc<RefCell<Vec<PinEvent>>>;

pub struct MockPin {
    line: Line,
    log: PinLog,
    low_calls: usize,
    /// `set_low`-Aufruf (0-basiert), der einmalig fehlschlagen soll
    fail_low_at: Option<usize>,
}

impl MockPin {
    pub fn pair() -> (MockPin, MockPin, PinLog) {
        let log = PinLog::default();
        let clock = MockPin {
            line: Line::Clock,
            log: log.clone(),
            low_calls: 0,
            fail_low_at: None,
        };
        let data = MockPin {
            line: Line::Data,
            log: log.clone(),
            low_calls: 0,
            fail_low_at: None,
        };
        (clock, data, log)
    }

    /// Der `nth` Aufruf von `set_low` schlägt fehl (ohne die Leitung zu ändern)
    pub fn fail_low_once(mut self, nth: usize) -> Self {
        self.fail_low_at = Some(nth);
        self
    }

    fn record(&mut self, high: bool) {
        self.log.borrow_mut().push(PinEvent {
            line: self.line,
            high,
        });
    }
}

impl digital::ErrorType for MockPin {
    type Error = digital::ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let call = self.low_calls;
        self.low_calls += 1;
        if self.fail_low_at == Some(call) {
            return Err(digital::ErrorKind::Other);
        }
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true);
        Ok(())
    }
}

/// Pin, dessen Zugriffe immer fehlschlagen
#[derive(Default)]
pub struct BrokenPin {
    pub calls: usize,
}

impl digital::ErrorType for BrokenPin {
    type Error = digital::ErrorKind;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.calls += 1;
        Err(digital::ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.calls += 1;
        Err(digital::ErrorKind::Other)
    }
}

/// Dekodiert die Bytes aus dem Pin-Log: Data wird bei steigender Clock gesampelt
pub fn decode_bitbang(events: &[PinEvent]) -> Vec<u8> {
    let mut data = false;
    let mut clock = false;
    let mut bits = Vec::new();
    for event in events {
        match event.line {
            Line::Data => data = event.high,
            Line::Clock => {
                if event.high && !clock {
                    bits.push(data);
                }
                clock = event.high;
            }
        }
    }
    bits.chunks_exact(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &bit| acc << 1 | bit as u8))
        .collect()
}

// ============================================================================
// Mock SPI Bus
// ============================================================================

#[derive(Default)]
pub struct MockSpi {
    pub written: Vec<u8>,
    pub write_calls: usize,
    pub flush_count: usize,
    pub fail_writes: bool,
}

impl spi::ErrorType for MockSpi {
    type Error = spi::ErrorKind;
}

impl SpiBus for MockSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.write_calls += 1;
        if self.fail_writes {
            return Err(spi::ErrorKind::Other);
        }
        self.written.extend_from_slice(words);
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        self.write(write)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.written.extend_from_slice(words);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flush_count += 1;
        Ok(())
    }
}
