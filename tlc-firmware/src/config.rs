// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// TLC59711 Kette
// ============================================================================

/// Anzahl verketteter TLC59711 (je 12 Kanäle / 4 RGB-Pixel)
pub const CHAIN_LENGTH: usize = 2;

/// GPIO-Pin für die Clock-Leitung (SCK bzw. Bit-Bang-Clock)
pub const CLOCK_GPIO_PIN: u8 = 6;

/// GPIO-Pin für die Data-Leitung (MOSI bzw. Bit-Bang-Data)
pub const DATA_GPIO_PIN: u8 = 7;

/// SPI-Takt in Hz
/// Der Chip verträgt mehr, 2 MHz läuft auch mit langen Kabeln stabil
pub const SPI_FREQUENCY_HZ: u32 = tlc_core::MAX_SPI_FREQUENCY_HZ;

/// Globale Brightness-Correction pro Farbe (0-127)
pub const BRIGHTNESS_CORRECTION: u8 = 0x7F;

/// Helligkeits-Level der Pixel (0-255, wird auf 16 Bit gestreckt)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// Animations-Intervall in Millisekunden
pub const ANIMATION_INTERVAL_MS: u64 = 500;

// ============================================================================
// Speicher
// ============================================================================

/// Heap-Größe (Bytes)
/// Der Kanal-Buffer des Treibers braucht nur 2 × (12 × CHAIN_LENGTH + 1) Bytes
pub const HEAP_SIZE: usize = 8192; // 8 KB
