// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von tlc-core
pub use tlc_core::{
    Brightness, ShiftOut, Tlc59711, Tlc59711Error, TransportMode, rotate_color, widen_color,
};
