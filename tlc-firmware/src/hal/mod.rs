// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul baut aus den ESP32-C6 Peripherals den konkreten
// TLC59711-Treiber. Die Protokoll-Logik selbst liegt in tlc-core.

pub mod chain;

pub use chain::{ChainDriver, new_chain_driver};
