// LED Chain Task - lässt Farben über alle Pixel der TLC59711-Kette laufen
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use embedded_hal::delay::DelayNs;
use rgb::{RGB8, RGB16};

use crate::config::{ANIMATION_INTERVAL_MS, LED_BRIGHTNESS};
use crate::hal::ChainDriver;
use crate::{ShiftOut, Tlc59711, rotate_color, widen_color};

/// Startfarbe für Pixel `index`: Rot, Grün, Blau im Wechsel
fn start_color(index: usize) -> RGB16 {
    let mut color = widen_color(RGB8 {
        r: LED_BRIGHTNESS,
        g: 0,
        b: 0,
    });
    for _ in 0..index % 3 {
        color = rotate_color(color);
    }
    color
}

/// LED Chain Logic - Testbare Logik ohne konkrete Hardware
///
/// - Initialisiert die Kette (`begin()`)
/// - Rotiert pro Intervall die Farbe jedes Pixels (Rot → Grün → Blau)
/// - Überträgt den Buffer nach jedem Schritt
///
/// # Trait-basierte Abstraktion
/// Der Treiber ist generisch über `ShiftOut` und `DelayNs`:
/// - Hardware-SPI oder GPIO-Bit-Bang im Production-Code
/// - Mocks auf dem Host
pub async fn led_chain_logic<T: ShiftOut, D: DelayNs>(mut driver: Tlc59711<T, D>) {
    if let Err(e) = driver.begin() {
        error!("TLC59711 init failed: {}", e);
        return;
    }

    info!(
        "TLC59711 chain ready: {} chips, {} pixels, {}",
        driver.chain_length(),
        driver.pixel_count(),
        driver.brightness()
    );

    for pixel in 0..driver.pixel_count() {
        driver.set_pixel_color(pixel, start_color(pixel));
    }

    loop {
        if let Err(e) = driver.transmit() {
            // Kein Retry: der nächste Frame überschreibt ohnehin alles
            error!("Frame transmit failed: {}", e);
        }

        for pixel in 0..driver.pixel_count() {
            if let Some(color) = driver.pixel(pixel) {
                driver.set_pixel_color(pixel, rotate_color(color));
            }
        }

        Timer::after(Duration::from_millis(ANIMATION_INTERVAL_MS)).await;
    }
}

/// LED Chain Task - Embassy Task für die Kette
///
/// # Parameter
/// - `driver`: fertig konstruierter Treiber aus `hal::new_chain_driver()`
#[embassy_executor::task]
pub async fn led_chain_task(driver: ChainDriver) {
    led_chain_logic(driver).await;
}
