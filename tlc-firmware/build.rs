// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

fn main() {
    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // 1. defmt.x - defmt Logging-Support
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout, muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let kind = &args[1];
        let what = &args[2];

        if kind == "undefined-symbol" {
            let hint = match what.as_str() {
                w if w.starts_with("_defmt_") => Some("`defmt.x` fehlt als Linker-Skript"),
                "_stack_start" => Some("Linker-Skript `linkall.x` fehlt"),
                "malloc" | "free" | "calloc" => {
                    Some("`esp-alloc` fehlt oder `heap_allocator!` wurde nicht aufgerufen")
                }
                _ => None,
            };
            if let Some(hint) = hint {
                eprintln!();
                eprintln!("💡 {hint}");
                eprintln!();
            }
            std::process::exit(0);
        }
        std::process::exit(1);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
