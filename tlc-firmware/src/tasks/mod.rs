// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.

pub mod led_chain;

// Re-export Tasks für einfachen Import
pub use led_chain::led_chain_task;
