/// Centralized constants for gewerke-clean
pub mod constants {
    /// Tokens used upstream to mean "no data"
    pub const PLACEHOLDER_TOKENS: &[&str] = &["-", "n/a"];

    /// Entries shorter than this (in characters) are dropped
    pub const MIN_ENTRY_LENGTH: usize = 3;

    /// Printed before the output path when a run succeeds
    pub const SUCCESS_MESSAGE: &str = "Bereinigung abgeschlossen. Ergebnisse in";

    /// Printed before the error chain when a run fails
    pub const ERROR_MESSAGE: &str = "Fehler bei der Verarbeitung:";
}
