//! Everything that writes to the terminal: colors, log formatting, the
//! shared print helpers and the progress spinner.

pub mod colors;
pub mod format;
pub mod logging;
pub mod print;
pub mod spinner;
