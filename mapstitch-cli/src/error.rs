//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use mapstitch::config::CredentialError;
use mapstitch::grid::GridError;
use mapstitch::mosaic::MosaicError;
use mapstitch::provider::ProviderError;
use mapstitch::style::StyleError;
use mapstitch::zoom::ZoomTableError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Zoom table could not be loaded or queried
    ZoomTable(ZoomTableError),
    /// Grid dimensions under- or over-specified
    Grid(GridError),
    /// API key missing or unusable
    Credential(CredentialError),
    /// Style file could not be loaded
    Style(StyleError),
    /// HTTP client could not be created
    Provider(ProviderError),
    /// Mosaic composition or save failed
    Compose(MosaicError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Credential(_) => {
                eprintln!();
                eprintln!("Provide an API key with --key <KEY>.");
                eprintln!("Add --store-key to save it for future runs.");
            }
            CliError::Grid(_) => {
                eprintln!();
                eprintln!("Size the grid with either:");
                eprintln!("  --end <LAT> <LON>        bottom-right coordinate, or");
                eprintln!("  --width N --height M     explicit tile counts");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ZoomTable(e) => write!(f, "zoom table: {}", e),
            CliError::Grid(e) => write!(f, "grid planning: {}", e),
            CliError::Credential(e) => write!(f, "API key: {}", e),
            CliError::Style(e) => write!(f, "style: {}", e),
            CliError::Provider(e) => write!(f, "HTTP client: {}", e),
            CliError::Compose(e) => write!(f, "composition: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ZoomTable(e) => Some(e),
            CliError::Grid(e) => Some(e),
            CliError::Credential(e) => Some(e),
            CliError::Style(e) => Some(e),
            CliError::Provider(e) => Some(e),
            CliError::Compose(e) => Some(e),
        }
    }
}
