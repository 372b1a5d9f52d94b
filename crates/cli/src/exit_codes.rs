//! CLI Exit Code Registry
//!
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! | 0    | Success                                        |
//! | 2    | Usage error (bad args, missing policy function)|
//! | 3    | Invalid config file                            |
//! | 4    | Invalid dataset (validation or parse failure)  |
//! | 5    | Runtime failure (IO, serialization)            |

use salesrank_report::ReportError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Config file could not be parsed or failed validation.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// Dataset is malformed or could not be parsed.
pub const EXIT_INVALID_DATASET: u8 = 4;

/// IO or serialization failure.
pub const EXIT_RUNTIME: u8 = 5;

/// Map an engine error to its exit code.
pub fn report_exit_code(err: &ReportError) -> u8 {
    match err {
        ReportError::ConfigParse(_) | ReportError::ConfigValidation(_) => EXIT_INVALID_CONFIG,
        ReportError::MalformedData(_) | ReportError::Parse(_) => EXIT_INVALID_DATASET,
        // Only library callers passing closures can hit this; the CLI binds DefaultPolicy.
        ReportError::MissingPolicy(_) => EXIT_USAGE,
        ReportError::Io(_) => EXIT_RUNTIME,
    }
}
