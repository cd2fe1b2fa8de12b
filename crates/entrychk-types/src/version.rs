//! Compiled-in format and tool version strings.
//!
//! Version strings use the `major.minor YYYY-MM-DD` format. The semantic
//! checkers compare document members against these constants with exact
//! string equality, so bumping one here invalidates previously formed
//! documents on purpose.

/// Version of the `entrychk` toolkit itself.
pub const ENTRYCHK_VERSION: &str = "0.40 2022-03-15";

/// Format version of the `.info.json` document.
pub const INFO_VERSION: &str = "1.9 2022-03-15";

/// Format version of the `.author.json` document.
pub const AUTHOR_VERSION: &str = "1.12 2022-03-15";

/// Version of the rule-count engine.
pub const IOCCCSIZE_VERSION: &str = "28.10 2022-03-15";

/// Version of the submission-forming tool whose documents we validate.
pub const MKIOCCCENTRY_VERSION: &str = "0.40 2022-03-15";

/// Version of the filename-check tool.
pub const FNAMCHK_VERSION: &str = "0.6 2022-03-15";

/// Version of the archive-check tool.
pub const TXZCHK_VERSION: &str = "0.10 2022-03-15";

/// The distinguished string every object's `no_comment` member must carry.
pub const NO_COMMENT: &str =
    "mandatory comment: because comments were removed from the original JSON spec";

/// Epoch label every timestamp group must repeat verbatim.
pub const TIMESTAMP_EPOCH: &str = "Thu Jan 1 00:00:00 1970 UTC";

/// Minimum acceptable `formed_timestamp` (seconds since the epoch).
pub const MIN_TIMESTAMP: i64 = 1_652_598_487;
