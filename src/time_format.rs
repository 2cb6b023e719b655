//! Timestamp formatters for the Time column of a raw view.
//!
//! Record timestamps are elapsed seconds since session start. The main
//! entry point for users is [`TimeFormat`], which selects between an
//! elapsed-time rendering and an absolute wall-clock rendering anchored
//! at the session start. The default (`Auto`) renders elapsed time with
//! millisecond resolution.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// TimeResolution
// ─────────────────────────────────────────────────────────────────────────────

/// Granularity of the sub-second portion shown in a time label.
///
/// Variants are ordered from coarsest (`Seconds`) to finest
/// (`Microseconds`); the ordering is used to clamp a formatter's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeResolution {
    /// No sub-second digits.
    Seconds,
    /// Three decimal digits.
    Milliseconds,
    /// Six decimal digits.
    Microseconds,
}

impl TimeResolution {
    /// Number of fractional digits this resolution renders.
    pub fn digits(&self) -> usize {
        match self {
            TimeResolution::Seconds => 0,
            TimeResolution::Milliseconds => 3,
            TimeResolution::Microseconds => 6,
        }
    }
}

impl std::fmt::Display for TimeResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeResolution::Seconds => write!(f, "Seconds"),
            TimeResolution::Milliseconds => write!(f, "Milliseconds"),
            TimeResolution::Microseconds => write!(f, "Microseconds"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ElapsedFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// Renders elapsed seconds since session start.
///
/// Output is plain seconds (`12.345`) below one minute, `MM:SS.mmm`
/// below one hour, and `HH:MM:SS.mmm` beyond that. The fractional part
/// follows [`resolution`](Self::resolution). Negative timestamps are
/// rendered with a leading minus; non-finite values render as `"--"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElapsedFormatter {
    /// Sub-second digits to render.
    pub resolution: TimeResolution,
    /// Always use the `HH:MM:SS` shape, even for small values.
    pub force_hms: bool,
}

impl Default for ElapsedFormatter {
    fn default() -> Self {
        Self {
            resolution: TimeResolution::Milliseconds,
            force_hms: false,
        }
    }
}

impl ElapsedFormatter {
    /// Format `elapsed_secs` (seconds since session start).
    pub fn format(&self, elapsed_secs: f64) -> String {
        if !elapsed_secs.is_finite() {
            return "--".to_string();
        }
        let sign = if elapsed_secs < 0.0 { "-" } else { "" };
        let abs = elapsed_secs.abs();
        let digits = self.resolution.digits();

        if !self.force_hms && abs < 60.0 {
            return format!("{}{:.*}", sign, digits, abs);
        }

        let total = abs.floor() as u64;
        let frac = abs - total as f64;
        let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);

        let frac_str = if digits > 0 {
            // "0.mmm…" without the leading zero
            format!("{:.*}", digits, frac)[1..].to_string()
        } else {
            String::new()
        };

        if h > 0 || self.force_hms {
            format!("{}{:02}:{:02}:{:02}{}", sign, h, m, s, frac_str)
        } else {
            format!("{}{:02}:{:02}{}", sign, m, s, frac_str)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WallClockFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// Renders the absolute wall-clock time of a row, computed as session
/// start plus the row's elapsed seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallClockFormatter {
    /// Sub-second digits to render after `HH:MM:SS`.
    pub resolution: TimeResolution,
    /// Also show the calendar date (`YYYY-MM-DD`) before the time.
    pub show_date: bool,
}

impl Default for WallClockFormatter {
    fn default() -> Self {
        Self {
            resolution: TimeResolution::Milliseconds,
            show_date: false,
        }
    }
}

impl WallClockFormatter {
    /// Format the row observed `elapsed_secs` after `session_start`.
    /// Non-finite offsets render as `"--"`.
    pub fn format(&self, session_start: DateTime<Local>, elapsed_secs: f64) -> String {
        if !elapsed_secs.is_finite() {
            return "--".to_string();
        }
        let micros = (elapsed_secs * 1e6).round() as i64;
        let at = session_start + Duration::microseconds(micros);

        let base = if self.show_date {
            at.format("%Y-%m-%d %H:%M:%S").to_string()
        } else {
            at.format("%H:%M:%S").to_string()
        };

        use chrono::Timelike;
        match self.resolution {
            TimeResolution::Seconds => base,
            TimeResolution::Milliseconds => {
                format!("{}.{:03}", base, at.nanosecond() / 1_000_000)
            }
            TimeResolution::Microseconds => {
                format!("{}.{:06}", base, at.nanosecond() / 1_000)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TimeFormat  (the main enum exported to users)
// ─────────────────────────────────────────────────────────────────────────────

/// Selects how the Time column of a raw view is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// Elapsed time with default settings (millisecond resolution).
    Auto,
    /// Elapsed time since session start.
    Elapsed(ElapsedFormatter),
    /// Absolute wall-clock time anchored at the session start.
    WallClock(WallClockFormatter),
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat::Auto
    }
}

impl TimeFormat {
    /// Convenience constructor for an `Elapsed` variant.
    pub fn elapsed(ef: ElapsedFormatter) -> Self {
        TimeFormat::Elapsed(ef)
    }

    /// Convenience constructor for a `WallClock` variant.
    pub fn wall_clock(wf: WallClockFormatter) -> Self {
        TimeFormat::WallClock(wf)
    }

    /// Return `true` if this is the `Auto` selector.
    pub fn is_auto(&self) -> bool {
        matches!(self, TimeFormat::Auto)
    }

    /// Format a row's timestamp. `session_start` is only consulted by
    /// the wall-clock variant.
    pub fn format(&self, session_start: DateTime<Local>, elapsed_secs: f64) -> String {
        match self {
            TimeFormat::Auto => ElapsedFormatter::default().format(elapsed_secs),
            TimeFormat::Elapsed(ef) => ef.format(elapsed_secs),
            TimeFormat::WallClock(wf) => wf.format(session_start, elapsed_secs),
        }
    }
}

// tests live in `tests/time_format.rs`
