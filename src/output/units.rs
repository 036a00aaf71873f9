//! Human-readable size and percentage formatting
//!
//! Values are truncated to one decimal digit, never rounded. Field
//! widths are fixed so the tree columns stay aligned.

/// Binary magnitude of a byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    B,
    KiB,
    MiB,
    GiB,
    TiB,
    PiB,
}

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;
const TIB: u64 = 1 << 40;
const PIB: u64 = 1 << 50;

impl Unit {
    /// Smallest power-of-1024 scale whose value stays below 1024.
    /// Everything from 1024 PiB up stays in PiB.
    pub fn select(bytes: u64) -> Self {
        if bytes < KIB {
            Unit::B
        } else if bytes < MIB {
            Unit::KiB
        } else if bytes < GIB {
            Unit::MiB
        } else if bytes < TIB {
            Unit::GiB
        } else if bytes < PIB {
            Unit::TiB
        } else {
            Unit::PiB
        }
    }

    pub fn divisor(self) -> u64 {
        match self {
            Unit::B => 1,
            Unit::KiB => KIB,
            Unit::MiB => MIB,
            Unit::GiB => GIB,
            Unit::TiB => TIB,
            Unit::PiB => PIB,
        }
    }

    /// Fixed-width suffix, one leading space and padded to four chars.
    pub fn label(self) -> &'static str {
        match self {
            Unit::B => " B  ",
            Unit::KiB => " KiB",
            Unit::MiB => " MiB",
            Unit::GiB => " GiB",
            Unit::TiB => " TiB",
            Unit::PiB => " PiB",
        }
    }
}

/// Truncate to one decimal digit: 12.37 becomes 12.3, not 12.4.
pub fn truncate1(value: f64) -> f64 {
    (value * 10.0).trunc() / 10.0
}

/// Size column: six-character value, unit suffix, one trailing space.
pub fn format_size(bytes: u64) -> String {
    let unit = Unit::select(bytes);
    let value = truncate1(bytes as f64 / unit.divisor() as f64);
    format!("{:6.1}{} ", value, unit.label())
}

/// Percentage column: five-character value of `100 * bytes / total`,
/// truncated, with a literal `%` marker. A zero total formats as 0.0.
pub fn format_percent(bytes: u64, total: u64) -> String {
    let value = if total == 0 {
        0.0
    } else {
        truncate1(100.0 * bytes as f64 / total as f64)
    };
    format!("{:5.1}% ", value)
}
