//! Attendance codes, schema generations, and the per-employee day sheet.
//!
//! Every employee carries a fixed 31-slot attendance sheet for the current
//! month. Months shorter than 31 days simply ignore the trailing slots when
//! counting. Two schema generations govern which codes are accepted on the
//! wire and what an untouched slot means.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of attendance slots on every sheet, one per possible day of month.
pub const ATTENDANCE_SLOTS: usize = 31;

/// A single day's attendance marking.
///
/// Each code contributes a fixed weight of days-worked to the monthly
/// attendance count: present counts 1, half-day 0.5, double-pay 2, and
/// absent or unset days count 0.
///
/// # Example
///
/// ```
/// use salary_engine::models::AttendanceCode;
///
/// let code = AttendanceCode::from_symbol("PP").unwrap();
/// assert_eq!(code, AttendanceCode::DoubleShift);
/// assert_eq!(code.symbol(), "PP");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceCode {
    /// No marking recorded for the day.
    #[serde(rename = "NONE")]
    Unset,
    /// Present for a full day (weight 1).
    #[serde(rename = "P")]
    Present,
    /// Absent (weight 0).
    #[serde(rename = "A")]
    Absent,
    /// Present for half a day (weight 0.5).
    #[serde(rename = "H")]
    HalfDay,
    /// Double-pay day, typically overtime or holiday work (weight 2).
    #[serde(rename = "PP")]
    DoubleShift,
}

impl AttendanceCode {
    /// Parses a wire symbol into a code.
    ///
    /// Symbols are matched exactly; lowercase forms are not accepted.
    pub fn from_symbol(symbol: &str) -> EngineResult<Self> {
        match symbol {
            "NONE" => Ok(Self::Unset),
            "P" => Ok(Self::Present),
            "A" => Ok(Self::Absent),
            "H" => Ok(Self::HalfDay),
            "PP" => Ok(Self::DoubleShift),
            other => Err(EngineError::UnknownAttendanceCode {
                code: other.to_string(),
            }),
        }
    }

    /// Returns the wire symbol for this code.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Unset => "NONE",
            Self::Present => "P",
            Self::Absent => "A",
            Self::HalfDay => "H",
            Self::DoubleShift => "PP",
        }
    }

    /// Returns the symbol used in rendered reports, where an unset day
    /// is shown as a dash rather than its wire symbol.
    pub fn display_symbol(&self) -> &'static str {
        match self {
            Self::Unset => "-",
            other => other.symbol(),
        }
    }

    /// Returns the days-worked weight this code contributes to the
    /// monthly attendance count.
    pub fn day_weight(&self) -> Decimal {
        match self {
            Self::Unset | Self::Absent => Decimal::ZERO,
            Self::Present => Decimal::ONE,
            Self::HalfDay => Decimal::new(5, 1),
            Self::DoubleShift => Decimal::TWO,
        }
    }
}

/// Attendance schema generation.
///
/// The first generation predates the explicit unset marker: records carry
/// only `P`, `A`, `H`, and `PP`, and a day nobody touched reads as present.
/// The second generation adds `NONE` so that untouched days are stored
/// explicitly and count zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceSchema {
    /// Legacy generation: no unset marker, untouched days read as present.
    V1,
    /// Current generation: untouched days are stored as `NONE`.
    V2,
}

impl AttendanceSchema {
    /// Parses a schema label such as `"v1"` or `"V2"`.
    pub fn from_label(label: &str) -> EngineResult<Self> {
        match label.to_ascii_lowercase().as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            other => Err(EngineError::ConfigParse {
                path: "attendance schema".to_string(),
                message: format!("unknown schema label '{}' (expected v1 or v2)", other),
            }),
        }
    }

    /// Returns the code an untouched slot carries under this generation.
    pub fn default_code(&self) -> AttendanceCode {
        match self {
            Self::V1 => AttendanceCode::Present,
            Self::V2 => AttendanceCode::Unset,
        }
    }

    /// Returns a fresh sheet with every slot set to this generation's
    /// default code.
    pub fn default_sheet(&self) -> AttendanceSheet {
        AttendanceSheet::filled(self.default_code())
    }

    /// Checks that a code is representable under this generation.
    ///
    /// The legacy generation has no unset marker, so `NONE` is rejected
    /// exactly as an unrecognized symbol would be.
    pub fn validate(&self, code: AttendanceCode) -> EngineResult<()> {
        if *self == Self::V1 && code == AttendanceCode::Unset {
            return Err(EngineError::UnknownAttendanceCode {
                code: code.symbol().to_string(),
            });
        }
        Ok(())
    }

    /// Parses a wire symbol and validates it against this generation.
    pub fn parse_symbol(&self, symbol: &str) -> EngineResult<AttendanceCode> {
        let code = AttendanceCode::from_symbol(symbol)?;
        self.validate(code)?;
        Ok(code)
    }

    /// Builds a full sheet from a list of wire symbols.
    ///
    /// Lists shorter than 31 entries are padded with this generation's
    /// default code; lists longer than 31 entries are rejected.
    pub fn sheet_from_symbols<S: AsRef<str>>(&self, symbols: &[S]) -> EngineResult<AttendanceSheet> {
        if symbols.len() > ATTENDANCE_SLOTS {
            return Err(EngineError::Validation {
                field: "attendance".to_string(),
                message: format!(
                    "expected at most {} days, got {}",
                    ATTENDANCE_SLOTS,
                    symbols.len()
                ),
            });
        }
        let mut sheet = self.default_sheet();
        for (day, symbol) in symbols.iter().enumerate() {
            sheet.set(day, self.parse_symbol(symbol.as_ref())?);
        }
        Ok(sheet)
    }
}

impl Default for AttendanceSchema {
    /// Defaults to the current generation.
    fn default() -> Self {
        Self::V2
    }
}

/// A fixed 31-slot attendance sheet.
///
/// Slot `i` holds the marking for day `i + 1` of the month. Sheets are
/// stored and serialized in the current schema generation, so untouched
/// slots appear as `NONE` on the wire.
///
/// # Example
///
/// ```
/// use salary_engine::models::{AttendanceCode, AttendanceSheet};
///
/// let mut sheet = AttendanceSheet::default();
/// sheet.set(0, AttendanceCode::Present);
/// assert_eq!(sheet.get(0), AttendanceCode::Present);
/// assert_eq!(sheet.get(1), AttendanceCode::Unset);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttendanceSheet([AttendanceCode; ATTENDANCE_SLOTS]);

impl AttendanceSheet {
    /// Returns a sheet with every slot set to the same code.
    pub fn filled(code: AttendanceCode) -> Self {
        Self([code; ATTENDANCE_SLOTS])
    }

    /// Converts a 0-based wire day index into a slot index, rejecting
    /// anything outside `[0, 31)`.
    pub fn day_index(day: i64) -> EngineResult<usize> {
        if (0..ATTENDANCE_SLOTS as i64).contains(&day) {
            Ok(day as usize)
        } else {
            Err(EngineError::InvalidDay { day })
        }
    }

    /// Returns the code stored for a 0-based day.
    ///
    /// # Panics
    ///
    /// Panics if `day >= 31`. Wire input goes through [`Self::day_index`]
    /// first.
    pub fn get(&self, day: usize) -> AttendanceCode {
        self.0[day]
    }

    /// Stores a code for a 0-based day.
    ///
    /// # Panics
    ///
    /// Panics if `day >= 31`. Wire input goes through [`Self::day_index`]
    /// first.
    pub fn set(&mut self, day: usize, code: AttendanceCode) {
        self.0[day] = code;
    }

    /// Returns the underlying slots in day order.
    pub fn codes(&self) -> &[AttendanceCode; ATTENDANCE_SLOTS] {
        &self.0
    }
}

impl Default for AttendanceSheet {
    /// Returns a sheet with every slot unset.
    fn default() -> Self {
        Self::filled(AttendanceCode::Unset)
    }
}

impl<'de> Deserialize<'de> for AttendanceSheet {
    /// Accepts up to 31 codes, padding missing trailing slots with `NONE`.
    ///
    /// Serde has no schema generation in scope, so this padding is always
    /// the explicit unset marker and is only correct for second-generation
    /// data. First-generation symbol lists, where an untouched day must
    /// read as present, go through
    /// [`AttendanceSchema::sheet_from_symbols`] instead.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let codes = Vec::<AttendanceCode>::deserialize(deserializer)?;
        if codes.len() > ATTENDANCE_SLOTS {
            return Err(serde::de::Error::invalid_length(
                codes.len(),
                &"at most 31 attendance codes",
            ));
        }
        let mut slots = [AttendanceCode::Unset; ATTENDANCE_SLOTS];
        slots[..codes.len()].copy_from_slice(&codes);
        Ok(Self(slots))
    }
}
