//! Passage ranges: contiguous spans of ayat within a surah.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of surahs in the mushaf.
pub const SURAH_COUNT: i32 = 114;

/// A contiguous span of ayat within one surah, identified by surah number
/// and inclusive start/end ayah indices (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassageRange {
    pub surah: i32,
    pub start_ayah: i32,
    pub end_ayah: i32,
}

impl PassageRange {
    pub fn new(surah: i32, start_ayah: i32, end_ayah: i32) -> Self {
        Self {
            surah,
            start_ayah,
            end_ayah,
        }
    }

    /// Validate surah and ayah bounds.
    ///
    /// Ayah indices are only checked for ordering and positivity; per-surah
    /// ayah counts are not modelled here.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.surah < 1 || self.surah > SURAH_COUNT {
            return Err(CoreError::Validation(format!(
                "surah must be between 1 and {SURAH_COUNT}, got {}",
                self.surah
            )));
        }
        if self.start_ayah < 1 {
            return Err(CoreError::Validation(format!(
                "start_ayah must be >= 1, got {}",
                self.start_ayah
            )));
        }
        if self.end_ayah < self.start_ayah {
            return Err(CoreError::Validation(format!(
                "end_ayah ({}) must be >= start_ayah ({})",
                self.end_ayah, self.start_ayah
            )));
        }
        Ok(())
    }

    /// Number of ayat covered by the range.
    pub fn ayah_count(&self) -> i32 {
        self.end_ayah - self.start_ayah + 1
    }
}
