//! Loader and summary options.

/// Largest useful `length_decimals`; `f64` carries ~15 significant digits.
pub const MAX_LENGTH_DECIMALS: u32 = 15;

/// How strictly the TMG header line is checked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderCheck {
    /// A header line must be present; its content is ignored.
    #[default]
    Lenient,
    /// The header must read `TMG <version> simple`.
    Strict,
}

/// Options shared by the loader and the summary producer.
///
/// Typically built from command-line flags by the application crate.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    /// Header policy for [`load_tmg`](crate::load_tmg).  Default: `Lenient`.
    pub header: HeaderCheck,

    /// Decimal places kept on edge lengths in a
    /// [`GraphSummary`](crate::GraphSummary).  Default: 3.
    pub length_decimals: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { header: HeaderCheck::Lenient, length_decimals: 3 }
    }
}

impl GraphConfig {
    /// Round `miles` to `length_decimals` places.
    ///
    /// Rounds the exact binary value (ties to even), so `1.0005` stays
    /// `1.0` at three places.  Beyond [`MAX_LENGTH_DECIMALS`] an `f64` has
    /// no more digits to give and `miles` is returned unchanged.
    pub fn round_length(&self, miles: f64) -> f64 {
        if self.length_decimals > MAX_LENGTH_DECIMALS {
            return miles;
        }
        format!("{:.*}", self.length_decimals as usize, miles)
            .parse()
            .unwrap_or(miles)
    }
}
