//! Ethereum denomination definitions.

/// Denominations used in the Ethereum ecosystem.
///
/// Each unit defines how many smallest-unit (wei) digits make up one whole
/// unit; see [`Units::decimals`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::EnumString, strum::VariantArray)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Units {
    /// 10^18 wei.
    Eth,
    /// 10^15 wei.
    Finney,
    /// 10^12 wei.
    Microether,
    /// 10^9 wei.
    Gwei,
    /// 10^6 wei.
    Mwei,
    /// 10^3 wei.
    Kwei,
    /// The smallest indivisible unit.
    Wei,
}

impl Units {
    /// Number of smallest-unit digits that make up one whole unit.
    pub const fn decimals(&self) -> usize {
        match self {
            Self::Eth => 18,
            Self::Finney => 15,
            Self::Microether => 12,
            Self::Gwei => 9,
            Self::Mwei => 6,
            Self::Kwei => 3,
            Self::Wei => 0,
        }
    }
}

impl Default for Units {
    #[inline]
    fn default() -> Self {
        Self::Eth
    }
}
