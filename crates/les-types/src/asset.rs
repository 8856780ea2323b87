use std::fmt;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::error::TypeError;

/// Longest permitted credit asset code.
pub const MAX_ASSET_CODE_LEN: usize = 12;

/// An asset held on a trust line or traded by an offer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Asset {
    /// The ledger's native currency.
    Native,
    /// A credit asset: an issuer-scoped code.
    Credit { code: String, issuer: AccountId },
}

impl Asset {
    /// Build a credit asset, validating the code.
    pub fn credit(code: impl Into<String>, issuer: AccountId) -> Result<Self, TypeError> {
        let code = code.into();
        check_code(&code)?;
        Ok(Self::Credit { code, issuer })
    }

    /// Check a value that was built without [`Asset::credit`], such as one
    /// decoded from the wire.
    pub fn validate(&self) -> Result<(), TypeError> {
        match self {
            Self::Native => Ok(()),
            Self::Credit { code, .. } => check_code(code),
        }
    }

    /// Returns `true` for the native asset.
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    /// The asset code, or `"native"`.
    pub fn code(&self) -> &str {
        match self {
            Self::Native => "native",
            Self::Credit { code, .. } => code,
        }
    }
}

fn check_code(code: &str) -> Result<(), TypeError> {
    if code.is_empty()
        || code.len() > MAX_ASSET_CODE_LEN
        || !code.bytes().all(|b| b.is_ascii_alphanumeric())
    {
        return Err(TypeError::InvalidAssetCode(code.to_string()));
    }
    Ok(())
}

impl fmt::Debug for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Asset({self})")
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Credit { code, issuer } => write!(f, "{code}:{}", issuer.short_id()),
        }
    }
}

/// Offer price as a rational `n / d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

impl Price {
    /// Build a price; the denominator must be positive.
    pub fn new(n: i32, d: i32) -> Result<Self, TypeError> {
        let price = Self { n, d };
        price.validate()?;
        Ok(price)
    }

    pub fn validate(&self) -> Result<(), TypeError> {
        if self.d <= 0 {
            return Err(TypeError::InvalidPrice {
                n: self.n,
                d: self.d,
            });
        }
        Ok(())
    }

    /// Floating-point approximation, for ordering and display only.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.n) / f64::from(self.d)
    }
}
