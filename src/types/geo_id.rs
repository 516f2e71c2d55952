use std::{fmt, sync::Arc};

use super::geo_type::GeoType;

/// Stable geographic join key for a state or county.
/// Keeps the FIPS text with leading zeros, e.g. "01" for a state, "01001" for a county.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeoId {
    ty: GeoType,
    id: Arc<str>,
}

impl GeoId {
    /// Parse a raw FIPS code, zero-padding it to the width of `ty`.
    /// Returns `None` for empty, non-numeric or over-long codes.
    pub fn new(ty: GeoType, raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let width = ty.width();
        if raw.is_empty() || raw.len() > width || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self { ty, id: Arc::from(format!("{:0>width$}", raw, width = width)) })
    }

    #[inline] pub fn ty(&self) -> GeoType { self.ty }

    #[inline] pub fn id(&self) -> &str { &self.id }

    /// Returns a new `GeoId` corresponding to the higher-level `GeoType`
    /// by truncating this GeoId's string to the correct prefix length.
    pub fn to_parent(&self, parent_ty: GeoType) -> GeoId {
        let len = parent_ty.width();

        // If the id is shorter than expected, just take the full id.
        let prefix: Arc<str> = Arc::from(&self.id[..self.id.len().min(len)]);

        GeoId { ty: parent_ty, id: prefix }
    }
}

impl fmt::Display for GeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
