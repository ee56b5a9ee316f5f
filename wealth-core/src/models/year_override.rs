use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// User-pinned values for one calendar year. Unset fields keep the computed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearOverride {
    pub gross_income: Option<Decimal>,
    pub income_tax: Option<Decimal>,
    pub social_contributions: Option<Decimal>,
    pub deductions: Option<Decimal>,
}

impl YearOverride {
    pub fn is_empty(&self) -> bool {
        self.gross_income.is_none()
            && self.income_tax.is_none()
            && self.social_contributions.is_none()
            && self.deductions.is_none()
    }

    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn merged_with(
        self,
        other: YearOverride,
    ) -> YearOverride {
        YearOverride {
            gross_income: other.gross_income.or(self.gross_income),
            income_tax: other.income_tax.or(self.income_tax),
            social_contributions: other.social_contributions.or(self.social_contributions),
            deductions: other.deductions.or(self.deductions),
        }
    }
}

/// Caller-owned per-year overrides, passed alongside the intervals on every
/// projection. The engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideMap(BTreeMap<i32, YearOverride>);

impl OverrideMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the fields set in `pinned` for `year`, keeping previously pinned
    /// fields that `pinned` leaves unset.
    pub fn pin(
        &mut self,
        year: i32,
        pinned: YearOverride,
    ) {
        let entry = self.0.entry(year).or_default();
        *entry = entry.merged_with(pinned);
        if entry.is_empty() {
            self.0.remove(&year);
        }
    }

    /// Removes every pinned field for `year`, returning what was pinned.
    pub fn clear(
        &mut self,
        year: i32,
    ) -> Option<YearOverride> {
        self.0.remove(&year)
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn get(
        &self,
        year: i32,
    ) -> Option<&YearOverride> {
        self.0.get(&year)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &YearOverride)> {
        self.0.iter().map(|(year, o)| (*year, o))
    }
}

impl FromIterator<(i32, YearOverride)> for OverrideMap {
    fn from_iter<T: IntoIterator<Item = (i32, YearOverride)>>(iter: T) -> Self {
        let mut map = OverrideMap::new();
        for (year, pinned) in iter {
            map.pin(year, pinned);
        }
        map
    }
}
