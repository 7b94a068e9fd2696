//! Application context built once at startup.

use crate::collection::RentalCollection;
use crate::date_range::DateRange;
use crate::error::{LoadError, Result};
use crate::record::RentalRecord;
use std::path::Path;

/// The loaded record store plus its date bounds.
///
/// Constructed once and then shared read-only with the filter, the
/// aggregators and the renderer.
///
/// # Example
///
/// ```rust
/// use brd_core::context::AppContext;
/// use brd_core::date_range::DateRange;
///
/// let ctx = AppContext::from_csv_str(
///     "dteday,weathersit,holiday,casual,registered,cnt\n2011-01-01,1,0,1,2,3\n2011-01-02,2,0,4,5,9\n",
/// )
/// .unwrap();
/// let bounds = ctx.bounds();
/// assert_eq!(ctx.select(DateRange(bounds.start(), bounds.start())).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AppContext {
    collection: RentalCollection,
    bounds: DateRange,
}

impl AppContext {
    /// Wrap a loaded collection. Fails on an empty collection, which has no bounds.
    pub fn new(collection: RentalCollection) -> Result<Self> {
        let bounds = collection.bounds().ok_or(LoadError::Empty)?;
        Ok(Self { collection, bounds })
    }

    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::new(RentalCollection::from_csv_str(csv_data)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(RentalCollection::from_path(path)?)
    }

    pub fn collection(&self) -> &RentalCollection {
        &self.collection
    }

    /// `[min(date), max(date)]` of the loaded data.
    pub fn bounds(&self) -> DateRange {
        self.bounds
    }

    /// Filter with an already validated range.
    pub fn select(&self, range: DateRange) -> &[RentalRecord] {
        self.collection.filter(range)
    }

    /// Filter with raw user input, reordered and clamped to [`Self::bounds`] first.
    pub fn select_clamped(&self, picked: DateRange) -> (DateRange, &[RentalRecord]) {
        let range = picked.clamp_to(self.bounds);
        (range, self.collection.filter(range))
    }
}
