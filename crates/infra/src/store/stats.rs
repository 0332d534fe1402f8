//! Store summary figures.

/// Count and id range of a store's entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StoreStatistics<Id> {
    pub count: usize,
    pub min_id: Option<Id>,
    pub max_id: Option<Id>,
}

impl<Id: Ord + Copy> StoreStatistics<Id> {
    pub(crate) fn from_ids(ids: impl Iterator<Item = Id>) -> Self {
        let mut stats = Self {
            count: 0,
            min_id: None,
            max_id: None,
        };
        for id in ids {
            stats.count += 1;
            stats.min_id = Some(stats.min_id.map_or(id, |m| m.min(id)));
            stats.max_id = Some(stats.max_id.map_or(id, |m| m.max(id)));
        }
        stats
    }
}

impl<Id: core::fmt::Display> core::fmt::Display for StoreStatistics<Id> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (&self.min_id, &self.max_id) {
            (Some(min), Some(max)) => write!(
                f,
                "Total Items: {}, Min ID: {}, Max ID: {}",
                self.count, min, max
            ),
            _ => f.write_str("No items in store"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_statistics() {
        let stats = StoreStatistics::<u32>::from_ids(std::iter::empty());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.min_id, None);
        assert_eq!(stats.to_string(), "No items in store");
    }

    #[test]
    fn tracks_range() {
        let stats = StoreStatistics::from_ids([7_u32, 2, 9, 4].into_iter());
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min_id, Some(2));
        assert_eq!(stats.max_id, Some(9));
        assert_eq!(stats.to_string(), "Total Items: 4, Min ID: 2, Max ID: 9");
    }
}
