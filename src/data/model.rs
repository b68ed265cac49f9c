// ---------------------------------------------------------------------------
// Tip – one entry of the 30-day program
// ---------------------------------------------------------------------------

/// A single breakfast suggestion. All fields are fixed at compile time;
/// the catalog never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    /// 1-based position in the program; also the display order.
    pub id: u32,
    /// Day label shown as the card heading ("Day 1", "Day 2", …).
    /// Kept as separate text rather than derived from `id`.
    pub day: &'static str,
    /// Short name of the suggestion, always visible.
    pub title: &'static str,
    /// Longer text, shown only while the card is expanded.
    pub description: &'static str,
    /// Handle to the bundled picture for this tip.
    pub image: ImageRef,
}

// ---------------------------------------------------------------------------
// ImageRef – opaque handle to a bundled asset
// ---------------------------------------------------------------------------

/// Opaque reference to one of the images shipped with the binary.
/// Resolved to an actual texture by the UI layer; the data layer only
/// guarantees that each tip carries a distinct reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageRef(pub(crate) u32);

// ---------------------------------------------------------------------------
// Catalog – the complete ordered collection
// ---------------------------------------------------------------------------

/// The fixed, ordered collection of tips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tips: Vec<Tip>,
}

impl Catalog {
    /// Wrap an ordered list of tips.
    ///
    /// Ids must be contiguous and start at 1; `get` relies on this to turn
    /// an id into an index.
    pub fn from_tips(tips: Vec<Tip>) -> Self {
        debug_assert!(
            tips.iter().enumerate().all(|(i, t)| t.id as usize == i + 1),
            "tip ids must be contiguous and start at 1"
        );
        Catalog { tips }
    }

    /// Number of tips.
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Iterate over the tips in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Tip> {
        self.tips.iter()
    }

    /// Look up a tip by id.
    pub fn get(&self, id: u32) -> Option<&Tip> {
        // ids are contiguous from 1, so the index is id - 1
        let idx = id.checked_sub(1)? as usize;
        self.tips.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tip(id: u32) -> Tip {
        Tip {
            id,
            day: "Day",
            title: "title",
            description: "description",
            image: ImageRef(id),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_tips(vec![tip(1), tip(2), tip(3)]);
        assert_eq!(catalog.get(2).map(|t| t.id), Some(2));
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(4).is_none());
    }
}
