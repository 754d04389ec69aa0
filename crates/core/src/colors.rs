//! Color Sets
//!
//! A sorted, de-duplicated set of color names used by the shop filters.
//! Products keep their own swatch order; only the selection is a set.

use smallvec::SmallVec;

/// A set of selected color names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSet {
    colors: SmallVec<[String; 5]>,
}

impl ColorSet {
    /// Create a color set, sorting and de-duplicating the names.
    #[must_use]
    pub fn new(colors: SmallVec<[String; 5]>) -> Self {
        let mut set = Self { colors };

        set.colors.sort();
        set.colors.dedup();

        set
    }

    /// Create a color set from string slices.
    pub fn from_strs(colors: &[&str]) -> Self {
        colors.iter().copied().collect()
    }

    /// Check if the set contains a color (exact, case-sensitive).
    pub fn contains(&self, color: &str) -> bool {
        self.position(color).is_ok()
    }

    /// Add a color. Returns `false` if it was already selected.
    pub fn insert(&mut self, color: &str) -> bool {
        match self.position(color) {
            Ok(_) => false,
            Err(pos) => {
                self.colors.insert(pos, color.to_string());
                true
            }
        }
    }

    /// Remove a color. Returns `false` if it was not selected.
    pub fn remove(&mut self, color: &str) -> bool {
        match self.position(color) {
            Ok(pos) => {
                self.colors.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Select the color if unselected, otherwise deselect it.
    ///
    /// Returns whether the color is selected afterwards.
    pub fn toggle(&mut self, color: &str) -> bool {
        if self.remove(color) {
            false
        } else {
            self.insert(color)
        }
    }

    /// Check if any of the given colors is in the set.
    pub fn intersects<'a>(&self, colors: impl IntoIterator<Item = &'a str>) -> bool {
        colors.into_iter().any(|color| self.contains(color))
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of selected colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Iterate over the selected colors in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    fn position(&self, color: &str) -> Result<usize, usize> {
        self.colors
            .binary_search_by(|probe| probe.as_str().cmp(color))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ColorSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|color| color.as_ref().to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_and_dedups() {
        let set = ColorSet::from_strs(&["Pink", "Black", "Pink", "Gold"]);

        assert_eq!(set.iter().collect::<Vec<_>>(), ["Black", "Gold", "Pink"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn contains_is_case_sensitive() {
        let set = ColorSet::from_strs(&["Black"]);

        assert!(set.contains("Black"));
        assert!(!set.contains("black"));
    }

    #[test]
    fn insert_and_remove() {
        let mut set = ColorSet::default();

        assert!(set.insert("Tan"));
        assert!(!set.insert("Tan"));
        assert!(set.insert("Beige"));
        assert_eq!(set.iter().collect::<Vec<_>>(), ["Beige", "Tan"]);

        assert!(set.remove("Tan"));
        assert!(!set.remove("Tan"));
        assert_eq!(set.iter().collect::<Vec<_>>(), ["Beige"]);
    }

    #[test]
    fn toggle_flips_selection() {
        let mut set = ColorSet::default();

        assert!(set.toggle("Red"));
        assert!(set.contains("Red"));
        assert!(!set.toggle("Red"));
        assert!(set.is_empty());
    }

    #[test]
    fn intersects_any_color() {
        let set = ColorSet::from_strs(&["Black", "Navy"]);

        assert!(set.intersects(["Brown", "Black"]));
        assert!(!set.intersects(["Brown", "Tan"]));
        assert!(!ColorSet::default().intersects(["Black"]));
    }
}
