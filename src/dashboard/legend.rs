use smallvec::SmallVec;

use crate::dashboard::sample_data::GenreEntry;

/// Two-column legend for the genre pie, built straight from the genre list
/// without going through the chart library.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreLegend {
    pub left: SmallVec<[GenreEntry; 4]>,
    pub right: SmallVec<[GenreEntry; 4]>,
}

impl GenreLegend {
    /// Splits `genres` so the left column holds the smaller half
    /// (2 of 5 for the sample list).
    #[must_use]
    pub fn build(genres: &[GenreEntry]) -> Self {
        let (left, right) = genres.split_at(genres.len() / 2);
        Self {
            left: left.iter().copied().collect(),
            right: right.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &GenreEntry> {
        self.left.iter().chain(self.right.iter())
    }
}
