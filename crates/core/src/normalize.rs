//! Positional alignment of the three migration inputs.
//!
//! Courses, instructors and items are matched purely by index. Nothing here
//! checks that the i-th elements describe the same reservation; the inputs
//! must already be sorted into matching order.

/// Drop the leading header element of a source array.
pub fn skip_header<T>(records: Vec<T>) -> Vec<T> {
    records.into_iter().skip(1).collect()
}

/// Number of trailing elements removed from each input by [`align`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropped {
    pub courses: usize,
    pub instructors: usize,
    pub items: usize,
}

impl Dropped {
    pub fn total(&self) -> usize {
        self.courses + self.instructors + self.items
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Three sequences of equal length, index-aligned.
#[derive(Debug, Clone)]
pub struct Aligned<C, I, T> {
    pub courses: Vec<C>,
    pub instructors: Vec<I>,
    pub items: Vec<T>,
    pub dropped: Dropped,
}

impl<C, I, T> Aligned<C, I, T> {
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Iterate over the aligned `(course, instructor, item)` triples.
    pub fn triples(&self) -> impl Iterator<Item = (&C, &I, &T)> {
        self.courses
            .iter()
            .zip(&self.instructors)
            .zip(&self.items)
            .map(|((c, i), t)| (c, i, t))
    }
}

/// Truncate all three sequences to the length of the shortest one.
///
/// Order is preserved and only trailing elements are removed. Mismatched
/// lengths are not an error.
pub fn align<C, I, T>(
    mut courses: Vec<C>,
    mut instructors: Vec<I>,
    mut items: Vec<T>,
) -> Aligned<C, I, T> {
    let len = courses.len().min(instructors.len()).min(items.len());
    let dropped = Dropped {
        courses: courses.len() - len,
        instructors: instructors.len() - len,
        items: items.len() - len,
    };

    courses.truncate(len);
    instructors.truncate(len);
    items.truncate(len);

    Aligned {
        courses,
        instructors,
        items,
        dropped,
    }
}
