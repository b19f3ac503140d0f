use std::fmt::{Debug, Formatter};

const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-capacity bit set stored inline, `WORDS * 64` bits wide.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitSet<const WORDS: usize> {
    words: [u64; WORDS],
}

impl<const WORDS: usize> Default for BitSet<WORDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WORDS: usize> Debug for BitSet<WORDS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<const WORDS: usize> BitSet<WORDS> {
    pub const CAPACITY: usize = WORDS * WORD_BITS;

    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    #[inline]
    const fn locate(index: usize) -> (usize, u64) {
        assert!(index < Self::CAPACITY, "bit index out of range");
        (index / WORD_BITS, 1 << (index % WORD_BITS))
    }

    #[inline]
    pub fn insert(&mut self, index: usize) {
        let (word, mask) = Self::locate(index);
        self.words[word] |= mask;
    }

    #[inline]
    pub fn remove(&mut self, index: usize) {
        let (word, mask) = Self::locate(index);
        self.words[word] &= !mask;
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        if value {
            self.insert(index)
        } else {
            self.remove(index)
        }
    }

    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        let (word, mask) = Self::locate(index);
        self.words[word] & mask != 0
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Indices of the set bits, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_index, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                (rest != 0).then(|| {
                    let bit = rest.trailing_zeros() as usize;
                    rest &= rest - 1;
                    word_index * WORD_BITS + bit
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BitSet;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_and_remove_across_words() {
        let mut set = BitSet::<2>::new();
        assert!(set.is_empty());

        set.insert(3);
        set.insert(64);
        set.insert(127);
        assert!(set.contains(3) && set.contains(64) && set.contains(127));
        assert!(!set.contains(63));
        assert_eq!(set.len(), 3);

        set.remove(64);
        assert!(!set.contains(64));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 127]);
    }

    #[test]
    fn set_mirrors_flag() {
        let mut set = BitSet::<1>::default();
        set.set(10, true);
        set.set(11, false);
        assert!(set.contains(10));
        assert!(!set.contains(11));
        set.set(10, false);
        assert!(set.is_empty());
    }

    #[test]
    #[should_panic(expected = "bit index out of range")]
    fn out_of_range_panics() {
        BitSet::<1>::new().insert(64);
    }
}
