use crate::error::{ChordError, ChordResult};

/// Odometer over per-position radices. Position 0 changes fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedRadix {
    digits: Vec<usize>,
    radices: Vec<usize>,
    end: bool,
}

impl MixedRadix {
    pub fn new(radices: Vec<usize>) -> ChordResult<Self> {
        if let Some(position) = radices.iter().position(|&r| r == 0) {
            return Err(ChordError::InvalidRadix { position });
        }

        Ok(Self {
            digits: vec![0; radices.len()],
            radices,
            end: false,
        })
    }

    pub fn uniform(base: usize, count: usize) -> ChordResult<Self> {
        Self::new(vec![base; count])
    }

    /// Current digit vector.
    pub fn get(&self) -> &[usize] {
        &self.digits
    }

    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    pub fn is_end(&self) -> bool {
        self.end
    }

    /// Number of vectors a fresh counter produces.
    pub fn total(&self) -> usize {
        self.radices.iter().product()
    }

    pub fn advance(&mut self) {
        if self.end {
            return;
        }

        for (digit, &radix) in self.digits.iter_mut().zip(&self.radices) {
            *digit += 1;
            if *digit < radix {
                return;
            }
            *digit = 0;
        }

        // Carry ran past the last position (or there were no positions).
        self.end = true;
    }
}

impl Iterator for MixedRadix {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end {
            return None;
        }
        let current = self.digits.clone();
        self.advance();
        Some(current)
    }
}

/// Every ordered composition of `n`, driven by `n - 1` binary gaps.
///
/// Digit 1 joins two neighbouring cells, digit 0 cuts between them.
/// For `n = 3` the order is `[1,1,1]`, `[2,1]`, `[1,2]`, `[3]`.
#[derive(Debug, Clone)]
pub struct Compositions {
    gaps: MixedRadix,
}

impl Compositions {
    pub fn new(n: usize) -> ChordResult<Self> {
        if n == 0 {
            return Err(ChordError::InvalidComposition);
        }
        Ok(Self {
            gaps: MixedRadix::uniform(2, n - 1)?,
        })
    }

    pub fn is_end(&self) -> bool {
        self.gaps.is_end()
    }

    pub fn advance(&mut self) {
        self.gaps.advance();
    }

    /// Parts of the current composition.
    pub fn get(&self) -> Vec<usize> {
        let mut parts = Vec::new();
        let mut run = 1;
        for &joined in self.gaps.get() {
            if joined == 1 {
                run += 1;
            } else {
                parts.push(run);
                run = 1;
            }
        }
        parts.push(run);
        parts
    }
}

impl Iterator for Compositions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            return None;
        }
        let parts = self.get();
        self.advance();
        Some(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odometer_order() {
        let all: Vec<_> = MixedRadix::new(vec![2, 3]).unwrap().collect();
        assert_eq!(
            all,
            vec![
                vec![0, 0],
                vec![1, 0],
                vec![0, 1],
                vec![1, 1],
                vec![0, 2],
                vec![1, 2]
            ]
        );
    }

    #[test]
    fn test_zero_radix_rejected() {
        assert!(matches!(
            MixedRadix::new(vec![3, 0, 2]),
            Err(ChordError::InvalidRadix { position: 1 })
        ));
    }

    #[test]
    fn test_compositions_of_three() {
        let all: Vec<_> = Compositions::new(3).unwrap().collect();
        assert_eq!(all, vec![vec![1, 1, 1], vec![2, 1], vec![1, 2], vec![3]]);
    }
}
