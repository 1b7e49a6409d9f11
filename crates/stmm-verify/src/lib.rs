//! `stmm-verify` - Exact-equality result verification for st-matmul.
//!
//! Compares a computed buffer against a precomputed reference element by
//! element. Comparison is exact (`i32` equality, no tolerance). The whole
//! range is always scanned so the report carries the full mismatch count,
//! not just the first divergence.

use std::fmt;

/// A single differing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Flat (row-major) index of the element.
    pub index: usize,
    pub expected: i32,
    pub actual: i32,
}

/// Outcome of comparing a computed buffer against a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    checked: usize,
    mismatches: usize,
    first: Option<Mismatch>,
    length_mismatch: bool,
}

impl VerifyReport {
    /// True iff every element matched and the lengths agreed.
    pub fn passed(&self) -> bool {
        self.mismatches == 0 && !self.length_mismatch
    }

    /// Number of elements compared.
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Number of differing elements.
    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    /// The first differing element, if any.
    pub fn first_mismatch(&self) -> Option<Mismatch> {
        self.first
    }

    /// True iff the computed and reference lengths differed.
    pub fn length_mismatch(&self) -> bool {
        self.length_mismatch
    }

    /// Process exit status: 0 on pass, 1 on any mismatch.
    pub fn status(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "PASS: {} elements match", self.checked);
        }
        if self.length_mismatch {
            write!(f, "FAIL: length mismatch, ")?;
        } else {
            write!(f, "FAIL: ")?;
        }
        write!(f, "{}/{} elements differ", self.mismatches, self.checked)?;
        if let Some(m) = self.first {
            write!(
                f,
                " (first at index {}: expected {}, got {})",
                m.index, m.expected, m.actual
            )?;
        }
        Ok(())
    }
}

/// Compare `computed` against `reference`, scanning the full common range.
///
/// Unequal lengths are a failure in their own right; the overlapping prefix
/// is still compared so the report stays informative.
pub fn verify(computed: &[i32], reference: &[i32]) -> VerifyReport {
    let checked = computed.len().min(reference.len());
    let mut mismatches = 0usize;
    let mut first = None;

    for (i, (&got, &want)) in computed.iter().zip(reference.iter()).enumerate() {
        if got != want {
            mismatches += 1;
            if first.is_none() {
                first = Some(Mismatch {
                    index: i,
                    expected: want,
                    actual: got,
                });
            }
        }
    }

    VerifyReport {
        checked,
        mismatches,
        first,
        length_mismatch: computed.len() != reference.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_comparison_passes() {
        let data = [3, 1, 4, 1, 5, 9, 2, 6];
        let report = verify(&data, &data);
        assert!(report.passed());
        assert_eq!(report.status(), 0);
        assert_eq!(report.checked(), 8);
        assert_eq!(report.mismatches(), 0);
        assert_eq!(report.first_mismatch(), None);
    }

    #[test]
    fn test_single_flip_fails() {
        let reference = [3, 1, 4, 1, 5];
        let mut computed = reference;
        computed[3] = 2;
        let report = verify(&computed, &reference);
        assert!(!report.passed());
        assert_eq!(report.status(), 1);
        assert_eq!(report.mismatches(), 1);
        assert_eq!(
            report.first_mismatch(),
            Some(Mismatch {
                index: 3,
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_counts_all_mismatches() {
        let reference = [0, 0, 0, 0];
        let computed = [1, 0, 2, 3];
        let report = verify(&computed, &reference);
        assert_eq!(report.mismatches(), 3);
        assert_eq!(report.first_mismatch().unwrap().index, 0);
    }

    #[test]
    fn test_length_mismatch_fails() {
        let report = verify(&[1, 2, 3], &[1, 2, 3, 4]);
        assert!(!report.passed());
        assert!(report.length_mismatch());
        assert_eq!(report.mismatches(), 0);
        assert_eq!(report.checked(), 3);
    }

    #[test]
    fn test_empty_passes() {
        let report = verify(&[], &[]);
        assert!(report.passed());
        assert_eq!(report.checked(), 0);
    }

    #[test]
    fn test_display_fail() {
        let report = verify(&[9], &[5]);
        let s = report.to_string();
        assert!(s.contains("FAIL"));
        assert!(s.contains("index 0"));
        assert!(s.contains("expected 5"));
    }
}
