//! Uncertainty and information gain over candidate sets.
//!
//! All candidates are treated as equally likely, so the uncertainty of a
//! set of `n` candidates is `log2(n)` bits. Asking about an attribute
//! splits the set in two; the gain is how much that split is expected to
//! reduce uncertainty.
//!
//! Every function here is total: empty inputs yield 0, never NaN.

use crate::knowledge::Character;

/// Split `candidates` by the boolean value of `attribute`.
///
/// Returns `(true_count, false_count)`. Missing attributes count as false.
pub fn partition<'a, I>(candidates: I, attribute: &str) -> (usize, usize)
where
    I: IntoIterator<Item = &'a Character>,
{
    candidates
        .into_iter()
        .fold((0, 0), |(yes, no), c| if c.has(attribute) { (yes + 1, no) } else { (yes, no + 1) })
}

/// Uncertainty of a uniformly random pick among `count` candidates.
#[must_use]
pub fn uncertainty_of(count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (count as f64).log2()
}

/// Uncertainty, in bits, of a candidate set.
pub fn set_uncertainty<'a, I>(candidates: I) -> f64
where
    I: IntoIterator<Item = &'a Character>,
{
    uncertainty_of(candidates.into_iter().count())
}

/// `-p * log2(p)`, with an empty branch contributing nothing.
fn branch_entropy(p: f64) -> f64 {
    if p == 0.0 {
        0.0
    } else {
        -p * p.log2()
    }
}

/// Binary entropy of the split of `candidates` by `attribute`.
///
/// 1.0 for an even split, 0.0 when every candidate agrees.
pub fn attribute_entropy<'a, I>(candidates: I, attribute: &str) -> f64
where
    I: IntoIterator<Item = &'a Character>,
{
    let (yes, no) = partition(candidates, attribute);
    let total = yes + no;
    if total == 0 {
        return 0.0;
    }
    let p_true = yes as f64 / total as f64;
    let p_false = no as f64 / total as f64;
    branch_entropy(p_true) + branch_entropy(p_false)
}

/// Expected reduction in uncertainty from asking about `attribute`.
///
/// `log2(n) - (t/n * log2(t) + f/n * log2(f))` for a split into `t` true
/// and `f` false candidates. 0 for an empty set.
pub fn information_gain<'a, I>(candidates: I, attribute: &str) -> f64
where
    I: IntoIterator<Item = &'a Character>,
{
    let (yes, no) = partition(candidates, attribute);
    gain_from_split(yes, no)
}

/// Gain of a split with the given branch sizes.
#[must_use]
pub fn gain_from_split(yes: usize, no: usize) -> f64 {
    let total = yes + no;
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    let after = yes as f64 / n * uncertainty_of(yes) + no as f64 / n * uncertainty_of(no);
    uncertainty_of(total) - after
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::CharacterId;

    fn cast(flags: &[bool]) -> Vec<Character> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &male)| {
                Character::new(CharacterId::new(i as u32), format!("C{}", i))
                    .with_attr("isMale", male)
            })
            .collect()
    }

    #[test]
    fn test_set_uncertainty() {
        assert_eq!(set_uncertainty(&cast(&[])), 0.0);
        assert_eq!(set_uncertainty(&cast(&[true])), 0.0);
        assert_eq!(set_uncertainty(&cast(&[true, false])), 1.0);
        assert!((set_uncertainty(&cast(&[true; 6])) - 6f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn test_attribute_entropy() {
        assert_eq!(attribute_entropy(&cast(&[]), "isMale"), 0.0);
        assert_eq!(attribute_entropy(&cast(&[true, true]), "isMale"), 0.0);
        assert_eq!(attribute_entropy(&cast(&[true, false]), "isMale"), 1.0);

        let skewed = attribute_entropy(&cast(&[true, false, false, false]), "isMale");
        let expected = -(0.25f64 * 0.25f64.log2()) - 0.75 * 0.75f64.log2();
        assert!((skewed - expected).abs() < 1e-12);
    }

    #[test]
    fn test_missing_attribute_counts_as_false() {
        let bare: Vec<_> = (0..3).map(|i| Character::new(CharacterId::new(i), "x")).collect();
        assert_eq!(partition(&bare, "isMale"), (0, 3));
        assert_eq!(information_gain(&bare, "isMale"), 0.0);
    }

    #[test]
    fn test_even_split_of_six_gains_one_bit() {
        let six = cast(&[true, false, true, false, true, false]);
        let gain = information_gain(&six, "isMale");
        assert!((gain - 1.0).abs() < 1e-9, "gain = {}", gain);
    }

    #[test]
    fn test_empty_gain_is_zero() {
        let gain = information_gain(&cast(&[]), "isMale");
        assert_eq!(gain, 0.0);
        assert!(!gain.is_nan());
    }

    #[test]
    fn test_uniform_attribute_gains_nothing() {
        assert_eq!(information_gain(&cast(&[false; 5]), "isMale"), 0.0);
        assert_eq!(information_gain(&cast(&[true; 5]), "isMale"), 0.0);
    }

    #[test]
    fn test_gain_symmetric_in_branches() {
        assert_eq!(gain_from_split(2, 7), gain_from_split(7, 2));
    }
}
