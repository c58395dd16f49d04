//! Pairwise win probabilities between dice.
//!
//! Cell `(i, j)` is the probability that one roll of die `i` shows a strictly
//! higher face than one roll of die `j`. Each die's faces are sorted once and
//! every face of `i` is located in `j` by binary search, so building the
//! matrix costs O(n² · f · log f) for `n` dice of `f` faces.

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::dice::DiceSet;

/// Label shown for a die compared against itself.
pub const SELF_CELL: &str = "n/a";

/// Win and tie probabilities for every ordered pair of dice in a set.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    labels: Vec<String>,
    wins: Vec<Vec<f64>>,
    ties: Vec<Vec<f64>>,
}

impl ProbabilityMatrix {
    /// Compute the matrix for every ordered pair in `dice`.
    pub fn from_dice(dice: &DiceSet) -> Self {
        let sorted: Vec<Vec<i64>> = dice
            .iter()
            .map(|d| {
                let mut faces = d.faces().to_vec();
                faces.sort_unstable();
                faces
            })
            .collect();

        let n = sorted.len();
        let mut wins = vec![vec![0.0; n]; n];
        let mut ties = vec![vec![0.0; n]; n];

        for (i, a) in sorted.iter().enumerate() {
            for (j, b) in sorted.iter().enumerate() {
                let (won, tied) = compare_faces(a, b);
                let total = (a.len() * b.len()) as f64;
                wins[i][j] = won as f64 / total;
                ties[i][j] = tied as f64 / total;
            }
        }

        Self {
            labels: dice.iter().map(|d| d.to_string()).collect(),
            wins,
            ties,
        }
    }

    /// Number of dice covered by the matrix.
    pub fn size(&self) -> usize {
        self.wins.len()
    }

    /// Face-list label of die `i`.
    pub fn label(&self, i: usize) -> Option<&str> {
        self.labels.get(i).map(String::as_str)
    }

    /// Probability that die `a` rolls strictly higher than die `b`.
    pub fn win_probability(&self, a: usize, b: usize) -> Option<f64> {
        self.wins.get(a)?.get(b).copied()
    }

    /// Probability that dice `a` and `b` roll the same face.
    pub fn tie_probability(&self, a: usize, b: usize) -> Option<f64> {
        self.ties.get(a)?.get(b).copied()
    }

    /// Cell text for display: four decimals, or `n/a` on the diagonal.
    pub fn display_cell(&self, a: usize, b: usize) -> String {
        match self.win_probability(a, b) {
            _ if a == b => SELF_CELL.to_string(),
            Some(p) => format!("{p:.4}"),
            None => String::new(),
        }
    }

    /// True if some three dice beat each other in a cycle.
    pub fn is_non_transitive(&self) -> bool {
        let beats = |a: usize, b: usize| self.wins[a][b] > 0.5;
        let n = self.size();
        (0..n).any(|i| {
            (0..n).any(|j| {
                j != i
                    && beats(i, j)
                    && (0..n).any(|k| k != i && k != j && beats(j, k) && beats(k, i))
            })
        })
    }
}

/// Count face pairs where `a` wins and where the two tie. Both slices sorted.
fn compare_faces(a: &[i64], b: &[i64]) -> (usize, usize) {
    a.iter().fold((0, 0), |(won, tied), &face| {
        let below = b.partition_point(|&other| other < face);
        let not_above = b.partition_point(|&other| other <= face);
        (won + below, tied + (not_above - below))
    })
}

impl Serialize for ProbabilityMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProbabilityMatrix", 2)?;
        state.serialize_field("labels", &self.labels)?;
        state.serialize_field("wins", &DisplayRows(self))?;
        state.end()
    }
}

/// Rows with the diagonal blanked out as `null`.
struct DisplayRows<'a>(&'a ProbabilityMatrix);

impl Serialize for DisplayRows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.size()))?;
        for (i, row) in self.0.wins.iter().enumerate() {
            let cells: Vec<Option<f64>> = row
                .iter()
                .enumerate()
                .map(|(j, p)| (i != j).then_some(*p))
                .collect();
            seq.serialize_element(&cells)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DicePolicy;
    use proptest::prelude::*;

    fn classic() -> ProbabilityMatrix {
        let set = DicePolicy::default()
            .parse(&["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"])
            .unwrap();
        ProbabilityMatrix::from_dice(&set)
    }

    #[test]
    fn classic_set_is_a_cycle() {
        let m = classic();
        assert!(m.win_probability(0, 1).unwrap() > 0.5);
        assert!(m.win_probability(1, 2).unwrap() > 0.5);
        assert!(m.win_probability(2, 0).unwrap() > 0.5);
        assert!(m.is_non_transitive());
    }

    #[test]
    fn classic_set_exact_values() {
        let m = classic();
        assert_eq!(m.display_cell(0, 1), "0.5556");
        assert_eq!(m.display_cell(1, 0), "0.4444");
        assert_eq!(m.display_cell(2, 0), "0.5556");
        assert_eq!(m.win_probability(0, 0), Some(12.0 / 36.0));
    }

    #[test]
    fn diagonal_displays_na() {
        let m = classic();
        for i in 0..m.size() {
            assert_eq!(m.display_cell(i, i), "n/a");
        }
    }

    #[test]
    fn transitive_set_detected() {
        let set = DicePolicy::default()
            .parse(&["1,1,1", "2,2,2", "3,3,3"])
            .unwrap();
        let m = ProbabilityMatrix::from_dice(&set);
        assert_eq!(m.win_probability(2, 0), Some(1.0));
        assert_eq!(m.win_probability(0, 2), Some(0.0));
        assert!(!m.is_non_transitive());
    }

    #[test]
    fn ties_counted() {
        let set = DicePolicy::default()
            .parse(&["1,2,3", "1,2,3", "3,3,3"])
            .unwrap();
        let m = ProbabilityMatrix::from_dice(&set);
        assert_eq!(m.tie_probability(0, 1), Some(3.0 / 9.0));
        assert_eq!(m.win_probability(0, 1), Some(3.0 / 9.0));
        assert_eq!(m.tie_probability(0, 2), Some(3.0 / 9.0));
        assert_eq!(m.win_probability(0, 2), Some(0.0));
    }

    #[test]
    fn mixed_side_counts_use_both_denominators() {
        let set = DicePolicy::default()
            .allow_mixed_sides()
            .parse(&["1,5", "2,3,4", "0,0,0,0"])
            .unwrap();
        let m = ProbabilityMatrix::from_dice(&set);
        assert_eq!(m.win_probability(0, 1), Some(3.0 / 6.0));
        assert_eq!(m.win_probability(1, 2), Some(1.0));
    }

    #[test]
    fn out_of_range_lookups() {
        let m = classic();
        assert_eq!(m.win_probability(3, 0), None);
        assert_eq!(m.label(3), None);
        assert_eq!(m.label(1), Some("1,1,6,6,8,8"));
    }

    #[test]
    fn json_blanks_diagonal() {
        let json = serde_json::to_value(classic()).unwrap();
        assert_eq!(json["labels"][0], "2,2,4,4,9,9");
        assert!(json["wins"][1][1].is_null());
        assert!(json["wins"][0][1].as_f64().unwrap() > 0.55);
    }

    proptest! {
        #[test]
        fn wins_plus_losses_plus_ties_is_one(
            a in prop::collection::vec(-20i64..20, 6),
            b in prop::collection::vec(-20i64..20, 6),
        ) {
            let set = DicePolicy::default()
                .with_min_dice(2)
                .parse(&[
                    a.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(","),
                    b.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(","),
                ])
                .unwrap();
            let m = ProbabilityMatrix::from_dice(&set);
            let sum = m.win_probability(0, 1).unwrap()
                + m.win_probability(1, 0).unwrap()
                + m.tie_probability(0, 1).unwrap();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            prop_assert_eq!(m.tie_probability(0, 1), m.tie_probability(1, 0));
        }
    }
}
