use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// One marginal tier of a progressive rate schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// Inclusive lower edge of the tier.
    pub lower_bound: Decimal,

    /// Exclusive upper edge; `None` marks the unbounded top tier.
    pub upper_bound: Option<Decimal>,

    /// Marginal rate applied inside this tier, as a decimal fraction.
    pub rate: Decimal,
}

impl Bracket {
    pub fn new(
        lower_bound: Decimal,
        upper_bound: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rate,
        }
    }

    /// Width of the tier, or `None` for the unbounded top tier.
    pub fn width(&self) -> Option<Decimal> {
        self.upper_bound.map(|upper| upper - self.lower_bound)
    }
}

/// Errors raised when a bracket table fails construction-time validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table is empty")]
    Empty,

    #[error("first bracket must start at 0, got {0}")]
    FirstBoundNotZero(Decimal),

    #[error("bracket {index} has rate {rate} outside [0, 1]")]
    RateOutOfRange { index: usize, rate: Decimal },

    #[error("bracket {index} upper bound {upper} does not exceed lower bound {lower}")]
    EmptyRange {
        index: usize,
        lower: Decimal,
        upper: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd(usize),

    #[error("last bracket must be unbounded, got upper bound {0}")]
    BoundedTop(Decimal),

    #[error("bracket {index} starts at {lower} but the previous bracket ends at {upper}")]
    Discontinuity {
        index: usize,
        upper: Decimal,
        lower: Decimal,
    },
}

/// A validated, immutable progressive rate schedule.
///
/// Invariants are checked once at construction so that every calculation can
/// walk the table without re-validating: the table is non-empty, starts at 0,
/// brackets are contiguous (each upper bound equals the next lower bound),
/// only the final bracket is unbounded, and all rates lie in `[0, 1]`.
///
/// Tables are plain read-only data once built and can be shared freely across
/// concurrent calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTable {
    brackets: Vec<Bracket>,
}

impl BracketTable {
    /// Builds a table from an ordered list of brackets, validating every
    /// invariant up front.
    ///
    /// # Errors
    ///
    /// Returns [`BracketTableError`] if the list is empty, unsorted, gapped,
    /// overlapping, does not start at 0, ends in a bounded bracket, contains
    /// an unbounded bracket before the end, or carries a rate outside `[0, 1]`.
    pub fn new(brackets: Vec<Bracket>) -> Result<Self, BracketTableError> {
        let Some(first) = brackets.first() else {
            return Err(BracketTableError::Empty);
        };
        if first.lower_bound != Decimal::ZERO {
            return Err(BracketTableError::FirstBoundNotZero(first.lower_bound));
        }

        let last_index = brackets.len() - 1;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(BracketTableError::RateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }

            match bracket.upper_bound {
                Some(upper) => {
                    if upper <= bracket.lower_bound {
                        return Err(BracketTableError::EmptyRange {
                            index,
                            lower: bracket.lower_bound,
                            upper,
                        });
                    }
                    if index == last_index {
                        return Err(BracketTableError::BoundedTop(upper));
                    }
                }
                None => {
                    if index != last_index {
                        return Err(BracketTableError::UnboundedBeforeEnd(index));
                    }
                }
            }

            if index > 0 {
                // The previous bracket is bounded (checked above), so contiguity
                // reduces to an equality on the shared edge.
                if let Some(prev_upper) = brackets[index - 1].upper_bound {
                    if prev_upper != bracket.lower_bound {
                        return Err(BracketTableError::Discontinuity {
                            index,
                            upper: prev_upper,
                            lower: bracket.lower_bound,
                        });
                    }
                }
            }
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Marginal rate at `amount`: the rate of the tier the amount falls in.
    ///
    /// Amounts at or below zero sit in the first tier.
    pub fn marginal_rate(
        &self,
        amount: Decimal,
    ) -> Decimal {
        self.brackets
            .iter()
            .find(|bracket| match bracket.upper_bound {
                Some(upper) => amount < upper,
                None => true,
            })
            .map(|bracket| bracket.rate)
            .unwrap_or(Decimal::ZERO)
    }
}

impl TryFrom<Vec<Bracket>> for BracketTable {
    type Error = BracketTableError;

    fn try_from(brackets: Vec<Bracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl Serialize for BracketTable {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.brackets.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BracketTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let brackets = Vec::<Bracket>::deserialize(deserializer)?;
        Self::new(brackets).map_err(serde::de::Error::custom)
    }
}
