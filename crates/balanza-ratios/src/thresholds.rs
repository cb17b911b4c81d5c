//! Standard classification tables.
//!
//! Rules are listed in evaluation order; the first admitting rule wins.
//! Liquidity tables read top-down from the best bucket with a strict `>` on
//! the top edge and inclusive lower edges below it. Leverage tables read
//! top-down from the best bucket with a strict `<` on the bottom edge and
//! inclusive upper edges above it.
//!
//! | Ratio | Excellent | Good | Fair | Poor | Critical |
//! |---|---|---|---|---|---|
//! | Current | > 2.0 | [1.5, 2.0] | [1.0, 1.5) | [0.5, 1.0) | < 0.5 |
//! | Quick | > 1.5 | [1.0, 1.5] | [0.7, 1.0) | [0.3, 0.7) | < 0.3 |
//! | Debt-to-Equity | < 0.5 | [0.5, 1.0] | (1.0, 2.0] | (2.0, 5.0] | > 5.0 |
//! | Debt-to-Assets | < 0.30 | [0.30, 0.50] | (0.50, 0.70] | (0.70, 0.90] | > 0.90 |

use balanza_traits::{Bound, Classification, Direction, Rule, ThresholdTable};

use Classification::{Critical, Excellent, Fair, Good, Poor};

/// Current ratio buckets.
pub const CURRENT_RATIO: ThresholdTable = ThresholdTable::new(
    Direction::HigherIsBetter,
    &[
        Rule::new(Bound::Above(2.0), Excellent),
        Rule::new(Bound::AtLeast(1.5), Good),
        Rule::new(Bound::AtLeast(1.0), Fair),
        Rule::new(Bound::AtLeast(0.5), Poor),
        Rule::new(Bound::Otherwise, Critical),
    ],
);

/// Quick ratio buckets.
pub const QUICK_RATIO: ThresholdTable = ThresholdTable::new(
    Direction::HigherIsBetter,
    &[
        Rule::new(Bound::Above(1.5), Excellent),
        Rule::new(Bound::AtLeast(1.0), Good),
        Rule::new(Bound::AtLeast(0.7), Fair),
        Rule::new(Bound::AtLeast(0.3), Poor),
        Rule::new(Bound::Otherwise, Critical),
    ],
);

/// Debt-to-equity buckets.
pub const DEBT_TO_EQUITY: ThresholdTable = ThresholdTable::new(
    Direction::LowerIsBetter,
    &[
        Rule::new(Bound::Below(0.5), Excellent),
        Rule::new(Bound::AtMost(1.0), Good),
        Rule::new(Bound::AtMost(2.0), Fair),
        Rule::new(Bound::AtMost(5.0), Poor),
        Rule::new(Bound::Otherwise, Critical),
    ],
);

/// Debt-to-assets buckets.
pub const DEBT_TO_ASSETS: ThresholdTable = ThresholdTable::new(
    Direction::LowerIsBetter,
    &[
        Rule::new(Bound::Below(0.30), Excellent),
        Rule::new(Bound::AtMost(0.50), Good),
        Rule::new(Bound::AtMost(0.70), Fair),
        Rule::new(Bound::AtMost(0.90), Poor),
        Rule::new(Bound::Otherwise, Critical),
    ],
);
