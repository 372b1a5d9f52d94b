//! Pluggable revenue and bonus policies.
//!
//! The pipeline only ever talks to [`SalesPolicy`]. Callers either implement
//! the trait directly, or hand over a pair of closures through
//! [`PolicyOptions`], which the validator turns into a [`BoundPolicy`].

use serde::Deserialize;

use crate::model::{LineItem, Product, SellerAccumulator};

pub trait SalesPolicy {
    /// Revenue attributable to one line item, discount included.
    /// `product` is `None` when the sku is not in the catalog.
    fn line_revenue(&self, item: &LineItem, product: Option<&Product>) -> f64;

    /// Bonus for the seller at post-sort position `rank` (0 = highest profit).
    fn bonus_for_rank(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> f64;
}

// ---------------------------------------------------------------------------
// Reference policy
// ---------------------------------------------------------------------------

/// Share of profit paid out per rank tier.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BonusRates {
    /// Rank 0.
    #[serde(default = "default_leader")]
    pub leader: f64,
    /// Ranks 1 and 2.
    #[serde(default = "default_podium")]
    pub podium: f64,
    /// Everyone between the podium and the last rank.
    #[serde(default = "default_base")]
    pub base: f64,
    /// Last rank, unless it is already covered by rank 0..=2.
    #[serde(default)]
    pub last: f64,
}

fn default_leader() -> f64 {
    0.15
}

fn default_podium() -> f64 {
    0.10
}

fn default_base() -> f64 {
    0.05
}

impl Default for BonusRates {
    fn default() -> Self {
        Self {
            leader: default_leader(),
            podium: default_podium(),
            base: default_base(),
            last: 0.0,
        }
    }
}

impl BonusRates {
    /// Rate for a rank. Branch order matters: rank 0 beats the last-rank
    /// check (single seller), ranks 1..=2 beat it too (2 or 3 sellers).
    pub fn rate_for(&self, rank: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else if rank == 0 {
            self.leader
        } else if rank == 1 || rank == 2 {
            self.podium
        } else if rank == total - 1 {
            self.last
        } else {
            self.base
        }
    }
}

/// Discount-aware line revenue plus the rank ladder bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DefaultPolicy {
    pub rates: BonusRates,
}

impl DefaultPolicy {
    pub fn new(rates: BonusRates) -> Self {
        Self { rates }
    }
}

impl SalesPolicy for DefaultPolicy {
    fn line_revenue(&self, item: &LineItem, _product: Option<&Product>) -> f64 {
        let rest = 1.0 - item.discount / 100.0;
        item.sale_price * item.quantity as f64 * rest
    }

    fn bonus_for_rank(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> f64 {
        seller.profit * self.rates.rate_for(rank, total)
    }
}

// ---------------------------------------------------------------------------
// Closure bundle
// ---------------------------------------------------------------------------

pub type RevenueFn<'a> = Box<dyn Fn(&LineItem, Option<&Product>) -> f64 + 'a>;
pub type BonusFn<'a> = Box<dyn Fn(usize, usize, &SellerAccumulator) -> f64 + 'a>;

/// Caller-supplied policy functions. Both are required; a missing one is
/// reported by validation as [`crate::ReportError::MissingPolicy`].
#[derive(Default)]
pub struct PolicyOptions<'a> {
    pub calculate_revenue: Option<RevenueFn<'a>>,
    pub calculate_bonus: Option<BonusFn<'a>>,
}

impl<'a> PolicyOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_revenue<F>(mut self, f: F) -> Self
    where
        F: Fn(&LineItem, Option<&Product>) -> f64 + 'a,
    {
        self.calculate_revenue = Some(Box::new(f));
        self
    }

    pub fn with_bonus<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize, &SellerAccumulator) -> f64 + 'a,
    {
        self.calculate_bonus = Some(Box::new(f));
        self
    }

    /// Bundle both methods of an existing policy.
    pub fn from_policy<P>(policy: &'a P) -> Self
    where
        P: SalesPolicy + ?Sized,
    {
        Self::new()
            .with_revenue(move |item, product| policy.line_revenue(item, product))
            .with_bonus(move |rank, total, seller| policy.bonus_for_rank(rank, total, seller))
    }
}

impl std::fmt::Debug for PolicyOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}

/// A validated [`PolicyOptions`]: both functions are known to be present.
pub struct BoundPolicy<'o> {
    pub(crate) revenue: &'o dyn Fn(&LineItem, Option<&Product>) -> f64,
    pub(crate) bonus: &'o dyn Fn(usize, usize, &SellerAccumulator) -> f64,
}

impl SalesPolicy for BoundPolicy<'_> {
    fn line_revenue(&self, item: &LineItem, product: Option<&Product>) -> f64 {
        (self.revenue)(item, product)
    }

    fn bonus_for_rank(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> f64 {
        (self.bonus)(rank, total, seller)
    }
}
