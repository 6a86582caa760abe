//! Bond offerings.
//!
//! [`BondTerms`] are the parameters an issuer deploys with; [`Offering`]
//! tracks a deployed bond through sale, coupon payments, redemption and
//! liquidation. Amounts are integer base units of the payment token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use btrust_config::PlatformConfig;
use btrust_core::error::{BtrustError, BtrustResult};
use btrust_core::types::BasisPoints;

use crate::accrual::{self, YieldClaim};
use crate::collateral::{CollateralHealth, CollateralPolicy, LiquidationPayout};
use crate::fees::{FeeSchedule, PaymentSplit};
use crate::position::HolderPosition;

// =============================================================================
// BOND TERMS
// =============================================================================

/// Parameters of a bond issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Face value per unit, in base units.
    pub principal: u64,
    /// Annual coupon rate.
    pub coupon_rate_bps: BasisPoints,
    /// Units offered.
    pub total_supply: u64,
    /// Redemption date.
    pub maturity: DateTime<Utc>,
    /// Collateral ratio the issuer asks for; raised to the platform minimum.
    pub collateral_ratio_bps: BasisPoints,
    /// Whether sales stop at `total_supply`.
    pub is_capped: bool,
}

impl BondTerms {
    /// Checks the terms as of `now`, returning the first violation.
    pub fn validate(&self, now: DateTime<Utc>, config: &PlatformConfig) -> BtrustResult<()> {
        if self.principal == 0 {
            return Err(BtrustError::InvalidPrincipal {
                reason: "principal must be positive".into(),
            });
        }
        if self.coupon_rate_bps > config.max_coupon_rate_bps {
            return Err(BtrustError::InvalidCouponRate {
                bps: self.coupon_rate_bps.value(),
            });
        }
        if self.maturity <= now {
            return Err(BtrustError::InvalidMaturity {
                reason: format!("maturity {} is not after {}", self.maturity, now),
            });
        }
        if self.total_supply == 0 {
            return Err(BtrustError::InvalidSupply {
                reason: "supply must be positive".into(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// OFFERING
// =============================================================================

/// Result of a primary purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    /// Payment split between issuer and platform.
    pub payment: PaymentSplit,
    /// The buyer's position after the purchase.
    pub position: HolderPosition,
}

/// A deployed bond and its running state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    terms: BondTerms,
    fees: FeeSchedule,
    policy: CollateralPolicy,
    collateral_ratio_bps: BasisPoints,
    outstanding_supply: u64,
    collateral_deposited: u64,
    yield_vault: u64,
    is_active: bool,
    is_matured: bool,
}

impl Offering {
    /// Deploys a bond.
    ///
    /// # Errors
    ///
    /// Whatever [`BondTerms::validate`] rejects.
    pub fn create(
        terms: BondTerms,
        config: &PlatformConfig,
        now: DateTime<Utc>,
    ) -> BtrustResult<Self> {
        terms.validate(now, config)?;
        let policy = CollateralPolicy::from_config(config);
        let collateral_ratio_bps = policy.effective_ratio_bps(terms.collateral_ratio_bps);

        info!(
            principal = terms.principal,
            supply = terms.total_supply,
            coupon = %terms.coupon_rate_bps,
            ratio = %collateral_ratio_bps,
            "bond created"
        );

        Ok(Self {
            terms,
            fees: FeeSchedule::from_config(config),
            policy,
            collateral_ratio_bps,
            outstanding_supply: 0,
            collateral_deposited: 0,
            yield_vault: 0,
            is_active: true,
            is_matured: false,
        })
    }

    /// The issue's terms.
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Collateral ratio in force.
    pub fn collateral_ratio_bps(&self) -> BasisPoints {
        self.collateral_ratio_bps
    }

    /// Units sold and not yet redeemed.
    pub fn outstanding_supply(&self) -> u64 {
        self.outstanding_supply
    }

    /// Collateral held.
    pub fn collateral_deposited(&self) -> u64 {
        self.collateral_deposited
    }

    /// Coupon funds available to holders.
    pub fn yield_vault(&self) -> u64 {
        self.yield_vault
    }

    /// Returns true while the bond accepts purchases and deposits.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns true once every unit has been redeemed.
    pub fn is_matured(&self) -> bool {
        self.is_matured
    }

    fn ensure_open(&self) -> BtrustResult<()> {
        if !self.is_active {
            return Err(BtrustError::BondNotActive);
        }
        if self.is_matured {
            return Err(BtrustError::BondMatured);
        }
        Ok(())
    }

    /// Adds collateral.
    pub fn deposit_collateral(&mut self, amount: u64) -> BtrustResult<u64> {
        if amount == 0 {
            return Err(BtrustError::invalid_amount("deposit must be positive"));
        }
        self.ensure_open()?;
        self.collateral_deposited = self
            .collateral_deposited
            .checked_add(amount)
            .ok_or_else(|| BtrustError::overflow("collateral deposit"))?;
        debug!(amount, total = self.collateral_deposited, "collateral deposited");
        Ok(self.collateral_deposited)
    }

    /// Funds the coupon vault.
    pub fn deposit_yield(&mut self, amount: u64) -> BtrustResult<u64> {
        if amount == 0 {
            return Err(BtrustError::invalid_amount("deposit must be positive"));
        }
        if !self.is_active {
            return Err(BtrustError::BondNotActive);
        }
        self.yield_vault = self
            .yield_vault
            .checked_add(amount)
            .ok_or_else(|| BtrustError::overflow("yield deposit"))?;
        Ok(self.yield_vault)
    }

    /// Sells `quantity` units at face value, opening or extending the buyer's
    /// position.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for zero quantity, `BondNotActive`/`BondMatured` for a
    /// closed bond, `ExceedsSupply` past the cap of a capped issue.
    pub fn purchase(
        &mut self,
        quantity: u64,
        position: Option<HolderPosition>,
        now: DateTime<Utc>,
    ) -> BtrustResult<Purchase> {
        if quantity == 0 {
            return Err(BtrustError::invalid_amount("quantity must be positive"));
        }
        self.ensure_open()?;

        let outstanding = self
            .outstanding_supply
            .checked_add(quantity)
            .ok_or_else(|| BtrustError::overflow("outstanding supply"))?;
        if self.terms.is_capped && outstanding > self.terms.total_supply {
            return Err(BtrustError::ExceedsSupply {
                requested: quantity,
                available: self.terms.total_supply - self.outstanding_supply,
            });
        }

        let payment = self.fees.split(self.terms.principal, quantity)?;
        let position = match position {
            Some(mut held) => {
                held.add_purchase(quantity, payment.gross)?;
                held
            }
            None => HolderPosition::open(quantity, self.terms.principal, now)?,
        };

        self.outstanding_supply = outstanding;
        debug!(
            quantity,
            gross = payment.gross,
            fee = payment.fee,
            outstanding,
            "bond purchased"
        );

        Ok(Purchase { payment, position })
    }

    /// Pays accrued coupon on `position` from the vault.
    pub fn claim_yield(
        &mut self,
        position: &mut HolderPosition,
        now: DateTime<Utc>,
    ) -> BtrustResult<YieldClaim> {
        let claim = accrual::claim(position, self.terms.coupon_rate_bps, now, self.yield_vault)?;
        self.yield_vault -= claim.paid;
        Ok(claim)
    }

    /// Redeems `quantity` units at face value. Returns the amount paid.
    ///
    /// The bond matures and closes when the last unit is redeemed.
    pub fn redeem(
        &mut self,
        position: &mut HolderPosition,
        quantity: u64,
        now: DateTime<Utc>,
    ) -> BtrustResult<u64> {
        if quantity == 0 {
            return Err(BtrustError::invalid_amount("quantity must be positive"));
        }
        if now < self.terms.maturity {
            return Err(BtrustError::BondNotMatured);
        }
        if quantity > self.outstanding_supply {
            return Err(BtrustError::InsufficientBalance {
                requested: quantity,
                held: self.outstanding_supply,
            });
        }

        let amount = self
            .terms
            .principal
            .checked_mul(quantity)
            .ok_or_else(|| BtrustError::overflow("redemption amount"))?;
        position.remove(quantity)?;

        self.outstanding_supply -= quantity;
        if self.outstanding_supply == 0 {
            self.is_matured = true;
            self.is_active = false;
            info!("bond fully redeemed");
        }
        Ok(amount)
    }

    /// Current collateral coverage.
    pub fn health(&self) -> BtrustResult<CollateralHealth> {
        self.policy.health(
            self.terms.principal,
            self.outstanding_supply,
            self.collateral_deposited,
        )
    }

    /// Seizes the collateral of an under-collateralised bond and closes it.
    pub fn liquidate(&mut self) -> BtrustResult<LiquidationPayout> {
        if !self.is_active {
            return Err(BtrustError::BondNotActive);
        }
        let payout = self.policy.liquidate(&self.health()?)?;
        self.collateral_deposited = 0;
        self.is_active = false;
        Ok(payout)
    }
}
