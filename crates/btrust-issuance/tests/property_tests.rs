//! Property-based tests for estimator invariants.
//!
//! These tests verify properties that should hold for every request:
//! - Estimated yield never drops below the floor
//! - More collateral never raises the yield
//! - Custom collateral is always High risk
//! - Estimation is deterministic and total

use btrust_issuance::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const KINDS: [CollateralType; 3] = CollateralType::ALL;
const DURATIONS: [u64; 6] = [0, 1, 3, 6, 12, 24];

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517c_c1b7_2722_0a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517c_c1b7_2722_0a95);
    x ^= x >> 32;
    x
}

/// Generates a form with pseudo-random but reproducible fields.
fn generate_form(seed: u64, i: u64) -> IssuanceForm {
    let hash = simple_hash(seed, i);
    IssuanceForm::new()
        .with_principal(hash % 5_000)
        .with_total_supply((hash >> 12) % 100_000)
        .with_duration_months(DURATIONS[(hash >> 24) as usize % DURATIONS.len()])
        .with_collateral_amount((hash >> 32) % 50_000_000)
        .with_collateral_type(KINDS[(hash >> 40) as usize % KINDS.len()])
}

fn form(
    principal: &str,
    supply: &str,
    months: &str,
    collateral: &str,
    kind: CollateralType,
) -> IssuanceForm {
    IssuanceForm::new()
        .with_principal(principal)
        .with_total_supply(supply)
        .with_duration_months(months)
        .with_collateral_amount(collateral)
        .with_collateral_type(kind)
}

// =============================================================================
// REFERENCE SCENARIOS
// =============================================================================

#[test]
fn scenario_native_token_well_collateralised() {
    let est = estimate(&form("1000", "10000", "12", "500000", CollateralType::Native));
    assert_eq!(est.collateral_ratio_percent, dec!(500));
    assert_eq!(est.estimated_yield_percent, dec!(7.00));
    assert_eq!(est.risk_rating, RiskRating::Low);
}

#[test]
fn scenario_stablecoin_under_collateralised() {
    let est = estimate(&form("1000", "50000", "3", "150000", CollateralType::Stablecoin));
    assert_eq!(est.collateral_ratio_percent, dec!(0.3));
    assert_eq!(est.estimated_yield_percent, dec!(7.50));
    assert_eq!(est.risk_rating, RiskRating::High);
}

// =============================================================================
// PROPERTY: YIELD FLOOR
// =============================================================================

#[test]
fn property_yield_never_below_floor() {
    for seed in 0..10 {
        for i in 0..500 {
            let est = estimate(&generate_form(seed, i));
            assert!(
                est.estimated_yield_percent >= dec!(2.0),
                "yield {} below floor for seed={}, i={}",
                est.estimated_yield_percent,
                seed,
                i
            );
        }
    }
}

#[test]
fn property_floor_binds_with_zero_base_rate() {
    let estimator = YieldEstimator::new(
        btrust_config::EstimatorConfig::default().with_base_rate(Decimal::ZERO),
    );
    for seed in 0..10 {
        for i in 0..100 {
            let est = estimator.estimate_form(&generate_form(seed, i));
            assert!(est.estimated_yield_percent >= dec!(2.0));
        }
    }
}

// =============================================================================
// PROPERTY: TIER BOUNDARIES
// =============================================================================

#[test]
fn property_crossing_tier_upwards_never_raises_yield() {
    // face value is 10_000, so unscaled collateral of N gives a ratio of N / 100
    for kind in KINDS {
        for months in ["1", "3", "6", "12"] {
            for (below, at) in [("11999", "12000"), ("14999", "15000"), ("19999", "20000")] {
                let low = estimate(&form("100", "100", months, below, kind));
                let high = estimate(&form("100", "100", months, at, kind));
                assert!(
                    high.estimated_yield_percent <= low.estimated_yield_percent,
                    "{kind} {months}m: {at} gave {} > {}",
                    high.estimated_yield_percent,
                    low.estimated_yield_percent
                );
            }
        }
    }
}

#[test]
fn property_tier_boundaries_exact() {
    let at = |collateral: &str| {
        estimate(&form("100", "100", "12", collateral, CollateralType::Stablecoin))
            .estimated_yield_percent
    };
    // 4.0 base + 4.0 premium
    assert_eq!(at("11999"), dec!(10.0));
    assert_eq!(at("12000"), dec!(8.0));
    assert_eq!(at("15000"), dec!(7.0));
    assert_eq!(at("20000"), dec!(6.0));
}

// =============================================================================
// PROPERTY: RISK
// =============================================================================

#[test]
fn property_custom_collateral_always_high_risk() {
    for seed in 0..10 {
        for i in 0..200 {
            let form = generate_form(seed, i).with_collateral_type(CollateralType::Custom);
            assert_eq!(estimate(&form).risk_rating, RiskRating::High);
        }
    }
}

// =============================================================================
// PROPERTY: TOTALITY
// =============================================================================

#[test]
fn property_zero_principal_or_supply_gives_zero_ratio() {
    for seed in 0..5 {
        for i in 0..100 {
            let base = generate_form(seed, i);
            for f in [base.with_principal("0"), base.with_total_supply("0")] {
                assert_eq!(estimate(&f).collateral_ratio_percent, Decimal::ZERO);
            }
        }
    }
}

#[test]
fn property_estimation_is_deterministic() {
    let estimator = YieldEstimator::default();
    for seed in 0..5 {
        for i in 0..100 {
            let form = generate_form(seed, i);
            assert_eq!(estimator.estimate_form(&form), estimator.estimate_form(&form));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_arbitrary_text_never_panics(
        principal in "\\PC{0,12}",
        supply in "\\PC{0,12}",
        months in "\\PC{0,4}",
        collateral in "\\PC{0,16}",
        kind in "\\PC{0,10}",
    ) {
        let form = form(&principal, &supply, &months, &collateral, CollateralType::parse_lenient(&kind));
        let est = estimate(&form);
        prop_assert!(est.estimated_yield_percent >= dec!(2.0));
        prop_assert!(est.collateral_ratio_percent >= Decimal::ZERO);
    }

    #[test]
    fn test_more_collateral_never_raises_yield(
        principal in 1u64..10_000,
        supply in 1u64..100_000,
        months in prop::sample::select(DURATIONS.to_vec()),
        c1 in 0u64..1_000_000_000,
        c2 in 0u64..1_000_000_000,
        kind in prop::sample::select(KINDS.to_vec()),
    ) {
        let (less, more) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
        let base = IssuanceForm::new()
            .with_principal(principal)
            .with_total_supply(supply)
            .with_duration_months(months)
            .with_collateral_type(kind);
        let low = estimate(&base.with_collateral_amount(less));
        let high = estimate(&base.with_collateral_amount(more));
        prop_assert!(high.collateral_ratio_percent >= low.collateral_ratio_percent);
        prop_assert!(high.estimated_yield_percent <= low.estimated_yield_percent);
    }
}
