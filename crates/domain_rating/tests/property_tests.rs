//! Property-Based Tests for the Premium Calculator
//!
//! Exercises the calculator over the whole factor space using the strategies
//! from `test_utils::generators`. The properties mirror the calculation
//! contract: determinism, positivity, engine-volume invariance for
//! non-passenger categories, and rejection of out-of-range months.

use proptest::prelude::*;

use domain_rating::{EngineVolume, RatingError, RatingFactors};
use test_utils::{
    invalid_months_strategy, non_passenger_vehicle_strategy, rating_factors_strategy,
    shared_calculator,
};

proptest! {
    /// Identical inputs always yield the identical breakdown
    #[test]
    fn calculation_is_deterministic(factors in rating_factors_strategy()) {
        let calculator = shared_calculator();

        let first = calculator.calculate(&factors).unwrap();
        let second = calculator.calculate(&factors).unwrap();

        prop_assert_eq!(first, second);
    }

    /// Every valid factor combination prices to a strictly positive premium
    #[test]
    fn premium_is_always_positive(factors in rating_factors_strategy()) {
        let breakdown = shared_calculator().calculate(&factors).unwrap();

        prop_assert!(breakdown.total.is_positive());
        prop_assert!(breakdown.premium() > 0);
    }

    /// Engine volume never moves a non-passenger premium
    #[test]
    fn engine_volume_invariant_for_non_passenger(
        base in rating_factors_strategy(),
        vehicle_type in non_passenger_vehicle_strategy(),
        volume in proptest::sample::select(EngineVolume::ALL.to_vec()),
    ) {
        let reference = RatingFactors { vehicle_type, ..base };
        let varied = RatingFactors { engine_volume: volume, ..reference };

        let calculator = shared_calculator();
        prop_assert_eq!(
            calculator.calculate(&reference).unwrap().premium(),
            calculator.calculate(&varied).unwrap().premium()
        );
    }

    /// Months outside [1,12] always fail with InvalidFactor
    #[test]
    fn out_of_range_months_always_rejected(
        base in rating_factors_strategy(),
        months in invalid_months_strategy(),
    ) {
        let factors = RatingFactors { insured_period_months: months, ..base };

        let err = shared_calculator().calculate(&factors).unwrap_err();
        let is_invalid_factor = matches!(
            err,
            RatingError::InvalidFactor { field: "insured_period_months", .. }
        );
        prop_assert!(is_invalid_factor);
    }

    /// A worse bonus-malus class never prices below a better one
    #[test]
    fn worse_bonus_malus_never_cheaper(base in rating_factors_strategy()) {
        use domain_rating::BonusMalusClass;

        let calculator = shared_calculator();
        let premiums: Vec<i64> = BonusMalusClass::ALL
            .iter()
            .map(|&class| {
                let factors = RatingFactors { bonus_malus: class, ..base };
                calculator.calculate(&factors).unwrap().premium()
            })
            .collect();

        // ALL is declared worst-to-best, so premiums must be non-increasing.
        prop_assert!(premiums.windows(2).all(|w| w[0] >= w[1]));
    }
}
