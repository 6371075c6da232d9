//! The classification rule.

use super::{Consequences, DecisionFactors, DecisionType, Reversibility, Timeframe};

/// Maps decision factors to a decision type.
///
/// Evaluated in this precise order, first match wins:
/// 1. Low reversibility is always Type 2.
/// 2. High consequences with decent information (>= 6) and any breathing
///    room (not immediate) is Type 2.
/// 3. Everything else is Type 1.
pub fn classify(factors: &DecisionFactors) -> DecisionType {
    if factors.reversibility == Reversibility::Low {
        return DecisionType::Type2;
    }
    if factors.consequences == Consequences::High
        && factors.information_quality >= 6
        && factors.timeframe != Timeframe::Immediate
    {
        return DecisionType::Type2;
    }
    DecisionType::Type1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn factors(
        reversibility: Reversibility,
        consequences: Consequences,
        information_quality: u8,
        timeframe: Timeframe,
    ) -> DecisionFactors {
        DecisionFactors {
            reversibility,
            consequences,
            information_quality,
            timeframe,
        }
    }

    #[test]
    fn low_reversibility_dominates_everything() {
        let f = factors(
            Reversibility::Low,
            Consequences::Low,
            1,
            Timeframe::Immediate,
        );
        assert_eq!(classify(&f), DecisionType::Type2);
    }

    #[test]
    fn high_consequences_with_good_information_is_type_2() {
        let f = factors(
            Reversibility::Medium,
            Consequences::High,
            7,
            Timeframe::Short,
        );
        assert_eq!(classify(&f), DecisionType::Type2);
    }

    #[test]
    fn immediate_timeframe_gates_the_second_rule() {
        let f = factors(
            Reversibility::Medium,
            Consequences::High,
            7,
            Timeframe::Immediate,
        );
        assert_eq!(classify(&f), DecisionType::Type1);
    }

    #[test]
    fn poor_information_gates_the_second_rule() {
        let f = factors(
            Reversibility::Medium,
            Consequences::High,
            5,
            Timeframe::Long,
        );
        assert_eq!(classify(&f), DecisionType::Type1);
    }

    #[test]
    fn reversible_low_stakes_is_type_1() {
        let f = factors(Reversibility::High, Consequences::Low, 9, Timeframe::Long);
        assert_eq!(classify(&f), DecisionType::Type1);
    }

    fn arb_reversibility() -> impl Strategy<Value = Reversibility> {
        prop_oneof![
            Just(Reversibility::High),
            Just(Reversibility::Medium),
            Just(Reversibility::Low),
        ]
    }

    fn arb_consequences() -> impl Strategy<Value = Consequences> {
        prop_oneof![
            Just(Consequences::Low),
            Just(Consequences::Medium),
            Just(Consequences::High),
        ]
    }

    fn arb_timeframe() -> impl Strategy<Value = Timeframe> {
        prop_oneof![
            Just(Timeframe::Immediate),
            Just(Timeframe::Short),
            Just(Timeframe::Medium),
            Just(Timeframe::Long),
        ]
    }

    fn arb_factors() -> impl Strategy<Value = DecisionFactors> {
        (
            arb_reversibility(),
            arb_consequences(),
            1u8..=10,
            arb_timeframe(),
        )
            .prop_map(|(r, c, q, t)| DecisionFactors {
                reversibility: r,
                consequences: c,
                information_quality: q,
                timeframe: t,
            })
    }

    proptest! {
        #[test]
        fn classify_is_deterministic(f in arb_factors()) {
            prop_assert_eq!(classify(&f), classify(&f.clone()));
        }

        #[test]
        fn low_reversibility_always_type_2(
            c in arb_consequences(),
            q in 1u8..=10,
            t in arb_timeframe(),
        ) {
            let f = DecisionFactors {
                reversibility: Reversibility::Low,
                consequences: c,
                information_quality: q,
                timeframe: t,
            };
            prop_assert_eq!(classify(&f), DecisionType::Type2);
        }

        #[test]
        fn type_2_implies_a_rule_fired(f in arb_factors()) {
            if classify(&f) == DecisionType::Type2 {
                let rule_1 = f.reversibility == Reversibility::Low;
                let rule_2 = f.consequences == Consequences::High
                    && f.information_quality >= 6
                    && f.timeframe != Timeframe::Immediate;
                prop_assert!(rule_1 || rule_2);
            }
        }
    }
}
