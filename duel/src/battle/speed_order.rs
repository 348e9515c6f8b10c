use std::cmp::Ordering;

use duel_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::battle::BattleEngineSpeedTieResolution;

/// An object that can be ordered by speed.
pub trait SpeedOrderable {
    /// Speed. Highest speed goes first.
    fn speed(&self) -> u32;
}

impl<T> SpeedOrderable for &'_ T
where
    T: SpeedOrderable,
{
    #[inline]
    fn speed(&self) -> u32 {
        (*self).speed()
    }
}

/// Compares the speed of two objects.
///
/// [`Ordering::Less`] means `a` goes first.
pub fn compare_speed<T>(a: &T, b: &T) -> Ordering
where
    T: SpeedOrderable,
{
    // Higher speed first.
    b.speed().cmp(&a.speed())
}

/// Orders two objects by speed, returning `(first, second)`.
///
/// `a` is the object that keeps its place when ties are not shuffled. A random tie consumes exactly
/// one value from the generator; every other case consumes none.
pub fn order_by_speed<T>(
    a: T,
    b: T,
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: BattleEngineSpeedTieResolution,
) -> (T, T)
where
    T: SpeedOrderable,
{
    match compare_speed(&a, &b) {
        Ordering::Less => (a, b),
        Ordering::Greater => (b, a),
        Ordering::Equal => match tie_resolution {
            BattleEngineSpeedTieResolution::Random => {
                if rand_util::chance(prng, 1, 2) {
                    (a, b)
                } else {
                    (b, a)
                }
            }
            BattleEngineSpeedTieResolution::Keep => (a, b),
            BattleEngineSpeedTieResolution::Reverse => (b, a),
        },
    }
}

#[cfg(test)]
mod speed_order_test {
    use duel_prng::RealPseudoRandomNumberGenerator;
    use duel_test_utils::ControlledRandomNumberGenerator;
    use pretty_assertions::assert_eq;

    use crate::battle::{
        BattleEngineSpeedTieResolution,
        SpeedOrderable,
        order_by_speed,
    };

    #[derive(Debug, PartialEq, Eq)]
    struct TestData {
        name: &'static str,
        speed: u32,
    }

    impl SpeedOrderable for TestData {
        fn speed(&self) -> u32 {
            self.speed
        }
    }

    const FAST: TestData = TestData {
        name: "fast",
        speed: 100,
    };
    const SLOW: TestData = TestData {
        name: "slow",
        speed: 50,
    };
    const TIED: TestData = TestData {
        name: "tied",
        speed: 100,
    };

    #[test]
    fn faster_goes_first_without_randomness() {
        let mut prng = ControlledRandomNumberGenerator::new(Some(0));
        for tie_resolution in [
            BattleEngineSpeedTieResolution::Random,
            BattleEngineSpeedTieResolution::Keep,
            BattleEngineSpeedTieResolution::Reverse,
        ] {
            assert_eq!(
                order_by_speed(&FAST, &SLOW, &mut prng, tie_resolution),
                (&FAST, &SLOW)
            );
            assert_eq!(
                order_by_speed(&SLOW, &FAST, &mut prng, tie_resolution),
                (&FAST, &SLOW)
            );
        }
        assert_eq!(prng.sequence_count(), 0);
    }

    #[test]
    fn resolves_ties_deterministically() {
        let mut prng = ControlledRandomNumberGenerator::new(Some(0));
        assert_eq!(
            order_by_speed(
                &FAST,
                &TIED,
                &mut prng,
                BattleEngineSpeedTieResolution::Keep
            ),
            (&FAST, &TIED)
        );
        assert_eq!(
            order_by_speed(
                &FAST,
                &TIED,
                &mut prng,
                BattleEngineSpeedTieResolution::Reverse
            ),
            (&TIED, &FAST)
        );
        assert_eq!(prng.sequence_count(), 0);
    }

    #[test]
    fn resolves_random_ties_with_one_draw() {
        let mut prng = ControlledRandomNumberGenerator::new(Some(0));
        prng.insert_fake_values([(1, 0), (2, 1)]);
        assert_eq!(
            order_by_speed(
                &FAST,
                &TIED,
                &mut prng,
                BattleEngineSpeedTieResolution::Random
            ),
            (&FAST, &TIED)
        );
        assert_eq!(
            order_by_speed(
                &FAST,
                &TIED,
                &mut prng,
                BattleEngineSpeedTieResolution::Random
            ),
            (&TIED, &FAST)
        );
        assert_eq!(prng.sequence_count(), 2);
    }

    #[test]
    fn random_ties_are_roughly_fair() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(55555));
        let fast_first = (0..1000)
            .filter(|_| {
                order_by_speed(
                    &FAST,
                    &TIED,
                    &mut prng,
                    BattleEngineSpeedTieResolution::Random,
                )
                .0
                .name
                    == "fast"
            })
            .count();
        assert!((430..=570).contains(&fast_first), "fast_first = {fast_first}");
    }
}
