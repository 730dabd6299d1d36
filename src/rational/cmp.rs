use super::Rational;
use crate::traits::RationalBase;
use core::cmp::Ordering;

// Equality is derived on the fields, which is sound only because both sides are canonical.

impl<T: RationalBase> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // shortcut if the denominators are matched
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }

        // both denominators are positive, so cross multiplication keeps the order
        (self.numer.clone() * &other.denom).cmp(&(self.denom.clone() * &other.numer))
    }
}

impl<T: RationalBase> PartialOrd for Rational<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub const ZERO: Rational<i32> = Rational::new_raw(0, 1);
    pub const ONE_THIRD: Rational<i32> = Rational::new_raw(1, 3);
    pub const N_ONE_THIRD: Rational<i32> = Rational::new_raw(-1, 3);

    #[test]
    fn equality_test() {
        let r = |n, d| Rational::<i32>::new(n, d).unwrap();

        assert_eq!(r(1, 2), r(1, 2));
        assert_eq!(r(2, 4), r(1, 2));
        assert_eq!(r(-3, -6), r(1, 2));

        assert_ne!(r(1, 2), r(1, 3));
        assert_ne!(r(1, 2), r(-1, 2));
        assert_ne!(r(2, 4), r(2, 6));
    }

    #[test]
    fn lt_test() {
        assert!(N_ONE_THIRD < ZERO);
        assert!(N_ONE_THIRD < ONE_THIRD);
        assert!(ZERO < ONE_THIRD);
        assert!(!(ONE_THIRD < ONE_THIRD));
        assert!(!(ONE_THIRD < N_ONE_THIRD));
        assert!(!(ZERO < N_ONE_THIRD));
    }

    #[test]
    fn le_test() {
        assert!(ONE_THIRD <= ONE_THIRD);
        assert!(ZERO <= ONE_THIRD);
        assert!(N_ONE_THIRD <= ONE_THIRD);
        assert!(!(ONE_THIRD <= ZERO));
    }

    #[test]
    fn gt_test() {
        assert!(ZERO > N_ONE_THIRD);
        assert!(ONE_THIRD > N_ONE_THIRD);
        assert!(ONE_THIRD > ZERO);
        assert!(!(ONE_THIRD > ONE_THIRD));
        assert!(!(N_ONE_THIRD > ZERO));
    }

    #[test]
    fn ge_test() {
        assert!(ONE_THIRD >= ONE_THIRD);
        assert!(ONE_THIRD >= ZERO);
        assert!(ZERO >= N_ONE_THIRD);
        assert!(ONE_THIRD >= N_ONE_THIRD);
        assert!(!(N_ONE_THIRD >= ONE_THIRD));
    }

    #[test]
    fn total_order_test() {
        let mut samples = Vec::new();
        for n in -5..=5 {
            for d in 1..=5 {
                samples.push(Rational::<i32>::new(n, d).unwrap());
            }
        }

        for a in &samples {
            for b in &samples {
                let holds = [a < b, a == b, a > b];
                assert_eq!(holds.iter().filter(|&&h| h).count(), 1, "{:?} {:?}", a, b);
                assert_eq!(a <= b, !(b < a));
                assert_eq!(a >= b, !(a < b));

                // agrees with the value as a float
                let (fa, fb) = (
                    *a.numer() as f64 / *a.denom() as f64,
                    *b.numer() as f64 / *b.denom() as f64,
                );
                assert_eq!(a.partial_cmp(b), fa.partial_cmp(&fb));

                for c in &samples {
                    if a < b && b < c {
                        assert!(a < c);
                    }
                }
            }
        }
    }

    #[test]
    fn sort_test() {
        let r = |n, d| Rational::<i64>::new(n, d).unwrap();
        let mut v = vec![r(1, 2), r(-3, 4), r(0, 1), r(5, 3), r(-1, 7)];
        v.sort();
        assert_eq!(v, vec![r(-3, 4), r(-1, 7), r(0, 1), r(1, 2), r(5, 3)]);
        assert_eq!(v.iter().max(), Some(&r(5, 3)));
    }
}
