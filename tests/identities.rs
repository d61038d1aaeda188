#[cfg(test)]
mod test {
    use big_int::BigInt;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn big(val: i128) -> BigInt {
        val.to_string().parse().unwrap()
    }

    // assembles a signed value of up to 256 bits from four random words
    fn random_big(prng: &mut ChaCha20Rng) -> BigInt {
        let mut num = BigInt::default();
        for _ in 0..4 {
            num = (num << 64) + BigInt::from(prng.gen::<u64>());
        }
        if prng.gen::<bool>() {
            -num
        } else {
            num
        }
    }

    #[test]
    fn test_add_sub_mul_match_i128() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..500 {
            let x = prng.gen::<i64>();
            let y = prng.gen::<i64>();
            let a = BigInt::from(x);
            let b = BigInt::from(y);
            assert_eq!(&a + &b, big(x as i128 + y as i128));
            assert_eq!(&a - &b, big(x as i128 - y as i128));
            assert_eq!(&a * &b, big(x as i128 * y as i128));
        }
    }

    #[test]
    fn test_div_rem_match_i128() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);
        for _ in 0..500 {
            let x = prng.gen::<i64>();
            // one narrow and one wide divisor per round, for both division paths
            for y in [prng.gen::<i32>() as i128, prng.gen::<i64>() as i128] {
                if y == 0 {
                    continue;
                }
                let a = BigInt::from(x);
                let b = big(y);
                assert_eq!(&a / &b, big(x as i128 / y));
                assert_eq!(&a % &b, big(x as i128 % y));
                let (quot, rem) = a.div_rem(&b).unwrap();
                assert_eq!(&quot * &b + &rem, a);
            }
        }
    }

    #[test]
    fn test_bitwise_match_i64() {
        let mut prng = ChaCha20Rng::seed_from_u64(2);
        for _ in 0..500 {
            let x = prng.gen::<i64>();
            let y = prng.gen::<i64>();
            let a = BigInt::from(x);
            let b = BigInt::from(y);
            assert_eq!(&a & &b, BigInt::from(x & y));
            assert_eq!(&a | &b, BigInt::from(x | y));
            assert_eq!(&a ^ &b, BigInt::from(x ^ y));
            assert_eq!(!&a, BigInt::from(!x));
        }
    }

    #[test]
    fn test_shift_match_i128() {
        let mut prng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..500 {
            let x = prng.gen::<i64>();
            let k = prng.gen_range(0..=63);
            let a = BigInt::from(x);
            assert_eq!(&a << k, big((x as i128) << k));
            assert_eq!(&a >> k, big(x as i128 >> k));
            assert_eq!(&a << -k, &a >> k);
            assert_eq!(&a >> -k, &a << k);
        }
    }

    #[test]
    fn test_ordering_matches_i64() {
        let mut prng = ChaCha20Rng::seed_from_u64(4);
        for _ in 0..500 {
            let x = prng.gen::<i64>();
            let y = prng.gen::<i64>();
            let a = BigInt::from(x);
            let b = BigInt::from(y);
            assert_eq!(a.cmp(&b), x.cmp(&y));
            assert_eq!(a < b, x < y);
            assert_eq!(a < b, &a - &b < BigInt::default());
        }
    }

    #[test]
    fn test_big_operand_identities() {
        let mut prng = ChaCha20Rng::seed_from_u64(5);
        for _ in 0..200 {
            let a = random_big(&mut prng);
            let b = random_big(&mut prng);
            let c = random_big(&mut prng);

            assert_eq!(&(&a + &b) - &b, a);
            assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
            assert_eq!(&a + &-&a, BigInt::default());

            let flipped = !&a;
            assert_eq!(!&flipped, a);
            assert_eq!(&a ^ &a, BigInt::default());
            assert_eq!(&a & &a, a);
            assert_eq!(&a | &flipped, BigInt::from(-1));

            assert_eq!(&(&a << 77) >> 77, a);

            if !b.is_zero() {
                let (quot, rem) = a.div_rem(&b).unwrap();
                assert_eq!(&quot * &b + &rem, a);
                assert!(rem.abs() < b.abs());
                assert!(rem.is_zero() || ((rem < BigInt::default()) == (a < BigInt::default())));

                // an exact multiple divides back to the other factor
                let prod = &a * &b;
                assert_eq!(&prod / &b, a);
                assert!((&prod % &b).is_zero());
            }

            let s = a.to_string();
            assert_eq!(s.parse::<BigInt>().unwrap(), a);
        }
    }
}
