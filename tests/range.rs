use std::collections::VecDeque;

use nebula_random::{
    ByteSource, RANGE_MAX, RandomConfig, RandomError, SecureRandom, random_below, random_int,
};

struct Script(VecDeque<u8>);

impl Script {
    fn new(bytes: &[u8]) -> Self {
        Self(bytes.iter().copied().collect())
    }

    fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl ByteSource for Script {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
        for b in buf.iter_mut() {
            *b = self.0.pop_front().expect("script exhausted");
        }
        Ok(())
    }
}

#[derive(Debug)]
struct AllOnes;

impl ByteSource for AllOnes {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
        buf.fill(0xff);
        Ok(())
    }
}

fn collect(min: i64, max: i64, rounds: usize) -> Vec<i64> {
    (0..rounds).map(|_| random_int(min, max).unwrap()).collect()
}

#[test]
fn test_random_below_three() {
    let values: Vec<i64> = (0..100).map(|_| random_below(3).unwrap()).collect();

    assert!(values.iter().all(|v| (0..3).contains(v)));
    for expected in 0..3 {
        assert!(values.contains(&expected));
    }
}

#[test]
fn test_random_int_one_to_three() {
    let values = collect(1, 3, 100);

    assert!(values.iter().all(|v| (1..3).contains(v)));
    assert!(values.contains(&1));
    assert!(values.contains(&2));
}

#[test]
fn test_random_int_negative_range() {
    let values = collect(-10, -8, 100);

    assert!(values.iter().all(|v| (-10..-8).contains(v)));
    assert!(values.contains(&-10));
    assert!(values.contains(&-9));
}

#[test]
fn test_random_int_extreme_bounds() {
    let low = random_int(i64::MIN, i64::MIN + 5).unwrap();
    assert!((i64::MIN..i64::MIN + 5).contains(&low));

    let high = random_int(i64::MAX - 5, i64::MAX).unwrap();
    assert!((i64::MAX - 5..i64::MAX).contains(&high));
}

#[test]
fn test_random_int_widest_range() {
    let max = RANGE_MAX as i64;

    let value = random_below(max).unwrap();
    assert!((0..max).contains(&value));

    let value = random_int(-1, max - 1).unwrap();
    assert!((-1..max - 1).contains(&value));
}

#[test]
fn test_random_below_every_bound_up_to_1000() {
    for bound in 1..=1000 {
        let value = random_below(bound).unwrap();
        assert!((0..bound).contains(&value));
    }
}

#[test]
fn test_random_int_single_value_uses_no_entropy() {
    let mut rng = SecureRandom::from_source(Script::new(&[]));

    assert_eq!(rng.int(41, 42).unwrap(), 41);
}

#[test]
fn test_random_int_rejects_out_of_range_draws() {
    // width 3 needs two bits: 0xff -> 3 (rejected), 0x40 -> 1 (accepted)
    let mut rng = SecureRandom::from_source(Script::new(&[0xff, 0x40, 0x00]));

    assert_eq!(rng.int(10, 13).unwrap(), 11);
}

#[test]
fn test_random_int_power_of_two_width_needs_no_extra_bit() {
    // width 4 -> k = bit_length(3) = 2; 0xc0 -> 3 is always accepted
    let mut source = Script::new(&[0xc0, 0x00]);
    let mut rng = SecureRandom::from_source(&mut source);

    assert_eq!(rng.below(4).unwrap(), 3);
    drop(rng);
    assert_eq!(source.remaining(), 1);
}

#[test]
fn test_random_int_invalid_ordering() {
    for (min, max) in [(0, 0), (1, 1), (3, 2), (-5, -5), (11, -10)] {
        let err = random_int(min, max).unwrap_err();
        assert!(err.is_range_violation(), "({min}, {max}) should fail");
    }
}

#[test]
fn test_random_int_width_too_large() {
    let max = RANGE_MAX as i64;

    assert!(random_int(-2, max - 1).unwrap_err().is_range_violation());
    assert!(random_below(max + 1).unwrap_err().is_range_violation());
    assert!(random_int(i64::MIN, i64::MAX).unwrap_err().is_range_violation());
}

#[test]
fn test_random_int_rejection_ceiling() {
    let config = RandomConfig {
        max_rejections: Some(8),
        ..RandomConfig::default()
    };
    let mut rng = SecureRandom::with_config(AllOnes, config).unwrap();

    // every draw of two ones-bits is 3, never inside [0, 3)
    match rng.below(3) {
        Err(RandomError::RejectionLimit { attempts }) => assert_eq!(attempts, 8),
        other => panic!("expected rejection limit, got {other:?}"),
    }
}

#[test]
fn test_invalid_config_is_refused() {
    let config = RandomConfig {
        max_rejections: Some(0),
        ..RandomConfig::default()
    };

    let err = SecureRandom::with_config(AllOnes, config).unwrap_err();
    assert!(err.is_invalid_argument());
}
