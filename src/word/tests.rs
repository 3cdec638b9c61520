//! Word operation testing, mostly against 8-bit (two-nybble) words.

use crate::config::Config;
use crate::error::Error;
use crate::word::{Popcount, Radix, Sign, Word};
use std::cmp::Ordering;
use std::str::FromStr;

fn conf() -> Config {
    Config::new(2).unwrap()
}

fn uw(n: u128) -> Word {
    conf().uword(n).unwrap()
}

fn iw(n: i128) -> Word {
    conf().iword(n).unwrap()
}

#[test]
fn add_identity_exhaustive() {
    let conf = conf();
    let zero = conf.uword(0).unwrap();

    for n in 0..=255 {
        let w = conf.uword(n).unwrap();

        assert_eq!(w.add(&zero).unwrap().value(), n);
        assert_eq!(w.sub(&zero).unwrap().value(), n);
    }
}

#[test]
fn bitwise_identities_exhaustive() {
    for n in 0..=255 {
        let w = uw(n);

        assert_eq!(w.bxor(&w).unwrap().value(), 0);
        assert_eq!(w.band(&w).unwrap().value(), n);
        assert_eq!(w.bor(&w).unwrap().value(), n);
        assert_eq!(w.bnot().bnot().value(), n);
    }
}

#[test]
fn add_matches_host_arithmetic() {
    for a in (0..=255).step_by(7) {
        for b in (0..=255).step_by(11) {
            assert_eq!(
                uw(a).add(&uw(b)).unwrap().value(),
                (a + b) % 256,
                "{} + {}",
                a,
                b
            );
        }
    }
}

#[test]
fn sub_matches_host_arithmetic() {
    for a in (0..=255u128).step_by(7) {
        for b in (0..=255u128).step_by(11) {
            assert_eq!(
                uw(a).sub(&uw(b)).unwrap().value(),
                (256 + a - b) % 256,
                "{} - {}",
                a,
                b
            );
        }
    }
}

#[test]
fn add_wraps_at_the_top() {
    assert_eq!(uw(254).add(&uw(1)).unwrap().value(), 255);
    assert_eq!(uw(255).add(&uw(1)).unwrap().value(), 0);
}

#[test]
fn sub_wraps_at_zero() {
    assert_eq!(uw(0).sub(&uw(1)).unwrap().value(), 255);
    assert_eq!(uw(1).sub(&uw(1)).unwrap().value(), 0);
}

#[test]
fn wider_words_wrap_too() {
    let conf = Config::new(3).unwrap();
    let max = conf.uword(0xFFF).unwrap();
    let one = conf.uword(1).unwrap();

    assert_eq!(max.add(&one).unwrap().value(), 0);
    assert_eq!(conf.uword(0).unwrap().sub(&one).unwrap().value(), 0xFFF);
}

#[test]
fn bitor_vectors() {
    assert_eq!(uw(0).bor(&uw(0)).unwrap().value(), 0);
    assert_eq!(uw(3).bor(&uw(4)).unwrap().value(), 7);
    assert_eq!(uw(5).bor(&uw(6)).unwrap().value(), 7);
}

#[test]
fn bitand_vectors() {
    assert_eq!(uw(3).band(&uw(2)).unwrap().value(), 2);
    assert_eq!(uw(5).band(&uw(6)).unwrap().value(), 4);
}

#[test]
fn inc_dec_wrap() {
    assert_eq!(uw(255).inc().value(), 0);
    assert_eq!(uw(0).dec().value(), 255);
    assert_eq!(uw(0x0F).inc().value(), 0x10);
    assert_eq!(uw(0x10).dec().value(), 0x0F);
}

#[test]
fn shl_fills_zero_and_saturates() {
    assert_eq!(uw(1).shl(7).value(), 128);
    assert_eq!(uw(1).shl(8).value(), 0);
    assert_eq!(uw(1).shl(9).value(), 0);
    assert_eq!(uw(0xFF).shl(4).value(), 0xF0);
}

#[test]
fn shr_fills_zero() {
    assert_eq!(uw(128).shr(1).value(), 0x40);
    assert_eq!(uw(0xFF).shr(4).value(), 0x0F);
    assert_eq!(uw(0xFF).shr(8).value(), 0);
}

#[test]
fn sar_extends_the_sign() {
    let min = iw(-128);

    assert_eq!(min.sar(1).value(), 0xC0);
    assert_eq!(min.sar(2).value(), 0xE0);
    assert_eq!(min.sar(3).value(), 0xF0);
    assert_eq!(min.sar(4).value(), 0xF8);
    assert_eq!(min.sar(8).value(), 0xFF);

    assert_eq!(iw(4).sar(1).value(), 2);
    assert_eq!(iw(4).sar(2).value(), 1);
    assert_eq!(iw(3).sar(1).value(), 1);
    assert_eq!(iw(2).sar(1).value(), 1);
    assert_eq!(iw(0).sar(1).value(), 0);
    assert_eq!(iw(127).sar(8).value(), 0);
}

#[test]
fn rotations_are_periodic() {
    for n in &[0u128, 1, 2, 0x81, 0xAA, 0xFF] {
        let w = uw(*n);

        assert_eq!(w.rotl(8).value(), *n);
        assert_eq!(w.rotr(8).value(), *n);

        for k in 0..=16 {
            assert_eq!(w.rotl(k).value(), w.rotl(k % 8).value());
            assert_eq!(w.rotr(k).rotl(k).value(), *n);
            assert_eq!(w.rotl(k).rotr(k).value(), *n);
        }
    }
}

#[test]
fn rotl_vectors() {
    assert_eq!(uw(1).rotl(1).value(), 2);
    assert_eq!(uw(3).rotl(2).value(), 12);
    assert_eq!(uw(0x80).rotl(1).value(), 1);
    assert_eq!(uw(1).rotr(1).value(), 0x80);
}

#[test]
fn bit_get_counts_from_the_lsb() {
    assert_eq!(uw(2).bit_get(0).unwrap(), false);
    assert_eq!(uw(2).bit_get(1).unwrap(), true);
    assert_eq!(uw(2).bit_get(2).unwrap(), false);
    assert_eq!(uw(5).bit_get(2).unwrap(), true);
    assert_eq!(uw(0xFE).bit_get(1).unwrap(), true);
    assert_eq!(uw(0xFE).bit_get(0).unwrap(), false);
}

#[test]
fn bit_get_accepts_negative_offsets() {
    assert_eq!(iw(-128).bit_get(-1).unwrap(), true);
    assert_eq!(uw(0x7F).bit_get(-1).unwrap(), false);
}

#[test]
fn bit_get_rejects_out_of_range_offsets() {
    match uw(0).bit_get(8) {
        Err(Error::BitIndexOutOfRange { index: 8, bits: 8, .. }) => {}
        other => panic!("unexpected result {:?}", other),
    }

    assert!(uw(0).bit_get(-9).is_err());
}

#[test]
fn bit_set_round_trips() {
    for n in &[0u128, 0x55, 0xFF] {
        for i in 0..8 {
            for bit in &[false, true] {
                let set = uw(*n).bit_set(i, *bit).unwrap();

                assert_eq!(set.bit_get(i).unwrap(), *bit);

                for j in 0..8 {
                    if j != i {
                        assert_eq!(set.bit_get(j).unwrap(), uw(*n).bit_get(j).unwrap());
                    }
                }
            }
        }
    }
}

#[test]
fn bit_flip_is_an_involution() {
    let w = uw(0xA5);

    for i in 0..8 {
        assert_eq!(w.bit_flip(i).unwrap().bit_flip(i).unwrap(), w);
        assert_ne!(
            w.bit_flip(i).unwrap().bit_get(i).unwrap(),
            w.bit_get(i).unwrap()
        );
    }
}

#[test]
fn bit_dump_is_msb_first() {
    assert_eq!(
        uw(0x81).bit_dump(),
        vec![true, false, false, false, false, false, false, true]
    );
}

#[test]
fn popcount() {
    assert_eq!(uw(0x9F).pop_count(), 6);
    assert_eq!(uw(0x9F).depop_count(), 2);
    assert_eq!(uw(0).pop_count(), 0);
    assert_eq!(uw(0xFF).pop_count(), 8);
}

#[test]
fn neg_is_twos_complement() {
    assert_eq!(iw(1).neg().value(), 0xFF);
    assert_eq!(iw(0).neg().value(), 0);
    assert_eq!(iw(-128).neg().value(), 0x80);
    assert_eq!(iw(-5).neg().signed_value(), 5);
}

#[test]
fn abs_only_touches_negative_words() {
    assert_eq!(iw(-5).abs().signed_value(), 5);
    assert_eq!(iw(5).abs().signed_value(), 5);
    assert_eq!(uw(255).abs().value(), 255);
}

#[test]
fn mul_vectors() {
    assert_eq!(uw(0).mul(&uw(0)).unwrap().value(), 0);
    assert_eq!(uw(0).mul(&uw(1)).unwrap().value(), 0);
    assert_eq!(uw(1).mul(&uw(1)).unwrap().value(), 1);
    assert_eq!(uw(1).mul(&uw(2)).unwrap().value(), 2);
    assert_eq!(uw(2).mul(&uw(2)).unwrap().value(), 4);
    assert_eq!(iw(-2).mul(&iw(2)).unwrap().signed_value(), -4);
    assert_eq!(iw(2).mul(&iw(-2)).unwrap().signed_value(), -4);
    assert_eq!(iw(-2).mul(&iw(-2)).unwrap().signed_value(), 4);
}

#[test]
fn mul_wraps() {
    assert_eq!(uw(255).mul(&uw(1)).unwrap().value(), 255);
    assert_eq!(uw(255).mul(&uw(255)).unwrap().value(), 1);
    assert_eq!(uw(127).mul(&uw(255)).unwrap().value(), 129);
}

#[test]
fn mul_matches_host_arithmetic() {
    for a in (0..=255).step_by(13) {
        for b in (0..=255).step_by(17) {
            assert_eq!(
                uw(a).mul(&uw(b)).unwrap().value(),
                (a * b) % 256,
                "{} * {}",
                a,
                b
            );
        }
    }
}

#[test]
fn divr_truncates_toward_zero() {
    for (a, b, q, r) in &[
        (10, 5, 2, 0),
        (11, 5, 2, 1),
        (12, 5, 2, 2),
        (13, 5, 2, 3),
        (14, 5, 2, 4),
        (-10, 5, -2, 0),
        (-11, 5, -2, -1),
        (-14, 5, -2, -4),
        (10, -5, -2, 0),
        (11, -5, -2, 1),
        (14, -5, -2, 4),
        (-10, -5, 2, 0),
        (-11, -5, 2, -1),
        (-14, -5, 2, -4),
    ] {
        let (quot, rem) = iw(*a).divr(&iw(*b)).unwrap();

        assert_eq!(quot.signed_value(), *q, "{} / {}", a, b);
        assert_eq!(rem.signed_value(), *r, "{} % {}", a, b);
    }
}

#[test]
fn divr_matches_host_arithmetic() {
    for a in (0..=255).step_by(5) {
        for b in (1..=255u128).step_by(9) {
            let (q, r) = uw(a).divr(&uw(b)).unwrap();

            assert_eq!(q.value(), a / b, "{} / {}", a, b);
            assert_eq!(r.value(), a % b, "{} % {}", a, b);
        }
    }
}

#[test]
fn division_by_zero_fails() {
    match iw(10).divr(&iw(0)) {
        Err(Error::DivisionByZero { op: "divr", dividend }) => {
            assert_eq!(dividend, "10");
        }
        other => panic!("unexpected result {:?}", other),
    }

    assert!(uw(10).div(&uw(0)).is_err());
    assert!(uw(10).rem(&uw(0)).is_err());
}

#[test]
fn compare_is_sign_aware() {
    assert_eq!(iw(-1).compare(&iw(0)).unwrap(), Ordering::Less);
    assert_eq!(iw(-128).compare(&iw(127)).unwrap(), Ordering::Less);
    assert_eq!(iw(1).compare(&iw(-1)).unwrap(), Ordering::Greater);
    assert_eq!(uw(255).compare(&uw(127)).unwrap(), Ordering::Greater);
    assert_eq!(uw(5).compare(&uw(5)).unwrap(), Ordering::Equal);

    // Same digits, different reading: 0xFF signed is -1, unsigned is 255.
    assert_eq!(iw(-1).compare(&uw(255).cast_sign(Sign::Signed)).unwrap(), Ordering::Equal);
    assert_eq!(iw(-1).compare(&uw(0)).unwrap(), Ordering::Less);
}

#[test]
fn min_max() {
    assert_eq!(iw(-1).min_word(&iw(1)).unwrap().signed_value(), -1);
    assert_eq!(iw(-1).max_word(&iw(1)).unwrap().signed_value(), 1);
    assert_eq!(uw(200).max_word(&uw(100)).unwrap().value(), 200);
}

#[test]
fn zero_predicates() {
    assert!(uw(0).eqz());
    assert!(!uw(0).nez());
    assert!(uw(1).gtz());
    assert!(uw(255).gtz());
    assert!(iw(-1).ltz());
    assert!(!uw(255).ltz());
    assert!(iw(0).gez());
    assert!(iw(-1).lez());
}

#[test]
fn is_negative_derives_from_the_top_bit() {
    for n in 0..=255u128 {
        let signed = uw(n).cast_sign(Sign::Signed);

        assert_eq!(signed.is_negative(), n >= 128, "value {}", n);
        assert!(!uw(n).is_negative());
    }
}

#[test]
fn arith_results_promote() {
    let u = uw(1);
    let i = iw(1);
    let ihex = iw(1).cast_radix(Radix::Hex);

    let sum = i.add(&u).unwrap();
    assert_eq!(sum.sign(), Sign::Unsigned);
    assert_eq!(sum.radix(), Radix::Dec);

    let sum = ihex.add(&ihex).unwrap();
    assert_eq!(sum.sign(), Sign::Signed);
    assert_eq!(sum.radix(), Radix::Hex);

    let sum = ihex.add(&i).unwrap();
    assert_eq!(sum.sign(), Sign::Signed);
    assert_eq!(sum.radix(), Radix::Dec);

    let sum = ihex.mul(&u.cast_radix(Radix::Hex)).unwrap();
    assert_eq!(sum.sign(), Sign::Unsigned);
    assert_eq!(sum.radix(), Radix::Hex);
}

#[test]
fn bitwise_results_keep_the_left_cast() {
    let left = iw(3).cast_radix(Radix::Hex);
    let right = uw(5);

    let out = left.band(&right).unwrap();
    assert_eq!(out.sign(), Sign::Signed);
    assert_eq!(out.radix(), Radix::Hex);

    let out = left.shl(1);
    assert_eq!(out.sign(), Sign::Signed);
    assert_eq!(out.radix(), Radix::Hex);

    let out = right.rotl(3);
    assert_eq!(out.sign(), Sign::Unsigned);
    assert_eq!(out.radix(), Radix::Dec);
}

#[test]
fn mismatched_widths_fail() {
    let narrow = uw(1);
    let wide = Config::new(3).unwrap().uword(1).unwrap();

    match narrow.add(&wide) {
        Err(Error::Domain { op: "add", .. }) => {}
        other => panic!("unexpected result {:?}", other),
    }

    assert!(narrow.band(&wide).is_err());
    assert!(narrow.mul(&wide).is_err());
    assert!(narrow.compare(&wide).is_err());
}

#[test]
fn string_forms() {
    assert_eq!(uw(255).to_hex_string(), "0xFF");
    assert_eq!(uw(255).to_decimal_string(), "255");
    assert_eq!(iw(-1).to_decimal_string(), "-1");
    assert_eq!(iw(-1).to_hex_string(), "0xFF");
    assert_eq!(uw(5).to_hex_string(), "0x05");
}

#[test]
fn display_literal_forms() {
    assert_eq!(format!("{}", uw(255)), "255u");
    assert_eq!(format!("{}", iw(-1)), "-1");
    assert_eq!(format!("{}", iw(-1).cast_radix(Radix::Hex)), "0xFF");
    assert_eq!(format!("{}", uw(255).cast_radix(Radix::Hex)), "0xFFu");
}

#[test]
fn words_serialize_as_their_literal_form() {
    assert_eq!(serde_json::to_string(&uw(255)).unwrap(), "\"255u\"");
    assert_eq!(
        serde_json::to_string(&iw(-1).cast_radix(Radix::Hex)).unwrap(),
        "\"0xFF\""
    );
}

#[test]
fn tag_names_parse() {
    assert_eq!(Sign::from_str("signed"), Ok(Sign::Signed));
    assert_eq!(Sign::from_str("uint"), Ok(Sign::Unsigned));
    assert!(Sign::from_str("sideways").is_err());
    assert_eq!(Radix::from_str("hex"), Ok(Radix::Hex));
    assert_eq!(Radix::from_str("decimal"), Ok(Radix::Dec));
}
