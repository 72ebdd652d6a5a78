//! GF(8) Arithmetic Tests
//!
//! The field is small enough to check every axiom exhaustively.

use rs8::reed_solomon::galois::{add, multiply, Gf8, FIELD_SIZE, MUL_TABLE};

fn all() -> Vec<Gf8> {
    Gf8::elements().collect()
}

#[test]
fn test_field_has_eight_elements() {
    assert_eq!(all().len(), FIELD_SIZE);
    assert_eq!(all().first(), Some(&Gf8::ZERO));
}

#[test]
fn test_multiplication_associative_and_commutative() {
    for &a in &all() {
        for &b in &all() {
            assert_eq!(a * b, b * a);
            for &c in &all() {
                assert_eq!((a * b) * c, a * (b * c));
            }
        }
    }
}

#[test]
fn test_distributive_law() {
    for &a in &all() {
        for &b in &all() {
            for &c in &all() {
                assert_eq!(a * (b + c), a * b + a * c);
            }
        }
    }
}

#[test]
fn test_every_nonzero_element_has_inverse() {
    for a in Gf8::elements().skip(1) {
        let inv = a.inverse().unwrap();
        assert_eq!(multiply(a, inv), Gf8::ONE);
        assert_eq!(a / a, Gf8::ONE);
    }
}

#[test]
fn test_additive_inverse_is_self() {
    for &a in &all() {
        assert_eq!(add(a, a), Gf8::ZERO);
        assert_eq!(a - a, Gf8::ZERO);
        assert_eq!(a + Gf8::ZERO, a);
    }
}

#[test]
fn test_alpha_generates_multiplicative_group() {
    let mut seen: Vec<u8> = (0..7).map(|e| Gf8::ALPHA.pow(e).value()).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_power_form_agrees_with_table() {
    // α³ · α⁶ = α⁹ = α²
    let a = Gf8::from_power(3);
    let b = Gf8::from_power(6);
    assert_eq!(MUL_TABLE[a.value() as usize][b.value() as usize], 4);
    assert_eq!((a * b).power(), Some(2));
}
