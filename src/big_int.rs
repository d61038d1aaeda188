//! # BigInt
//! Immutable arbitrary-precision signed integers held as a sign and a little-endian
//! base `2^32` magnitude. The bitwise operators and the shifts behave as if BigInt
//! were represented in two's-complement notation.
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "10000000000000".into();
//! let b: BigInt = "900000000000".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```
//!

use std::fmt::Display;
use std::mem;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Neg, Not,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use lazy_static::*;
use smallvec::{smallvec, SmallVec};

use crate::big_int_cache::*;
use crate::big_int_constants::*;
use crate::error::BigIntError;

pub(crate) type Limbs = SmallVec<[u32; INLINE_LIMBS]>;

lazy_static! {
    pub(crate) static ref ZERO: BigInt = BigInt { sign: false, mag: smallvec![0] };
}

/// An arbitrary-precision signed integer.
///
/// `sign` is true for negative values and the magnitude is a little-endian
/// base `2^32` limb sequence with no most-significant zero limb. The value
/// zero is exactly `[0]` with `sign == false`.
#[derive(Debug, Clone)]
pub struct BigInt {
    sign: bool,
    mag: Limbs,
}

// construction
impl BigInt {
    pub(crate) fn from_raw(mag: Limbs, sign: bool) -> Self {
        debug_assert!(mag.len() == 1 || mag.last() != Some(&0));
        debug_assert!(!sign || mag.as_slice() != [0]);
        BigInt { sign, mag }
    }

    fn new(mag: Limbs, sign: bool) -> Self {
        let mut num = BigInt { sign, mag };
        num.normalize();
        num
    }

    fn normalize(&mut self) {
        trim_mag(&mut self.mag);
        if self.is_zero() {
            self.sign = false;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }

    fn is_single_limb(&self) -> bool {
        self.mag.len() == 1
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt { sign: false, mag: self.mag.clone() }
    }

    fn value_of(val: u64, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            if negative {
                return NEG_CACHE[val as usize].clone();
            }
            return POS_CACHE[val as usize].clone();
        }
        let low = val as u32;
        let high = (val >> BITS_IN_LIMB) as u32;
        let mag: Limbs = if high == 0 {
            smallvec![low]
        } else {
            smallvec![low, high]
        };
        BigInt::from_raw(mag, negative)
    }
}

impl Default for BigInt {
    /// The value zero.
    fn default() -> Self {
        ZERO.clone()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

impl FromStr for BigInt {
    type Err = BigIntError;

    /// Parses `^-?[0-9]+$`; anything else is a [`BigIntError::ParseError`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(BigIntError::ParseError);
        }
        let bytes = digits.as_bytes();
        let mut mag: Limbs = smallvec![0];
        let mut start = 0;
        let mut end = match bytes.len() % DIGITS_PER_LIMB {
            0 => DIGITS_PER_LIMB,
            first => first,
        };
        while start < bytes.len() {
            let mut group = 0u32;
            for &byte in &bytes[start..end] {
                if !byte.is_ascii_digit() {
                    return Err(BigIntError::ParseError);
                }
                group = group * 10 + (byte - b'0') as u32;
            }
            mul_add_mag_limb(&mut mag, DECIMAL_LIMB_RADIX, group);
            start = end;
            end += DIGITS_PER_LIMB;
        }
        Ok(BigInt::new(mag, negative))
    }
}

impl From<&str> for BigInt {
    /// Panicking convenience for literals; parse with [`str::parse`] to
    /// handle untrusted input.
    fn from(val: &str) -> Self {
        match val.parse() {
            Ok(num) => num,
            Err(err) => panic!("invalid decimal literal {:?}: {}", val, err),
        }
    }
}

// printing
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

impl BigInt {
    fn to_decimal(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        // peel off nine decimal digits per division
        let mut groups: Vec<u32> = Vec::new();
        let mut mag = self.mag.clone();
        while mag.as_slice() != [0] {
            let (mut quot, rem) = div_rem_mag_limb(&mag, DECIMAL_LIMB_RADIX);
            trim_mag(&mut quot);
            groups.push(rem);
            mag = quot;
        }
        let mut s = String::with_capacity(groups.len() * DIGITS_PER_LIMB + 1);
        if self.sign {
            s.push('-');
        }
        s.push_str(&groups[groups.len() - 1].to_string());
        for &group in groups[..groups.len() - 1].iter().rev() {
            s.push_str(&format!("{:09}", group));
        }
        s
    }
}

// comparison
impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.mag == other.mag
    }
}

impl Eq for BigInt {}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_mag(&self.mag, &other.mag),
            // the larger magnitude is the smaller value
            (true, true) => cmp_mag(&other.mag, &self.mag),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// magnitude arithmetic
fn trim_mag(mag: &mut Limbs) {
    while mag.len() > 1 && mag.last() == Some(&0) {
        mag.pop();
    }
}

fn cmp_mag(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

fn add_mag(a: &[u32], b: &[u32]) -> Limbs {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Limbs::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for i in 0..long.len() {
        let mut acc = long[i] as u64 + carry;
        if i < short.len() {
            acc += short[i] as u64;
        }
        sum.push(acc as u32);
        carry = acc >> BITS_IN_LIMB;
    }
    if carry != 0 {
        sum.push(carry as u32);
    }
    sum
}

// requires |big| >= |small|
fn sub_mag(big: &[u32], small: &[u32]) -> Limbs {
    let mut diff = Limbs::with_capacity(big.len());
    let mut borrow = 0u64;
    for i in 0..big.len() {
        let limb = if i < small.len() { small[i] as u64 } else { 0 };
        let acc = LIMB_BASE + big[i] as u64 - limb - borrow;
        diff.push(acc as u32);
        borrow = 1 - (acc >> BITS_IN_LIMB);
    }
    diff
}

fn mul_mag(a: &[u32], b: &[u32]) -> Limbs {
    let mut product: Limbs = smallvec![0; a.len() + b.len()];
    for i in 0..a.len() {
        let mut carry = 0u128;
        for j in 0..b.len() {
            let acc = product[i + j] as u128 + a[i] as u128 * b[j] as u128 + carry;
            product[i + j] = acc as u32;
            carry = acc >> BITS_IN_LIMB;
        }
        product[i + b.len()] = carry as u32;
    }
    product
}

// the carry limb stays in place so the division below sees a fixed width
fn mul_mag_limb(a: &[u32], factor: u32) -> Limbs {
    let mut product = Limbs::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &limb in a {
        let acc = limb as u64 * factor as u64 + carry;
        product.push(acc as u32);
        carry = acc >> BITS_IN_LIMB;
    }
    product.push(carry as u32);
    product
}

// mag = mag * factor + addend, in place
fn mul_add_mag_limb(mag: &mut Limbs, factor: u32, addend: u32) {
    let mut carry = addend as u64;
    for limb in mag.iter_mut() {
        let acc = *limb as u64 * factor as u64 + carry;
        *limb = acc as u32;
        carry = acc >> BITS_IN_LIMB;
    }
    if carry != 0 {
        mag.push(carry as u32);
    }
}

fn increment_mag(mag: &mut Limbs) {
    for limb in mag.iter_mut() {
        let (val, overflow) = limb.overflowing_add(1);
        *limb = val;
        if !overflow {
            return;
        }
    }
    mag.push(1);
}

/// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
fn div_rem_mag_limb(mag: &[u32], divisor: u32) -> (Limbs, u32) {
    let mut quot: Limbs = smallvec![0; mag.len()];
    let mut rem = 0u64;
    for i in (0..mag.len()).rev() {
        let acc = (rem << BITS_IN_LIMB) | mag[i] as u64;
        quot[i] = (acc / divisor as u64) as u32;
        rem = acc % divisor as u64;
    }
    (quot, rem as u32)
}

/// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
/// Requires a trimmed divisor of at least two limbs and a dividend magnitude
/// no smaller than the divisor's.
fn div_mag_knuth(u: &[u32], v: &[u32]) -> Limbs {
    let n = u.len();
    let m = v.len();
    // D1: scale both operands until the divisor's top limb reaches BASE / 2,
    // which bounds the trial digit error
    let factor = (LIMB_BASE / (v[m - 1] as u64 + 1)) as u32;
    let mut un = mul_mag_limb(u, factor);
    let mut vn = mul_mag_limb(v, factor);
    let top = vn.pop();
    debug_assert_eq!(top, Some(0));
    let d2 = ((vn[m - 1] as u64) << BITS_IN_LIMB) | vn[m - 2] as u64;
    let mut quot: Limbs = smallvec![0; n - m + 1];
    for k in (0..=n - m).rev() {
        let mut qt = trial(&un, k, m, d2);
        let mut dq = mul_mag_limb(&vn, qt);
        while smaller(&un, &dq, k, m) {
            qt -= 1;
            dq = mul_mag_limb(&vn, qt);
        }
        quot[k] = qt;
        difference(&mut un, &dq, k, m);
    }
    quot
}

// candidate digit from the top three dividend limbs over the top two divisor limbs
fn trial(un: &[u32], k: usize, m: usize, d2: u64) -> u32 {
    let km = k + m;
    let r3 = ((un[km] as u128) << (2 * BITS_IN_LIMB))
        | ((un[km - 1] as u128) << BITS_IN_LIMB)
        | un[km - 2] as u128;
    (r3 / d2 as u128).min(u32::MAX as u128) as u32
}

// does the dividend window at k hold less than dq?
fn smaller(un: &[u32], dq: &[u32], k: usize, m: usize) -> bool {
    for i in (0..=m).rev() {
        if un[i + k] != dq[i] {
            return un[i + k] < dq[i];
        }
    }
    false
}

// subtract dq from the dividend window at k, in place
fn difference(un: &mut [u32], dq: &[u32], k: usize, m: usize) {
    let mut borrow = 0u64;
    for i in 0..=m {
        let acc = LIMB_BASE + un[i + k] as u64 - dq[i] as u64 - borrow;
        un[i + k] = acc as u32;
        borrow = 1 - (acc >> BITS_IN_LIMB);
    }
}

// division
impl BigInt {
    /// Quotient truncated toward zero. Fails on a zero divisor.
    pub fn try_div(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let sign = self.sign ^ rhs.sign;
        if rhs.is_single_limb() {
            let (quot, _) = div_rem_mag_limb(&self.mag, rhs.mag[0]);
            return Ok(BigInt::new(quot, sign));
        }
        if cmp_mag(&self.mag, &rhs.mag) == Ordering::Less {
            return Ok(ZERO.clone());
        }
        Ok(BigInt::new(div_mag_knuth(&self.mag, &rhs.mag), sign))
    }

    /// Remainder of the truncating division; it takes the dividend's sign.
    /// Fails on a zero divisor.
    pub fn try_rem(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if rhs.is_single_limb() {
            let (_, rem) = div_rem_mag_limb(&self.mag, rhs.mag[0]);
            return Ok(BigInt::new(smallvec![rem], self.sign));
        }
        if cmp_mag(&self.mag, &rhs.mag) == Ordering::Less {
            return Ok(self.clone());
        }
        let quot = BigInt::new(div_mag_knuth(&self.mag, &rhs.mag), self.sign ^ rhs.sign);
        Ok(self - &(&quot * rhs))
    }

    /// Truncating quotient and remainder together. Fails on a zero divisor.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if rhs.is_single_limb() {
            let (quot, rem) = div_rem_mag_limb(&self.mag, rhs.mag[0]);
            let quot = BigInt::new(quot, self.sign ^ rhs.sign);
            let rem = BigInt::new(smallvec![rem], self.sign);
            return Ok((quot, rem));
        }
        if cmp_mag(&self.mag, &rhs.mag) == Ordering::Less {
            return Ok((ZERO.clone(), self.clone()));
        }
        let quot = BigInt::new(div_mag_knuth(&self.mag, &rhs.mag), self.sign ^ rhs.sign);
        let rem = self - &(&quot * rhs);
        Ok((quot, rem))
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        match self.try_div(rhs) {
            Ok(quot) => quot,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.try_rem(rhs) {
            Ok(rem) => rem,
            Err(err) => panic!("{}", err),
        }
    }
}

// addition
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }
        if self.sign == rhs.sign {
            return BigInt::new(add_mag(&self.mag, &rhs.mag), self.sign);
        }
        match cmp_mag(&self.mag, &rhs.mag) {
            Ordering::Equal => ZERO.clone(),
            Ordering::Greater => BigInt::new(sub_mag(&self.mag, &rhs.mag), self.sign),
            Ordering::Less => BigInt::new(sub_mag(&rhs.mag, &self.mag), rhs.sign),
        }
    }
}

// subtraction
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return -rhs;
        }
        if self.sign != rhs.sign {
            return BigInt::new(add_mag(&self.mag, &rhs.mag), self.sign);
        }
        match cmp_mag(&self.mag, &rhs.mag) {
            Ordering::Equal => ZERO.clone(),
            Ordering::Greater => BigInt::new(sub_mag(&self.mag, &rhs.mag), self.sign),
            Ordering::Less => BigInt::new(sub_mag(&rhs.mag, &self.mag), !rhs.sign),
        }
    }
}

// multiplication
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return ZERO.clone();
        }
        BigInt::new(mul_mag(&self.mag, &rhs.mag), self.sign ^ rhs.sign)
    }
}

// negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.clone().neg()
    }
}

// two's-complement bridge for the bitwise operators and the arithmetic shift
impl BigInt {
    // negative values complement every limb, gain an all-ones sign extension
    // limb and add one; non-negative values pass through unchanged
    fn twos_complement(&self) -> Limbs {
        if !self.sign {
            return self.mag.clone();
        }
        let mut view: Limbs = self.mag.iter().map(|&limb| !limb).collect();
        view.push(u32::MAX);
        increment_mag(&mut view);
        view
    }

    fn from_twos_complement(mut view: Limbs, negative: bool) -> BigInt {
        if negative {
            for limb in view.iter_mut() {
                *limb = !*limb;
            }
            increment_mag(&mut view);
        }
        BigInt::new(view, negative)
    }

    fn sign_extension(&self) -> u32 {
        if self.sign { u32::MAX } else { 0 }
    }
}

fn bitwise<L, S>(a: &BigInt, b: &BigInt, limb_op: L, sign_op: S) -> BigInt
where
    L: Fn(u32, u32) -> u32,
    S: Fn(bool, bool) -> bool,
{
    let mut x = a.twos_complement();
    let mut y = b.twos_complement();
    // the shorter view grows by its own sign extension, not the other's
    let len = x.len().max(y.len());
    x.resize(len, a.sign_extension());
    y.resize(len, b.sign_extension());
    for i in 0..len {
        x[i] = limb_op(x[i], y[i]);
    }
    BigInt::from_twos_complement(x, sign_op(a.sign, b.sign))
}

impl BitAnd<&BigInt> for &BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: &BigInt) -> BigInt {
        bitwise(self, rhs, |x, y| x & y, |x, y| x && y)
    }
}

impl BitOr<&BigInt> for &BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: &BigInt) -> BigInt {
        bitwise(self, rhs, |x, y| x | y, |x, y| x || y)
    }
}

impl BitXor<&BigInt> for &BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: &BigInt) -> BigInt {
        bitwise(self, rhs, |x, y| x ^ y, |x, y| x ^ y)
    }
}

// !x == -(x + 1) in two's complement
impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        -(self + &POS_CACHE[1])
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        !&self
    }
}

// shifts; a negative amount shifts the other way
impl BigInt {
    fn shifted_left(&self, bits: u32) -> BigInt {
        if self.is_zero() || bits == 0 {
            return self.clone();
        }
        let limb_shift = (bits / BITS_IN_LIMB) as usize;
        let bit_shift = bits % BITS_IN_LIMB;
        let mut mag: Limbs = smallvec![0; limb_shift];
        mag.extend_from_slice(&self.mag);
        if bit_shift != 0 {
            let mut carry = 0u32;
            for limb in mag.iter_mut().skip(limb_shift) {
                let val = (*limb << bit_shift) | carry;
                carry = *limb >> (BITS_IN_LIMB - bit_shift);
                *limb = val;
            }
            mag.push(carry);
        }
        BigInt::new(mag, self.sign)
    }

    fn shifted_right(&self, bits: u32) -> BigInt {
        if self.is_zero() || bits == 0 {
            return self.clone();
        }
        let limb_shift = (bits / BITS_IN_LIMB) as usize;
        let bit_shift = bits % BITS_IN_LIMB;
        if !self.sign {
            if limb_shift >= self.mag.len() {
                return ZERO.clone();
            }
            let mut mag: Limbs = self.mag[limb_shift..].iter().copied().collect();
            if bit_shift != 0 {
                for i in 0..mag.len() {
                    let high = if i + 1 < mag.len() { mag[i + 1] } else { 0 };
                    mag[i] = (mag[i] >> bit_shift) | (high << (BITS_IN_LIMB - bit_shift));
                }
            }
            return BigInt::new(mag, false);
        }
        // arithmetic shift: all-ones limbs stream in from the sign extension
        let mut view = self.twos_complement();
        if limb_shift > 0 {
            view.extend(std::iter::repeat(u32::MAX).take(limb_shift));
            view = view[limb_shift..].iter().copied().collect();
        }
        if bit_shift != 0 {
            for i in 0..view.len() {
                let high = if i + 1 < view.len() { view[i + 1] } else { u32::MAX };
                view[i] = (view[i] >> bit_shift) | (high << (BITS_IN_LIMB - bit_shift));
            }
        }
        BigInt::from_twos_complement(view, true)
    }
}

impl Shl<i32> for &BigInt {
    type Output = BigInt;

    fn shl(self, rhs: i32) -> BigInt {
        if rhs < 0 {
            self.shifted_right(rhs.unsigned_abs())
        } else {
            self.shifted_left(rhs as u32)
        }
    }
}

impl Shl<i32> for BigInt {
    type Output = BigInt;

    fn shl(self, rhs: i32) -> BigInt {
        &self << rhs
    }
}

impl Shr<i32> for &BigInt {
    type Output = BigInt;

    fn shr(self, rhs: i32) -> BigInt {
        if rhs < 0 {
            self.shifted_left(rhs.unsigned_abs())
        } else {
            self.shifted_right(rhs as u32)
        }
    }
}

impl Shr<i32> for BigInt {
    type Output = BigInt;

    fn shr(self, rhs: i32) -> BigInt {
        &self >> rhs
    }
}

impl ShlAssign<i32> for BigInt {
    fn shl_assign(&mut self, rhs: i32) {
        *self = &*self << rhs;
    }
}

impl ShrAssign<i32> for BigInt {
    fn shr_assign(&mut self, rhs: i32) {
        *self = &*self >> rhs;
    }
}

// the reference-reference implementations above are the primitives; the owned
// and compound forms forward to them
macro_rules! forward_binop {
    (impl $imp: ident, $method: ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(self, &rhs)
            }
        }
    };
}

macro_rules! forward_binop_assign {
    (impl $imp: ident, $method: ident, $binop: ident, $bin_method: ident) => {
        impl $imp<BigInt> for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                $imp::$method(self, &rhs);
            }
        }

        impl $imp<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                let lhs = mem::take(self);
                *self = $binop::$bin_method(&lhs, rhs);
            }
        }
    };
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
forward_binop!(impl Mul, mul);
forward_binop!(impl Div, div);
forward_binop!(impl Rem, rem);
forward_binop!(impl BitAnd, bitand);
forward_binop!(impl BitOr, bitor);
forward_binop!(impl BitXor, bitxor);

forward_binop_assign!(impl AddAssign, add_assign, Add, add);
forward_binop_assign!(impl SubAssign, sub_assign, Sub, sub);
forward_binop_assign!(impl MulAssign, mul_assign, Mul, mul);
forward_binop_assign!(impl DivAssign, div_assign, Div, div);
forward_binop_assign!(impl RemAssign, rem_assign, Rem, rem);
forward_binop_assign!(impl BitAndAssign, bitand_assign, BitAnd, bitand);
forward_binop_assign!(impl BitOrAssign, bitor_assign, BitOr, bitor);
forward_binop_assign!(impl BitXorAssign, bitxor_assign, BitXor, bitxor);

#[test]
fn test_from() {
    assert_eq!(BigInt::from(0u32).to_string(), "0");
    assert_eq!(BigInt::from(42u8).to_string(), "42");
    assert_eq!(BigInt::from(-42i8).to_string(), "-42");
    assert_eq!(BigInt::from(16u32), BigInt::from("16"));
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(1_000_000usize).to_string(), "1000000");
    assert_eq!(BigInt::from(i8::MIN).to_string(), "-128");
    assert_eq!(BigInt::from(i32::MIN).to_string(), "-2147483648");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert!(BigInt::default().is_zero());
    assert_eq!(BigInt::default(), BigInt::from(0i32));
}

#[test]
fn test_parse() {
    let a: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(a.to_string(), "123456789012345678901234567890");
    let neg: BigInt = "-98765432109876543210".parse().unwrap();
    assert_eq!(neg.to_string(), "-98765432109876543210");

    let zero: BigInt = "-0".parse().unwrap();
    assert!(zero.is_zero());
    assert_eq!(zero.to_string(), "0");
    assert_eq!("0000123".parse::<BigInt>().unwrap().to_string(), "123");
    assert_eq!("-0042".parse::<BigInt>().unwrap().to_string(), "-42");

    assert_eq!("".parse::<BigInt>(), Err(crate::BigIntError::ParseError));
    assert_eq!("-".parse::<BigInt>(), Err(crate::BigIntError::ParseError));
    assert_eq!("12a3".parse::<BigInt>(), Err(crate::BigIntError::ParseError));
    assert_eq!("+5".parse::<BigInt>(), Err(crate::BigIntError::ParseError));
    assert_eq!("--4".parse::<BigInt>(), Err(crate::BigIntError::ParseError));
    assert_eq!(" 5".parse::<BigInt>(), Err(crate::BigIntError::ParseError));
}

#[test]
fn test_add() {
    let a: BigInt = "2".into();
    let b: BigInt = "3".into();
    let one = BigInt::from(1);
    assert_eq!((&a + &b).to_string(), "5");

    // carry across a limb boundary
    let c: BigInt = "4294967295".into();
    assert_eq!((&c + &one).to_string(), "4294967296");
    let d: BigInt = "18446744073709551615".into();
    assert_eq!((&d + &one).to_string(), "18446744073709551616");

    let e: BigInt = "-5".into();
    let f: BigInt = "3".into();
    assert_eq!((&e + &f).to_string(), "-2");
    assert_eq!((&f + &e).to_string(), "-2");
    assert_eq!(&e + &BigInt::from(5), BigInt::default());

    let big: BigInt = "123456789012345678901234567890".into();
    assert_eq!((&big + &one).to_string(), "123456789012345678901234567891");
    assert_eq!(&big + &-&big, BigInt::default());
}

#[test]
fn test_sub() {
    let a: BigInt = "5".into();
    let b: BigInt = "3".into();
    assert_eq!((&a - &b).to_string(), "2");
    assert_eq!((&b - &a).to_string(), "-2");

    let c: BigInt = "-5".into();
    let d: BigInt = "-3".into();
    assert_eq!((&c - &d).to_string(), "-2");
    assert_eq!((&d - &c).to_string(), "2");

    // borrow across a limb boundary
    let e: BigInt = "18446744073709551616".into();
    assert_eq!((&e - &BigInt::from(1)).to_string(), "18446744073709551615");

    let big: BigInt = "123456789012345678901234567890".into();
    assert_eq!(&big - &big, BigInt::default());
    assert_eq!((BigInt::default() - &big).to_string(), "-123456789012345678901234567890");
}

#[test]
fn test_mul() {
    let a: BigInt = "1000000000000000000".into();
    assert_eq!((&a * &a).to_string(), "1000000000000000000000000000000000000");

    let b: BigInt = "18446744073709551616".into();
    assert_eq!((&b * &b).to_string(), "340282366920938463463374607431768211456");

    assert_eq!((BigInt::from(-3) * BigInt::from(5)).to_string(), "-15");
    assert_eq!((BigInt::from(3) * BigInt::from(-5)).to_string(), "-15");
    assert_eq!((BigInt::from(-3) * BigInt::from(-5)).to_string(), "15");

    let big: BigInt = "123456789012345678901234567890".into();
    assert_eq!(&big * &BigInt::default(), BigInt::default());
    assert_eq!(&big * &BigInt::from(1), big);
}

#[test]
fn test_square() {
    let a: BigInt = concat!(
        "1",
        "0000000000", "0000000000", "0000000000", "0000000000", "0000000000",
        "0000000000", "0000000000", "0000000000", "0000000000", "0000000000"
    ).into();
    let squared = concat!(
        "1",
        "0000000000", "0000000000", "0000000000", "0000000000", "0000000000",
        "0000000000", "0000000000", "0000000000", "0000000000", "0000000000",
        "0000000000", "0000000000", "0000000000", "0000000000", "0000000000",
        "0000000000", "0000000000", "0000000000", "0000000000", "0000000000"
    );
    assert_eq!((&a * &a).to_string(), squared);
}

// test divide Knuth
#[test]
fn test_div() {
    assert_eq!((BigInt::from(84) / BigInt::from(2)).to_string(), "42");
    assert_eq!((BigInt::from(17) / BigInt::from(5)).to_string(), "3");
    assert_eq!((BigInt::from(-17) / BigInt::from(5)).to_string(), "-3");
    assert_eq!((BigInt::from(17) / BigInt::from(-5)).to_string(), "-3");
    assert_eq!((BigInt::from(-17) / BigInt::from(-5)).to_string(), "3");

    // single-limb fast path over a long dividend
    let a: BigInt = "1000000000000000000000000000000000000".into();
    let b: BigInt = "1000000000".into();
    assert_eq!((&a / &b).to_string(), "1000000000000000000000000000");

    // 2^96 = (2^64 + 2^32 + 1) * (2^32 - 1) + 1
    let c: BigInt = "79228162514264337593543950336".into();
    let d: BigInt = "18446744078004518913".into();
    assert_eq!((&c / &d).to_string(), "4294967295");
    assert_eq!((&-&c / &d).to_string(), "-4294967295");

    // quotient shorter than the dividend
    let e: BigInt = "5".into();
    let f: BigInt = "18446744073709551616".into();
    assert_eq!(&e / &f, BigInt::default());

    let pow40: BigInt = concat!("1", "0000000000", "0000000000", "0000000000", "0000000000").into();
    let pow30: BigInt = concat!("1", "0000000000", "0000000000", "0000000000").into();
    let g = &pow40 + &BigInt::from(17);
    let h = &pow30 + &BigInt::from(3);
    let x = &g * &h + BigInt::from(123456789);
    assert_eq!(&x / &h, g);
    assert_eq!((&x % &h).to_string(), "123456789");
}

#[test]
fn test_mod() {
    assert_eq!((BigInt::from(17) % BigInt::from(5)).to_string(), "2");
    assert_eq!((BigInt::from(-17) % BigInt::from(5)).to_string(), "-2");
    assert_eq!((BigInt::from(17) % BigInt::from(-5)).to_string(), "2");
    assert_eq!((BigInt::from(-17) % BigInt::from(-5)).to_string(), "-2");

    // 10^9 == 1 (mod 10^9 - 1), so 10^18 leaves 1
    let a: BigInt = "1000000000000000000".into();
    let b: BigInt = "999999999".into();
    assert_eq!((&a % &b).to_string(), "1");
    assert_eq!(&a % &BigInt::from("1000000000"), BigInt::default());

    let c: BigInt = "79228162514264337593543950336".into();
    let d: BigInt = "18446744078004518913".into();
    assert_eq!((&c % &d).to_string(), "1");
    assert_eq!((&-&c % &d).to_string(), "-1");

    assert_eq!(&c % &BigInt::from(1), BigInt::default());
}

#[test]
fn test_div_rem() {
    let a: BigInt = "17".into();
    let b: BigInt = "5".into();
    let (quot, rem) = a.div_rem(&b).unwrap();
    assert_eq!(quot.to_string(), "3");
    assert_eq!(rem.to_string(), "2");

    // (2^32 + 1) * 2^64 exercises the multi-limb path exactly
    let one = BigInt::from(1);
    let c = (&one << 96) + (&one << 64);
    let d = (&one << 32) + &one;
    let (quot, rem) = c.div_rem(&d).unwrap();
    assert_eq!(quot, &one << 64);
    assert!(rem.is_zero());
    assert_eq!(c.to_string(), "79228162532711081667253501952");

    for (x, y) in [(-17, 5), (17, -5), (-17, -5), (1000, 3), (-1, 7)] {
        let a = BigInt::from(x);
        let b = BigInt::from(y);
        let (quot, rem) = a.div_rem(&b).unwrap();
        assert_eq!(&quot * &b + &rem, a);
        assert_eq!(quot, &a / &b);
        assert_eq!(rem, &a % &b);
    }
}

#[test]
fn test_division_by_zero() {
    let five: BigInt = "5".into();
    let zero = BigInt::default();
    assert_eq!(five.try_div(&zero), Err(crate::BigIntError::DivisionByZero));
    assert_eq!(five.try_rem(&zero), Err(crate::BigIntError::DivisionByZero));
    assert_eq!(five.div_rem(&zero), Err(crate::BigIntError::DivisionByZero));
    assert_eq!(zero.try_div(&five), Ok(BigInt::default()));
    assert_eq!(zero.try_rem(&five), Ok(BigInt::default()));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_by_zero_panics() {
    let five: BigInt = "5".into();
    let _ = &five / &BigInt::default();
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_mod_by_zero_panics() {
    let five: BigInt = "5".into();
    let _ = &five % &BigInt::default();
}

#[test]
fn test_bitand() {
    assert_eq!((BigInt::from(255) & BigInt::from(15)).to_string(), "15");
    assert_eq!((BigInt::from(-1) & BigInt::from(1)).to_string(), "1");
    assert_eq!((BigInt::from(-2) & BigInt::from(-3)).to_string(), "-4");

    // the shorter operand extends with its own sign, not with zeros
    let big = &BigInt::from(1) << 64;
    assert_eq!(&BigInt::from(-1) & &big, big);
    assert_eq!(&big & &BigInt::from(-1), big);

    let a: BigInt = "-123456789012345678901234567890".into();
    assert_eq!(&a & &a, a);
}

#[test]
fn test_bitor() {
    assert_eq!((BigInt::from(5) | BigInt::default()).to_string(), "5");
    assert_eq!((BigInt::from(-2) | BigInt::from(-3)).to_string(), "-1");
    assert_eq!(((&BigInt::from(1) << 64) | BigInt::from(-1)).to_string(), "-1");

    let a: BigInt = "123456789012345678901234567890".into();
    assert_eq!(&a | &a, a);
}

#[test]
fn test_bitxor() {
    assert_eq!((BigInt::from(-2) ^ BigInt::from(3)).to_string(), "-3");
    let a: BigInt = "-123456789012345678901234567890".into();
    assert_eq!(&a ^ &a, BigInt::default());

    // flipping the only set bit of -(2^32) lands on -(2^33)
    let one = BigInt::from(1);
    let pow32 = &one << 32;
    assert_eq!(&-&pow32 ^ &pow32, -(&one << 33));
}

#[test]
fn test_not() {
    assert_eq!((!BigInt::default()).to_string(), "-1");
    assert_eq!((!BigInt::from(-1)).to_string(), "0");
    assert_eq!((!BigInt::from(5)).to_string(), "-6");
    assert_eq!((!BigInt::from(-6)).to_string(), "5");

    let a: BigInt = "-123456789012345678901234567890".into();
    assert_eq!(!&(!&a), a);
}

#[test]
fn test_shl() {
    assert_eq!((BigInt::from(1) << 64).to_string(), "18446744073709551616");
    assert_eq!((BigInt::from(5) << 3).to_string(), "40");
    assert_eq!((BigInt::from(3) << 32).to_string(), "12884901888");
    assert_eq!((BigInt::from("4294967295") << 1).to_string(), "8589934590");

    let a: BigInt = "123".into();
    assert_eq!(&a << 0, a);
    assert_eq!(&a << -2, &a >> 2);

    assert_eq!((BigInt::from(-1) << 3).to_string(), "-8");
    assert_eq!((BigInt::from(-2147483648i64) << 1).to_string(), "-4294967296");

    let big: BigInt = "123456789012345678901234567890".into();
    assert_eq!(&(&big << 96) >> 96, big);
}

#[test]
fn test_shr() {
    assert_eq!((BigInt::from(256) >> 4).to_string(), "16");
    assert_eq!((BigInt::from("18446744073709551616") >> 64).to_string(), "1");
    assert_eq!(BigInt::from("18446744073709551616") >> 65, BigInt::default());
    assert_eq!(BigInt::from(1) >> 1, BigInt::default());
    assert_eq!((BigInt::from(5) >> -2).to_string(), "20");

    // arithmetic shift rounds toward negative infinity
    assert_eq!((BigInt::from(-1) >> 1).to_string(), "-1");
    assert_eq!((BigInt::from(-1) >> 100).to_string(), "-1");
    assert_eq!((BigInt::from(-5) >> 1).to_string(), "-3");
    assert_eq!((BigInt::from(-4) >> 1).to_string(), "-2");
    assert_eq!((BigInt::from(-17) >> 2).to_string(), "-5");
    assert_eq!((BigInt::from(-4294967296i64) >> 32).to_string(), "-1");
    assert_eq!((BigInt::from(-4294967296i64) >> 1).to_string(), "-2147483648");
    assert_eq!((BigInt::from(-8589934592i64) >> 32).to_string(), "-2");
}

#[test]
fn test_cmp() {
    assert!(BigInt::from(1) < BigInt::from(2));
    assert!(BigInt::from(-2) < BigInt::from(-1));
    assert!(BigInt::from(-1) < BigInt::default());
    assert!(BigInt::default() < BigInt::from(1));
    assert!(BigInt::from("4294967296") > BigInt::from("4294967295"));
    assert!(BigInt::from("-18446744073709551616") < BigInt::from("-1"));

    assert_eq!(BigInt::from("-0"), BigInt::default());
    assert_ne!(BigInt::from(5), BigInt::from(-5));

    let mut vals = [
        BigInt::from(5),
        BigInt::from(-3),
        BigInt::default(),
        BigInt::from(2),
        BigInt::from(-7),
    ];
    vals.sort();
    let sorted: Vec<String> = vals.iter().map(|val| val.to_string()).collect();
    assert_eq!(sorted, ["-7", "-3", "0", "2", "5"]);

    // ordering agrees with the sign of the difference
    for (x, y) in [(3, 7), (7, 3), (-3, 7), (3, -7), (-7, -3), (5, 5)] {
        let a = BigInt::from(x);
        let b = BigInt::from(y);
        assert_eq!(a < b, &a - &b < BigInt::default());
    }
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::default().to_string(), "0");
    assert_eq!(BigInt::from(-1).to_string(), "-1");

    // group boundaries of the nine-digit rendering
    for s in [
        "999999999",
        "1000000000",
        "1000000001",
        "100000000000000000",
        "1000000000000000000",
        "123456789012345678901234567890",
        "-123456789012345678901234567890",
    ] {
        assert_eq!(BigInt::from(s).to_string(), s);
    }
}

#[test]
fn test_compound_assign() {
    let mut a: BigInt = "100".into();
    a += BigInt::from(28);
    assert_eq!(a.to_string(), "128");
    a <<= 3;
    assert_eq!(a.to_string(), "1024");
    a -= BigInt::from(24);
    assert_eq!(a.to_string(), "1000");
    a *= BigInt::from(1_000_000);
    assert_eq!(a.to_string(), "1000000000");
    a /= BigInt::from(8);
    assert_eq!(a.to_string(), "125000000");
    a %= BigInt::from(999);
    assert_eq!(a.to_string(), "125");
    a &= BigInt::from(255);
    assert_eq!(a.to_string(), "125");
    a |= BigInt::from(2);
    assert_eq!(a.to_string(), "127");
    a ^= BigInt::from(255);
    assert_eq!(a.to_string(), "128");
    a >>= 7;
    assert_eq!(a.to_string(), "1");
}

#[test]
fn test_neg_abs() {
    assert_eq!((-BigInt::from(5)).to_string(), "-5");
    assert_eq!((-BigInt::from(-5)).to_string(), "5");
    assert_eq!(-BigInt::default(), BigInt::default());

    let a: BigInt = "-123456789012345678901234567890".into();
    assert_eq!(-&-&a, a);
    assert_eq!(a.abs().to_string(), "123456789012345678901234567890");
    assert_eq!(BigInt::from(7).abs().to_string(), "7");
    assert!(BigInt::default().abs().is_zero());
}
