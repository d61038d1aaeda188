//! Big Int \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers. Arithmetic, comparison and
//!   decimal conversion work on a sign-magnitude representation, while the bitwise operators
//!   and the shifts behave as if BigInt were represented in two's-complement notation.
//! - [`BigIntError`]: the error raised by division by zero and by malformed decimal strings.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::BigInt;
pub use error::BigIntError;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".into();
        let b: BigInt = "900000000000".into();
        assert_eq!(a.to_string(), "10000000000000");
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!((&a >> 10).to_string(), "9765625000");
    }
}
