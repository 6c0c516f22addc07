//! Big Number \
//! This crate provides:
//! - [`BigNumber`]: Immutable arbitrary-precision signed integers stored as base-10^9 digit groups. Supports construction from native integers and decimal strings, comparison, addition, subtraction and multiplication.

mod big_number;
mod big_number_cache;
mod big_number_constants;

pub use big_number::{BigNumber, ParseBigNumberError, ZERO};

#[cfg(test)]
mod tests {
    use crate::BigNumber;

    #[test]
    fn it_works() {
        let a: BigNumber = "9999999999123456789123456".into();
        let b: BigNumber = "12345678912".into();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a * 42 = {}", &a * 42);
        assert!(a > b);
    }
}
