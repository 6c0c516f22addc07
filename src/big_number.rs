//! # BigNumber
//! Immutable arbitrary-precision signed integers stored as groups of nine decimal digits.
//! Each group is one base-10^9 "digit", kept least-significant first.
//! # Example
//! ```
//! use big_number::BigNumber;
//!
//! let a: BigNumber = "9999999999123456789123456".into();
//! let b: BigNumber = "12345678912".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! ```
//!

use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use thiserror::Error;

use crate::big_number_constants::*;
use crate::big_number_cache::*;

pub const ZERO: BigNumber = BigNumber { sign: 0, groups: vec![] };

macro_rules! trim_high_zero {
    ($vec: expr) => {
        {
            let mut v = $vec;
            while let Some(0) = v.last() {
                v.pop();
            }
            v
        }
    };
}

#[derive(Debug, Clone)]
pub struct BigNumber {
    sign: i8,
    groups: Vec<u32>,
}

/// Error raised when a decimal literal cannot be turned into a [`BigNumber`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigNumberError {
    #[error("empty decimal literal")]
    Empty,
    #[error("invalid character `{0}` in decimal literal")]
    InvalidDigit(char),
    #[error("decimal literal has extraneous leading zero")]
    LeadingZero,
    #[error("`-0` is not a canonical decimal literal")]
    NegativeZero,
}

// 实现构造
impl BigNumber {
    /// # Safety
    /// `groups` must be little-endian base-10^9 with every element below
    /// 10^9 and a non-zero last element, and `sign` must be 0 exactly when
    /// `groups` is empty.
    pub unsafe fn from_raw(groups: Vec<u32>, sign: i8) -> Self {
        BigNumber::new(groups, sign)
    }
    fn new(groups: Vec<u32>, sign: i8) -> Self {
        debug_assert!(groups.iter().all(|&g| g <= GROUP_MAX));
        BigNumber { sign, groups }
    }
}

// 实现打印
impl Display for BigNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sign == 0 {
            return f.write_str("0");
        }
        if self.sign < 0 {
            f.write_str("-")?;
        }
        let mut groups = self.groups.iter().rev();
        if let Some(top) = groups.next() {
            write!(f, "{}", top)?;
        }
        // Interior groups must keep their full nine digits, otherwise a
        // group holding e.g. 5 would collapse to one digit on output.
        for group in groups {
            write!(f, "{:09}", group)?;
        }
        Ok(())
    }
}

// 实现解析
impl FromStr for BigNumber {
    type Err = ParseBigNumberError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match val.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, val),
        };

        if digits.is_empty() {
            return Err(ParseBigNumberError::Empty);
        }
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBigNumberError::InvalidDigit(c));
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(ParseBigNumberError::LeadingZero);
        }
        if digits == "0" {
            if negative {
                return Err(ParseBigNumberError::NegativeZero);
            }
            return Ok(ZERO);
        }

        // Nine digits per group, chunked from the least-significant end so
        // only the most significant chunk may come up short.
        let bytes = digits.as_bytes();
        let num_groups = (bytes.len() + DIGITS_PER_GROUP - 1) / DIGITS_PER_GROUP;
        let mut groups = Vec::with_capacity(num_groups);
        for chunk in bytes.rchunks(DIGITS_PER_GROUP) {
            let mut group: u32 = 0;
            for &b in chunk {
                group = group * 10 + (b - b'0') as u32;
            }
            groups.push(group);
        }

        let sign = if negative { -1 } else { 1 };
        Ok(BigNumber::new(groups, sign))
    }
}

impl From<&str> for BigNumber {
    fn from(val: &str) -> Self {
        match val.parse() {
            Ok(n) => n,
            Err(e) => panic!("invalid decimal literal {:?}: {}", val, e),
        }
    }
}

macro_rules! impl_unsigned_to_big_number {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigNumber {
        fn from(val: $u) -> Self {
            if val == 0 {
                BigNumber::value_of(val as u64, 0)
            } else {
                BigNumber::value_of(val as u64, 1)
            }
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_number {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigNumber {
        fn from(val: $i) -> Self {
            if val == 0 {
                BigNumber::value_of(0, 0)
            } else if val < 0 {
                BigNumber::value_of(val.unsigned_abs() as u64, -1)
            } else {
                BigNumber::value_of(val as u64, 1)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_number!(u8, u16, u32, usize, u64);
impl_signed_to_big_number!(i8, i16, i32, isize, i64);

impl BigNumber {
    fn value_of(val: u64, sign: i8) -> BigNumber {
        if val == 0 {
            return ZERO;
        } else if val <= MAX_CONSTANT as u64 {
            if sign == 1 {
                return POS_CACHE[val as usize].clone();
            } else {
                return NEG_CACHE[val as usize].clone();
            }
        } else {
            let mut groups = Vec::new();
            let mut n = val;
            while n > 0 {
                groups.push((n % GROUP_RADIX) as u32);
                n /= GROUP_RADIX;
            }
            return BigNumber::new(groups, sign);
        }
    }
}

// 实现大小比较
impl BigNumber {
    fn compare_groups(&self, other: &BigNumber) -> std::cmp::Ordering {
        let self_groups = &self.groups;
        let other_groups = &other.groups;
        let self_len = self_groups.len();
        let other_len = other_groups.len();

        if self_len < other_len {
            return std::cmp::Ordering::Less;
        }

        if self_len > other_len {
            return std::cmp::Ordering::Greater;
        }

        let mut pos = self_len;

        while pos > 0 {
            pos -= 1;
            let a = unsafe { *self_groups.get_unchecked(pos)  };
            let b = unsafe { *other_groups.get_unchecked(pos) };
            if a != b {
                return a.cmp(&b);
            }
        }

        return std::cmp::Ordering::Equal;
    }
}
impl PartialEq for BigNumber {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.compare_groups(&other).is_eq()
    }
}
impl Eq for BigNumber {}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.sign.partial_cmp(&other.sign) {
            Some(core::cmp::Ordering::Equal) => {}
            ord => return ord,
        }
        if self.sign > 0 {
            Some(self.compare_groups(&other))
        } else {
            Some(self.compare_groups(&other).reverse())
        }
    }
}

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(&other).unwrap()
    }
}

// 实现绝对值
impl BigNumber {
    pub fn abs(&self) -> BigNumber {
        self.clone().abs_take()
    }
    fn abs_take(self) -> BigNumber {
        let BigNumber { sign, groups } = self;
        let sign = sign.abs();
        BigNumber { sign, groups }
    }
}

// 实现取反
impl Neg for BigNumber {
    type Output = BigNumber;

    fn neg(self) -> Self::Output {
        let BigNumber { sign, groups } = self;
        BigNumber { sign: -sign, groups }
    }
}

impl Neg for &BigNumber {
    type Output = BigNumber;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl Add for BigNumber {
    type Output = BigNumber;

    fn add(self, val: Self) -> Self::Output {
        if val.sign == 0 {
            return self;
        }

        if self.sign == 0 {
            return val;
        }

        if val.sign == self.sign {
            let sign = self.sign;
            return BigNumber::new(BigNumber::add_groups(self.groups, val.groups), sign);
        }

        // a + b = a - (-b)
        self - (-val)
    }
}

impl BigNumber {
    fn add_groups(x: Vec<u32>, y: Vec<u32>) -> Vec<u32> {
        let (mut x, y) = if x.len() < y.len() { (y, x) } else { (x, y) };

        let mut carry: u64 = 0;
        for (x_group, y_group) in x.iter_mut().zip(y.iter()) {
            let sum = *x_group as u64 + *y_group as u64 + carry;
            *x_group = (sum % GROUP_RADIX) as u32;
            carry = sum / GROUP_RADIX;
        }

        let mut index = y.len();
        while index < x.len() && carry > 0 {
            let sum = x[index] as u64 + carry;
            x[index] = (sum % GROUP_RADIX) as u32;
            carry = sum / GROUP_RADIX;
            index += 1;
        }

        if carry > 0 {
            x.push(carry as u32);
        }

        x
    }
}

impl AddAssign for BigNumber {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Add for &BigNumber {
    type Output = BigNumber;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl Add<&BigNumber> for BigNumber {
    type Output = BigNumber;

    fn add(self, rhs: &BigNumber) -> Self::Output {
        self + rhs.clone()
    }
}

impl AddAssign<&BigNumber> for BigNumber {
    fn add_assign(&mut self, rhs: &BigNumber) {
        *self = self.clone() + rhs.clone();
    }
}

// 实现减法
impl Sub for BigNumber {
    type Output = BigNumber;

    fn sub(self, val: Self) -> Self::Output {
        if val.sign == 0 {
            return self;
        }

        if self.sign == 0 {
            return -val;
        }

        if val.sign != self.sign {
            // a - b = a + (-b)
            return self + (-val);
        }

        match self.compare_groups(&val) {
            Ordering::Less => {
                let sign = -self.sign;
                let groups = BigNumber::sub_groups(val.groups, self.groups);
                let groups = trim_high_zero!(groups);
                BigNumber::new(groups, sign)
            },
            Ordering::Equal => ZERO,
            Ordering::Greater => {
                let sign = self.sign;
                let groups = BigNumber::sub_groups(self.groups, val.groups);
                let groups = trim_high_zero!(groups);
                BigNumber::new(groups, sign)
            },
        }
    }
}

impl BigNumber {
    /// `big` must hold the larger magnitude; the borrow unit is the group
    /// base 10^9, not the single-digit base.
    fn sub_groups(big: Vec<u32>, little: Vec<u32>) -> Vec<u32> {
        let mut big = big;
        let mut borrow: i64 = 0;

        for (index, big_group) in big.iter_mut().enumerate() {
            let little_group = if index < little.len() {
                little[index] as i64
            } else {
                0
            };
            let mut difference = *big_group as i64 - little_group - borrow;
            if difference < 0 {
                difference += GROUP_RADIX as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            *big_group = difference as u32;
        }

        big
    }
}

impl SubAssign for BigNumber {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Sub for &BigNumber {
    type Output = BigNumber;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl Sub<&BigNumber> for BigNumber {
    type Output = BigNumber;

    fn sub(self, rhs: &BigNumber) -> Self::Output {
        self - rhs.clone()
    }
}

impl SubAssign<&BigNumber> for BigNumber {
    fn sub_assign(&mut self, rhs: &BigNumber) {
        *self = self.clone() - rhs.clone();
    }
}

// 实现乘法
impl Mul<i32> for BigNumber {
    type Output = BigNumber;

    fn mul(self, val: i32) -> Self::Output {
        if self.sign == 0 || val == 0 {
            return ZERO;
        }
        let sign = if (val > 0) == (self.sign > 0) { 1 } else { -1 };
        BigNumber::mul_by_int(self.groups, val.unsigned_abs(), sign)
    }
}

impl Mul<i32> for &BigNumber {
    type Output = BigNumber;

    fn mul(self, val: i32) -> Self::Output {
        self.clone() * val
    }
}

impl MulAssign<i32> for BigNumber {
    fn mul_assign(&mut self, rhs: i32) {
        *self = self.clone() * rhs;
    }
}

impl Mul for BigNumber {
    type Output = BigNumber;

    fn mul(self, val: Self) -> Self::Output {
        if self.sign == 0 || val.sign == 0 {
            return ZERO;
        }

        let sign = if self.sign == val.sign { 1 } else { -1 };

        // Schoolbook long multiplication: one partial product per group of
        // the left operand, shifted up by its group position and accumulated.
        let mut result = ZERO;
        for (position, &group) in self.groups.iter().enumerate() {
            if group == 0 {
                continue;
            }
            let partial = BigNumber::mul_by_int(val.groups.clone(), group, 1);
            let groups = BigNumber::shift_groups(partial.groups, position);
            result = result + BigNumber::new(groups, 1);
        }

        if sign < 0 {
            -result
        } else {
            result
        }
    }
}

impl BigNumber {
    fn mul_by_int(groups: Vec<u32>, scale: u32, sign: i8) -> BigNumber {
        let mut groups = groups;
        let mut carry: u64 = 0;
        for group in groups.iter_mut() {
            let product = *group as u64 * scale as u64 + carry;
            *group = (product % GROUP_RADIX) as u32;
            carry = product / GROUP_RADIX;
        }
        while carry > 0 {
            groups.push((carry % GROUP_RADIX) as u32);
            carry /= GROUP_RADIX;
        }
        BigNumber::new(groups, sign)
    }

    /// Shift up by `n` group positions, i.e. multiply by 10^(9n), by
    /// inserting zero groups at the least-significant end.
    fn shift_groups(groups: Vec<u32>, n: usize) -> Vec<u32> {
        if n == 0 || groups.is_empty() {
            return groups;
        }
        let mut shifted = vec![0u32; n + groups.len()];
        shifted[n..].copy_from_slice(&groups);
        shifted
    }
}

impl Mul<&BigNumber> for &BigNumber {
    type Output = BigNumber;

    fn mul(self, rhs: &BigNumber) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl Mul<&BigNumber> for BigNumber {
    type Output = BigNumber;

    fn mul(self, rhs: &BigNumber) -> Self::Output {
        self * rhs.clone()
    }
}

impl MulAssign for BigNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl MulAssign<&BigNumber> for BigNumber {
    fn mul_assign(&mut self, rhs: &BigNumber) {
        *self = self.clone() * rhs.clone()
    }
}
