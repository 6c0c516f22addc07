use lazy_static::*;

use crate::BigNumber;
use crate::big_number_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigNumber; MAX_CONSTANT + 1] = [
        unsafe { BigNumber::from_raw(vec![ ] , 0) },
        unsafe { BigNumber::from_raw(vec![1] , 1) },
        unsafe { BigNumber::from_raw(vec![2] , 1) },
        unsafe { BigNumber::from_raw(vec![3] , 1) },
        unsafe { BigNumber::from_raw(vec![4] , 1) },
        unsafe { BigNumber::from_raw(vec![5] , 1) },
        unsafe { BigNumber::from_raw(vec![6] , 1) },
        unsafe { BigNumber::from_raw(vec![7] , 1) },
        unsafe { BigNumber::from_raw(vec![8] , 1) },
        unsafe { BigNumber::from_raw(vec![9] , 1) },
        unsafe { BigNumber::from_raw(vec![10], 1) },
        unsafe { BigNumber::from_raw(vec![11], 1) },
        unsafe { BigNumber::from_raw(vec![12], 1) },
        unsafe { BigNumber::from_raw(vec![13], 1) },
        unsafe { BigNumber::from_raw(vec![14], 1) },
        unsafe { BigNumber::from_raw(vec![15], 1) },
        unsafe { BigNumber::from_raw(vec![16], 1) },
    ];
    pub static ref NEG_CACHE: [BigNumber; MAX_CONSTANT + 1] = [
        unsafe { BigNumber::from_raw(vec![ ] ,  0) },
        unsafe { BigNumber::from_raw(vec![1] , -1) },
        unsafe { BigNumber::from_raw(vec![2] , -1) },
        unsafe { BigNumber::from_raw(vec![3] , -1) },
        unsafe { BigNumber::from_raw(vec![4] , -1) },
        unsafe { BigNumber::from_raw(vec![5] , -1) },
        unsafe { BigNumber::from_raw(vec![6] , -1) },
        unsafe { BigNumber::from_raw(vec![7] , -1) },
        unsafe { BigNumber::from_raw(vec![8] , -1) },
        unsafe { BigNumber::from_raw(vec![9] , -1) },
        unsafe { BigNumber::from_raw(vec![10], -1) },
        unsafe { BigNumber::from_raw(vec![11], -1) },
        unsafe { BigNumber::from_raw(vec![12], -1) },
        unsafe { BigNumber::from_raw(vec![13], -1) },
        unsafe { BigNumber::from_raw(vec![14], -1) },
        unsafe { BigNumber::from_raw(vec![15], -1) },
        unsafe { BigNumber::from_raw(vec![16], -1) },
    ];
}
