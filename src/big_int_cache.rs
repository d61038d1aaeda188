use lazy_static::*;
use smallvec::smallvec;

use crate::BigInt;
use crate::big_int::ZERO;
use crate::big_int_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        ZERO.clone(),
        BigInt::from_raw(smallvec![1],  false),
        BigInt::from_raw(smallvec![2],  false),
        BigInt::from_raw(smallvec![3],  false),
        BigInt::from_raw(smallvec![4],  false),
        BigInt::from_raw(smallvec![5],  false),
        BigInt::from_raw(smallvec![6],  false),
        BigInt::from_raw(smallvec![7],  false),
        BigInt::from_raw(smallvec![8],  false),
        BigInt::from_raw(smallvec![9],  false),
        BigInt::from_raw(smallvec![10], false),
        BigInt::from_raw(smallvec![11], false),
        BigInt::from_raw(smallvec![12], false),
        BigInt::from_raw(smallvec![13], false),
        BigInt::from_raw(smallvec![14], false),
        BigInt::from_raw(smallvec![15], false),
        BigInt::from_raw(smallvec![16], false),
    ];
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        ZERO.clone(),
        BigInt::from_raw(smallvec![1],  true),
        BigInt::from_raw(smallvec![2],  true),
        BigInt::from_raw(smallvec![3],  true),
        BigInt::from_raw(smallvec![4],  true),
        BigInt::from_raw(smallvec![5],  true),
        BigInt::from_raw(smallvec![6],  true),
        BigInt::from_raw(smallvec![7],  true),
        BigInt::from_raw(smallvec![8],  true),
        BigInt::from_raw(smallvec![9],  true),
        BigInt::from_raw(smallvec![10], true),
        BigInt::from_raw(smallvec![11], true),
        BigInt::from_raw(smallvec![12], true),
        BigInt::from_raw(smallvec![13], true),
        BigInt::from_raw(smallvec![14], true),
        BigInt::from_raw(smallvec![15], true),
        BigInt::from_raw(smallvec![16], true),
    ];
}
