//! Fixed arity entry points for two, three and four lanes.
//!
//! These take and return lanes positionally and delegate to the slice based methods, so they
//! produce exactly the same codes.
use paste::paste;

use crate::morton::codec::Codec;
use crate::types::{check_dimensions, CodeType, Result};

macro_rules! lane_type {
    ($_lane:ident, $t:ty) => {
        $t
    };
}

macro_rules! fixed_arity {
    ($($n:literal => ($($lane:ident),+)),+ $(,)?) => {
        $(
            paste! {
                impl Codec {
                    #[doc = "Pack " $n " unsigned lanes. See [`Codec::pack`]."]
                    pub fn [<pack $n>](&self, $($lane: u64),+) -> Result<CodeType> {
                        self.pack(&[$($lane),+])
                    }

                    #[doc = "Unpack " $n " unsigned lanes. Fails with"]
                    #[doc = "[`Error::DimensionMismatch`](crate::Error::DimensionMismatch) unless the codec has " $n " dimensions."]
                    pub fn [<unpack $n>](&self, code: CodeType) -> Result<($(lane_type!($lane, u64)),+)> {
                        check_dimensions(self.dimensions, $n)?;
                        let mut values = [0; $n];
                        self.unpack_into(code, &mut values)?;
                        let [$($lane),+] = values;
                        Ok(($($lane),+))
                    }

                    #[doc = "Pack " $n " signed lanes. See [`Codec::pack_signed`]."]
                    pub fn [<pack_signed $n>](&self, $($lane: i64),+) -> Result<CodeType> {
                        self.pack_signed(&[$($lane),+])
                    }

                    #[doc = "Unpack " $n " signed lanes. Fails with"]
                    #[doc = "[`Error::DimensionMismatch`](crate::Error::DimensionMismatch) unless the codec has " $n " dimensions."]
                    pub fn [<unpack_signed $n>](&self, code: CodeType) -> Result<($(lane_type!($lane, i64)),+)> {
                        check_dimensions(self.dimensions, $n)?;
                        let mut values = [0; $n];
                        self.unpack_signed_into(code, &mut values)?;
                        let [$($lane),+] = values;
                        Ok(($($lane),+))
                    }
                }
            }
        )+
    };
}

fixed_arity! {
    2 => (x, y),
    3 => (x, y, z),
    4 => (x, y, z, w),
}
