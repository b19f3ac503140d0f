mod bits;
mod options;

pub use bits::BitSet;
pub use options::OptExt;

/// Gives a fieldless `#[repr(u32)]` enum a `to_u32` and a `From` into `u32`.
#[macro_export]
macro_rules! transmutable_u32 {
    ($name: ident) => {
        impl $name {
            pub const fn to_u32(self) -> u32 {
                self as u32
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.to_u32()
            }
        }
    };
}

/// Number of `u64` words needed to hold `bits` bits.
pub const fn words_for(bits: usize) -> usize {
    bits.div_ceil(u64::BITS as usize)
}
