macro_rules! bitpos {
    ($idx:expr) => {{
        let idx = $idx;
        (idx >> 5, idx & 31)
    }};
}

macro_rules! low_mask {
    ($bits:expr) => {{
        let bits = $bits;
        if bits >= 32 { u32::MAX } else { (1u32 << bits) - 1 }
    }};
}

pub(crate) use bitpos;
pub(crate) use low_mask;
