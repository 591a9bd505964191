macro_rules! impl_unsigned {
    ($ty:ty) => {
        impl From<$ty> for ChunkedInteger {
            #[allow(clippy::unnecessary_cast)]
            fn from(input: $ty) -> ChunkedInteger {
                Self::from_unsigned(input as u128, ChunkSize::default())
            }
        }
    };
}
