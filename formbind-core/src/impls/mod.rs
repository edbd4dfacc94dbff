/// Shape of a leaf type that decodes itself from text; it has no structure
/// the decoder could descend into.
macro_rules! text_shape {
    ($ty:ty, $ident:literal) => {
        $crate::Shape::of::<$ty>(
            $ident,
            $crate::Def::Unsupported($crate::UnsupportedKind::Opaque),
        )
        .text_decodable::<$ty>()
    };
}

// Definition for `core::` types
mod core;

// Definition for `alloc::` types
mod alloc;

// Definition for `std::` types (that aren't in `alloc` or `core`)
mod std;

// Definition for various crates
mod crates;
