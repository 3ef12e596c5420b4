mod multiple;
mod reduce;
mod resize;

pub use multiple::{bit_width, is_multiple, log2_ceil, MultipleOf};
pub use reduce::{and_reduce, or_reduce, xor_reduce};
pub use resize::{resize_msb, MsbResize};
