#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod environment;
mod error;
mod helpers;
mod logic;
mod ops;
mod vector;

pub use environment::{sim_switch, Environment};
pub use error::{HdlKitError, HdlKitResult};
pub use helpers::{bubble_sort, max3, max3_by_ord, IntArray, SortOrder};
pub use logic::Logic;
pub use ops::{
    and_reduce, bit_width, is_multiple, log2_ceil, or_reduce, resize_msb, xor_reduce, MsbResize,
    MultipleOf,
};
pub use vector::{LogicVector, Unsigned};
