pub mod signs;

pub use signs::{
    degree_minute_in_sign, format_position, get_sign_index, normalize_degrees, Element, Quality,
    Sign, SignMeta, SIGNS,
};
