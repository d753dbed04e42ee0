//! Body profiles for metric computation.

mod body;

pub use body::BodyProfileGenerator;
