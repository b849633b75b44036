//! Floating-point order keys.
use num::Float;
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error as ThisError;

/// Reasons a raw number cannot be used as a [`Priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum PriorityError {
    #[error("priority must be comparable, but NaN is not ordered with respect to any number")]
    NotANumber,
}

/// A floating-point priority that is never NaN, and is therefore totally ordered.
///
/// Smaller numbers sort towards the front of an [`OrderedQueue`](crate::OrderedQueue), so they
/// are removed first. Negative, fractional and infinite values are all accepted; `-0.0` and `0.0`
/// compare equal.
///
/// ```rust
/// # use ordered_queue::{Priority, PriorityError};
/// let low: Priority = Priority::new(-0.5).unwrap();
/// let high = Priority::from(3_i32);
/// assert!(low < high);
/// assert_eq!(Priority::new(f64::NAN), Err(PriorityError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Priority<F = f64>(F);

impl<F: Float> Priority<F> {
    /// Wrap a number, rejecting NaN.
    pub fn new(value: F) -> Result<Self, PriorityError> {
        if value.is_nan() {
            Err(PriorityError::NotANumber)
        } else {
            Ok(Self(value))
        }
    }

    /// The underlying number.
    pub fn get(self) -> F {
        self.0
    }
}

impl<F: Float> PartialEq for Priority<F> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<F: Float> Eq for Priority<F> {}

impl<F: Float> PartialOrd for Priority<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for Priority<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Only NaN is unordered, and `Priority::new` never lets one through.
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl<F: fmt::Display> fmt::Display for Priority<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! impl_priority_conversions {
    () => {};

    (impl From<$int:ty> for Priority<$float:ty>; $($toks:tt)*) => {
        impl From<$int> for Priority<$float> {
            fn from(n: $int) -> Self {
                Self(<$float>::from(n))
            }
        }
        impl_priority_conversions!{$($toks)*}
    };

    (impl TryFrom<$float:ty> for Priority<$same:ty>; $($toks:tt)*) => {
        impl TryFrom<$float> for Priority<$same> {
            type Error = PriorityError;
            fn try_from(value: $float) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
        impl_priority_conversions!{$($toks)*}
    };
}

// Only integer types that every float of the target width represents exactly.
impl_priority_conversions! {
    impl From<i8> for Priority<f64>;
    impl From<i16> for Priority<f64>;
    impl From<i32> for Priority<f64>;
    impl From<u8> for Priority<f64>;
    impl From<u16> for Priority<f64>;
    impl From<u32> for Priority<f64>;
    impl From<i8> for Priority<f32>;
    impl From<i16> for Priority<f32>;
    impl From<u8> for Priority<f32>;
    impl From<u16> for Priority<f32>;

    impl TryFrom<f64> for Priority<f64>;
    impl TryFrom<f32> for Priority<f32>;
}
