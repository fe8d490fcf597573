use std::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    marker::PhantomData,
    ops::Add,
};

pub trait DistanceUnit: Copy + Eq {
    const NAME: &'static str;
    const SHORT_NAME: &'static str;
    const MICROMETERS_IN_UNIT: i64;
}

/// Fixed-point distance stored in micrometers.
///
/// Connection weights come in as floating point kilometres, but the search
/// needs a total order and sums that do not drift, so every distance is
/// rounded to the nearest micrometer once at construction time and added as
/// an integer afterwards. Sums are exact at micrometer resolution: weights
/// below half a micrometer count as zero.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Distance<T: DistanceUnit> {
    um: i64,
    unit: PhantomData<T>,
}

macro_rules! create_distance_unit {
    ($struct_name:ident, $string_name:expr, $short_name:expr, $um_conv:expr) => {
        #[derive(Debug, Copy, Clone, Eq, PartialEq)]
        pub struct $struct_name;

        impl DistanceUnit for $struct_name {
            const NAME: &'static str = $string_name;
            const SHORT_NAME: &'static str = $short_name;
            const MICROMETERS_IN_UNIT: i64 = $um_conv;
        }

        impl Distance<$struct_name> {
            pub fn new(value: i64) -> Distance<$struct_name> {
                Distance {
                    um: value.saturating_mul($struct_name::MICROMETERS_IN_UNIT),
                    unit: PhantomData,
                }
            }
        }
    };
}

create_distance_unit!(Kilometers, "kilometer", "km", 1_000_000_000);

impl<T> Distance<T>
where
    T: DistanceUnit,
{
    pub const ZERO: Distance<T> = Distance {
        um: 0,
        unit: PhantomData,
    };

    pub fn is_zero(&self) -> bool {
        self.um == 0
    }

    /// `None` when the sum does not fit the fixed-point range.
    pub fn checked_add(self, other: Distance<T>) -> Option<Distance<T>> {
        self.um.checked_add(other.um).map(|um| Distance {
            um,
            unit: PhantomData,
        })
    }

    /// Short human readable form, e.g. `600 km`.
    pub fn to_short_string(&self) -> String {
        format!("{} {}", f64::from(*self), T::SHORT_NAME)
    }
}

impl<T> Default for Distance<T>
where
    T: DistanceUnit,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> From<Distance<T>> for f64
where
    T: DistanceUnit,
{
    fn from(value: Distance<T>) -> Self {
        (value.um as f64) / T::MICROMETERS_IN_UNIT as f64
    }
}

impl<T> fmt::Display for Distance<T>
where
    T: DistanceUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value: f64 = (self.um as f64) / (T::MICROMETERS_IN_UNIT as f64);

        write!(
            f,
            "{} {}{}",
            value,
            T::NAME,
            match value {
                1_f64 => "",
                _ => "s",
            }
        )
    }
}

impl<T> Ord for Distance<T>
where
    T: DistanceUnit,
{
    fn cmp(&self, other: &Distance<T>) -> Ordering {
        self.um.cmp(&other.um)
    }
}

impl<T1, T2> PartialEq<Distance<T2>> for Distance<T1>
where
    T1: DistanceUnit,
    T2: DistanceUnit,
{
    fn eq(&self, other: &Distance<T2>) -> bool {
        self.um == other.um
    }
}

// Distances in different units compare on the underlying micrometers
impl<T1, T2> PartialOrd<Distance<T2>> for Distance<T1>
where
    T1: DistanceUnit,
    T2: DistanceUnit,
{
    fn partial_cmp(&self, other: &Distance<T2>) -> Option<Ordering> {
        Some(self.um.cmp(&other.um))
    }
}

impl<T> From<f64> for Distance<T>
where
    T: DistanceUnit,
{
    fn from(value: f64) -> Self {
        Distance {
            um: (value * (T::MICROMETERS_IN_UNIT as f64)).round() as i64,
            unit: PhantomData,
        }
    }
}

impl<T> From<i64> for Distance<T>
where
    T: DistanceUnit,
{
    fn from(value: i64) -> Self {
        Distance {
            um: value.saturating_mul(T::MICROMETERS_IN_UNIT),
            unit: PhantomData,
        }
    }
}

impl<T1, T2> Add<Distance<T2>> for Distance<T1>
where
    T1: DistanceUnit,
    T2: DistanceUnit,
{
    type Output = Distance<T1>;

    fn add(self, other: Distance<T2>) -> Distance<T1> {
        Distance {
            um: self.um.saturating_add(other.um),
            unit: PhantomData,
        }
    }
}

impl<T> Sum for Distance<T>
where
    T: DistanceUnit,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, distance| total + distance)
    }
}

#[cfg(test)]
macro_rules! kilometers {
    ($num:expr) => {
        crate::distance::Distance::<crate::distance::Kilometers>::from($num)
    };
}

#[cfg(test)]
pub(crate) use kilometers;
