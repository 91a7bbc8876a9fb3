use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Sub, SubAssign};

use num_traits::{NumCast, PrimInt, Unsigned};

/// An unsigned channel width with a saturating arithmetic contract.
///
/// A channel value computed outside `[0, Self::max_value()]` is clamped to
/// the nearer bound before being stored. The contract is implemented once as
/// trait defaults so the narrow working width (`u8`) and the wide accumulator
/// width (`u32`) share a single arithmetic implementation.
pub trait Channel: PrimInt + Unsigned + Default + fmt::Debug + Send + Sync + 'static {
    /// Clamp a signed wide value into the channel range.
    fn saturate(value: i64) -> Self {
        let max = Self::max_value().to_i64().unwrap_or(i64::MAX);
        match NumCast::from(value.clamp(0, max)) {
            Some(v) => v,
            None => Self::max_value(),
        }
    }

    /// Widen the channel into the signed accumulator domain.
    fn widen(self) -> i64 {
        self.to_i64().unwrap_or(i64::MAX)
    }
}

impl Channel for u8 {}
impl Channel for u32 {}

/// Channel-width promotion for mixed-width pixel arithmetic.
///
/// The result of `narrow op wide` (in either order) carries the wider of the
/// two operand widths.
pub trait Promote<Rhs: Channel>: Channel {
    /// The channel width of the arithmetic result.
    type Wider: Channel;
}

impl Promote<u8> for u8 {
    type Wider = u8;
}

impl Promote<u32> for u8 {
    type Wider = u32;
}

impl Promote<u8> for u32 {
    type Wider = u32;
}

impl Promote<u32> for u32 {
    type Wider = u32;
}

/// One RGBA sample with saturating arithmetic on the color channels.
///
/// Alpha is carried but excluded from the arithmetic: binary operations copy
/// the left operand's alpha into the result, compound assignment and scalar
/// operations leave it untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba<T: Channel> {
    /// Red channel.
    pub r: T,
    /// Green channel.
    pub g: T,
    /// Blue channel.
    pub b: T,
    /// Alpha channel.
    pub a: T,
}

/// The narrow 8-bit working pixel.
pub type Pixel = Rgba<u8>;

/// The wide 32-bit accumulator pixel used for SAT cells and running sums.
pub type WidePixel = Rgba<u32>;

impl<T: Channel> Rgba<T> {
    /// Create a pixel from its four channels.
    pub fn new(r: T, g: T, b: T, a: T) -> Self {
        Self { r, g, b, a }
    }

    /// The zero pixel: black color channels, fully opaque alpha.
    pub fn zero() -> Self {
        Self {
            r: T::zero(),
            g: T::zero(),
            b: T::zero(),
            a: T::saturate(255),
        }
    }

    /// Broadcast a scalar to all four channels, saturating.
    pub fn splat(value: i64) -> Self {
        let v = T::saturate(value);
        Self {
            r: v,
            g: v,
            b: v,
            a: v,
        }
    }

    /// Build a pixel from signed wide channel values, saturating each one.
    pub fn from_i64(r: i64, g: i64, b: i64, a: i64) -> Self {
        Self {
            r: T::saturate(r),
            g: T::saturate(g),
            b: T::saturate(b),
            a: T::saturate(a),
        }
    }

    /// Saturating per-channel conversion to another channel width.
    pub fn cast<U: Channel>(self) -> Rgba<U> {
        Rgba::from_i64(
            self.r.widen(),
            self.g.widen(),
            self.b.widen(),
            self.a.widen(),
        )
    }
}

impl<L, R> Add<Rgba<R>> for Rgba<L>
where
    L: Channel + Promote<R>,
    R: Channel,
{
    type Output = Rgba<<L as Promote<R>>::Wider>;

    fn add(self, rhs: Rgba<R>) -> Self::Output {
        Self::Output::from_i64(
            self.r.widen() + rhs.r.widen(),
            self.g.widen() + rhs.g.widen(),
            self.b.widen() + rhs.b.widen(),
            // the result alpha follows the left operand
            self.a.widen(),
        )
    }
}

impl<L, R> Sub<Rgba<R>> for Rgba<L>
where
    L: Channel + Promote<R>,
    R: Channel,
{
    type Output = Rgba<<L as Promote<R>>::Wider>;

    fn sub(self, rhs: Rgba<R>) -> Self::Output {
        Self::Output::from_i64(
            self.r.widen() - rhs.r.widen(),
            self.g.widen() - rhs.g.widen(),
            self.b.widen() - rhs.b.widen(),
            self.a.widen(),
        )
    }
}

impl<T: Channel, U: Channel> AddAssign<Rgba<U>> for Rgba<T> {
    fn add_assign(&mut self, rhs: Rgba<U>) {
        self.r = T::saturate(self.r.widen() + rhs.r.widen());
        self.g = T::saturate(self.g.widen() + rhs.g.widen());
        self.b = T::saturate(self.b.widen() + rhs.b.widen());
    }
}

impl<T: Channel, U: Channel> SubAssign<Rgba<U>> for Rgba<T> {
    fn sub_assign(&mut self, rhs: Rgba<U>) {
        self.r = T::saturate(self.r.widen() - rhs.r.widen());
        self.g = T::saturate(self.g.widen() - rhs.g.widen());
        self.b = T::saturate(self.b.widen() - rhs.b.widen());
    }
}

impl<T: Channel> Add<i64> for Rgba<T> {
    type Output = Self;

    fn add(self, value: i64) -> Self {
        Self {
            r: T::saturate(self.r.widen() + value),
            g: T::saturate(self.g.widen() + value),
            b: T::saturate(self.b.widen() + value),
            a: self.a,
        }
    }
}

impl<T: Channel> Sub<i64> for Rgba<T> {
    type Output = Self;

    fn sub(self, value: i64) -> Self {
        self + (-value)
    }
}

impl<T: Channel> Div<i64> for Rgba<T> {
    type Output = Self;

    /// Division by zero is a guard, not an error: the value passes through
    /// unchanged.
    fn div(self, value: i64) -> Self {
        if value == 0 {
            return self;
        }
        Self {
            r: T::saturate(self.r.widen() / value),
            g: T::saturate(self.g.widen() / value),
            b: T::saturate(self.b.widen() / value),
            a: self.a,
        }
    }
}

impl<T: Channel> DivAssign<i64> for Rgba<T> {
    fn div_assign(&mut self, value: i64) {
        *self = *self / value;
    }
}
