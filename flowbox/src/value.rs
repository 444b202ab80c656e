//! Dimension values with attached units.
//!
//! A [`Value`] is a number plus a [`Unit`]. It resolves to pixels against a
//! [`Dimensions`] context:
//!
//! - **Absolute**: `px` (and bare numbers)
//! - **Relative**: `%` of the context's `percent_of`
//! - **Viewport-relative**: `vw`, `vh`, `vmin`, `vmax`
//! - **Unresolvable**: `auto` and `fr` (flex factors are only meaningful
//!   relative to sibling totals)
//!
//! Parsing happens at configuration time and fails fast with
//! [`LayoutError::MalformedValue`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LayoutError, Result};
use crate::primitives::Size;

/// The unit attached to a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// No resolution; the caller treats the dimension as "auto".
    #[default]
    Undefined,
    /// Pixels (px).
    Pixels,
    /// Percentage (%) of the context's `percent_of`.
    Percent,
    /// 1% of the viewport width (vw).
    ViewportWidth,
    /// 1% of the viewport height (vh).
    ViewportHeight,
    /// 1% of the smaller viewport dimension (vmin).
    ViewportMin,
    /// 1% of the larger viewport dimension (vmax).
    ViewportMax,
    /// A share of the space left over between siblings (fr).
    Flex,
}

impl Unit {
    /// Canonical suffix for this unit. `Undefined` has none.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Undefined => "",
            Unit::Pixels => "px",
            Unit::Percent => "%",
            Unit::ViewportWidth => "vw",
            Unit::ViewportHeight => "vh",
            Unit::ViewportMin => "vmin",
            Unit::ViewportMax => "vmax",
            Unit::Flex => "fr",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Unit> {
        let unit = if suffix == "%" {
            Unit::Percent
        } else if suffix.eq_ignore_ascii_case("px") {
            Unit::Pixels
        } else if suffix.eq_ignore_ascii_case("fr") {
            Unit::Flex
        } else if suffix.eq_ignore_ascii_case("vw") {
            Unit::ViewportWidth
        } else if suffix.eq_ignore_ascii_case("vh") {
            Unit::ViewportHeight
        } else if suffix.eq_ignore_ascii_case("vmin") {
            Unit::ViewportMin
        } else if suffix.eq_ignore_ascii_case("vmax") {
            Unit::ViewportMax
        } else {
            return None;
        };
        Some(unit)
    }
}

/// Context a [`Value`] resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    /// The quantity `100%` stands for.
    pub percent_of: f32,
    /// The viewport, for `vw`/`vh`/`vmin`/`vmax`.
    pub viewport: Size,
}

impl Dimensions {
    pub fn new(percent_of: f32, viewport: Size) -> Self {
        Self { percent_of, viewport }
    }

    /// Same viewport, different percentage base.
    pub fn with_percent_of(&self, percent_of: f32) -> Self {
        Self { percent_of, ..*self }
    }
}

/// A number with a unit, e.g. `50%` or `10vmin`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Value {
    pub value: f32,
    pub unit: Unit,
}

impl Value {
    /// The `auto` value.
    pub const AUTO: Self = Self { value: 0.0, unit: Unit::Undefined };

    pub const fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, Unit::Pixels)
    }

    pub const fn percent(value: f32) -> Self {
        Self::new(value, Unit::Percent)
    }

    pub const fn flex(value: f32) -> Self {
        Self::new(value, Unit::Flex)
    }

    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Undefined
    }

    /// Resolve to pixels. `None` for `auto` and `fr` values.
    pub fn resolve(&self, dims: &Dimensions) -> Option<f32> {
        let viewport = dims.viewport;
        match self.unit {
            Unit::Undefined | Unit::Flex => None,
            Unit::Pixels => Some(self.value),
            Unit::Percent => Some(self.value * dims.percent_of / 100.0),
            Unit::ViewportWidth => Some(self.value * viewport.width / 100.0),
            Unit::ViewportHeight => Some(self.value * viewport.height / 100.0),
            Unit::ViewportMin => Some(self.value * viewport.width.min(viewport.height) / 100.0),
            Unit::ViewportMax => Some(self.value * viewport.width.max(viewport.height) / 100.0),
        }
    }

    /// The flex factor of an `fr` value.
    pub fn flex_factor(&self) -> Option<f32> {
        (self.unit == Unit::Flex).then_some(self.value)
    }
}

impl FromStr for Value {
    type Err = LayoutError;

    fn from_str(input: &str) -> Result<Self> {
        let malformed = |reason| LayoutError::MalformedValue {
            input: input.to_string(),
            reason,
        };

        // Trailing whitespace is not a unit; it falls through to "unknown unit".
        let s = input.trim_start();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Value::AUTO);
        }
        if s.starts_with('-') {
            return Err(malformed("negative values are not allowed"));
        }

        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '+'))
            .unwrap_or(s.len());
        let (number, suffix) = s.split_at(split);
        if number.is_empty() {
            return Err(malformed("missing number"));
        }
        let value: f32 = number.parse().map_err(|_| malformed("invalid number"))?;

        if suffix.is_empty() {
            tracing::warn!("value {:?} has no unit, treating as pixels", input);
            return Ok(Value::px(value));
        }
        let unit = Unit::from_suffix(suffix).ok_or_else(|| malformed("unknown unit"))?;
        Ok(Value::new(value, unit))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            write!(f, "auto")
        } else {
            write!(f, "{}{}", self.value, self.unit.as_str())
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Scene files may write plain numbers (pixels) or unit strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Number(f32),
    Text(String),
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match ValueRepr::deserialize(deserializer)? {
            ValueRepr::Number(n) if n < 0.0 => Err(serde::de::Error::custom(
                LayoutError::MalformedValue {
                    input: n.to_string(),
                    reason: "negative values are not allowed",
                },
            )),
            ValueRepr::Number(n) => Ok(Value::px(n)),
            ValueRepr::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
