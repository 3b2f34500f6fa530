use std::fmt;
use std::ops::Add;

use serde::Deserialize;

/// Add two values with the `+` of their type.
///
/// Anything implementing [`Add`] works: integers, floats, or your own types.
///
/// ```
/// use hey_calc::calculate;
///
/// assert_eq!(calculate(2, 3), 5);
/// assert_eq!(calculate(-1, 1), 0);
/// assert_eq!(calculate(2.5, 0.5), 3.0);
/// ```
///
/// Operands that can't be added together are rejected when compiling:
///
/// ```compile_fail
/// use hey_calc::calculate;
///
/// let _ = calculate(1, "a");
/// ```
#[inline]
pub fn calculate<T, U>(x: T, y: U) -> T::Output
where
    T: Add<U>,
{
    x + y
}

/// Add two runtime-typed operands. See [`Operand::try_add`].
pub fn try_calculate(x: Operand, y: Operand) -> Result<Operand, TypeError> {
    x.try_add(y)
}

/// A value whose type is only known at runtime, e.g. a command line argument
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Int(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("unsupported operand types for +: '{0}' and '{1}'")]
    Unsupported(&'static str, &'static str),
    #[error("integer overflow: {0} + {1}")]
    Overflow(i64, i64),
}

impl Operand {
    /// Classify the input as an integer, then a float, falling back to text.
    ///
    /// Only input with at least one digit can be a float, so words like `inf`
    /// or `NaN` stay text.
    pub fn parse(input: &str) -> Self {
        if let Ok(x) = input.parse::<i64>() {
            return Self::Int(x);
        }
        if input.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(x) = input.parse::<f64>() {
                return Self::Float(x);
            }
        }
        Self::Text(input.to_string())
    }

    /// Name of the operand's kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "str",
        }
    }

    /// Add `rhs` to this operand.
    ///
    /// Numbers add numerically (an int mixed with a float gives a float), text
    /// concatenates. Text mixed with a number is a [`TypeError::Unsupported`].
    pub fn try_add(self, rhs: Operand) -> Result<Operand, TypeError> {
        log::trace!("adding {self:?} + {rhs:?}");
        let result = match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => match a.checked_add(b) {
                Some(x) => Self::Int(x),
                None => return Err(TypeError::Overflow(a, b)),
            },
            (Self::Int(a), Self::Float(b)) => Self::Float(a as f64 + b),
            (Self::Float(a), Self::Int(b)) => Self::Float(a + b as f64),
            (Self::Float(a), Self::Float(b)) => Self::Float(a + b),
            (Self::Text(mut a), Self::Text(b)) => {
                a.push_str(&b);
                Self::Text(a)
            }
            (a, b) => return Err(TypeError::Unsupported(a.kind(), b.kind())),
        };
        Ok(result)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(x) => write!(f, "{x}"),
            // keep the `.0` so a float result still reads as a float
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(x) => f.write_str(x),
        }
    }
}

impl From<i64> for Operand {
    fn from(x: i64) -> Self {
        Self::Int(x)
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Operand {
    fn from(x: &str) -> Self {
        Self::Text(x.to_string())
    }
}

impl From<String> for Operand {
    fn from(x: String) -> Self {
        Self::Text(x)
    }
}
