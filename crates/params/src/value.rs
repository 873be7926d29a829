//! Textual codec for parameter values and the erased type tag.

use std::any::{Any, TypeId};
use std::fmt;

/// Boxed, type-erased decoded value as stored in a resolved set.
pub(crate) type BoxedValue = Box<dyn Any + Send + Sync>;

/// A scalar type usable as a parameter value.
///
/// Implementations promise a total textual round trip: decoding the text a
/// value renders to yields an equal value, and `from_text` answers `None`
/// for malformed text instead of panicking or guessing.
pub trait ParameterValue: Any + Clone + Send + Sync {
    /// Canonical type name shown in help output and decode errors.
    const TYPE_NAME: &'static str;

    /// Parses the textual form. `None` when `text` is not a value of this
    /// type.
    fn from_text(text: &str) -> Option<Self>;

    /// Renders the canonical textual form.
    fn to_text(&self) -> String;
}

impl ParameterValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_text(text: &str) -> Option<Self> {
        Some(text.to_owned())
    }

    fn to_text(&self) -> String {
        self.clone()
    }
}

impl ParameterValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_text(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => Some(true),
            "false" | "0" | "no" | "n" => Some(false),
            _ => None,
        }
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl ParameterValue for char {
    const TYPE_NAME: &'static str = "char";

    fn from_text(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(value), None) => Some(value),
            _ => None,
        }
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_numeric_value {
    ($ty:ty, $name:literal) => {
        impl ParameterValue for $ty {
            const TYPE_NAME: &'static str = $name;

            fn from_text(text: &str) -> Option<Self> {
                text.trim().parse().ok()
            }

            fn to_text(&self) -> String {
                self.to_string()
            }
        }
    };
}

impl_numeric_value!(i8, "i8");
impl_numeric_value!(i16, "i16");
impl_numeric_value!(i32, "i32");
impl_numeric_value!(i64, "i64");
impl_numeric_value!(i128, "i128");
impl_numeric_value!(isize, "isize");
impl_numeric_value!(u8, "u8");
impl_numeric_value!(u16, "u16");
impl_numeric_value!(u32, "u32");
impl_numeric_value!(u64, "u64");
impl_numeric_value!(u128, "u128");
impl_numeric_value!(usize, "usize");
impl_numeric_value!(f32, "f32");
impl_numeric_value!(f64, "f64");

fn decode_erased<T: ParameterValue>(text: &str) -> Option<BoxedValue> {
    T::from_text(text).map(|value| Box::new(value) as BoxedValue)
}

/// Erased tag identifying a parameter's declared value type.
///
/// Carries the decode function alongside the type identity, so resolution
/// can turn raw text into a stored value without consulting any registry of
/// types. Tags compare equal exactly when they identify the same Rust type.
#[derive(Clone, Copy)]
pub struct ValueType {
    id: TypeId,
    name: &'static str,
    decoder: fn(&str) -> Option<BoxedValue>,
}

impl ValueType {
    /// The tag for `T`.
    pub fn of<T: ParameterValue>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::TYPE_NAME,
            decoder: decode_erased::<T>,
        }
    }

    /// The canonical type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this tag identifies `T`.
    pub fn is<T: ParameterValue>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Decodes raw text into an erased value of the tagged type.
    pub(crate) fn decode(&self, text: &str) -> Option<BoxedValue> {
        (self.decoder)(text)
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ValueType {}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueType").field(&self.name).finish()
    }
}
