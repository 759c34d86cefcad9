//! Value codecs
//!
//! Each settable property of the switch has a value type that knows how to
//! recognize itself in a response (`pattern`), read itself from a token
//! (`parse`) and write itself into a request (`Display`).

use std::borrow::Cow;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::{ConversionError, Result, VrroomError};

/// A value that travels as a single whitespace-free token on the wire
pub trait WireValue: Sized + fmt::Display {
    /// Regular expression matching exactly the tokens this type accepts.
    ///
    /// Not anchored; the response grammar anchors the whole line.
    fn pattern() -> &'static str;

    /// Read a token that already matched [`pattern`](WireValue::pattern)
    fn parse(token: &str) -> std::result::Result<Self, ConversionError>;
}

/// Converter from a matched token to a typed value
pub type Converter<T> = fn(&str) -> std::result::Result<T, ConversionError>;

/// A response value position: the grammar it must match and how to convert it
#[derive(Clone)]
pub struct ValueSpec<T> {
    pattern: Cow<'static, str>,
    convert: Converter<T>,
}

impl<T> ValueSpec<T> {
    /// Pair an arbitrary pattern with a converter
    pub fn new(pattern: impl Into<Cow<'static, str>>, convert: Converter<T>) -> Self {
        Self {
            pattern: pattern.into(),
            convert,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Apply the converter, wrapping failures as `ValueConversion`
    pub fn convert(&self, token: &str) -> Result<T> {
        (self.convert)(token).map_err(|source| VrroomError::ValueConversion {
            token: token.to_string(),
            source,
        })
    }
}

impl<T: WireValue> ValueSpec<T> {
    /// The spec described by a value type itself
    pub fn of() -> Self {
        Self::new(T::pattern(), T::parse)
    }
}

impl ValueSpec<String> {
    /// Accept the token as-is under the given pattern
    pub fn text(pattern: impl Into<Cow<'static, str>>) -> Self {
        Self::new(pattern, |token| Ok(token.to_string()))
    }
}

impl<T> fmt::Debug for ValueSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueSpec")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Pair separately supplied patterns and converters by position.
///
/// Fails with `ArityMismatch` when the two lists differ in length.
pub fn zip_specs<T, P: AsRef<str>>(
    patterns: &[P],
    converters: &[Converter<T>],
) -> Result<Vec<ValueSpec<T>>> {
    if patterns.len() != converters.len() {
        return Err(VrroomError::ArityMismatch {
            patterns: patterns.len(),
            converters: converters.len(),
        });
    }

    Ok(patterns
        .iter()
        .zip(converters)
        .map(|(pattern, convert)| ValueSpec::new(pattern.as_ref().to_string(), *convert))
        .collect())
}

// =============================================================================
// On/Off Switch
// =============================================================================

/// An on/off property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnOff {
    Off,
    On,
}

impl OnOff {
    pub fn is_on(self) -> bool {
        self == OnOff::On
    }
}

impl From<bool> for OnOff {
    fn from(on: bool) -> Self {
        if on {
            OnOff::On
        } else {
            OnOff::Off
        }
    }
}

impl From<OnOff> for bool {
    fn from(value: OnOff) -> Self {
        value.is_on()
    }
}

impl fmt::Display for OnOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OnOff::Off => "off",
            OnOff::On => "on",
        })
    }
}

impl WireValue for OnOff {
    fn pattern() -> &'static str {
        "(?:off|on)"
    }

    fn parse(token: &str) -> std::result::Result<Self, ConversionError> {
        match token {
            "off" => Ok(OnOff::Off),
            "on" => Ok(OnOff::On),
            other => Err(format!("'{other}' is neither on nor off").into()),
        }
    }
}

// =============================================================================
// Indexed Enumerations
// =============================================================================

/// Declares a value type encoded as its decimal index.
macro_rules! indexed_value {
    (
        $(#[$meta:meta])*
        $name:ident, $pattern:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $index:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $index, )+
        }

        impl $name {
            /// Every value, in index order
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub fn index(self) -> u8 {
                self as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = ConversionError;

            fn try_from(index: u8) -> std::result::Result<Self, Self::Error> {
                match index {
                    $( $index => Ok($name::$variant), )+
                    other => Err(format!(
                        "{} is not a valid {}",
                        other,
                        stringify!($name)
                    )
                    .into()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.index())
            }
        }

        impl WireValue for $name {
            fn pattern() -> &'static str {
                $pattern
            }

            fn parse(token: &str) -> std::result::Result<Self, ConversionError> {
                let index: u8 = token.parse()?;
                $name::try_from(index)
            }
        }
    };
}

indexed_value! {
    /// Operation mode of the switch
    OperationMode, "[0-4]" {
        SplitterVrr = 0,
        SplitterUpscale = 1,
        MatrixTmds = 2,
        MatrixTmdsDownscale = 3,
        MatrixFrl5Tmds = 4,
    }
}

indexed_value! {
    /// A selectable input
    Input, "[0-4]" {
        Rx0 = 0,
        Rx1 = 1,
        Rx2 = 2,
        Rx3 = 3,
        /// TX1 follows whatever TX0 shows
        Follow = 4,
    }
}

indexed_value! {
    /// Which data a factory reset clears
    ResetKind, "[1-3]" {
        Settings = 1,
        EdidTables = 2,
        All = 3,
    }
}

// =============================================================================
// Network Values
// =============================================================================

const OCTET: &str = "(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])";

/// An IPv4 address, mask, or gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4(pub Ipv4Addr);

impl From<Ipv4Addr> for Ipv4 {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4(addr)
    }
}

impl FromStr for Ipv4 {
    type Err = ConversionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <Self as WireValue>::parse(s)
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl WireValue for Ipv4 {
    fn pattern() -> &'static str {
        static PATTERN: std::sync::OnceLock<String> = std::sync::OnceLock::new();
        PATTERN.get_or_init(|| format!("(?:{OCTET}\\.){{3}}{OCTET}"))
    }

    fn parse(token: &str) -> std::result::Result<Self, ConversionError> {
        Ok(Ipv4(token.parse()?))
    }
}

/// The switch's TCP command port (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TcpPort(u16);

impl TcpPort {
    pub fn new(port: u16) -> std::result::Result<Self, ConversionError> {
        if port == 0 {
            return Err("TCP port 0 is not usable".into());
        }
        Ok(TcpPort(port))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl FromStr for TcpPort {
    type Err = ConversionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <Self as WireValue>::parse(s)
    }
}

impl fmt::Display for TcpPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl WireValue for TcpPort {
    fn pattern() -> &'static str {
        "(?:[1-9][0-9]{0,3}|[1-5][0-9]{4}|6[0-4][0-9]{3}|65[0-4][0-9]{2}|655[0-2][0-9]|6553[0-5])"
    }

    fn parse(token: &str) -> std::result::Result<Self, ConversionError> {
        TcpPort::new(token.parse()?)
    }
}

/// A hardware address, reported by the switch but never set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl FromStr for MacAddress {
    type Err = ConversionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <Self as WireValue>::parse(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl WireValue for MacAddress {
    fn pattern() -> &'static str {
        "(?:[0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}"
    }

    fn parse(token: &str) -> std::result::Result<Self, ConversionError> {
        let parts: Vec<&str> = token.split([':', '-']).collect();
        if parts.len() != 6 || parts.iter().any(|p| p.len() != 2) {
            return Err(format!("'{token}' is not a MAC address").into());
        }

        let mut bytes = [0u8; 6];
        for (byte, part) in bytes.iter_mut().zip(&parts) {
            *byte = u8::from_str_radix(part, 16)?;
        }
        Ok(MacAddress(bytes))
    }
}
