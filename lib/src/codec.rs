//! Exact conversions between raw kernel integers and closed enumerations.
//!
//! Every enumerated concept of the V4L2 ABI implements [`AbiEnum`]. Decoding
//! happens in two steps: the raw value is first narrowed to the storage width
//! the concept is declared with, then looked up in the concept's table. The two
//! steps fail differently:
//!
//! * a value that does not fit the declared width means our tables and the
//!   kernel disagree about the ABI itself, and yields
//!   [`DecodeError::NarrowingViolation`];
//! * a value that fits but has no entry is a plain unsupported value, and
//!   yields [`DecodeError::UnknownVariant`].
//!
//! There is never a fallback variant. Encoding is infallible.
//!
//! Tables are declared with the `abi_enum!` macro, where each entry may carry
//! the kernel release that introduced it. Growing a table is a one-line change.
use std::fmt;
use std::mem;

use log::error;
use nix::errno::Errno;
use thiserror::Error;

use crate::kernel::KernelVersion;

/// The kernel enumerations this crate can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concept {
    BufType,
    Colorspace,
    Field,
    MbusPixelcode,
    Memory,
    Quantization,
    SubdevFormatWhence,
    XferFunc,
    YCbCrEncoding,
    HsvEncoding,
    PixelFormat,
}

impl Concept {
    /// Name of the concept in the kernel headers. Fourcc formats have no enum
    /// type there, so they go by their macro prefix.
    pub fn c_name(self) -> &'static str {
        match self {
            Concept::BufType => "v4l2_buf_type",
            Concept::Colorspace => "v4l2_colorspace",
            Concept::Field => "v4l2_field",
            Concept::MbusPixelcode => "v4l2_mbus_pixelcode",
            Concept::Memory => "v4l2_memory",
            Concept::Quantization => "v4l2_quantization",
            Concept::SubdevFormatWhence => "v4l2_subdev_format_whence",
            Concept::XferFunc => "v4l2_xfer_func",
            Concept::YCbCrEncoding => "v4l2_ycbcr_encoding",
            Concept::HsvEncoding => "v4l2_hsv_encoding",
            Concept::PixelFormat => "V4L2_PIX_FMT",
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown {concept} value {raw_value:#x}")]
    UnknownVariant { concept: Concept, raw_value: u32 },
    #[error("{concept} value {raw_value:#x} does not fit in {declared_width} bits")]
    NarrowingViolation {
        concept: Concept,
        raw_value: u32,
        declared_width: u32,
    },
}

impl DecodeError {
    pub fn concept(&self) -> Concept {
        match self {
            DecodeError::UnknownVariant { concept, .. }
            | DecodeError::NarrowingViolation { concept, .. } => *concept,
        }
    }

    pub fn raw_value(&self) -> u32 {
        match self {
            DecodeError::UnknownVariant { raw_value, .. }
            | DecodeError::NarrowingViolation { raw_value, .. } => *raw_value,
        }
    }

    /// Whether this error means the ABI tables do not match the running kernel.
    ///
    /// Fatal errors are deployment defects: callers should stop interpreting
    /// anything coming from the device rather than retry or skip the value.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DecodeError::NarrowingViolation { .. })
    }
}

impl From<DecodeError> for Errno {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::UnknownVariant { .. } => Errno::EOPNOTSUPP,
            DecodeError::NarrowingViolation { .. } => Errno::EOVERFLOW,
        }
    }
}

/// A kernel enumeration with an exact, bidirectional mapping to its raw codes.
pub trait AbiEnum: Copy + Eq + fmt::Debug + 'static {
    /// Storage type of the concept. Its width is part of the contract.
    type Repr: Copy + Into<u32> + TryFrom<u32>;

    const CONCEPT: Concept;

    /// Every entry of the table, in declaration order.
    const VARIANTS: &'static [Self];

    /// Looks `repr` up in the table.
    fn from_repr(repr: Self::Repr) -> Option<Self>;

    fn to_repr(self) -> Self::Repr;

    /// Kernel release that introduced this entry.
    fn since(self) -> KernelVersion;

    /// Width in bits of [`AbiEnum::Repr`].
    fn declared_width() -> u32 {
        (mem::size_of::<Self::Repr>() * 8) as u32
    }

    /// Decodes a raw value received from the kernel.
    fn decode(raw: u32) -> Result<Self, DecodeError> {
        let repr = <Self::Repr as TryFrom<u32>>::try_from(raw).map_err(|_| {
            let err = DecodeError::NarrowingViolation {
                concept: Self::CONCEPT,
                raw_value: raw,
                declared_width: Self::declared_width(),
            };
            error!("{}", err);
            err
        })?;

        Self::from_repr(repr).ok_or(DecodeError::UnknownVariant {
            concept: Self::CONCEPT,
            raw_value: raw,
        })
    }

    /// Raw value to pass to the kernel.
    fn encode(self) -> u32 {
        self.to_repr().into()
    }

    /// Like [`AbiEnum::decode`], but only accepts entries that exist on `kernel`.
    fn decode_on(raw: u32, kernel: &KernelVersion) -> Result<Self, DecodeError> {
        let value = Self::decode(raw)?;

        if value.since() <= *kernel {
            Ok(value)
        } else {
            Err(DecodeError::UnknownVariant {
                concept: Self::CONCEPT,
                raw_value: raw,
            })
        }
    }

    /// The entries of the table that exist on `kernel`.
    fn table_for(kernel: &KernelVersion) -> Vec<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .filter(|v| v.since() <= *kernel)
            .collect()
    }
}

/// Turns the optional `since(major, minor)` tag of a table entry into a release.
#[doc(hidden)]
pub const fn since_tag(tag: &[u8]) -> KernelVersion {
    match tag {
        [major, minor] => KernelVersion::new(*major as u16, *minor, 0),
        _ => KernelVersion::BASELINE,
    }
}

/// Declares a kernel enumeration and implements [`AbiEnum`] for it.
///
/// ```text
/// abi_enum! {
///     pub enum Field: u8 => Field {
///         Any = bindings::V4L2_FIELD_ANY as u8;
///         ...
///         SomeNewField = 42 => since(6, 10);
///     }
/// }
/// ```
///
/// The lookup is generated by `enumn`, which matches every discriminant
/// exactly and has no default arm.
macro_rules! abi_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ident => $concept:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $raw:expr $(=> since($major:literal, $minor:literal))?;
            )+
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::enumn::N)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $raw,
            )+
        }

        impl $crate::codec::AbiEnum for $name {
            type Repr = $repr;

            const CONCEPT: $crate::codec::Concept = $crate::codec::Concept::$concept;

            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn from_repr(repr: $repr) -> Option<Self> {
                Self::n(repr)
            }

            fn to_repr(self) -> $repr {
                self as $repr
            }

            fn since(self) -> $crate::kernel::KernelVersion {
                match self {
                    $(
                        Self::$variant => $crate::codec::since_tag(&[$($major, $minor)?]),
                    )+
                }
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::codec::DecodeError;

            fn try_from(raw: u32) -> Result<Self, Self::Error> {
                <Self as $crate::codec::AbiEnum>::decode(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                <$name as $crate::codec::AbiEnum>::encode(value)
            }
        }
    };
}

pub(crate) use abi_enum;

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Checks that a table is injective and round-trips through both widths.
    pub(crate) fn check_table<T: AbiEnum>() {
        let mut seen = HashSet::new();
        for &variant in T::VARIANTS {
            let raw = variant.encode();
            assert!(
                seen.insert(raw),
                "{} code {:#x} used twice",
                T::CONCEPT,
                raw
            );
            assert_eq!(T::decode(raw), Ok(variant));
            assert_eq!(T::from_repr(variant.to_repr()), Some(variant));
            assert_eq!(T::decode_on(raw, &variant.since()), Ok(variant));
        }
    }

    abi_enum! {
        enum Sample: u8 => Field {
            Zero = 0;
            One = 1;
            Seven = 7 => since(6, 10);
        }
    }

    #[test]
    fn sample_table() {
        check_table::<Sample>();
        assert_eq!(Sample::declared_width(), 8);
        assert_eq!(Sample::Zero.since(), KernelVersion::BASELINE);
        assert_eq!(Sample::Seven.since(), KernelVersion::new(6, 10, 0));
    }

    #[test]
    fn unknown_value() {
        let err = Sample::decode(2).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownVariant {
                concept: Concept::Field,
                raw_value: 2
            }
        );
        assert!(!err.is_fatal());
        assert_eq!(Errno::from(err), Errno::EOPNOTSUPP);
    }

    #[test]
    fn narrowing_is_not_unknown() {
        // 0x100 | 1 would alias `One` if the value were truncated.
        let err = Sample::decode(0x101).unwrap_err();
        assert_eq!(
            err,
            DecodeError::NarrowingViolation {
                concept: Concept::Field,
                raw_value: 0x101,
                declared_width: 8
            }
        );
        assert!(err.is_fatal());
        assert_eq!(err.raw_value(), 0x101);
        assert_eq!(Errno::from(err), Errno::EOVERFLOW);
    }

    #[test]
    fn versioned_entries() {
        let old = KernelVersion::new(6, 9, 0);
        let new = KernelVersion::new(6, 10, 0);

        assert_eq!(
            Sample::decode_on(7, &old),
            Err(DecodeError::UnknownVariant {
                concept: Concept::Field,
                raw_value: 7
            })
        );
        assert_eq!(Sample::decode_on(7, &new), Ok(Sample::Seven));
        assert_eq!(Sample::table_for(&old), vec![Sample::Zero, Sample::One]);
        assert_eq!(Sample::table_for(&new), Sample::VARIANTS.to_vec());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Sample::decode(3).unwrap_err().to_string(),
            "unknown v4l2_field value 0x3"
        );
        assert_eq!(
            Sample::decode(256).unwrap_err().to_string(),
            "v4l2_field value 0x100 does not fit in 8 bits"
        );
        assert_eq!(
            DecodeError::UnknownVariant {
                concept: Concept::PixelFormat,
                raw_value: 0x4443_4241
            }
            .to_string(),
            "unknown V4L2_PIX_FMT value 0x44434241"
        );
    }
}
