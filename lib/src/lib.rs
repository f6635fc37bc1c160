//! This library turns the raw integers and structures exchanged with the V4L2
//! and V4L2-subdev ioctls into a safe, typed model, and back:
//!
//! * The `codec` module defines the [`AbiEnum`] trait implemented by every
//!   kernel enumeration (buffer type, colorspace, field order, media-bus pixel
//!   code, memory type, quantization, transfer function...). Decoding is exact:
//!   a value the tables do not know is an error, never a default.
//!
//! * The `format` module provides a typed `v4l2_pix_format`, the image format
//!   of video nodes, convertible to the media bus format of a sensor.
//!
//! * The `subdev` module provides typed `v4l2_mbus_framefmt` and
//!   `v4l2_subdev_format` structures, along with the layout shim needed because
//!   `v4l2_subdev_format` gained a `stream` member in Linux 6.3.
//!
//! * The `ioctl` module wraps the few subdevice ioctls that exchange these
//!   structures, running the conversions on the way in and out.
//!
//! Table entries that are newer than [`KernelVersion::BASELINE`] are tagged
//! with the release that introduced them, so a caller can restrict decoding to
//! what the running kernel may actually return with [`AbiEnum::decode_on`].
#[doc(hidden)]
pub mod bindings;
pub mod codec;
pub mod format;
pub mod ioctl;
pub mod kernel;
pub mod mbus;
pub mod memory;
pub mod pixfmt;
pub mod subdev;

use std::fmt;
use std::fmt::{Debug, Display};

use crate::codec::abi_enum;

pub use crate::codec::{AbiEnum, Concept, DecodeError};
pub use crate::format::PixFormat;
pub use crate::kernel::KernelVersion;
pub use crate::mbus::MbusPixelcode;
pub use crate::memory::MemoryType;
pub use crate::pixfmt::PixFmt;
pub use crate::subdev::{
    FormatWhence, MbusFrameFormat, StreamAccessError, SubdevFormat, SubdevLayout,
};

/// Possible directions for a buffer queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum QueueDirection {
    Output,
    Capture,
}

abi_enum! {
    /// Equivalent of `enum v4l2_buf_type`.
    pub enum BufferType: u32 => BufType {
        VideoCapture = bindings::V4L2_BUF_TYPE_VIDEO_CAPTURE;
        VideoOutput = bindings::V4L2_BUF_TYPE_VIDEO_OUTPUT;
        VideoOverlay = bindings::V4L2_BUF_TYPE_VIDEO_OVERLAY;
        VbiCapture = bindings::V4L2_BUF_TYPE_VBI_CAPTURE;
        VbiOutput = bindings::V4L2_BUF_TYPE_VBI_OUTPUT;
        SlicedVbiCapture = bindings::V4L2_BUF_TYPE_SLICED_VBI_CAPTURE;
        SlicedVbiOutput = bindings::V4L2_BUF_TYPE_SLICED_VBI_OUTPUT;
        VideoOutputOverlay = bindings::V4L2_BUF_TYPE_VIDEO_OUTPUT_OVERLAY;
        VideoCaptureMplane = bindings::V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE;
        VideoOutputMplane = bindings::V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE;
        SdrCapture = bindings::V4L2_BUF_TYPE_SDR_CAPTURE;
        SdrOutput = bindings::V4L2_BUF_TYPE_SDR_OUTPUT;
        MetaCapture = bindings::V4L2_BUF_TYPE_META_CAPTURE;
        MetaOutput = bindings::V4L2_BUF_TYPE_META_OUTPUT;
        /// Start of the driver-private range.
        Private = bindings::V4L2_BUF_TYPE_PRIVATE;
    }
}

impl BufferType {
    /// Returns whether the buffer type uses the multi-planar API.
    pub fn is_multiplanar(&self) -> bool {
        matches!(
            self,
            BufferType::VideoCaptureMplane | BufferType::VideoOutputMplane
        )
    }

    /// Returns the direction of the queue using this buffer type, if it has one.
    ///
    /// Driver-private buffer types have no direction the ABI can tell.
    pub fn direction(&self) -> Option<QueueDirection> {
        match self {
            BufferType::VideoOutput
            | BufferType::VideoOutputMplane
            | BufferType::VideoOverlay
            | BufferType::VideoOutputOverlay
            | BufferType::VbiOutput
            | BufferType::SlicedVbiOutput
            | BufferType::SdrOutput
            | BufferType::MetaOutput => Some(QueueDirection::Output),

            BufferType::VideoCapture
            | BufferType::VbiCapture
            | BufferType::SlicedVbiCapture
            | BufferType::VideoCaptureMplane
            | BufferType::SdrCapture
            | BufferType::MetaCapture => Some(QueueDirection::Capture),

            BufferType::Private => None,
        }
    }
}

impl Display for BufferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

abi_enum! {
    /// Equivalent of `enum v4l2_field`.
    ///
    /// Stored on 8 bits: values that do not fit are rejected as a narrowing
    /// violation before any lookup.
    pub enum Field: u8 => Field {
        Any = bindings::V4L2_FIELD_ANY as u8;
        None = bindings::V4L2_FIELD_NONE as u8;
        Top = bindings::V4L2_FIELD_TOP as u8;
        Bottom = bindings::V4L2_FIELD_BOTTOM as u8;
        Interlaced = bindings::V4L2_FIELD_INTERLACED as u8;
        SeqTb = bindings::V4L2_FIELD_SEQ_TB as u8;
        SeqBt = bindings::V4L2_FIELD_SEQ_BT as u8;
        Alternate = bindings::V4L2_FIELD_ALTERNATE as u8;
        InterlacedTb = bindings::V4L2_FIELD_INTERLACED_TB as u8;
        InterlacedBt = bindings::V4L2_FIELD_INTERLACED_BT as u8;
    }
}

impl Default for Field {
    fn default() -> Self {
        Field::Any
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Any => "any",
            Field::None => "none",
            Field::Top => "top",
            Field::Bottom => "bottom",
            Field::Interlaced => "interlaced",
            Field::SeqTb => "sequential, top then bottom",
            Field::SeqBt => "sequential, bottom then top",
            Field::Alternate => "alternate",
            Field::InterlacedTb => "interlaced, top then bottom",
            Field::InterlacedBt => "interlaced, bottom then top",
        })
    }
}

abi_enum! {
    /// Equivalent of `enum v4l2_colorspace`.
    pub enum Colorspace: u32 => Colorspace {
        Default = bindings::V4L2_COLORSPACE_DEFAULT;
        Smpte170M = bindings::V4L2_COLORSPACE_SMPTE170M;
        Smpte240M = bindings::V4L2_COLORSPACE_SMPTE240M;
        Rec709 = bindings::V4L2_COLORSPACE_REC709;
        /// Deprecated, no driver returns it.
        Bt878 = bindings::V4L2_COLORSPACE_BT878;
        SystemM470 = bindings::V4L2_COLORSPACE_470_SYSTEM_M;
        SystemBG470 = bindings::V4L2_COLORSPACE_470_SYSTEM_BG;
        Jpeg = bindings::V4L2_COLORSPACE_JPEG;
        Srgb = bindings::V4L2_COLORSPACE_SRGB;
        OpRgb = bindings::V4L2_COLORSPACE_OPRGB;
        Bt2020 = bindings::V4L2_COLORSPACE_BT2020;
        Raw = bindings::V4L2_COLORSPACE_RAW;
        DciP3 = bindings::V4L2_COLORSPACE_DCI_P3;
    }
}

impl Default for Colorspace {
    fn default() -> Self {
        Colorspace::Default
    }
}

impl Display for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Colorspace::Default => "default",
            Colorspace::Smpte170M => "SMPTE 170m",
            Colorspace::Smpte240M => "SMPTE 240m",
            Colorspace::Rec709 => "Rec. 709",
            Colorspace::Bt878 => "BT.878",
            Colorspace::SystemM470 => "NTSC 1953",
            Colorspace::SystemBG470 => "EBU Tech. 3213 (PAL/SECAM)",
            Colorspace::Jpeg => "JPEG",
            Colorspace::Srgb => "sRGB",
            Colorspace::OpRgb => "opRGB",
            Colorspace::Bt2020 => "Rec. 2020",
            Colorspace::Raw => "Raw",
            Colorspace::DciP3 => "DCI-P3",
        })
    }
}

abi_enum! {
    /// Equivalent of `enum v4l2_xfer_func`.
    pub enum XferFunc: u16 => XferFunc {
        Default = bindings::V4L2_XFER_FUNC_DEFAULT as u16;
        F709 = bindings::V4L2_XFER_FUNC_709 as u16;
        Srgb = bindings::V4L2_XFER_FUNC_SRGB as u16;
        OpRgb = bindings::V4L2_XFER_FUNC_OPRGB as u16;
        Smpte240M = bindings::V4L2_XFER_FUNC_SMPTE240M as u16;
        None = bindings::V4L2_XFER_FUNC_NONE as u16;
        DciP3 = bindings::V4L2_XFER_FUNC_DCI_P3 as u16;
        Smpte2084 = bindings::V4L2_XFER_FUNC_SMPTE2084 as u16;
    }
}

impl Default for XferFunc {
    fn default() -> Self {
        XferFunc::Default
    }
}

impl Display for XferFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            XferFunc::Default => "default",
            XferFunc::F709 => "Rec. 709",
            XferFunc::Srgb => "sRGB",
            XferFunc::OpRgb => "opRGB",
            XferFunc::Smpte240M => "SMPTE 240m",
            XferFunc::None => "none",
            XferFunc::DciP3 => "DCI-P3",
            XferFunc::Smpte2084 => "SMPTE ST 2084",
        })
    }
}

abi_enum! {
    /// Equivalent of `enum v4l2_ycbcr_encoding`.
    pub enum YCbCrEncoding: u16 => YCbCrEncoding {
        Default = bindings::V4L2_YCBCR_ENC_DEFAULT as u16;
        E601 = bindings::V4L2_YCBCR_ENC_601 as u16;
        E709 = bindings::V4L2_YCBCR_ENC_709 as u16;
        Xv601 = bindings::V4L2_YCBCR_ENC_XV601 as u16;
        Xv709 = bindings::V4L2_YCBCR_ENC_XV709 as u16;
        /// Deprecated, no driver returns it.
        Sycc = bindings::V4L2_YCBCR_ENC_SYCC as u16;
        Bt2020 = bindings::V4L2_YCBCR_ENC_BT2020 as u16;
        Bt2020ConstLum = bindings::V4L2_YCBCR_ENC_BT2020_CONST_LUM as u16;
        Smpte240M = bindings::V4L2_YCBCR_ENC_SMPTE240M as u16;
    }
}

impl Display for YCbCrEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            YCbCrEncoding::Default => "default",
            YCbCrEncoding::E601 => "Rec. 601",
            YCbCrEncoding::E709 => "Rec. 709",
            YCbCrEncoding::Xv601 => "Rec. 601, Extended Gamut",
            YCbCrEncoding::Xv709 => "Rec. 709, Extended Gamut",
            YCbCrEncoding::Sycc => "sYCC",
            YCbCrEncoding::Bt2020 => "Rec. 2020",
            YCbCrEncoding::Bt2020ConstLum => "Rec. 2020, Constant Luminance",
            YCbCrEncoding::Smpte240M => "SMPTE 240m",
        })
    }
}

abi_enum! {
    /// Equivalent of `enum v4l2_hsv_encoding`.
    pub enum HsvEncoding: u16 => HsvEncoding {
        Enc180 = bindings::V4L2_HSV_ENC_180 as u16;
        Enc256 = bindings::V4L2_HSV_ENC_256 as u16;
    }
}

impl Display for HsvEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HsvEncoding::Enc180 => "0-179 Range",
            HsvEncoding::Enc256 => "0-255 Range",
        })
    }
}

/// Content of the `ycbcr_enc`/`hsv_enc` union found in format structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorEncoding {
    YCbCr(YCbCrEncoding),
    Hsv(HsvEncoding),
}

impl ColorEncoding {
    /// Decodes the union, HSV encodings being numbered from 128 on.
    pub fn decode(raw: u32) -> Result<Self, DecodeError> {
        if raw >= bindings::V4L2_HSV_ENC_180 {
            HsvEncoding::decode(raw).map(ColorEncoding::Hsv)
        } else {
            YCbCrEncoding::decode(raw).map(ColorEncoding::YCbCr)
        }
    }

    pub fn encode(self) -> u32 {
        match self {
            ColorEncoding::YCbCr(e) => e.encode(),
            ColorEncoding::Hsv(e) => e.encode(),
        }
    }

    /// Value to store in a 16-bit union member.
    pub fn to_repr(self) -> u16 {
        match self {
            ColorEncoding::YCbCr(e) => e.to_repr(),
            ColorEncoding::Hsv(e) => e.to_repr(),
        }
    }
}

impl Default for ColorEncoding {
    fn default() -> Self {
        ColorEncoding::YCbCr(YCbCrEncoding::Default)
    }
}

impl Display for ColorEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorEncoding::YCbCr(e) => write!(f, "YCbCr/{}", e),
            ColorEncoding::Hsv(e) => write!(f, "Hue/{}", e),
        }
    }
}

abi_enum! {
    /// Equivalent of `enum v4l2_quantization`.
    pub enum Quantization: u16 => Quantization {
        Default = bindings::V4L2_QUANTIZATION_DEFAULT as u16;
        FullRange = bindings::V4L2_QUANTIZATION_FULL_RANGE as u16;
        LimRange = bindings::V4L2_QUANTIZATION_LIM_RANGE as u16;
    }
}

impl Default for Quantization {
    fn default() -> Self {
        Quantization::Default
    }
}

impl Display for Quantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quantization::Default => "default",
            Quantization::FullRange => "full range",
            Quantization::LimRange => "limited range",
        })
    }
}

/// A Fourcc pixel format as passed to V4L2. Any 32-bit value can be held;
/// [`PixFmt`] is the closed set of formats this crate knows about.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PixelFormat(u32);

impl PixelFormat {
    pub const fn from_u32(v: u32) -> Self {
        Self(v)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn from_fourcc(n: &[u8; 4]) -> Self {
        Self(pixfmt::fourcc(n))
    }

    pub const fn to_fourcc(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Whether the big-endian variant bit is set.
    pub const fn is_big_endian(self) -> bool {
        self.0 & pixfmt::FOURCC_BE_FLAG != 0
    }
}

impl From<u32> for PixelFormat {
    fn from(i: u32) -> Self {
        Self::from_u32(i)
    }
}

impl From<PixelFormat> for u32 {
    fn from(format: PixelFormat) -> Self {
        format.to_u32()
    }
}

/// # Examples
///
/// ```
/// # use v4l2_abi::PixelFormat;
/// let f = PixelFormat::from(b"NV12");
/// assert_eq!(u32::from(f), 0x3231564e);
/// ```
impl From<&[u8; 4]> for PixelFormat {
    fn from(n: &[u8; 4]) -> Self {
        Self::from_fourcc(n)
    }
}

/// Produces a debug string including the hexadecimal and fourcc forms.
///
/// # Examples
///
/// ```
/// # use v4l2_abi::PixelFormat;
/// let f = PixelFormat::from(0x3231564e);
/// assert_eq!(format!("{:?}", f), "0x3231564e (NV12)");
/// ```
impl fmt::Debug for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_fmt(format_args!("0x{:08x} ({})", self.0, self))
    }
}

/// The four characters of the code, with ` BE` appended for big-endian
/// variants.
///
/// # Examples
///
/// ```
/// # use v4l2_abi::PixelFormat;
/// assert_eq!(PixelFormat::from(b"YUYV").to_string(), "YUYV");
/// ```
impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code = self.0 & !pixfmt::FOURCC_BE_FLAG;
        let fourcc = code
            .to_le_bytes()
            .iter()
            .map(|&x| x as char)
            .collect::<String>();
        f.write_str(fourcc.as_str())?;
        if self.is_big_endian() {
            f.write_str(" BE")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tests::check_table;

    #[test]
    fn tables_are_exact() {
        check_table::<BufferType>();
        check_table::<Field>();
        check_table::<Colorspace>();
        check_table::<XferFunc>();
        check_table::<YCbCrEncoding>();
        check_table::<HsvEncoding>();
        check_table::<Quantization>();
    }

    #[test]
    fn buffer_type() {
        assert_eq!(
            BufferType::decode(bindings::V4L2_BUF_TYPE_VIDEO_CAPTURE),
            Ok(BufferType::VideoCapture)
        );
        assert_eq!(BufferType::VideoCapture.encode(), 1);
        assert_eq!(
            BufferType::decode(9999),
            Err(DecodeError::UnknownVariant {
                concept: Concept::BufType,
                raw_value: 9999
            })
        );
        assert_eq!(BufferType::decode(0x80), Ok(BufferType::Private));
        assert!(BufferType::VideoOutputMplane.is_multiplanar());
        assert!(!BufferType::VideoOutput.is_multiplanar());
        assert_eq!(
            BufferType::MetaCapture.direction(),
            Some(QueueDirection::Capture)
        );
        assert_eq!(
            BufferType::SdrOutput.direction(),
            Some(QueueDirection::Output)
        );
        assert_eq!(BufferType::Private.direction(), None);
    }

    #[test]
    fn field_is_eight_bits() {
        assert_eq!(Field::declared_width(), 8);
        assert_eq!(Field::decode(9), Ok(Field::InterlacedBt));
        assert_eq!(
            Field::decode(10),
            Err(DecodeError::UnknownVariant {
                concept: Concept::Field,
                raw_value: 10
            })
        );
        // 256 would truncate to `Any`.
        assert_eq!(
            Field::decode(256),
            Err(DecodeError::NarrowingViolation {
                concept: Concept::Field,
                raw_value: 256,
                declared_width: 8
            })
        );
    }

    #[test]
    fn sixteen_bit_concepts() {
        assert_eq!(Quantization::declared_width(), 16);
        assert_eq!(XferFunc::declared_width(), 16);
        // 0x10001 would truncate to `FullRange` / `F709`.
        assert!(matches!(
            Quantization::decode(0x10001),
            Err(DecodeError::NarrowingViolation {
                declared_width: 16,
                ..
            })
        ));
        assert!(matches!(
            XferFunc::decode(0x10001),
            Err(DecodeError::NarrowingViolation {
                declared_width: 16,
                ..
            })
        ));
        assert!(matches!(
            Quantization::decode(3),
            Err(DecodeError::UnknownVariant { .. })
        ));
        assert_eq!(XferFunc::try_from(7u32), Ok(XferFunc::Smpte2084));
        assert_eq!(u32::from(Quantization::LimRange), 2);
    }

    #[test]
    fn color_encoding() {
        assert_eq!(
            ColorEncoding::decode(bindings::V4L2_YCBCR_ENC_709),
            Ok(ColorEncoding::YCbCr(YCbCrEncoding::E709))
        );
        assert_eq!(
            ColorEncoding::decode(bindings::V4L2_HSV_ENC_256),
            Ok(ColorEncoding::Hsv(HsvEncoding::Enc256))
        );
        assert_eq!(
            ColorEncoding::decode(9),
            Err(DecodeError::UnknownVariant {
                concept: Concept::YCbCrEncoding,
                raw_value: 9
            })
        );
        assert_eq!(
            ColorEncoding::decode(130),
            Err(DecodeError::UnknownVariant {
                concept: Concept::HsvEncoding,
                raw_value: 130
            })
        );
        assert_eq!(ColorEncoding::Hsv(HsvEncoding::Enc180).encode(), 128);
        assert_eq!(
            ColorEncoding::YCbCr(YCbCrEncoding::Bt2020).to_string(),
            "YCbCr/Rec. 2020"
        );
    }

    #[test]
    fn display() {
        assert_eq!(Colorspace::Srgb.to_string(), "sRGB");
        assert_eq!(Field::SeqTb.to_string(), "sequential, top then bottom");
        assert_eq!(Quantization::LimRange.to_string(), "limited range");
        assert_eq!(XferFunc::Smpte2084.to_string(), "SMPTE ST 2084");
        assert_eq!(BufferType::VideoCaptureMplane.to_string(), "VideoCaptureMplane");
    }

    #[test]
    fn pixel_format_fourcc() {
        let nv12 = PixelFormat::from(b"NV12");
        assert_eq!(nv12.to_fourcc(), *b"NV12");
        assert!(!nv12.is_big_endian());

        let be = PixelFormat::from(pixfmt::fourcc_be(b"NT12"));
        assert!(be.is_big_endian());
        assert_eq!(be.to_string(), "NT12 BE");
    }
}
