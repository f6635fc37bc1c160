//! Typed version of `struct v4l2_pix_format`, the single-planar image format
//! exchanged with video nodes.
use std::fmt;

use bitflags::bitflags;
use log::debug;
use thiserror::Error;

use crate::bindings;
use crate::codec::AbiEnum;
use crate::subdev::MbusFrameFormatFlags;
use crate::{
    ColorEncoding, Colorspace, DecodeError, Field, MbusFrameFormat, PixFmt, PixelFormat,
    Quantization, XferFunc,
};

bitflags! {
    /// Flags of `v4l2_pix_format::flags`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PixFormatFlags: u32 {
        const PREMUL_ALPHA = bindings::V4L2_PIX_FMT_FLAG_PREMUL_ALPHA;
        /// Request the colorimetry fields to be applied on `S_FMT`.
        const SET_CSC = bindings::V4L2_PIX_FMT_FLAG_SET_CSC;
    }
}

/// Safe variant of `struct v4l2_pix_format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixFormat {
    /// Width of the image in pixels.
    pub width: u32,
    /// Height of the image in pixels.
    pub height: u32,
    pub pixelformat: PixFmt,
    pub field: Field,
    /// Bytes per line of the first plane.
    pub bytesperline: u32,
    /// Size in bytes of the buffer holding a frame.
    pub sizeimage: u32,
    pub colorspace: Colorspace,
    pub flags: PixFormatFlags,
    pub encoding: ColorEncoding,
    pub quantization: Quantization,
    pub xfer_func: XferFunc,
}

impl PixFormat {
    /// Creates a format with default colorimetry, leaving the sizes to the
    /// driver.
    pub fn new(width: u32, height: u32, pixelformat: PixFmt) -> Self {
        Self {
            width,
            height,
            pixelformat,
            field: Default::default(),
            bytesperline: 0,
            sizeimage: 0,
            colorspace: Default::default(),
            flags: Default::default(),
            encoding: Default::default(),
            quantization: Default::default(),
            xfer_func: Default::default(),
        }
    }
}

impl TryFrom<bindings::v4l2_pix_format> for PixFormat {
    type Error = DecodeError;

    /// Without [`bindings::V4L2_PIX_FMT_PRIV_MAGIC`] in `priv_`, the fields
    /// that follow are not filled by the driver and take their defaults.
    fn try_from(pix: bindings::v4l2_pix_format) -> Result<Self, Self::Error> {
        let mut format = Self {
            width: pix.width,
            height: pix.height,
            pixelformat: PixFmt::decode(pix.pixelformat)?,
            field: Field::decode(pix.field)?,
            bytesperline: pix.bytesperline,
            sizeimage: pix.sizeimage,
            colorspace: Colorspace::decode(pix.colorspace)?,
            ..PixFormat::new(0, 0, PixFmt::GREY)
        };

        if pix.priv_ != bindings::V4L2_PIX_FMT_PRIV_MAGIC {
            debug!(
                "v4l2_pix_format without extended fields (priv {:#x})",
                pix.priv_
            );
            return Ok(format);
        }

        format.flags = PixFormatFlags::from_bits_retain(pix.flags);
        format.encoding = ColorEncoding::decode(pix.ycbcr_enc)?;
        format.quantization = Quantization::decode(pix.quantization)?;
        format.xfer_func = XferFunc::decode(pix.xfer_func)?;

        Ok(format)
    }
}

impl From<&PixFormat> for bindings::v4l2_pix_format {
    fn from(format: &PixFormat) -> Self {
        bindings::v4l2_pix_format {
            width: format.width,
            height: format.height,
            pixelformat: format.pixelformat.encode(),
            field: format.field.encode(),
            bytesperline: format.bytesperline,
            sizeimage: format.sizeimage,
            colorspace: format.colorspace.encode(),
            priv_: bindings::V4L2_PIX_FMT_PRIV_MAGIC,
            flags: format.flags.bits(),
            ycbcr_enc: format.encoding.encode(),
            quantization: format.quantization.encode(),
            xfer_func: format.xfer_func.encode(),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MbusConversionError {
    #[error("{0} has no media bus equivalent")]
    NoMbusCode(PixFmt),
}

/// Media bus format a sensor would use to produce frames of `format`.
impl TryFrom<&PixFormat> for MbusFrameFormat {
    type Error = MbusConversionError;

    fn try_from(format: &PixFormat) -> Result<Self, Self::Error> {
        let code = format
            .pixelformat
            .mbus_code()
            .ok_or(MbusConversionError::NoMbusCode(format.pixelformat))?;

        let mut flags = MbusFrameFormatFlags::empty();
        if format.flags.contains(PixFormatFlags::SET_CSC) {
            flags |= MbusFrameFormatFlags::SET_CSC;
        }

        Ok(MbusFrameFormat {
            width: format.width,
            height: format.height,
            code,
            field: format.field,
            colorspace: format.colorspace,
            encoding: format.encoding,
            quantization: format.quantization,
            xfer_func: format.xfer_func,
            flags,
        })
    }
}

impl fmt::Display for PixFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} {}, {} bytes per line, {} bytes, field {}, colorspace {}, {}, {}, xfer {}",
            self.width,
            self.height,
            PixelFormat::from(self.pixelformat),
            self.bytesperline,
            self.sizeimage,
            self.field,
            self.colorspace,
            self.encoding,
            self.quantization,
            self.xfer_func
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Concept, HsvEncoding, MbusPixelcode, YCbCrEncoding};

    fn nv12_720p() -> PixFormat {
        PixFormat {
            bytesperline: 1280,
            sizeimage: 1280 * 720 * 3 / 2,
            colorspace: Colorspace::Rec709,
            encoding: ColorEncoding::YCbCr(YCbCrEncoding::E709),
            quantization: Quantization::LimRange,
            xfer_func: XferFunc::F709,
            ..PixFormat::new(1280, 720, PixFmt::NV12)
        }
    }

    #[test]
    fn pix_format_conversion() {
        let format = nv12_720p();
        let raw = bindings::v4l2_pix_format::from(&format);
        assert_eq!(raw.pixelformat, u32::from_le_bytes(*b"NV12"));
        assert_eq!(raw.field, bindings::V4L2_FIELD_ANY);
        assert_eq!(raw.priv_, bindings::V4L2_PIX_FMT_PRIV_MAGIC);
        assert_eq!(raw.ycbcr_enc, bindings::V4L2_YCBCR_ENC_709);
        assert_eq!(PixFormat::try_from(raw), Ok(format));

        let mut raw = raw;
        raw.ycbcr_enc = bindings::V4L2_HSV_ENC_256;
        raw.flags = bindings::V4L2_PIX_FMT_FLAG_PREMUL_ALPHA;
        let decoded = PixFormat::try_from(raw).unwrap();
        assert_eq!(decoded.encoding, ColorEncoding::Hsv(HsvEncoding::Enc256));
        assert_eq!(decoded.flags, PixFormatFlags::PREMUL_ALPHA);
    }

    #[test]
    fn extended_fields_need_magic() {
        let mut raw = bindings::v4l2_pix_format::from(&nv12_720p());
        raw.priv_ = 0;
        // Left over by an old driver, not decoded.
        raw.quantization = 0xdead;

        let format = PixFormat::try_from(raw).unwrap();
        assert_eq!(format.colorspace, Colorspace::Rec709);
        assert_eq!(format.quantization, Quantization::Default);
        assert_eq!(format.encoding, ColorEncoding::default());
    }

    #[test]
    fn pix_format_decode_errors() {
        let mut raw = bindings::v4l2_pix_format::from(&nv12_720p());
        raw.pixelformat = u32::from_le_bytes(*b"ZZZZ");
        assert_eq!(
            PixFormat::try_from(raw),
            Err(DecodeError::UnknownVariant {
                concept: Concept::PixelFormat,
                raw_value: u32::from_le_bytes(*b"ZZZZ")
            })
        );

        let mut raw = bindings::v4l2_pix_format::from(&nv12_720p());
        raw.field = 0x101;
        assert!(PixFormat::try_from(raw).unwrap_err().is_fatal());

        let mut raw = bindings::v4l2_pix_format::from(&nv12_720p());
        raw.xfer_func = 0x1_0000;
        assert_eq!(
            PixFormat::try_from(raw),
            Err(DecodeError::NarrowingViolation {
                concept: Concept::XferFunc,
                raw_value: 0x1_0000,
                declared_width: 16
            })
        );
    }

    #[test]
    fn to_mbus_frame_format() {
        let format = PixFormat {
            flags: PixFormatFlags::SET_CSC | PixFormatFlags::PREMUL_ALPHA,
            ..PixFormat::new(1920, 1080, PixFmt::SRGGB10P)
        };

        let mbus = MbusFrameFormat::try_from(&format).unwrap();
        assert_eq!(mbus.code, MbusPixelcode::SRGGB10_1X10);
        assert_eq!((mbus.width, mbus.height), (1920, 1080));
        assert_eq!(mbus.flags, MbusFrameFormatFlags::SET_CSC);

        assert_eq!(
            MbusFrameFormat::try_from(&nv12_720p()),
            Err(MbusConversionError::NoMbusCode(PixFmt::NV12))
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            nv12_720p().to_string(),
            "1280x720 NV12, 1280 bytes per line, 1382400 bytes, field any, \
             colorspace Rec. 709, YCbCr/Rec. 709, limited range, xfer Rec. 709"
        );
    }
}
