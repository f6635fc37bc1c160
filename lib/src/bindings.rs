//! Raw kernel ABI mirrored from `linux/videodev2.h`, `linux/v4l2-subdev.h` and
//! `linux/media-bus-format.h`.
//!
//! Values are kept as plain constants named after their C macro or enumerator
//! so they can be checked against the kernel headers line by line. Anything
//! newer than Linux 6.1 carries the release that introduced it.
#![allow(dead_code)]
#![allow(non_camel_case_types)]
#![allow(clippy::unreadable_literal)]

// enum v4l2_buf_type
pub const V4L2_BUF_TYPE_VIDEO_CAPTURE: u32 = 1;
pub const V4L2_BUF_TYPE_VIDEO_OUTPUT: u32 = 2;
pub const V4L2_BUF_TYPE_VIDEO_OVERLAY: u32 = 3;
pub const V4L2_BUF_TYPE_VBI_CAPTURE: u32 = 4;
pub const V4L2_BUF_TYPE_VBI_OUTPUT: u32 = 5;
pub const V4L2_BUF_TYPE_SLICED_VBI_CAPTURE: u32 = 6;
pub const V4L2_BUF_TYPE_SLICED_VBI_OUTPUT: u32 = 7;
pub const V4L2_BUF_TYPE_VIDEO_OUTPUT_OVERLAY: u32 = 8;
pub const V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE: u32 = 9;
pub const V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE: u32 = 10;
pub const V4L2_BUF_TYPE_SDR_CAPTURE: u32 = 11;
pub const V4L2_BUF_TYPE_SDR_OUTPUT: u32 = 12;
pub const V4L2_BUF_TYPE_META_CAPTURE: u32 = 13;
pub const V4L2_BUF_TYPE_META_OUTPUT: u32 = 14;
pub const V4L2_BUF_TYPE_PRIVATE: u32 = 0x80;

// enum v4l2_colorspace
pub const V4L2_COLORSPACE_DEFAULT: u32 = 0;
pub const V4L2_COLORSPACE_SMPTE170M: u32 = 1;
pub const V4L2_COLORSPACE_SMPTE240M: u32 = 2;
pub const V4L2_COLORSPACE_REC709: u32 = 3;
pub const V4L2_COLORSPACE_BT878: u32 = 4;
pub const V4L2_COLORSPACE_470_SYSTEM_M: u32 = 5;
pub const V4L2_COLORSPACE_470_SYSTEM_BG: u32 = 6;
pub const V4L2_COLORSPACE_JPEG: u32 = 7;
pub const V4L2_COLORSPACE_SRGB: u32 = 8;
pub const V4L2_COLORSPACE_OPRGB: u32 = 9;
pub const V4L2_COLORSPACE_BT2020: u32 = 10;
pub const V4L2_COLORSPACE_RAW: u32 = 11;
pub const V4L2_COLORSPACE_DCI_P3: u32 = 12;

// enum v4l2_field
pub const V4L2_FIELD_ANY: u32 = 0;
pub const V4L2_FIELD_NONE: u32 = 1;
pub const V4L2_FIELD_TOP: u32 = 2;
pub const V4L2_FIELD_BOTTOM: u32 = 3;
pub const V4L2_FIELD_INTERLACED: u32 = 4;
pub const V4L2_FIELD_SEQ_TB: u32 = 5;
pub const V4L2_FIELD_SEQ_BT: u32 = 6;
pub const V4L2_FIELD_ALTERNATE: u32 = 7;
pub const V4L2_FIELD_INTERLACED_TB: u32 = 8;
pub const V4L2_FIELD_INTERLACED_BT: u32 = 9;

// enum v4l2_memory
pub const V4L2_MEMORY_MMAP: u32 = 1;
pub const V4L2_MEMORY_USERPTR: u32 = 2;
pub const V4L2_MEMORY_OVERLAY: u32 = 3;
pub const V4L2_MEMORY_DMABUF: u32 = 4;

// enum v4l2_quantization
pub const V4L2_QUANTIZATION_DEFAULT: u32 = 0;
pub const V4L2_QUANTIZATION_FULL_RANGE: u32 = 1;
pub const V4L2_QUANTIZATION_LIM_RANGE: u32 = 2;

// enum v4l2_xfer_func
pub const V4L2_XFER_FUNC_DEFAULT: u32 = 0;
pub const V4L2_XFER_FUNC_709: u32 = 1;
pub const V4L2_XFER_FUNC_SRGB: u32 = 2;
pub const V4L2_XFER_FUNC_OPRGB: u32 = 3;
pub const V4L2_XFER_FUNC_SMPTE240M: u32 = 4;
pub const V4L2_XFER_FUNC_NONE: u32 = 5;
pub const V4L2_XFER_FUNC_DCI_P3: u32 = 6;
pub const V4L2_XFER_FUNC_SMPTE2084: u32 = 7;

// enum v4l2_ycbcr_encoding
pub const V4L2_YCBCR_ENC_DEFAULT: u32 = 0;
pub const V4L2_YCBCR_ENC_601: u32 = 1;
pub const V4L2_YCBCR_ENC_709: u32 = 2;
pub const V4L2_YCBCR_ENC_XV601: u32 = 3;
pub const V4L2_YCBCR_ENC_XV709: u32 = 4;
pub const V4L2_YCBCR_ENC_SYCC: u32 = 5;
pub const V4L2_YCBCR_ENC_BT2020: u32 = 6;
pub const V4L2_YCBCR_ENC_BT2020_CONST_LUM: u32 = 7;
pub const V4L2_YCBCR_ENC_SMPTE240M: u32 = 8;

// enum v4l2_hsv_encoding
pub const V4L2_HSV_ENC_180: u32 = 128;
pub const V4L2_HSV_ENC_256: u32 = 129;

// enum v4l2_subdev_format_whence
pub const V4L2_SUBDEV_FORMAT_TRY: u32 = 0;
pub const V4L2_SUBDEV_FORMAT_ACTIVE: u32 = 1;

// v4l2_pix_format.priv and v4l2_pix_format.flags
pub const V4L2_PIX_FMT_PRIV_MAGIC: u32 = 0xfeedcafe;
pub const V4L2_PIX_FMT_FLAG_PREMUL_ALPHA: u32 = 0x00000001;
pub const V4L2_PIX_FMT_FLAG_SET_CSC: u32 = 0x00000002;

// v4l2_mbus_framefmt.flags
pub const V4L2_MBUS_FRAMEFMT_SET_CSC: u16 = 0x0001;

// v4l2_subdev_capability.capabilities
pub const V4L2_SUBDEV_CAP_RO_SUBDEV: u32 = 0x00000001;
/// Linux 6.3.
pub const V4L2_SUBDEV_CAP_STREAMS: u32 = 0x00000002;

// Generic formats
pub const MEDIA_BUS_FMT_FIXED: u32 = 0x0001;

// RGB
pub const MEDIA_BUS_FMT_RGB444_2X8_PADHI_BE: u32 = 0x1001;
pub const MEDIA_BUS_FMT_RGB444_2X8_PADHI_LE: u32 = 0x1002;
pub const MEDIA_BUS_FMT_RGB555_2X8_PADHI_BE: u32 = 0x1003;
pub const MEDIA_BUS_FMT_RGB555_2X8_PADHI_LE: u32 = 0x1004;
pub const MEDIA_BUS_FMT_BGR565_2X8_BE: u32 = 0x1005;
pub const MEDIA_BUS_FMT_BGR565_2X8_LE: u32 = 0x1006;
pub const MEDIA_BUS_FMT_RGB565_2X8_BE: u32 = 0x1007;
pub const MEDIA_BUS_FMT_RGB565_2X8_LE: u32 = 0x1008;
pub const MEDIA_BUS_FMT_RGB666_1X18: u32 = 0x1009;
pub const MEDIA_BUS_FMT_RGB888_1X24: u32 = 0x100a;
pub const MEDIA_BUS_FMT_RGB888_2X12_BE: u32 = 0x100b;
pub const MEDIA_BUS_FMT_RGB888_2X12_LE: u32 = 0x100c;
pub const MEDIA_BUS_FMT_ARGB8888_1X32: u32 = 0x100d;
pub const MEDIA_BUS_FMT_RBG888_1X24: u32 = 0x100e;
pub const MEDIA_BUS_FMT_RGB888_1X32_PADHI: u32 = 0x100f;
pub const MEDIA_BUS_FMT_RGB666_1X7X3_SPWG: u32 = 0x1010;
pub const MEDIA_BUS_FMT_RGB888_1X7X4_SPWG: u32 = 0x1011;
pub const MEDIA_BUS_FMT_RGB888_1X7X4_JEIDA: u32 = 0x1012;
pub const MEDIA_BUS_FMT_BGR888_1X24: u32 = 0x1013;
pub const MEDIA_BUS_FMT_GBR888_1X24: u32 = 0x1014;
pub const MEDIA_BUS_FMT_RGB666_1X24_CPADHI: u32 = 0x1015;
pub const MEDIA_BUS_FMT_RGB444_1X12: u32 = 0x1016;
pub const MEDIA_BUS_FMT_RGB565_1X16: u32 = 0x1017;
pub const MEDIA_BUS_FMT_RGB101010_1X30: u32 = 0x1018;
pub const MEDIA_BUS_FMT_RGB121212_1X36: u32 = 0x1019;
pub const MEDIA_BUS_FMT_RGB161616_1X48: u32 = 0x101a;
pub const MEDIA_BUS_FMT_BGR888_3X8: u32 = 0x101b;
pub const MEDIA_BUS_FMT_RGB888_3X8: u32 = 0x101c;
pub const MEDIA_BUS_FMT_RGB888_3X8_DELTA: u32 = 0x101d;
pub const MEDIA_BUS_FMT_RGB666_1X30_CPADLO: u32 = 0x101e;
pub const MEDIA_BUS_FMT_RGB888_1X30_CPADLO: u32 = 0x101f;
pub const MEDIA_BUS_FMT_RGB666_1X36_CPADLO: u32 = 0x1020;
pub const MEDIA_BUS_FMT_RGB888_1X36_CPADLO: u32 = 0x1021;
/// Linux 6.2.
pub const MEDIA_BUS_FMT_RGB565_1X24_CPADHI: u32 = 0x1022;
/// Linux 6.2.
pub const MEDIA_BUS_FMT_BGR666_1X18: u32 = 0x1023;
/// Linux 6.2.
pub const MEDIA_BUS_FMT_BGR666_1X24_CPADHI: u32 = 0x1024;
/// Linux 6.13.
pub const MEDIA_BUS_FMT_RGB101010_1X7X5_SPWG: u32 = 0x1026;
/// Linux 6.13.
pub const MEDIA_BUS_FMT_RGB101010_1X7X5_JEIDA: u32 = 0x1027;

// YUV (including grey)
pub const MEDIA_BUS_FMT_Y8_1X8: u32 = 0x2001;
pub const MEDIA_BUS_FMT_UYVY8_1_5X8: u32 = 0x2002;
pub const MEDIA_BUS_FMT_VYUY8_1_5X8: u32 = 0x2003;
pub const MEDIA_BUS_FMT_YUYV8_1_5X8: u32 = 0x2004;
pub const MEDIA_BUS_FMT_YVYU8_1_5X8: u32 = 0x2005;
pub const MEDIA_BUS_FMT_UYVY8_2X8: u32 = 0x2006;
pub const MEDIA_BUS_FMT_VYUY8_2X8: u32 = 0x2007;
pub const MEDIA_BUS_FMT_YUYV8_2X8: u32 = 0x2008;
pub const MEDIA_BUS_FMT_YVYU8_2X8: u32 = 0x2009;
pub const MEDIA_BUS_FMT_Y10_1X10: u32 = 0x200a;
pub const MEDIA_BUS_FMT_YUYV10_2X10: u32 = 0x200b;
pub const MEDIA_BUS_FMT_YVYU10_2X10: u32 = 0x200c;
pub const MEDIA_BUS_FMT_YUYV10_1X20: u32 = 0x200d;
pub const MEDIA_BUS_FMT_YVYU10_1X20: u32 = 0x200e;
pub const MEDIA_BUS_FMT_UYVY8_1X16: u32 = 0x200f;
pub const MEDIA_BUS_FMT_VYUY8_1X16: u32 = 0x2010;
pub const MEDIA_BUS_FMT_YUYV8_1X16: u32 = 0x2011;
pub const MEDIA_BUS_FMT_YVYU8_1X16: u32 = 0x2012;
pub const MEDIA_BUS_FMT_Y12_1X12: u32 = 0x2013;
pub const MEDIA_BUS_FMT_YDYUYDYV8_1X16: u32 = 0x2014;
pub const MEDIA_BUS_FMT_UV8_1X8: u32 = 0x2015;
pub const MEDIA_BUS_FMT_YUV10_1X30: u32 = 0x2016;
pub const MEDIA_BUS_FMT_AYUV8_1X32: u32 = 0x2017;
pub const MEDIA_BUS_FMT_UYVY10_2X10: u32 = 0x2018;
pub const MEDIA_BUS_FMT_VYUY10_2X10: u32 = 0x2019;
pub const MEDIA_BUS_FMT_UYVY10_1X20: u32 = 0x201a;
pub const MEDIA_BUS_FMT_VYUY10_1X20: u32 = 0x201b;
pub const MEDIA_BUS_FMT_UYVY12_2X12: u32 = 0x201c;
pub const MEDIA_BUS_FMT_VYUY12_2X12: u32 = 0x201d;
pub const MEDIA_BUS_FMT_YUYV12_2X12: u32 = 0x201e;
pub const MEDIA_BUS_FMT_YVYU12_2X12: u32 = 0x201f;
pub const MEDIA_BUS_FMT_UYVY12_1X24: u32 = 0x2020;
pub const MEDIA_BUS_FMT_VYUY12_1X24: u32 = 0x2021;
pub const MEDIA_BUS_FMT_YUYV12_1X24: u32 = 0x2022;
pub const MEDIA_BUS_FMT_YVYU12_1X24: u32 = 0x2023;
pub const MEDIA_BUS_FMT_VUY8_1X24: u32 = 0x2024;
pub const MEDIA_BUS_FMT_YUV8_1X24: u32 = 0x2025;
pub const MEDIA_BUS_FMT_UYYVYY8_0_5X24: u32 = 0x2026;
pub const MEDIA_BUS_FMT_UYYVYY10_0_5X30: u32 = 0x2027;
pub const MEDIA_BUS_FMT_UYYVYY12_0_5X36: u32 = 0x2028;
pub const MEDIA_BUS_FMT_YUV12_1X36: u32 = 0x2029;
pub const MEDIA_BUS_FMT_YUV16_1X48: u32 = 0x202a;
pub const MEDIA_BUS_FMT_UYYVYY16_0_5X48: u32 = 0x202b;
pub const MEDIA_BUS_FMT_Y10_2X8_PADHI_LE: u32 = 0x202c;
pub const MEDIA_BUS_FMT_Y14_1X14: u32 = 0x202d;
/// Linux 6.8.
pub const MEDIA_BUS_FMT_Y16_1X16: u32 = 0x202e;

// Bayer
pub const MEDIA_BUS_FMT_SBGGR8_1X8: u32 = 0x3001;
pub const MEDIA_BUS_FMT_SGRBG8_1X8: u32 = 0x3002;
pub const MEDIA_BUS_FMT_SBGGR10_2X8_PADHI_BE: u32 = 0x3003;
pub const MEDIA_BUS_FMT_SBGGR10_2X8_PADHI_LE: u32 = 0x3004;
pub const MEDIA_BUS_FMT_SBGGR10_2X8_PADLO_BE: u32 = 0x3005;
pub const MEDIA_BUS_FMT_SBGGR10_2X8_PADLO_LE: u32 = 0x3006;
pub const MEDIA_BUS_FMT_SBGGR10_1X10: u32 = 0x3007;
pub const MEDIA_BUS_FMT_SBGGR12_1X12: u32 = 0x3008;
pub const MEDIA_BUS_FMT_SGRBG10_DPCM8_1X8: u32 = 0x3009;
pub const MEDIA_BUS_FMT_SGRBG10_1X10: u32 = 0x300a;
pub const MEDIA_BUS_FMT_SBGGR10_DPCM8_1X8: u32 = 0x300b;
pub const MEDIA_BUS_FMT_SGBRG10_DPCM8_1X8: u32 = 0x300c;
pub const MEDIA_BUS_FMT_SRGGB10_DPCM8_1X8: u32 = 0x300d;
pub const MEDIA_BUS_FMT_SGBRG10_1X10: u32 = 0x300e;
pub const MEDIA_BUS_FMT_SRGGB10_1X10: u32 = 0x300f;
pub const MEDIA_BUS_FMT_SGBRG12_1X12: u32 = 0x3010;
pub const MEDIA_BUS_FMT_SGRBG12_1X12: u32 = 0x3011;
pub const MEDIA_BUS_FMT_SRGGB12_1X12: u32 = 0x3012;
pub const MEDIA_BUS_FMT_SGBRG8_1X8: u32 = 0x3013;
pub const MEDIA_BUS_FMT_SRGGB8_1X8: u32 = 0x3014;
pub const MEDIA_BUS_FMT_SBGGR10_ALAW8_1X8: u32 = 0x3015;
pub const MEDIA_BUS_FMT_SGBRG10_ALAW8_1X8: u32 = 0x3016;
pub const MEDIA_BUS_FMT_SGRBG10_ALAW8_1X8: u32 = 0x3017;
pub const MEDIA_BUS_FMT_SRGGB10_ALAW8_1X8: u32 = 0x3018;
pub const MEDIA_BUS_FMT_SBGGR14_1X14: u32 = 0x3019;
pub const MEDIA_BUS_FMT_SGBRG14_1X14: u32 = 0x301a;
pub const MEDIA_BUS_FMT_SGRBG14_1X14: u32 = 0x301b;
pub const MEDIA_BUS_FMT_SRGGB14_1X14: u32 = 0x301c;
pub const MEDIA_BUS_FMT_SBGGR16_1X16: u32 = 0x301d;
pub const MEDIA_BUS_FMT_SGBRG16_1X16: u32 = 0x301e;
pub const MEDIA_BUS_FMT_SGRBG16_1X16: u32 = 0x301f;
pub const MEDIA_BUS_FMT_SRGGB16_1X16: u32 = 0x3020;

// JPEG compressed formats
pub const MEDIA_BUS_FMT_JPEG_1X8: u32 = 0x4001;

// Vendor specific formats
pub const MEDIA_BUS_FMT_S5C_UYVY_JPEG_1X8: u32 = 0x5001;

// HSV
pub const MEDIA_BUS_FMT_AHSV8888_1X32: u32 = 0x6001;

// Fixed layout metadata
pub const MEDIA_BUS_FMT_METADATA_FIXED: u32 = 0x7001;

// Generic line based metadata, Linux 6.10.
pub const MEDIA_BUS_FMT_META_8: u32 = 0x8001;
pub const MEDIA_BUS_FMT_META_10: u32 = 0x8002;
pub const MEDIA_BUS_FMT_META_12: u32 = 0x8003;
pub const MEDIA_BUS_FMT_META_14: u32 = 0x8004;
pub const MEDIA_BUS_FMT_META_16: u32 = 0x8005;
pub const MEDIA_BUS_FMT_META_20: u32 = 0x8006;
pub const MEDIA_BUS_FMT_META_24: u32 = 0x8007;

/// `struct v4l2_pix_format`.
///
/// The fields following `priv_` are only meaningful when it holds
/// [`V4L2_PIX_FMT_PRIV_MAGIC`]. `ycbcr_enc` shares its storage with `hsv_enc`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct v4l2_pix_format {
    pub width: u32,
    pub height: u32,
    pub pixelformat: u32,
    pub field: u32,
    pub bytesperline: u32,
    pub sizeimage: u32,
    pub colorspace: u32,
    pub priv_: u32,
    pub flags: u32,
    pub ycbcr_enc: u32,
    pub quantization: u32,
    pub xfer_func: u32,
}

/// `struct v4l2_mbus_framefmt`.
///
/// `ycbcr_enc` shares its storage with `hsv_enc` in the C definition.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct v4l2_mbus_framefmt {
    pub width: u32,
    pub height: u32,
    pub code: u32,
    pub field: u32,
    pub colorspace: u32,
    pub ycbcr_enc: u16,
    pub quantization: u16,
    pub xfer_func: u16,
    pub flags: u16,
    pub reserved: [u16; 10],
}

/// `struct v4l2_subdev_format` as defined since Linux 6.3.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct v4l2_subdev_format {
    pub which: u32,
    pub pad: u32,
    pub format: v4l2_mbus_framefmt,
    pub stream: u32,
    pub reserved: [u32; 7],
}

/// `struct v4l2_subdev_format` as defined up to Linux 6.2.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct v4l2_subdev_format_legacy {
    pub which: u32,
    pub pad: u32,
    pub format: v4l2_mbus_framefmt,
    pub reserved: [u32; 8],
}

/// `struct v4l2_subdev_capability`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct v4l2_subdev_capability {
    pub version: u32,
    pub capabilities: u32,
    pub reserved: [u32; 14],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn pix_format_layout() {
        assert_eq!(size_of::<v4l2_pix_format>(), 48);
        assert_eq!(offset_of!(v4l2_pix_format, priv_), 28);
        assert_eq!(offset_of!(v4l2_pix_format, xfer_func), 44);
    }

    #[test]
    fn mbus_framefmt_layout() {
        assert_eq!(size_of::<v4l2_mbus_framefmt>(), 48);
        assert_eq!(offset_of!(v4l2_mbus_framefmt, ycbcr_enc), 20);
        assert_eq!(offset_of!(v4l2_mbus_framefmt, flags), 26);
        assert_eq!(offset_of!(v4l2_mbus_framefmt, reserved), 28);
    }

    #[test]
    fn subdev_format_layouts_share_size() {
        // Both definitions must encode to the same ioctl number.
        assert_eq!(size_of::<v4l2_subdev_format>(), 88);
        assert_eq!(size_of::<v4l2_subdev_format_legacy>(), 88);
        assert_eq!(offset_of!(v4l2_subdev_format, stream), 56);
        assert_eq!(offset_of!(v4l2_subdev_format_legacy, reserved), 56);
    }

    #[test]
    fn subdev_capability_layout() {
        assert_eq!(size_of::<v4l2_subdev_capability>(), 64);
    }
}
