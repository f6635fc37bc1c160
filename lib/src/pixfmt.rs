//! Fourcc pixel formats (`V4L2_PIX_FMT_*` and `V4L2_META_FMT_*`).
//!
//! [`crate::PixelFormat`] carries any 32-bit code, as drivers are free to
//! report formats we have never heard of. [`PixFmt`] is the closed set of
//! formats this crate decodes exactly.
use std::fmt;

use crate::codec::{abi_enum, AbiEnum};
use crate::mbus::MbusPixelcode;
use crate::{DecodeError, PixelFormat};

/// Bit set on the big-endian variant of a format.
pub const FOURCC_BE_FLAG: u32 = 1 << 31;

/// Equivalent of the `v4l2_fourcc()` macro.
pub const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*code)
}

/// Equivalent of the `v4l2_fourcc_be()` macro.
pub const fn fourcc_be(code: &[u8; 4]) -> u32 {
    fourcc(code) | FOURCC_BE_FLAG
}

abi_enum! {
    /// Pixel and metadata formats known to this crate.
    #[allow(non_camel_case_types)]
    pub enum PixFmt: u32 => PixelFormat {
        // RGB, 1 or 2 bytes per pixel
        RGB332 = fourcc(b"RGB1");
        RGB444 = fourcc(b"R444");
        ARGB444 = fourcc(b"AR12");
        XRGB444 = fourcc(b"XR12");
        RGBA444 = fourcc(b"RA12");
        RGBX444 = fourcc(b"RX12");
        ABGR444 = fourcc(b"AB12");
        XBGR444 = fourcc(b"XB12");
        BGRA444 = fourcc(b"GA12");
        BGRX444 = fourcc(b"BX12");
        RGB555 = fourcc(b"RGBO");
        ARGB555 = fourcc(b"AR15");
        XRGB555 = fourcc(b"XR15");
        RGBA555 = fourcc(b"RA15");
        RGBX555 = fourcc(b"RX15");
        ABGR555 = fourcc(b"AB15");
        XBGR555 = fourcc(b"XB15");
        BGRA555 = fourcc(b"BA15");
        BGRX555 = fourcc(b"BX15");
        RGB565 = fourcc(b"RGBP");
        RGB555X = fourcc(b"RGBQ");
        ARGB555X = fourcc_be(b"AR15");
        XRGB555X = fourcc_be(b"XR15");
        RGB565X = fourcc(b"RGBR");

        // RGB, 3 or 4 bytes per pixel
        BGR666 = fourcc(b"BGRH");
        BGR24 = fourcc(b"BGR3");
        RGB24 = fourcc(b"RGB3");
        BGR32 = fourcc(b"BGR4");
        ABGR32 = fourcc(b"AR24");
        XBGR32 = fourcc(b"XR24");
        BGRA32 = fourcc(b"RA24");
        BGRX32 = fourcc(b"RX24");
        RGB32 = fourcc(b"RGB4");
        RGBA32 = fourcc(b"AB24");
        RGBX32 = fourcc(b"XB24");
        ARGB32 = fourcc(b"BA24");
        XRGB32 = fourcc(b"BX24");
        RGBX1010102 = fourcc(b"RX30") => since(6, 8);
        RGBA1010102 = fourcc(b"RA30") => since(6, 8);
        ARGB2101010 = fourcc(b"AR30") => since(6, 8);

        // RGB, 6 or 8 bytes per pixel
        BGR48_12 = fourcc(b"B312") => since(6, 14);
        BGR48 = fourcc(b"BGR6") => since(6, 11);
        RGB48 = fourcc(b"RGB6") => since(6, 11);
        ABGR64_12 = fourcc(b"B412") => since(6, 14);

        // Grey
        GREY = fourcc(b"GREY");
        Y4 = fourcc(b"Y04 ");
        Y6 = fourcc(b"Y06 ");
        Y10 = fourcc(b"Y10 ");
        Y12 = fourcc(b"Y12 ");
        Y012 = fourcc(b"Y012") => since(6, 14);
        Y14 = fourcc(b"Y14 ");
        Y16 = fourcc(b"Y16 ");
        Y16_BE = fourcc_be(b"Y16 ");

        // Grey, bit-packed
        Y10BPACK = fourcc(b"Y10B");
        Y10P = fourcc(b"Y10P");
        IPU3_Y10 = fourcc(b"ip3y");
        Y12P = fourcc(b"Y12P") => since(6, 8);
        Y14P = fourcc(b"Y14P") => since(6, 8);

        // Palette and chrominance
        PAL8 = fourcc(b"PAL8");
        UV8 = fourcc(b"UV8 ");

        // Packed YUV
        YUYV = fourcc(b"YUYV");
        YYUV = fourcc(b"YYUV");
        YVYU = fourcc(b"YVYU");
        UYVY = fourcc(b"UYVY");
        VYUY = fourcc(b"VYUY");
        Y41P = fourcc(b"Y41P");
        YUV444 = fourcc(b"Y444");
        YUV555 = fourcc(b"YUVO");
        YUV565 = fourcc(b"YUVP");
        YUV24 = fourcc(b"YUV3");
        YUV32 = fourcc(b"YUV4");
        AYUV32 = fourcc(b"AYUV");
        XYUV32 = fourcc(b"XYUV");
        VUYA32 = fourcc(b"VUYA");
        VUYX32 = fourcc(b"VUYX");
        YUVA32 = fourcc(b"YUVA");
        YUVX32 = fourcc(b"YUVX");
        M420 = fourcc(b"M420");
        YUV48_12 = fourcc(b"Y312") => since(6, 14);
        Y210 = fourcc(b"Y210") => since(6, 8);
        Y212 = fourcc(b"Y212") => since(6, 8);
        Y216 = fourcc(b"Y216") => since(6, 8);

        // Two planes
        NV12 = fourcc(b"NV12");
        NV21 = fourcc(b"NV21");
        NV16 = fourcc(b"NV16");
        NV61 = fourcc(b"NV61");
        NV24 = fourcc(b"NV24");
        NV42 = fourcc(b"NV42");
        P010 = fourcc(b"P010");
        P012 = fourcc(b"P012") => since(6, 2);

        // Two non-contiguous planes
        NV12M = fourcc(b"NM12");
        NV21M = fourcc(b"NM21");
        NV16M = fourcc(b"NM16");
        NV61M = fourcc(b"NM61");
        P012M = fourcc(b"PM12") => since(6, 2);

        // Three planes
        YUV410 = fourcc(b"YUV9");
        YVU410 = fourcc(b"YVU9");
        YUV411P = fourcc(b"411P");
        YUV420 = fourcc(b"YU12");
        YVU420 = fourcc(b"YV12");
        YUV422P = fourcc(b"422P");

        // Three non-contiguous planes
        YUV420M = fourcc(b"YM12");
        YVU420M = fourcc(b"YM21");
        YUV422M = fourcc(b"YM16");
        YVU422M = fourcc(b"YM61");
        YUV444M = fourcc(b"YM24");
        YVU444M = fourcc(b"YM42");

        // Tiled
        NV12_4L4 = fourcc(b"VT12");
        NV12_16L16 = fourcc(b"HM12");
        NV12_32L32 = fourcc(b"ST12");
        NV15_4L4 = fourcc(b"VT15") => since(6, 4);
        P010_4L4 = fourcc(b"T010");
        NV12_8L128 = fourcc(b"AT12") => since(6, 2);
        NV12_10BE_8L128 = fourcc_be(b"AX12") => since(6, 2);

        // Tiled, non-contiguous planes
        NV12MT = fourcc(b"TM12");
        NV12MT_16X16 = fourcc(b"VM12");
        NV12M_8L128 = fourcc(b"NA12");
        NV12M_10BE_8L128 = fourcc_be(b"NT12");

        // Bayer
        SBGGR8 = fourcc(b"BA81");
        SGBRG8 = fourcc(b"GBRG");
        SGRBG8 = fourcc(b"GRBG");
        SRGGB8 = fourcc(b"RGGB");
        SBGGR10 = fourcc(b"BG10");
        SGBRG10 = fourcc(b"GB10");
        SGRBG10 = fourcc(b"BA10");
        SRGGB10 = fourcc(b"RG10");
        SBGGR10P = fourcc(b"pBAA");
        SGBRG10P = fourcc(b"pGAA");
        SGRBG10P = fourcc(b"pgAA");
        SRGGB10P = fourcc(b"pRAA");
        SBGGR10ALAW8 = fourcc(b"aBA8");
        SGBRG10ALAW8 = fourcc(b"aGA8");
        SGRBG10ALAW8 = fourcc(b"agA8");
        SRGGB10ALAW8 = fourcc(b"aRA8");
        SBGGR10DPCM8 = fourcc(b"bBA8");
        SGBRG10DPCM8 = fourcc(b"bGA8");
        SGRBG10DPCM8 = fourcc(b"BD10");
        SRGGB10DPCM8 = fourcc(b"bRA8");
        SBGGR12 = fourcc(b"BG12");
        SGBRG12 = fourcc(b"GB12");
        SGRBG12 = fourcc(b"BA12");
        SRGGB12 = fourcc(b"RG12");
        SBGGR12P = fourcc(b"pBCC");
        SGBRG12P = fourcc(b"pGCC");
        SGRBG12P = fourcc(b"pgCC");
        SRGGB12P = fourcc(b"pRCC");
        SBGGR14 = fourcc(b"BG14");
        SGBRG14 = fourcc(b"GB14");
        SGRBG14 = fourcc(b"GR14");
        SRGGB14 = fourcc(b"RG14");
        SBGGR14P = fourcc(b"pBEE");
        SGBRG14P = fourcc(b"pGEE");
        SGRBG14P = fourcc(b"pgEE");
        SRGGB14P = fourcc(b"pREE");
        SBGGR16 = fourcc(b"BYR2");
        SGBRG16 = fourcc(b"GB16");
        SGRBG16 = fourcc(b"GR16");
        SRGGB16 = fourcc(b"RG16");

        // IPU3 packed Bayer, 25 pixels in 32 bytes
        IPU3_SBGGR10 = fourcc(b"ip3b");
        IPU3_SGBRG10 = fourcc(b"ip3g");
        IPU3_SGRBG10 = fourcc(b"ip3G");
        IPU3_SRGGB10 = fourcc(b"ip3r");

        // Raspberry Pi PiSP compressed Bayer
        PISP_COMP1_RGGB = fourcc(b"PC1R") => since(6, 10);
        PISP_COMP1_GRBG = fourcc(b"PC1G") => since(6, 10);
        PISP_COMP1_GBRG = fourcc(b"PC1g") => since(6, 10);
        PISP_COMP1_BGGR = fourcc(b"PC1B") => since(6, 10);
        PISP_COMP1_MONO = fourcc(b"PC1M") => since(6, 10);
        PISP_COMP2_RGGB = fourcc(b"PC2R") => since(6, 10);
        PISP_COMP2_GRBG = fourcc(b"PC2G") => since(6, 10);
        PISP_COMP2_GBRG = fourcc(b"PC2g") => since(6, 10);
        PISP_COMP2_BGGR = fourcc(b"PC2B") => since(6, 10);
        PISP_COMP2_MONO = fourcc(b"PC2M") => since(6, 10);

        // HSV
        HSV24 = fourcc(b"HSV3");
        HSV32 = fourcc(b"HSV4");

        // Compressed
        MJPEG = fourcc(b"MJPG");
        JPEG = fourcc(b"JPEG");
        DV = fourcc(b"dvsd");
        MPEG = fourcc(b"MPEG");
        H264 = fourcc(b"H264");
        H264_NO_SC = fourcc(b"AVC1");
        H264_MVC = fourcc(b"M264");
        H264_SLICE = fourcc(b"S264");
        H263 = fourcc(b"H263");
        MPEG1 = fourcc(b"MPG1");
        MPEG2 = fourcc(b"MPG2");
        MPEG2_SLICE = fourcc(b"MG2S");
        MPEG4 = fourcc(b"MPG4");
        XVID = fourcc(b"XVID");
        VC1_ANNEX_G = fourcc(b"VC1G");
        VC1_ANNEX_L = fourcc(b"VC1L");
        VP8 = fourcc(b"VP80");
        VP8_FRAME = fourcc(b"VP8F");
        VP9 = fourcc(b"VP90");
        VP9_FRAME = fourcc(b"VP9F");
        HEVC = fourcc(b"HEVC");
        HEVC_SLICE = fourcc(b"S265");
        FWHT = fourcc(b"FWHT");
        FWHT_STATELESS = fourcc(b"SFWH");
        AV1_FRAME = fourcc(b"AV1F") => since(6, 5);
        SPK = fourcc(b"SPK0") => since(6, 2);
        RV30 = fourcc(b"RV30") => since(6, 2);
        RV40 = fourcc(b"RV40") => since(6, 2);

        // Vendor specific
        CPIA1 = fourcc(b"CPIA");
        WNVA = fourcc(b"WNVA");
        SN9C10X = fourcc(b"S910");
        SN9C20X_I420 = fourcc(b"S920");
        PWC1 = fourcc(b"PWC1");
        PWC2 = fourcc(b"PWC2");
        ET61X251 = fourcc(b"E625");
        SPCA501 = fourcc(b"S501");
        SPCA505 = fourcc(b"S505");
        SPCA508 = fourcc(b"S508");
        SPCA561 = fourcc(b"S561");
        PAC207 = fourcc(b"P207");
        MR97310A = fourcc(b"M310");
        JL2005BCD = fourcc(b"JL20");
        SN9C2028 = fourcc(b"SONX");
        SQ905C = fourcc(b"905C");
        PJPG = fourcc(b"PJPG");
        OV511 = fourcc(b"O511");
        OV518 = fourcc(b"O518");
        STV0680 = fourcc(b"S680");
        TM6000 = fourcc(b"TM60");
        CIT_YYVYUY = fourcc(b"CITV");
        KONICA420 = fourcc(b"KONI");
        JPGL = fourcc(b"JPGL");
        SE401 = fourcc(b"S401");
        S5C_UYVY_JPG = fourcc(b"S5CI");
        Y8I = fourcc(b"Y8I ");
        Y12I = fourcc(b"Y12I");
        Y16I = fourcc(b"Y16I");
        Z16 = fourcc(b"Z16 ");
        MT21C = fourcc(b"MT21");
        MM21 = fourcc(b"MM21");
        MT2110T = fourcc(b"MT2T") => since(6, 7);
        MT2110R = fourcc(b"MT2R") => since(6, 7);
        INZI = fourcc(b"INZI");
        CNF4 = fourcc(b"CNF4");
        HI240 = fourcc(b"HI24");
        QC08C = fourcc(b"Q08C");
        QC10C = fourcc(b"Q10C");
        AJPG = fourcc(b"AJPG");
        HEXTILE = fourcc(b"HXTL") => since(6, 3);

        // Software defined radio
        SDR_CU8 = fourcc(b"CU08");
        SDR_CU16LE = fourcc(b"CU16");
        SDR_CS8 = fourcc(b"CS08");
        SDR_CS14LE = fourcc(b"CS14");
        SDR_RU12LE = fourcc(b"RU12");
        SDR_PCU16BE = fourcc(b"PC16");
        SDR_PCU18BE = fourcc(b"PC18");
        SDR_PCU20BE = fourcc(b"PC20");

        // Touch
        TCH_DELTA_TD16 = fourcc(b"TD16");
        TCH_DELTA_TD08 = fourcc(b"TD08");
        TCH_TU16 = fourcc(b"TU16");
        TCH_TU08 = fourcc(b"TU08");

        // Metadata
        META_VSP1_HGO = fourcc(b"VSPH");
        META_VSP1_HGT = fourcc(b"VSPT");
        META_UVC = fourcc(b"UVCH");
        META_D4XX = fourcc(b"D4XX");
        META_VIVID = fourcc(b"VIVD");
        META_RK_ISP1_PARAMS = fourcc(b"RK1P");
        META_RK_ISP1_STAT_3A = fourcc(b"RK1S");
        META_RK_ISP1_EXT_PARAMS = fourcc(b"RK1E") => since(6, 13);
        META_RPI_BE_CFG = fourcc(b"RPBC") => since(6, 11);
        META_RPI_FE_CFG = fourcc(b"RPFC") => since(6, 12);
        META_RPI_FE_STATS = fourcc(b"RPFS") => since(6, 12);
        META_GENERIC_8 = fourcc(b"MET8") => since(6, 10);
        META_GENERIC_CSI2_10 = fourcc(b"MC1A") => since(6, 10);
        META_GENERIC_CSI2_12 = fourcc(b"MC1C") => since(6, 10);
        META_GENERIC_CSI2_14 = fourcc(b"MC1E") => since(6, 10);
        META_GENERIC_CSI2_16 = fourcc(b"MC1G") => since(6, 10);
        META_GENERIC_CSI2_20 = fourcc(b"MC1K") => since(6, 10);
        META_GENERIC_CSI2_24 = fourcc(b"MC1O") => since(6, 10);
    }
}

impl PixFmt {
    /// Whether this is a metadata rather than an image format.
    pub fn is_metadata(&self) -> bool {
        matches!(
            self,
            PixFmt::META_VSP1_HGO
                | PixFmt::META_VSP1_HGT
                | PixFmt::META_UVC
                | PixFmt::META_D4XX
                | PixFmt::META_VIVID
                | PixFmt::META_RK_ISP1_PARAMS
                | PixFmt::META_RK_ISP1_STAT_3A
                | PixFmt::META_RK_ISP1_EXT_PARAMS
                | PixFmt::META_RPI_BE_CFG
                | PixFmt::META_RPI_FE_CFG
                | PixFmt::META_RPI_FE_STATS
                | PixFmt::META_GENERIC_8
                | PixFmt::META_GENERIC_CSI2_10
                | PixFmt::META_GENERIC_CSI2_12
                | PixFmt::META_GENERIC_CSI2_14
                | PixFmt::META_GENERIC_CSI2_16
                | PixFmt::META_GENERIC_CSI2_20
                | PixFmt::META_GENERIC_CSI2_24
        )
    }

    /// Returns the media bus code a sensor would use to send frames in this
    /// format, if there is a direct one.
    pub fn mbus_code(&self) -> Option<MbusPixelcode> {
        Some(match self {
            PixFmt::RGB565 => MbusPixelcode::RGB565_1X16,
            PixFmt::RGB24 => MbusPixelcode::RGB888_1X24,
            PixFmt::BGR24 => MbusPixelcode::BGR888_1X24,
            PixFmt::GREY => MbusPixelcode::Y8_1X8,
            PixFmt::Y10 | PixFmt::Y10P => MbusPixelcode::Y10_1X10,
            PixFmt::Y12 | PixFmt::Y12P => MbusPixelcode::Y12_1X12,
            PixFmt::Y14 | PixFmt::Y14P => MbusPixelcode::Y14_1X14,
            PixFmt::Y16 => MbusPixelcode::Y16_1X16,
            PixFmt::UV8 => MbusPixelcode::UV8_1X8,
            PixFmt::YUYV => MbusPixelcode::YUYV8_1X16,
            PixFmt::YVYU => MbusPixelcode::YVYU8_1X16,
            PixFmt::UYVY => MbusPixelcode::UYVY8_1X16,
            PixFmt::VYUY => MbusPixelcode::VYUY8_1X16,
            PixFmt::SBGGR8 => MbusPixelcode::SBGGR8_1X8,
            PixFmt::SGBRG8 => MbusPixelcode::SGBRG8_1X8,
            PixFmt::SGRBG8 => MbusPixelcode::SGRBG8_1X8,
            PixFmt::SRGGB8 => MbusPixelcode::SRGGB8_1X8,
            PixFmt::SBGGR10 | PixFmt::SBGGR10P => MbusPixelcode::SBGGR10_1X10,
            PixFmt::SGBRG10 | PixFmt::SGBRG10P => MbusPixelcode::SGBRG10_1X10,
            PixFmt::SGRBG10 | PixFmt::SGRBG10P => MbusPixelcode::SGRBG10_1X10,
            PixFmt::SRGGB10 | PixFmt::SRGGB10P => MbusPixelcode::SRGGB10_1X10,
            PixFmt::SBGGR10ALAW8 => MbusPixelcode::SBGGR10_ALAW8_1X8,
            PixFmt::SGBRG10ALAW8 => MbusPixelcode::SGBRG10_ALAW8_1X8,
            PixFmt::SGRBG10ALAW8 => MbusPixelcode::SGRBG10_ALAW8_1X8,
            PixFmt::SRGGB10ALAW8 => MbusPixelcode::SRGGB10_ALAW8_1X8,
            PixFmt::SBGGR10DPCM8 => MbusPixelcode::SBGGR10_DPCM8_1X8,
            PixFmt::SGBRG10DPCM8 => MbusPixelcode::SGBRG10_DPCM8_1X8,
            PixFmt::SGRBG10DPCM8 => MbusPixelcode::SGRBG10_DPCM8_1X8,
            PixFmt::SRGGB10DPCM8 => MbusPixelcode::SRGGB10_DPCM8_1X8,
            PixFmt::SBGGR12 | PixFmt::SBGGR12P => MbusPixelcode::SBGGR12_1X12,
            PixFmt::SGBRG12 | PixFmt::SGBRG12P => MbusPixelcode::SGBRG12_1X12,
            PixFmt::SGRBG12 | PixFmt::SGRBG12P => MbusPixelcode::SGRBG12_1X12,
            PixFmt::SRGGB12 | PixFmt::SRGGB12P => MbusPixelcode::SRGGB12_1X12,
            PixFmt::SBGGR14 | PixFmt::SBGGR14P => MbusPixelcode::SBGGR14_1X14,
            PixFmt::SGBRG14 | PixFmt::SGBRG14P => MbusPixelcode::SGBRG14_1X14,
            PixFmt::SGRBG14 | PixFmt::SGRBG14P => MbusPixelcode::SGRBG14_1X14,
            PixFmt::SRGGB14 | PixFmt::SRGGB14P => MbusPixelcode::SRGGB14_1X14,
            PixFmt::SBGGR16 => MbusPixelcode::SBGGR16_1X16,
            PixFmt::SGBRG16 => MbusPixelcode::SGBRG16_1X16,
            PixFmt::SGRBG16 => MbusPixelcode::SGRBG16_1X16,
            PixFmt::SRGGB16 => MbusPixelcode::SRGGB16_1X16,
            PixFmt::JPEG => MbusPixelcode::JPEG_1X8,
            PixFmt::META_GENERIC_8 => MbusPixelcode::META_8,
            PixFmt::META_GENERIC_CSI2_10 => MbusPixelcode::META_10,
            PixFmt::META_GENERIC_CSI2_12 => MbusPixelcode::META_12,
            PixFmt::META_GENERIC_CSI2_14 => MbusPixelcode::META_14,
            PixFmt::META_GENERIC_CSI2_16 => MbusPixelcode::META_16,
            PixFmt::META_GENERIC_CSI2_20 => MbusPixelcode::META_20,
            PixFmt::META_GENERIC_CSI2_24 => MbusPixelcode::META_24,
            _ => return None,
        })
    }
}

impl From<PixFmt> for PixelFormat {
    fn from(format: PixFmt) -> Self {
        PixelFormat::from_u32(format.encode())
    }
}

impl TryFrom<PixelFormat> for PixFmt {
    type Error = DecodeError;

    fn try_from(format: PixelFormat) -> Result<Self, Self::Error> {
        PixFmt::decode(format.to_u32())
    }
}

/// Prints the name of the format followed by its fourcc.
///
/// # Examples
///
/// ```
/// # use v4l2_abi::PixFmt;
/// assert_eq!(PixFmt::NV12.to_string(), "NV12/NV12");
/// assert_eq!(PixFmt::YUV420.to_string(), "YUV420/YU12");
/// ```
impl fmt::Display for PixFmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}/{}", self, PixelFormat::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tests::check_table;
    use crate::{Concept, KernelVersion};

    #[test]
    fn table_is_exact() {
        check_table::<PixFmt>();
        assert_eq!(PixFmt::declared_width(), 32);
    }

    #[test]
    fn fourcc_codes() {
        assert_eq!(fourcc(b"NV12"), 0x3231564e);
        assert_eq!(PixFmt::NV12.encode(), 0x3231564e);
        assert_eq!(fourcc_be(b"Y16 "), fourcc(b"Y16 ") | 0x8000_0000);
        assert_eq!(PixFmt::decode(fourcc(b"MJPG")), Ok(PixFmt::MJPEG));
        assert_eq!(
            PixFmt::decode(fourcc(b"ABCD")),
            Err(DecodeError::UnknownVariant {
                concept: Concept::PixelFormat,
                raw_value: fourcc(b"ABCD")
            })
        );
    }

    #[test]
    fn open_and_closed_formats() {
        let open = PixelFormat::from(b"P012");
        assert_eq!(PixFmt::try_from(open), Ok(PixFmt::P012));
        assert_eq!(PixelFormat::from(PixFmt::P012), open);
        assert!(PixFmt::try_from(PixelFormat::from(b"ZZZZ")).is_err());
        assert!(PixelFormat::from(PixFmt::Y16_BE).is_big_endian());
        assert_eq!(PixFmt::Y16_BE.to_string(), "Y16_BE/Y16  BE");
    }

    #[test]
    fn tagged_releases() {
        let tagged = [
            (PixFmt::P012, KernelVersion::new(6, 2, 0)),
            (PixFmt::P012M, KernelVersion::new(6, 2, 0)),
            (PixFmt::NV12_8L128, KernelVersion::new(6, 2, 0)),
            (PixFmt::NV12_10BE_8L128, KernelVersion::new(6, 2, 0)),
            (PixFmt::RV40, KernelVersion::new(6, 2, 0)),
            (PixFmt::HEXTILE, KernelVersion::new(6, 3, 0)),
            (PixFmt::NV15_4L4, KernelVersion::new(6, 4, 0)),
            (PixFmt::AV1_FRAME, KernelVersion::new(6, 5, 0)),
            (PixFmt::MT2110T, KernelVersion::new(6, 7, 0)),
            (PixFmt::MT2110R, KernelVersion::new(6, 7, 0)),
            (PixFmt::Y12P, KernelVersion::new(6, 8, 0)),
            (PixFmt::Y14P, KernelVersion::new(6, 8, 0)),
            (PixFmt::Y210, KernelVersion::new(6, 8, 0)),
            (PixFmt::Y212, KernelVersion::new(6, 8, 0)),
            (PixFmt::Y216, KernelVersion::new(6, 8, 0)),
            (PixFmt::RGBA1010102, KernelVersion::new(6, 8, 0)),
            (PixFmt::PISP_COMP1_RGGB, KernelVersion::new(6, 10, 0)),
            (PixFmt::PISP_COMP2_MONO, KernelVersion::new(6, 10, 0)),
            (PixFmt::META_GENERIC_8, KernelVersion::new(6, 10, 0)),
            (PixFmt::META_GENERIC_CSI2_24, KernelVersion::new(6, 10, 0)),
            (PixFmt::META_RPI_BE_CFG, KernelVersion::new(6, 11, 0)),
            (PixFmt::RGB48, KernelVersion::new(6, 11, 0)),
            (PixFmt::META_RPI_FE_STATS, KernelVersion::new(6, 12, 0)),
            (PixFmt::META_RK_ISP1_EXT_PARAMS, KernelVersion::new(6, 13, 0)),
            (PixFmt::YUV48_12, KernelVersion::new(6, 14, 0)),
        ];

        for (format, release) in tagged {
            assert_eq!(format.since(), release);
            assert_eq!(PixFmt::decode_on(format.encode(), &release), Ok(format));
            assert!(PixFmt::decode_on(format.encode(), &KernelVersion::new(6, 1, 0)).is_err());
        }

        let v6_12 = KernelVersion::new(6, 12, 0);
        assert!(!PixFmt::table_for(&v6_12).contains(&PixFmt::META_RK_ISP1_EXT_PARAMS));
        assert!(PixFmt::table_for(&v6_12).contains(&PixFmt::META_RK_ISP1_PARAMS));

        let v6_7 = KernelVersion::new(6, 7, 0);
        assert_eq!(PixFmt::decode_on(fourcc(b"Y210"), &v6_7).ok(), None);
        assert_eq!(
            PixFmt::decode_on(fourcc(b"Y210"), &KernelVersion::new(6, 8, 0)),
            Ok(PixFmt::Y210)
        );
    }

    #[test]
    fn baseline_formats() {
        let baseline = [
            (b"pBCC", PixFmt::SBGGR12P),
            (b"pREE", PixFmt::SRGGB14P),
            (b"BD10", PixFmt::SGRBG10DPCM8),
            (b"aRA8", PixFmt::SRGGB10ALAW8),
            (b"Y8I ", PixFmt::Y8I),
            (b"Y16I", PixFmt::Y16I),
            (b"Z16 ", PixFmt::Z16),
            (b"Y444", PixFmt::YUV444),
            (b"NA12", PixFmt::NV12M_8L128),
            (b"VSPH", PixFmt::META_VSP1_HGO),
            (b"VSPT", PixFmt::META_VSP1_HGT),
            (b"D4XX", PixFmt::META_D4XX),
            (b"CU08", PixFmt::SDR_CU8),
            (b"TU16", PixFmt::TCH_TU16),
        ];

        for (code, format) in baseline {
            assert_eq!(
                PixFmt::decode_on(fourcc(code), &KernelVersion::BASELINE),
                Ok(format)
            );
        }
        assert_eq!(
            PixFmt::decode(fourcc_be(b"NT12")),
            Ok(PixFmt::NV12M_10BE_8L128)
        );
        assert!(PixFmt::table_for(&KernelVersion::BASELINE).len() < PixFmt::VARIANTS.len());
    }

    #[test]
    fn metadata_formats() {
        assert!(PixFmt::META_GENERIC_CSI2_12.is_metadata());
        assert!(!PixFmt::SRGGB12.is_metadata());
        assert!(PixFmt::META_RPI_FE_CFG.is_metadata());
        assert!(PixFmt::META_D4XX.is_metadata());
        assert_eq!(
            PixFmt::SGBRG12P.mbus_code(),
            Some(MbusPixelcode::SGBRG12_1X12)
        );
        assert_eq!(
            PixFmt::META_GENERIC_CSI2_12.mbus_code(),
            Some(MbusPixelcode::META_12)
        );
        assert_eq!(PixFmt::RGB24.mbus_code(), Some(MbusPixelcode::RGB888_1X24));
        assert_eq!(PixFmt::H264.mbus_code(), None);
    }
}
