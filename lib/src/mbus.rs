//! Media bus pixel codes (`MEDIA_BUS_FMT_*`), describing how pixels travel on
//! the links between subdevices.
//!
//! Codes are grouped in ranges by their upper bits: `0x1xxx` for RGB, `0x2xxx`
//! for YUV, `0x3xxx` for Bayer and so on. New codes keep appearing in new
//! kernel releases; those are tagged below with the release that added them.
use std::fmt;

use crate::bindings;
use crate::codec::{abi_enum, AbiEnum};

abi_enum! {
    /// Equivalent of the `MEDIA_BUS_FMT_*` codes stored in
    /// `v4l2_mbus_framefmt::code`.
    #[allow(non_camel_case_types)]
    pub enum MbusPixelcode: u32 => MbusPixelcode {
        FIXED = bindings::MEDIA_BUS_FMT_FIXED;

        RGB444_1X12 = bindings::MEDIA_BUS_FMT_RGB444_1X12;
        RGB444_2X8_PADHI_BE = bindings::MEDIA_BUS_FMT_RGB444_2X8_PADHI_BE;
        RGB444_2X8_PADHI_LE = bindings::MEDIA_BUS_FMT_RGB444_2X8_PADHI_LE;
        RGB555_2X8_PADHI_BE = bindings::MEDIA_BUS_FMT_RGB555_2X8_PADHI_BE;
        RGB555_2X8_PADHI_LE = bindings::MEDIA_BUS_FMT_RGB555_2X8_PADHI_LE;
        RGB565_1X16 = bindings::MEDIA_BUS_FMT_RGB565_1X16;
        BGR565_2X8_BE = bindings::MEDIA_BUS_FMT_BGR565_2X8_BE;
        BGR565_2X8_LE = bindings::MEDIA_BUS_FMT_BGR565_2X8_LE;
        RGB565_2X8_BE = bindings::MEDIA_BUS_FMT_RGB565_2X8_BE;
        RGB565_2X8_LE = bindings::MEDIA_BUS_FMT_RGB565_2X8_LE;
        RGB666_1X18 = bindings::MEDIA_BUS_FMT_RGB666_1X18;
        BGR666_1X18 = bindings::MEDIA_BUS_FMT_BGR666_1X18 => since(6, 2);
        RBG888_1X24 = bindings::MEDIA_BUS_FMT_RBG888_1X24;
        RGB666_1X24_CPADHI = bindings::MEDIA_BUS_FMT_RGB666_1X24_CPADHI;
        BGR666_1X24_CPADHI = bindings::MEDIA_BUS_FMT_BGR666_1X24_CPADHI => since(6, 2);
        RGB565_1X24_CPADHI = bindings::MEDIA_BUS_FMT_RGB565_1X24_CPADHI => since(6, 2);
        RGB666_1X7X3_SPWG = bindings::MEDIA_BUS_FMT_RGB666_1X7X3_SPWG;
        BGR888_1X24 = bindings::MEDIA_BUS_FMT_BGR888_1X24;
        BGR888_3X8 = bindings::MEDIA_BUS_FMT_BGR888_3X8;
        GBR888_1X24 = bindings::MEDIA_BUS_FMT_GBR888_1X24;
        RGB888_1X24 = bindings::MEDIA_BUS_FMT_RGB888_1X24;
        RGB888_2X12_BE = bindings::MEDIA_BUS_FMT_RGB888_2X12_BE;
        RGB888_2X12_LE = bindings::MEDIA_BUS_FMT_RGB888_2X12_LE;
        RGB888_3X8 = bindings::MEDIA_BUS_FMT_RGB888_3X8;
        RGB888_3X8_DELTA = bindings::MEDIA_BUS_FMT_RGB888_3X8_DELTA;
        RGB888_1X7X4_SPWG = bindings::MEDIA_BUS_FMT_RGB888_1X7X4_SPWG;
        RGB888_1X7X4_JEIDA = bindings::MEDIA_BUS_FMT_RGB888_1X7X4_JEIDA;
        RGB666_1X30_CPADLO = bindings::MEDIA_BUS_FMT_RGB666_1X30_CPADLO;
        RGB888_1X30_CPADLO = bindings::MEDIA_BUS_FMT_RGB888_1X30_CPADLO;
        RGB666_1X36_CPADLO = bindings::MEDIA_BUS_FMT_RGB666_1X36_CPADLO;
        RGB888_1X36_CPADLO = bindings::MEDIA_BUS_FMT_RGB888_1X36_CPADLO;
        ARGB8888_1X32 = bindings::MEDIA_BUS_FMT_ARGB8888_1X32;
        RGB888_1X32_PADHI = bindings::MEDIA_BUS_FMT_RGB888_1X32_PADHI;
        RGB101010_1X30 = bindings::MEDIA_BUS_FMT_RGB101010_1X30;
        RGB101010_1X7X5_SPWG = bindings::MEDIA_BUS_FMT_RGB101010_1X7X5_SPWG => since(6, 13);
        RGB101010_1X7X5_JEIDA = bindings::MEDIA_BUS_FMT_RGB101010_1X7X5_JEIDA => since(6, 13);
        RGB121212_1X36 = bindings::MEDIA_BUS_FMT_RGB121212_1X36;
        RGB161616_1X48 = bindings::MEDIA_BUS_FMT_RGB161616_1X48;

        Y8_1X8 = bindings::MEDIA_BUS_FMT_Y8_1X8;
        UV8_1X8 = bindings::MEDIA_BUS_FMT_UV8_1X8;
        UYVY8_1_5X8 = bindings::MEDIA_BUS_FMT_UYVY8_1_5X8;
        VYUY8_1_5X8 = bindings::MEDIA_BUS_FMT_VYUY8_1_5X8;
        YUYV8_1_5X8 = bindings::MEDIA_BUS_FMT_YUYV8_1_5X8;
        YVYU8_1_5X8 = bindings::MEDIA_BUS_FMT_YVYU8_1_5X8;
        UYVY8_2X8 = bindings::MEDIA_BUS_FMT_UYVY8_2X8;
        VYUY8_2X8 = bindings::MEDIA_BUS_FMT_VYUY8_2X8;
        YUYV8_2X8 = bindings::MEDIA_BUS_FMT_YUYV8_2X8;
        YVYU8_2X8 = bindings::MEDIA_BUS_FMT_YVYU8_2X8;
        Y10_1X10 = bindings::MEDIA_BUS_FMT_Y10_1X10;
        Y10_2X8_PADHI_LE = bindings::MEDIA_BUS_FMT_Y10_2X8_PADHI_LE;
        UYVY10_2X10 = bindings::MEDIA_BUS_FMT_UYVY10_2X10;
        VYUY10_2X10 = bindings::MEDIA_BUS_FMT_VYUY10_2X10;
        YUYV10_2X10 = bindings::MEDIA_BUS_FMT_YUYV10_2X10;
        YVYU10_2X10 = bindings::MEDIA_BUS_FMT_YVYU10_2X10;
        Y12_1X12 = bindings::MEDIA_BUS_FMT_Y12_1X12;
        UYVY12_2X12 = bindings::MEDIA_BUS_FMT_UYVY12_2X12;
        VYUY12_2X12 = bindings::MEDIA_BUS_FMT_VYUY12_2X12;
        YUYV12_2X12 = bindings::MEDIA_BUS_FMT_YUYV12_2X12;
        YVYU12_2X12 = bindings::MEDIA_BUS_FMT_YVYU12_2X12;
        Y14_1X14 = bindings::MEDIA_BUS_FMT_Y14_1X14;
        Y16_1X16 = bindings::MEDIA_BUS_FMT_Y16_1X16 => since(6, 8);
        UYVY8_1X16 = bindings::MEDIA_BUS_FMT_UYVY8_1X16;
        VYUY8_1X16 = bindings::MEDIA_BUS_FMT_VYUY8_1X16;
        YUYV8_1X16 = bindings::MEDIA_BUS_FMT_YUYV8_1X16;
        YVYU8_1X16 = bindings::MEDIA_BUS_FMT_YVYU8_1X16;
        YDYUYDYV8_1X16 = bindings::MEDIA_BUS_FMT_YDYUYDYV8_1X16;
        UYVY10_1X20 = bindings::MEDIA_BUS_FMT_UYVY10_1X20;
        VYUY10_1X20 = bindings::MEDIA_BUS_FMT_VYUY10_1X20;
        YUYV10_1X20 = bindings::MEDIA_BUS_FMT_YUYV10_1X20;
        YVYU10_1X20 = bindings::MEDIA_BUS_FMT_YVYU10_1X20;
        VUY8_1X24 = bindings::MEDIA_BUS_FMT_VUY8_1X24;
        YUV8_1X24 = bindings::MEDIA_BUS_FMT_YUV8_1X24;
        UYYVYY8_0_5X24 = bindings::MEDIA_BUS_FMT_UYYVYY8_0_5X24;
        UYVY12_1X24 = bindings::MEDIA_BUS_FMT_UYVY12_1X24;
        VYUY12_1X24 = bindings::MEDIA_BUS_FMT_VYUY12_1X24;
        YUYV12_1X24 = bindings::MEDIA_BUS_FMT_YUYV12_1X24;
        YVYU12_1X24 = bindings::MEDIA_BUS_FMT_YVYU12_1X24;
        YUV10_1X30 = bindings::MEDIA_BUS_FMT_YUV10_1X30;
        UYYVYY10_0_5X30 = bindings::MEDIA_BUS_FMT_UYYVYY10_0_5X30;
        AYUV8_1X32 = bindings::MEDIA_BUS_FMT_AYUV8_1X32;
        UYYVYY12_0_5X36 = bindings::MEDIA_BUS_FMT_UYYVYY12_0_5X36;
        YUV12_1X36 = bindings::MEDIA_BUS_FMT_YUV12_1X36;
        YUV16_1X48 = bindings::MEDIA_BUS_FMT_YUV16_1X48;
        UYYVYY16_0_5X48 = bindings::MEDIA_BUS_FMT_UYYVYY16_0_5X48;

        SBGGR8_1X8 = bindings::MEDIA_BUS_FMT_SBGGR8_1X8;
        SGBRG8_1X8 = bindings::MEDIA_BUS_FMT_SGBRG8_1X8;
        SGRBG8_1X8 = bindings::MEDIA_BUS_FMT_SGRBG8_1X8;
        SRGGB8_1X8 = bindings::MEDIA_BUS_FMT_SRGGB8_1X8;
        SBGGR10_ALAW8_1X8 = bindings::MEDIA_BUS_FMT_SBGGR10_ALAW8_1X8;
        SGBRG10_ALAW8_1X8 = bindings::MEDIA_BUS_FMT_SGBRG10_ALAW8_1X8;
        SGRBG10_ALAW8_1X8 = bindings::MEDIA_BUS_FMT_SGRBG10_ALAW8_1X8;
        SRGGB10_ALAW8_1X8 = bindings::MEDIA_BUS_FMT_SRGGB10_ALAW8_1X8;
        SBGGR10_DPCM8_1X8 = bindings::MEDIA_BUS_FMT_SBGGR10_DPCM8_1X8;
        SGBRG10_DPCM8_1X8 = bindings::MEDIA_BUS_FMT_SGBRG10_DPCM8_1X8;
        SGRBG10_DPCM8_1X8 = bindings::MEDIA_BUS_FMT_SGRBG10_DPCM8_1X8;
        SRGGB10_DPCM8_1X8 = bindings::MEDIA_BUS_FMT_SRGGB10_DPCM8_1X8;
        SBGGR10_2X8_PADHI_BE = bindings::MEDIA_BUS_FMT_SBGGR10_2X8_PADHI_BE;
        SBGGR10_2X8_PADHI_LE = bindings::MEDIA_BUS_FMT_SBGGR10_2X8_PADHI_LE;
        SBGGR10_2X8_PADLO_BE = bindings::MEDIA_BUS_FMT_SBGGR10_2X8_PADLO_BE;
        SBGGR10_2X8_PADLO_LE = bindings::MEDIA_BUS_FMT_SBGGR10_2X8_PADLO_LE;
        SBGGR10_1X10 = bindings::MEDIA_BUS_FMT_SBGGR10_1X10;
        SGBRG10_1X10 = bindings::MEDIA_BUS_FMT_SGBRG10_1X10;
        SGRBG10_1X10 = bindings::MEDIA_BUS_FMT_SGRBG10_1X10;
        SRGGB10_1X10 = bindings::MEDIA_BUS_FMT_SRGGB10_1X10;
        SBGGR12_1X12 = bindings::MEDIA_BUS_FMT_SBGGR12_1X12;
        SGBRG12_1X12 = bindings::MEDIA_BUS_FMT_SGBRG12_1X12;
        SGRBG12_1X12 = bindings::MEDIA_BUS_FMT_SGRBG12_1X12;
        SRGGB12_1X12 = bindings::MEDIA_BUS_FMT_SRGGB12_1X12;
        SBGGR14_1X14 = bindings::MEDIA_BUS_FMT_SBGGR14_1X14;
        SGBRG14_1X14 = bindings::MEDIA_BUS_FMT_SGBRG14_1X14;
        SGRBG14_1X14 = bindings::MEDIA_BUS_FMT_SGRBG14_1X14;
        SRGGB14_1X14 = bindings::MEDIA_BUS_FMT_SRGGB14_1X14;
        SBGGR16_1X16 = bindings::MEDIA_BUS_FMT_SBGGR16_1X16;
        SGBRG16_1X16 = bindings::MEDIA_BUS_FMT_SGBRG16_1X16;
        SGRBG16_1X16 = bindings::MEDIA_BUS_FMT_SGRBG16_1X16;
        SRGGB16_1X16 = bindings::MEDIA_BUS_FMT_SRGGB16_1X16;

        JPEG_1X8 = bindings::MEDIA_BUS_FMT_JPEG_1X8;

        S5C_UYVY_JPEG_1X8 = bindings::MEDIA_BUS_FMT_S5C_UYVY_JPEG_1X8;

        AHSV8888_1X32 = bindings::MEDIA_BUS_FMT_AHSV8888_1X32;

        METADATA_FIXED = bindings::MEDIA_BUS_FMT_METADATA_FIXED;

        META_8 = bindings::MEDIA_BUS_FMT_META_8 => since(6, 10);
        META_10 = bindings::MEDIA_BUS_FMT_META_10 => since(6, 10);
        META_12 = bindings::MEDIA_BUS_FMT_META_12 => since(6, 10);
        META_14 = bindings::MEDIA_BUS_FMT_META_14 => since(6, 10);
        META_16 = bindings::MEDIA_BUS_FMT_META_16 => since(6, 10);
        META_20 = bindings::MEDIA_BUS_FMT_META_20 => since(6, 10);
        META_24 = bindings::MEDIA_BUS_FMT_META_24 => since(6, 10);
    }
}

/// Ranges `media-bus-format.h` sorts the codes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbusCategory {
    Fixed,
    Rgb,
    Yuv,
    Bayer,
    Jpeg,
    Vendor,
    Hsv,
    /// Metadata with a driver defined layout (`0x7xxx`).
    FixedMetadata,
    /// Generic line based metadata (`0x8xxx`).
    Metadata,
}

impl MbusPixelcode {
    pub fn category(&self) -> MbusCategory {
        match self.encode() >> 12 {
            0x0 => MbusCategory::Fixed,
            0x1 => MbusCategory::Rgb,
            0x2 => MbusCategory::Yuv,
            0x3 => MbusCategory::Bayer,
            0x4 => MbusCategory::Jpeg,
            0x5 => MbusCategory::Vendor,
            0x6 => MbusCategory::Hsv,
            0x7 => MbusCategory::FixedMetadata,
            _ => MbusCategory::Metadata,
        }
    }
}

impl Default for MbusPixelcode {
    fn default() -> Self {
        MbusPixelcode::FIXED
    }
}

impl fmt::Display for MbusPixelcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}/{:#06x}", self, self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tests::check_table;
    use crate::{Concept, DecodeError, KernelVersion};

    const META_CODES: [MbusPixelcode; 7] = [
        MbusPixelcode::META_8,
        MbusPixelcode::META_10,
        MbusPixelcode::META_12,
        MbusPixelcode::META_14,
        MbusPixelcode::META_16,
        MbusPixelcode::META_20,
        MbusPixelcode::META_24,
    ];

    #[test]
    fn table_is_exact() {
        check_table::<MbusPixelcode>();
    }

    #[test]
    fn metadata_codes() {
        for (i, code) in META_CODES.iter().enumerate() {
            let raw = bindings::MEDIA_BUS_FMT_META_8 + i as u32;
            assert_eq!(MbusPixelcode::decode(raw), Ok(*code));
            assert_eq!(code.category(), MbusCategory::Metadata);
            assert_eq!(code.since(), KernelVersion::new(6, 10, 0));
        }
        assert!(matches!(
            MbusPixelcode::decode(0x8008),
            Err(DecodeError::UnknownVariant {
                concept: Concept::MbusPixelcode,
                raw_value: 0x8008
            })
        ));
    }

    #[test]
    fn metadata_codes_follow_kernel() {
        let v6_9 = KernelVersion::new(6, 9, 0);
        let v6_10 = KernelVersion::new(6, 10, 0);

        for code in META_CODES {
            assert!(MbusPixelcode::decode_on(code.encode(), &v6_9).is_err());
            assert_eq!(MbusPixelcode::decode_on(code.encode(), &v6_10), Ok(code));
        }
        assert_eq!(
            MbusPixelcode::table_for(&v6_10).len() - MbusPixelcode::table_for(&v6_9).len(),
            META_CODES.len()
        );
    }

    #[test]
    fn tagged_releases() {
        let tagged = [
            (MbusPixelcode::RGB565_1X24_CPADHI, KernelVersion::new(6, 2, 0)),
            (MbusPixelcode::BGR666_1X18, KernelVersion::new(6, 2, 0)),
            (MbusPixelcode::BGR666_1X24_CPADHI, KernelVersion::new(6, 2, 0)),
            (MbusPixelcode::Y16_1X16, KernelVersion::new(6, 8, 0)),
            (
                MbusPixelcode::RGB101010_1X7X5_SPWG,
                KernelVersion::new(6, 13, 0),
            ),
            (
                MbusPixelcode::RGB101010_1X7X5_JEIDA,
                KernelVersion::new(6, 13, 0),
            ),
        ];

        for (code, release) in tagged {
            assert_eq!(code.since(), release);
            assert_eq!(MbusPixelcode::decode_on(code.encode(), &release), Ok(code));
            assert!(MbusPixelcode::decode_on(code.encode(), &KernelVersion::BASELINE).is_err());
        }
        assert_eq!(MbusPixelcode::Y8_1X8.since(), KernelVersion::BASELINE);
        assert!(MbusPixelcode::decode_on(0x202e, &KernelVersion::new(6, 7, 0)).is_err());
    }

    #[test]
    fn baseline_codes() {
        let baseline = [
            (0x1020, MbusPixelcode::RGB666_1X36_CPADLO, MbusCategory::Rgb),
            (0x1021, MbusPixelcode::RGB888_1X36_CPADLO, MbusCategory::Rgb),
            (
                0x7001,
                MbusPixelcode::METADATA_FIXED,
                MbusCategory::FixedMetadata,
            ),
        ];

        for (raw, code, category) in baseline {
            assert_eq!(MbusPixelcode::decode(raw), Ok(code));
            assert_eq!(
                MbusPixelcode::decode_on(raw, &KernelVersion::BASELINE),
                Ok(code)
            );
            assert_eq!(code.category(), category);
        }
        assert_eq!(
            MbusPixelcode::METADATA_FIXED.to_string(),
            "METADATA_FIXED/0x7001"
        );
        assert!(MbusPixelcode::decode(0x7002).is_err());
    }

    #[test]
    fn categories_and_display() {
        assert_eq!(MbusPixelcode::FIXED.category(), MbusCategory::Fixed);
        assert_eq!(MbusPixelcode::RGB888_1X24.category(), MbusCategory::Rgb);
        assert_eq!(MbusPixelcode::UYVY8_1X16.category(), MbusCategory::Yuv);
        assert_eq!(MbusPixelcode::SRGGB10_1X10.category(), MbusCategory::Bayer);
        assert_eq!(MbusPixelcode::AHSV8888_1X32.category(), MbusCategory::Hsv);
        assert_eq!(MbusPixelcode::RGB888_1X24.to_string(), "RGB888_1X24/0x100a");
        assert_eq!(MbusPixelcode::META_8.to_string(), "META_8/0x8001");
    }
}
