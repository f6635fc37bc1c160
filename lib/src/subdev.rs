//! Typed versions of the structures exchanged with V4L2 subdevices.
//!
//! `struct v4l2_subdev_format` gained a `stream` member in Linux 6.3, carved out
//! of its reserved tail. Both definitions have the same size and thus the same
//! ioctl number, so nothing on the wire tells which one the kernel uses: a
//! process picks one [`SubdevLayout`] once, and every descriptor is encoded and
//! decoded according to it.
//!
//! Under [`SubdevLayout::Legacy`] the stream is not part of the ABI. Reading or
//! writing it through [`SubdevFormat`] is an error, and the stream slot of the
//! raw structure is always written as zero and never read.
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use bitflags::bitflags;
use log::{debug, warn};
use nix::errno::Errno;
use thiserror::Error;

use crate::bindings;
use crate::codec::{abi_enum, AbiEnum};
use crate::kernel::{KernelVersion, KernelVersionError};
use crate::{
    ColorEncoding, Colorspace, DecodeError, Field, MbusPixelcode, Quantization, XferFunc,
};

/// Environment variable forcing the subdev format layout (`legacy` or
/// `streams`) instead of deriving it from the running kernel.
pub const LAYOUT_ENV: &str = "V4L2_ABI_SUBDEV_LAYOUT";

/// First release with the `stream` member.
const STREAMS_KERNEL: KernelVersion = KernelVersion::new(6, 3, 0);

static SELECTED_LAYOUT: OnceLock<SubdevLayout> = OnceLock::new();

abi_enum! {
    /// Equivalent of `enum v4l2_subdev_format_whence`.
    pub enum FormatWhence: u32 => SubdevFormatWhence {
        Try = bindings::V4L2_SUBDEV_FORMAT_TRY;
        Active = bindings::V4L2_SUBDEV_FORMAT_ACTIVE;
    }
}

impl Default for FormatWhence {
    fn default() -> Self {
        FormatWhence::Active
    }
}

impl fmt::Display for FormatWhence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            FormatWhence::Try => "try",
            FormatWhence::Active => "active",
        })
    }
}

bitflags! {
    /// Flags of `v4l2_mbus_framefmt::flags`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MbusFrameFormatFlags: u16 {
        /// Request the colorimetry fields to be applied on `S_FMT`.
        const SET_CSC = bindings::V4L2_MBUS_FRAMEFMT_SET_CSC;
    }
}

/// Safe variant of `struct v4l2_mbus_framefmt`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MbusFrameFormat {
    pub width: u32,
    pub height: u32,
    pub code: MbusPixelcode,
    pub field: Field,
    pub colorspace: Colorspace,
    pub encoding: ColorEncoding,
    pub quantization: Quantization,
    pub xfer_func: XferFunc,
    pub flags: MbusFrameFormatFlags,
}

impl MbusFrameFormat {
    pub fn new(width: u32, height: u32, code: MbusPixelcode) -> Self {
        Self {
            width,
            height,
            code,
            ..Default::default()
        }
    }
}

impl TryFrom<bindings::v4l2_mbus_framefmt> for MbusFrameFormat {
    type Error = DecodeError;

    fn try_from(fmt: bindings::v4l2_mbus_framefmt) -> Result<Self, Self::Error> {
        Ok(Self {
            width: fmt.width,
            height: fmt.height,
            code: MbusPixelcode::decode(fmt.code)?,
            field: Field::decode(fmt.field)?,
            colorspace: Colorspace::decode(fmt.colorspace)?,
            encoding: ColorEncoding::decode(fmt.ycbcr_enc.into())?,
            quantization: Quantization::decode(fmt.quantization.into())?,
            xfer_func: XferFunc::decode(fmt.xfer_func.into())?,
            flags: MbusFrameFormatFlags::from_bits_retain(fmt.flags),
        })
    }
}

impl From<&MbusFrameFormat> for bindings::v4l2_mbus_framefmt {
    fn from(fmt: &MbusFrameFormat) -> Self {
        bindings::v4l2_mbus_framefmt {
            width: fmt.width,
            height: fmt.height,
            code: fmt.code.encode(),
            field: fmt.field.encode(),
            colorspace: fmt.colorspace.encode(),
            ycbcr_enc: fmt.encoding.to_repr(),
            quantization: fmt.quantization.to_repr(),
            xfer_func: fmt.xfer_func.to_repr(),
            flags: fmt.flags.bits(),
            ..Default::default()
        }
    }
}

impl fmt::Display for MbusFrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} {}, field {}, colorspace {}, {}, {}, xfer {}, flags {:#x}",
            self.width,
            self.height,
            self.code,
            self.field,
            self.colorspace,
            self.encoding,
            self.quantization,
            self.xfer_func,
            self.flags.bits()
        )
    }
}

/// Which definition of `struct v4l2_subdev_format` the kernel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubdevLayout {
    /// Up to Linux 6.2: `reserved[8]` follows the frame format.
    Legacy,
    /// Linux 6.3 onwards: `stream` then `reserved[7]`.
    StreamCapable,
}

impl SubdevLayout {
    pub fn for_kernel(kernel: &KernelVersion) -> Self {
        if *kernel >= STREAMS_KERNEL {
            SubdevLayout::StreamCapable
        } else {
            SubdevLayout::Legacy
        }
    }

    pub fn supports_streams(self) -> bool {
        self == SubdevLayout::StreamCapable
    }

    /// Selects the layout used by this process.
    ///
    /// The first selection is final. Selecting the layout already in effect
    /// succeeds, while selecting another one returns the layout in effect.
    pub fn select(layout: SubdevLayout) -> Result<(), SubdevLayout> {
        let selected = *SELECTED_LAYOUT.get_or_init(|| {
            debug!("Using {:?} v4l2_subdev_format layout", layout);
            layout
        });

        if selected == layout {
            Ok(())
        } else {
            Err(selected)
        }
    }

    /// Returns the layout used by this process, probing it if none has been
    /// selected yet.
    pub fn current() -> SubdevLayout {
        *SELECTED_LAYOUT.get_or_init(|| {
            let layout = Self::probe();
            debug!("Probed {:?} v4l2_subdev_format layout", layout);
            layout
        })
    }

    /// Works out the layout from the environment or the running kernel.
    ///
    /// [`LAYOUT_ENV`] takes precedence. Without it the release reported by
    /// `uname(2)` decides, and a release that cannot be read falls back to
    /// [`SubdevLayout::Legacy`].
    pub fn probe() -> SubdevLayout {
        Self::probe_from(env::var(LAYOUT_ENV).ok().as_deref(), KernelVersion::current)
    }

    fn probe_from(
        env_override: Option<&str>,
        kernel: impl FnOnce() -> Result<KernelVersion, KernelVersionError>,
    ) -> SubdevLayout {
        if let Some(value) = env_override {
            match value.parse() {
                Ok(layout) => return layout,
                Err(e) => warn!("Ignoring {}: {}", LAYOUT_ENV, e),
            }
        }

        match kernel() {
            Ok(kernel) => Self::for_kernel(&kernel),
            Err(e) => {
                warn!("{}, assuming the legacy subdev format layout", e);
                SubdevLayout::Legacy
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid subdev format layout {0:?}, expected \"legacy\" or \"streams\"")]
pub struct LayoutParseError(String);

impl FromStr for SubdevLayout {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(SubdevLayout::Legacy),
            "streams" => Ok(SubdevLayout::StreamCapable),
            _ => Err(LayoutParseError(s.to_owned())),
        }
    }
}

impl fmt::Display for SubdevLayout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SubdevLayout::Legacy => "legacy",
            SubdevLayout::StreamCapable => "streams",
        })
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StreamAccessError {
    #[error("the legacy v4l2_subdev_format layout has no stream member")]
    LegacyLayoutStreamAccess,
}

impl From<StreamAccessError> for Errno {
    fn from(err: StreamAccessError) -> Self {
        match err {
            StreamAccessError::LegacyLayoutStreamAccess => Errno::EINVAL,
        }
    }
}

/// Safe variant of `struct v4l2_subdev_format`, bound to a [`SubdevLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdevFormat {
    pub which: FormatWhence,
    pub pad: u32,
    pub format: MbusFrameFormat,
    stream: u32,
    layout: SubdevLayout,
}

impl SubdevFormat {
    /// Creates a descriptor for stream 0 of `pad`, using the layout of the
    /// process.
    pub fn new(which: FormatWhence, pad: u32, format: MbusFrameFormat) -> Self {
        Self {
            which,
            pad,
            format,
            stream: 0,
            layout: SubdevLayout::current(),
        }
    }

    /// Rebinds the descriptor to `layout`, which must be the layout of the
    /// process. The stream is reset when that layout has none.
    ///
    /// Returns the layout in effect if `layout` is another one.
    pub fn with_layout(mut self, layout: SubdevLayout) -> Result<Self, SubdevLayout> {
        let current = SubdevLayout::current();
        if layout != current {
            return Err(current);
        }

        if !layout.supports_streams() {
            self.stream = 0;
        }
        self.layout = layout;
        Ok(self)
    }

    pub fn layout(&self) -> SubdevLayout {
        self.layout
    }

    pub fn supports_streams(&self) -> bool {
        self.layout.supports_streams()
    }

    pub fn stream(&self) -> Result<u32, StreamAccessError> {
        if self.supports_streams() {
            Ok(self.stream)
        } else {
            Err(StreamAccessError::LegacyLayoutStreamAccess)
        }
    }

    pub fn set_stream(&mut self, stream: u32) -> Result<(), StreamAccessError> {
        if self.supports_streams() {
            self.stream = stream;
            Ok(())
        } else {
            Err(StreamAccessError::LegacyLayoutStreamAccess)
        }
    }

    /// The stream, or 0 for layouts without streams.
    pub fn stream_or_default(&self) -> u32 {
        self.stream().unwrap_or(0)
    }

    /// Encodes the descriptor according to `layout`.
    ///
    /// Under [`SubdevLayout::Legacy`] the stream slot is left to zero,
    /// whatever stream the descriptor holds. Reserved words are always zero.
    pub fn to_raw(&self, layout: SubdevLayout) -> bindings::v4l2_subdev_format {
        let stream = if layout.supports_streams() {
            self.stream
        } else {
            if self.stream != 0 {
                debug!(
                    "Dropping stream {} of pad {}: legacy subdev format layout",
                    self.stream, self.pad
                );
            }
            0
        };

        bindings::v4l2_subdev_format {
            which: self.which.encode(),
            pad: self.pad,
            format: (&self.format).into(),
            stream,
            ..Default::default()
        }
    }

    /// Decodes a descriptor filled by the kernel according to `layout`.
    ///
    /// Under [`SubdevLayout::Legacy`] the stream slot is not read and the
    /// descriptor reports stream 0. Non-zero reserved words are ignored.
    pub fn from_raw(
        raw: &bindings::v4l2_subdev_format,
        layout: SubdevLayout,
    ) -> Result<Self, DecodeError> {
        if raw.reserved.iter().any(|&r| r != 0) {
            warn!("Ignoring non-zero reserved words of v4l2_subdev_format");
        }

        let stream = if layout.supports_streams() {
            raw.stream
        } else {
            if raw.stream != 0 {
                warn!(
                    "Ignoring stream slot {:#x} of pad {}: legacy subdev format layout",
                    raw.stream, raw.pad
                );
            }
            0
        };

        Ok(Self {
            which: FormatWhence::decode(raw.which)?,
            pad: raw.pad,
            format: raw.format.try_into()?,
            stream,
            layout,
        })
    }

    /// Encodes the descriptor with the layout of the process, whatever layout
    /// the descriptor is bound to.
    pub fn to_kernel(&self) -> bindings::v4l2_subdev_format {
        let layout = SubdevLayout::current();
        if layout != self.layout {
            debug!(
                "Encoding {} subdev format of pad {} with the {} layout",
                self.layout, self.pad, layout
            );
        }
        self.to_raw(layout)
    }

    /// Decodes a descriptor filled by the kernel with the layout of the
    /// process.
    pub fn from_kernel(raw: &bindings::v4l2_subdev_format) -> Result<Self, DecodeError> {
        Self::from_raw(raw, SubdevLayout::current())
    }

    /// Encodes the descriptor with the definition used up to Linux 6.2.
    pub fn to_legacy_raw(&self) -> bindings::v4l2_subdev_format_legacy {
        bindings::v4l2_subdev_format_legacy {
            which: self.which.encode(),
            pad: self.pad,
            format: (&self.format).into(),
            ..Default::default()
        }
    }

    /// Decodes a descriptor using the definition used up to Linux 6.2.
    pub fn from_legacy_raw(raw: &bindings::v4l2_subdev_format_legacy) -> Result<Self, DecodeError> {
        if raw.reserved.iter().any(|&r| r != 0) {
            warn!("Ignoring non-zero reserved words of v4l2_subdev_format");
        }

        Ok(Self {
            which: FormatWhence::decode(raw.which)?,
            pad: raw.pad,
            format: raw.format.try_into()?,
            stream: 0,
            layout: SubdevLayout::Legacy,
        })
    }
}

impl fmt::Display for SubdevFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "pad {}", self.pad)?;
        if let Ok(stream) = self.stream() {
            write!(f, "/{}", stream)?;
        }
        write!(f, " ({}): {}", self.which, self.format)
    }
}
