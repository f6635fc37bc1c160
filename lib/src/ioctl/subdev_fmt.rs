//! Safe wrapper for the `VIDIOC_SUBDEV_(G|S)_FMT` ioctls.
use nix::errno::Errno;
use std::os::unix::io::AsRawFd;
use thiserror::Error;

use crate::bindings::v4l2_subdev_format;
use crate::codec::AbiEnum;
use crate::DecodeError;
use crate::FormatWhence;
use crate::StreamAccessError;
use crate::SubdevFormat;
use crate::SubdevLayout;

// Both definitions of the structure have the same size, hence the same
// request codes.
#[doc(hidden)]
mod ioctl {
    use crate::bindings::v4l2_subdev_format;
    nix::ioctl_readwrite!(vidioc_subdev_g_fmt, b'V', 4, v4l2_subdev_format);
    nix::ioctl_readwrite!(vidioc_subdev_s_fmt, b'V', 5, v4l2_subdev_format);
}

fn decode_errno(err: &DecodeError) -> Errno {
    if err.is_fatal() {
        Errno::EOVERFLOW
    } else {
        Errno::EINVAL
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubdevGFmtError {
    #[error("invalid pad, stream or format type requested")]
    InvalidPad,
    #[error(transparent)]
    StreamAccess(#[from] StreamAccessError),
    #[error("error while converting from V4L2 subdev format: {0}")]
    FromV4L2FormatConversionError(DecodeError),
    #[error("ioctl error: {0}")]
    IoctlError(Errno),
}

impl From<SubdevGFmtError> for Errno {
    fn from(err: SubdevGFmtError) -> Self {
        match err {
            SubdevGFmtError::InvalidPad => Errno::EINVAL,
            SubdevGFmtError::StreamAccess(e) => e.into(),
            SubdevGFmtError::FromV4L2FormatConversionError(e) => decode_errno(&e),
            SubdevGFmtError::IoctlError(e) => e,
        }
    }
}

/// Safe wrapper around the `VIDIOC_SUBDEV_G_FMT` ioctl.
///
/// `stream` can only be given when the process uses the stream-capable
/// layout.
pub fn subdev_g_fmt(
    fd: &impl AsRawFd,
    which: FormatWhence,
    pad: u32,
    stream: Option<u32>,
) -> Result<SubdevFormat, SubdevGFmtError> {
    if stream.is_some() && !SubdevLayout::current().supports_streams() {
        return Err(StreamAccessError::LegacyLayoutStreamAccess.into());
    }

    let mut fmt = v4l2_subdev_format {
        which: which.encode(),
        pad,
        stream: stream.unwrap_or(0),
        ..Default::default()
    };

    match unsafe { ioctl::vidioc_subdev_g_fmt(fd.as_raw_fd(), &mut fmt) } {
        Ok(_) => SubdevFormat::from_kernel(&fmt)
            .map_err(SubdevGFmtError::FromV4L2FormatConversionError),
        Err(Errno::EINVAL) => Err(SubdevGFmtError::InvalidPad),
        Err(e) => Err(SubdevGFmtError::IoctlError(e)),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubdevSFmtError {
    #[error("invalid pad, stream or format type requested")]
    InvalidPad,
    #[error("active format cannot be changed on a read-only subdevice")]
    ReadOnly,
    #[error("device currently busy")]
    DeviceBusy,
    #[error("error while converting from V4L2 subdev format: {0}")]
    FromV4L2FormatConversionError(DecodeError),
    #[error("ioctl error: {0}")]
    IoctlError(Errno),
}

impl From<SubdevSFmtError> for Errno {
    fn from(err: SubdevSFmtError) -> Self {
        match err {
            SubdevSFmtError::InvalidPad => Errno::EINVAL,
            SubdevSFmtError::ReadOnly => Errno::EPERM,
            SubdevSFmtError::DeviceBusy => Errno::EBUSY,
            SubdevSFmtError::FromV4L2FormatConversionError(e) => decode_errno(&e),
            SubdevSFmtError::IoctlError(e) => e,
        }
    }
}

/// Safe wrapper around the `VIDIOC_SUBDEV_S_FMT` ioctl.
///
/// The format is encoded and the driver's answer decoded with the layout of
/// the process, whatever layout `format` is bound to: its stream is dropped
/// under [`SubdevLayout::Legacy`]. Returns the format actually applied by the
/// driver.
pub fn subdev_s_fmt(
    fd: &mut impl AsRawFd,
    format: &SubdevFormat,
) -> Result<SubdevFormat, SubdevSFmtError> {
    let mut fmt = format.to_kernel();

    match unsafe { ioctl::vidioc_subdev_s_fmt(fd.as_raw_fd(), &mut fmt) } {
        Ok(_) => SubdevFormat::from_kernel(&fmt)
            .map_err(SubdevSFmtError::FromV4L2FormatConversionError),
        Err(Errno::EINVAL) => Err(SubdevSFmtError::InvalidPad),
        Err(Errno::EPERM) => Err(SubdevSFmtError::ReadOnly),
        Err(Errno::EBUSY) => Err(SubdevSFmtError::DeviceBusy),
        Err(e) => Err(SubdevSFmtError::IoctlError(e)),
    }
}
