//! Safe wrappers for the V4L2 subdevice ioctls that exchange the structures of
//! the [`crate::subdev`] module.
//!
//! V4L2 ioctls are usually called with a single structure as argument, which
//! serves to store both the input and output of the ioctl. Each function of
//! this module instead takes the relevant input as parameters, fills the raw
//! structure itself, and validates what the driver wrote back before returning
//! it as a safe type.
//!
//! For instance `VIDIOC_SUBDEV_G_FMT` only needs `which`, `pad` and possibly
//! `stream` from user-space, so [`subdev_g_fmt()`] takes exactly these and
//! returns a [`crate::SubdevFormat`] decoded according to the layout of the
//! process:
//!
//! ```text
//! pub fn subdev_g_fmt(
//!     fd: &impl AsRawFd,
//!     which: FormatWhence,
//!     pad: u32,
//!     stream: Option<u32>,
//! ) -> Result<SubdevFormat, SubdevGFmtError>;
//! ```
//!
//! Each ioctl has its own error type, separating the failures of the ioctl
//! itself from values the driver returned that do not decode. All error types
//! can be converted to an error code using their `Into<Errno>`
//! implementation.
mod subdev_fmt;
mod subdev_querycap;

pub use subdev_fmt::*;
pub use subdev_querycap::*;

use nix::errno::Errno;

/// Extension trait for allowing easy conversion of ioctl errors into their originating error code.
pub trait IntoErrno {
    fn into_errno(self) -> i32;
}

impl<T> IntoErrno for T
where
    T: Into<Errno>,
{
    fn into_errno(self) -> i32 {
        self.into() as i32
    }
}
