//! This example program queries, and optionally changes, the format of a pad
//! of a V4L2 subdevice.
//!
//! The `v4l2_subdev_format` layout is taken from `--layout` if given, then
//! from `VIDIOC_SUBDEV_QUERYCAP`, and finally from the running kernel.
use std::fs::OpenOptions;

use anyhow::{anyhow, Context, Result};
use clap::{App, Arg};
use log::warn;
use v4l2_abi::ioctl;
use v4l2_abi::{AbiEnum, FormatWhence, MbusPixelcode, SubdevLayout};

fn parse_size(size: &str) -> Result<(u32, u32)> {
    let (width, height) = size
        .split_once('x')
        .ok_or_else(|| anyhow!("size must be given as WIDTHxHEIGHT"))?;

    Ok((width.parse()?, height.parse()?))
}

fn parse_code(code: &str) -> Result<MbusPixelcode> {
    let raw = match code.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16)?,
        None => code.parse()?,
    };

    Ok(MbusPixelcode::decode(raw)?)
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("subdev format example")
        .arg(
            Arg::with_name("device")
                .required(true)
                .help("Path to the subdevice node"),
        )
        .arg(
            Arg::with_name("pad")
                .long("pad")
                .takes_value(true)
                .default_value("0")
                .help("Pad to query"),
        )
        .arg(
            Arg::with_name("stream")
                .long("stream")
                .takes_value(true)
                .help("Stream to query (requires a 6.3+ kernel)"),
        )
        .arg(
            Arg::with_name("try")
                .long("try")
                .help("Work on the TRY format instead of the ACTIVE one"),
        )
        .arg(
            Arg::with_name("layout")
                .long("layout")
                .takes_value(true)
                .possible_values(["legacy", "streams"])
                .help("Force the v4l2_subdev_format layout"),
        )
        .arg(
            Arg::with_name("size")
                .long("set-size")
                .takes_value(true)
                .help("Set the pad size, as WIDTHxHEIGHT"),
        )
        .arg(
            Arg::with_name("code")
                .long("set-code")
                .takes_value(true)
                .help("Set the media bus code, e.g. 0x3007"),
        )
        .get_matches();

    let device_path = matches.value_of("device").unwrap_or("/dev/v4l-subdev0");
    let pad: u32 = matches
        .value_of("pad")
        .unwrap_or("0")
        .parse()
        .context("invalid pad")?;
    let stream: Option<u32> = matches
        .value_of("stream")
        .map(str::parse::<u32>)
        .transpose()
        .context("invalid stream")?;
    let which = if matches.is_present("try") {
        FormatWhence::Try
    } else {
        FormatWhence::Active
    };

    let mut fd = OpenOptions::new()
        .read(true)
        .write(true)
        .open(device_path)
        .with_context(|| format!("cannot open {}", device_path))?;

    let layout = match matches.value_of("layout") {
        Some(layout) => layout.parse::<SubdevLayout>()?,
        None => SubdevLayout::probe_device(&fd).unwrap_or_else(|e| {
            warn!("Cannot query subdevice capabilities: {}", e);
            SubdevLayout::probe()
        }),
    };
    if let Err(selected) = SubdevLayout::select(layout) {
        warn!("{} layout already selected, ignoring {}", selected, layout);
    }
    println!("Using {} v4l2_subdev_format layout", SubdevLayout::current());

    let mut format = ioctl::subdev_g_fmt(&fd, which, pad, stream)?;
    println!("Current format: {}", format);

    let size = matches.value_of("size").map(parse_size).transpose()?;
    let code = matches.value_of("code").map(parse_code).transpose()?;
    if size.is_none() && code.is_none() {
        return Ok(());
    }

    if let Some((width, height)) = size {
        format.format.width = width;
        format.format.height = height;
    }
    if let Some(code) = code {
        format.format.code = code;
    }

    let applied = ioctl::subdev_s_fmt(&mut fd, &format)?;
    println!("New format: {}", applied);
    if applied.format != format.format {
        println!("Driver adjusted the requested format");
    }

    Ok(())
}
