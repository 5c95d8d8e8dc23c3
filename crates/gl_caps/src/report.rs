// Copyright (C) 2024 the gl_caps authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Report driver: walks the registry and prints every supported limit.

use std::{io, process::ExitCode};

use gl::types::GLuint;
use thiserror::Error;

use crate::{
	extensions,
	registry::{self, Capability, ExtensionEntry, Fetch},
	DeviceQueries,
};

#[derive(Debug, Error)]
pub enum ReportError {
	#[error("could not write report: {0}")]
	Io(#[from] io::Error),
	/// Context-state check failures surfaced by a caller; the report
	/// itself never checks between queries.
	#[error(transparent)]
	Gl(#[from] crate::error::GlError),
}

/// Run the full capability report against `device`, writing to standard
/// output.
///
/// This is the boundary: any error from the report is logged to the error
/// stream and folded into the exit status. Nothing is rolled back since
/// the report mutates no state. The caller must hold the current GL
/// context on this thread; that is not verified here.
pub fn run<Q: DeviceQueries>(device: &Q) -> ExitCode {
	let stdout = io::stdout();
	match write_report(&mut stdout.lock(), device, registry::entries()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			log::error!("capability report failed: {error}");
			ExitCode::FAILURE
		},
	}
}

/// Write the capability report for `entries` to `out`.
///
/// Layout: context info header, then one block per registry entry
/// (supported entries list each limit indented, unsupported entries get a
/// single marker line), then the driver-advertised extension list by
/// index.
pub fn write_report<W, Q>(
	out: &mut W,
	device: &Q,
	entries: &[ExtensionEntry],
) -> Result<(), ReportError>
where
	W: io::Write,
	Q: DeviceQueries,
{
	writeln!(out, "RENDERER: {}", field(device.string(gl::RENDERER)))?;
	writeln!(out, "VENDOR: {}", field(device.string(gl::VENDOR)))?;
	writeln!(out, "VERSION: {}", field(device.string(gl::VERSION)))?;
	writeln!(
		out,
		"SHADING_LANGUAGE_VERSION: {}",
		field(device.string(gl::SHADING_LANGUAGE_VERSION))
	)?;
	writeln!(out)?;

	// The joined extension string is both printed and used for the
	// support test. Core contexts may not provide it at all; every entry
	// then reports as unsupported.
	let extensions = device.string(gl::EXTENSIONS);
	writeln!(out, "GL_EXTENSIONS: {}", field(extensions.clone()))?;
	writeln!(out)?;

	for entry in entries {
		let supported = extensions
			.as_deref()
			.map_or(false, |list| extensions::is_supported(entry.name, list));

		if supported {
			writeln!(out, "{}", entry.name)?;
			for (label, capability) in &entry.int32 {
				write_int32(out, device, label, capability)?;
			}
			for (label, capability) in &entry.int64 {
				writeln!(out, "\t{} : {}", label, device.integer64(capability.pname))?;
			}
			for (label, capability) in &entry.float {
				writeln!(out, "\t{} : {}", label, device.float(capability.pname))?;
			}
		} else {
			writeln!(out, "{} : Not supported", entry.name)?;
		}
		writeln!(out)?;
	}

	let count = device.integer(gl::NUM_EXTENSIONS);
	writeln!(out)?;
	writeln!(out, "Device Extensions: {count}")?;
	for index in 0..count {
		let name = device.indexed_string(gl::EXTENSIONS, index as GLuint);
		writeln!(out, "\t{}", field(name))?;
	}

	Ok(())
}

/// Scalar limits take one plain query. Packed limits take one plain query
/// filling every component; indexed limits take one indexed query per
/// component. Multi-value limits print comma-separated.
fn write_int32<W, Q>(
	out: &mut W,
	device: &Q,
	label: &str,
	capability: &Capability,
) -> Result<(), ReportError>
where
	W: io::Write,
	Q: DeviceQueries,
{
	write!(out, "\t{label} : ")?;

	match capability.fetch {
		Fetch::Scalar => write!(out, "{}", device.integer(capability.pname))?,
		Fetch::Packed(components) => {
			let mut values = vec![0; components];
			device.integers(capability.pname, &mut values);
			for (index, value) in values.iter().enumerate() {
				if index > 0 {
					write!(out, ",")?;
				}
				write!(out, "{value}")?;
			}
		},
		Fetch::Indexed(components) => {
			for index in 0..components {
				if index > 0 {
					write!(out, ",")?;
				}
				write!(out, "{}", device.indexed_integer(capability.pname, index as GLuint))?;
			}
		},
	}
	writeln!(out)?;

	Ok(())
}

fn field(value: Option<String>) -> String {
	value.unwrap_or_else(|| "(null)".to_string())
}

#[cfg(test)]
mod test;
