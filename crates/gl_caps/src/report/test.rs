use std::{cell::RefCell, collections::BTreeMap};

use gl::types::{GLenum, GLfloat, GLint, GLint64, GLuint};

use super::write_report;
use crate::{
	registry::{Capability, ExtensionEntry, Fetch},
	DeviceQueries,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Query {
	Integer(GLenum),
	// plain query with a multi-slot scratch; the second field is its length
	Integers(GLenum, usize),
	IndexedInteger(GLenum, GLuint),
	Integer64(GLenum),
	Float(GLenum),
}

#[derive(Default)]
struct FakeDevice {
	extensions: Option<&'static str>,
	integers: BTreeMap<GLenum, GLint>,
	packed: BTreeMap<GLenum, Vec<GLint>>,
	indexed: BTreeMap<(GLenum, GLuint), GLint>,
	log: RefCell<Vec<Query>>,
}

impl FakeDevice {
	fn supporting(extensions: &'static str) -> Self {
		FakeDevice {
			extensions: Some(extensions),
			..Default::default()
		}
	}

	fn recorded(&self) -> Vec<Query> {
		self.log.borrow().clone()
	}
}

impl DeviceQueries for FakeDevice {
	fn integer(&self, pname: GLenum) -> GLint {
		self.log.borrow_mut().push(Query::Integer(pname));
		self.integers.get(&pname).copied().unwrap_or(0)
	}

	fn integers(&self, pname: GLenum, values: &mut [GLint]) {
		self.log.borrow_mut().push(Query::Integers(pname, values.len()));
		if let Some(stored) = self.packed.get(&pname) {
			values[..stored.len()].copy_from_slice(stored);
		}
	}

	fn indexed_integer(&self, pname: GLenum, index: GLuint) -> GLint {
		self.log.borrow_mut().push(Query::IndexedInteger(pname, index));
		self.indexed.get(&(pname, index)).copied().unwrap_or(0)
	}

	fn integer64(&self, pname: GLenum) -> GLint64 {
		self.log.borrow_mut().push(Query::Integer64(pname));
		0
	}

	fn float(&self, pname: GLenum) -> GLfloat {
		self.log.borrow_mut().push(Query::Float(pname));
		0.0
	}

	fn string(&self, pname: GLenum) -> Option<String> {
		match pname {
			gl::EXTENSIONS => self.extensions.map(str::to_string),
			gl::RENDERER => Some("fake renderer".to_string()),
			gl::VENDOR => Some("fake vendor".to_string()),
			gl::VERSION => Some("4.6 fake".to_string()),
			gl::SHADING_LANGUAGE_VERSION => Some("4.60 fake".to_string()),
			_ => None,
		}
	}

	fn indexed_string(&self, _pname: GLenum, index: GLuint) -> Option<String> {
		Some(format!("GL_IDX{index}"))
	}
}

fn entry(
	name: &'static str,
	int32: &[(&'static str, Capability)],
	int64: &[(&'static str, Capability)],
	float: &[(&'static str, Capability)],
) -> ExtensionEntry {
	ExtensionEntry {
		name,
		int32: int32.iter().copied().collect(),
		int64: int64.iter().copied().collect(),
		float: float.iter().copied().collect(),
	}
}

fn report(device: &FakeDevice, entries: &[ExtensionEntry]) -> String {
	let mut out = Vec::new();
	write_report(&mut out, device, entries).unwrap();
	String::from_utf8(out).unwrap()
}

#[test]
fn scalar_limit_issues_one_plain_query() {
	let pname = 0x1234;
	let mut device = FakeDevice::supporting("GL_test_ext");
	device.integers.insert(pname, 42);

	let entries = [entry(
		"GL_test_ext",
		&[("GL_SOME_LIMIT", Capability { pname, fetch: Fetch::Scalar })],
		&[],
		&[],
	)];
	let output = report(&device, &entries);

	assert!(output.contains("\tGL_SOME_LIMIT : 42\n"));

	let plain = device
		.recorded()
		.iter()
		.filter(|query| **query == Query::Integer(pname))
		.count();
	assert_eq!(plain, 1);
	assert!(!device
		.recorded()
		.iter()
		.any(|query| matches!(query, Query::Integers(..) | Query::IndexedInteger(..))));
}

#[test]
fn vector_limit_issues_one_indexed_query_per_component() {
	let pname = 0x1234;
	let mut device = FakeDevice::supporting("GL_test_ext");
	device.indexed.insert((pname, 0), 1024);
	device.indexed.insert((pname, 1), 512);
	device.indexed.insert((pname, 2), 64);

	let entries = [entry(
		"GL_test_ext",
		&[("GL_WORK_GROUP_LIMIT", Capability { pname, fetch: Fetch::Indexed(3) })],
		&[],
		&[],
	)];
	let output = report(&device, &entries);

	// joined with commas, no trailing comma
	assert!(output.contains("\tGL_WORK_GROUP_LIMIT : 1024,512,64\n"));

	let indexed: Vec<_> = device
		.recorded()
		.into_iter()
		.filter(|query| matches!(query, Query::IndexedInteger(..)))
		.collect();
	assert_eq!(indexed, vec![
		Query::IndexedInteger(pname, 0),
		Query::IndexedInteger(pname, 1),
		Query::IndexedInteger(pname, 2),
	]);
	// the vector path never falls back to the plain query
	assert!(!device.recorded().contains(&Query::Integer(pname)));
}

#[test]
fn paired_limit_fills_both_components_from_one_query() {
	let pname = gl::MAX_VIEWPORT_DIMS;
	let mut device = FakeDevice::supporting("GL_test_ext");
	device.packed.insert(pname, vec![16384, 8192]);

	let entries = [entry(
		"GL_test_ext",
		&[("GL_MAX_VIEWPORT_DIMS", Capability { pname, fetch: Fetch::Packed(2) })],
		&[],
		&[],
	)];
	let output = report(&device, &entries);

	assert!(output.contains("\tGL_MAX_VIEWPORT_DIMS : 16384,8192\n"));

	// exactly one plain query, with scratch sized for both values; never a
	// single-slot query that the two-value answer would overrun
	assert_eq!(device.recorded(), vec![
		Query::Integers(pname, 2),
		Query::Integer(gl::NUM_EXTENSIONS),
	]);
}

#[test]
fn supported_entry_prints_each_registered_limit() {
	let mut device = FakeDevice::supporting("GL_ARB_cull_distance GL_other");
	device.integers.insert(gl::MAX_CULL_DISTANCES, 8);
	device.integers.insert(gl::MAX_COMBINED_CLIP_AND_CULL_DISTANCES, 16);

	let entries = [entry(
		"GL_ARB_cull_distance",
		&[
			("GL_MAX_CULL_DISTANCES", Capability {
				pname: gl::MAX_CULL_DISTANCES,
				fetch: Fetch::Scalar,
			}),
			("GL_MAX_COMBINED_CLIP_AND_CULL_DISTANCES", Capability {
				pname: gl::MAX_COMBINED_CLIP_AND_CULL_DISTANCES,
				fetch: Fetch::Scalar,
			}),
		],
		&[],
		&[],
	)];
	let output = report(&device, &entries);

	// label lines follow the sorted key order of the mapping
	let lines: Vec<&str> = output.lines().collect();
	let header = lines
		.iter()
		.position(|line| *line == "GL_ARB_cull_distance")
		.expect("extension header printed");
	assert_eq!(lines[header + 1], "\tGL_MAX_COMBINED_CLIP_AND_CULL_DISTANCES : 16");
	assert_eq!(lines[header + 2], "\tGL_MAX_CULL_DISTANCES : 8");
	assert_eq!(lines[header + 3], "");

	// empty int64/float groups contribute no queries
	assert!(!device
		.recorded()
		.iter()
		.any(|query| matches!(query, Query::Integer64(_) | Query::Float(_))));
}

#[test]
fn unsupported_entry_prints_marker_and_queries_nothing() {
	let device = FakeDevice::supporting("GL_something_else");

	let entries = [entry(
		"GL_absent_ext",
		&[("GL_SOME_LIMIT", Capability { pname: 0x1234, fetch: Fetch::Scalar })],
		&[],
		&[],
	)];
	let output = report(&device, &entries);

	let marker_lines = output
		.lines()
		.filter(|line| line.contains("GL_absent_ext"))
		.collect::<Vec<_>>();
	assert_eq!(marker_lines, vec!["GL_absent_ext : Not supported"]);

	// only the trailing device-extension count is queried
	assert_eq!(device.recorded(), vec![Query::Integer(gl::NUM_EXTENSIONS)]);
}

#[test]
fn missing_extension_string_reports_nothing_supported() {
	let device = FakeDevice::default();

	let entries = [entry(
		"GL_test_ext",
		&[("GL_SOME_LIMIT", Capability { pname: 0x1234, fetch: Fetch::Scalar })],
		&[],
		&[],
	)];
	let output = report(&device, &entries);

	assert!(output.contains("GL_EXTENSIONS: (null)"));
	assert!(output.contains("GL_test_ext : Not supported"));
	assert_eq!(device.recorded(), vec![Query::Integer(gl::NUM_EXTENSIONS)]);
}

#[test]
fn device_extensions_are_listed_by_index() {
	let mut device = FakeDevice::supporting("");
	device.integers.insert(gl::NUM_EXTENSIONS, 2);

	let output = report(&device, &[]);

	let lines: Vec<&str> = output.lines().collect();
	let count = lines
		.iter()
		.position(|line| *line == "Device Extensions: 2")
		.expect("extension count printed");
	assert_eq!(lines[count + 1], "\tGL_IDX0");
	assert_eq!(lines[count + 2], "\tGL_IDX1");
}

#[test]
fn context_info_header_comes_first() {
	let device = FakeDevice::supporting("");

	let output = report(&device, &[]);
	let lines: Vec<&str> = output.lines().collect();

	assert_eq!(lines[0], "RENDERER: fake renderer");
	assert_eq!(lines[1], "VENDOR: fake vendor");
	assert_eq!(lines[2], "VERSION: 4.6 fake");
	assert_eq!(lines[3], "SHADING_LANGUAGE_VERSION: 4.60 fake");
}
