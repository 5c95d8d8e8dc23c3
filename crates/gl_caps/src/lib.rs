// Copyright (C) 2024 the gl_caps authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::CStr;

use gl::types::{GLenum, GLfloat, GLint, GLint64, GLuint};

pub mod error;
pub mod extensions;
pub mod pname;
pub mod registry;
pub mod report;

/// Read access to the queryable state of the active GL context.
///
/// The report driver only sees this trait, so it can run against a
/// recorded fake in tests. [`DriverQueries`] answers from the live driver.
///
/// Every query may set the context error state as a side effect; none of
/// these methods check or clear it.
pub trait DeviceQueries {
	fn integer(&self, pname: GLenum) -> GLint;
	/// One plain query filling `values` with every component at once.
	/// `values` must span the parameter's full component count; the query
	/// writes all of them.
	fn integers(&self, pname: GLenum, values: &mut [GLint]);
	fn indexed_integer(&self, pname: GLenum, index: GLuint) -> GLint;
	fn integer64(&self, pname: GLenum) -> GLint64;
	fn float(&self, pname: GLenum) -> GLfloat;
	/// glGetString; `None` when the driver returns no data
	fn string(&self, pname: GLenum) -> Option<String>;
	/// glGetStringi; `None` when the driver returns no data
	fn indexed_string(&self, pname: GLenum, index: GLuint) -> Option<String>;
}

/// Queries answered by the active context through the `gl` bindings.
pub struct DriverQueries {
	_private: (),
}

impl DriverQueries {
	/// # SAFETY
	/// * must only be used on the thread holding the current GL context
	pub unsafe fn current() -> Self {
		DriverQueries { _private: () }
	}
}

impl DeviceQueries for DriverQueries {
	fn integer(&self, pname: GLenum) -> GLint {
		let mut value = 0;
		unsafe { gl::GetIntegerv(pname, &mut value) };
		value
	}

	fn integers(&self, pname: GLenum, values: &mut [GLint]) {
		unsafe { gl::GetIntegerv(pname, values.as_mut_ptr()) };
	}

	fn indexed_integer(&self, pname: GLenum, index: GLuint) -> GLint {
		let mut value = 0;
		unsafe { gl::GetIntegeri_v(pname, index, &mut value) };
		value
	}

	fn integer64(&self, pname: GLenum) -> GLint64 {
		let mut value = 0;
		unsafe { gl::GetInteger64v(pname, &mut value) };
		value
	}

	fn float(&self, pname: GLenum) -> GLfloat {
		let mut value = 0.0;
		unsafe { gl::GetFloatv(pname, &mut value) };
		value
	}

	fn string(&self, pname: GLenum) -> Option<String> {
		let ptr = unsafe { gl::GetString(pname) };
		if ptr.is_null() {
			return None;
		}
		Some(unsafe { CStr::from_ptr(ptr.cast()) }.to_string_lossy().into_owned())
	}

	fn indexed_string(&self, pname: GLenum, index: GLuint) -> Option<String> {
		let ptr = unsafe { gl::GetStringi(pname, index) };
		if ptr.is_null() {
			return None;
		}
		Some(unsafe { CStr::from_ptr(ptr.cast()) }.to_string_lossy().into_owned())
	}
}
