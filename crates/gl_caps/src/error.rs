// Copyright (C) 2024 the gl_caps authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl::types::GLenum;
use thiserror::Error;

/// Driver-reported error state, captured after a named GL call.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("OpenGL error {code:#x} at {operation}")]
pub struct GlError {
	pub operation: &'static str,
	pub code: GLenum,
}

/// Check the context error state after `operation`.
///
/// Must be called on the thread holding the current GL context. The error
/// state is cleared by the query, so a returned error belongs to the
/// nearest preceding call since the last check.
pub fn check_gl(operation: &'static str) -> Result<(), GlError> {
	match unsafe { gl::GetError() } {
		gl::NO_ERROR => Ok(()),
		code => Err(GlError { operation, code }),
	}
}
