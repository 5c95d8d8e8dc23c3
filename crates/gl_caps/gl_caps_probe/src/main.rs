// Copyright (C) 2024 the gl_caps authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Offscreen capability probe.
//!
//! Creates a surfaceless OpenGL context through EGL, attaches a small
//! framebuffer render target, performs a trivial clear, then prints the
//! full capability report for the context.

use std::{ffi::c_void, process::ExitCode, ptr};

use gl::types::{GLint, GLuint};
use gl_caps::{
	error::{check_gl, GlError},
	report, DriverQueries,
};
use khronos_egl as egl;
use thiserror::Error;

type Egl = egl::DynamicInstance<egl::EGL1_4>;

#[derive(Debug, Error)]
enum SetupError {
	#[error("could not load libEGL: {0}")]
	Load(String),
	#[error("no default EGL display available")]
	NoDisplay,
	#[error("no matching EGL framebuffer configuration")]
	NoConfig,
	#[error("EGL error {code:#x} at {operation}")]
	Egl { operation: &'static str, code: egl::Int },
	#[error(transparent)]
	Gl(#[from] GlError),
}

impl SetupError {
	fn egl(operation: &'static str, error: egl::Error) -> Self {
		SetupError::Egl {
			operation,
			code: error.native(),
		}
	}
}

fn main() -> ExitCode {
	env_logger::init();

	match run() {
		Ok(status) => status,
		Err(error) => {
			eprintln!("{error}");
			ExitCode::FAILURE
		},
	}
}

fn run() -> Result<ExitCode, SetupError> {
	let egl = unsafe { Egl::load_required() }.map_err(|e| SetupError::Load(e.to_string()))?;

	let display =
		unsafe { egl.get_display(egl::DEFAULT_DISPLAY) }.ok_or(SetupError::NoDisplay)?;
	let (major, minor) =
		egl.initialize(display).map_err(|e| SetupError::egl("eglInitialize", e))?;
	log::debug!("EGL {major}.{minor}");

	let config = egl
		.choose_first_config(display, &[egl::NONE])
		.map_err(|e| SetupError::egl("eglChooseConfig", e))?
		.ok_or(SetupError::NoConfig)?;

	egl.bind_api(egl::OPENGL_API).map_err(|e| SetupError::egl("eglBindAPI", e))?;

	let context = egl
		.create_context(display, config, None, &[egl::NONE])
		.map_err(|e| SetupError::egl("eglCreateContext", e))?;

	// No surface: rendering goes to the framebuffer object below.
	egl.make_current(display, None, None, Some(context))
		.map_err(|e| SetupError::egl("eglMakeCurrent", e))?;

	gl::load_with(|name| {
		egl.get_proc_address(name).map_or(ptr::null(), |f| f as *const c_void)
	});

	let status = {
		let target = RenderTarget::create()?;
		target.clear();

		// this thread holds the context bound above
		let device = unsafe { DriverQueries::current() };
		let status = report::run(&device);

		drop(target);
		status
	};

	egl.destroy_context(display, context)
		.map_err(|e| SetupError::egl("eglDestroyContext", e))?;
	egl.terminate(display).map_err(|e| SetupError::egl("eglTerminate", e))?;

	Ok(status)
}

/// Framebuffer with a texture color attachment, the probe's render target.
struct RenderTarget {
	framebuffer: GLuint,
	texture: GLuint,
}

impl RenderTarget {
	const SIZE: GLint = 500;

	/// Must be called on the thread holding the current GL context.
	fn create() -> Result<Self, GlError> {
		unsafe {
			let mut framebuffer = 0;
			gl::GenFramebuffers(1, &mut framebuffer);
			gl::BindFramebuffer(gl::FRAMEBUFFER, framebuffer);
			check_gl("glBindFramebuffer")?;

			let mut texture = 0;
			gl::GenTextures(1, &mut texture);
			gl::BindTexture(gl::TEXTURE_2D, texture);
			gl::TexImage2D(
				gl::TEXTURE_2D,
				0,
				gl::RGBA as GLint,
				Self::SIZE,
				Self::SIZE,
				0,
				gl::RGBA,
				gl::UNSIGNED_BYTE,
				ptr::null(),
			);
			check_gl("glTexImage2D")?;

			gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as GLint);
			gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as GLint);
			gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_BORDER as GLint);
			gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_BORDER as GLint);

			gl::FramebufferTexture2D(
				gl::FRAMEBUFFER,
				gl::COLOR_ATTACHMENT0,
				gl::TEXTURE_2D,
				texture,
				0,
			);
			check_gl("glFramebufferTexture2D")?;

			Ok(RenderTarget {
				framebuffer,
				texture,
			})
		}
	}

	fn clear(&self) {
		unsafe {
			gl::ClearColor(0.9, 0.8, 0.5, 1.0);
			gl::Clear(gl::COLOR_BUFFER_BIT);
			gl::Flush();
		}
	}
}

impl Drop for RenderTarget {
	fn drop(&mut self) {
		unsafe {
			gl::DeleteFramebuffers(1, &self.framebuffer);
			gl::DeleteTextures(1, &self.texture);
		}
	}
}
