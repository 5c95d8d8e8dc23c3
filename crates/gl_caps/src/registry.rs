// Copyright (C) 2024 the gl_caps authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Static catalogue of per-extension implementation limits.
//!
//! Each entry names a driver extension (or core version token) and the
//! limits registered under it, grouped by value kind. The catalogue is
//! built once and never mutated; reports iterate it in registration order,
//! and each kind group in sorted label order.

use std::collections::BTreeMap;

use gl::types::GLenum;
use once_cell::sync::Lazy;

use crate::pname;

/// A single queryable limit: the query parameter and how to fetch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
	pub pname: GLenum,
	pub fetch: Fetch,
}

/// How a limit's value(s) come out of the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
	/// One plain query, one value.
	Scalar,
	/// One plain query writing every component at once, e.g. the viewport
	/// dimension pair. The scratch must span all components.
	Packed(usize),
	/// One indexed query per component, e.g. the work-group triples.
	Indexed(usize),
}

/// Limits registered under one extension name, grouped by value kind.
pub struct ExtensionEntry {
	pub name: &'static str,
	pub int32: BTreeMap<&'static str, Capability>,
	pub int64: BTreeMap<&'static str, Capability>,
	pub float: BTreeMap<&'static str, Capability>,
}

const fn scalar(pname: GLenum) -> Capability {
	Capability { pname, fetch: Fetch::Scalar }
}

const fn packed(pname: GLenum, components: usize) -> Capability {
	Capability { pname, fetch: Fetch::Packed(components) }
}

const fn indexed(pname: GLenum, components: usize) -> Capability {
	Capability { pname, fetch: Fetch::Indexed(components) }
}

impl ExtensionEntry {
	fn new(
		name: &'static str,
		int32: &[(&'static str, Capability)],
		int64: &[(&'static str, Capability)],
		float: &[(&'static str, Capability)],
	) -> Self {
		ExtensionEntry {
			name,
			int32: int32.iter().copied().collect(),
			int64: int64.iter().copied().collect(),
			float: float.iter().copied().collect(),
		}
	}
}

static REGISTRY: Lazy<Vec<ExtensionEntry>> = Lazy::new(build);

/// The catalogue, in registration order.
pub fn entries() -> &'static [ExtensionEntry] {
	&REGISTRY
}

#[rustfmt::skip]
fn build() -> Vec<ExtensionEntry> {
	vec![
		ExtensionEntry::new(
			"GL_VERSION_1_1",
			&[
				("GL_MAX_LIST_NESTING", scalar(pname::MAX_LIST_NESTING)),
				("GL_MAX_EVAL_ORDER", scalar(pname::MAX_EVAL_ORDER)),
				("GL_MAX_LIGHTS", scalar(pname::MAX_LIGHTS)),
				("GL_MAX_TEXTURE_SIZE", scalar(gl::MAX_TEXTURE_SIZE)),
				("GL_MAX_PIXEL_MAP_TABLE", scalar(pname::MAX_PIXEL_MAP_TABLE)),
				("GL_MAX_ATTRIB_STACK_DEPTH", scalar(pname::MAX_ATTRIB_STACK_DEPTH)),
				("GL_MAX_MODELVIEW_STACK_DEPTH", scalar(pname::MAX_MODELVIEW_STACK_DEPTH)),
				("GL_MAX_NAME_STACK_DEPTH", scalar(pname::MAX_NAME_STACK_DEPTH)),
				("GL_MAX_PROJECTION_STACK_DEPTH", scalar(pname::MAX_PROJECTION_STACK_DEPTH)),
				("GL_MAX_TEXTURE_STACK_DEPTH", scalar(pname::MAX_TEXTURE_STACK_DEPTH)),
				("GL_MAX_VIEWPORT_DIMS", packed(gl::MAX_VIEWPORT_DIMS, 2)),
				("GL_MAX_CLIENT_ATTRIB_STACK_DEPTH", scalar(pname::MAX_CLIENT_ATTRIB_STACK_DEPTH)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_VERSION_1_2",
			&[
				("GL_MAX_3D_TEXTURE_SIZE", scalar(gl::MAX_3D_TEXTURE_SIZE)),
				("GL_MAX_ELEMENTS_VERTICES", scalar(gl::MAX_ELEMENTS_VERTICES)),
				("GL_MAX_ELEMENTS_INDICES", scalar(gl::MAX_ELEMENTS_INDICES)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_VERSION_1_3",
			&[
				("GL_MAX_TEXTURE_UNITS", scalar(pname::MAX_TEXTURE_UNITS)),
				("GL_MAX_CUBE_MAP_TEXTURE_SIZE", scalar(gl::MAX_CUBE_MAP_TEXTURE_SIZE)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_VERSION_1_4",
			&[],
			&[],
			&[("GL_MAX_TEXTURE_LOD_BIAS", scalar(gl::MAX_TEXTURE_LOD_BIAS))],
		),
		ExtensionEntry::new(
			"GL_VERSION_2_0",
			&[
				("GL_MAX_DRAW_BUFFERS", scalar(gl::MAX_DRAW_BUFFERS)),
				("GL_MAX_VERTEX_ATTRIBS", scalar(gl::MAX_VERTEX_ATTRIBS)),
				("GL_MAX_TEXTURE_COORDS", scalar(pname::MAX_TEXTURE_COORDS)),
				("GL_MAX_TEXTURE_IMAGE_UNITS", scalar(gl::MAX_TEXTURE_IMAGE_UNITS)),
				("GL_MAX_FRAGMENT_UNIFORM_COMPONENTS", scalar(gl::MAX_FRAGMENT_UNIFORM_COMPONENTS)),
				("GL_MAX_VERTEX_UNIFORM_COMPONENTS", scalar(gl::MAX_VERTEX_UNIFORM_COMPONENTS)),
				("GL_MAX_VARYING_FLOATS", scalar(pname::MAX_VARYING_FLOATS)),
				("GL_MAX_VERTEX_TEXTURE_IMAGE_UNITS", scalar(gl::MAX_VERTEX_TEXTURE_IMAGE_UNITS)),
				("GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS", scalar(gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_VERSION_3_0",
			&[
				("GL_MAX_CLIP_DISTANCES", scalar(gl::MAX_CLIP_DISTANCES)),
				("GL_MAX_CLIP_PLANES", scalar(pname::MAX_CLIP_PLANES)),
				("GL_MAX_VARYING_COMPONENTS", scalar(pname::MAX_VARYING_COMPONENTS)),
				("GL_MAX_VARYING_FLOATS", scalar(pname::MAX_VARYING_FLOATS)),
				("GL_NUM_EXTENSIONS", scalar(gl::NUM_EXTENSIONS)),
				("GL_MAX_ARRAY_TEXTURE_LAYERS", scalar(gl::MAX_ARRAY_TEXTURE_LAYERS)),
				("GL_MAX_TRANSFORM_FEEDBACK_SEPARATE_COMPONENTS", scalar(gl::MAX_TRANSFORM_FEEDBACK_SEPARATE_COMPONENTS)),
				("GL_MAX_TRANSFORM_FEEDBACK_INTERLEAVED_COMPONENTS", scalar(gl::MAX_TRANSFORM_FEEDBACK_INTERLEAVED_COMPONENTS)),
				("GL_MAX_TRANSFORM_FEEDBACK_SEPARATE_ATTRIBS", scalar(gl::MAX_TRANSFORM_FEEDBACK_SEPARATE_ATTRIBS)),
				("GL_MAX_PROGRAM_TEXEL_OFFSET", scalar(gl::MAX_PROGRAM_TEXEL_OFFSET)),
				("GL_MIN_PROGRAM_TEXEL_OFFSET", scalar(gl::MIN_PROGRAM_TEXEL_OFFSET)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_VERSION_3_1",
			&[("GL_MAX_RECTANGLE_TEXTURE_SIZE", scalar(gl::MAX_RECTANGLE_TEXTURE_SIZE))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_VERSION_3_2",
			&[
				("GL_MAX_GEOMETRY_TEXTURE_IMAGE_UNITS", scalar(gl::MAX_GEOMETRY_TEXTURE_IMAGE_UNITS)),
				("GL_MAX_GEOMETRY_UNIFORM_COMPONENTS", scalar(gl::MAX_GEOMETRY_UNIFORM_COMPONENTS)),
				("GL_MAX_GEOMETRY_OUTPUT_VERTICES", scalar(gl::MAX_GEOMETRY_OUTPUT_VERTICES)),
				("GL_MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS", scalar(gl::MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS)),
				("GL_MAX_VERTEX_OUTPUT_COMPONENTS", scalar(gl::MAX_VERTEX_OUTPUT_COMPONENTS)),
				("GL_MAX_GEOMETRY_INPUT_COMPONENTS", scalar(gl::MAX_GEOMETRY_INPUT_COMPONENTS)),
				("GL_MAX_GEOMETRY_OUTPUT_COMPONENTS", scalar(gl::MAX_GEOMETRY_OUTPUT_COMPONENTS)),
				("GL_MAX_FRAGMENT_INPUT_COMPONENTS", scalar(gl::MAX_FRAGMENT_INPUT_COMPONENTS)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_VERSION_4_4",
			&[("GL_MAX_VERTEX_ATTRIB_STRIDE", scalar(gl::MAX_VERTEX_ATTRIB_STRIDE))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_VERSION_4_6",
			&[("GL_NUM_SPIR_V_EXTENSIONS", scalar(pname::NUM_SPIR_V_EXTENSIONS))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_ES2_compatibility",
			&[
				("GL_NUM_SHADER_BINARY_FORMATS", scalar(gl::NUM_SHADER_BINARY_FORMATS)),
				("GL_MAX_VERTEX_UNIFORM_VECTORS", scalar(gl::MAX_VERTEX_UNIFORM_VECTORS)),
				("GL_MAX_VARYING_VECTORS", scalar(gl::MAX_VARYING_VECTORS)),
				("GL_MAX_FRAGMENT_UNIFORM_VECTORS", scalar(gl::MAX_FRAGMENT_UNIFORM_VECTORS)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_AMD_debug_output",
			&[
				("GL_MAX_DEBUG_MESSAGE_LENGTH_AMD", scalar(pname::MAX_DEBUG_MESSAGE_LENGTH_AMD)),
				("GL_MAX_DEBUG_LOGGED_MESSAGES_AMD", scalar(pname::MAX_DEBUG_LOGGED_MESSAGES_AMD)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_debug_output",
			&[
				("GL_MAX_DEBUG_MESSAGE_LENGTH_ARB", scalar(pname::MAX_DEBUG_MESSAGE_LENGTH_ARB)),
				("GL_MAX_DEBUG_LOGGED_MESSAGES_ARB", scalar(pname::MAX_DEBUG_LOGGED_MESSAGES_ARB)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_texture_multisample",
			&[
				("GL_MAX_SAMPLE_MASK_WORDS", scalar(gl::MAX_SAMPLE_MASK_WORDS)),
				("GL_MAX_COLOR_TEXTURE_SAMPLES", scalar(gl::MAX_COLOR_TEXTURE_SAMPLES)),
				("GL_MAX_DEPTH_TEXTURE_SAMPLES", scalar(gl::MAX_DEPTH_TEXTURE_SAMPLES)),
				("GL_MAX_INTEGER_SAMPLES", scalar(gl::MAX_INTEGER_SAMPLES)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_AMD_sparse_texture",
			&[
				("GL_MAX_SPARSE_TEXTURE_SIZE_AMD", scalar(pname::MAX_SPARSE_TEXTURE_SIZE_AMD)),
				("GL_MAX_SPARSE_ARRAY_TEXTURE_LAYERS", scalar(pname::MAX_SPARSE_ARRAY_TEXTURE_LAYERS)),
			],
			&[("GL_MAX_SPARSE_3D_TEXTURE_SIZE_AMD", scalar(pname::MAX_SPARSE_3D_TEXTURE_SIZE_AMD))],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_sparse_texture",
			&[
				("GL_MAX_SPARSE_TEXTURE_SIZE_ARB", scalar(pname::MAX_SPARSE_TEXTURE_SIZE_ARB)),
				("GL_MAX_SPARSE_3D_TEXTURE_SIZE_ARB", scalar(pname::MAX_SPARSE_3D_TEXTURE_SIZE_ARB)),
				("GL_MAX_SPARSE_ARRAY_TEXTURE_LAYERS_ARB", scalar(pname::MAX_SPARSE_ARRAY_TEXTURE_LAYERS_ARB)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_ES3_compatibility",
			&[("GL_MAX_ELEMENT_INDEX", scalar(gl::MAX_ELEMENT_INDEX))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_blend_func_extended",
			&[("GL_MAX_DUAL_SOURCE_DRAW_BUFFERS", scalar(gl::MAX_DUAL_SOURCE_DRAW_BUFFERS))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_compute_shader",
			&[
				("GL_MAX_COMPUTE_SHARED_MEMORY_SIZE", scalar(gl::MAX_COMPUTE_SHARED_MEMORY_SIZE)),
				("GL_MAX_COMPUTE_UNIFORM_COMPONENTS", scalar(gl::MAX_COMPUTE_UNIFORM_COMPONENTS)),
				("GL_MAX_COMPUTE_ATOMIC_COUNTER_BUFFERS", scalar(gl::MAX_COMPUTE_ATOMIC_COUNTER_BUFFERS)),
				("GL_MAX_COMPUTE_ATOMIC_COUNTERS", scalar(gl::MAX_COMPUTE_ATOMIC_COUNTERS)),
				("GL_MAX_COMBINED_COMPUTE_UNIFORM_COMPONENTS", scalar(gl::MAX_COMBINED_COMPUTE_UNIFORM_COMPONENTS)),
				("GL_MAX_COMPUTE_WORK_GROUP_INVOCATIONS", scalar(gl::MAX_COMPUTE_WORK_GROUP_INVOCATIONS)),
				("GL_MAX_COMPUTE_UNIFORM_BLOCKS", scalar(gl::MAX_COMPUTE_UNIFORM_BLOCKS)),
				("GL_MAX_COMPUTE_TEXTURE_IMAGE_UNITS", scalar(gl::MAX_COMPUTE_TEXTURE_IMAGE_UNITS)),
				("GL_MAX_COMPUTE_IMAGE_UNIFORMS", scalar(gl::MAX_COMPUTE_IMAGE_UNIFORMS)),
				("GL_MAX_COMPUTE_WORK_GROUP_COUNT", indexed(gl::MAX_COMPUTE_WORK_GROUP_COUNT, 3)),
				("GL_MAX_COMPUTE_WORK_GROUP_SIZE", indexed(gl::MAX_COMPUTE_WORK_GROUP_SIZE, 3)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_compute_variable_group_size",
			&[
				("GL_MAX_COMPUTE_FIXED_GROUP_INVOCATIONS_ARB", scalar(pname::MAX_COMPUTE_FIXED_GROUP_INVOCATIONS_ARB)),
				("GL_MAX_COMPUTE_FIXED_GROUP_SIZE_ARB", indexed(pname::MAX_COMPUTE_FIXED_GROUP_SIZE_ARB, 3)),
				("GL_MAX_COMPUTE_VARIABLE_GROUP_INVOCATIONS_ARB", scalar(pname::MAX_COMPUTE_VARIABLE_GROUP_INVOCATIONS_ARB)),
				("GL_MAX_COMPUTE_VARIABLE_GROUP_SIZE_ARB", indexed(pname::MAX_COMPUTE_VARIABLE_GROUP_SIZE_ARB, 3)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_cull_distance",
			&[
				("GL_MAX_CULL_DISTANCES", scalar(gl::MAX_CULL_DISTANCES)),
				("GL_MAX_COMBINED_CLIP_AND_CULL_DISTANCES", scalar(gl::MAX_COMBINED_CLIP_AND_CULL_DISTANCES)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_draw_buffers",
			&[("GL_MAX_DRAW_BUFFERS_ARB", scalar(pname::MAX_DRAW_BUFFERS_ARB))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_explicit_uniform_location",
			&[("GL_MAX_UNIFORM_LOCATIONS", scalar(gl::MAX_UNIFORM_LOCATIONS))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_fragment_program",
			&[
				("GL_MAX_TEXTURE_COORDS_ARB", scalar(pname::MAX_TEXTURE_COORDS_ARB)),
				("GL_MAX_TEXTURE_IMAGE_UNITS_ARB", scalar(pname::MAX_TEXTURE_IMAGE_UNITS_ARB)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_fragment_shader",
			&[("GL_MAX_FRAGMENT_UNIFORM_COMPONENTS_ARB", scalar(pname::MAX_FRAGMENT_UNIFORM_COMPONENTS_ARB))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_framebuffer_no_attachments",
			&[
				("GL_MAX_FRAMEBUFFER_WIDTH", scalar(gl::MAX_FRAMEBUFFER_WIDTH)),
				("GL_MAX_FRAMEBUFFER_HEIGHT", scalar(gl::MAX_FRAMEBUFFER_HEIGHT)),
				("GL_MAX_FRAMEBUFFER_LAYERS", scalar(gl::MAX_FRAMEBUFFER_LAYERS)),
				("GL_MAX_FRAMEBUFFER_SAMPLES", scalar(gl::MAX_FRAMEBUFFER_SAMPLES)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_EXT_framebuffer_multisample",
			&[("GL_MAX_SAMPLES_EXT", scalar(pname::MAX_SAMPLES_EXT))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_framebuffer_object",
			&[
				("GL_MAX_RENDERBUFFER_SIZE", scalar(gl::MAX_RENDERBUFFER_SIZE)),
				("GL_MAX_COLOR_ATTACHMENTS", scalar(gl::MAX_COLOR_ATTACHMENTS)),
				("GL_MAX_SAMPLES", scalar(gl::MAX_SAMPLES)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_geometry_shader4",
			&[
				("GL_MAX_GEOMETRY_TEXTURE_IMAGE_UNITS_ARB", scalar(pname::MAX_GEOMETRY_TEXTURE_IMAGE_UNITS_ARB)),
				("GL_MAX_GEOMETRY_VARYING_COMPONENTS_ARB", scalar(pname::MAX_GEOMETRY_VARYING_COMPONENTS_ARB)),
				("GL_MAX_VERTEX_VARYING_COMPONENTS_ARB", scalar(pname::MAX_VERTEX_VARYING_COMPONENTS_ARB)),
				("GL_MAX_GEOMETRY_UNIFORM_COMPONENTS_ARB", scalar(pname::MAX_GEOMETRY_UNIFORM_COMPONENTS_ARB)),
				("GL_MAX_GEOMETRY_OUTPUT_VERTICES_ARB", scalar(pname::MAX_GEOMETRY_OUTPUT_VERTICES_ARB)),
				("GL_MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS_ARB", scalar(pname::MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS_ARB)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_gpu_shader5",
			&[
				("GL_MAX_GEOMETRY_SHADER_INVOCATIONS", scalar(gl::MAX_GEOMETRY_SHADER_INVOCATIONS)),
				("GL_MAX_FRAGMENT_INTERPOLATION_OFFSET", scalar(gl::MAX_FRAGMENT_INTERPOLATION_OFFSET)),
				("GL_MAX_VERTEX_STREAMS", scalar(gl::MAX_VERTEX_STREAMS)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_matrix_palette",
			&[
				("GL_MAX_MATRIX_PALETTE_STACK_DEPTH_ARB", scalar(pname::MAX_MATRIX_PALETTE_STACK_DEPTH_ARB)),
				("GL_MAX_PALETTE_MATRICES_ARB", scalar(pname::MAX_PALETTE_MATRICES_ARB)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_multitexture",
			&[("GL_MAX_TEXTURE_UNITS_ARB", scalar(pname::MAX_TEXTURE_UNITS_ARB))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_parallel_shader_compile",
			&[("GL_MAX_SHADER_COMPILER_THREADS_ARB", scalar(pname::MAX_SHADER_COMPILER_THREADS_ARB))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_shader_atomic_counters",
			&[
				("GL_MAX_VERTEX_ATOMIC_COUNTER_BUFFERS", scalar(gl::MAX_VERTEX_ATOMIC_COUNTER_BUFFERS)),
				("GL_MAX_TESS_CONTROL_ATOMIC_COUNTER_BUFFERS", scalar(gl::MAX_TESS_CONTROL_ATOMIC_COUNTER_BUFFERS)),
				("GL_MAX_TESS_EVALUATION_ATOMIC_COUNTER_BUFFERS", scalar(gl::MAX_TESS_EVALUATION_ATOMIC_COUNTER_BUFFERS)),
				("GL_MAX_GEOMETRY_ATOMIC_COUNTER_BUFFERS", scalar(gl::MAX_GEOMETRY_ATOMIC_COUNTER_BUFFERS)),
				("GL_MAX_FRAGMENT_ATOMIC_COUNTER_BUFFERS", scalar(gl::MAX_FRAGMENT_ATOMIC_COUNTER_BUFFERS)),
				("GL_MAX_COMBINED_ATOMIC_COUNTER_BUFFERS", scalar(gl::MAX_COMBINED_ATOMIC_COUNTER_BUFFERS)),
				("GL_MAX_VERTEX_ATOMIC_COUNTERS", scalar(gl::MAX_VERTEX_ATOMIC_COUNTERS)),
				("GL_MAX_TESS_CONTROL_ATOMIC_COUNTERS", scalar(gl::MAX_TESS_CONTROL_ATOMIC_COUNTERS)),
				("GL_MAX_TESS_EVALUATION_ATOMIC_COUNTERS", scalar(gl::MAX_TESS_EVALUATION_ATOMIC_COUNTERS)),
				("GL_MAX_GEOMETRY_ATOMIC_COUNTERS", scalar(gl::MAX_GEOMETRY_ATOMIC_COUNTERS)),
				("GL_MAX_FRAGMENT_ATOMIC_COUNTERS", scalar(gl::MAX_FRAGMENT_ATOMIC_COUNTERS)),
				("GL_MAX_COMBINED_ATOMIC_COUNTERS", scalar(gl::MAX_COMBINED_ATOMIC_COUNTERS)),
				("GL_MAX_ATOMIC_COUNTER_BUFFER_SIZE", scalar(gl::MAX_ATOMIC_COUNTER_BUFFER_SIZE)),
				("GL_MAX_ATOMIC_COUNTER_BUFFER_BINDINGS", scalar(gl::MAX_ATOMIC_COUNTER_BUFFER_BINDINGS)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_shader_image_load_store",
			&[
				("GL_MAX_IMAGE_UNITS", scalar(gl::MAX_IMAGE_UNITS)),
				("GL_MAX_COMBINED_IMAGE_UNITS_AND_FRAGMENT_OUTPUTS", scalar(gl::MAX_COMBINED_IMAGE_UNITS_AND_FRAGMENT_OUTPUTS)),
				("GL_MAX_IMAGE_SAMPLES", scalar(gl::MAX_IMAGE_SAMPLES)),
				("GL_MAX_VERTEX_IMAGE_UNIFORMS", scalar(gl::MAX_VERTEX_IMAGE_UNIFORMS)),
				("GL_MAX_TESS_CONTROL_IMAGE_UNIFORMS", scalar(gl::MAX_TESS_CONTROL_IMAGE_UNIFORMS)),
				("GL_MAX_TESS_EVALUATION_IMAGE_UNIFORMS", scalar(gl::MAX_TESS_EVALUATION_IMAGE_UNIFORMS)),
				("GL_MAX_GEOMETRY_IMAGE_UNIFORMS", scalar(gl::MAX_GEOMETRY_IMAGE_UNIFORMS)),
				("GL_MAX_FRAGMENT_IMAGE_UNIFORMS", scalar(gl::MAX_FRAGMENT_IMAGE_UNIFORMS)),
				("GL_MAX_COMBINED_IMAGE_UNIFORMS", scalar(gl::MAX_COMBINED_IMAGE_UNIFORMS)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_uniform_buffer_object",
			&[
				("GL_MAX_VERTEX_UNIFORM_BLOCKS", scalar(gl::MAX_VERTEX_UNIFORM_BLOCKS)),
				("GL_MAX_GEOMETRY_UNIFORM_BLOCKS", scalar(gl::MAX_GEOMETRY_UNIFORM_BLOCKS)),
				("GL_MAX_FRAGMENT_UNIFORM_BLOCKS", scalar(gl::MAX_FRAGMENT_UNIFORM_BLOCKS)),
				("GL_MAX_COMBINED_UNIFORM_BLOCKS", scalar(gl::MAX_COMBINED_UNIFORM_BLOCKS)),
				("GL_MAX_UNIFORM_BUFFER_BINDINGS", scalar(gl::MAX_UNIFORM_BUFFER_BINDINGS)),
				("GL_MAX_UNIFORM_BLOCK_SIZE", scalar(gl::MAX_UNIFORM_BLOCK_SIZE)),
				("GL_MAX_COMBINED_VERTEX_UNIFORM_COMPONENTS", scalar(gl::MAX_COMBINED_VERTEX_UNIFORM_COMPONENTS)),
				("GL_MAX_COMBINED_GEOMETRY_UNIFORM_COMPONENTS", scalar(gl::MAX_COMBINED_GEOMETRY_UNIFORM_COMPONENTS)),
				("GL_MAX_COMBINED_FRAGMENT_UNIFORM_COMPONENTS", scalar(gl::MAX_COMBINED_FRAGMENT_UNIFORM_COMPONENTS)),
				("GL_UNIFORM_BUFFER_OFFSET_ALIGNMENT", scalar(gl::UNIFORM_BUFFER_OFFSET_ALIGNMENT)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_shader_storage_buffer_object",
			&[
				("GL_MAX_COMBINED_SHADER_OUTPUT_RESOURCES", scalar(gl::MAX_COMBINED_SHADER_OUTPUT_RESOURCES)),
				("GL_MAX_VERTEX_SHADER_STORAGE_BLOCKS", scalar(gl::MAX_VERTEX_SHADER_STORAGE_BLOCKS)),
				("GL_MAX_GEOMETRY_SHADER_STORAGE_BLOCKS", scalar(gl::MAX_GEOMETRY_SHADER_STORAGE_BLOCKS)),
				("GL_MAX_TESS_CONTROL_SHADER_STORAGE_BLOCKS", scalar(gl::MAX_TESS_CONTROL_SHADER_STORAGE_BLOCKS)),
				("GL_MAX_TESS_EVALUATION_SHADER_STORAGE_BLOCKS", scalar(gl::MAX_TESS_EVALUATION_SHADER_STORAGE_BLOCKS)),
				("GL_MAX_FRAGMENT_SHADER_STORAGE_BLOCKS", scalar(gl::MAX_FRAGMENT_SHADER_STORAGE_BLOCKS)),
				("GL_MAX_COMPUTE_SHADER_STORAGE_BLOCKS", scalar(gl::MAX_COMPUTE_SHADER_STORAGE_BLOCKS)),
				("GL_MAX_COMBINED_SHADER_STORAGE_BLOCKS", scalar(gl::MAX_COMBINED_SHADER_STORAGE_BLOCKS)),
				("GL_MAX_SHADER_STORAGE_BUFFER_BINDINGS", scalar(gl::MAX_SHADER_STORAGE_BUFFER_BINDINGS)),
				("GL_MAX_SHADER_STORAGE_BLOCK_SIZE", scalar(gl::MAX_SHADER_STORAGE_BLOCK_SIZE)),
				("GL_SHADER_STORAGE_BUFFER_OFFSET_ALIGNMENT", scalar(gl::SHADER_STORAGE_BUFFER_OFFSET_ALIGNMENT)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_shader_subroutine",
			&[
				("GL_MAX_SUBROUTINES", scalar(gl::MAX_SUBROUTINES)),
				("GL_MAX_SUBROUTINE_UNIFORM_LOCATIONS", scalar(gl::MAX_SUBROUTINE_UNIFORM_LOCATIONS)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_map_buffer_alignment",
			&[("GL_MIN_MAP_BUFFER_ALIGNMENT", scalar(gl::MIN_MAP_BUFFER_ALIGNMENT))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_EXT_bindable_uniform",
			&[
				("GL_MAX_VERTEX_BINDABLE_UNIFORMS_EXT", scalar(pname::MAX_VERTEX_BINDABLE_UNIFORMS_EXT)),
				("GL_MAX_FRAGMENT_BINDABLE_UNIFORMS_EXT", scalar(pname::MAX_FRAGMENT_BINDABLE_UNIFORMS_EXT)),
				("GL_MAX_GEOMETRY_BINDABLE_UNIFORMS_EXT", scalar(pname::MAX_GEOMETRY_BINDABLE_UNIFORMS_EXT)),
				("GL_MAX_BINDABLE_UNIFORM_SIZE_EXT", scalar(pname::MAX_BINDABLE_UNIFORM_SIZE_EXT)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_EXT_geometry_shader4",
			&[
				("GL_MAX_VARYING_COMPONENTS_EXT", scalar(pname::MAX_VARYING_COMPONENTS_EXT)),
				("GL_MAX_GEOMETRY_TEXTURE_IMAGE_UNITS_EXT", scalar(pname::MAX_GEOMETRY_TEXTURE_IMAGE_UNITS_EXT)),
				("GL_MAX_GEOMETRY_VARYING_COMPONENTS_EXT", scalar(pname::MAX_GEOMETRY_VARYING_COMPONENTS_EXT)),
				("GL_MAX_VERTEX_VARYING_COMPONENTS_EXT", scalar(pname::MAX_VERTEX_VARYING_COMPONENTS_EXT)),
				("GL_MAX_GEOMETRY_UNIFORM_COMPONENTS_EXT", scalar(pname::MAX_GEOMETRY_UNIFORM_COMPONENTS_EXT)),
				("GL_MAX_GEOMETRY_OUTPUT_VERTICES_EXT", scalar(pname::MAX_GEOMETRY_OUTPUT_VERTICES_EXT)),
				("GL_MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS_EXT", scalar(pname::MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS_EXT)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_EXT_framebuffer_object",
			&[
				("GL_MAX_RENDERBUFFER_SIZE_EXT", scalar(pname::MAX_RENDERBUFFER_SIZE_EXT)),
				("GL_MAX_COLOR_ATTACHMENTS_EXT", scalar(pname::MAX_COLOR_ATTACHMENTS_EXT)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_EXT_texture3D",
			&[("GL_MAX_3D_TEXTURE_SIZE_EXT", scalar(pname::MAX_3D_TEXTURE_SIZE_EXT))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_texture_compression",
			&[("GL_NUM_COMPRESSED_TEXTURE_FORMATS_ARB", scalar(pname::NUM_COMPRESSED_TEXTURE_FORMATS_ARB))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_vertex_attrib_binding",
			&[
				("GL_MAX_VERTEX_ATTRIB_RELATIVE_OFFSET", scalar(gl::MAX_VERTEX_ATTRIB_RELATIVE_OFFSET)),
				("GL_MAX_VERTEX_ATTRIB_BINDINGS", scalar(gl::MAX_VERTEX_ATTRIB_BINDINGS)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_texture_buffer_range",
			&[("GL_TEXTURE_BUFFER_OFFSET_ALIGNMENT", scalar(gl::TEXTURE_BUFFER_OFFSET_ALIGNMENT))],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_vertex_program",
			&[
				("GL_MAX_PROGRAM_MATRIX_STACK_DEPTH_ARB", scalar(pname::MAX_PROGRAM_MATRIX_STACK_DEPTH_ARB)),
				("GL_MAX_PROGRAM_MATRICES_ARB", scalar(pname::MAX_PROGRAM_MATRICES_ARB)),
				("GL_MAX_VERTEX_ATTRIBS_ARB", scalar(pname::MAX_VERTEX_ATTRIBS_ARB)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_EXT_raster_multisample",
			&[],
			&[("GL_MAX_RASTER_SAMPLES_EXT", scalar(pname::MAX_RASTER_SAMPLES_EXT))],
			&[],
		),
		ExtensionEntry::new(
			"GL_OVR_multiview",
			&[],
			&[("GL_MAX_VIEWS_OVR", scalar(pname::MAX_VIEWS_OVR))],
			&[],
		),
		ExtensionEntry::new(
			"GL_KHR_debug",
			&[
				("GL_MAX_DEBUG_GROUP_STACK_DEPTH", scalar(gl::MAX_DEBUG_GROUP_STACK_DEPTH)),
				("GL_MAX_LABEL_LENGTH", scalar(gl::MAX_LABEL_LENGTH)),
				("GL_MAX_DEBUG_MESSAGE_LENGTH", scalar(gl::MAX_DEBUG_MESSAGE_LENGTH)),
				("GL_MAX_DEBUG_LOGGED_MESSAGES", scalar(gl::MAX_DEBUG_LOGGED_MESSAGES)),
			],
			&[],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_sync",
			&[],
			&[("GL_MAX_SERVER_WAIT_TIMEOUT", scalar(gl::MAX_SERVER_WAIT_TIMEOUT))],
			&[],
		),
		ExtensionEntry::new(
			"GL_SGIX_async_histogram",
			&[],
			&[("GL_MAX_ASYNC_HISTOGRAM_SGIX", scalar(pname::MAX_ASYNC_HISTOGRAM_SGIX))],
			&[],
		),
		ExtensionEntry::new(
			"GL_ARB_polygon_offset_clamp",
			&[],
			&[],
			&[("GL_POLYGON_OFFSET_CLAMP", scalar(pname::POLYGON_OFFSET_CLAMP))],
		),
	]
}

#[cfg(test)]
mod test;
