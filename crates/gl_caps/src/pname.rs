// Copyright (C) 2024 the gl_caps authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Query parameters missing from the core-profile `gl` bindings.
//!
//! The `gl` crate is generated from the core 4.6 registry, which drops the
//! compatibility-profile limits and every vendor-suffixed enum. The registry
//! still catalogues those, so their values are carried here, taken from
//! `glext.h`. Some share a value with a core alias; constants are cheap.

use gl::types::GLenum;

// compatibility profile (GL 1.x fixed function)
pub const MAX_LIST_NESTING: GLenum = 0x0B31;
pub const MAX_EVAL_ORDER: GLenum = 0x0D30;
pub const MAX_LIGHTS: GLenum = 0x0D31;
pub const MAX_CLIP_PLANES: GLenum = 0x0D32;
pub const MAX_PIXEL_MAP_TABLE: GLenum = 0x0D34;
pub const MAX_ATTRIB_STACK_DEPTH: GLenum = 0x0D35;
pub const MAX_MODELVIEW_STACK_DEPTH: GLenum = 0x0D36;
pub const MAX_NAME_STACK_DEPTH: GLenum = 0x0D37;
pub const MAX_PROJECTION_STACK_DEPTH: GLenum = 0x0D38;
pub const MAX_TEXTURE_STACK_DEPTH: GLenum = 0x0D39;
pub const MAX_CLIENT_ATTRIB_STACK_DEPTH: GLenum = 0x0D3B;
pub const MAX_TEXTURE_UNITS: GLenum = 0x84E2;
pub const MAX_TEXTURE_COORDS: GLenum = 0x8871;
pub const MAX_VARYING_FLOATS: GLenum = 0x8B4B;
pub const MAX_VARYING_COMPONENTS: GLenum = 0x8B4B;

// GL_AMD_debug_output / GL_ARB_debug_output (share KHR_debug values)
pub const MAX_DEBUG_MESSAGE_LENGTH_AMD: GLenum = 0x9143;
pub const MAX_DEBUG_LOGGED_MESSAGES_AMD: GLenum = 0x9144;
pub const MAX_DEBUG_MESSAGE_LENGTH_ARB: GLenum = 0x9143;
pub const MAX_DEBUG_LOGGED_MESSAGES_ARB: GLenum = 0x9144;

// GL_AMD_sparse_texture / GL_ARB_sparse_texture
pub const MAX_SPARSE_TEXTURE_SIZE_AMD: GLenum = 0x9198;
pub const MAX_SPARSE_3D_TEXTURE_SIZE_AMD: GLenum = 0x9199;
pub const MAX_SPARSE_ARRAY_TEXTURE_LAYERS: GLenum = 0x919A;
pub const MAX_SPARSE_TEXTURE_SIZE_ARB: GLenum = 0x9198;
pub const MAX_SPARSE_3D_TEXTURE_SIZE_ARB: GLenum = 0x9199;
pub const MAX_SPARSE_ARRAY_TEXTURE_LAYERS_ARB: GLenum = 0x919A;

// GL_ARB_draw_buffers / GL_ARB_fragment_program / GL_ARB_fragment_shader
pub const MAX_DRAW_BUFFERS_ARB: GLenum = 0x8824;
pub const MAX_TEXTURE_COORDS_ARB: GLenum = 0x8871;
pub const MAX_TEXTURE_IMAGE_UNITS_ARB: GLenum = 0x8872;
pub const MAX_FRAGMENT_UNIFORM_COMPONENTS_ARB: GLenum = 0x8B49;

// GL_ARB_compute_variable_group_size
pub const MAX_COMPUTE_FIXED_GROUP_INVOCATIONS_ARB: GLenum = 0x90EB;
pub const MAX_COMPUTE_FIXED_GROUP_SIZE_ARB: GLenum = 0x91BF;
pub const MAX_COMPUTE_VARIABLE_GROUP_INVOCATIONS_ARB: GLenum = 0x9344;
pub const MAX_COMPUTE_VARIABLE_GROUP_SIZE_ARB: GLenum = 0x9345;

// GL_ARB_geometry_shader4 / GL_EXT_geometry_shader4
pub const MAX_GEOMETRY_TEXTURE_IMAGE_UNITS_ARB: GLenum = 0x8C29;
pub const MAX_GEOMETRY_VARYING_COMPONENTS_ARB: GLenum = 0x8DDD;
pub const MAX_VERTEX_VARYING_COMPONENTS_ARB: GLenum = 0x8DDE;
pub const MAX_GEOMETRY_UNIFORM_COMPONENTS_ARB: GLenum = 0x8DDF;
pub const MAX_GEOMETRY_OUTPUT_VERTICES_ARB: GLenum = 0x8DE0;
pub const MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS_ARB: GLenum = 0x8DE1;
pub const MAX_VARYING_COMPONENTS_EXT: GLenum = 0x8B4B;
pub const MAX_GEOMETRY_TEXTURE_IMAGE_UNITS_EXT: GLenum = 0x8C29;
pub const MAX_GEOMETRY_VARYING_COMPONENTS_EXT: GLenum = 0x8DDD;
pub const MAX_VERTEX_VARYING_COMPONENTS_EXT: GLenum = 0x8DDE;
pub const MAX_GEOMETRY_UNIFORM_COMPONENTS_EXT: GLenum = 0x8DDF;
pub const MAX_GEOMETRY_OUTPUT_VERTICES_EXT: GLenum = 0x8DE0;
pub const MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS_EXT: GLenum = 0x8DE1;

// GL_ARB_matrix_palette / GL_ARB_multitexture
pub const MAX_MATRIX_PALETTE_STACK_DEPTH_ARB: GLenum = 0x8841;
pub const MAX_PALETTE_MATRICES_ARB: GLenum = 0x8842;
pub const MAX_TEXTURE_UNITS_ARB: GLenum = 0x84E2;

// GL_ARB_parallel_shader_compile
pub const MAX_SHADER_COMPILER_THREADS_ARB: GLenum = 0x91B0;

// GL_EXT_bindable_uniform
pub const MAX_VERTEX_BINDABLE_UNIFORMS_EXT: GLenum = 0x8DE2;
pub const MAX_FRAGMENT_BINDABLE_UNIFORMS_EXT: GLenum = 0x8DE3;
pub const MAX_GEOMETRY_BINDABLE_UNIFORMS_EXT: GLenum = 0x8DE4;
pub const MAX_BINDABLE_UNIFORM_SIZE_EXT: GLenum = 0x8DED;

// GL_EXT_framebuffer_object / GL_EXT_framebuffer_multisample / GL_EXT_texture3D
pub const MAX_RENDERBUFFER_SIZE_EXT: GLenum = 0x84E8;
pub const MAX_COLOR_ATTACHMENTS_EXT: GLenum = 0x8CDF;
pub const MAX_SAMPLES_EXT: GLenum = 0x8D57;
pub const MAX_3D_TEXTURE_SIZE_EXT: GLenum = 0x8073;

// GL_ARB_texture_compression
pub const NUM_COMPRESSED_TEXTURE_FORMATS_ARB: GLenum = 0x86A2;

// GL_ARB_vertex_program
pub const MAX_PROGRAM_MATRIX_STACK_DEPTH_ARB: GLenum = 0x862E;
pub const MAX_PROGRAM_MATRICES_ARB: GLenum = 0x862F;
pub const MAX_VERTEX_ATTRIBS_ARB: GLenum = 0x8869;

// GL_ARB_spirv_extensions / GL_ARB_polygon_offset_clamp (core in 4.6,
// absent from the 4.5 registry the `gl` crate is generated from)
pub const NUM_SPIR_V_EXTENSIONS: GLenum = 0x9554;
pub const POLYGON_OFFSET_CLAMP: GLenum = 0x8E1B;

// GL_EXT_raster_multisample / GL_OVR_multiview / GL_SGIX_async_histogram
pub const MAX_RASTER_SAMPLES_EXT: GLenum = 0x9329;
pub const MAX_VIEWS_OVR: GLenum = 0x9631;
pub const MAX_ASYNC_HISTOGRAM_SGIX: GLenum = 0x832D;
