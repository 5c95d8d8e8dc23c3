use super::{entries, Fetch};

#[test]
fn names_are_valid_extension_tokens() {
	for entry in entries() {
		assert!(!entry.name.is_empty());
		assert!(!entry.name.contains(' '), "{} contains a space", entry.name);
	}
}

#[test]
fn names_are_unique() {
	let mut seen = std::collections::BTreeSet::new();
	for entry in entries() {
		assert!(seen.insert(entry.name), "{} registered twice", entry.name);
	}
}

#[test]
fn vector_limits_only_appear_in_the_int32_group() {
	for entry in entries() {
		for (label, capability) in entry.int64.iter().chain(&entry.float) {
			assert_eq!(capability.fetch, Fetch::Scalar, "{label} is not scalar");
		}
		for (label, capability) in &entry.int32 {
			if let Fetch::Packed(components) | Fetch::Indexed(components) = capability.fetch {
				assert!(components >= 2, "{label} is multi-value with arity {components}");
			}
		}
	}
}

#[test]
fn cull_distance_entry_carries_two_int32_limits() {
	let entry = entries()
		.iter()
		.find(|entry| entry.name == "GL_ARB_cull_distance")
		.expect("GL_ARB_cull_distance registered");

	assert_eq!(entry.int32.len(), 2);
	assert!(entry.int32.contains_key("GL_MAX_CULL_DISTANCES"));
	assert!(entry.int32.contains_key("GL_MAX_COMBINED_CLIP_AND_CULL_DISTANCES"));
	assert!(entry.int64.is_empty());
	assert!(entry.float.is_empty());
}

#[test]
fn work_group_limits_are_triples() {
	let entry = entries()
		.iter()
		.find(|entry| entry.name == "GL_ARB_compute_shader")
		.expect("GL_ARB_compute_shader registered");

	assert_eq!(entry.int32["GL_MAX_COMPUTE_WORK_GROUP_COUNT"].fetch, Fetch::Indexed(3));
	assert_eq!(entry.int32["GL_MAX_COMPUTE_WORK_GROUP_SIZE"].fetch, Fetch::Indexed(3));
}

// GL_MAX_VIEWPORT_DIMS answers a plain query with a width/height pair, so
// its scratch must hold two values; it is not an indexed parameter.
#[test]
fn viewport_dims_are_a_packed_pair() {
	let entry = entries()
		.iter()
		.find(|entry| entry.name == "GL_VERSION_1_1")
		.expect("GL_VERSION_1_1 registered");

	assert_eq!(entry.int32["GL_MAX_VIEWPORT_DIMS"].fetch, Fetch::Packed(2));
}
