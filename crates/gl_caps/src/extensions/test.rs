use super::is_supported;

#[test]
fn rejects_empty_and_spaced_names() {
	assert!(!is_supported("", "GL_A GL_B"));
	assert!(!is_supported("GL_A GL_B", "GL_A GL_B"));
	assert!(!is_supported(" ", " "));
}

#[test]
fn matches_whole_tokens_only() {
	let extensions = "GL_A GL_B GL_C";

	assert!(is_supported("GL_A", extensions));
	assert!(is_supported("GL_B", extensions));
	assert!(is_supported("GL_C", extensions));

	// prefixes and boundary overlaps are not tokens
	assert!(!is_supported("GL_", extensions));
	assert!(!is_supported("GL_AB", extensions));
	assert!(!is_supported("GL_BC", extensions));
}

#[test]
fn matches_at_string_edges() {
	assert!(is_supported("GL_X", "GL_X"));
	assert!(is_supported("GL_X", "GL_X GL_Y"));
	assert!(is_supported("GL_Y", "GL_X GL_Y"));
}

#[test]
fn resumes_scan_past_partial_overlaps() {
	// first occurrence is embedded in a longer token, second is a real token
	assert!(is_supported("GL_ext", "GL_ext_longer GL_ext"));
	assert!(!is_supported("GL_ext", "GL_ext_longer prefix_GL_ext"));
}

#[test]
fn repeated_prefixes_do_not_confuse_the_scan() {
	assert!(is_supported("GL_AA", "GL_AAA GL_AA"));
	assert!(!is_supported("GL_AA", "GL_AAA GL_AAAA"));
}

#[test]
fn empty_extension_list_supports_nothing() {
	assert!(!is_supported("GL_A", ""));
}
