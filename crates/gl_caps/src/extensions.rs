// Copyright (C) 2024 the gl_caps authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

/// Whole-token test for `name` within a space-separated extension list.
///
/// Extension names never contain spaces, so a name that does (or an empty
/// name) matches nothing. A substring hit only counts when it is delimited
/// by a space or a string edge on both sides; anything else is a partial
/// overlap with a longer token and the scan resumes past it.
pub fn is_supported(name: &str, extensions: &str) -> bool {
	if name.is_empty() || name.contains(' ') {
		return false;
	}

	let bytes = extensions.as_bytes();
	let mut offset = 0;
	while let Some(position) = extensions[offset..].find(name) {
		let start = offset + position;
		let end = start + name.len();

		let open = start == 0 || bytes[start - 1] == b' ';
		let close = end == bytes.len() || bytes[end] == b' ';
		if open && close {
			return true;
		}

		offset = end;
	}

	false
}

#[cfg(test)]
mod test;
