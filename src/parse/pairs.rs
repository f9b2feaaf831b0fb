/*
 * SPDX-License-Identifier: Apache-2.0
 */

use indexmap::IndexMap;

use crate::encoding::decode_value;

/// Parse a `Cookie` or `Set-Cookie` header value into its raw pairs.
///
/// Pairs are separated by `;` plus any number of following spaces.
/// Insertion order is preserved; a duplicate key overwrites the earlier
/// value in place. A segment without `=` is a bare flag and maps to the
/// literal string `"true"`. A pair whose value fails strict percent
/// decoding is dropped, the remaining pairs still parse. Keys are stored
/// verbatim, case folding is up to the caller.
pub fn parse_cookie(header: &str) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for (i, segment) in header.split(';').enumerate() {
        // the separator eats spaces after a ';', never before one
        let segment = if i == 0 {
            segment
        } else {
            segment.trim_start_matches(' ')
        };
        if segment.is_empty() {
            continue;
        }
        match memchr::memchr(b'=', segment.as_bytes()) {
            None => {
                map.insert(segment.to_string(), "true".to_string());
            }
            Some(p) => {
                if let Ok(value) = decode_value(&segment[p + 1..]) {
                    map.insert(segment[..p].to_string(), value);
                }
            }
        }
    }
    map
}
