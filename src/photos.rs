//! Photo-listing JSON handling.
//!
//! The listing endpoint answers with a JSON document whose shape is not
//! pinned down beyond one promise: image URLs live in string fields named
//! `img_src`, at whatever depth the API nests them. So instead of modelling
//! the document, this module walks the whole `serde_json::Value` tree and
//! collects every `img_src` string in document order (`serde_json`'s
//! `preserve_order` feature keeps object fields in the order they arrived).
//!
//! A matched `img_src` node is collected, not descended into, and non-string
//! `img_src` values are skipped.

use serde_json::Value;

use crate::config::IMG_SRC_FIELD;
use crate::error::ProbeError;

/// Parses a listing body and returns every image URL in document order.
///
/// # Errors
///
/// Returns `ProbeError::Json` if the body is not valid JSON. A valid
/// document with no `img_src` fields is not an error here; it yields an
/// empty list, and the selection step reports that.
pub fn parse_listing(body: &str) -> Result<Vec<String>, ProbeError> {
    let document: Value = serde_json::from_str(body)?;
    Ok(collect_img_src(&document))
}

/// Collects all string values of `img_src` fields, depth-first, in
/// document order.
pub fn collect_img_src(document: &Value) -> Vec<String> {
    let mut urls = Vec::new();
    walk(document, &mut urls);
    urls
}

fn walk(value: &Value, urls: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key == IMG_SRC_FIELD {
                    if let Value::String(url) = child {
                        urls.push(url.clone());
                    }
                } else {
                    walk(child, urls);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, urls);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_photos_in_document_order() {
        let body = concat!(
            "{\"photos\":[",
            "{\"id\":1,\"img_src\":\"http://mars.local/img/1.jpg\"},",
            "{\"id\":2,\"img_src\":\"http://mars.local/img/2.jpg\"}",
            "]}"
        );
        let urls = parse_listing(body).unwrap();
        assert_eq!(
            urls,
            vec!["http://mars.local/img/1.jpg", "http://mars.local/img/2.jpg"]
        );
    }

    #[test]
    fn test_listing_with_no_photos_is_empty_not_an_error() {
        let urls = parse_listing("{\"photos\":[]}").unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_typed_error() {
        let result = parse_listing("{\"photos\":[");
        assert!(matches!(result, Err(ProbeError::Json(_))));
    }

    #[test]
    fn test_img_src_found_at_any_depth() {
        let document: Value = serde_json::from_str(
            "{\"a\":{\"b\":[{\"img_src\":\"http://h/deep.jpg\"}]},\"img_src\":\"http://h/top.jpg\"}",
        )
        .unwrap();
        assert_eq!(
            collect_img_src(&document),
            vec!["http://h/deep.jpg", "http://h/top.jpg"]
        );
    }

    #[test]
    fn test_sibling_keys_stay_in_document_order() {
        // Anti-alphabetical keys; a sorted map would flip these
        let document: Value = serde_json::from_str(
            "{\"z_first\":{\"img_src\":\"http://h/z.jpg\"},\"a_second\":{\"img_src\":\"http://h/a.jpg\"}}",
        )
        .unwrap();
        assert_eq!(
            collect_img_src(&document),
            vec!["http://h/z.jpg", "http://h/a.jpg"]
        );
    }

    #[test]
    fn test_duplicate_urls_are_kept() {
        let document: Value = serde_json::from_str(
            "[{\"img_src\":\"http://h/same.jpg\"},{\"img_src\":\"http://h/same.jpg\"}]",
        )
        .unwrap();
        assert_eq!(collect_img_src(&document).len(), 2);
    }

    #[test]
    fn test_non_string_img_src_is_skipped() {
        // Only string values can be URLs; numeric, boolean, and null
        // values are dropped outright, never coerced to text
        let document: Value = serde_json::from_str(
            "{\"img_src\":17,\"photos\":[{\"img_src\":true},{\"img_src\":null}]}",
        )
        .unwrap();
        assert!(collect_img_src(&document).is_empty());
    }

    #[test]
    fn test_matched_node_is_not_descended_into() {
        // The outer img_src is an object, so it is neither collected nor
        // searched; only the sibling field contributes
        let document: Value = serde_json::from_str(
            "{\"img_src\":{\"img_src\":\"http://h/inner.jpg\"},\"other\":{\"img_src\":\"http://h/outer.jpg\"}}",
        )
        .unwrap();
        assert_eq!(collect_img_src(&document), vec!["http://h/outer.jpg"]);
    }

    #[test]
    fn test_top_level_array_is_walked() {
        let document: Value = serde_json::from_str(
            "[{\"img_src\":\"http://h/a.jpg\"},{\"nested\":{\"img_src\":\"http://h/b.jpg\"}}]",
        )
        .unwrap();
        assert_eq!(
            collect_img_src(&document),
            vec!["http://h/a.jpg", "http://h/b.jpg"]
        );
    }

    #[test]
    fn test_scalar_document_yields_nothing() {
        let urls = parse_listing("42").unwrap();
        assert!(urls.is_empty());
    }
}
