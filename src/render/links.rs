//! Reference and image URL resolution.
//!
//! Both resolutions are purely string-level: no network validation, no
//! slash normalization. Reference targets that are site-relative (leading
//! `/`, the form produced for cross-document references) can only become
//! hyperlinks when a resolver base URL is configured; everything else
//! passes through as-is.

use super::RenderParams;

/// Outcome of resolving a reference target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefTarget {
    /// Render as a hyperlink to this absolute URL.
    Link(String),
    /// Render as a plain inline element; there is nowhere to resolve the
    /// relative target to.
    Plain,
}

/// Decide whether a reference becomes a hyperlink, and to what URL.
pub fn resolve_ref(href: &str, params: &RenderParams) -> RefTarget {
    if href.starts_with('/') {
        if params.resolver_base_url.is_empty() {
            return RefTarget::Plain;
        }
        return RefTarget::Link(format!("{}{}", params.resolver_base_url, href));
    }

    // Already absolute, or a fragment/other form: pass through unchanged.
    RefTarget::Link(href.to_string())
}

/// Compute the absolute source URL for an embedded image.
///
/// The leading-slash branch concatenates without inserting a separator;
/// the bare-relative branch inserts one. The asymmetry is part of the
/// documented resolution rule and is preserved as-is.
pub fn resolve_image_src(src: &str, params: &RenderParams) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        return src.to_string();
    }
    if src.starts_with('/') {
        return format!("{}{}", params.manifestation_url, src);
    }
    format!("{}/{}", params.manifestation_url, src)
}
