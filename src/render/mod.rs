//! Document rendering.
//!
//! This module contains:
//! - [`RenderParams`]: immutable per-render configuration
//! - [`render`]: the entry point transforming an input tree into a
//!   presentation tree
//! - The rendering rules (engine), numbering, id scoping and URL
//!   resolution they are built from
//!
//! A render is a pure, synchronous tree walk: no I/O, no shared mutable
//! state. Renders of different documents (or of one document with
//! different parameters) are fully independent and may run on parallel
//! workers; the input tree is only read.

mod engine;
mod labels;
mod links;
mod number;
mod scope;

pub use labels::{Grouping, PartKind, SectionKind, SubsectionKind};
pub use links::{RefTarget, resolve_image_src, resolve_ref};
pub use number::{NumberParts, parse_number};
pub use scope::scoped_id;

use crate::error::Result;
use crate::html::HtmlNode;
use crate::model::{Document, NodeId};

use engine::Engine;

/// Immutable configuration for one render call.
///
/// Constructed before a render, read-only during it.
///
/// # Example
///
/// ```
/// use aknhtml::RenderParams;
///
/// let params = RenderParams::default()
///     .with_resolver_base_url("https://resolver.example.org")
///     .with_manifestation_url("https://example.org/akn/pl/act/2020/1/pol@")
///     .with_language("pol");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderParams {
    /// Base URL prefixed onto site-relative reference targets. Empty
    /// disables linking of relative references.
    pub resolver_base_url: String,
    /// Fallback scope prefix for identity attributes lacking an enclosing
    /// named component.
    pub default_id_scope: String,
    /// Base URL for resolving relative image sources.
    pub manifestation_url: String,
    /// The document's 3-letter language code. Informational: emitted as a
    /// `lang` attribute on the root container and used nowhere else.
    pub language: String,
}

impl RenderParams {
    /// Create parameters with all fields empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolver base URL.
    pub fn with_resolver_base_url(mut self, url: impl Into<String>) -> Self {
        self.resolver_base_url = url.into();
        self
    }

    /// Set the default id scope.
    pub fn with_default_id_scope(mut self, scope: impl Into<String>) -> Self {
        self.default_id_scope = scope.into();
        self
    }

    /// Set the manifestation base URL for images.
    pub fn with_manifestation_url(mut self, url: impl Into<String>) -> Self {
        self.manifestation_url = url.into();
        self
    }

    /// Set the document language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Transform the input tree rooted at `root` into a presentation tree.
///
/// The transform is total over well-formed trees: unknown element names
/// fall back to a generic rule and never fail. The only error condition is
/// malformed input (an element with an empty name, or a `root` that is not
/// an element of `doc`), which aborts the whole render — no partial output
/// is produced.
pub fn render(doc: &Document, root: NodeId, params: &RenderParams) -> Result<HtmlNode> {
    Engine::new(doc, params).render(root)
}
