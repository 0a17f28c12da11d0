//! Presentation tree and HTML serialization.
//!
//! - [`HtmlNode`] / [`HtmlChild`]: output nodes produced by the renderer
//! - [`to_html`]: recursive printer with escaping

mod node;
mod serialize;

pub use node::{HtmlChild, HtmlNode};
pub use serialize::{escape_attr, escape_text, to_html};

impl HtmlNode {
    /// Serialize this node and its children to an HTML string.
    pub fn to_html(&self) -> String {
        to_html(self)
    }
}
