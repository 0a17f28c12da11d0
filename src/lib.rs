//! # aknhtml
//!
//! A fast, lightweight library for rendering Akoma Ntoso style legal
//! document trees to HTML presentation trees.
//!
//! ## Features
//!
//! - Type-dispatched rendering rules for acts, structural groupings,
//!   numbered units, tirets, tables and inline markup
//! - Polish jurisdiction numbering and labelling conventions
//!   (Art./§ headings, CZĘŚĆ/KSIĘGA/DZIAŁ labels, superscript numbers)
//! - Cross-document id scoping for acts composed of multiple components
//! - String-level link and image URL resolution
//! - A small serializer from the presentation tree to markup
//!
//! ## Quick Start
//!
//! ```
//! use aknhtml::{Document, RenderParams, render};
//!
//! // The host supplies an already-parsed document tree.
//! let mut doc = Document::new("act");
//! let body = doc.append_element(doc.root(), "body");
//! let section = doc.append_element(body, "section");
//! doc.set_attr(section, "refersTo", "statute");
//! let num = doc.append_element(section, "num");
//! doc.append_text(num, "1");
//!
//! let params = RenderParams::default()
//!     .with_manifestation_url("https://example.org/akn/pl/act/2020/1/pol@");
//! let html = render(&doc, doc.root(), &params).unwrap();
//!
//! assert!(html.to_html().contains("Art. 1."));
//! ```
//!
//! ## Working with the output
//!
//! [`render`] produces an in-memory [`HtmlNode`] tree (tag, class,
//! attributes, children). Hosts that want markup call
//! [`HtmlNode::to_html`]; hosts with their own templating walk the tree
//! directly.

pub mod error;
pub mod html;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use html::{HtmlChild, HtmlNode};
pub use model::{Document, NodeId};
pub use render::{RenderParams, render};
