//! The tree transform engine.
//!
//! Walks the input tree depth-first and dispatches each element to a
//! rendering rule by element name, with `refersTo` / `num` discriminators
//! resolved inside the rules. Unknown elements always fall through to the
//! generic rule; the only hard failure is an element with an empty name.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::html::{HtmlChild, HtmlNode};
use crate::model::{Document, NodeData, NodeId};

use super::RenderParams;
use super::labels::{Grouping, PartKind, SectionKind, SubsectionKind, TIRET_DASH, tiret_depth};
use super::links::{RefTarget, resolve_image_src, resolve_ref};
use super::number::parse_number;
use super::scope::scoped_id;

/// The identity attribute on input nodes.
const ID_ATTR: &str = "id";

/// Top-level sections of an act, in display order.
const ACT_SECTIONS: &[&str] = &[
    "coverPage",
    "preface",
    "preamble",
    "body",
    "mainBody",
    "conclusions",
];

/// Rendering rule selected for an element name.
///
/// One variant per dispatch case, with an explicit [`Rule::Fallback`]
/// default, so the dispatch table is testable as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// Root document unit (`act`).
    Act,
    /// Structural grouping with a labelled heading.
    Grouping(Grouping),
    /// Numbered main unit (`section`): "Art." or "§".
    Section,
    /// Level-1 sub-unit (`subsection`).
    Subsection,
    /// Tiret indent unit.
    Indent,
    /// Named generic block (`intro`, `point`, ...).
    Block,
    /// Named sub-document container (`doc`).
    SubDocument,
    /// Component wrapper around a sub-document.
    Component,
    /// Top-level section with synthesized identity.
    FrontMatter,
    /// Cross-reference.
    Ref,
    /// Embedded image.
    Image,
    /// Literal HTML passthrough.
    Passthrough,
    /// Line break leaf.
    LineBreak,
    /// Generic fallback for everything else.
    Fallback,
}

impl Rule {
    /// Select the rule for an element name.
    pub(crate) fn for_element(name: &str) -> Rule {
        if let Some(level) = Grouping::from_element(name) {
            return Rule::Grouping(level);
        }
        match name {
            "act" => Rule::Act,
            "section" => Rule::Section,
            "subsection" => Rule::Subsection,
            "indent" => Rule::Indent,
            "intro" | "point" | "paragraph" | "subparagraph" | "list" | "wrapUp" => Rule::Block,
            "doc" => Rule::SubDocument,
            "component" => Rule::Component,
            "coverPage" | "preface" | "preamble" | "conclusions" => Rule::FrontMatter,
            "ref" => Rule::Ref,
            "img" => Rule::Image,
            "table" | "tr" | "th" | "td" | "a" | "abbr" | "b" | "i" | "span" | "sub" | "sup"
            | "u" => Rule::Passthrough,
            "br" => Rule::LineBreak,
            _ => Rule::Fallback,
        }
    }
}

/// One render walk over a document.
pub(crate) struct Engine<'a> {
    doc: &'a Document,
    params: &'a RenderParams,
}

impl<'a> Engine<'a> {
    pub(crate) fn new(doc: &'a Document, params: &'a RenderParams) -> Self {
        Self { doc, params }
    }

    /// Transform the tree rooted at `root` into a presentation tree.
    pub(crate) fn render(&self, root: NodeId) -> Result<HtmlNode> {
        let node = self.doc.node(root).ok_or(Error::InvalidRoot(root))?;
        if !node.is_element() {
            return Err(Error::InvalidRoot(root));
        }

        debug!(nodes = self.doc.node_count(), "rendering document tree");

        match self.transform(root)? {
            HtmlChild::Element(out) => Ok(out),
            // Unreachable: the root was checked to be an element above.
            HtmlChild::Text(_) => Err(Error::InvalidRoot(root)),
        }
    }

    fn transform(&self, id: NodeId) -> Result<HtmlChild> {
        let Some(node) = self.doc.node(id) else {
            return Ok(HtmlChild::Text(String::new()));
        };

        let name = match &node.data {
            NodeData::Text(text) => return Ok(HtmlChild::Text(text.clone())),
            NodeData::Element { name, .. } => name.as_str(),
        };

        if name.is_empty() {
            return Err(Error::MalformedNode {
                path: self.node_path(id),
            });
        }

        let out = match Rule::for_element(name) {
            Rule::Act => self.act(id)?,
            Rule::Grouping(level) => self.grouping(id, name, level)?,
            Rule::Section => self.section(id)?,
            Rule::Subsection => self.subsection(id)?,
            Rule::Indent => self.indent(id)?,
            Rule::Block => self.block(id, name)?,
            Rule::SubDocument => self.sub_document(id)?,
            Rule::Component => self.component(id)?,
            Rule::FrontMatter => self.front_matter(id, name)?,
            Rule::Ref => self.reference(id)?,
            Rule::Image => self.image(id),
            Rule::Passthrough => self.passthrough(id, name)?,
            Rule::LineBreak => self.line_break(id),
            Rule::Fallback => {
                trace!(element = name, "no dedicated rule, using generic fallback");
                self.fallback(id, name)?
            }
        };

        Ok(HtmlChild::Element(out))
    }

    // ------------------------------------------------------------------
    // Rules
    // ------------------------------------------------------------------

    /// `act`: one container wrapping the top-level sections in display
    /// order. `meta` and anything not named in [`ACT_SECTIONS`] is skipped.
    fn act(&self, id: NodeId) -> Result<HtmlNode> {
        let mut out = HtmlNode::with_class("article", "akn-act");
        self.copy_attrs_generic(id, &mut out);
        if !self.params.language.is_empty() {
            out.set_attr("lang", self.params.language.clone());
        }

        for &section in ACT_SECTIONS {
            if let Some(child) = self.doc.find_child(id, section) {
                out.children.push(self.transform(child)?);
            }
        }

        Ok(out)
    }

    /// Structural groupings: section wrapper plus an `<h2>` built from the
    /// level's label word, the unit's number and its heading text. For
    /// `part` the number value selects the kind word instead.
    fn grouping(&self, id: NodeId, name: &str, level: Grouping) -> Result<HtmlNode> {
        let mut out = HtmlNode::with_class("section", format!("akn-{}", name));
        self.copy_attrs_generic(id, &mut out);

        let num = self.doc.find_child(id, "num");
        let heading = self.doc.find_child(id, "heading");

        let mut h = HtmlNode::new("h2");
        match level {
            Grouping::Part => {
                let raw = num
                    .map(|n| self.doc.text_content(n))
                    .unwrap_or_default();
                let kind = PartKind::from_num(raw.trim());
                h.push_text(format!("{} {}", level.label(), kind.label()));
            }
            _ => match num {
                Some(n) => {
                    let raw = self.doc.text_content(n);
                    h.push_text(format!("{} {}", level.label(), raw.trim()));
                }
                None => h.push_text(level.label()),
            },
        }
        if let Some(heading) = heading {
            let text = self.doc.text_content(heading);
            if !text.is_empty() {
                h.push(HtmlNode::new("br"));
                h.push_text(text);
            }
        }
        out.push(h);

        for child in self.doc.children(id) {
            if Some(child) == num || Some(child) == heading {
                continue;
            }
            out.children.push(self.transform(child)?);
        }

        Ok(out)
    }

    /// `section`: the numbered main unit. "Art. N." for statutes, "§ N."
    /// for ordinances; the number node is consumed by the heading.
    fn section(&self, id: NodeId) -> Result<HtmlNode> {
        let kind = SectionKind::from_refers_to(self.doc.attr(id, "refersTo"));

        let mut out = HtmlNode::with_class("section", "akn-section");
        self.copy_attrs_generic(id, &mut out);

        let num = self.doc.find_child(id, "num");
        let raw = num.map(|n| self.doc.text_content(n)).unwrap_or_default();

        let mut h = HtmlNode::new("h3");
        h.push_text(format!("{} ", kind.prefix()));
        self.push_number(&mut h, raw.trim());
        out.push(h);

        for child in self.doc.children(id) {
            if Some(child) == num {
                continue;
            }
            out.children.push(self.transform(child)?);
        }

        Ok(out)
    }

    /// `subsection`: the level-1 sub-unit. Code-style units always get a
    /// "§ N." heading; noncode units get a plain "N." heading only when
    /// the number is non-empty.
    fn subsection(&self, id: NodeId) -> Result<HtmlNode> {
        let kind = SubsectionKind::from_refers_to(self.doc.attr(id, "refersTo"));

        let mut out = HtmlNode::with_class("div", "akn-subsection");
        self.copy_attrs_generic(id, &mut out);

        let num = self.doc.find_child(id, "num");
        let raw = num.map(|n| self.doc.text_content(n)).unwrap_or_default();
        let raw = raw.trim();

        match kind {
            SubsectionKind::Code => {
                let mut h = HtmlNode::new("h4");
                h.push_text("§ ");
                self.push_number(&mut h, raw);
                out.push(h);
            }
            SubsectionKind::Noncode => {
                if !raw.is_empty() {
                    let mut h = HtmlNode::new("h4");
                    self.push_number(&mut h, raw);
                    out.push(h);
                }
            }
        }

        for child in self.doc.children(id) {
            if Some(child) == num {
                continue;
            }
            out.children.push(self.transform(child)?);
        }

        Ok(out)
    }

    /// `indent`: tiret unit. One, two or three dash markers precede the
    /// unit's content, per the `refersTo` depth.
    fn indent(&self, id: NodeId) -> Result<HtmlNode> {
        let depth = tiret_depth(self.doc.attr(id, "refersTo"));

        let mut out = HtmlNode::with_class("div", "akn-indent");
        self.copy_attrs_generic(id, &mut out);

        let mut marker = HtmlNode::with_class("span", "akn-indent-marker");
        marker.push_text(vec![TIRET_DASH; depth].join(" "));
        out.push(marker);
        out.push_text(" ");

        self.transform_children(id, &mut out)?;
        Ok(out)
    }

    /// Named generic blocks (`intro`, `point`, `paragraph`, ...).
    fn block(&self, id: NodeId, name: &str) -> Result<HtmlNode> {
        let mut out = HtmlNode::with_class("div", format!("akn-{}", name));
        self.copy_attrs_generic(id, &mut out);
        self.transform_children(id, &mut out)?;
        Ok(out)
    }

    /// `doc`: a named sub-document. Identity comes from the `name`
    /// attribute (or the local name when unnamed); the heading, when the
    /// document metadata carries an alias, from `FRBRalias/@value`.
    fn sub_document(&self, id: NodeId) -> Result<HtmlNode> {
        let mut out = HtmlNode::with_class("div", "akn-doc");
        self.copy_attrs_generic(id, &mut out);

        if self.doc.attr(id, ID_ATTR).is_none() {
            let raw = match self.doc.attr(id, "name") {
                Some(name) if !name.is_empty() => name,
                _ => "doc",
            };
            out.set_attr("id", scoped_id(self.doc, id, raw, self.params));
        }

        let meta = self.doc.find_child(id, "meta");
        if let Some(meta) = meta
            && let Some(alias) = self.doc.find_descendant(meta, "FRBRalias")
            && let Some(value) = self.doc.attr(alias, "value")
            && !value.is_empty()
        {
            let mut h = HtmlNode::new("h2");
            h.push_text(value);
            out.push(h);
        }

        for child in self.doc.children(id) {
            if Some(child) == meta {
                continue;
            }
            out.children.push(self.transform(child)?);
        }

        Ok(out)
    }

    /// `component`: wrapper around a sub-document, with a synthesized
    /// identity like the top-level sections.
    fn component(&self, id: NodeId) -> Result<HtmlNode> {
        let mut out = HtmlNode::with_class("div", "akn-component");
        self.copy_attrs_generic(id, &mut out);
        self.synthesize_id(id, "component", &mut out);
        self.transform_children(id, &mut out)?;
        Ok(out)
    }

    /// Top-level sections (`coverPage`, `preface`, `preamble`,
    /// `conclusions`): synthesized scoped identity equal to the element
    /// name, then a spacing marker after the content.
    fn front_matter(&self, id: NodeId, name: &str) -> Result<HtmlNode> {
        let mut out = HtmlNode::with_class("div", format!("akn-{}", name));
        self.copy_attrs_generic(id, &mut out);
        self.synthesize_id(id, name, &mut out);
        self.transform_children(id, &mut out)?;
        out.push(HtmlNode::new("br"));
        Ok(out)
    }

    /// `ref`: hyperlink when the target resolves, plain span otherwise.
    /// Other attributes are copied verbatim; the raw target is kept as
    /// `data-href` in both outcomes.
    fn reference(&self, id: NodeId) -> Result<HtmlNode> {
        let href = self.doc.attr(id, "href").unwrap_or("");

        let mut out = match resolve_ref(href, self.params) {
            RefTarget::Link(url) => {
                let mut out = HtmlNode::with_class("a", "akn-ref");
                out.set_attr("href", url);
                out
            }
            RefTarget::Plain => HtmlNode::with_class("span", "akn-ref"),
        };
        out.set_attr("data-href", href);
        self.copy_attrs_verbatim(id, &mut out, &["href"]);

        self.transform_children(id, &mut out)?;
        Ok(out)
    }

    /// `img`: resolved `src` plus the original as `data-src`; other
    /// attributes verbatim. Images are leaves.
    fn image(&self, id: NodeId) -> HtmlNode {
        let src = self.doc.attr(id, "src").unwrap_or("");

        let mut out = HtmlNode::with_class("img", "akn-img");
        out.set_attr("src", resolve_image_src(src, self.params));
        out.set_attr("data-src", src);
        self.copy_attrs_verbatim(id, &mut out, &["src"]);
        out
    }

    /// Literal HTML passthrough: same tag, attributes unprefixed, identity
    /// still scoped.
    fn passthrough(&self, id: NodeId, name: &str) -> Result<HtmlNode> {
        let mut out = HtmlNode::new(name);
        self.copy_attrs_passthrough(id, &mut out);
        self.transform_children(id, &mut out)?;
        Ok(out)
    }

    /// `br`: leaf, no children.
    fn line_break(&self, id: NodeId) -> HtmlNode {
        let mut out = HtmlNode::new("br");
        self.copy_attrs_passthrough(id, &mut out);
        out
    }

    /// Generic fallback: wrapping element with a class named after the
    /// element, generic attribute copy, recurse into children.
    fn fallback(&self, id: NodeId, name: &str) -> Result<HtmlNode> {
        let mut out = HtmlNode::with_class("span", format!("akn-{}", name));
        self.copy_attrs_generic(id, &mut out);
        self.transform_children(id, &mut out)?;
        Ok(out)
    }

    // ------------------------------------------------------------------
    // Shared helpers
    // ------------------------------------------------------------------

    fn transform_children(&self, id: NodeId, out: &mut HtmlNode) -> Result<()> {
        for child in self.doc.children(id) {
            out.children.push(self.transform(child)?);
        }
        Ok(())
    }

    /// Render a parsed unit number plus its trailing period.
    fn push_number(&self, out: &mut HtmlNode, raw: &str) {
        let parts = parse_number(raw);
        if !parts.main.is_empty() {
            out.push_text(parts.main);
        }
        if let Some(sup) = parts.superscript {
            let mut sup_node = HtmlNode::new("sup");
            sup_node.push_text(sup);
            out.push(sup_node);
        }
        out.push_text(".");
    }

    /// Generic attribute copy: identity is scoped and mirrored as
    /// `data-id`, everything else goes under a `data-` prefix. Runs before
    /// any recursion so a node's scoping context is established first.
    fn copy_attrs_generic(&self, id: NodeId, out: &mut HtmlNode) {
        for (name, value) in self.doc.attrs(id) {
            if name == ID_ATTR {
                out.set_attr("id", scoped_id(self.doc, id, value, self.params));
                out.set_attr("data-id", value.clone());
            } else {
                out.set_attr(format!("data-{}", name), value.clone());
            }
        }
    }

    /// Verbatim attribute copy, skipping the listed names.
    fn copy_attrs_verbatim(&self, id: NodeId, out: &mut HtmlNode, skip: &[&str]) {
        for (name, value) in self.doc.attrs(id) {
            if skip.contains(&name.as_str()) {
                continue;
            }
            out.set_attr(name.clone(), value.clone());
        }
    }

    /// Passthrough attribute copy: verbatim, except the identity attribute
    /// which is still scoped and mirrored.
    fn copy_attrs_passthrough(&self, id: NodeId, out: &mut HtmlNode) {
        for (name, value) in self.doc.attrs(id) {
            if name == ID_ATTR {
                out.set_attr("id", scoped_id(self.doc, id, value, self.params));
                out.set_attr("data-id", value.clone());
            } else {
                out.set_attr(name.clone(), value.clone());
            }
        }
    }

    /// Synthesize a scoped identity from a raw id when the element carries
    /// no explicit one.
    fn synthesize_id(&self, id: NodeId, raw: &str, out: &mut HtmlNode) {
        if self.doc.attr(id, ID_ATTR).is_none() {
            out.set_attr("id", scoped_id(self.doc, id, raw, self.params));
        }
    }

    /// Path of a node for error reporting: ancestor names joined by `/`,
    /// with sibling ordinals on everything below the root.
    fn node_path(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.doc.node(node_id);
            let label = match node.and_then(|n| n.name()) {
                Some(name) if !name.is_empty() => name.to_string(),
                Some(_) => "?".to_string(),
                None => "#text".to_string(),
            };
            let parent = node.and_then(|n| n.parent);
            match parent {
                Some(_) => parts.push(format!("{}[{}]", label, self.doc.sibling_index(node_id))),
                None => parts.push(label),
            }
            current = parent;
        }
        parts.reverse();
        parts.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    fn render_one(doc: &Document, params: &RenderParams) -> HtmlNode {
        Engine::new(doc, params).render(doc.root()).unwrap()
    }

    #[test]
    fn test_dispatch_table() {
        assert_eq!(Rule::for_element("act"), Rule::Act);
        assert_eq!(Rule::for_element("part"), Rule::Grouping(Grouping::Part));
        assert_eq!(
            Rule::for_element("chapter"),
            Rule::Grouping(Grouping::Chapter)
        );
        assert_eq!(Rule::for_element("section"), Rule::Section);
        assert_eq!(Rule::for_element("subsection"), Rule::Subsection);
        assert_eq!(Rule::for_element("indent"), Rule::Indent);
        assert_eq!(Rule::for_element("point"), Rule::Block);
        assert_eq!(Rule::for_element("wrapUp"), Rule::Block);
        assert_eq!(Rule::for_element("doc"), Rule::SubDocument);
        assert_eq!(Rule::for_element("component"), Rule::Component);
        assert_eq!(Rule::for_element("preamble"), Rule::FrontMatter);
        assert_eq!(Rule::for_element("ref"), Rule::Ref);
        assert_eq!(Rule::for_element("img"), Rule::Image);
        assert_eq!(Rule::for_element("table"), Rule::Passthrough);
        assert_eq!(Rule::for_element("sup"), Rule::Passthrough);
        assert_eq!(Rule::for_element("br"), Rule::LineBreak);
        assert_eq!(Rule::for_element("frobnicate"), Rule::Fallback);
    }

    #[test]
    fn test_section_statute_heading() {
        let mut doc = Document::new("section");
        doc.set_attr(doc.root(), "refersTo", "statute");
        let num = doc.append_element(doc.root(), "num");
        doc.append_text(num, "5");

        let out = render_one(&doc, &RenderParams::default());
        let h = out.find("h3").unwrap();
        assert_eq!(h.text_content(), "Art. 5.");
    }

    #[test]
    fn test_section_ordinance_heading() {
        let mut doc = Document::new("section");
        doc.set_attr(doc.root(), "refersTo", "ordinance");
        let num = doc.append_element(doc.root(), "num");
        doc.append_text(num, "12");

        let out = render_one(&doc, &RenderParams::default());
        assert_eq!(out.find("h3").unwrap().text_content(), "§ 12.");
    }

    #[test]
    fn test_section_superscript_number() {
        let mut doc = Document::new("section");
        let num = doc.append_element(doc.root(), "num");
        doc.append_text(num, "5^1");

        let out = render_one(&doc, &RenderParams::default());
        let h = out.find("h3").unwrap();
        assert_eq!(h.to_html(), "<h3>Art. 5<sup>1</sup>.</h3>");
    }

    #[test]
    fn test_section_num_not_recursed() {
        let mut doc = Document::new("section");
        let num = doc.append_element(doc.root(), "num");
        doc.append_text(num, "5");
        let content = doc.append_element(doc.root(), "content");
        doc.append_text(content, "tekst");

        let out = render_one(&doc, &RenderParams::default());
        // The number must appear once (in the heading), not again as a
        // generic akn-num child.
        assert!(out.find_class("akn-num").is_none());
        assert!(out.find_class("akn-content").is_some());
    }

    #[test]
    fn test_part_kind_labels() {
        for (value, expected) in [
            ("ogolna", "CZĘŚĆ OGÓLNA"),
            ("szczegolna", "CZĘŚĆ SZCZEGÓLNA"),
            ("wojskowa", "CZĘŚĆ WOJSKOWA"),
            ("xyz", "CZĘŚĆ [UNKNOWN TYPE]"),
        ] {
            let mut doc = Document::new("part");
            let num = doc.append_element(doc.root(), "num");
            doc.append_text(num, value);

            let out = render_one(&doc, &RenderParams::default());
            assert_eq!(out.find("h2").unwrap().text_content(), expected);
        }
    }

    #[test]
    fn test_grouping_heading_and_recursion() {
        let mut doc = Document::new("division");
        let num = doc.append_element(doc.root(), "num");
        doc.append_text(num, "I");
        let heading = doc.append_element(doc.root(), "heading");
        doc.append_text(heading, "Przepisy ogólne");
        let chapter = doc.append_element(doc.root(), "chapter");
        let cnum = doc.append_element(chapter, "num");
        doc.append_text(cnum, "1");

        let out = render_one(&doc, &RenderParams::default());
        assert_eq!(out.tag, "section");
        assert_eq!(out.class, "akn-division");

        let h = out.find("h2").unwrap();
        assert_eq!(h.text_content(), "DZIAŁ IPrzepisy ogólne");
        assert!(h.find("br").is_some());

        let chapter_out = out.find_class("akn-chapter").unwrap();
        assert_eq!(chapter_out.find("h2").unwrap().text_content(), "Rozdział 1");
        // num/heading consumed by the heading, not rendered again.
        assert!(out.find_class("akn-num").is_none());
        assert!(out.find_class("akn-heading").is_none());
    }

    #[test]
    fn test_subsection_code_always_has_heading() {
        let mut doc = Document::new("subsection");
        doc.set_attr(doc.root(), "refersTo", "code_level1_unit");
        let num = doc.append_element(doc.root(), "num");
        doc.append_text(num, "2");

        let out = render_one(&doc, &RenderParams::default());
        assert_eq!(out.find("h4").unwrap().text_content(), "§ 2.");
    }

    #[test]
    fn test_subsection_noncode_skips_empty_number() {
        let mut doc = Document::new("subsection");
        doc.set_attr(doc.root(), "refersTo", "noncode_level1_unit");
        doc.append_element(doc.root(), "num");

        let out = render_one(&doc, &RenderParams::default());
        assert!(out.find("h4").is_none());

        let mut doc = Document::new("subsection");
        doc.set_attr(doc.root(), "refersTo", "noncode_level1_unit");
        let num = doc.append_element(doc.root(), "num");
        doc.append_text(num, "3");

        let out = render_one(&doc, &RenderParams::default());
        assert_eq!(out.find("h4").unwrap().text_content(), "3.");
    }

    #[test]
    fn test_indent_tiret_markers() {
        for (value, expected) in [
            (Some("single_tiret"), "–"),
            (Some("double_tiret"), "– –"),
            (Some("triple_tiret"), "– – –"),
            (None, "–"),
        ] {
            let mut doc = Document::new("indent");
            if let Some(value) = value {
                doc.set_attr(doc.root(), "refersTo", value);
            }
            let p = doc.append_element(doc.root(), "p");
            doc.append_text(p, "treść");

            let out = render_one(&doc, &RenderParams::default());
            let marker = out.find_class("akn-indent-marker").unwrap();
            assert_eq!(marker.text_content(), expected);
            // Markers come before the content.
            assert!(matches!(&out.children[0], HtmlChild::Element(n) if n.class == "akn-indent-marker"));
        }
    }

    #[test]
    fn test_generic_attrs_are_data_prefixed() {
        let mut doc = Document::new("point");
        doc.set_attr(doc.root(), "refersTo", "something");
        doc.set_attr(doc.root(), "id", "point_1");

        let params = RenderParams::default().with_default_id_scope("main");
        let out = render_one(&doc, &params);
        assert_eq!(out.attr("data-refersTo"), Some("something"));
        assert_eq!(out.attr("id"), Some("main/point_1"));
        assert_eq!(out.attr("data-id"), Some("point_1"));
    }

    #[test]
    fn test_passthrough_keeps_attrs_unprefixed() {
        let mut doc = Document::new("table");
        doc.set_attr(doc.root(), "id", "tbl_1");
        let tr = doc.append_element(doc.root(), "tr");
        doc.set_attr(tr, "colspan", "2");
        let td = doc.append_element(tr, "td");
        doc.append_text(td, "cell");

        let params = RenderParams::default().with_default_id_scope("main");
        let out = render_one(&doc, &params);
        assert_eq!(out.tag, "table");
        assert_eq!(out.class, "");
        // Identity is still scoped even in passthrough nodes.
        assert_eq!(out.attr("id"), Some("main/tbl_1"));
        assert_eq!(out.attr("data-id"), Some("tbl_1"));
        assert_eq!(out.find("tr").unwrap().attr("colspan"), Some("2"));
    }

    #[test]
    fn test_fallback_wraps_unknown_elements() {
        let mut doc = Document::new("blockContainer");
        doc.set_attr(doc.root(), "style", "x");

        let out = render_one(&doc, &RenderParams::default());
        assert_eq!(out.tag, "span");
        assert_eq!(out.class, "akn-blockContainer");
        assert_eq!(out.attr("data-style"), Some("x"));
    }

    #[test]
    fn test_front_matter_synthesized_id_and_spacer() {
        let mut doc = Document::new("preamble");
        let p = doc.append_element(doc.root(), "p");
        doc.append_text(p, "W trosce o byt...");

        let params = RenderParams::default().with_default_id_scope("main");
        let out = render_one(&doc, &params);
        assert_eq!(out.attr("id"), Some("main/preamble"));
        // Synthesized identity has no raw original to mirror.
        assert_eq!(out.attr("data-id"), None);
        // Spacing marker after content.
        assert!(matches!(out.children.last(), Some(HtmlChild::Element(n)) if n.tag == "br"));
    }

    #[test]
    fn test_malformed_element_fails_with_path() {
        let mut doc = Document::new("act");
        let body = doc.append_element(doc.root(), "body");
        let sec = doc.append_element(body, "section");
        doc.append_element(sec, "");

        // body is the act's only rendered section here
        let err = Engine::new(&doc, &RenderParams::default())
            .render(doc.root())
            .unwrap_err();
        match err {
            Error::MalformedNode { path } => {
                assert_eq!(path, "act/body[0]/section[0]/?[0]");
            }
            other => panic!("expected MalformedNode, got {:?}", other),
        }
    }
}
