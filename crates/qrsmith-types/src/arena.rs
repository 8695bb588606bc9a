//! Flat arena for interactive tag-tree authoring.
//!
//! The wizard inserts tags and subtags at arbitrary depth while a template is
//! being edited. Rather than rebuilding the nested tree on every insertion,
//! nodes live in a flat table keyed by a stable [`NodeId`], each holding a
//! parent reference; insertion anywhere is an O(1) table update and the
//! nested [`Template`] tree is materialized only on demand.

use crate::error::{Error, Result};
use crate::template::{Subtag, Tag, TagCode, Template, ValueFormat};

/// Stable handle to an arena node, valid for the arena's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Field metadata shared by tags and subtags
#[derive(Debug, Clone, PartialEq)]
pub struct TagSpec {
    pub code: TagCode,
    pub content_desc: String,
    pub json_key: String,
    pub content_value: Option<String>,
    pub format: ValueFormat,
    pub min_length: u32,
    pub max_length: u32,
    pub is_static: bool,
    pub is_dynamic: bool,
    pub required: bool,
}

impl From<&Tag> for TagSpec {
    fn from(tag: &Tag) -> Self {
        Self {
            code: tag.code.clone(),
            content_desc: tag.content_desc.clone(),
            json_key: tag.json_key.clone(),
            content_value: tag.content_value.clone(),
            format: tag.format,
            min_length: tag.min_length,
            max_length: tag.max_length,
            is_static: tag.is_static,
            is_dynamic: tag.is_dynamic,
            required: tag.required,
        }
    }
}

impl From<&Subtag> for TagSpec {
    fn from(subtag: &Subtag) -> Self {
        Self {
            code: subtag.code.clone(),
            content_desc: subtag.content_desc.clone(),
            json_key: subtag.json_key.clone(),
            content_value: subtag.content_value.clone(),
            format: subtag.format,
            min_length: subtag.min_length,
            max_length: subtag.max_length,
            is_static: subtag.is_static,
            is_dynamic: subtag.is_dynamic,
            required: subtag.required,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    spec: TagSpec,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Flat table of template nodes with parent links
#[derive(Debug, Clone, Default)]
pub struct TemplateArena {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl TemplateArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an arena from an existing template's tag tree
    pub fn from_template(template: &Template) -> Self {
        let mut arena = Self::new();
        for tag in &template.tags {
            // Existing templates already passed validation; duplicate top-level
            // codes cannot occur here.
            let id = arena.push_node(TagSpec::from(tag), None);
            arena.roots.push(id);
            for subtag in &tag.subtags {
                arena.attach_subtree(id, subtag);
            }
        }
        arena
    }

    /// Add a top-level tag. Fails on a duplicate code among the roots.
    pub fn add_tag(&mut self, spec: TagSpec) -> Result<NodeId> {
        if self
            .roots
            .iter()
            .any(|&id| self.nodes[id.0].spec.code == spec.code)
        {
            return Err(Error::DuplicateTag(spec.code.to_string()));
        }
        let id = self.push_node(spec, None);
        self.roots.push(id);
        Ok(id)
    }

    /// Add a subtag beneath any existing node, however deep.
    ///
    /// This is the O(1) replacement for the original recursive tree rebuild:
    /// one push into the node table plus one child-index append.
    pub fn add_subtag(&mut self, parent: NodeId, spec: TagSpec) -> Result<NodeId> {
        if parent.0 >= self.nodes.len() {
            return Err(Error::UnknownNode(parent.0));
        }
        if self.nodes[parent.0]
            .children
            .iter()
            .any(|&c| self.nodes[c.0].spec.code == spec.code)
        {
            return Err(Error::DuplicateTag(spec.code.to_string()));
        }
        let id = self.push_node(spec, Some(parent));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Detach a top-level tag (and implicitly its subtree) from the template.
    /// Node storage is retained; traversal starts from the root list.
    pub fn remove_tag(&mut self, code: &TagCode) -> bool {
        let before = self.roots.len();
        let nodes = &self.nodes;
        self.roots.retain(|&id| &nodes[id.0].spec.code != code);
        self.roots.len() != before
    }

    pub fn spec(&self, id: NodeId) -> Option<&TagSpec> {
        self.nodes.get(id.0).map(|n| &n.spec)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Materialize the nested tag tree in declared order
    pub fn to_tags(&self) -> Vec<Tag> {
        self.roots
            .iter()
            .map(|&id| {
                let node = &self.nodes[id.0];
                let spec = &node.spec;
                Tag {
                    code: spec.code.clone(),
                    content_desc: spec.content_desc.clone(),
                    json_key: spec.json_key.clone(),
                    content_value: spec.content_value.clone(),
                    format: spec.format,
                    min_length: spec.min_length,
                    max_length: spec.max_length,
                    is_static: spec.is_static,
                    is_dynamic: spec.is_dynamic,
                    required: spec.required,
                    subtags: self.collect_subtags(&node.children),
                }
            })
            .collect()
    }

    /// Materialize a complete template
    pub fn to_template(&self, id: u32, name: impl Into<String>, journey_id: impl Into<String>) -> Template {
        Template {
            id,
            name: name.into(),
            journey_id: journey_id.into(),
            tags: self.to_tags(),
        }
    }

    fn collect_subtags(&self, children: &[NodeId]) -> Vec<Subtag> {
        children
            .iter()
            .map(|&id| {
                let node = &self.nodes[id.0];
                let spec = &node.spec;
                Subtag {
                    code: spec.code.clone(),
                    content_desc: spec.content_desc.clone(),
                    json_key: spec.json_key.clone(),
                    content_value: spec.content_value.clone(),
                    format: spec.format,
                    min_length: spec.min_length,
                    max_length: spec.max_length,
                    is_static: spec.is_static,
                    is_dynamic: spec.is_dynamic,
                    required: spec.required,
                    subtags: self.collect_subtags(&node.children),
                }
            })
            .collect()
    }

    fn attach_subtree(&mut self, parent: NodeId, subtag: &Subtag) {
        let id = self.push_node(TagSpec::from(subtag), Some(parent));
        self.nodes[parent.0].children.push(id);
        for child in &subtag.subtags {
            self.attach_subtree(id, child);
        }
    }

    fn push_node(&mut self, spec: TagSpec, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            spec,
            parent,
            children: Vec::new(),
        });
        id
    }
}
