//! The arena-owned JSON parse tree.
//!
//! The tree owns every node in one `Vec`; node ids are indices into it.
//! Parent links are plain ids (a lookup relation, never an ownership
//! edge), so dropping the `Tree` releases everything at once.

use serde::{Deserialize, Serialize};

use entrychk_types::{NumericRecord, Span, StringRecord};

use crate::strings;

/// Index of a node within its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One JSON value, member or container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Null,
    Bool(bool),
    Number(NumericRecord),
    String(StringRecord),
    /// Item ids in textual order.
    Array(Vec<NodeId>),
    /// Member ids in textual order.
    Object(Vec<NodeId>),
    Member { name: StringRecord, value: NodeId },
}

impl NodeKind {
    /// Short name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool(_) => "bool",
            NodeKind::Number(_) => "number",
            NodeKind::String(_) => "string",
            NodeKind::Array(_) => "array",
            NodeKind::Object(_) => "object",
            NodeKind::Member { .. } => "member",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    /// 0 at the root, increasing into the tree.
    pub depth: u32,
    pub span: Span,
    pub parent: Option<NodeId>,
    /// False when numeric or string conversion failed for this node.
    pub converted: bool,
}

/// A parsed JSON document. Created by the parser, owned as a value;
/// dropping it releases the whole tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node lookup; `None` for a stale or foreign id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Node lookup for ids known to come from this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Member ids of an object node, textual order. Empty for non-objects.
    pub fn members(&self, id: NodeId) -> &[NodeId] {
        match self.get(id).map(|n| &n.kind) {
            Some(NodeKind::Object(members)) => members,
            _ => &[],
        }
    }

    /// Item ids of an array node, textual order. Empty for non-arrays.
    pub fn items(&self, id: NodeId) -> &[NodeId] {
        match self.get(id).map(|n| &n.kind) {
            Some(NodeKind::Array(items)) => items,
            _ => &[],
        }
    }

    /// Decoded member name of a member node.
    pub fn member_name(&self, id: NodeId) -> Option<&str> {
        match self.get(id).map(|n| &n.kind) {
            Some(NodeKind::Member { name, .. }) => name.decoded_str(),
            _ => None,
        }
    }

    /// Value id of a member node.
    pub fn member_value(&self, id: NodeId) -> Option<NodeId> {
        match self.get(id).map(|n| &n.kind) {
            Some(NodeKind::Member { value, .. }) => Some(*value),
            _ => None,
        }
    }

    /// Find a member of an object by exact decoded name. First match in
    /// textual order wins; the sibling-lookup checks rely on that.
    pub fn find_member(&self, object: NodeId, name: &str) -> Option<NodeId> {
        self.members(object)
            .iter()
            .copied()
            .find(|&m| self.member_name(m) == Some(name))
    }

    /// Serialize the tree back to JSON text. Numbers round-trip through
    /// their original lexemes; strings re-encode from decoded bytes.
    pub fn to_json_string(&self) -> String {
        let mut out = String::with_capacity(self.nodes.len() * 8);
        self.write_node(self.root, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match &self.node(id).kind {
            NodeKind::Null => out.push_str("null"),
            NodeKind::Bool(true) => out.push_str("true"),
            NodeKind::Bool(false) => out.push_str("false"),
            NodeKind::Number(record) => out.push_str(&record.as_str),
            NodeKind::String(record) => {
                out.push('"');
                out.push_str(&strings::encode(&record.decoded));
                out.push('"');
            }
            NodeKind::Array(items) => {
                out.push('[');
                for (i, &item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.write_node(item, out);
                }
                out.push(']');
            }
            NodeKind::Object(members) => {
                out.push('{');
                for (i, &member) in members.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.write_node(member, out);
                }
                out.push('}');
            }
            NodeKind::Member { name, value } => {
                out.push('"');
                out.push_str(&strings::encode(&name.decoded));
                out.push_str("\":");
                self.write_node(*value, out);
            }
        }
    }

    /// Structural equality: same shapes, decoded string contents and
    /// number lexemes, ignoring spans and arena layout.
    pub fn structural_eq(&self, other: &Tree) -> bool {
        self.node_eq(self.root, other, other.root)
    }

    fn node_eq(&self, a: NodeId, other: &Tree, b: NodeId) -> bool {
        match (&self.node(a).kind, &other.node(b).kind) {
            (NodeKind::Null, NodeKind::Null) => true,
            (NodeKind::Bool(x), NodeKind::Bool(y)) => x == y,
            (NodeKind::Number(x), NodeKind::Number(y)) => x.as_str == y.as_str,
            (NodeKind::String(x), NodeKind::String(y)) => x.decoded == y.decoded,
            (NodeKind::Array(xs), NodeKind::Array(ys)) => {
                xs.len() == ys.len()
                    && xs
                        .iter()
                        .zip(ys.iter())
                        .all(|(&x, &y)| self.node_eq(x, other, y))
            }
            (NodeKind::Object(xs), NodeKind::Object(ys)) => {
                xs.len() == ys.len()
                    && xs
                        .iter()
                        .zip(ys.iter())
                        .all(|(&x, &y)| self.node_eq(x, other, y))
            }
            (
                NodeKind::Member { name: xn, value: xv },
                NodeKind::Member { name: yn, value: yv },
            ) => xn.decoded == yn.decoded && self.node_eq(*xv, other, *yv),
            _ => false,
        }
    }
}
