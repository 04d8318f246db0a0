use serde::Serialize;

/// One entry of a graph description, in the renderer's element format:
/// every record is a `{ "data": { .. } }` envelope, and nodes are told
/// apart from edges by their payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Element {
	Node(NodeElement),
	Edge(EdgeElement),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeElement {
	pub data: NodeData,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeData {
	pub id: String,
	/// Optional per-node fill color, consumed by the `node[viz_color]`
	/// style rule. Omitted from the wire form when unset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub viz_color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeElement {
	pub data: EdgeData,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeData {
	pub source: String,
	pub target: String,
}

impl Element {
	pub fn node(id: impl Into<String>) -> Self {
		Self::Node(NodeElement {
			data: NodeData {
				id: id.into(),
				viz_color: None,
			},
		})
	}

	pub fn colored_node(id: impl Into<String>, viz_color: impl Into<String>) -> Self {
		Self::Node(NodeElement {
			data: NodeData {
				id: id.into(),
				viz_color: Some(viz_color.into()),
			},
		})
	}

	pub fn edge(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self::Edge(EdgeElement {
			data: EdgeData {
				source: source.into(),
				target: target.into(),
			},
		})
	}
}
