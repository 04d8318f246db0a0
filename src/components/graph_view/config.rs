use serde::Serialize;

use super::types::Element;

/// The full option object handed to the rendering library. All fields
/// except `elements` are fixed; `standard` is the only constructor.
#[derive(Clone, Debug, Serialize)]
pub struct ViewConfig {
	pub elements: Vec<Element>,
	#[serde(rename = "minZoom")]
	pub min_zoom: f64,
	#[serde(rename = "maxZoom")]
	pub max_zoom: f64,
	pub style: Vec<StyleRule>,
	pub layout: LayoutOptions,
}

/// A (selector, property-map) pair. Rules cascade in order, the more
/// specific selector winning per the renderer's normal semantics.
#[derive(Clone, Debug, Serialize)]
pub struct StyleRule {
	pub selector: String,
	pub style: StyleProps,
}

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum StyleProps {
	Node(NodeStyle),
	Edge(EdgeStyle),
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct NodeStyle {
	#[serde(rename = "background-color", skip_serializing_if = "Option::is_none")]
	pub background_color: Option<String>,
	/// Label text, usually a data binding like `data(id)`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct EdgeStyle {
	pub width: f64,
	#[serde(rename = "line-color")]
	pub line_color: String,
	#[serde(rename = "target-arrow-color")]
	pub target_arrow_color: String,
	#[serde(rename = "target-arrow-shape")]
	pub target_arrow_shape: String,
	#[serde(rename = "curve-style")]
	pub curve_style: String,
}

/// Force-directed layout options (the renderer's "cose" algorithm).
#[derive(Clone, Debug, Serialize)]
pub struct LayoutOptions {
	pub name: String,
	#[serde(rename = "numIter")]
	pub num_iter: u32,
	pub directed: bool,
	#[serde(rename = "nodeDimensionsIncludeLabels")]
	pub node_dimensions_include_labels: bool,
}

impl ViewConfig {
	/// The one configuration this crate renders with: fixed zoom bounds,
	/// the standard stylesheet and a 100-iteration directed cose layout.
	pub fn standard(elements: Vec<Element>) -> Self {
		Self {
			elements,
			min_zoom: 0.8,
			max_zoom: 1.4,
			style: standard_style(),
			layout: LayoutOptions {
				name: "cose".into(),
				num_iter: 100,
				directed: true,
				node_dimensions_include_labels: true,
			},
		}
	}
}

/// Default stylesheet: gray id-labeled nodes, `viz_color` override for
/// nodes that carry one, light blue bezier edges with triangle arrows.
fn standard_style() -> Vec<StyleRule> {
	vec![
		StyleRule {
			selector: "node".into(),
			style: StyleProps::Node(NodeStyle {
				background_color: Some("#666".into()),
				label: Some("data(id)".into()),
			}),
		},
		StyleRule {
			selector: "node[viz_color]".into(),
			style: StyleProps::Node(NodeStyle {
				background_color: Some("data(viz_color)".into()),
				label: None,
			}),
		},
		StyleRule {
			selector: "edge".into(),
			style: StyleProps::Edge(EdgeStyle {
				width: 1.4,
				line_color: "lightblue".into(),
				target_arrow_color: "#ccc".into(),
				target_arrow_shape: "triangle".into(),
				curve_style: "bezier".into(),
			}),
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn standard_config_fixed_options() {
		let config = ViewConfig::standard(Vec::new());
		assert_eq!(config.min_zoom, 0.8);
		assert_eq!(config.max_zoom, 1.4);
		assert_eq!(config.layout.name, "cose");
		assert_eq!(config.layout.num_iter, 100);
		assert!(config.layout.directed);
		assert!(config.layout.node_dimensions_include_labels);
	}

	#[test]
	fn style_rules_cascade_order() {
		let selectors: Vec<_> = ViewConfig::standard(Vec::new())
			.style
			.iter()
			.map(|rule| rule.selector.clone())
			.collect();
		assert_eq!(selectors, ["node", "node[viz_color]", "edge"]);
	}

	#[test]
	fn wire_shape_matches_renderer_option_names() {
		let config = ViewConfig::standard(vec![Element::node("a"), Element::edge("a", "a")]);
		let json = serde_json::to_value(&config).unwrap();
		assert_eq!(json["minZoom"], 0.8);
		assert_eq!(json["maxZoom"], 1.4);
		assert_eq!(json["layout"]["numIter"], 100);
		assert_eq!(json["layout"]["nodeDimensionsIncludeLabels"], true);
		assert_eq!(json["style"][0]["style"]["background-color"], "#666");
		assert_eq!(json["style"][0]["style"]["label"], "data(id)");
		assert_eq!(
			json["style"][1]["style"]["background-color"],
			"data(viz_color)"
		);
		let edge_style = &json["style"][2]["style"];
		assert_eq!(edge_style["width"], 1.4);
		assert_eq!(edge_style["line-color"], "lightblue");
		assert_eq!(edge_style["target-arrow-color"], "#ccc");
		assert_eq!(edge_style["target-arrow-shape"], "triangle");
		assert_eq!(edge_style["curve-style"], "bezier");
	}
}
