use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use super::config::ViewConfig;
use super::renderer::{GraphRenderer, Navigator, NavigatorOptions, ViewHandle};
use super::types::Element;

/// Container element id the hosting page is expected to provide.
pub const CONTAINER_ID: &str = "cy";

#[wasm_bindgen]
extern "C" {
	/// Page-global Cytoscape.js core factory (js.cytoscape.org), loaded by
	/// the hosting page ahead of the WASM bundle.
	#[wasm_bindgen(catch)]
	fn cytoscape(options: &JsValue) -> Result<JsValue, JsValue>;
}

/// The Cytoscape.js rendering collaborator. The container is passed as a
/// raw `JsValue` so an unresolved element comes through as `null` and the
/// library raises its own error, nothing is validated on this side.
pub struct Cytoscape;

impl GraphRenderer for Cytoscape {
	type Container = JsValue;
	type Handle = CytoscapeView;
	type Error = JsValue;

	fn render(&self, container: JsValue, config: &ViewConfig) -> Result<CytoscapeView, JsValue> {
		let options = config
			.serialize(&Serializer::json_compatible())
			.map_err(JsValue::from)?;
		Reflect::set(&options, &JsValue::from_str("container"), &container)?;
		Ok(CytoscapeView::new(cytoscape(&options)?))
	}
}

/// A live Cytoscape.js core. The navigator plugin registers itself as a
/// method on the core when the page loads it, so the capability is looked
/// up once here and absent on plain builds.
pub struct CytoscapeView {
	navigator: Option<CytoscapeNavigator>,
}

impl CytoscapeView {
	fn new(core: JsValue) -> Self {
		let navigator = Reflect::get(&core, &JsValue::from_str("navigator"))
			.ok()
			.and_then(|member| member.dyn_into::<Function>().ok())
			.map(|method| CytoscapeNavigator { core, method });
		Self { navigator }
	}
}

impl ViewHandle for CytoscapeView {
	type Error = JsValue;

	fn navigator(&self) -> Option<&dyn Navigator<Error = JsValue>> {
		self.navigator
			.as_ref()
			.map(|nav| nav as &dyn Navigator<Error = JsValue>)
	}
}

struct CytoscapeNavigator {
	core: JsValue,
	method: Function,
}

impl Navigator for CytoscapeNavigator {
	type Error = JsValue;

	fn attach(&self, options: &NavigatorOptions) -> Result<(), JsValue> {
		let options = options
			.serialize(&Serializer::json_compatible())
			.map_err(JsValue::from)?;
		self.method.call1(&self.core, &options).map(|_| ())
	}
}

/// Renders `elements` into the page's fixed `cy` container, the way the
/// hosting documents embed their example graphs. A missing container is
/// forwarded as `null` for the library to reject.
pub fn draw_in_page(elements: Vec<Element>) -> Result<(), JsValue> {
	let container = web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.get_element_by_id(CONTAINER_ID))
		.map(JsValue::from)
		.unwrap_or(JsValue::NULL);
	super::renderer::draw(&Cytoscape, container, elements)
}
