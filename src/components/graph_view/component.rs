use leptos::prelude::*;
use log::error;
use wasm_bindgen::JsValue;
use web_sys::HtmlDivElement;

use super::cytoscape::Cytoscape;
use super::renderer::draw;
use super::types::Element;

/// Mounts a graph view of `elements` into a container div once the node
/// ref resolves. Render failures are logged here at the outermost
/// boundary; the initializer itself never swallows them.
#[component]
pub fn GraphView(#[prop(into)] elements: Signal<Vec<Element>>) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let container: HtmlDivElement = container.into();
		if let Err(err) = draw(&Cytoscape, JsValue::from(container), elements.get()) {
			error!("graph view initialization failed: {err:?}");
		}
	});

	view! {
		<div
			node_ref=container_ref
			class="graph-view"
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}
