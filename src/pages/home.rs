use leptos::prelude::*;

use crate::components::graph_view::{Element, GraphView};

/// Sample pathway-style graph: a handful of glycolysis steps, with the
/// source and sink metabolites tinted through `viz_color`.
fn sample_elements() -> Vec<Element> {
	let intermediates = ["g6p", "f6p", "f16bp", "dhap", "g3p", "pyruvate"];
	let steps = [
		("glucose", "g6p"),
		("g6p", "f6p"),
		("f6p", "f16bp"),
		("f16bp", "g3p"),
		("f16bp", "dhap"),
		("dhap", "g3p"),
		("g3p", "pyruvate"),
		("pyruvate", "lactate"),
		("pyruvate", "acetyl-coa"),
	];

	let mut elements = vec![
		Element::colored_node("glucose", "#31a354"),
		Element::colored_node("lactate", "#e6550d"),
		Element::colored_node("acetyl-coa", "#e6550d"),
	];
	elements.extend(intermediates.map(Element::node));
	elements.extend(steps.map(|(source, target)| Element::edge(source, target)));
	elements
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let elements = Signal::derive(sample_elements);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<GraphView elements=elements />
				<div class="graph-overlay">
					<h1>"Pathway Graph"</h1>
					<p class="subtitle">
						"Scroll to zoom (0.8x to 1.4x). The minimap appears when the navigator plugin is loaded."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
