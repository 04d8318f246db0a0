use log::debug;
use serde::Serialize;

use super::config::ViewConfig;
use super::types::Element;

/// External rendering collaborator: takes the option object, returns a
/// live view handle. Failures (bad container, malformed elements) are the
/// renderer's to raise and pass through this layer untranslated.
pub trait GraphRenderer {
	type Container;
	type Handle: ViewHandle<Error = Self::Error>;
	type Error;

	fn render(
		&self,
		container: Self::Container,
		config: &ViewConfig,
	) -> Result<Self::Handle, Self::Error>;
}

/// A rendered view. Its only contract here is the optional navigator
/// capability query, resolved once when the handle is built.
pub trait ViewHandle {
	type Error;

	/// `None` when the renderer build ships without the navigator plugin.
	fn navigator(&self) -> Option<&dyn Navigator<Error = Self::Error>>;
}

/// The pan/zoom minimap overlay a renderer build may provide.
pub trait Navigator {
	type Error;

	fn attach(&self, options: &NavigatorOptions) -> Result<(), Self::Error>;
}

/// Overlay options. The overlay is always attached with defaults, which
/// serialize to an empty object.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct NavigatorOptions {}

/// Renders `elements` into `container` with the standard configuration,
/// then attaches the navigator overlay if the renderer has one.
///
/// Fire-and-forget: the view lives on in the page, the handle is not
/// returned. An empty element sequence is valid and renders an empty
/// canvas.
pub fn draw<R: GraphRenderer>(
	renderer: &R,
	container: R::Container,
	elements: Vec<Element>,
) -> Result<(), R::Error> {
	debug!("rendering graph view with {} elements", elements.len());
	let view = renderer.render(container, &ViewConfig::standard(elements))?;
	if let Some(navigator) = view.navigator() {
		navigator.attach(&NavigatorOptions::default())?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	enum Call {
		Render { element_count: usize },
		AttachNavigator,
	}

	type CallLog = Rc<RefCell<Vec<Call>>>;

	struct MockNavigator {
		calls: CallLog,
	}

	impl Navigator for MockNavigator {
		type Error = String;

		fn attach(&self, options: &NavigatorOptions) -> Result<(), String> {
			let json = serde_json::to_value(options).unwrap();
			assert_eq!(json, serde_json::json!({}));
			self.calls.borrow_mut().push(Call::AttachNavigator);
			Ok(())
		}
	}

	struct MockView {
		navigator: Option<MockNavigator>,
	}

	impl ViewHandle for MockView {
		type Error = String;

		fn navigator(&self) -> Option<&dyn Navigator<Error = String>> {
			self.navigator
				.as_ref()
				.map(|nav| nav as &dyn Navigator<Error = String>)
		}
	}

	struct MockRenderer {
		calls: CallLog,
		with_navigator: bool,
		fail: Option<String>,
	}

	impl MockRenderer {
		fn new(with_navigator: bool) -> Self {
			Self {
				calls: Rc::new(RefCell::new(Vec::new())),
				with_navigator,
				fail: None,
			}
		}
	}

	impl GraphRenderer for MockRenderer {
		type Container = ();
		type Handle = MockView;
		type Error = String;

		fn render(&self, _container: (), config: &ViewConfig) -> Result<MockView, String> {
			if let Some(err) = &self.fail {
				return Err(err.clone());
			}
			self.calls.borrow_mut().push(Call::Render {
				element_count: config.elements.len(),
			});
			Ok(MockView {
				navigator: self.with_navigator.then(|| MockNavigator {
					calls: self.calls.clone(),
				}),
			})
		}
	}

	#[test]
	fn empty_elements_render_successfully() {
		let renderer = MockRenderer::new(false);
		draw(&renderer, (), Vec::new()).unwrap();
		assert_eq!(
			*renderer.calls.borrow(),
			[Call::Render { element_count: 0 }]
		);
	}

	#[test]
	fn navigator_attached_once_after_render() {
		let renderer = MockRenderer::new(true);
		let elements = vec![
			Element::node("a"),
			Element::colored_node("b", "red"),
			Element::edge("a", "b"),
		];
		draw(&renderer, (), elements).unwrap();
		assert_eq!(
			*renderer.calls.borrow(),
			[Call::Render { element_count: 3 }, Call::AttachNavigator]
		);
	}

	#[test]
	fn missing_navigator_is_not_an_error() {
		let renderer = MockRenderer::new(false);
		draw(&renderer, (), vec![Element::node("a")]).unwrap();
		assert_eq!(
			*renderer.calls.borrow(),
			[Call::Render { element_count: 1 }]
		);
	}

	#[test]
	fn render_errors_propagate_unchanged() {
		let mut renderer = MockRenderer::new(true);
		renderer.fail = Some("no container".into());
		let err = draw(&renderer, (), Vec::new()).unwrap_err();
		assert_eq!(err, "no container");
		assert!(renderer.calls.borrow().is_empty());
	}
}
