//! Declarative graph view: typed Cytoscape.js configuration, the
//! renderer seam, and the Leptos wrapper component.

mod component;
mod config;
mod cytoscape;
mod renderer;
mod types;

pub use component::GraphView;
pub use config::{EdgeStyle, LayoutOptions, NodeStyle, StyleProps, StyleRule, ViewConfig};
pub use cytoscape::{CONTAINER_ID, Cytoscape, draw_in_page};
pub use renderer::{GraphRenderer, Navigator, NavigatorOptions, ViewHandle, draw};
pub use types::{EdgeData, EdgeElement, Element, NodeData, NodeElement};
