mod graphviz_renderer;

pub use graphviz_renderer::{GraphvizRenderer, DEFAULT_RENDERER};
