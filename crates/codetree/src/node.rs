//! The render contract shared by both node families, plus the entry points.

use crate::config::WriterConfig;
use crate::error::Result;
use crate::writer::Writer;
use std::io;

/// A unit of a syntax tree that can emit itself.
///
/// Implementations write through `w` only. They never inspect parent or
/// sibling nodes; layout is negotiated through the writer's cursor and
/// through flags carried on the node itself.
pub trait Node {
    fn render(&self, w: &mut Writer<'_>);
}

impl<N: Node + ?Sized> Node for &N {
    fn render(&self, w: &mut Writer<'_>) {
        (**self).render(w);
    }
}

impl<N: Node + ?Sized> Node for Box<N> {
    fn render(&self, w: &mut Writer<'_>) {
        (**self).render(w);
    }
}

/// An absent node renders nothing.
impl<N: Node> Node for Option<N> {
    fn render(&self, w: &mut Writer<'_>) {
        if let Some(node) = self {
            node.render(w);
        }
    }
}

/// Nodes separated by writer line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeList<N>(pub Vec<N>);

impl<N: Node> Node for NodeList<N> {
    fn render(&self, w: &mut Writer<'_>) {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                w.new_line();
            }
            n.render(w);
        }
    }
}

/// Nodes written back to back with no separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSlice<N>(pub Vec<N>);

impl<N: Node> Node for NodeSlice<N> {
    fn render(&self, w: &mut Writer<'_>) {
        for n in &self.0 {
            n.render(w);
        }
    }
}

/// Render `node` into `sink` with the default configuration.
///
/// Returns the first failure reported by the sink. Rendering itself cannot
/// fail.
pub fn write<N: Node + ?Sized>(node: &N, sink: impl io::Write) -> Result<()> {
    write_with(&WriterConfig::default(), node, sink)
}

/// Render `node` into `sink` with the given configuration.
pub fn write_with<N: Node + ?Sized>(
    config: &WriterConfig,
    node: &N,
    mut sink: impl io::Write,
) -> Result<()> {
    let mut w = Writer::with_config(&mut sink, config);
    node.render(&mut w);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "codetree.render",
        bytes = w.bytes_written(),
        failed = w.err().is_some(),
        "rendered node"
    );

    w.finish()
}

/// Render `node` into a new string with the default configuration.
///
/// # Example
/// ```
/// use codetree::sql::OrdinalParameterSpec;
///
/// assert_eq!(codetree::to_string(&OrdinalParameterSpec(1)).unwrap(), "$1");
/// ```
pub fn to_string<N: Node + ?Sized>(node: &N) -> Result<String> {
    to_string_with(&WriterConfig::default(), node)
}

/// Render `node` into a new string with the given configuration.
pub fn to_string_with<N: Node + ?Sized>(config: &WriterConfig, node: &N) -> Result<String> {
    let mut buf = Vec::with_capacity(256);
    write_with(config, node, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
