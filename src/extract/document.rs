/// Kinds of elements scanned for a label, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerShape {
    /// `th`, or the first `td` of a two-column row.
    HeaderCell,
    TableRow,
    ListItem,
    Block,
    Inline,
}

impl ContainerShape {
    pub const SCAN_ORDER: [ContainerShape; 5] = [
        ContainerShape::HeaderCell,
        ContainerShape::TableRow,
        ContainerShape::ListItem,
        ContainerShape::Block,
        ContainerShape::Inline,
    ];
}

/// Read-only view of a tree-shaped page fragment.
///
/// The extractor only needs a handful of structural questions answered, so any
/// tree model (HTML, a test fixture, a pre-parsed JSON DOM dump) can back it.
/// Implementations must not panic on odd structure; "not found" is `None` or
/// an empty list.
pub trait StructuredDocument {
    type Node<'a>: Copy
    where
        Self: 'a;

    /// Label/value sub-element pairs: containers whose only two element
    /// children are a label followed by its value.
    fn grid_pairs(&self) -> Vec<(Self::Node<'_>, Self::Node<'_>)>;

    /// Elements of the given shape in document order.
    fn elements(&self, shape: ContainerShape) -> Vec<Self::Node<'_>>;

    /// Normalized text of the node and all of its descendants.
    fn text<'a>(&'a self, node: Self::Node<'a>) -> String;

    /// Normalized text the node itself carries, ignoring nested elements.
    fn own_text<'a>(&'a self, node: Self::Node<'a>) -> String;

    fn is_header_cell<'a>(&'a self, node: Self::Node<'a>) -> bool;

    /// The next cell in the same table row.
    fn adjacent_cell<'a>(&'a self, node: Self::Node<'a>) -> Option<Self::Node<'a>>;

    /// The next sibling element of the same kind.
    fn next_sibling<'a>(&'a self, node: Self::Node<'a>) -> Option<Self::Node<'a>>;

    /// A descendant whose attributes mark it as holding a value.
    fn nested_value<'a>(&'a self, node: Self::Node<'a>) -> Option<Self::Node<'a>>;

    /// All document text, one text run per line.
    fn full_text(&self) -> String;
}
