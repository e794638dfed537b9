/// A node of a Huffman tree.
///
/// Leaves carry a symbol; internal nodes own exactly two children. A node with
/// a single child cannot be expressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    Leaf { symbol: S, weight: u64 },
    Internal { weight: u64, left: Box<HuffmanNode<S>>, right: Box<HuffmanNode<S>> },
}

impl<S> HuffmanNode<S> {
    pub fn leaf(symbol: S, weight: u64) -> Self {
        Self::Leaf { symbol, weight }
    }

    /// Join two subtrees under a new internal node weighing their sum
    pub fn merge(left: Self, right: Self) -> Self {
        Self::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Frequency of a leaf, or the summed frequency of an internal node's leaves
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Symbol of a leaf (None for internal nodes)
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Self::Leaf { symbol, .. } => Some(symbol),
            Self::Internal { .. } => None,
        }
    }

    /// Left and right children of an internal node (None for leaves)
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Leaf { .. } => None,
            Self::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }

    /// Number of leaves (distinct symbols) below this node
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path (0 for a lone leaf)
    pub fn height(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    /// Copy of this tree with the children of every internal node exchanged
    pub fn mirrored(&self) -> Self
    where
        S: Clone,
    {
        match self {
            Self::Leaf { symbol, weight } => Self::leaf(symbol.clone(), *weight),
            Self::Internal { weight, left, right } => Self::Internal {
                weight: *weight,
                left: Box::new(right.mirrored()),
                right: Box::new(left.mirrored()),
            },
        }
    }
}
