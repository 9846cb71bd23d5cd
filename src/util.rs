/// What a recursive delete did to the subtree it was handed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The key wasn't found so nothing was deleted.
    NotFound,
    /// The matching node had no children and was dropped.
    Leaf,
    /// The matching node only had a right child, which took its place.
    PromotedRight,
    /// The matching node only had a left child, which took its place.
    PromotedLeft,
    /// The matching node kept its place and took this key, pruned out of its right subtree.
    Successor(i64),
    /// The matching node kept its place and took this key, pruned out of its left subtree.
    Predecessor(i64),
}

impl Removal {
    pub(crate) fn is_found(self) -> bool {
        self != Removal::NotFound
    }
}
