use int_bst::{node, Tree};

fn keys(xs: &[i8]) -> Vec<i64> {
    xs.iter().map(|&x| i64::from(x)).collect()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(keys(&xs));

    let mut sorted = keys(&xs);
    sorted.sort_unstable();
    tree.in_order() == sorted
}

#[quickcheck]
fn traversals_hold_every_key(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(keys(&xs));

    let mut sorted = keys(&xs);
    sorted.sort_unstable();
    let mut pre = tree.pre_order();
    pre.sort_unstable();
    let mut post = tree.post_order();
    post.sort_unstable();

    pre == sorted && post == sorted
}

#[quickcheck]
fn pre_order_rebuilds_same_tree(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(keys(&xs));

    Tree::from_keys(tree.pre_order()) == tree
}

#[quickcheck]
fn same_insertion_order_is_same(xs: Vec<i8>) -> bool {
    let a = Tree::from_keys(keys(&xs));
    let b = Tree::from_keys(keys(&xs));

    node::same(a.root(), b.root())
}

#[quickcheck]
fn missing_delete_is_noop(xs: Vec<i8>, missing: i8) -> bool {
    let xs = keys(&xs);
    let missing = i64::from(missing);
    if xs.contains(&missing) {
        return true;
    }

    let before = Tree::from_keys(xs.clone());
    let mut after = Tree::from_keys(xs);
    !after.delete(missing) && node::same(before.root(), after.root())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(keys(&xs));
    for delete in keys(&deletes) {
        // We may have inserted the same key multiple times - delete each one.
        while tree.delete(delete) {}
    }

    let deletes = keys(&deletes);
    let mut still_present = keys(&xs);
    still_present.retain(|x| !deletes.contains(x));
    still_present.sort_unstable();

    deletes.iter().all(|&x| !tree.contains(x)) && tree.in_order() == still_present
}

#[quickcheck]
fn delete_shrinks_by_one(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let xs = keys(&xs);
    let target = xs[pick % xs.len()];

    let mut tree = Tree::from_keys(xs.clone());
    let removed = tree.delete(target);

    let mut expected = xs;
    expected.sort_unstable();
    if let Ok(pos) = expected.binary_search(&target) {
        expected.remove(pos);
    }
    removed && tree.in_order() == expected
}
