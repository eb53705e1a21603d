use avl_collections::avl_tree::Tree;
use avl_collections::bst::BinarySearchTree;
use rand::{Rng, SeedableRng, XorShiftRng};

const NUM_OF_OPERATIONS: usize = 1000;

#[test]
fn int_test_matches_avl_tree() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut bst = BinarySearchTree::new(rng.gen_range(0, 500));
    let mut tree = Tree::new();
    tree.insert(*bst.value());

    for _ in 1..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 500);
        bst.insert(key);
        tree.insert(key);
    }

    let mut in_order = Vec::new();
    bst.in_order(|value| in_order.push(*value));
    assert_eq!(in_order, tree.iter().cloned().collect::<Vec<u32>>());
    assert_eq!(Some(bst.max()), tree.max());

    for key in 0..500 {
        assert_eq!(bst.contains(&key), tree.contains(&key));
    }
}

#[test]
fn int_test_traversals_visit_everything() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut bst = BinarySearchTree::new(rng.next_u32());
    for _ in 1..NUM_OF_OPERATIONS {
        bst.insert(rng.next_u32());
    }

    let mut expected = Vec::new();
    bst.in_order(|value| expected.push(*value));

    let mut traversals = vec![Vec::new(); 5];
    bst.bft(|value| traversals[0].push(*value));
    bst.dft(|value| traversals[1].push(*value));
    bst.pre_order(|value| traversals[2].push(*value));
    bst.post_order(|value| traversals[3].push(*value));
    bst.for_each(|value| traversals[4].push(*value));

    for mut visited in traversals {
        visited.sort();
        assert_eq!(visited, expected);
    }
}
