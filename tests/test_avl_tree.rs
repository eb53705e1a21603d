use avl_collections::avl_tree::Tree;
use rand::{Rng, SeedableRng, XorShiftRng};

const NUM_OF_OPERATIONS: usize = 1000;

fn within_height_bound<T>(tree: &Tree<T>) -> bool {
    let n = tree.len() as f64;
    f64::from(tree.height()) <= 1.44 * (n + 2.0).log2() - 1.0
}

fn assert_balanced<T>(tree: Option<&Tree<T>>) {
    if let Some(tree) = tree {
        assert!(tree.balance().abs() <= 1);
        assert_balanced(tree.left());
        assert_balanced(tree.right());
    }
}

#[test]
fn int_test_random_insert() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = Tree::new();
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();

        tree.insert(key);
        expected.push(key);

        assert_eq!(tree.validate(), Ok(()));
        assert!(within_height_bound(&tree));
    }

    expected.sort();
    assert_eq!(tree.len(), expected.len());
    assert_eq!(
        tree.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
    assert_balanced(Some(&tree));
    for key in &expected {
        assert!(tree.contains(key));
    }
}

#[test]
fn int_test_shuffled_insert() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut keys: Vec<u32> = (0..NUM_OF_OPERATIONS as u32).collect();
    rng.shuffle(&mut keys);

    let tree: Tree<u32> = keys.iter().cloned().collect();

    assert_eq!(tree.validate(), Ok(()));
    assert!(within_height_bound(&tree));
    assert_eq!(tree.min(), Some(&0));
    assert_eq!(tree.max(), Some(&(NUM_OF_OPERATIONS as u32 - 1)));
    assert!(!tree.contains(&(NUM_OF_OPERATIONS as u32)));
    assert_eq!(
        tree.iter().cloned().collect::<Vec<u32>>(),
        (0..NUM_OF_OPERATIONS as u32).collect::<Vec<u32>>(),
    );
}

#[test]
fn int_test_duplicate_insert() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = Tree::new();
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 10);

        tree.insert(key);
        expected.push(key);

        assert_eq!(tree.validate(), Ok(()));
    }

    expected.sort();
    assert_eq!(
        tree.iter().cloned().collect::<Vec<u32>>(),
        expected,
    );
    assert!(within_height_bound(&tree));
}

#[test]
fn int_test_sequential_insert() {
    let tree: Tree<u32> = (1..1024).collect();

    assert_eq!(tree.len(), 1023);
    assert_eq!(tree.height(), 9);
    assert_eq!(tree.balance(), 0);
    assert_eq!(tree.validate(), Ok(()));

    let tree: Tree<u32> = (1..1024).rev().collect();
    assert_eq!(tree.height(), 9);
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn int_test_update_is_idempotent() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = Tree::new();
    for _ in 0..NUM_OF_OPERATIONS {
        tree.insert(rng.gen_range(0, 1000));
    }

    let before = (tree.height(), tree.balance());
    tree.update_height();
    tree.update_balance();
    tree.update_height();
    tree.update_balance();

    assert_eq!(before, (tree.height(), tree.balance()));
    assert_eq!(tree.validate(), Ok(()));
}
