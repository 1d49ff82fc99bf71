//! Minimal example: build a small tree, render it, sum the keys.

use landis::AvlTree;

fn main() -> anyhow::Result<()> {
    let mut tree = AvlTree::new();

    for key in [10, 20, 30, 25, 28, 27, -1] {
        tree.insert(key);
    }

    print!("{tree}");
    println!("sum = {}", tree.sum());
    println!("height = {}", tree.height());

    tree.check_integrity()?;

    Ok(())
}
