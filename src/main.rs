use interval_bplus_tree::bplus_tree::IntervalBPlusTree;
use interval_bplus_tree::Interval;
use rand::Rng;

fn main() {
    let mut rng = rand::thread_rng();
    let mut tree = IntervalBPlusTree::new();

    println!("Inserting random student marks into the interval B+ tree...");
    for _ in 0..10 {
        let a: i32 = rng.gen_range(0..=100);
        let b: i32 = rng.gen_range(0..=100);
        let interval = Interval::new(a.min(b), a.max(b));
        tree.insert(interval);
        println!("Inserted interval {}", interval);
    }

    let point = rng.gen_range(0..=100);
    let covering = tree.search(&point);

    println!("\nIntervals containing point {}:", point);
    if covering.is_empty() {
        println!("No intervals found.");
    } else {
        for interval in covering {
            println!("{}", interval);
        }
    }
}
