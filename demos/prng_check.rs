use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use x2fit::x2::X2Test;

fn main() {
    let mut rng = SmallRng::seed_from_u64(0x2545_F491);

    // A good generator, and a bad one that never leaves the lower half
    let good: Vec<f64> = (0..10_000).map(|_| rng.gen()).collect();
    let bad: Vec<f64> = good.iter().map(|x| x * 0.5).collect();

    for k in [5, 10, 20] {
        let test = X2Test::new(k, 0.05).unwrap();
        for (name, xs) in [("SmallRng", &good), ("half range", &bad)] {
            match test.run(xs) {
                Ok(res) => println!(
                    "{name:>10}, k = {k:>2}: {} (statistic = {:.2}, p = {:.4})",
                    res.decision(),
                    res.statistic(),
                    res.p_value()
                ),
                Err(err) => println!("{name:>10}, k = {k:>2}: {err}"),
            }
        }
    }
}
