use x2fit::prelude::*;

fn main() {
    // Observed frequencies of five bins
    let obs = [8, 7, 5, 4, 6];
    let acc = accumulate(&obs, Expected::Uniform).unwrap();
    println!("Degrees of freedom: {}", acc.df);
    println!("Statistic: {}", acc.statistic);
    println!("Per-interval values: {:?}", acc.contributions);

    let alpha = 0.05;
    let x2 = ChiSquared::new(acc.df as f64).unwrap();
    let crit: f64 = x2.invcdf(1.0 - alpha);
    if acc.statistic < crit {
        println!("H0 cannot be rejected (critical value {crit:.4})");
    } else {
        println!("H0 is rejected (critical value {crit:.4})");
    }
    println!();

    // The same counts arise from this sample over five bins
    let xs = vec![
        0.15, 0.22, 0.41, 0.65, 0.84, 0.81, 0.62, 0.45, 0.32, 0.07, 0.11,
        0.29, 0.58, 0.73, 0.93, 0.97, 0.79, 0.55, 0.35, 0.09, 0.99, 0.51,
        0.35, 0.02, 0.19, 0.24, 0.98, 0.10, 0.31, 0.17,
    ];
    match decide(&xs, 5, 0.5) {
        Ok(res) => println!("{res}"),
        Err(err) => eprintln!("test failed: {err}"),
    }
}
