use std::sync::mpsc;

use magnetite_rbm::{Rbm, TrainConfig};

fn main() {
    let mut machine = Rbm::seeded(6, 2, 42).unwrap();

    // Two clusters of movie preferences: rows 0-2 like films 1-3, rows 3-5
    // like films 3-5.
    let data = vec![
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        vec![1.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0],
    ];

    let (tx, rx) = mpsc::channel();
    let config = TrainConfig { epochs: 5000, progress_tx: Some(tx) };

    let final_error = machine.train(&data, &config).unwrap();

    for stats in rx.try_iter() {
        if stats.epoch % 500 == 0 {
            println!(
                "Epoch {}/{}: reconstruction error = {:.6}",
                stats.epoch, stats.total_epochs, stats.reconstruction_error
            );
        }
    }
    println!("Final reconstruction error: {final_error:.6}");

    println!("\nLearned weights (row 0 / column 0 are biases):");
    for row in &machine.weights().data {
        let cells: Vec<String> = row.iter().map(|w| format!("{w:>8.4}")).collect();
        println!("  [{}]", cells.join(", "));
    }

    let probe = vec![vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0]];
    let hidden = machine.run_visible(&probe).unwrap();
    println!("\nInput: {:?} -> Hidden: {:?}", probe[0], hidden[0]);

    println!("\nDaydream (row 0 is the random seed):");
    for sample in machine.daydream(10) {
        println!("  {sample:?}");
    }
}
