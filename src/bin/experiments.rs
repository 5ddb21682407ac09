//! Batch accuracy/runtime experiments for the min cut estimators.
//!
//! Sweeps over graph sizes and trial counts; for every trial a graph family
//! is chosen by coin flip (Erdős–Rényi or two cliques joined by bridges),
//! the exact cut is computed with Stoer-Wagner, and both randomized
//! estimators are graded against it. One CSV summary row is written per
//! `(n, trials)` configuration.

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use mincut::cut::{karger_once, karger_stein, stoer_wagner};
use mincut::generate::{erdos_renyi, two_cliques_with_bridges};

/// Per-configuration accuracies and mean per-trial runtimes (ms), split by
/// graph family.
struct Summary {
    erdos_k_acc: f64,
    clique_k_acc: f64,
    combined_k_acc: f64,
    erdos_ks_acc: f64,
    clique_ks_acc: f64,
    combined_ks_acc: f64,
    erdos_k_ms: f64,
    clique_k_ms: f64,
    erdos_ks_ms: f64,
    clique_ks_ms: f64,
}

fn run_experiment(
    n: usize,
    trials: usize,
    bridges: usize,
    p: f64,
    seed: u64,
) -> mincut::Result<Summary> {
    let mut master = ChaCha20Rng::seed_from_u64(seed);

    let (mut karger_hits_er, mut karger_hits_cl) = (0usize, 0usize);
    let (mut ks_hits_er, mut ks_hits_cl) = (0usize, 0usize);
    let (mut count_er, mut count_cl) = (0usize, 0usize);
    let (mut karger_ms_er, mut karger_ms_cl) = (0.0f64, 0.0f64);
    let (mut ks_ms_er, mut ks_ms_cl) = (0.0f64, 0.0f64);

    for _ in 0..trials {
        let mut local = ChaCha20Rng::seed_from_u64(u64::from(master.next_u32()));
        let is_erdos = local.next_u32() & 1 == 1;
        let edges = if is_erdos {
            erdos_renyi(n, p, &mut local)
        } else {
            two_cliques_with_bridges(n, bridges, &mut local)
        };

        let true_cut = stoer_wagner(n, &edges)?;

        let start = Instant::now();
        let karger_cut = karger_once(n, &edges, &mut local)?;
        let karger_ms = start.elapsed().as_secs_f64() * 1e3;

        let start = Instant::now();
        let ks_cut = karger_stein(n, &edges, &mut local)?;
        let ks_ms = start.elapsed().as_secs_f64() * 1e3;

        if is_erdos {
            count_er += 1;
            karger_ms_er += karger_ms;
            ks_ms_er += ks_ms;
            karger_hits_er += usize::from(karger_cut == true_cut);
            ks_hits_er += usize::from(ks_cut == true_cut);
        } else {
            count_cl += 1;
            karger_ms_cl += karger_ms;
            ks_ms_cl += ks_ms;
            karger_hits_cl += usize::from(karger_cut == true_cut);
            ks_hits_cl += usize::from(ks_cut == true_cut);
        }
    }

    let ratio = |hits: usize, total: usize| {
        if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        }
    };
    let mean = |total_ms: f64, count: usize| if count > 0 { total_ms / count as f64 } else { 0.0 };

    Ok(Summary {
        erdos_k_acc: ratio(karger_hits_er, count_er),
        clique_k_acc: ratio(karger_hits_cl, count_cl),
        combined_k_acc: ratio(karger_hits_er + karger_hits_cl, trials),
        erdos_ks_acc: ratio(ks_hits_er, count_er),
        clique_ks_acc: ratio(ks_hits_cl, count_cl),
        combined_ks_acc: ratio(ks_hits_er + ks_hits_cl, trials),
        erdos_k_ms: mean(karger_ms_er, count_er),
        clique_k_ms: mean(karger_ms_cl, count_cl),
        erdos_ks_ms: mean(ks_ms_er, count_er),
        clique_ks_ms: mean(ks_ms_cl, count_cl),
    })
}

fn run(out_path: &str) -> Result<(), Box<dyn Error>> {
    let mut out = BufWriter::new(File::create(out_path)?);
    writeln!(
        out,
        "n,trials,\
         erdos_k_acc,clique_k_acc,combined_k_acc,\
         erdos_ks_acc,clique_ks_acc,combined_ks_acc,\
         erdos_k_ms,clique_k_ms,erdos_ks_ms,clique_ks_ms,seed"
    )?;

    let ns = [10usize, 20, 50, 75, 100];
    let trial_counts = [100usize, 1000, 5000];
    let bridges = 5;
    let p = 0.1;

    for &n in &ns {
        for &trials in &trial_counts {
            let seed = 100_000 + (n as u64) * 1000 + trials as u64;
            println!("Running n={n} trials={trials} seed={seed}...");

            let s = run_experiment(n, trials, bridges, p, seed)?;
            writeln!(
                out,
                "{n},{trials},\
                 {:.4},{:.4},{:.4},{:.4},{:.4},{:.4},\
                 {:.4},{:.4},{:.4},{:.4},{seed}",
                s.erdos_k_acc,
                s.clique_k_acc,
                s.combined_k_acc,
                s.erdos_ks_acc,
                s.clique_ks_acc,
                s.combined_ks_acc,
                s.erdos_k_ms,
                s.clique_k_ms,
                s.erdos_ks_ms,
                s.clique_ks_ms,
            )?;
        }
    }

    out.flush()?;
    println!("Saved: {out_path}");
    Ok(())
}

fn main() {
    let Some(out_path) = env::args().nth(1) else {
        eprintln!("usage: experiments <output.csv>");
        process::exit(2);
    };
    if let Err(err) = run(&out_path) {
        eprintln!("experiments: {err}");
        process::exit(1);
    }
}
