//! Runs the vector scenarios, traces element lifecycles and provider calls,
//! and optionally compares push throughput against `std::vec::Vec`.
//!
//! Usage: `growvec-harness [--count N] [--runs N] [--perf]`
//!
//! Set `RUST_LOG=debug` to see every block acquired and released.

use std::fmt::Debug;
use std::hint::black_box;
use std::mem;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use bumpalo::Bump;
use clap::Parser;
use growvec::{
    alloc::{Api2, LoggingAlloc},
    vector, Global, StorageError, Vector,
};

const DEFAULT_COUNT: usize = 1_000_000;
const DEFAULT_RUNS: u32 = 5;

/// An element which reports each step of its lifecycle.
#[derive(Debug)]
struct Noisy(u32);

impl Noisy {
    fn new(id: u32) -> Self {
        log::info!("construct {id}");
        Self(id)
    }
}

impl Clone for Noisy {
    fn clone(&self) -> Self {
        log::info!("clone {}", self.0);
        Self(self.0)
    }
}

impl Drop for Noisy {
    fn drop(&mut self) {
        log::info!("destroy {}", self.0);
    }
}

#[derive(Debug, Default, Clone, Copy)]
#[repr(C)]
struct HeavyPod {
    values: [u64; 8],
}

#[derive(Debug, Parser)]
#[command(name = "growvec-harness")]
#[command(about = "Exercises growvec and compares it against std::vec::Vec")]
struct Args {
    /// Number of values pushed per throughput run
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Number of throughput runs to average
    #[arg(long, default_value_t = DEFAULT_RUNS, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Run the push throughput comparison
    #[arg(long)]
    perf: bool,
}

fn show<T: Debug>(label: &str, v: &Vector<T>) {
    println!(
        "{label:<28} {:?} (len {}, capacity {})",
        v.as_slice(),
        v.len(),
        v.capacity()
    );
}

fn run_scenarios() -> Result<Vector<i32>, StorageError> {
    println!("== scenarios");

    let mut v = Vector::<i32>::new();
    for value in [10, 20, 30] {
        v.try_push(value).map_err(|err| err.into_parts().0)?;
        show(&format!("push {value}"), &v);
    }

    let mut v = vector![1, 2, 4];
    v.try_insert(2, 3).map_err(|err| err.into_parts().0)?;
    show("insert 3 at 2", &v);
    v.try_insert(v.begin(), 0).map_err(|err| err.into_parts().0)?;
    show("insert 0 at begin", &v);
    let end = v.end();
    v.try_insert(end, 5).map_err(|err| err.into_parts().0)?;
    show("insert 5 at end", &v);

    v.try_erase(v.begin())?;
    show("erase begin", &v);
    v.try_erase(v.end() - 1)?;
    show("erase end - 1", &v);
    v.try_erase_range(1..3)?;
    show("erase [1, 3)", &v);

    v.try_resize(5, 10)?;
    show("resize 5 with 10", &v);
    v.try_resize(3, 0)?;
    show("resize 3", &v);
    v.try_resize_default(6)?;
    show("resize 6 with default", &v);

    let copy = v.clone();
    v.clone_from(&copy);
    show("copy-assign from copy", &v);

    let moved = mem::take(&mut v);
    show("moved into new vector", &moved);
    show("moved-from source", &v);

    match moved.at(10) {
        Ok(item) => println!("at 10: {item}"),
        Err(err) => println!("at 10: {err}"),
    }
    Ok(v)
}

fn run_lifecycle() {
    println!("== lifecycle (RUST_LOG=info)");
    let mut v = Vector::<Noisy, _>::new_in(LoggingAlloc(Global));
    for id in 0..3 {
        v.push(Noisy::new(id));
    }
    v.emplace_back(|| Noisy::new(3));
    v.insert(1, Noisy::new(4));
    let copy = v.clone();
    v.erase_range(0..2);
    v.pop_back();
    drop(copy);
    println!("remaining {:?}", v.as_slice());
}

fn run_bump() {
    println!("== bump provider");
    let bump = Bump::new();
    let mut v = Vector::<u32, _>::new_in(Api2(&bump));
    v.extend(0..10_000);
    println!(
        "pushed {} values, {} bytes in the arena",
        v.len(),
        bump.allocated_bytes()
    );
}

fn time_push<T: Copy + Default>(count: usize, runs: u32) -> (Duration, Duration) {
    let mut ours = Duration::ZERO;
    let mut std = Duration::ZERO;
    for _ in 0..runs {
        let start = Instant::now();
        let mut v = Vector::<T>::new();
        for _ in 0..count {
            v.push(black_box(T::default()));
        }
        black_box(&v);
        ours += start.elapsed();

        let start = Instant::now();
        let mut v = Vec::<T>::new();
        for _ in 0..count {
            v.push(black_box(T::default()));
        }
        black_box(&v);
        std += start.elapsed();
    }
    (ours / runs, std / runs)
}

fn run_perf(args: &Args) {
    println!("== push {} values, average of {} runs", args.count, args.runs);
    let results = [
        ("i32", time_push::<i32>(args.count, args.runs)),
        ("i64", time_push::<i64>(args.count, args.runs)),
        ("f32", time_push::<f32>(args.count, args.runs)),
        ("f64", time_push::<f64>(args.count, args.runs)),
        ("64-byte pod", time_push::<HeavyPod>(args.count, args.runs)),
    ];
    for (name, (ours, std)) in results {
        println!(
            "{name:<12} growvec {:>10.3} ms   std {:>10.3} ms",
            ours.as_secs_f64() * 1000.,
            std.as_secs_f64() * 1000.
        );
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    log::debug!("{args:?}");

    if let Err(err) = run_scenarios() {
        log::error!("scenario failed: {err}");
        return ExitCode::FAILURE;
    }
    run_lifecycle();
    run_bump();
    if args.perf {
        run_perf(&args);
    }
    ExitCode::SUCCESS
}
