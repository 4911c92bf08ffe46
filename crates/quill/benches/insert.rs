//! Compare inserting records one statement at a time against a single batch.
use divan::{black_box, Bencher};
use quill::{Clauses, Record, Session};

const BATCH_SIZES: [usize; 4] = [1, 16, 256, 4096];

fn main() {
    divan::main();
}

#[derive(Record)]
struct Reading {
    id: i64,
    sensor: String,
    value: f64,
    raw: Vec<u8>,
}

fn readings(n: usize) -> Vec<Reading> {
    (0..n)
        .map(|i| Reading {
            id: i as i64,
            sensor: format!("sensor-{}", i % 7),
            value: i as f64 * 0.25,
            raw: vec![(i % 251) as u8; 32],
        })
        .collect()
}

fn session_with_table() -> Session {
    let session = Session::connect_in_memory().unwrap();
    session.create_table::<Reading>().unwrap();
    session
}

/// Each insert prepares and finalizes its own statement, outside of any
/// explicit transaction.
#[divan::bench(consts = BATCH_SIZES)]
fn single_inserts<const N: usize>(bencher: Bencher) {
    bencher
        .with_inputs(|| (session_with_table(), readings(N)))
        .bench_local_values(|(session, rows)| {
            for row in &rows {
                session.insert(row).unwrap();
            }
        })
}

/// One transaction, one prepared statement reused for every record.
#[divan::bench(consts = BATCH_SIZES)]
fn batch_insert<const N: usize>(bencher: Bencher) {
    bencher
        .with_inputs(|| (session_with_table(), readings(N)))
        .bench_local_values(|(mut session, rows)| session.insert_batch(&rows).unwrap())
}

/// Materialize a full table back into records.
#[divan::bench(consts = BATCH_SIZES)]
fn fetch_all<const N: usize>(bencher: Bencher) {
    bencher
        .with_inputs(|| {
            let mut session = session_with_table();
            session.insert_batch(&readings(N)).unwrap();
            session
        })
        .bench_local_refs(|session| {
            black_box(session.fetch::<Reading>(&Clauses::all()).unwrap());
        })
}
