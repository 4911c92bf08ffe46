use quill::{Clauses, Record, Session};

#[derive(Record, Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub at: u32,
}

fn main() {
    let mut session = Session::connect_in_memory().unwrap();
    session.create_table::<Tick>().unwrap();
    let ticks: Vec<Tick> = (0..10).map(|at| Tick { at }).collect();
    session.insert_batch(&ticks).unwrap();
    let back = session
        .fetch::<Tick>(&Clauses::new().order_by("at"))
        .unwrap();
    assert_eq!(back, ticks);
}
