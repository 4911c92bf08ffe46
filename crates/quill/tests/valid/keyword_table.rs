use quill::{Clauses, Record, Session};

#[derive(Record, Debug, PartialEq)]
struct Order {
    id: i64,
    #[quill(rename = "position")]
    order: u32,
}

fn main() {
    let session = Session::connect_in_memory().unwrap();
    session.create_table::<Order>().unwrap();
    session.verify_table::<Order>().unwrap();
    session.insert(&Order { id: 1, order: 3 }).unwrap();
    let back = session
        .fetch::<Order>(&Clauses::new().order_by("position"))
        .unwrap();
    assert_eq!(back, [Order { id: 1, order: 3 }]);
}
