use quill::{Clauses, Record, Session};

#[derive(Record, Debug, PartialEq)]
#[quill(table = "audit_log")]
struct Entry {
    r#type: String,
    #[quill(rename = "at")]
    timestamp: i64,
}

fn main() {
    assert_eq!(Entry::TABLE, "audit_log");
    let names: Vec<_> = Entry::FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names, ["type", "at"]);

    let session = Session::connect_in_memory().unwrap();
    session.create_table::<Entry>().unwrap();
    session.verify_table::<Entry>().unwrap();
    let entry = Entry {
        r#type: "login".into(),
        timestamp: 1_700_000_000,
    };
    session.insert(&entry).unwrap();
    let back = session
        .fetch::<Entry>(&Clauses::new().filter("at > 0"))
        .unwrap();
    assert_eq!(back, [entry]);
}
