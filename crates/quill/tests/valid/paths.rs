use quill::{Record, SemanticType};

type Id = i64;

mod bytes {
    pub type Payload = quill::Blob;
}

#[derive(Record)]
#[allow(dead_code)]
struct Message {
    id: Id,
    body: std::string::String,
    payload: bytes::Payload,
    raw: ::std::vec::Vec<u8>,
}

fn main() {
    let semantics: Vec<_> = Message::FIELDS.iter().map(|f| f.semantic).collect();
    assert_eq!(
        semantics,
        [
            SemanticType::I64,
            SemanticType::Text,
            SemanticType::Blob,
            SemanticType::Blob
        ]
    );
}
