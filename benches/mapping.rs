use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use xmlbind::resources::{time_entry, todo_list};
use xmlbind::{from_xml_str, Raw, Record};

const TIME_ENTRY_XML: &str = "<time-entry><id type=\"integer\">1</id><project-id type=\"integer\">42</project-id><person-id type=\"integer\">7</person-id><date type=\"date\">2008-10-26</date><hours>2.5</hours><description>Worked on X</description></time-entry>";

const TODO_LIST_XML: &str = "<todo-list><id type=\"integer\">1</id><name>chores</name><todo-items><todo-item><id type=\"integer\">2</id><content>first</content></todo-item><todo-item><id type=\"integer\">3</id><content>second</content></todo-item></todo-items></todo-list>";

fn populated_entry() -> Record {
    time_entry::schema()
        .record_from([
            ("project_id", Raw::from(42)),
            ("person_id", Raw::from(7)),
            ("date", Raw::from("2008-10-26")),
            ("hours", Raw::from("2.5")),
            ("description", Raw::from("Worked on X")),
        ])
        .expect("valid fields")
}

fn bench_load_scalar(c: &mut Criterion) {
    c.bench_function("xmlbind_load_time_entry", |b| {
        b.iter(|| {
            let doc = from_xml_str(black_box(TIME_ENTRY_XML)).expect("valid xml");
            time_entry::schema().load(&doc.root).expect("valid record")
        })
    });
}

fn bench_load_array(c: &mut Criterion) {
    c.bench_function("xmlbind_load_todo_list", |b| {
        b.iter(|| {
            let doc = from_xml_str(black_box(TODO_LIST_XML)).expect("valid xml");
            todo_list::schema().load(&doc.root).expect("valid record")
        })
    });
}

fn bench_serialize(c: &mut Criterion) {
    let entry = populated_entry();
    c.bench_function("xmlbind_serialize_time_entry", |b| {
        b.iter(|| black_box(&entry).serialize())
    });
}

criterion_group!(benches, bench_load_scalar, bench_load_array, bench_serialize);
criterion_main!(benches);
