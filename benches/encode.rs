use axsr::{Codec, Field, GenericCodec, Record, Schema, Specializer, Type};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn wide_schema() -> Schema {
  let mut fields = Vec::new();
  for i in 0..16 {
    fields.push(Field::new(format!("f{i}"), Type::Int));
  }
  fields.push(Field::new("name", Type::String).with_codec(Codec::Zstd));
  fields.push(Field::new("tags", Type::List));
  Schema::new("Wide", 1, fields).unwrap()
}

fn wide_record() -> Record {
  let mut record = Record::new();
  for i in 0..16 {
    record.insert(format!("f{i}"), i as i64);
  }
  record.insert("name", "the quick brown fox jumps over the lazy dog");
  record.insert("tags", vec![1i64, 2, 3, 4, 5]);
  record
}

fn bench_generic(c: &mut Criterion) {
  let schema = wide_schema();
  let record = wide_record();
  let codec = GenericCodec::new();
  c.bench_function("generic_encode_wide_schema", |b| {
    b.iter(|| codec.encode(black_box(&schema), black_box(&record)).unwrap())
  });
}

fn bench_specialized(c: &mut Criterion) {
  let schema = wide_schema();
  let record = wide_record();
  let specializer = Specializer::new();
  let encoder = specializer.specialize(&schema);
  c.bench_function("specialized_encode_wide_schema", |b| {
    b.iter(|| encoder.encode(black_box(&record)).unwrap())
  });
}

criterion_group!(benches, bench_generic, bench_specialized);
criterion_main!(benches);
