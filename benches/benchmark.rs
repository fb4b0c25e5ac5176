use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use decode_utf8::{decode, decode_with, Mode};

const SEQUENCES: [(&str, [u8; 4]); 6] = [
    ("ascii", [0x41, 0x00, 0x00, 0x00]),
    ("two byte", [0xC2, 0xA9, 0x00, 0x00]),
    ("three byte", [0xE2, 0x82, 0xAC, 0x00]),
    ("four byte", [0xF0, 0x9F, 0x98, 0x80]),
    ("truncated", [0xE0, 0x00, 0x00, 0x00]),
    ("invalid lead", [0xFF, 0x80, 0x80, 0x80]),
];

fn sequences(c: &mut Criterion, mode: Mode, group_name: &str) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(1));
    for (name, bytes) in SEQUENCES {
        group.bench_with_input(BenchmarkId::from_parameter(name), &bytes, |b, bytes| {
            b.iter(|| decode_with(black_box(*bytes), mode))
        });
    }
    group.finish();
}

fn all(c: &mut Criterion) {
    sequences(c, Mode::Strict, "strict");
    sequences(c, Mode::Lenient, "lenient");
    let every_char: Vec<[u8; 4]> = (0..=char::MAX as u32)
        .filter_map(char::from_u32)
        .map(|c| {
            let mut bytes = [0; 4];
            c.encode_utf8(&mut bytes);
            bytes
        })
        .collect();
    c.bench_with_input(
        BenchmarkId::new("all chars", every_char.len()),
        &every_char,
        |b, every_char| {
            b.iter(|| {
                every_char
                    .iter()
                    .map(|bytes| decode(*bytes))
                    .filter(Result::is_ok)
                    .count()
            })
        },
    );
}

criterion_group!(benches, all);

criterion_main!(benches);
