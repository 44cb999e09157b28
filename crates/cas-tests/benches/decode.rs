use cas_decoder::CasDecoder;
use cas_tests::{chunk, tape};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

fn bench_decode_small(c: &mut Criterion) {
    let buf = tape(&[
        chunk(b"FUJI", [0, 0], b"BALLBLAZER"),
        chunk(b"baud", [0x58, 0x02], &[]),
        chunk(b"data", [0x64, 0x00], &[0xAA; 132]),
    ]);

    c.bench_function("decode_small", |b| {
        b.iter(|| CasDecoder::decode(&buf).unwrap());
    });
}

fn bench_decode_full_tape(c: &mut Criterion) {
    // A tape shaped like a real cassette image: one title record, a
    // baud setting, then a long run of 132-byte data records.
    let mut chunks = vec![
        chunk(b"FUJI", [0, 0], b"SIDE A"),
        chunk(b"baud", [0x58, 0x02], &[]),
    ];
    for _ in 0..500 {
        chunks.push(chunk(b"data", [0x64, 0x00], &[0x55; 132]));
    }
    let buf = tape(&chunks);

    let mut group = c.benchmark_group("decode_tape");
    group.throughput(Throughput::Bytes(buf.len() as u64));
    group.bench_function("data_records_500", |b| {
        b.iter(|| CasDecoder::decode(&buf).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_decode_small, bench_decode_full_tape);
criterion_main!(benches);
