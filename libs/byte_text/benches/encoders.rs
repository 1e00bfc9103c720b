#![allow(unused_crate_dependencies)]
use std::hint::black_box;

use byte_text::Encoder;
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_encode(c: &mut Criterion) {
    fn bench(c: &mut Criterion, encoder: Encoder, size: &str, data: &[u8]) {
        c.bench_function(&format!("encode_{encoder}_{size}"), |b| {
            b.iter(|| encoder.marshal(black_box(data)))
        });
    }

    for encoder in Encoder::ALL {
        bench(c, encoder, "small", &create_data::<16>());
        bench(c, encoder, "large", &create_data::<12000>());
    }
}

fn bench_decode(c: &mut Criterion) {
    fn bench(c: &mut Criterion, encoder: Encoder, size: &str, data: &[u8]) {
        let literal = encoder.marshal(data);

        c.bench_function(&format!("decode_{encoder}_{size}"), |b| {
            b.iter(|| black_box(encoder.unmarshal(black_box(&literal))).expect("data is valid"))
        });
    }

    for encoder in Encoder::ALL {
        bench(c, encoder, "small", &create_data::<16>());
        bench(c, encoder, "large", &create_data::<12000>());
    }
}

fn create_data<const LEN: usize>() -> [u8; LEN] {
    let mut buf = [0u8; LEN];

    #[expect(clippy::cast_possible_truncation)]
    for (index, b) in buf.iter_mut().enumerate() {
        *b = u8::MAX - index as u8;
    }

    buf
}

criterion_group!(encoders, bench_encode, bench_decode);
criterion_main!(encoders);
