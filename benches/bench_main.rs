use criterion::criterion_main;

mod oracle;

criterion_main!(oracle::benches);
