use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ring_deque::Deque;
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 100_000;
    {
        let mut group = c.benchmark_group("VecDeque vs Deque (PushBack 100k)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("Deque<i32>", |b| {
            b.iter(|| {
                let mut d = Deque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs Deque (Alternating Push 100k)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    if i % 2 == 0 {
                        d.push_back(black_box(i as i32));
                    } else {
                        d.push_front(black_box(i as i32));
                    }
                }
                d
            })
        });

        group.bench_function("Deque<i32>", |b| {
            b.iter(|| {
                let mut d = Deque::new();
                for i in 0..n {
                    if i % 2 == 0 {
                        d.push_back(black_box(i as i32));
                    } else {
                        d.push_front(black_box(i as i32));
                    }
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs Deque (Signed Get 1k)");
        let len = 1_000;
        let d_std: VecDeque<i32> = (0..len).collect();
        let d_ring: Deque<i32> = (0..len).collect();

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..len as usize {
                    black_box(d_std.get(d_std.len() - 1 - black_box(i)));
                }
            })
        });

        group.bench_function("Deque<i32>", |b| {
            b.iter(|| {
                for i in 1..=len as isize {
                    black_box(d_ring.at(black_box(-i)));
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
