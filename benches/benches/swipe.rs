// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_swipe::{ActionItem, OffsetPolicy, RowCoordinator, SwipeRows};

type Row = RowCoordinator<u32, u32>;

fn make_row(buttons: usize) -> Row {
    let mut row = Row::default();
    row.attach_content(375.0);
    row.set_left_buttons([ActionItem::new(0, 64.0)]).unwrap();
    row.set_right_buttons((0..buttons as u32).map(|i| ActionItem::new(i, 48.0 + f64::from(i))))
        .unwrap();
    row
}

fn bench_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/policy");
    let policy = OffsetPolicy::new(64.0, 180.0).with_triggers(50.0, 50.0);
    let offsets: Vec<f64> = (0..1_024).map(|i| f64::from(i) * 0.25 - 8.0).collect();
    group.throughput(Throughput::Elements(offsets.len() as u64));

    group.bench_function("progress_at", |b| {
        b.iter(|| {
            for &offset in &offsets {
                black_box(policy.progress_at(black_box(offset)));
            }
        });
    });
    group.bench_function("snap", |b| {
        b.iter(|| {
            for &offset in &offsets {
                black_box(policy.snap(black_box(offset), 0.05));
            }
        });
    });

    group.finish();
}

fn bench_drag_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/drag_stream");

    // A full gesture: press, a run of moves with event draining, release, settle.
    for buttons in [1usize, 3, 8] {
        let moves = 120u64;
        group.throughput(Throughput::Elements(moves));
        group.bench_with_input(BenchmarkId::from_parameter(buttons), &buttons, |b, &n| {
            b.iter_batched(
                || make_row(n),
                |mut row| {
                    row.pointer_down(Point::new(300.0, 20.0), 0);
                    for step in 1..=moves {
                        let x = 300.0 - 2.0 * step as f64;
                        row.pointer_move(Point::new(x, 20.0), step * 8);
                        black_box(row.drain_events().count());
                    }
                    row.pointer_up(moves * 8 + 4);
                    let mut now = moves * 8 + 4;
                    while row.tick(now) {
                        now += 16;
                    }
                    black_box(row);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_peer_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/peer_churn");

    // Open each row of one list in turn; every opening closes its predecessor.
    for len in [16usize, 256] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut rows: SwipeRows<u32, u32> = SwipeRows::new();
                    let ids: Vec<_> = (0..len).map(|_| rows.insert(make_row(2))).collect();
                    for &id in &ids {
                        rows.will_display(id, 0);
                    }
                    (rows, ids)
                },
                |(mut rows, ids)| {
                    for &id in &ids {
                        rows.update(id, |row| row.expand_right(false));
                    }
                    black_box(rows.open_row(0));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_policy, bench_drag_stream, bench_peer_churn);
criterion_main!(benches);
