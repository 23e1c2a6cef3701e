use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drawer_core::ScrollMetrics;
use drawer_testing::DrawerRobot;

const MOVES_PER_GESTURE: &[u32] = &[16, 64, 256];
const SCROLLABLE_LIST: ScrollMetrics = ScrollMetrics::new(4000.0, 600.0, 0.0);

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    for &moves in MOVES_PER_GESTURE {
        group.bench_with_input(BenchmarkId::new("moves", moves), &moves, |b, &moves| {
            let robot = DrawerRobot::new();
            robot.open_and_settle();
            b.iter(|| {
                robot.press(200.0, 0.0);
                for step in 1..=moves {
                    robot.move_to(200.0 + step as f32, f64::from(step) * 4.0);
                }
                black_box(robot.container_translate());
                // Slow release well above half: snaps back, stays open.
                robot.release(f64::from(moves) * 4.0 + 1_000.0);
            });
        });
    }
    group.finish();
}

fn bench_arbitrated_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("arbitrated_drag");
    for &moves in MOVES_PER_GESTURE {
        group.bench_with_input(BenchmarkId::new("moves", moves), &moves, |b, &moves| {
            let robot = DrawerRobot::new();
            robot.dom().set_scroll_metrics(robot.fixture().list, SCROLLABLE_LIST);
            robot.open_and_settle();
            b.iter(|| {
                robot.press(200.0, 0.0);
                for step in 1..=moves {
                    robot.move_to(200.0 + step as f32, f64::from(step) * 4.0);
                }
                black_box(robot.drawer().velocity());
                robot.release(f64::from(moves) * 4.0 + 1_000.0);
            });
        });
    }
    group.finish();
}

criterion_group!(gesture, bench_drag, bench_arbitrated_drag);
criterion_main!(gesture);
