use criterion::{criterion_group, criterion_main, Criterion};
use edgefirst_rotate::{image::PlaneGeometry, rotate::Rotator};

pub fn benchmark_rotate(c: &mut Criterion) {
    let dims = [(320, 240), (640, 480), (1280, 720), (1920, 1088), (3840, 2160)];

    for degrees in [90, 180, 270] {
        let mut group = c.benchmark_group(format!("rotate/{}", degrees));
        for dim in dims.iter() {
            let geom = PlaneGeometry::new(dim.0, dim.1);
            let mut rotator = Rotator::new();
            rotator.configure(degrees, "none", geom, None).unwrap();
            let mut frame = vec![0u8; geom.frame_size()];

            // Quarter turns swap the frame dimensions, so alternate them.
            let mut current = geom;
            group.bench_function(format!("{}x{}", dim.0, dim.1), |b| {
                b.iter(|| {
                    let outcome = rotator
                        .rotate_frame(&mut frame, current.width, current.height)
                        .unwrap();
                    if outcome.code() == 1 {
                        current = current.swapped();
                    }
                })
            });
        }
    }
}

pub fn benchmark_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip");
    for axis in ["horizontal", "vertical"] {
        let geom = PlaneGeometry::new(1920, 1088);
        let mut rotator = Rotator::new();
        rotator.configure(0, axis, geom, None).unwrap();
        let mut frame = vec![0u8; geom.frame_size()];
        group.bench_function(format!("{}/{}", axis, geom), |b| {
            b.iter(|| rotator.rotate_frame(&mut frame, geom.width, geom.height))
        });
    }
}

criterion_group!(benches, benchmark_rotate, benchmark_flip);
criterion_main!(benches);
