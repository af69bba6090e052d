use criterion::{criterion_group, criterion_main, Criterion};
use encloser::{DiskGenerator, Encloser, SphereGenerator, Tolerance, WelzlEncloser};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SEED: u64 = 0;
const N: usize = 10000;

fn benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("enclose");
    group.sample_size(10);

    let disk_points = dataset::<2>();
    let sphere_points = dataset::<3>();
    let disk_encloser = WelzlEncloser::new(Tolerance::default(), DiskGenerator::new());
    let sphere_encloser = WelzlEncloser::new(Tolerance::default(), SphereGenerator::new());

    group.bench_function("Disk", |b| {
        b.iter(|| disk_encloser.enclose(&disk_points).map(|ball| ball.radius()))
    });
    group.bench_function("Sphere", |b| {
        b.iter(|| sphere_encloser.enclose(&sphere_points).map(|ball| ball.radius()))
    });
    group.bench_function("Disk/sorted", |b| {
        let mut sorted = disk_points.clone();
        sorted.sort_by(|p, q| p[0].total_cmp(&q[0]));
        b.iter(|| disk_encloser.enclose(&sorted).map(|ball| ball.radius()))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

fn dataset<const D: usize>() -> Vec<[f64; D]> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..N)
        .map(|_| {
            let mut point = [0.0; D];
            for x in &mut point {
                *x = rng.gen();
            }
            point
        })
        .collect()
}
