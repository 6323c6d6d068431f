use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use skyline_atlas::{Packer, PackerConfig, PixelFormat};

fn generate_images(count: usize, min_size: u16, max_size: u16) -> Vec<(u16, u16, Vec<u8>)> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let w = rng.gen_range(min_size..=max_size);
            let h = rng.gen_range(min_size..=max_size);
            (w, h, vec![0u8; w as usize * h as usize])
        })
        .collect()
}

fn bench_add_image_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_image_throughput");

    for count in [50usize, 200, 800] {
        let images = generate_images(count, 8, 64);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("uniform_rng", count), &images, |b, images| {
            b.iter(|| {
                let config = PackerConfig::builder().max_dimension(4096).build();
                let mut packer = Packer::new(images.len(), config).unwrap();
                for (w, h, buf) in images {
                    let _ = packer.add_image(PixelFormat::R, buf, *w, *h);
                }
                black_box(packer.baked_size())
            });
        });
    }

    group.finish();
}

fn bench_single_add_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_add_image");
    let buf = vec![0u8; 64 * 64];

    group.bench_function("fresh_packer", |b| {
        b.iter(|| {
            let mut packer = Packer::new(1, PackerConfig::default()).unwrap();
            black_box(packer.add_image(PixelFormat::R, &buf, 64, 64))
        });
    });

    group.finish();
}

fn bench_wasted_space_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("wasted_space_lookup");

    // Seed a packer with many small images so later additions exercise
    // the wasted-space pool rather than the shelf scan.
    let setup_images = generate_images(300, 4, 16);
    let config = PackerConfig::builder().max_dimension(4096).build();

    group.bench_function("add_after_fragmentation", |b| {
        b.iter_batched(
            || {
                let mut packer = Packer::new(400, config).unwrap();
                for (w, h, buf) in &setup_images {
                    let _ = packer.add_image(PixelFormat::R, buf, *w, *h);
                }
                let small = vec![0u8; 4 * 4];
                (packer, small)
            },
            |(mut packer, small)| black_box(packer.add_image(PixelFormat::R, &small, 4, 4)),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add_image_throughput,
    bench_single_add_image,
    bench_wasted_space_lookup,
);
criterion_main!(benches);
