use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_surfaces::{
    Complex, EscapeTimeAlgorithm, FractalMode, PlaneBounds, SmoothHueColourMap, Viewport,
    calculate_render_workers, calculate_row_bands, render_bands,
};
use std::num::NonZeroU32;

const WIDTH: u32 = 400;
const HEIGHT: u32 = 320;
const MAX_ITERATIONS: u32 = 256;

fn bench_render_bands(c: &mut Criterion) {
    let viewport = Viewport::new(PlaneBounds::default(), WIDTH, HEIGHT);
    let mut group = c.benchmark_group("render_bands");

    for mode in [
        FractalMode::Mandelbrot,
        FractalMode::Julia(Complex::new(-0.7, 0.27)),
    ] {
        let algorithm = EscapeTimeAlgorithm::new(viewport, MAX_ITERATIONS, mode);
        let colour_map = SmoothHueColourMap::new(MAX_ITERATIONS, mode.colour_normalization());
        let workers = calculate_render_workers().get();

        for band_count in [1, workers] {
            let bands = calculate_row_bands(HEIGHT, NonZeroU32::new(band_count).unwrap_or(NonZeroU32::MIN));

            group.bench_with_input(
                BenchmarkId::new(mode.display_name(), band_count),
                &bands,
                |b, bands| {
                    b.iter(|| {
                        black_box(render_bands(WIDTH, HEIGHT, bands, &algorithm, &colour_map))
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render_bands);
criterion_main!(benches);
