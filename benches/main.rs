use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mpm_pitch::{GenericPitchDetector, MicrofftAutocorrelator, MicrofftPitchDetector};

fn run_autocorrelation_benchmark(id: &str, c: &mut Criterion, window_size: usize) {
    let mut autocorrelator = MicrofftAutocorrelator::with_microfft(window_size).unwrap();
    let input = vec![0.3_f32; window_size];
    let mut output = vec![0.0_f32; window_size];
    c.bench_function(id, |b| {
        b.iter(|| {
            autocorrelator
                .autocorrelate_into(black_box(&input[..]), &mut output[..])
                .unwrap();
        })
    });
}

fn autocorrelation_benchmarks(c: &mut Criterion) {
    run_autocorrelation_benchmark("Autocorrelation, window 128", c, 128);
    run_autocorrelation_benchmark("Autocorrelation, window 256", c, 256);
    run_autocorrelation_benchmark("Autocorrelation, window 512", c, 512);
    run_autocorrelation_benchmark("Autocorrelation, window 1024", c, 1024);
    run_autocorrelation_benchmark("Autocorrelation, window 2048", c, 2048);
}

fn sine(sample_rate: f32, frequency: f32, n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| (2.0 * core::f32::consts::PI * frequency * (i as f32) / sample_rate).sin())
        .collect()
}

fn run_microfft_detector_benchmark(id: &str, c: &mut Criterion, window_size: usize) {
    let mut detector = MicrofftPitchDetector::with_microfft(window_size).unwrap();
    let input = sine(44100.0, 220.0, window_size);
    c.bench_function(id, |b| {
        b.iter(|| {
            detector.find_pitch(black_box(&input[..]), 44100.0).unwrap();
        })
    });
}

fn microfft_detector_benchmarks(c: &mut Criterion) {
    // 2048 is the largest microfft-detectable window: N_fft = next_pow2(2 * 2048) = 4096, the
    // largest radix table `MicrofftRealFft` has. A window of 4096 would need N_fft = 8192, which
    // has no radix table in `SUPPORTED_SIZES` and would fail construction.
    run_microfft_detector_benchmark("Detector (microfft), window 512", c, 512);
    run_microfft_detector_benchmark("Detector (microfft), window 1024", c, 1024);
    run_microfft_detector_benchmark("Detector (microfft), window 2048", c, 2048);
}

fn run_generic_detector_benchmark(id: &str, c: &mut Criterion, window_size: usize) {
    let mut detector = GenericPitchDetector::<f64>::with_generic_fft(window_size).unwrap();
    let input: Vec<f64> = sine(44100.0, 220.0, window_size)
        .into_iter()
        .map(|s| s as f64)
        .collect();
    c.bench_function(id, |b| {
        b.iter(|| {
            detector.find_pitch(black_box(&input[..]), 44100.0).unwrap();
        })
    });
}

fn generic_detector_benchmarks(c: &mut Criterion) {
    run_generic_detector_benchmark("Detector (generic f64), window 512", c, 512);
    run_generic_detector_benchmark("Detector (generic f64), window 1024", c, 1024);
    run_generic_detector_benchmark("Detector (generic f64), window 2048", c, 2048);
}

criterion_group!(
    benches,
    autocorrelation_benchmarks,
    microfft_detector_benchmarks,
    generic_detector_benchmarks
);
criterion_main!(benches);
