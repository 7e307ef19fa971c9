use criterion::{criterion_group, criterion_main, Criterion};
use flightcalc_lib::{
    compute_new_velocity, FlightParameters, FlightReport, KilometersPerHour,
    MetersPerSecondSquared, ReportFormat, Seconds,
};
use std::hint::black_box;

fn benchmark_calculations(c: &mut Criterion) {
    c.bench_function("new_velocity", |b| {
        b.iter(|| {
            compute_new_velocity(
                black_box(MetersPerSecondSquared(3.0)),
                black_box(KilometersPerHour(10_000.0)),
                black_box(Seconds(3600.0)),
            )
            .expect("valid inputs")
        });
    });

    c.bench_function("default_report_text", |b| {
        let params = FlightParameters::default();
        b.iter(|| {
            let report = FlightReport::compute(black_box(&params)).expect("valid report");
            black_box(report.render(ReportFormat::Text).expect("renders"))
        });
    });
}

criterion_group!(benches, benchmark_calculations);
criterion_main!(benches);
