use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::Locale;
use saju_chart::{ChartInput, analyze, analyze_input};

const INPUT: &str = r#"{
    "pillars": {
        "year":  { "stem": "庚", "branch": "午" },
        "month": { "stem": "戊", "branch": "寅" },
        "day":   { "stem": "壬", "branch": "辰" },
        "hour":  { "stem": "辛", "branch": "亥" }
    },
    "gender": "female",
    "currentAge": 37,
    "luckStartAge": 3
}"#;

fn chart_bench(c: &mut Criterion) {
    let input = match ChartInput::from_json(INPUT) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Skipping benchmarks: {e}");
            return;
        }
    };
    let request = match input.resolve() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Skipping benchmarks: {e}");
            return;
        }
    };

    let mut group = c.benchmark_group("chart");
    group.bench_function("parse_json", |b| {
        b.iter(|| ChartInput::from_json(black_box(INPUT)))
    });
    group.bench_function("resolve", |b| b.iter(|| black_box(&input).resolve()));
    group.bench_function("analyze_ko", |b| {
        b.iter(|| analyze(black_box(&request), Locale::Ko))
    });
    group.bench_function("analyze_input_en", |b| {
        b.iter(|| analyze_input(black_box(&input), Locale::En))
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
