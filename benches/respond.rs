use agrismart::calculators::{run_tool, FarmTool, FormFields};
use agrismart::router::{classify, ResponseContext, ResponseGenerator};
use agrismart::HtmlFormatter;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const QUERIES: &[&str] = &[
    "What is the best crop for clay soil this season?",
    "My wheat has yellow spots on leaves",
    "How much urea per acre for rice?",
    "Drip irrigation schedule for tomatoes",
    "When will cotton prices go up?",
    "Tell me something about farming",
];

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            for query in QUERIES {
                black_box(classify(black_box(query)));
            }
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let generator = ResponseGenerator::new();
    let now = NaiveDate::from_ymd_opt(2024, 7, 15)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap();
    let ctx = ResponseContext::new("Salem, Tamil Nadu, India", now)
        .with_crop(Some("rice".to_string()))
        .opening(true);

    c.bench_function("respond_and_render_html", |b| {
        b.iter(|| {
            for query in QUERIES {
                let response = generator.respond(black_box(query), &ctx);
                black_box(HtmlFormatter::format_response(&response));
            }
        })
    });
}

fn bench_tools(c: &mut Criterion) {
    let fields = FormFields::parse_pairs("crop=maize planting_date=2024-06-15 avg_temp=25 days=30");
    c.bench_function("gdd_tool", |b| b.iter(|| black_box(run_tool(FarmTool::Gdd, &fields))));
}

criterion_group!(benches, bench_classify, bench_generate, bench_tools);
criterion_main!(benches);
