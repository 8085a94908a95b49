use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use verbal_calculator::interpreter::calculate;
use verbal_calculator::interpreter::syntax::expression_chain::Expression;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    let expressions = [
        "1 + 2".to_string(),
        "1 + 5 - 7 * 9 + 2".to_string(),
        "7 - 9 - 18 - 33 + 15 * 21 - 8 + 1 * 2".to_string(),
        "five minus seven + 17 * two times nine".to_string(),
        "seventy-two divided by 8 plus three-hundred-five times 2 minus 1,000".to_string(),
    ];
    for expression in expressions {
        let operations = Expression::from_text(&expression)
            .map(|chain| chain.len())
            .unwrap_or_default();
        group.throughput(Throughput::Elements(operations as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| calculate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
