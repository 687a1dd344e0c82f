use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elimination_core::constants::DEFAULT_GAMES_PER_PAIR;
use elimination_core::elimination::{evaluate, trivial_elimination};
use elimination_core::flow::MaxFlow;
use elimination_core::generate::random_division;
use elimination_core::network::EliminationNetwork;
use elimination_core::report::DivisionReport;
use elimination_core::standings::Standings;

fn create_division(team_count: usize) -> Standings {
    random_division(team_count, DEFAULT_GAMES_PER_PAIR, Some(42))
        .expect("generated division is valid")
}

fn bench_trivial_check(c: &mut Criterion) {
    let standings = create_division(30);

    c.bench_function("trivial_elimination_30_teams", |b| {
        b.iter(|| trivial_elimination(black_box(standings.roster()), 7))
    });
}

fn bench_network_build(c: &mut Criterion) {
    let standings = create_division(30);

    c.bench_function("network_build_30_teams", |b| {
        b.iter(|| EliminationNetwork::build(black_box(standings.roster()), 7))
    });
}

fn bench_max_flow(c: &mut Criterion) {
    let standings = create_division(30);
    let net = EliminationNetwork::build(standings.roster(), 7).expect("network builds");

    c.bench_function("max_flow_30_teams", |b| {
        b.iter(|| MaxFlow::solve(black_box(net.network()), net.source(), net.sink()))
    });
}

fn bench_single_query(c: &mut Criterion) {
    let standings = create_division(12);

    c.bench_function("evaluate_12_teams", |b| {
        b.iter(|| evaluate(black_box(&standings), 5))
    });
}

fn bench_division_report(c: &mut Criterion) {
    // Fewer teams for whole-division runs (one flow per team)
    let standings = create_division(20);

    c.bench_function("division_report_20_teams", |b| {
        b.iter(|| DivisionReport::evaluate(black_box(&standings)))
    });

    c.bench_function("division_report_20_teams_parallel", |b| {
        b.iter(|| DivisionReport::evaluate_parallel(black_box(&standings)))
    });
}

criterion_group!(
    benches,
    bench_trivial_check,
    bench_network_build,
    bench_max_flow,
    bench_single_query,
    bench_division_report,
);
criterion_main!(benches);
