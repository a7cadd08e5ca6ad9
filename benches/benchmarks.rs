use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use guestmatch::{
    Guest, InMemoryStore, Invite, MatchOptions, PreparedTerm, distance, find_invite,
    rank_candidates, score,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const FIRST: [&str; 8] = [
    "Ana", "Jo\u{00E3}o", "Maria", "Pedro", "Beatriz", "Lu\u{00ED}s", "Carla", "Rafael",
];
const LAST: [&str; 6] = [
    "Silva",
    "Souza",
    "Ferreira",
    "Concei\u{00E7}\u{00E3}o",
    "Lima",
    "Ara\u{00FA}jo",
];

/// Generate `n` guest names cycling through common first and last names.
fn generate_names(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("{} {} {i}", FIRST[i % FIRST.len()], LAST[i % LAST.len()]))
        .collect()
}

/// Group names into invites of up to four guests.
fn generate_invites(n: usize) -> Vec<Invite> {
    generate_names(n)
        .chunks(4)
        .enumerate()
        .map(|(i, chunk)| Invite {
            id: format!("invite-{i}"),
            label: format!("Family {i}"),
            contact: None,
            guests: chunk
                .iter()
                .enumerate()
                .map(|(j, name)| Guest {
                    id: format!("guest-{i}-{j}"),
                    name: name.clone(),
                    attending: None,
                })
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// 1. Scoring micro-benchmarks, one per tier
// ---------------------------------------------------------------------------

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let name = "Ana Paula Ferreira da Concei\u{00E7}\u{00E3}o";

    group.bench_function("exact", |b| {
        b.iter(|| score(black_box(name), black_box(name)));
    });
    group.bench_function("prefix", |b| {
        b.iter(|| score(black_box("ana paula"), black_box(name)));
    });
    group.bench_function("substring", |b| {
        b.iter(|| score(black_box("ferreira"), black_box(name)));
    });
    group.bench_function("word_level", |b| {
        b.iter(|| score(black_box("conceicao ferrera"), black_box(name)));
    });
    group.bench_function("no_match", |b| {
        b.iter(|| score(black_box("zzzxq"), black_box(name)));
    });

    group.finish();
}

fn bench_prepared_term(c: &mut Criterion) {
    let term = PreparedTerm::new("conceicao ferrera");
    let opts = MatchOptions::default();
    c.bench_function("prepared_term_word_level", |b| {
        b.iter(|| term.score(black_box("Ana Paula Ferreira da Concei\u{00E7}\u{00E3}o"), &opts));
    });
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance_20_chars", |b| {
        b.iter(|| distance(black_box("ana paula ferreira x"), black_box("ana beatriz souza yz")));
    });
}

// ---------------------------------------------------------------------------
// 2. Ranking throughput at guest-list sizes
// ---------------------------------------------------------------------------

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_candidates");
    let opts = MatchOptions::default();

    for size in [100, 1_000, 10_000] {
        let names = generate_names(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &names, |b, names| {
            b.iter(|| rank_candidates(black_box("maria conceicao"), black_box(names), &opts));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// 3. Full lookup including snapshot and flattening
// ---------------------------------------------------------------------------

fn bench_lookup(c: &mut Criterion) {
    let store = InMemoryStore::new(generate_invites(400));
    let opts = MatchOptions::default();
    c.bench_function("find_invite_400_guests", |b| {
        b.iter(|| find_invite(black_box("Pedro Lima 3"), &store, &opts));
    });
}

criterion_group!(
    benches,
    bench_score,
    bench_prepared_term,
    bench_distance,
    bench_rank,
    bench_lookup,
);
criterion_main!(benches);
